// font-locate/src/record.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Describes one font file discovered on the system.

use std::path::{Path, PathBuf};

use crate::style::Style;

/// Compression suffixes that wrap bitmap fonts, e.g. `helvR12.pcf.gz`.
pub(crate) const COMPRESSED_EXTENSIONS: [&str; 3] = ["gz", "bz2", "z"];

/// Describes one font file discovered on the system.
///
/// `family`, `name`, and `file_format` are always lower-cased, and `file_path` is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontRecord {
    family: String,
    name: String,
    styles: Style,
    file_format: String,
    file_path: PathBuf,
}

impl FontRecord {
    /// Creates a new record, normalizing the textual fields to lower case.
    ///
    /// Returns `None` if `file_path` is empty.
    pub fn new<P>(family: &str, name: &str, styles: Style, file_format: &str, file_path: P)
                  -> Option<FontRecord>
                  where P: Into<PathBuf> {
        let file_path = file_path.into();
        if file_path.as_os_str().is_empty() {
            return None
        }
        Some(FontRecord {
            family: family.trim().to_lowercase(),
            name: name.trim().to_lowercase(),
            styles,
            file_format: file_format.to_lowercase(),
            file_path,
        })
    }

    /// The lower-cased family name under which this record is grouped.
    #[inline]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The lower-cased face name, e.g. "dejavu sans bold".
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn styles(&self) -> Style {
        self.styles
    }

    /// The lower-cased file extension, e.g. "ttf" or "pcf".
    #[inline]
    pub fn file_format(&self) -> &str {
        &self.file_format
    }

    #[inline]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

/// Returns the lower-cased format of a font file, looking through a compression suffix.
///
/// `DejaVuSans.ttf` yields `ttf`; `helvR12.pcf.gz` yields `pcf`. A file without an extension
/// yields the empty string.
pub(crate) fn file_format_of(path: &Path) -> String {
    let path = strip_compression(path);
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_lowercase())
        .unwrap_or_default()
}

/// Returns the file name of `path` without its extension, looking through a compression suffix.
pub(crate) fn file_stem_of(path: &Path) -> String {
    strip_compression(path).file_stem()
                           .map(|stem| stem.to_string_lossy().into_owned())
                           .unwrap_or_default()
}

fn strip_compression(path: &Path) -> PathBuf {
    let compressed = path.extension()
                         .and_then(|extension| extension.to_str())
                         .map_or(false, |extension| {
                             COMPRESSED_EXTENSIONS.contains(&&*extension.to_lowercase())
                         });
    if compressed {
        // `a.pcf.gz` → `a.pcf`.
        path.with_extension("")
    } else {
        path.to_owned()
    }
}
