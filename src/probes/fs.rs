// font-locate/src/probes/fs.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A probe that finds font files in a directory or directories on disk.
//!
//! This probe uses the WalkDir abstraction from the `walkdir` crate to locate fonts. It never
//! opens the files: family, name, and style are guessed from the file name alone, e.g.
//! `DejaVuSans-BoldOblique.ttf` becomes family `dejavusans`, bold and italic.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[cfg(target_family = "windows")]
use std::ffi::OsString;
#[cfg(target_family = "windows")]
use std::os::windows::ffi::OsStringExt;
#[cfg(target_family = "windows")]
use winapi::shared::minwindef::{MAX_PATH, UINT};
#[cfg(target_family = "windows")]
use winapi::um::sysinfoapi;

use crate::error::ProbeError;
use crate::probe::Probe;
use crate::record::{self, FontRecord};
use crate::style::Style;

/// Formats recognized as font files, after looking through any compression suffix.
pub const FONT_FORMATS: [&str; 12] = [
    "ttf", "ttc", "otf", "otc", "pfa", "pfb", "pcf", "bdf", "fon", "fnt", "woff", "woff2",
];

const STYLE_WORDS: [&str; 3] = ["Bold", "Italic", "Oblique"];

/// A probe that finds font files in a directory or directories on disk.
#[derive(Clone, Debug)]
pub struct FsProbe {
    directories: Vec<PathBuf>,
}

impl Default for FsProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl FsProbe {
    /// Searches the default set of font directories on this platform.
    ///
    /// This makes a best effort to locate fonts in the typical platform directories, but it is
    /// too simple to pick up fonts that are stored in unusual locations but nevertheless properly
    /// installed.
    pub fn new() -> FsProbe {
        FsProbe::in_paths(default_font_directories())
    }

    /// Searches the given directories, recursively, in order.
    pub fn in_paths<I, P>(directories: I) -> FsProbe
                          where I: IntoIterator<Item = P>, P: Into<PathBuf> {
        FsProbe { directories: directories.into_iter().map(Into::into).collect() }
    }

    #[inline]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Walks every directory. Unreadable directories and entries are skipped.
    pub fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        let mut records = vec![];
        for directory in &self.directories {
            records.extend(discover_fonts(directory));
        }
        Ok(records)
    }
}

impl Probe for FsProbe {
    #[inline]
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        self.enumerate()
    }
}

fn discover_fonts(path: &Path) -> Vec<FontRecord> {
    let mut records = vec![];
    // Sorted so that discovery order does not depend on the file system.
    for directory_entry in WalkDir::new(path).sort_by(|a, b| a.file_name().cmp(b.file_name())) {
        let directory_entry = match directory_entry {
            Ok(directory_entry) => directory_entry,
            Err(err) => {
                debug!("skipping unreadable entry under {}: {}", path.display(), err);
                continue
            }
        };
        if !directory_entry.file_type().is_file() {
            continue
        }
        if let Some(record) = record_from_file_name(directory_entry.path()) {
            records.push(record)
        }
    }
    records
}

/// Guesses a record from a font file's name. Returns `None` if it isn't a font file.
pub(crate) fn record_from_file_name(path: &Path) -> Option<FontRecord> {
    let file_format = record::file_format_of(path);
    if !FONT_FORMATS.contains(&&*file_format) {
        return None
    }

    let name = record::file_stem_of(path);
    let styles = Style::from_name_fragments(&name, "");

    let mut family = name.clone();
    for word in &STYLE_WORDS {
        family = family.replace(word, "");
    }
    let family = family.trim_end_matches(|c: char| c == '-' || c == '_' || c.is_whitespace());
    let family = if family.is_empty() { &name } else { family };

    FontRecord::new(family, &name, styles, &file_format, path)
}

#[cfg(target_os = "android")]
fn default_font_directories() -> Vec<PathBuf> {
    vec![PathBuf::from("/system/fonts")]
}

#[cfg(target_family = "windows")]
fn default_font_directories() -> Vec<PathBuf> {
    unsafe {
        let mut buffer = vec![0; MAX_PATH];
        let len = sysinfoapi::GetWindowsDirectoryW(buffer.as_mut_ptr(), buffer.len() as UINT);
        if len == 0 {
            return vec![]
        }
        buffer.truncate(len as usize);

        let mut path = PathBuf::from(OsString::from_wide(&buffer));
        path.push("Fonts");
        vec![path]
    }
}

#[cfg(target_os = "macos")]
fn default_font_directories() -> Vec<PathBuf> {
    let mut directories = vec![
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("/Network/Library/Fonts"),
    ];
    if let Some(mut path) = dirs_next::home_dir() {
        path.push("Library");
        path.push("Fonts");
        directories.push(path);
    }
    directories
}

#[cfg(not(any(target_os = "android", target_family = "windows", target_os = "macos")))]
fn default_font_directories() -> Vec<PathBuf> {
    let mut directories = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/usr/X11R6/lib/X11/fonts"),
    ];
    if let Some(path) = dirs_next::home_dir() {
        directories.push(path.join(".fonts"));
    }
    if let Some(mut path) = dirs_next::data_dir() {
        path.push("fonts");
        directories.push(path);
    }
    directories
}
