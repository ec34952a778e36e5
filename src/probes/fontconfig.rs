// font-locate/src/probes/fontconfig.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A probe that lists the fonts installed on the system, as reported by Fontconfig's `fc-list`.
//!
//! On macOS and Windows, the Cargo feature `probe-fontconfig-default` makes this the system
//! probe (only if you know what you're doing).

use log::{debug, warn};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::error::ProbeError;
use crate::probe::Probe;
use crate::record::{self, FontRecord};
use crate::style::Style;

const DEFAULT_COMMAND: &str = "fc-list";

// `fc-list <pattern> <elements...>`; the empty pattern `:` matches every font.
const FC_LIST_ARGS: [&str; 6] = [":", "file", "family", "style", "fullname", "fullnamelang"];

const STYLE_PREFIX: &str = "style=";
const FULLNAME_PREFIX: &str = "fullname=";
const FULLNAMELANG_PREFIX: &str = "fullnamelang=";

const ENGLISH_TAGGED: &str = "fullnamelang=en";
const ENGLISH: &str = "en";

// Legacy bitmap formats whose extension is dropped from a file-derived face name.
const BITMAP_FORMATS: [&str; 2] = ["pcf", "bdf"];

/// A probe that lists the fonts installed on the system, as reported by Fontconfig's `fc-list`.
#[derive(Clone, Debug)]
pub struct FontconfigProbe {
    command: OsString,
}

impl Default for FontconfigProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl FontconfigProbe {
    /// Creates a probe that runs `fc-list` from `PATH`.
    #[inline]
    pub fn new() -> FontconfigProbe {
        FontconfigProbe::with_command(DEFAULT_COMMAND)
    }

    /// Creates a probe that runs the given `fc-list`-compatible program instead.
    #[inline]
    pub fn with_command<S>(command: S) -> FontconfigProbe where S: Into<OsString> {
        FontconfigProbe { command: command.into() }
    }

    /// Runs `fc-list` and parses its output.
    ///
    /// A missing command or a non-zero exit status yields an empty list.
    pub fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        let output = match Command::new(&self.command).args(&FC_LIST_ARGS).output() {
            Ok(output) => output,
            Err(err) => {
                warn!("failed to run {:?}: {}", self.command, err);
                return Ok(vec![])
            }
        };
        if !output.status.success() {
            warn!("{:?} exited with {}", self.command, output.status);
            return Ok(vec![])
        }
        Ok(parse_fc_list_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl Probe for FontconfigProbe {
    #[inline]
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        self.enumerate()
    }
}

/// Parses the output of `fc-list : file family style fullname fullnamelang`, one font per line.
pub(crate) fn parse_fc_list_output(output: &str) -> Vec<FontRecord> {
    let mut records = vec![];
    for line in output.lines().filter(|line| !line.trim().is_empty()) {
        match parse_fc_list_line(line) {
            Some(record) => records.push(record),
            None => debug!("skipping malformed fc-list line: {:?}", line),
        }
    }
    records
}

// A line looks like:
//
//     /usr/share/fonts/DejaVuSans-Bold.ttf: DejaVu Sans:style=Bold:fullname=DejaVu Sans Bold:fullnamelang=en
//
// Only the path is mandatory. Each list-valued element is comma-separated, and the tag of a
// tagged element sits on its first entry only.
pub(crate) fn parse_fc_list_line(line: &str) -> Option<FontRecord> {
    let mut fields = line.split(':');
    let file_path = fields.next()?.trim();
    if file_path.is_empty() {
        return None
    }
    let families = fields.next()?.trim();

    let (mut style, mut fullname, mut fullnamelang) = ("", "", "");
    for field in fields {
        if field.starts_with(STYLE_PREFIX) {
            style = &field[STYLE_PREFIX.len()..];
        } else if field.starts_with(FULLNAME_PREFIX) {
            fullname = field;
        } else if field.starts_with(FULLNAMELANG_PREFIX) {
            fullnamelang = field;
        }
    }

    let path = Path::new(file_path);
    let name = match english_full_name(fullname, fullnamelang) {
        Some(name) => name.to_owned(),
        None => name_from_file(path),
    };
    let family = families.split(',')
                         .map(str::trim)
                         .find(|family| !family.is_empty())
                         .unwrap_or(&*name);

    FontRecord::new(family,
                    &name,
                    Style::from_name_fragments(style, ""),
                    &record::file_format_of(path),
                    path)
}

// Derives a face name from the file name: `DejaVuSans.ttf` stays whole, while `helvR12.pcf.gz`
// and `courO10.bdf` become `helvR12` and `courO10`.
fn name_from_file(path: &Path) -> String {
    let file_format = record::file_format_of(path);
    if BITMAP_FORMATS.contains(&&*file_format) {
        return record::file_stem_of(path)
    }
    path.file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// Finds the full name whose language is English: the entry of `fullname` at the position where
// `fullnamelang` lists `en`.
fn english_full_name<'a>(fullname: &'a str, fullnamelang: &str) -> Option<&'a str> {
    let languages: Vec<&str> = fullnamelang.split(',').collect();
    let index = languages.iter()
                         .position(|&language| language == ENGLISH_TAGGED)
                         .or_else(|| languages.iter().position(|&language| language == ENGLISH))?;
    let entry = fullname.split(',').nth(index)?;
    let entry = if entry.starts_with(FULLNAME_PREFIX) {
        &entry[FULLNAME_PREFIX.len()..]
    } else {
        entry
    };
    if entry.trim().is_empty() {
        None
    } else {
        Some(entry)
    }
}
