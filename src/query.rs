// font-locate/src/query.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Looks up font files in a cache by family or face name, style, and format.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::cache::FontCache;
use crate::record::FontRecord;
use crate::style::Style;

/// What to look for: a family or face name, the style bits that must be present, and optionally
/// a file format.
///
/// This object supports a method chaining style for idiomatic initialization; e.g.
///
///     # use font_locate::query::Query;
///     # use font_locate::style::Style;
///     println!("{:?}", Query::new("DejaVu Sans").style(Style::BOLD).format("ttf"));
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    name: String,
    style: Style,
    format: Option<String>,
}

impl Query {
    /// Creates a query for any face of the named family (or the named face), in any format.
    ///
    /// Names are compared case-insensitively.
    #[inline]
    pub fn new(name: &str) -> Query {
        Query {
            name: name.to_lowercase(),
            style: Style::NORMAL,
            format: None,
        }
    }

    /// Requires every bit in `style`. `Style::NORMAL` requires nothing.
    #[inline]
    pub fn style(&mut self, style: Style) -> &mut Query {
        self.style = style;
        self
    }

    /// Requires the given file format, e.g. "ttf". Compared case-insensitively.
    #[inline]
    pub fn format(&mut self, format: &str) -> &mut Query {
        self.format = Some(format.to_lowercase());
        self
    }

    /// Sets or clears the required file format.
    #[inline]
    pub fn maybe_format(&mut self, format: Option<&str>) -> &mut Query {
        self.format = format.map(str::to_lowercase);
        self
    }

    fn accepts(&self, record: &FontRecord) -> bool {
        let format_matches = match self.format {
            None => true,
            Some(ref format) => record.file_format() == format,
        };
        format_matches && record.styles().contains(self.style)
    }
}

impl FontCache {
    /// Returns the paths of every font matching `query`, without duplicates.
    ///
    /// Fonts of the family named by the query that have the requested style and format come
    /// first, in discovery order. After them come fonts of any family whose face name equals the
    /// query; these are not filtered by style or format.
    pub fn select(&self, query: &Query) -> Vec<PathBuf> {
        let mut seen: HashSet<&Path> = HashSet::new();
        let mut paths = vec![];

        for record in self.family(&query.name) {
            if query.accepts(record) && seen.insert(record.file_path()) {
                paths.push(record.file_path().to_owned())
            }
        }

        for record in self.records() {
            if record.name() == query.name && seen.insert(record.file_path()) {
                paths.push(record.file_path().to_owned())
            }
        }

        paths
    }

    /// Returns the path of the first font matching `query`, if any.
    #[inline]
    pub fn select_first(&self, query: &Query) -> Option<PathBuf> {
        self.select(query).into_iter().next()
    }

    /// Convenience form of `select`.
    pub fn get_fonts(&self, name: &str, style: Style, format: Option<&str>) -> Vec<PathBuf> {
        self.select(Query::new(name).style(style).maybe_format(format))
    }

    /// Convenience form of `select_first`.
    pub fn get_font(&self, name: &str, style: Style, format: Option<&str>) -> Option<PathBuf> {
        self.select_first(Query::new(name).style(style).maybe_format(format))
    }
}
