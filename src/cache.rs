// font-locate/src/cache.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The records discovered by a probe, grouped by family.

use log::{debug, info};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::ProbeError;
use crate::probe::Probe;
use crate::record::FontRecord;
use crate::style::Style;

/// One entry of a font listing: `(family, name, styles, file format, file path)`.
pub type FontEntry = (String, String, Style, String, PathBuf);

/// The records discovered by a probe, grouped by family.
///
/// Families keep the order in which they were first discovered, and the records of a family
/// keep their discovery order. A cache never changes once built.
#[derive(Clone, Debug, Default)]
pub struct FontCache {
    families: Vec<FamilyEntry>,
    family_indices: HashMap<String, usize>,
}

#[derive(Clone, Debug)]
struct FamilyEntry {
    family_name: String,
    records: Vec<FontRecord>,
}

impl FontCache {
    /// Runs the probe once and groups everything it reports.
    pub fn from_probe<P>(probe: &P) -> Result<FontCache, ProbeError> where P: ?Sized + Probe {
        let cache = FontCache::from_records(probe.enumerate()?);
        info!("font cache populated: {} fonts in {} families",
              cache.len(),
              cache.families.len());
        Ok(cache)
    }

    /// Groups the given records by family, preserving their order.
    pub fn from_records<I>(records: I) -> FontCache where I: IntoIterator<Item = FontRecord> {
        let mut cache = FontCache::default();
        for record in records {
            cache.insert(record);
        }
        cache
    }

    fn insert(&mut self, record: FontRecord) {
        let index = match self.family_indices.get(record.family()) {
            Some(&index) => index,
            None => {
                debug!("discovered family {:?}", record.family());
                let index = self.families.len();
                self.family_indices.insert(record.family().to_owned(), index);
                self.families.push(FamilyEntry {
                    family_name: record.family().to_owned(),
                    records: vec![],
                });
                index
            }
        };
        self.families[index].records.push(record)
    }

    /// Returns the names of all families, in discovery order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|family| &*family.family_name)
    }

    /// Returns the records of a family, looked up by its lower-cased name.
    pub fn family(&self, family_name: &str) -> &[FontRecord] {
        match self.family_indices.get(family_name) {
            Some(&index) => &self.families[index].records,
            None => &[],
        }
    }

    /// Returns every record, family by family.
    pub fn records(&self) -> impl Iterator<Item = &FontRecord> {
        self.families.iter().flat_map(|family| family.records.iter())
    }

    /// Returns the total number of records.
    pub fn len(&self) -> usize {
        self.families.iter().map(|family| family.records.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// A listing of every font in a cache.
///
/// Iterating is restartable: each call to `iter` reads the cache again from the start. A listing
/// of an empty cache yields exactly one `FontEntry::default()` rather than nothing; callers that
/// count fonts should check `FontCache::is_empty` instead.
#[derive(Clone, Debug)]
pub struct FontList {
    cache: Arc<FontCache>,
}

impl FontList {
    #[inline]
    pub fn new(cache: Arc<FontCache>) -> FontList {
        FontList { cache }
    }

    #[inline]
    pub fn iter(&self) -> FontListIter<'_> {
        FontListIter {
            cache: &self.cache,
            family_index: 0,
            record_index: 0,
            sentinel_pending: self.cache.is_empty(),
        }
    }
}

impl<'a> IntoIterator for &'a FontList {
    type Item = FontEntry;
    type IntoIter = FontListIter<'a>;

    #[inline]
    fn into_iter(self) -> FontListIter<'a> {
        self.iter()
    }
}

/// An iterator over the entries of a `FontList`.
#[derive(Clone, Debug)]
pub struct FontListIter<'a> {
    cache: &'a FontCache,
    family_index: usize,
    record_index: usize,
    sentinel_pending: bool,
}

impl<'a> Iterator for FontListIter<'a> {
    type Item = FontEntry;

    fn next(&mut self) -> Option<FontEntry> {
        if self.sentinel_pending {
            self.sentinel_pending = false;
            return Some(Default::default())
        }
        while let Some(family) = self.cache.families.get(self.family_index) {
            if let Some(record) = family.records.get(self.record_index) {
                self.record_index += 1;
                return Some((record.family().to_owned(),
                             record.name().to_owned(),
                             record.styles(),
                             record.file_format().to_owned(),
                             record.file_path().to_owned()))
            }
            self.family_index += 1;
            self.record_index = 0;
        }
        None
    }
}
