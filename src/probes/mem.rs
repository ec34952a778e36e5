// font-locate/src/probes/mem.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A probe that reports a fixed list of records.

use crate::error::ProbeError;
use crate::probe::Probe;
use crate::record::FontRecord;

/// A probe that reports a fixed list of records, in the order given.
///
/// This is useful for seeding the process-wide cache with application-supplied fonts, and in
/// tests.
#[derive(Clone, Debug, Default)]
pub struct MemProbe {
    records: Vec<FontRecord>,
}

impl MemProbe {
    pub fn from_records<I>(records: I) -> MemProbe where I: IntoIterator<Item = FontRecord> {
        MemProbe { records: records.into_iter().collect() }
    }

    #[inline]
    pub fn records(&self) -> &[FontRecord] {
        &self.records
    }
}

impl Probe for MemProbe {
    #[inline]
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        Ok(self.records.clone())
    }
}
