// font-locate/src/probes/multi.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A probe that encapsulates multiple probes and runs them as a group.
//!
//! This is useful when an application wants the installed system fonts plus some fonts of its
//! own, e.g. `MultiProbe::from_probes(vec![Box::new(SystemProbe::new()), Box::new(fs_probe)])`.

use crate::error::ProbeError;
use crate::probe::Probe;
use crate::record::FontRecord;

/// A probe that encapsulates multiple probes and runs them as a group.
#[allow(missing_debug_implementations)]
pub struct MultiProbe {
    subprobes: Vec<Box<dyn Probe + Send + Sync>>,
}

impl MultiProbe {
    /// Creates a new probe that reports the records of the supplied probes, in order.
    pub fn from_probes(subprobes: Vec<Box<dyn Probe + Send + Sync>>) -> MultiProbe {
        MultiProbe { subprobes }
    }

    /// Runs every subprobe in turn. The first hard failure aborts the whole enumeration.
    pub fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        let mut records = vec![];
        for subprobe in &self.subprobes {
            records.extend(subprobe.enumerate()?.into_iter())
        }
        Ok(records)
    }
}

impl Probe for MultiProbe {
    #[inline]
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        self.enumerate()
    }
}
