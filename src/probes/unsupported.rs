// font-locate/src/probes/unsupported.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The probe for platforms without a native enumeration backend (currently macOS).

use std::env;

use crate::error::ProbeError;
use crate::probe::Probe;
use crate::record::FontRecord;

/// A probe that always fails with `ProbeError::PlatformUnsupported`.
///
/// Unlike the other probes, which degrade to an empty list, this one refuses outright: there is
/// no font enumeration on this platform to degrade from.
#[derive(Clone, Debug)]
pub struct UnsupportedProbe {
    platform: String,
}

impl Default for UnsupportedProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl UnsupportedProbe {
    /// Creates a probe that reports the host platform as unsupported.
    #[inline]
    pub fn new() -> UnsupportedProbe {
        UnsupportedProbe::for_platform(env::consts::OS)
    }

    /// Creates a probe that reports the named platform as unsupported.
    #[inline]
    pub fn for_platform(platform: &str) -> UnsupportedProbe {
        UnsupportedProbe { platform: platform.to_owned() }
    }

    pub fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        Err(ProbeError::PlatformUnsupported { platform: self.platform.clone() })
    }
}

impl Probe for UnsupportedProbe {
    #[inline]
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        self.enumerate()
    }
}
