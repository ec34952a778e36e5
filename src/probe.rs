// font-locate/src/probe.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The interface that each platform-specific font enumeration strategy implements.

use crate::error::ProbeError;
use crate::record::FontRecord;

#[cfg(all(target_family = "windows", not(feature = "probe-fontconfig-default")))]
pub use crate::probes::registry::WindowsRegistryProbe as SystemProbe;
#[cfg(all(any(target_os = "macos", target_os = "ios"),
          not(feature = "probe-fontconfig-default")))]
pub use crate::probes::unsupported::UnsupportedProbe as SystemProbe;
#[cfg(any(not(any(target_family = "windows", target_os = "macos", target_os = "ios")),
          feature = "probe-fontconfig-default"))]
pub use crate::probes::fontconfig::FontconfigProbe as SystemProbe;

/// A strategy for enumerating the font files installed on the host.
///
/// Probes that rely on an external source (a registry key, a command) report an empty list when
/// that source is missing or broken. Individual unparsable entries are skipped. An `Err` means
/// the probe cannot work on this host at all.
pub trait Probe {
    /// Enumerates the fonts this probe can see, in discovery order.
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError>;
}

impl<'a, P> Probe for &'a P where P: ?Sized + Probe {
    #[inline]
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        (**self).enumerate()
    }
}

impl<P> Probe for Box<P> where P: ?Sized + Probe {
    #[inline]
    fn enumerate(&self) -> Result<Vec<FontRecord>, ProbeError> {
        (**self).enumerate()
    }
}
