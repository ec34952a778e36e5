// font-locate/src/error.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that a probe can return while enumerating installed fonts.

use thiserror::Error;

/// Reasons why a probe might fail to enumerate the installed fonts.
///
/// Missing or broken enumeration sources are *not* errors: those probes report an empty list
/// instead. The only hard failure is a platform with no enumeration backend at all.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ProbeError {
    /// No font enumeration backend exists for this platform.
    #[error("font enumeration is not supported on platform `{platform}`")]
    PlatformUnsupported {
        /// The name of the host platform, as reported by `std::env::consts::OS`.
        platform: String,
    },
}
