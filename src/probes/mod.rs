// font-locate/src/probes/mod.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The font enumeration strategies.
//!
//! The system-specific probes (Fontconfig, the Windows registry, and the unsupported-platform
//! stub) back `SystemProbe`. The remaining probes (`fs`, `mem`, and `multi`) let applications
//! feed the cache fonts that the platform does not report.

pub mod fontconfig;
pub mod registry;
pub mod unsupported;

#[cfg(not(target_arch = "wasm32"))]
pub mod fs;

pub mod mem;
pub mod multi;

pub use self::fontconfig::FontconfigProbe;
pub use self::registry::WindowsRegistryProbe;
pub use self::unsupported::UnsupportedProbe;

#[cfg(not(target_arch = "wasm32"))]
pub use self::fs::FsProbe;

pub use self::mem::MemProbe;
pub use self::multi::MultiProbe;
