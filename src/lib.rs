// font-locate/src/lib.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `font-locate` finds the file of an installed font by family or face name, style, and format.
//!
//! ## Introduction
//!
//! The first call into the crate enumerates the installed fonts once, using the strategy native
//! to the platform (a *probe*), and caches them for the life of the process:
//!
//! * On Windows, the font registrations in the registry are read.
//!
//! * On Linux and other Unix systems, Fontconfig's `fc-list` command is run.
//!
//! * On macOS there is no backend yet; every call fails with
//!   `ProbeError::PlatformUnsupported`.
//!
//! Enable the Cargo feature `probe-fontconfig-default` to use `fc-list` everywhere.
//!
//! ## Usage
//!
//! ```no_run
//! # fn main() -> Result<(), font_locate::error::ProbeError> {
//! if let Some(path) = font_locate::get_font("DejaVu Sans", font_locate::BOLD, Some("ttf"))? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Lookups are case-insensitive. A name is first treated as a family name (all faces of the
//! family with the requested style bits); face names such as "DejaVu Sans Bold" are matched
//! too.
//!
//! Applications with fonts of their own can build a `FontCache` from any `Probe` and query it
//! directly, or seed the process-wide cache with `init_with_probe`.

#![warn(missing_debug_implementations)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;

pub mod cache;
pub mod error;
pub mod probe;
pub mod probes;
pub mod query;
pub mod record;
pub mod style;
pub mod system;

pub use crate::system::{get_font, get_fonts, init, init_with_probe, list_fonts};

/// Neither bold nor italic.
pub const NORMAL: style::Style = style::Style::NORMAL;
/// A bold face.
pub const BOLD: style::Style = style::Style::BOLD;
/// An italic or oblique face.
pub const ITALIC: style::Style = style::Style::ITALIC;
