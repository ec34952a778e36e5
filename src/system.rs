// font-locate/src/system.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The process-wide font cache.
//!
//! The cache starts out uninitialized and is populated by the first call to any function in this
//! module, by running `SystemProbe` once. Population happens under a mutex: concurrent callers
//! block until it completes and never see a partial cache. Afterwards the cache is shared
//! read-only.
//!
//! If the probe fails (only `UnsupportedProbe` does), the error is returned and the cache stays
//! uninitialized, so every later call fails the same way.

use log::debug;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::cache::{FontCache, FontList};
use crate::error::ProbeError;
use crate::probe::{Probe, SystemProbe};
use crate::query::Query;
use crate::style::Style;

enum CacheState {
    Uninitialized,
    Populated(Arc<FontCache>),
}

lazy_static! {
    static ref SYSTEM_CACHE: Mutex<CacheState> = Mutex::new(CacheState::Uninitialized);
}

fn lock_state() -> MutexGuard<'static, CacheState> {
    // Population either stores a complete cache or nothing, so a poisoned state is still valid.
    SYSTEM_CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// Returns the cache and whether this call populated it.
fn populate_with<F>(populate: F) -> Result<(Arc<FontCache>, bool), ProbeError>
                    where F: FnOnce() -> Result<FontCache, ProbeError> {
    let mut state = lock_state();
    if let CacheState::Populated(ref cache) = *state {
        return Ok((cache.clone(), false))
    }
    let cache = Arc::new(populate()?);
    *state = CacheState::Populated(cache.clone());
    Ok((cache, true))
}

fn system_cache() -> Result<Arc<FontCache>, ProbeError> {
    populate_with(|| {
        let probe = SystemProbe::new();
        debug!("populating font cache with {:?}", probe);
        FontCache::from_probe(&probe)
    }).map(|(cache, _)| cache)
}

/// Populates the process-wide cache with the platform's probe, unless already populated.
pub fn init() -> Result<(), ProbeError> {
    system_cache().map(|_| ())
}

/// Populates the process-wide cache with a caller-chosen probe instead of the platform's.
///
/// Returns `Ok(false)` without running the probe if the cache is already populated.
pub fn init_with_probe<P>(probe: &P) -> Result<bool, ProbeError> where P: ?Sized + Probe {
    populate_with(|| FontCache::from_probe(probe)).map(|(_, populated)| populated)
}

/// Returns true if and only if the process-wide cache has been populated.
pub fn is_initialized() -> bool {
    match *lock_state() {
        CacheState::Uninitialized => false,
        CacheState::Populated(_) => true,
    }
}

/// Lists every cached font as `(family, name, styles, file format, file path)`.
///
/// If no fonts were found, the listing yields a single empty entry.
pub fn list_fonts() -> Result<FontList, ProbeError> {
    system_cache().map(FontList::new)
}

/// Returns the paths of the fonts matching `name`, `style`, and `format`.
///
/// See `FontCache::select` for the matching rules.
pub fn get_fonts(name: &str, style: Style, format: Option<&str>)
                 -> Result<Vec<PathBuf>, ProbeError> {
    let cache = system_cache()?;
    Ok(cache.select(Query::new(name).style(style).maybe_format(format)))
}

/// Returns the path of the first font `get_fonts` would return, if any.
pub fn get_font(name: &str, style: Style, format: Option<&str>)
                -> Result<Option<PathBuf>, ProbeError> {
    let cache = system_cache()?;
    Ok(cache.select_first(Query::new(name).style(style).maybe_format(format)))
}
