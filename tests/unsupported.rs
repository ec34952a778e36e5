// font-locate/tests/unsupported.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// A probe failure leaves the process-wide cache uninitialized. This is one test because the
// cache is shared by the whole test binary.

use font_locate::error::ProbeError;
use font_locate::probes::{MemProbe, UnsupportedProbe};
use font_locate::system::is_initialized;
use font_locate::{init_with_probe, list_fonts, NORMAL};

#[test]
pub fn unsupported_probe_blocks_population_until_handled() {
    #[cfg(all(any(target_os = "macos", target_os = "ios"),
              not(feature = "probe-fontconfig-default")))]
    {
        assert!(font_locate::init().is_err());
        assert!(font_locate::get_fonts("helvetica", NORMAL, None).is_err());
        assert!(!is_initialized());
    }

    let probe = UnsupportedProbe::for_platform("plan9");
    let expected = ProbeError::PlatformUnsupported { platform: "plan9".to_owned() };
    assert_eq!(init_with_probe(&probe), Err(expected.clone()));
    assert!(!is_initialized());
    assert_eq!(init_with_probe(&probe), Err(expected));
    assert!(!is_initialized());

    // Once the caller falls back to a working probe, the cache can still be populated.
    assert_eq!(init_with_probe(&MemProbe::default()), Ok(true));
    assert!(is_initialized());
    assert!(font_locate::get_fonts("helvetica", NORMAL, None).unwrap().is_empty());

    let entries: Vec<_> = list_fonts().unwrap().iter().collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].0.is_empty() && entries[0].4.as_os_str().is_empty());
}
