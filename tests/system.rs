// font-locate/tests/system.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// The process-wide cache. Every test seeds it with the same records first, so whichever test
// runs first populates it and the rest see the same fonts.

use font_locate::probes::MemProbe;
use font_locate::record::FontRecord;
use font_locate::style::Style;
use font_locate::system;
use font_locate::{get_font, get_fonts, init, init_with_probe, list_fonts};
use font_locate::{BOLD, ITALIC, NORMAL};
use std::path::PathBuf;
use std::thread;

fn seed() {
    let fonts = vec![
        ("Liberation Sans", "Liberation Sans Regular", NORMAL, "/fonts/LiberationSans-Regular.ttf"),
        ("Liberation Sans", "Liberation Sans Bold", BOLD, "/fonts/LiberationSans-Bold.ttf"),
        ("Liberation Sans", "Liberation Sans Italic", ITALIC, "/fonts/LiberationSans-Italic.ttf"),
        ("Liberation Mono", "Liberation Mono", NORMAL, "/fonts/LiberationMono-Regular.ttf"),
    ];
    let probe = MemProbe::from_records(fonts.into_iter().map(|(family, name, styles, path)| {
        FontRecord::new(family, name, styles, "ttf", path).unwrap()
    }));
    init_with_probe(&probe).unwrap();
}

#[test]
pub fn init_is_idempotent() {
    seed();
    let before: Vec<_> = list_fonts().unwrap().iter().collect();
    init().unwrap();
    init().unwrap();
    let after: Vec<_> = list_fonts().unwrap().iter().collect();
    assert_eq!(before, after);
    assert!(system::is_initialized());
}

#[test]
pub fn seeding_twice_keeps_the_first_population() {
    seed();
    let other = MemProbe::from_records(vec![
        FontRecord::new("Other", "Other", NORMAL, "ttf", "/fonts/Other.ttf").unwrap(),
    ]);
    assert_eq!(init_with_probe(&other), Ok(false));
    assert!(get_fonts("other", NORMAL, None).unwrap().is_empty());
}

#[test]
pub fn list_fonts_reports_every_record() {
    seed();
    let list = list_fonts().unwrap();
    let families: Vec<String> = list.iter().map(|(family, ..)| family).collect();
    assert_eq!(families,
               ["liberation sans", "liberation sans", "liberation sans", "liberation mono"]);
    let (_, name, styles, file_format, file_path) = list.iter().nth(1).unwrap();
    assert_eq!(name, "liberation sans bold");
    assert_eq!(styles, Style::BOLD);
    assert_eq!(file_format, "ttf");
    assert_eq!(file_path, PathBuf::from("/fonts/LiberationSans-Bold.ttf"));
}

#[test]
pub fn get_fonts_by_family_and_style() {
    seed();
    assert_eq!(get_fonts("Liberation Sans", BOLD, None).unwrap(),
               vec![PathBuf::from("/fonts/LiberationSans-Bold.ttf")]);
    assert_eq!(get_fonts("liberation sans", NORMAL, Some("ttf")).unwrap().len(), 3);
    assert!(get_fonts("liberation sans", BOLD | ITALIC, None).unwrap().is_empty());
    assert!(get_fonts("liberation sans", NORMAL, Some("otf")).unwrap().is_empty());
}

#[test]
pub fn get_font_by_face_name() {
    seed();
    assert_eq!(get_font("LIBERATION SANS ITALIC", NORMAL, None).unwrap(),
               Some(PathBuf::from("/fonts/LiberationSans-Italic.ttf")));
    assert_eq!(get_font("Comic Sans MS", NORMAL, None).unwrap(), None);
}

#[test]
pub fn concurrent_callers_see_the_same_cache() {
    let threads: Vec<_> = (0..8).map(|_| {
        thread::spawn(|| {
            seed();
            get_fonts("liberation mono", NORMAL, None).unwrap()
        })
    }).collect();
    for thread in threads {
        assert_eq!(thread.join().unwrap(),
                   vec![PathBuf::from("/fonts/LiberationMono-Regular.ttf")]);
    }
}
