// font-locate/tests/select_font.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Matching against a cache built from known records.

use font_locate::cache::FontCache;
use font_locate::query::Query;
use font_locate::record::FontRecord;
use font_locate::style::Style;
use font_locate::{BOLD, ITALIC, NORMAL};
use std::path::PathBuf;

fn font(family: &str, name: &str, styles: Style, file_format: &str, file_path: &str)
        -> FontRecord {
    FontRecord::new(family, name, styles, file_format, file_path).unwrap()
}

fn paths(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

fn dejavu_cache() -> FontCache {
    FontCache::from_records(vec![
        font("DejaVu Sans", "DejaVu Sans Book", NORMAL, "ttf", "/fonts/DejaVuSans.ttf"),
        font("DejaVu Sans", "DejaVu Sans Bold", BOLD, "ttf", "/fonts/DejaVuSans-Bold.ttf"),
        font("DejaVu Sans", "DejaVu Sans Oblique", ITALIC, "ttf", "/fonts/DejaVuSans-Oblique.ttf"),
        font("DejaVu Sans",
             "DejaVu Sans Bold Oblique",
             BOLD | ITALIC,
             "ttf",
             "/fonts/DejaVuSans-BoldOblique.ttf"),
        font("DejaVu Sans", "DejaVu Sans Bold", BOLD, "pcf", "/fonts/misc/dejavu-bold.pcf.gz"),
        font("Noto Serif", "Noto Serif", NORMAL, "otf", "/fonts/NotoSerif-Regular.otf"),
    ])
}

#[test]
pub fn single_bold_record() {
    let cache = FontCache::from_records(vec![font("sans", "sans bold", BOLD, "ttf", "/a/b.ttf")]);
    assert_eq!(cache.get_fonts("sans", BOLD, None), paths(&["/a/b.ttf"]));
    assert_eq!(cache.get_fonts("sans", ITALIC, None), paths(&[]));
    assert_eq!(cache.get_fonts("sans", NORMAL, None), paths(&["/a/b.ttf"]));
    assert_eq!(cache.get_font("sans bold", NORMAL, None), Some(PathBuf::from("/a/b.ttf")));
}

#[test]
pub fn family_members_in_discovery_order() {
    let cache = FontCache::from_records(vec![
        font("serif", "serif bold", BOLD, "ttf", "/fonts/serif-bold.ttf"),
        font("serif", "serif", NORMAL, "ttf", "/fonts/serif.ttf"),
        font("serif", "serif", NORMAL, "ttf", "/fonts/serif.ttf"),
    ]);
    assert_eq!(cache.get_fonts("serif", NORMAL, None),
               paths(&["/fonts/serif-bold.ttf", "/fonts/serif.ttf"]));
}

#[test]
pub fn normal_matches_every_style() {
    let cache = dejavu_cache();
    assert_eq!(cache.get_fonts("dejavu sans", NORMAL, None).len(),
               cache.family("dejavu sans").len());
}

#[test]
pub fn style_bits_must_all_be_present() {
    let cache = dejavu_cache();
    assert_eq!(cache.get_fonts("dejavu sans", BOLD, None),
               paths(&["/fonts/DejaVuSans-Bold.ttf",
                       "/fonts/DejaVuSans-BoldOblique.ttf",
                       "/fonts/misc/dejavu-bold.pcf.gz"]));
    assert_eq!(cache.get_fonts("dejavu sans", BOLD | ITALIC, None),
               paths(&["/fonts/DejaVuSans-BoldOblique.ttf"]));
}

#[test]
pub fn more_style_bits_never_widen_the_result() {
    let cache = dejavu_cache();
    let styles = [NORMAL, BOLD, ITALIC, BOLD | ITALIC];
    for &narrow in &styles {
        for &wide in &styles {
            if !narrow.contains(wide) {
                continue
            }
            let narrow_paths = cache.get_fonts("dejavu sans", narrow, None);
            let wide_paths = cache.get_fonts("dejavu sans", wide, None);
            assert!(narrow_paths.iter().all(|path| wide_paths.contains(path)),
                    "{:?} is not a subset of {:?}",
                    narrow,
                    wide);
        }
    }
}

#[test]
pub fn format_filter_is_case_insensitive() {
    let cache = dejavu_cache();
    assert_eq!(cache.get_fonts("DejaVu Sans", BOLD, Some("PCF")),
               paths(&["/fonts/misc/dejavu-bold.pcf.gz"]));
    assert_eq!(cache.get_fonts("dejavu sans", NORMAL, Some("otf")), paths(&[]));
}

#[test]
pub fn lookup_is_case_insensitive() {
    let cache = dejavu_cache();
    assert_eq!(cache.get_fonts("Noto Serif", NORMAL, None),
               cache.get_fonts("noto serif", NORMAL, None));
    assert_eq!(cache.get_fonts("NOTO SERIF", NORMAL, None),
               paths(&["/fonts/NotoSerif-Regular.otf"]));
}

#[test]
pub fn face_names_are_matched_after_families() {
    let cache = dejavu_cache();
    assert_eq!(cache.get_fonts("DejaVu Sans Bold", NORMAL, None),
               paths(&["/fonts/DejaVuSans-Bold.ttf", "/fonts/misc/dejavu-bold.pcf.gz"]));
}

#[test]
pub fn face_name_matches_follow_family_matches_without_duplicates() {
    // "noto serif" is both a family and the face name of a record in another family.
    let cache = FontCache::from_records(vec![
        font("noto serif", "noto serif", NORMAL, "otf", "/fonts/NotoSerif-Regular.otf"),
        font("noto", "noto serif", NORMAL, "ttf", "/fonts/Noto-Serif.ttf"),
    ]);
    assert_eq!(cache.get_fonts("noto serif", NORMAL, None),
               paths(&["/fonts/NotoSerif-Regular.otf", "/fonts/Noto-Serif.ttf"]));
}

#[test]
pub fn face_name_matches_ignore_style_and_format() {
    let cache = FontCache::from_records(vec![
        font("sans", "sans", NORMAL, "ttf", "/fonts/sans.ttf"),
        font("sans", "sans bold", BOLD, "ttf", "/fonts/sans-bold.ttf"),
    ]);
    assert_eq!(cache.get_fonts("sans", BOLD, None),
               paths(&["/fonts/sans-bold.ttf", "/fonts/sans.ttf"]));
    assert_eq!(cache.get_fonts("sans bold", ITALIC, Some("otf")), paths(&["/fonts/sans-bold.ttf"]));
}

#[test]
pub fn first_font_is_head_of_all_fonts() {
    let cache = dejavu_cache();
    for &name in &["dejavu sans", "DejaVu Sans Bold", "noto serif", "comic sans"] {
        for &style in &[NORMAL, BOLD, ITALIC, BOLD | ITALIC] {
            let all = cache.get_fonts(name, style, None);
            assert_eq!(cache.get_font(name, style, None), all.first().cloned());
        }
    }
    assert_eq!(cache.get_font("comic sans", NORMAL, None), None);
}

#[test]
pub fn every_record_is_found_by_its_family() {
    let cache = dejavu_cache();
    for record in cache.records() {
        let found = cache.get_fonts(record.family(), NORMAL, None);
        assert!(found.iter().any(|path| path == record.file_path()));
    }
}

#[test]
pub fn query_builder_matches_convenience_form() {
    let cache = dejavu_cache();
    assert_eq!(cache.select(Query::new("DejaVu Sans").style(Style::ITALIC).format("TTF")),
               cache.get_fonts("dejavu sans", ITALIC, Some("ttf")));
    assert_eq!(cache.select_first(&Query::new("dejavu sans")),
               Some(PathBuf::from("/fonts/DejaVuSans.ttf")));
}
