// font-locate/src/style.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Style bits that distinguish the faces of a family.

use std::fmt::{self, Display, Formatter};

bitflags! {
    /// A combination of the bold and italic style bits.
    ///
    /// `NORMAL` is the empty set. Bits combine with `|`:
    ///
    ///     # use font_locate::style::Style;
    ///     let bold_italic = Style::BOLD | Style::ITALIC;
    ///     assert!(bold_italic.contains(Style::BOLD));
    pub struct Style: u8 {
        /// Neither bold nor italic.
        const NORMAL = 0x00;
        /// A bold face.
        const BOLD = 0x01;
        /// An italic or oblique face.
        const ITALIC = 0x02;
    }
}

impl Default for Style {
    #[inline]
    fn default() -> Style {
        Style::NORMAL
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match (self.contains(Style::BOLD), self.contains(Style::ITALIC)) {
            (false, false) => f.write_str("Normal"),
            (true, false) => f.write_str("Bold"),
            (false, true) => f.write_str("Italic"),
            (true, true) => f.write_str("Bold Italic"),
        }
    }
}

impl Style {
    /// Detects style bits by raw substring search in a face name or style string.
    ///
    /// `Bold` sets `BOLD`; `Italic` or `Oblique` sets `ITALIC`. The search is case-sensitive and
    /// does not look at word boundaries, so a family named e.g. "Boldini" is reported as bold.
    /// `separator` is prepended to each fragment before searching; the registry probe passes
    /// `" "` so that only a space-separated suffix counts.
    pub fn from_name_fragments(text: &str, separator: &str) -> Style {
        let contains = |fragment: &str| text.contains(&format!("{}{}", separator, fragment));
        let mut style = Style::NORMAL;
        if contains("Bold") {
            style |= Style::BOLD;
        }
        if contains("Italic") || contains("Oblique") {
            style |= Style::ITALIC;
        }
        style
    }
}
