// font-locate/demos/match-font.rs
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Looks up fonts by name.

use font_locate::style::Style;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        println!("Usage:\n\tmatch-font \"DejaVu Sans\" [bold|italic|bold-italic] [ttf]");
        std::process::exit(1);
    }

    let style = match args.get(2).map(|style| &**style) {
        None | Some("normal") => Style::NORMAL,
        Some("bold") => Style::BOLD,
        Some("italic") => Style::ITALIC,
        Some("bold-italic") => Style::BOLD | Style::ITALIC,
        Some(other) => {
            println!("unknown style `{}`", other);
            std::process::exit(1);
        }
    };
    let format = args.get(3).map(|format| &**format);

    let paths = font_locate::get_fonts(&args[1], style, format)?;
    if paths.is_empty() {
        println!("No font found.");
    }
    for path in paths {
        println!("Path: {}", path.display());
    }

    Ok(())
}
