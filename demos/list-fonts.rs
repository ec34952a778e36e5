// font-locate/demos/list-fonts.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lists all fonts on the system.

use prettytable::{Attr, Cell, Row, Table};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(vec![
        Cell::new("Family").with_style(Attr::Bold),
        Cell::new("Name").with_style(Attr::Bold),
        Cell::new("Style").with_style(Attr::Bold),
        Cell::new("Format").with_style(Attr::Bold),
        Cell::new("Path").with_style(Attr::Bold),
    ]));

    for (family, name, styles, file_format, file_path) in &font_locate::list_fonts()? {
        table.add_row(Row::new(vec![
            Cell::new(&family),
            Cell::new(&name),
            Cell::new(&styles.to_string()),
            Cell::new(&file_format),
            Cell::new(&file_path.display().to_string()),
        ]));
    }

    table.printstd();
    Ok(())
}
