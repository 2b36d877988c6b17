//! Write `gradient.html` showing every known colormap sampled with
//! `colormap_gradient`.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use chronomap::{colormap_gradient, Gradient, Library, DEFAULT_STEPS};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, gradient: &Gradient,
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for (x, c) in gradient {
        writeln!(fh, "  <td title=\"{x:.3}\" style=\"width: {width}px; \
                      height: 30px; background-color: {c}\"></td>")?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>chronomap: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    for lib in Library::ALL {
        if !lib.is_enabled() { continue }
        writeln!(fh, "<h3>{lib}</h3>")?;
        for name in lib.names() {
            let name = format!("{lib}.{name}");
            let g = colormap_gradient(&name, DEFAULT_STEPS)?;
            table_of_colors(&mut fh, &g, 20, &name)?;
            let g = colormap_gradient(&name, 150)?;
            table_of_colors(&mut fh, &g, 2, "")?;
        }
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
