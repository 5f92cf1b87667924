#![forbid(unsafe_code)]

use anyhow::Result;
use color_tokens::LchColor;
use std::fs::File;
use std::io::{BufWriter, Write};

/// One labelled line of swatches.
pub struct Row {
    pub label: &'static str,
    pub colors: Vec<LchColor>,
}

impl Row {
    pub const fn new(label: &'static str, colors: Vec<LchColor>) -> Self {
        Self { label, colors }
    }
}

#[inline]
fn swatch_label(color: LchColor) -> String {
    format!("{:.0} {:.0} {:.0}", color.l, color.c, color.h)
}

#[inline]
fn text_color(color: LchColor) -> &'static str {
    if color.l > 60.0 { "#111" } else { "#eee" }
}

pub fn write_html_grid(
    title: &str,
    cols: usize,
    rows: &[Row],
    path: impl AsRef<std::path::Path>,
) -> Result<std::path::PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#222;color:#eee;font-family:system-ui}}
  h2{{margin:12px}}
  h3{{margin:8px 12px 0;font-size:14px}}
  .g{{display:grid;grid-template-columns:repeat({cols},1fr);gap:4px;padding:8px}}
  .s{{aspect-ratio:2/1;border-radius:6px;display:flex;flex-direction:column;align-items:center;
      justify-content:center;font-size:11px;font-weight:600}}
  .oog{{outline:2px dashed #f0f}}
</style>
<h2>{title}</h2>"#
    )?;
    for row in rows {
        writeln!(w, r#"<h3>{}</h3><div class="g">"#, row.label)?;
        for &color in &row.colors {
            let hex = color.to_display_color().to_hex();
            let class = if color.is_in_srgb_gamut() { "s" } else { "s oog" };
            writeln!(
                w,
                r#"<div class="{class}" style="background:{hex};color:{}"><span>{}</span><span>{hex}</span></div>"#,
                text_color(color),
                swatch_label(color)
            )?;
        }
        writeln!(w, "</div>")?;
    }
    Ok(path.to_path_buf())
}
