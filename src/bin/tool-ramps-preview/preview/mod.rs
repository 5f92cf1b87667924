//! Helper tool rendering every family ramp and a hue sweep to HTML for visual review.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

mod check;
mod html;

use anyhow::{Result, ensure};
use color_tokens::{HueFamily, LchColor, RampGenerator};
use html::{Row, write_html_grid};
use std::{env, fs, path::PathBuf};

/// Hue step of the sweep page; 19 columns cover 0..=360.
const SWEEP_STEP: f64 = 20.0;
const SWEEP_LIGHTNESS: f64 = 70.0;
/// Largest per-channel sRGB difference tolerated against palette.
const MAX_DEVIATION: f64 = 1e-3;

pub fn run() -> Result<()> {
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("tool-ramps-preview");
    fs::create_dir_all(&out_dir)?;

    let generator = RampGenerator::default();

    let families: Vec<Row> = HueFamily::ALL
        .into_iter()
        .map(|family| Row::new(family.name(), generator.family_ramp(family).into_colors()))
        .collect();
    let families_path = write_html_grid(
        "Family ramps",
        generator.default_steps(),
        &families,
        out_dir.join("families.html"),
    )?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let columns = (360.0 / SWEEP_STEP) as usize + 1;
    #[allow(clippy::cast_precision_loss)]
    let sweep: Vec<LchColor> = (0..columns)
        .map(|i| sweep_color(&generator, i as f64 * SWEEP_STEP))
        .collect();
    let sweep_path = write_html_grid(
        &format!("Hue sweep at L{SWEEP_LIGHTNESS}"),
        columns,
        &[Row::new("sweep", sweep.clone())],
        out_dir.join("sweep.html"),
    )?;

    let report = check::compare(
        families
            .iter()
            .flat_map(|row| row.colors.iter().copied())
            .chain(sweep),
    );
    println!(
        "Compared {} in-gamut colors against palette ({} skipped out of gamut): max deviation {:.2e}",
        report.compared, report.skipped, report.max_deviation
    );
    ensure!(
        report.max_deviation <= MAX_DEVIATION,
        "conversion drifted from palette by {:.2e}",
        report.max_deviation
    );

    println!(
        "Generated ramp previews in {}:\n  - {}\n  - {}",
        out_dir.display(),
        families_path.display(),
        sweep_path.display()
    );

    Ok(())
}

/// Midpoint stop of the hue's ramp, moved to the sweep lightness.
fn sweep_color(generator: &RampGenerator, hue: f64) -> LchColor {
    let mid = generator
        .color_ramp(hue, generator.default_steps(), false)
        .midpoint();
    LchColor::new(SWEEP_LIGHTNESS, mid.c, mid.h)
}
