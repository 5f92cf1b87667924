#![forbid(unsafe_code)]

use color_tokens::LchColor;
use palette::{FromColor, Lch, Srgb, white_point::D65};

pub struct Report {
    pub compared: usize,
    pub skipped: usize,
    pub max_deviation: f64,
}

/// Compare our sRGB conversion with palette's for every in-gamut color.
pub fn compare(colors: impl IntoIterator<Item = LchColor>) -> Report {
    let mut report = Report {
        compared: 0,
        skipped: 0,
        max_deviation: 0.0,
    };
    for color in colors {
        if !color.is_in_srgb_gamut() {
            report.skipped += 1;
            continue;
        }
        let ours = color.to_rgb();
        let reference: Srgb<f64> = Srgb::from_color(Lch::<D65, f64>::new(color.l, color.c, color.h));
        let deviation = [
            ours.r - reference.red,
            ours.g - reference.green,
            ours.b - reference.blue,
        ]
        .into_iter()
        .map(f64::abs)
        .fold(0.0, f64::max);
        report.compared += 1;
        report.max_deviation = report.max_deviation.max(deviation);
    }
    report
}
