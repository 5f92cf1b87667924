//! Named hue families with fixed hues.

use indexmap::IndexMap;

use crate::color::LchColor;

use super::generator::{Ramp, RampGenerator};

/// A named ramp bound to a constant hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HueFamily {
    /// Neutral ramp, generated without chroma.
    Gray,
    /// 0°.
    Pink,
    /// 10°.
    Red,
    /// 20°.
    Tomato,
    /// 35°.
    Orange,
    /// 50°.
    Brown,
    /// 70°.
    Gold,
    /// 85°.
    Yellow,
    /// 100°.
    Lime,
    /// 110°.
    Olive,
    /// 120°.
    Grass,
    /// 140°.
    Green,
    /// 160°.
    Mint,
    /// 180°.
    Cyan,
    /// 190°.
    Teal,
    /// 210°.
    Blue,
    /// 235°.
    Sky,
    /// 270°.
    Indigo,
    /// 292.5°.
    Iris,
    /// 310°.
    Purple,
    /// 325°.
    Violet,
    /// 345°.
    Plum,
    /// 360°, the same anchor as pink.
    Ruby,
}

impl HueFamily {
    /// Every family, in hue order with gray first.
    pub const ALL: [HueFamily; 23] = [
        HueFamily::Gray,
        HueFamily::Pink,
        HueFamily::Red,
        HueFamily::Tomato,
        HueFamily::Orange,
        HueFamily::Brown,
        HueFamily::Gold,
        HueFamily::Yellow,
        HueFamily::Lime,
        HueFamily::Olive,
        HueFamily::Grass,
        HueFamily::Green,
        HueFamily::Mint,
        HueFamily::Cyan,
        HueFamily::Teal,
        HueFamily::Blue,
        HueFamily::Sky,
        HueFamily::Indigo,
        HueFamily::Iris,
        HueFamily::Purple,
        HueFamily::Violet,
        HueFamily::Plum,
        HueFamily::Ruby,
    ];

    /// Hue the family is generated for.
    pub const fn hue(self) -> f64 {
        match self {
            HueFamily::Gray | HueFamily::Pink => 0.0,
            HueFamily::Red => 10.0,
            HueFamily::Tomato => 20.0,
            HueFamily::Orange => 35.0,
            HueFamily::Brown => 50.0,
            HueFamily::Gold => 70.0,
            HueFamily::Yellow => 85.0,
            HueFamily::Lime => 100.0,
            HueFamily::Olive => 110.0,
            HueFamily::Grass => 120.0,
            HueFamily::Green => 140.0,
            HueFamily::Mint => 160.0,
            HueFamily::Cyan => 180.0,
            HueFamily::Teal => 190.0,
            HueFamily::Blue => 210.0,
            HueFamily::Sky => 235.0,
            HueFamily::Indigo => 270.0,
            HueFamily::Iris => 292.5,
            HueFamily::Purple => 310.0,
            HueFamily::Violet => 325.0,
            HueFamily::Plum => 345.0,
            HueFamily::Ruby => 360.0,
        }
    }

    /// Lowercase family name.
    pub const fn name(self) -> &'static str {
        match self {
            HueFamily::Gray => "gray",
            HueFamily::Pink => "pink",
            HueFamily::Red => "red",
            HueFamily::Tomato => "tomato",
            HueFamily::Orange => "orange",
            HueFamily::Brown => "brown",
            HueFamily::Gold => "gold",
            HueFamily::Yellow => "yellow",
            HueFamily::Lime => "lime",
            HueFamily::Olive => "olive",
            HueFamily::Grass => "grass",
            HueFamily::Green => "green",
            HueFamily::Mint => "mint",
            HueFamily::Cyan => "cyan",
            HueFamily::Teal => "teal",
            HueFamily::Blue => "blue",
            HueFamily::Sky => "sky",
            HueFamily::Indigo => "indigo",
            HueFamily::Iris => "iris",
            HueFamily::Purple => "purple",
            HueFamily::Violet => "violet",
            HueFamily::Plum => "plum",
            HueFamily::Ruby => "ruby",
        }
    }

    /// Whether the family drops chroma.
    pub const fn is_grayscale(self) -> bool {
        matches!(self, HueFamily::Gray)
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl RampGenerator {
    /// Default-length ramp for a named family.
    pub fn family_ramp(&self, family: HueFamily) -> Ramp {
        self.color_ramp(family.hue(), self.default_steps(), family.is_grayscale())
    }

    /// Primary color of every family, keyed by name in [`HueFamily::ALL`] order.
    pub fn family_primaries(&self) -> IndexMap<&'static str, LchColor> {
        HueFamily::ALL
            .into_iter()
            .map(|family| {
                (
                    family.name(),
                    self.primary_color(family.hue(), family.is_grayscale()),
                )
            })
            .collect()
    }
}
