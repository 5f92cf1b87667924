//! Per-family ramp definitions and the table of anchors they live in.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::color::{LchColor, normalize_hue};

/// Number of stops in every built-in ramp.
pub const STEP_COUNT: usize = 12;

/// Design-token labels for the built-in stops, lightest first.
pub const STOP_TOKENS: [u32; STEP_COUNT] = [50, 100, 150, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Immutable curves for one hue family, index-aligned with the table's stops.
#[derive(Debug, Clone, PartialEq)]
pub struct RampDefinition {
    /// Hue the curves were authored for, in `[0, 360)`.
    pub base_hue: f64,
    /// Lightness per stop.
    pub lightness: Vec<f64>,
    /// Chroma per stop.
    pub chroma: Vec<f64>,
    /// Hue offset per stop, relative to `base_hue`. May be negative.
    pub hue_shift: Vec<f64>,
}

impl RampDefinition {
    /// Number of stops described by this definition.
    pub fn len(&self) -> usize {
        self.lightness.len()
    }

    /// Whether the definition carries no stops at all.
    pub fn is_empty(&self) -> bool {
        self.lightness.is_empty()
    }

    /// The stop at `len / 2`, hue-shifted from the base hue.
    ///
    /// Returns `None` for an empty definition.
    pub fn mid_color(&self) -> Option<LchColor> {
        let mid = self.len() / 2;
        Some(LchColor::new(
            *self.lightness.get(mid)?,
            *self.chroma.get(mid)?,
            self.base_hue + *self.hue_shift.get(mid)?,
        ))
    }
}

/// Why a set of definitions was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    /// The stop list is empty.
    #[error("ramp table has no stops")]
    NoStops,
    /// No anchors were supplied.
    #[error("ramp table has no anchors")]
    NoAnchors,
    /// One of an anchor's curves does not match the stop count.
    #[error("anchor {hue}: {field} has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Anchor hue.
        hue: f64,
        /// Offending curve.
        field: &'static str,
        /// Stop count of the table.
        expected: usize,
        /// Length found.
        actual: usize,
    },
    /// An anchor hue or curve value is NaN or infinite.
    #[error("anchor {hue}: non-finite value")]
    NonFinite {
        /// Anchor hue as supplied.
        hue: f64,
    },
    /// Two anchors normalize to the same hue.
    #[error("duplicate anchor at hue {hue}")]
    DuplicateAnchor {
        /// Normalized hue.
        hue: f64,
    },
}

/// Read-only set of anchors, sorted by hue, sharing one stop list.
#[derive(Debug, Clone, PartialEq)]
pub struct RampTable {
    stops: Vec<u32>,
    anchors: Vec<RampDefinition>,
}

impl RampTable {
    /// Validate and sort a set of definitions.
    pub fn new(stops: Vec<u32>, anchors: Vec<RampDefinition>) -> Result<Self, DefinitionError> {
        if stops.is_empty() {
            return Err(DefinitionError::NoStops);
        }
        if anchors.is_empty() {
            return Err(DefinitionError::NoAnchors);
        }

        let expected = stops.len();
        let mut normalized = Vec::with_capacity(anchors.len());
        for mut anchor in anchors {
            for (field, curve) in [
                ("lightness", &anchor.lightness),
                ("chroma", &anchor.chroma),
                ("hue_shift", &anchor.hue_shift),
            ] {
                if curve.len() != expected {
                    return Err(DefinitionError::LengthMismatch {
                        hue: anchor.base_hue,
                        field,
                        expected,
                        actual: curve.len(),
                    });
                }
            }

            let finite = anchor.base_hue.is_finite()
                && anchor
                    .lightness
                    .iter()
                    .chain(&anchor.chroma)
                    .chain(&anchor.hue_shift)
                    .all(|v| v.is_finite());
            if !finite {
                return Err(DefinitionError::NonFinite {
                    hue: anchor.base_hue,
                });
            }

            anchor.base_hue = normalize_hue(anchor.base_hue);
            normalized.push(anchor);
        }

        normalized.sort_by(|a, b| a.base_hue.total_cmp(&b.base_hue));
        if let Some(pair) = normalized
            .windows(2)
            .find(|pair| pair[0].base_hue == pair[1].base_hue)
        {
            return Err(DefinitionError::DuplicateAnchor {
                hue: pair[0].base_hue,
            });
        }

        Ok(Self {
            stops,
            anchors: normalized,
        })
    }

    /// Stop labels, index-aligned with every anchor's curves.
    pub fn stops(&self) -> &[u32] {
        &self.stops
    }

    /// Anchors in ascending hue order.
    pub fn anchors(&self) -> &[RampDefinition] {
        &self.anchors
    }

    /// Number of stops per ramp.
    pub fn step_count(&self) -> usize {
        self.stops.len()
    }

    /// The anchor sitting exactly on `hue`, if any.
    pub fn anchor_at(&self, hue: f64) -> Option<&RampDefinition> {
        let hue = normalize_hue(hue);
        self.anchors.iter().find(|anchor| anchor.base_hue == hue)
    }
}

/// The canonical table, built on first use and shared afterwards.
pub fn builtin() -> Arc<RampTable> {
    static BUILTIN: OnceLock<Arc<RampTable>> = OnceLock::new();
    BUILTIN
        .get_or_init(|| {
            let anchors = BUILTIN_ANCHORS
                .iter()
                .map(|(hue, lightness, chroma, hue_shift)| RampDefinition {
                    base_hue: *hue,
                    lightness: lightness.to_vec(),
                    chroma: chroma.to_vec(),
                    hue_shift: hue_shift.to_vec(),
                })
                .collect();
            // already sorted, normalized and length-checked at compile time
            Arc::new(RampTable {
                stops: STOP_TOKENS.to_vec(),
                anchors,
            })
        })
        .clone()
}

type AnchorRow = (f64, [f64; STEP_COUNT], [f64; STEP_COUNT], [f64; STEP_COUNT]);

/// Hue, lightness, chroma and hue shift for each family anchor.
#[rustfmt::skip]
const BUILTIN_ANCHORS: [AnchorRow; 21] = [
    // pink
    (0.0,
        [97.0, 93.5, 87.0, 79.5, 71.0, 62.0, 53.5, 45.5, 37.5, 29.5, 22.0, 15.5],
        [4.3, 9.9, 19.8, 32.2, 45.9, 57.0, 62.0, 59.5, 53.3, 44.6, 34.7, 24.8],
        [-4.0, -3.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0]),
    // red
    (10.0,
        [97.0, 93.5, 87.0, 79.5, 71.0, 62.0, 53.5, 45.5, 37.5, 29.5, 22.0, 15.5],
        [4.9, 11.2, 22.4, 36.4, 51.8, 64.4, 70.0, 67.2, 60.2, 50.4, 39.2, 28.0],
        [-3.0, -2.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 3.0]),
    // tomato
    (20.0,
        [97.1, 93.8, 87.5, 80.2, 72.0, 63.0, 54.5, 46.3, 38.1, 29.9, 22.2, 15.6],
        [5.0, 11.5, 23.0, 37.4, 53.3, 66.2, 72.0, 69.1, 61.9, 51.8, 40.3, 28.8],
        [-2.0, -2.0, -1.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0]),
    // orange
    (35.0,
        [97.2, 94.0, 88.0, 81.0, 72.9, 64.0, 55.4, 47.1, 38.7, 30.3, 22.5, 15.7],
        [5.3, 12.2, 24.3, 39.5, 56.2, 69.9, 76.0, 73.0, 65.4, 54.7, 42.6, 30.4],
        [4.0, 3.0, 2.0, 1.0, 0.0, 0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0]),
    // brown
    (50.0,
        [97.1, 93.8, 87.5, 80.2, 72.0, 63.0, 54.5, 46.3, 38.1, 29.9, 22.2, 15.6],
        [3.2, 7.4, 14.7, 23.9, 34.0, 42.3, 46.0, 44.2, 39.6, 33.1, 25.8, 18.4],
        [6.0, 5.0, 4.0, 2.0, 1.0, 0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0]),
    // gold
    (70.0,
        [97.4, 94.5, 89.0, 82.5, 74.8, 66.0, 57.3, 48.7, 39.9, 31.1, 23.0, 15.9],
        [4.3, 9.9, 19.8, 32.2, 45.9, 57.0, 62.0, 59.5, 53.3, 44.6, 34.7, 24.8],
        [8.0, 6.0, 4.0, 2.0, 1.0, 0.0, -2.0, -4.0, -6.0, -8.0, -10.0, -12.0]),
    // yellow
    (85.0,
        [97.9, 95.8, 91.5, 86.2, 79.5, 71.0, 62.0, 52.7, 42.9, 33.1, 24.2, 16.4],
        [6.2, 14.1, 28.2, 45.8, 65.1, 81.0, 88.0, 84.5, 75.7, 63.4, 49.3, 35.2],
        [6.0, 5.0, 4.0, 3.0, 2.0, 0.0, -3.0, -6.0, -9.0, -12.0, -15.0, -18.0]),
    // lime
    (100.0,
        [97.7, 95.2, 90.5, 84.8, 77.7, 69.0, 60.1, 51.1, 41.7, 32.3, 23.8, 16.2],
        [5.6, 12.8, 25.6, 41.6, 59.2, 73.6, 80.0, 76.8, 68.8, 57.6, 44.8, 32.0],
        [4.0, 3.0, 3.0, 2.0, 1.0, 0.0, -1.0, -3.0, -5.0, -7.0, -9.0, -11.0]),
    // olive
    (110.0,
        [97.3, 94.2, 88.5, 81.8, 73.8, 65.0, 56.4, 47.9, 39.3, 30.7, 22.8, 15.8],
        [2.5, 5.8, 11.5, 18.7, 26.6, 33.1, 36.0, 34.6, 31.0, 25.9, 20.2, 14.4],
        [2.0, 2.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -3.0, -4.0, -5.0]),
    // grass
    (120.0,
        [97.4, 94.5, 89.0, 82.5, 74.8, 66.0, 57.3, 48.7, 39.9, 31.1, 23.0, 15.9],
        [4.6, 10.6, 21.1, 34.3, 48.8, 60.7, 66.0, 63.4, 56.8, 47.5, 37.0, 26.4],
        [-4.0, -3.0, -2.0, -1.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
    // green
    (140.0,
        [97.2, 94.0, 88.0, 81.0, 72.9, 64.0, 55.4, 47.1, 38.7, 30.3, 22.5, 15.7],
        [4.2, 9.6, 19.2, 31.2, 44.4, 55.2, 60.0, 57.6, 51.6, 43.2, 33.6, 24.0],
        [-6.0, -5.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
    // mint
    (160.0,
        [97.3, 94.2, 88.5, 81.8, 73.8, 65.0, 56.4, 47.9, 39.3, 30.7, 22.8, 15.8],
        [3.2, 7.4, 14.7, 23.9, 34.0, 42.3, 46.0, 44.2, 39.6, 33.1, 25.8, 18.4],
        [-4.0, -3.0, -2.0, -1.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0]),
    // cyan
    (180.0,
        [97.2, 94.0, 88.0, 81.0, 72.9, 64.0, 55.4, 47.1, 38.7, 30.3, 22.5, 15.7],
        [2.8, 6.4, 12.8, 20.8, 29.6, 36.8, 40.0, 38.4, 34.4, 28.8, 22.4, 16.0],
        [-3.0, -2.0, -2.0, -1.0, 0.0, 0.0, 1.0, 2.0, 2.0, 3.0, 4.0, 5.0]),
    // teal
    (190.0,
        [97.1, 93.8, 87.5, 80.2, 72.0, 63.0, 54.5, 46.3, 38.1, 29.9, 22.2, 15.6],
        [2.9, 6.7, 13.4, 21.8, 31.1, 38.6, 42.0, 40.3, 36.1, 30.2, 23.5, 16.8],
        [-4.0, -3.0, -2.0, -1.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 3.0, 4.0]),
    // blue
    (210.0,
        [96.9, 93.2, 86.5, 78.8, 70.0, 61.0, 52.5, 44.7, 36.9, 29.1, 21.8, 15.4],
        [3.5, 8.0, 16.0, 26.0, 37.0, 46.0, 50.0, 48.0, 43.0, 36.0, 28.0, 20.0],
        [-6.0, -5.0, -4.0, -2.0, -1.0, 0.0, 1.0, 3.0, 5.0, 7.0, 9.0, 11.0]),
    // sky
    (235.0,
        [97.0, 93.5, 87.0, 79.5, 71.0, 62.0, 53.5, 45.5, 37.5, 29.5, 22.0, 15.5],
        [3.2, 7.4, 14.7, 23.9, 34.0, 42.3, 46.0, 44.2, 39.6, 33.1, 25.8, 18.4],
        [-8.0, -6.0, -4.0, -3.0, -1.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0]),
    // indigo
    (270.0,
        [96.6, 92.5, 85.0, 76.5, 67.2, 58.0, 49.7, 42.3, 35.1, 27.9, 21.0, 15.1],
        [4.2, 9.6, 19.2, 31.2, 44.4, 55.2, 60.0, 57.6, 51.6, 43.2, 33.6, 24.0],
        [-10.0, -8.0, -6.0, -4.0, -2.0, 0.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]),
    // iris
    (292.5,
        [96.6, 92.5, 85.0, 76.5, 67.2, 58.0, 49.7, 42.3, 35.1, 27.9, 21.0, 15.1],
        [4.5, 10.2, 20.5, 33.3, 47.4, 58.9, 64.0, 61.4, 55.0, 46.1, 35.8, 25.6],
        [-8.0, -6.0, -5.0, -3.0, -2.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
    // purple
    (310.0,
        [96.7, 92.8, 85.5, 77.2, 68.2, 59.0, 50.6, 43.1, 35.7, 28.3, 21.2, 15.2],
        [4.3, 9.9, 19.8, 32.2, 45.9, 57.0, 62.0, 59.5, 53.3, 44.6, 34.7, 24.8],
        [-6.0, -5.0, -4.0, -3.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
    // violet
    (325.0,
        [96.8, 93.0, 86.0, 78.0, 69.1, 60.0, 51.6, 43.9, 36.3, 28.7, 21.5, 15.3],
        [4.1, 9.3, 18.6, 30.2, 42.9, 53.4, 58.0, 55.7, 49.9, 41.8, 32.5, 23.2],
        [-5.0, -4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 3.0, 4.0, 5.0]),
    // plum
    (345.0,
        [96.9, 93.2, 86.5, 78.8, 70.0, 61.0, 52.5, 44.7, 36.9, 29.1, 21.8, 15.4],
        [3.9, 9.0, 17.9, 29.1, 41.4, 51.5, 56.0, 53.8, 48.2, 40.3, 31.4, 22.4],
        [-4.0, -3.0, -2.0, -1.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 4.0, 4.0]),
];
