//! Target generation
//!
//! Picks a fresh correct button for every box and decides how the target is shown.
//! Difficulty rises with the score: symbols first, then colors, then a per-box mix.

use rand::Rng;

use super::SensorId;
use super::boxes::{Button, ButtonBox};
use crate::consts::{COLOR_TIER_SCORE, MIXED_TIER_SCORE};

/// How targets are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// Every box shows its target's symbol
    Symbol,
    /// Every box shows its target's color
    Color,
    /// Each box independently shows symbol or color
    Mixed,
}

impl PresentationMode {
    /// Presentation tier for a cumulative score
    pub fn for_score(score: i64) -> Self {
        if score < COLOR_TIER_SCORE {
            PresentationMode::Symbol
        } else if score < MIXED_TIER_SCORE {
            PresentationMode::Color
        } else {
            PresentationMode::Mixed
        }
    }
}

/// Which asset variant a box displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetVariant {
    Symbol,
    Color,
}

impl AssetVariant {
    /// The button's image for this variant
    pub fn image<'a>(&self, button: &'a Button) -> &'a str {
        match self {
            AssetVariant::Symbol => &button.symbol_image,
            AssetVariant::Color => &button.color_image,
        }
    }
}

/// Result of one generation cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub mode: PresentationMode,
    /// One (sensor, variant, image) per box, in the order the boxes were given
    pub targets: Vec<GeneratedTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTarget {
    pub sensor_id: SensorId,
    pub variant: AssetVariant,
    pub image: String,
}

/// Draw a uniformly random button from a box
pub fn random_button<'a, R: Rng>(button_box: &'a ButtonBox, rng: &mut R) -> &'a Button {
    let buttons = button_box.buttons();
    &buttons[rng.random_range(0..buttons.len())]
}

/// Assign a fresh target to every box and pick each box's displayed asset.
///
/// All boxes are redrawn in one call. Draws are independent per box, so two boxes
/// may pick buttons at the same position. The RNG is consumed in a fixed order
/// (all button draws, then one coin per box in mixed mode).
pub fn generate<R: Rng>(boxes: &mut [&mut ButtonBox], score: i64, rng: &mut R) -> Generation {
    let picks: Vec<SensorId> = boxes
        .iter()
        .map(|b| random_button(b, rng).sensor_id)
        .collect();
    for (b, &sensor_id) in boxes.iter_mut().zip(&picks) {
        b.set_correct_sensor_id(Some(sensor_id));
    }

    let mode = PresentationMode::for_score(score);
    let targets = boxes
        .iter()
        .zip(&picks)
        .map(|(b, &sensor_id)| {
            let variant = match mode {
                PresentationMode::Symbol => AssetVariant::Symbol,
                PresentationMode::Color => AssetVariant::Color,
                PresentationMode::Mixed => {
                    if rng.random_bool(0.5) {
                        AssetVariant::Symbol
                    } else {
                        AssetVariant::Color
                    }
                }
            };
            GeneratedTarget {
                sensor_id,
                variant,
                image: variant.image(b.button_by_sensor(sensor_id)).to_string(),
            }
        })
        .collect();

    Generation { mode, targets }
}
