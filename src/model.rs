//! Classic vs. slim limb detection
//!
//! Slim skins draw arms 3px wide instead of 4px, which leaves a one or two
//! column transparent notch at the right edge of the arm art. The cap and the
//! side panels are probed separately and may disagree.

use image::RgbaImage;
use serde::Serialize;

use crate::layout::{ARM_LAYER_PROBE, SLEEVE_PROBE};
use crate::region::{count_transparent_from_right, Region, ALPHA_THRESHOLD};

/// Limb width per body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ModelVariant {
    /// Arm cap (top/bottom faces) is 3px wide.
    pub is_slim_top: bool,
    /// Arm side panels are 3px wide.
    pub is_slim_body: bool,
}

impl ModelVariant {
    pub const CLASSIC: ModelVariant = ModelVariant { is_slim_top: false, is_slim_body: false };
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = |slim: bool| if slim { "slim" } else { "classic" };
        write!(f, "cap: {}, body: {}", width(self.is_slim_top), width(self.is_slim_body))
    }
}

/// A trailing run of one or two transparent columns means slim.
fn probe_is_slim(canvas: &RgbaImage, probe: Region) -> bool {
    let run = count_transparent_from_right(canvas, probe, ALPHA_THRESHOLD);
    matches!(run, 1 | 2)
}

/// Detect the limb widths of a skin.
///
/// Only rows 16..32 are read, so this works on both legacy and modern canvases.
pub fn detect_variant(canvas: &RgbaImage) -> ModelVariant {
    let variant = ModelVariant {
        is_slim_top: probe_is_slim(canvas, SLEEVE_PROBE),
        is_slim_body: probe_is_slim(canvas, ARM_LAYER_PROBE),
    };
    log::debug!("detected model variant: {}", variant);
    variant
}
