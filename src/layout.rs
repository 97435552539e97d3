//! Fixed skin geometry
//!
//! Every rectangle the upgrader, the repair pass and the model detector touch
//! lives here, named after the part of the body it covers. Coordinates are in
//! the modern 64x64 layout unless the name says `LEGACY_`; rows 0..32 are shared
//! by both layouts, so the right-limb source blocks are valid on either.

use crate::region::Region;

/// Width shared by both layouts.
pub const SKIN_WIDTH: u32 = 64;
/// Height of the legacy layout.
pub const LEGACY_HEIGHT: u32 = 32;
/// Height of the modern layout.
pub const MODERN_HEIGHT: u32 = 64;

/// Which of the two known layouts an image uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinLayout {
    /// 64x32, no independent left limbs
    Legacy,
    /// 64x64, separate left arm and left leg
    Modern,
}

impl SkinLayout {
    /// Classify image dimensions, `None` for anything other than 64x32 or 64x64.
    pub fn detect(width: u32, height: u32) -> Option<Self> {
        match (width, height) {
            (SKIN_WIDTH, LEGACY_HEIGHT) => Some(SkinLayout::Legacy),
            (SKIN_WIDTH, MODERN_HEIGHT) => Some(SkinLayout::Modern),
            _ => None,
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            SkinLayout::Legacy => (SKIN_WIDTH, LEGACY_HEIGHT),
            SkinLayout::Modern => (SKIN_WIDTH, MODERN_HEIGHT),
        }
    }
}

impl std::fmt::Display for SkinLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{}x{}", w, h)
    }
}

/// Everything a legacy skin defines: head, torso, right arm, right leg.
pub const LEGACY_AREA: Region = Region::new(0, 0, SKIN_WIDTH, LEGACY_HEIGHT);

// Right-side source blocks (rows 16..32)

/// Whole right-arm block.
pub const RIGHT_ARM_BLOCK: Region = Region::new(40, 16, 16, 16);
/// Whole right-leg block.
pub const RIGHT_LEG_BLOCK: Region = Region::new(0, 16, 16, 16);
/// Slim right-arm cap strips (top face, bottom face).
pub const RIGHT_ARM_CAP_SLIM_TOP: Region = Region::new(44, 16, 3, 4);
pub const RIGHT_ARM_CAP_SLIM_BOTTOM: Region = Region::new(47, 16, 3, 4);
/// Slim right-arm side strips (front, back).
pub const RIGHT_ARM_SIDE_SLIM_FRONT: Region = Region::new(44, 20, 3, 12);
pub const RIGHT_ARM_SIDE_SLIM_BACK: Region = Region::new(51, 20, 3, 12);

// Model probes

/// Sleeve probe near the shoulder cap; decides the cap width.
pub const SLEEVE_PROBE: Region = Region::new(44, 16, 8, 4);
/// Arm-layer probe along the side panels; decides the panel width.
pub const ARM_LAYER_PROBE: Region = Region::new(40, 20, 16, 12);

// Left-side destination blocks (rows 48..64, modern only)

/// Whole left-arm block.
pub const LEFT_ARM_BLOCK: Region = Region::new(32, 48, 16, 16);
/// Whole left-leg block.
pub const LEFT_LEG_BLOCK: Region = Region::new(16, 48, 16, 16);

/// Left-arm side panels. Strips run right, front, left, back as the avatar
/// sees them, so on a left limb the first panel faces the torso. Inner and
/// outer trade places with a flip.
pub const LEFT_ARM_SIDE_INNER: Region = Region::new(32, 52, 4, 12);
pub const LEFT_ARM_SIDE_FRONT: Region = Region::new(36, 52, 4, 12);
pub const LEFT_ARM_SIDE_OUTER: Region = Region::new(40, 52, 4, 12);
pub const LEFT_ARM_SIDE_BACK: Region = Region::new(44, 52, 4, 12);

/// Left-arm caps, classic width.
pub const LEFT_ARM_CAP_TOP: Region = Region::new(36, 48, 4, 4);
pub const LEFT_ARM_CAP_BOTTOM: Region = Region::new(40, 48, 4, 4);

/// Slim destinations for the side strips and cap strips.
pub const LEFT_ARM_SIDE_SLIM_FRONT: Region = Region::new(36, 52, 3, 12);
pub const LEFT_ARM_SIDE_SLIM_BACK: Region = Region::new(43, 52, 3, 12);
pub const LEFT_ARM_CAP_SLIM_TOP: Region = Region::new(36, 48, 3, 4);
pub const LEFT_ARM_CAP_SLIM_BOTTOM: Region = Region::new(39, 48, 3, 4);

/// Left-leg side panels, same face order as the arm. Legs are always
/// classic width.
pub const LEFT_LEG_SIDE_INNER: Region = Region::new(16, 52, 4, 12);
pub const LEFT_LEG_SIDE_FRONT: Region = Region::new(20, 52, 4, 12);
pub const LEFT_LEG_SIDE_OUTER: Region = Region::new(24, 52, 4, 12);
pub const LEFT_LEG_SIDE_BACK: Region = Region::new(28, 52, 4, 12);

/// Left-leg caps.
pub const LEFT_LEG_CAP_TOP: Region = Region::new(20, 48, 4, 4);
pub const LEFT_LEG_CAP_BOTTOM: Region = Region::new(24, 48, 4, 4);

/// Arm side panels in the order the repair gate checks them.
pub const LEFT_ARM_SIDES: [Region; 4] =
    [LEFT_ARM_SIDE_OUTER, LEFT_ARM_SIDE_INNER, LEFT_ARM_SIDE_BACK, LEFT_ARM_SIDE_FRONT];
/// Leg side panels in the order the repair gate checks them.
pub const LEFT_LEG_SIDES: [Region; 4] =
    [LEFT_LEG_SIDE_OUTER, LEFT_LEG_SIDE_INNER, LEFT_LEG_SIDE_FRONT, LEFT_LEG_SIDE_BACK];
pub const LEFT_ARM_CAPS: [Region; 2] = [LEFT_ARM_CAP_TOP, LEFT_ARM_CAP_BOTTOM];
pub const LEFT_LEG_CAPS: [Region; 2] = [LEFT_LEG_CAP_TOP, LEFT_LEG_CAP_BOTTOM];
