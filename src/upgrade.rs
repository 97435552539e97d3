//! Legacy (64x32) to modern (64x64) upgrade
//!
//! The legacy layout only has right limbs. The modern layout adds a left arm
//! and a left leg below the torso. Upgrading copies the shared top half as is,
//! then builds the left limbs as mirror images of the right ones.

use image::RgbaImage;

use crate::layout::*;
use crate::model::detect_variant;
use crate::region::{copy_region, mirror_copy_region, mirror_in_place, swap_mirror_regions};

/// Build the left limbs of `out` from the right limbs of `source`.
///
/// `source` may be a legacy canvas or a modern one: only rows 16..32 are read
/// from it. `out` must be 64x64 and is written in rows 48..64 only. The limb
/// variant is detected on `source`.
pub(crate) fn mirror_right_limbs(source: &RgbaImage, out: &mut RgbaImage) {
    copy_region(source, RIGHT_ARM_BLOCK, out, LEFT_ARM_BLOCK);
    copy_region(source, RIGHT_LEG_BLOCK, out, LEFT_LEG_BLOCK);

    let variant = detect_variant(source);

    // Arm: the relocated inner/outer faces swap sides.
    swap_mirror_regions(out, LEFT_ARM_SIDE_OUTER, LEFT_ARM_SIDE_INNER);

    if variant.is_slim_body {
        mirror_copy_region(source, RIGHT_ARM_SIDE_SLIM_FRONT, out, LEFT_ARM_SIDE_SLIM_FRONT);
        mirror_copy_region(source, RIGHT_ARM_SIDE_SLIM_BACK, out, LEFT_ARM_SIDE_SLIM_BACK);
    } else {
        mirror_in_place(out, LEFT_ARM_SIDE_BACK);
        mirror_in_place(out, LEFT_ARM_SIDE_FRONT);
    }

    if variant.is_slim_top {
        mirror_copy_region(source, RIGHT_ARM_CAP_SLIM_TOP, out, LEFT_ARM_CAP_SLIM_TOP);
        mirror_copy_region(source, RIGHT_ARM_CAP_SLIM_BOTTOM, out, LEFT_ARM_CAP_SLIM_BOTTOM);
    } else {
        mirror_in_place(out, LEFT_ARM_CAP_TOP);
        mirror_in_place(out, LEFT_ARM_CAP_BOTTOM);
    }

    // Legs have no slim variant.
    swap_mirror_regions(out, LEFT_LEG_SIDE_OUTER, LEFT_LEG_SIDE_INNER);
    mirror_in_place(out, LEFT_LEG_SIDE_FRONT);
    mirror_in_place(out, LEFT_LEG_SIDE_BACK);
    mirror_in_place(out, LEFT_LEG_CAP_TOP);
    mirror_in_place(out, LEFT_LEG_CAP_BOTTOM);
}

/// Upgrade a 64x32 skin to the 64x64 layout.
///
/// Rows 0..32 are copied unchanged; the left arm and left leg are mirrored
/// from the right ones, honoring a slim arm cap or slim arm panels.
///
/// # Panics
/// If `legacy` is not 64x32. Dispatch on size with [`crate::convert::convert_skin`]
/// when the input dimensions are not known.
pub fn upgrade_legacy(legacy: &RgbaImage) -> RgbaImage {
    assert_eq!(
        legacy.dimensions(),
        (SKIN_WIDTH, LEGACY_HEIGHT),
        "upgrade_legacy expects a 64x32 skin"
    );

    let mut out = RgbaImage::new(SKIN_WIDTH, MODERN_HEIGHT);
    copy_region(legacy, LEGACY_AREA, &mut out, LEGACY_AREA);
    mirror_right_limbs(legacy, &mut out);
    out
}
