//! Left-limb backfill for 64x64 skins
//!
//! Some modern skins only draw the right arm and right leg and leave the
//! left-limb blocks empty. If the left side is verifiably undrawn, it is
//! rebuilt by mirroring the right limbs exactly like a legacy upgrade would.
//! Anything ambiguous rejects the whole repair and leaves the canvas alone.

use image::RgbaImage;
use thiserror::Error;

use crate::layout::*;
use crate::region::{count_transparent_from_right, is_fully_transparent, Region, ALPHA_THRESHOLD};
use crate::upgrade::mirror_right_limbs;

/// Widest trailing transparent run tolerated on a partially drawn arm panel.
/// A slim arm shows a one column notch; anything wider is ambiguous.
const MAX_ARM_PANEL_NOTCH: u32 = 1;

/// Why a 64x64 skin was not repaired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairRejection {
    #[error("expected a 64x64 skin, got {width}x{height}")]
    WrongSize { width: u32, height: u32 },
    #[error("left arm block is already drawn")]
    LeftArmDrawn,
    #[error("left leg block is already drawn")]
    LeftLegDrawn,
    #[error("leg panel {0} is not empty")]
    LegPanelDrawn(Region),
    #[error("arm panel {region} has an ambiguous {run}-column transparent edge")]
    ArmPanelAmbiguous { region: Region, run: u32 },
    #[error("arm cap {0} is not empty")]
    ArmCapDrawn(Region),
}

/// Check whether a canvas can safely receive mirrored left limbs.
///
/// Checks run in a fixed order and the first failure is returned.
pub fn check_repair_gate(canvas: &RgbaImage) -> Result<(), RepairRejection> {
    let (width, height) = canvas.dimensions();
    if (width, height) != (SKIN_WIDTH, MODERN_HEIGHT) {
        return Err(RepairRejection::WrongSize { width, height });
    }

    if !is_fully_transparent(canvas, LEFT_ARM_BLOCK, ALPHA_THRESHOLD) {
        return Err(RepairRejection::LeftArmDrawn);
    }
    if !is_fully_transparent(canvas, LEFT_LEG_BLOCK, ALPHA_THRESHOLD) {
        return Err(RepairRejection::LeftLegDrawn);
    }

    for region in LEFT_LEG_SIDES.into_iter().chain(LEFT_LEG_CAPS) {
        if !is_fully_transparent(canvas, region, ALPHA_THRESHOLD) {
            return Err(RepairRejection::LegPanelDrawn(region));
        }
    }

    for region in LEFT_ARM_SIDES {
        if is_fully_transparent(canvas, region, ALPHA_THRESHOLD) {
            continue;
        }
        let run = count_transparent_from_right(canvas, region, ALPHA_THRESHOLD);
        if run > MAX_ARM_PANEL_NOTCH {
            return Err(RepairRejection::ArmPanelAmbiguous { region, run });
        }
    }

    for region in LEFT_ARM_CAPS {
        if !is_fully_transparent(canvas, region, ALPHA_THRESHOLD) {
            return Err(RepairRejection::ArmCapDrawn(region));
        }
    }

    Ok(())
}

/// Mirror the right limbs onto an empty left side, in place.
///
/// Returns `Err` with the gate failure and leaves `canvas` untouched when the
/// skin is not safe to repair.
pub fn try_repair_limbs(canvas: &mut RgbaImage) -> Result<(), RepairRejection> {
    check_repair_gate(canvas)?;

    let source = canvas.clone();
    mirror_right_limbs(&source, canvas);
    Ok(())
}

/// Mirror the right limbs onto an empty left side, in place.
///
/// Returns `false` and leaves `canvas` untouched when the skin is not safe to
/// repair. See [`try_repair_limbs`] for the rejection reason.
pub fn repair_limbs(canvas: &mut RgbaImage) -> bool {
    match try_repair_limbs(canvas) {
        Ok(()) => true,
        Err(reason) => {
            log::debug!("repair rejected: {}", reason);
            false
        }
    }
}
