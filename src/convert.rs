//! Size dispatch between the upgrade and repair paths

use image::RgbaImage;
use thiserror::Error;

use crate::layout::SkinLayout;
use crate::repair::{try_repair_limbs, RepairRejection};
use crate::upgrade::upgrade_legacy;

/// Error type for skin conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Neither 64x32 nor 64x64
    #[error("unsupported image size {width}x{height} (expected 64x32 or 64x64)")]
    UnsupportedSize { width: u32, height: u32 },
}

/// What happened to a skin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionKind {
    /// 64x32 input upgraded to 64x64
    Upgraded,
    /// 64x64 input with its left limbs backfilled
    Repaired,
    /// 64x64 input left as is
    Unchanged(RepairRejection),
}

/// Result of [`convert_skin`]: always a 64x64 image.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub image: RgbaImage,
    pub kind: ConversionKind,
}

impl Conversion {
    /// Whether the output differs from the input.
    pub fn changed(&self) -> bool {
        !matches!(self.kind, ConversionKind::Unchanged(_))
    }
}

/// Normalize a skin to the modern layout.
///
/// - 64x32: upgraded.
/// - 64x64: repaired when the left limbs are empty, otherwise returned
///   unchanged with the reason.
/// - anything else: [`ConvertError::UnsupportedSize`].
pub fn convert_skin(canvas: &RgbaImage) -> Result<Conversion, ConvertError> {
    let (width, height) = canvas.dimensions();
    match SkinLayout::detect(width, height) {
        Some(SkinLayout::Legacy) => {
            Ok(Conversion { image: upgrade_legacy(canvas), kind: ConversionKind::Upgraded })
        }
        Some(SkinLayout::Modern) => {
            let mut image = canvas.clone();
            let kind = match try_repair_limbs(&mut image) {
                Ok(()) => ConversionKind::Repaired,
                Err(reason) => ConversionKind::Unchanged(reason),
            };
            Ok(Conversion { image, kind })
        }
        None => Err(ConvertError::UnsupportedSize { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LEFT_ARM_BLOCK, LEFT_LEG_BLOCK};
    use image::Rgba;

    #[test]
    fn test_legacy_is_upgraded() {
        let legacy = RgbaImage::from_pixel(64, 32, Rgba([1, 2, 3, 255]));
        let conversion = convert_skin(&legacy).unwrap();
        assert_eq!(conversion.kind, ConversionKind::Upgraded);
        assert!(conversion.changed());
        assert_eq!(conversion.image.dimensions(), (64, 64));
    }

    #[test]
    fn test_modern_with_empty_left_is_repaired() {
        let mut modern = RgbaImage::from_pixel(64, 64, Rgba([1, 2, 3, 255]));
        for region in [LEFT_ARM_BLOCK, LEFT_LEG_BLOCK] {
            for y in region.y..region.y + region.height {
                for x in region.x..region.x + region.width {
                    modern.put_pixel(x, y, Rgba([0, 0, 0, 0]));
                }
            }
        }
        let conversion = convert_skin(&modern).unwrap();
        assert_eq!(conversion.kind, ConversionKind::Repaired);
        assert_eq!(conversion.image.get_pixel(40, 60), &Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_drawn_modern_is_unchanged() {
        let modern = RgbaImage::from_pixel(64, 64, Rgba([1, 2, 3, 255]));
        let conversion = convert_skin(&modern).unwrap();
        assert_eq!(conversion.kind, ConversionKind::Unchanged(RepairRejection::LeftArmDrawn));
        assert!(!conversion.changed());
        assert_eq!(conversion.image, modern);
    }

    #[test]
    fn test_unsupported_size() {
        for (w, h) in [(32, 32), (128, 64), (64, 128), (1, 1)] {
            let err = convert_skin(&RgbaImage::new(w, h)).unwrap_err();
            assert_eq!(err, ConvertError::UnsupportedSize { width: w, height: h });
        }
        assert_eq!(
            ConvertError::UnsupportedSize { width: 128, height: 64 }.to_string(),
            "unsupported image size 128x64 (expected 64x32 or 64x64)"
        );
    }
}
