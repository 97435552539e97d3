//! Skinup - Library for normalizing avatar skin PNGs
//!
//! This library provides functionality to:
//! - Upgrade legacy 64x32 skins to the modern 64x64 layout
//! - Backfill an empty left arm/leg on 64x64 skins by mirroring the right side
//! - Detect classic (4px) vs. slim (3px) arms, per body part
//!
//! The transforms work on [`image::RgbaImage`] buffers and hold no global
//! state; the CLI adds PNG I/O, directory walking and parallel batches.

pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod discovery;
pub mod layout;
pub mod model;
pub mod output;
pub mod region;
pub mod repair;
pub mod upgrade;

pub use convert::{convert_skin, Conversion, ConversionKind, ConvertError};
pub use model::{detect_variant, ModelVariant};
pub use repair::{check_repair_gate, repair_limbs, try_repair_limbs, RepairRejection};
pub use upgrade::upgrade_legacy;
