//! Per-file processing and parallel batch execution
//!
//! Every input file is independent: load, dispatch on size, save. A batch
//! converts on a rayon thread pool, assigns output paths in input order so
//! that two inputs never write the same file, then saves in parallel. Results
//! come back in input order so the report reads the same on every run.

use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::convert::{convert_skin, ConversionKind, ConvertError};
use crate::output::{generate_output_path, load_png, save_png};
use crate::repair::RepairRejection;
use image::RgbaImage;

/// Why a file was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither 64x32 nor 64x64
    UnsupportedSize { width: u32, height: u32 },
    /// 64x64 skin whose left limbs can't be safely backfilled
    RepairRejected(RepairRejection),
    /// An earlier input in the batch already claimed the output path
    OutputCollision { output: PathBuf, first: PathBuf },
}

/// Outcome of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// 64x32 upgraded, written to the path
    Converted(PathBuf),
    /// 64x64 repaired, written to the path
    Fixed(PathBuf),
    /// Nothing written
    Skipped(SkipReason),
    /// Load or save failed
    Failed(String),
}

impl ItemStatus {
    /// Check if the status indicates failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, ItemStatus::Failed(_))
    }

    /// Output file written, if any.
    pub fn output(&self) -> Option<&Path> {
        match self {
            ItemStatus::Converted(path) | ItemStatus::Fixed(path) => Some(path),
            _ => None,
        }
    }
}

/// Result of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    pub input: PathBuf,
    pub status: ItemStatus,
}

impl ItemResult {
    /// Human-readable report line for this item.
    pub fn report_line(&self) -> String {
        let input = self.input.display();
        match &self.status {
            ItemStatus::Converted(out) => {
                format!("Successfully converted 64x32: {} -> {}", input, out.display())
            }
            ItemStatus::Fixed(out) => {
                format!("Successfully fixed 64x64 (fill bottom): {} -> {}", input, out.display())
            }
            ItemStatus::Skipped(SkipReason::RepairRejected(reason)) => {
                format!("Skipped 64x64 (bottom does not meet requirements): {} [{}]", input, reason)
            }
            ItemStatus::Skipped(SkipReason::UnsupportedSize { .. }) => {
                format!("Skipped (unsupported size): {}", input)
            }
            ItemStatus::Skipped(SkipReason::OutputCollision { output, first }) => {
                format!(
                    "Skipped (output collides with {}): {} -> {}",
                    first.display(),
                    input,
                    output.display()
                )
            }
            ItemStatus::Failed(message) => message.clone(),
        }
    }
}

/// Load, convert and save one skin.
///
/// `out_dir` of `None` writes next to the input. Errors never escape: they
/// become [`ItemStatus::Failed`].
pub fn process_file(input: &Path, out_dir: Option<&Path>, naming: &OutputConfig) -> ItemResult {
    let status = prepare_file(input, out_dir, naming).finish();
    ItemResult { input: input.to_path_buf(), status }
}

/// A converted skin that still has to be written.
struct PendingWrite {
    image: RgbaImage,
    out_path: PathBuf,
    upgraded: bool,
}

impl PendingWrite {
    fn save(self) -> ItemStatus {
        if let Err(e) = save_png(&self.image, &self.out_path) {
            return ItemStatus::Failed(format!("Failed to save {}: {}", self.out_path.display(), e));
        }
        if self.upgraded {
            ItemStatus::Converted(self.out_path)
        } else {
            ItemStatus::Fixed(self.out_path)
        }
    }
}

enum Prepared {
    Done(ItemStatus),
    Pending(PendingWrite),
}

impl Prepared {
    fn finish(self) -> ItemStatus {
        match self {
            Prepared::Done(status) => status,
            Prepared::Pending(pending) => pending.save(),
        }
    }
}

fn prepare_file(input: &Path, out_dir: Option<&Path>, naming: &OutputConfig) -> Prepared {
    let image = match load_png(input) {
        Ok(image) => image,
        Err(e) => return Prepared::Done(ItemStatus::Failed(format!("Failed to load {}: {}", input.display(), e))),
    };

    let conversion = match convert_skin(&image) {
        Ok(conversion) => conversion,
        Err(ConvertError::UnsupportedSize { width, height }) => {
            log::debug!("{}: unsupported size {}x{}", input.display(), width, height);
            return Prepared::Done(ItemStatus::Skipped(SkipReason::UnsupportedSize { width, height }));
        }
    };

    let (suffix, upgraded) = match &conversion.kind {
        ConversionKind::Upgraded => (&naming.converted_suffix, true),
        ConversionKind::Repaired => (&naming.fixed_suffix, false),
        ConversionKind::Unchanged(reason) => {
            return Prepared::Done(ItemStatus::Skipped(SkipReason::RepairRejected(reason.clone())));
        }
    };

    let out_path = generate_output_path(input, out_dir, suffix);
    Prepared::Pending(PendingWrite { image: conversion.image, out_path, upgraded })
}

/// Keep the first pending write for each output path; later ones are skipped.
fn claim_outputs(files: &[PathBuf], prepared: &mut [Prepared]) {
    let mut claimed: HashMap<PathBuf, usize> = HashMap::new();
    for (index, slot) in prepared.iter_mut().enumerate() {
        let Prepared::Pending(pending) = slot else { continue };
        match claimed.get(&pending.out_path) {
            Some(&first) => {
                log::warn!(
                    "{} and {} both map to {}",
                    files[first].display(),
                    files[index].display(),
                    pending.out_path.display()
                );
                let reason =
                    SkipReason::OutputCollision { output: pending.out_path.clone(), first: files[first].clone() };
                *slot = Prepared::Done(ItemStatus::Skipped(reason));
            }
            None => {
                claimed.insert(pending.out_path.clone(), index);
            }
        }
    }
}

/// Counts per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub fixed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.converted + self.fixed + self.skipped + self.failed
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} converted, {} fixed, {} skipped, {} failed",
            self.converted, self.fixed, self.skipped, self.failed
        )
    }
}

/// Results of a batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub items: Vec<ItemResult>,
}

impl BatchResult {
    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for item in &self.items {
            match item.status {
                ItemStatus::Converted(_) => summary.converted += 1,
                ItemStatus::Fixed(_) => summary.fixed += 1,
                ItemStatus::Skipped(_) => summary.skipped += 1,
                ItemStatus::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }

    /// Check if any item failed.
    pub fn has_failures(&self) -> bool {
        self.items.iter().any(|item| item.status.is_failure())
    }
}

/// Parallel batch executor.
pub struct BatchRun {
    /// Output naming
    naming: OutputConfig,
    /// Shared output directory (`None` = next to each input)
    out_dir: Option<PathBuf>,
    /// Number of parallel jobs (0 = available parallelism)
    jobs: usize,
}

impl BatchRun {
    /// Create a new batch writing next to each input.
    pub fn new(naming: OutputConfig) -> Self {
        Self { naming, out_dir: None, jobs: 0 }
    }

    /// Write every output into `dir`.
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    /// Set the number of parallel jobs.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Process all files.
    pub fn run(&self, files: &[PathBuf]) -> Result<BatchResult, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build()?;
        log::info!("processing {} file(s) on {} thread(s)", files.len(), pool.current_num_threads());

        let out_dir = self.out_dir.as_deref();
        let mut prepared: Vec<Prepared> =
            pool.install(|| files.par_iter().map(|path| prepare_file(path, out_dir, &self.naming)).collect());

        claim_outputs(files, &mut prepared);

        let items: Vec<ItemResult> = pool.install(|| {
            prepared
                .into_par_iter()
                .zip(files.par_iter())
                .map(|(slot, input)| ItemResult { input: input.clone(), status: slot.finish() })
                .collect()
        });

        Ok(BatchResult { items })
    }
}
