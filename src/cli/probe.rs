//! Probe command implementation

use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use crate::layout::SkinLayout;
use crate::model::{detect_variant, ModelVariant};
use crate::output::load_png;
use crate::repair::check_repair_gate;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// What `skinup probe` knows about a skin.
#[derive(Debug, Serialize)]
struct ProbeReport {
    file: String,
    width: u32,
    height: u32,
    layout: Option<SkinLayout>,
    variant: Option<ModelVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repairable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<String>,
}

/// Execute the probe command
pub fn run_probe(file: &Path, json: bool) -> ExitCode {
    let image = match load_png(file) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Failed to load {}: {}", file.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (width, height) = image.dimensions();
    let layout = SkinLayout::detect(width, height);
    let mut report = ProbeReport {
        file: file.display().to_string(),
        width,
        height,
        layout,
        variant: layout.map(|_| detect_variant(&image)),
        repairable: None,
        rejection: None,
    };

    if layout == Some(SkinLayout::Modern) {
        let verdict = check_repair_gate(&image);
        report.repairable = Some(verdict.is_ok());
        report.rejection = verdict.err().map(|e| e.to_string());
    }

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        print_report_text(&report);
    }

    if layout.is_some() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

fn print_report_text(report: &ProbeReport) {
    println!("{}", report.file);
    match report.layout {
        Some(SkinLayout::Legacy) => println!("  layout: legacy 64x32"),
        Some(SkinLayout::Modern) => println!("  layout: modern 64x64"),
        None => println!("  layout: unsupported size {}x{}", report.width, report.height),
    }
    if let Some(variant) = report.variant {
        println!("  model:  {}", variant);
    }
    match (report.repairable, &report.rejection) {
        (Some(true), _) => println!("  repair: left limbs empty, can be mirrored"),
        (Some(false), Some(reason)) => println!("  repair: not possible ({})", reason),
        _ => {}
    }
}
