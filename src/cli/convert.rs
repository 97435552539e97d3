//! Convert command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::batch::{BatchResult, BatchRun};
use crate::config::{load_config, merge_cli_overrides, CliOverrides, SkinupConfig};
use crate::discovery::{find_png_files, is_png_file};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the convert command on a file or a directory.
pub fn run_convert(path: &Path, config_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    if let Err(e) = merge_cli_overrides(&mut config, overrides) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to access path {}: {}", path.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let result = if metadata.is_dir() {
        convert_directory(path, &config)
    } else {
        convert_single_file(path, &config)
    };

    match result {
        Ok(result) => finish(&result, &config),
        Err(code) => code,
    }
}

fn convert_directory(root: &Path, config: &SkinupConfig) -> Result<BatchResult, ExitCode> {
    let out_dir = root.join(&config.output.dir_name);
    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        eprintln!("Failed to create output directory {}: {}", out_dir.display(), e);
        return Err(ExitCode::from(EXIT_ERROR));
    }

    let files = match find_png_files(root, &config.output.dir_name) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };
    if files.is_empty() {
        println!("No .png files found in {}", root.display());
    }

    let batch = BatchRun::new(config.output.clone()).with_out_dir(out_dir).with_jobs(config.batch.jobs);
    let result = run_batch(&batch, &files)?;

    println!("{}", result.summary());
    Ok(result)
}

fn convert_single_file(path: &Path, config: &SkinupConfig) -> Result<BatchResult, ExitCode> {
    if !is_png_file(path) {
        eprintln!("File is not PNG: {}", path.display());
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    }

    let batch = BatchRun::new(config.output.clone()).with_jobs(1);
    run_batch(&batch, &[path.to_path_buf()])
}

fn run_batch(batch: &BatchRun, files: &[std::path::PathBuf]) -> Result<BatchResult, ExitCode> {
    let result = batch.run(files).map_err(|e| {
        eprintln!("Error: Failed to start worker threads: {}", e);
        ExitCode::from(EXIT_ERROR)
    })?;

    for item in &result.items {
        if item.status.is_failure() {
            eprintln!("{}", item.report_line());
        } else {
            println!("{}", item.report_line());
        }
    }
    Ok(result)
}

fn finish(result: &BatchResult, config: &SkinupConfig) -> ExitCode {
    log::info!("finished: {}", result.summary());
    if result.has_failures() && config.batch.fail_on_error {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
