//! CLI integration tests for `skinup convert` and `skinup probe`
//!
//! These tests run the binary against generated skins in temporary
//! directories and check exit codes, report lines and written files.

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SKIN: Rgba<u8> = Rgba([181, 132, 97, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Get the path to the skinup binary
fn skinup_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_skinup"))
}

fn run_skinup(args: &[&str], cwd: &Path) -> Output {
    Command::new(skinup_binary())
        .args(args)
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".no-xdg"))
        .output()
        .expect("Failed to execute skinup")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn legacy_skin() -> RgbaImage {
    RgbaImage::from_pixel(64, 32, SKIN)
}

/// 64x64 skin with only the right arm and right leg drawn.
fn half_modern_skin() -> RgbaImage {
    let mut image = RgbaImage::from_pixel(64, 64, SKIN);
    for y in 48..64 {
        for x in 16..48 {
            image.put_pixel(x, y, CLEAR);
        }
    }
    image
}

fn load(path: &Path) -> RgbaImage {
    image::open(path).expect("output should decode").to_rgba8()
}

// ============================================================================
// Single file mode
// ============================================================================

#[test]
fn test_convert_single_legacy_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("steve.png");
    legacy_skin().save(&input).unwrap();

    let output = run_skinup(&["convert", "steve.png"], temp.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Successfully converted 64x32"));

    let converted = load(&temp.path().join("steve_converted.png"));
    assert_eq!(converted.dimensions(), (64, 64));
    assert_eq!(converted.get_pixel(40, 60), &SKIN);
}

#[test]
fn test_convert_single_repairable_file() {
    let temp = TempDir::new().unwrap();
    half_modern_skin().save(temp.path().join("alex.png")).unwrap();

    let output = run_skinup(&["convert", "alex.png"], temp.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Successfully fixed 64x64 (fill bottom)"));

    let fixed = load(&temp.path().join("alex_fixed.png"));
    assert_eq!(fixed.get_pixel(20, 60), &SKIN);
}

#[test]
fn test_convert_single_complete_file_is_skipped() {
    let temp = TempDir::new().unwrap();
    RgbaImage::from_pixel(64, 64, SKIN).save(temp.path().join("full.png")).unwrap();

    let output = run_skinup(&["convert", "full.png"], temp.path());
    assert!(output.status.success());
    assert!(stdout(&output).contains("Skipped 64x64 (bottom does not meet requirements)"));
    assert!(!temp.path().join("full_fixed.png").exists());
}

#[test]
fn test_convert_non_png_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "hello").unwrap();

    let output = run_skinup(&["convert", "notes.txt"], temp.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("File is not PNG"));
}

#[test]
fn test_convert_missing_path() {
    let temp = TempDir::new().unwrap();
    let output = run_skinup(&["convert", "nope.png"], temp.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to access path"));
}

#[test]
fn test_convert_corrupt_file_exit_code() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.png"), "not a png").unwrap();

    let output = run_skinup(&["convert", "broken.png"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load"));

    let output = run_skinup(&["convert", "broken.png", "--no-fail-on-error"], temp.path());
    assert!(output.status.success());
}

// ============================================================================
// Directory mode
// ============================================================================

#[test]
fn test_convert_directory_recursive() {
    let temp = TempDir::new().unwrap();
    let skins = temp.path().join("skins");
    fs::create_dir_all(skins.join("old")).unwrap();
    legacy_skin().save(skins.join("old/steve.png")).unwrap();
    half_modern_skin().save(skins.join("alex.png")).unwrap();
    RgbaImage::new(16, 16).save(skins.join("icon.png")).unwrap();

    let output = run_skinup(&["convert", "skins", "--jobs", "2"], temp.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out_dir = skins.join("converted");
    assert!(out_dir.join("steve_converted.png").exists());
    assert!(out_dir.join("alex_fixed.png").exists());
    assert!(stdout(&output).contains("Skipped (unsupported size): "));
    assert!(stdout(&output).contains("1 converted, 1 fixed, 1 skipped, 0 failed"));
}

#[test]
fn test_convert_directory_twice_skips_output_folder() {
    let temp = TempDir::new().unwrap();
    let skins = temp.path().join("skins");
    fs::create_dir_all(&skins).unwrap();
    legacy_skin().save(skins.join("steve.png")).unwrap();

    let first = run_skinup(&["convert", "skins"], temp.path());
    assert!(first.status.success());

    let second = run_skinup(&["convert", "skins"], temp.path());
    assert!(second.status.success());
    assert!(stdout(&second).contains("1 converted, 0 fixed, 0 skipped, 0 failed"));
    assert!(!skins.join("converted/steve_converted_converted.png").exists());
}

#[test]
fn test_convert_directory_uses_config_file() {
    let temp = TempDir::new().unwrap();
    let skins = temp.path().join("skins");
    fs::create_dir_all(&skins).unwrap();
    legacy_skin().save(skins.join("steve.png")).unwrap();
    fs::write(
        temp.path().join("skinup.toml"),
        "[output]\ndir_name = \"modern\"\nconverted_suffix = \"_64\"\n",
    )
    .unwrap();

    let output = run_skinup(&["convert", "skins"], temp.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(skins.join("modern/steve_64.png").exists());
}

#[test]
fn test_convert_output_dir_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let skins = temp.path().join("skins");
    fs::create_dir_all(&skins).unwrap();
    legacy_skin().save(skins.join("steve.png")).unwrap();

    let output = run_skinup(&["convert", "skins", "--output-dir", "out"], temp.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(skins.join("out/steve_converted.png").exists());
}

#[test]
fn test_convert_invalid_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("skinup.toml"), "[output]\nfixed_suffix = \"\"\n").unwrap();
    legacy_skin().save(temp.path().join("steve.png")).unwrap();

    let output = run_skinup(&["convert", "steve.png"], temp.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("output.fixed_suffix"));
}

// ============================================================================
// Probe
// ============================================================================

#[test]
fn test_probe_json() {
    let temp = TempDir::new().unwrap();
    half_modern_skin().save(temp.path().join("alex.png")).unwrap();

    let output = run_skinup(&["probe", "alex.png", "--json"], temp.path());
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["layout"], "modern");
    assert_eq!(report["variant"]["is_slim_top"], false);
    assert_eq!(report["variant"]["is_slim_body"], false);
    assert_eq!(report["repairable"], true);
}

#[test]
fn test_probe_text_unsupported_size() {
    let temp = TempDir::new().unwrap();
    RgbaImage::new(32, 32).save(temp.path().join("tiny.png")).unwrap();

    let output = run_skinup(&["probe", "tiny.png"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("unsupported size 32x32"));
}
