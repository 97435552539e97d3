//! PNG input/output and output path generation

use image::RgbaImage;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for loading and saving skins
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image decoding or encoding error
    Image(image::ImageError),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

/// Decode a PNG file into straight (non-premultiplied) RGBA8.
pub fn load_png(path: &Path) -> Result<RgbaImage, OutputError> {
    let reader = image::io::Reader::open(path)?.with_guessed_format()?;
    Ok(reader.decode()?.to_rgba8())
}

/// Save an RGBA image to a PNG file.
///
/// Parent directories are created when missing.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// File name of `input` with a trailing `.png` removed.
///
/// A file literally named `.png` keeps its name.
pub fn output_stem(input: &Path) -> String {
    let name = input.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    match name.strip_suffix(".png") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

/// Generate the output path for a processed skin.
///
/// | Scenario | Output |
/// |----------|--------|
/// | Single file `dir/steve.png`, upgraded | `dir/steve_converted.png` |
/// | Single file `dir/alex.png`, repaired | `dir/alex_fixed.png` |
/// | Directory mode with `out_dir` | `out_dir/{stem}{suffix}.png` |
pub fn generate_output_path(input: &Path, out_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let file_name = format!("{}{}.png", output_stem(input), suffix);
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => {
            let parent = input.parent().unwrap_or(Path::new(""));
            if parent.as_os_str().is_empty() {
                PathBuf::from(file_name)
            } else {
                parent.join(file_name)
            }
        }
    }
}
