//! Configuration schema types for `skinup.toml`
//!
//! Defines the structure and validation rules for skinup configuration.

use serde::{Deserialize, Serialize};

/// Output naming section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output folder created under the input directory in directory mode.
    /// Folders with this name are skipped when walking the input.
    #[serde(default = "default_dir_name")]
    pub dir_name: String,
    /// Suffix appended to upgraded 64x32 skins
    #[serde(default = "default_converted_suffix")]
    pub converted_suffix: String,
    /// Suffix appended to repaired 64x64 skins
    #[serde(default = "default_fixed_suffix")]
    pub fixed_suffix: String,
}

fn default_dir_name() -> String {
    "converted".to_string()
}

fn default_converted_suffix() -> String {
    "_converted".to_string()
}

fn default_fixed_suffix() -> String {
    "_fixed".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir_name: default_dir_name(),
            converted_suffix: default_converted_suffix(),
            fixed_suffix: default_fixed_suffix(),
        }
    }
}

/// Batch processing section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of parallel jobs (0 = available parallelism)
    #[serde(default)]
    pub jobs: usize,
    /// Exit non-zero when any file fails to load or save
    #[serde(default = "default_true")]
    pub fail_on_error: bool,
}

fn default_true() -> bool {
    true
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { jobs: 0, fail_on_error: true }
    }
}

/// Root configuration structure for `skinup.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinupConfig {
    /// Output naming
    #[serde(default)]
    pub output: OutputConfig,
    /// Batch processing
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "output.dir_name")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "skinup.toml: '{}' {}", self.field, self.message)
    }
}

impl SkinupConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let dir_name = &self.output.dir_name;
        if dir_name.is_empty() {
            errors.push(ConfigValidationError {
                field: "output.dir_name".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        } else if dir_name == "." || dir_name == ".." || dir_name.contains(['/', '\\']) {
            errors.push(ConfigValidationError {
                field: "output.dir_name".to_string(),
                message: "must be a plain folder name".to_string(),
            });
        }

        if self.output.converted_suffix.is_empty() {
            errors.push(ConfigValidationError {
                field: "output.converted_suffix".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if self.output.fixed_suffix.is_empty() {
            errors.push(ConfigValidationError {
                field: "output.fixed_suffix".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        errors
    }
}
