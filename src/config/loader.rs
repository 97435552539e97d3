//! Configuration loading and discovery for `skinup.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::SkinupConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "skinup.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse skinup.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output folder name
    pub dir_name: Option<String>,
    /// Override number of parallel jobs
    pub jobs: Option<usize>,
    /// Override exit status on failures
    pub fail_on_error: Option<bool>,
}

/// Find skinup.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for skinup.toml
/// 2. Check XDG_CONFIG_HOME/skinup/skinup.toml (or ~/.config/skinup/skinup.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find skinup.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("skinup").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find skinup.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a skinup.toml file.
///
/// If a path is provided, loads from that file (which must exist). Otherwise
/// uses [`find_config`] and falls back to defaults when nothing is found.
pub fn load_config(path: Option<&Path>) -> Result<SkinupConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(SkinupConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<SkinupConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: SkinupConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. The result is
/// validated again since overrides bypass the file checks.
pub fn merge_cli_overrides(
    config: &mut SkinupConfig,
    overrides: &CliOverrides,
) -> Result<(), ConfigError> {
    if let Some(ref dir_name) = overrides.dir_name {
        config.output.dir_name = dir_name.clone();
    }

    if let Some(jobs) = overrides.jobs {
        config.batch.jobs = jobs;
    }

    if let Some(fail_on_error) = overrides.fail_on_error {
        config.batch.fail_on_error = fail_on_error;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).expect("should create config file");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).expect("should create config file");

        let subdir = temp.path().join("skins").join("old");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(
                br#"
[output]
dir_name = "modern"
converted_suffix = "_64"

[batch]
jobs = 4
fail_on_error = false
"#,
            )
            .expect("should write config content");

        let config = load_config(Some(&config_path)).expect("should load config");
        assert_eq!(config.output.dir_name, "modern");
        assert_eq!(config.output.converted_suffix, "_64");
        assert_eq!(config.output.fixed_suffix, "_fixed");
        assert_eq!(config.batch.jobs, 4);
        assert!(!config.batch.fail_on_error);
    }

    #[test]
    fn test_load_config_missing_explicit_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_parse_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[output\ndir_name = ").expect("should write config");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[output]\ndir_name = \"a/b\"\n").expect("should write config");

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("output.dir_name"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = SkinupConfig::default();
        let overrides = CliOverrides {
            dir_name: Some("out".to_string()),
            jobs: Some(2),
            fail_on_error: Some(false),
        };
        merge_cli_overrides(&mut config, &overrides).expect("overrides are valid");
        assert_eq!(config.output.dir_name, "out");
        assert_eq!(config.batch.jobs, 2);
        assert!(!config.batch.fail_on_error);
    }

    #[test]
    fn test_merge_cli_overrides_empty_keeps_config() {
        let mut config = SkinupConfig::default();
        merge_cli_overrides(&mut config, &CliOverrides::default()).expect("defaults are valid");
        assert_eq!(config, SkinupConfig::default());
    }

    #[test]
    fn test_merge_cli_overrides_invalid_dir_name() {
        let mut config = SkinupConfig::default();
        let overrides = CliOverrides { dir_name: Some("..".to_string()), ..Default::default() };
        assert!(matches!(
            merge_cli_overrides(&mut config, &overrides),
            Err(ConfigError::Validation(_))
        ));
    }
}
