//! User configuration (`config.toml`).
//!
//! Looked up at `--config <PATH>` or in the platform config directory.
//! Problems with the file are reported as warnings and the defaults are used,
//! so a broken config never stops a run.

use directories::ProjectDirs;
use rpngrid_core::storage::{DEFAULT_DELIMITER, parse_delimiter};
use rpngrid_engine::engine::ERROR_MARKER;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 64 * 1024;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    delimiter: Option<String>,
    error_marker: Option<String>,
}

/// Resolved settings for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub delimiter: char,
    pub error_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiter: DEFAULT_DELIMITER,
            error_marker: ERROR_MARKER.to_string(),
        }
    }
}

/// Load configuration, returning it with any warnings.
///
/// `config_file` overrides the default location; when it is given but
/// missing, that is a warning. A missing default file is silent.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = Config::default();

    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (config, warnings);
    };
    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (config, warnings);
    }

    match read_config_file(&path) {
        Ok(content) => match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => apply(&mut config, file, &path, &mut warnings),
            Err(err) => warnings.push(format!("Failed to parse {}: {}", path.display(), err)),
        },
        Err(err) => warnings.push(format!("Failed to read {}: {}", path.display(), err)),
    }

    (config, warnings)
}

fn read_config_file(path: &Path) -> Result<String, String> {
    let meta = std::fs::metadata(path).map_err(|e| e.to_string())?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "file too large ({} bytes, max {})",
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    std::fs::read_to_string(path).map_err(|e| e.to_string())
}

fn apply(config: &mut Config, file: ConfigFile, path: &Path, warnings: &mut Vec<String>) {
    if let Some(delimiter) = file.delimiter {
        match parse_delimiter(&delimiter) {
            Ok(c) => config.delimiter = c,
            Err(err) => warnings.push(format!("{}: {}", path.display(), err)),
        }
    }
    if let Some(marker) = file.error_marker {
        match check_error_marker(&marker, config.delimiter) {
            Ok(()) => config.error_marker = marker,
            Err(err) => warnings.push(format!("{}: {}", path.display(), err)),
        }
    }
}

/// An error marker must be visible, must not look like a number and must
/// not contain the delimiter.
pub fn check_error_marker(marker: &str, delimiter: char) -> Result<(), String> {
    if marker.is_empty() || marker.chars().any(char::is_whitespace) {
        return Err(format!("error marker {:?} must be non-empty without whitespace", marker));
    }
    if marker.parse::<f64>().is_ok() {
        return Err(format!("error marker {:?} looks like a number", marker));
    }
    if marker.contains(delimiter) {
        return Err(format!(
            "error marker {:?} contains the delimiter {:?}",
            marker, delimiter
        ));
    }
    Ok(())
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "rpngrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
