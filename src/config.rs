//! Command-line configuration.
//!
//! The generator itself takes no options. This file only tunes the console
//! front end: how input is prompted for and how results are printed.
//!
//! ## Config File Location
//!
//! `anagrams.toml` in the working directory is picked up automatically.
//! `--config PATH` loads a specific file instead (and fails if it is missing).
//! With neither, the stock defaults apply.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [input]
//! prompt = "Enter a group of distinct letters (e.g. abc): "
//! # max_letters = 10       # Refuse longer inputs (omit for no limit)
//!
//! [output]
//! format = "lines"         # "lines" (one per line) or "json" (one array)
//! summary = false          # Print "N anagrams" to stderr afterwards
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "anagrams.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// How input is obtained.
    pub input: InputConfig,
    /// How results are printed.
    pub output: OutputConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.max_letters == Some(0) {
            return Err(ConfigError::Validation(
                "input.max_letters must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Shown on stdout before reading a line when no argument is given.
    pub prompt: String,
    /// Longest input the front end accepts. `None` means unbounded; the
    /// output grows as `n!`, so keep this small if set.
    pub max_letters: Option<usize>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter a group of distinct letters (e.g. abc): ".to_string(),
            max_letters: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print a count line to stderr after the results.
    pub summary: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One anagram per line
    #[default]
    Lines,
    /// A single JSON array of strings
    Json,
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load `path` if given, else `anagrams.toml` from `dir` if present, else
/// the stock defaults.
///
/// An explicit path must exist; the implicit file is optional.
pub fn load_optional(path: Option<&Path>, dir: &Path) -> Result<AppConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => {
            let implicit = dir.join(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                load_config(&implicit)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

/// Stock `anagrams.toml` with every option documented.
pub fn stock_config_toml() -> &'static str {
    r#"# anagrams configuration
# All options are optional. Remove or comment out what you don't change.

[input]
# Prompt shown when no letters are passed on the command line.
prompt = "Enter a group of distinct letters (e.g. abc): "
# Refuse inputs longer than this. Output size is n!, so 10 letters already
# means 3,628,800 lines. Omit for no limit.
# max_letters = 10

[output]
# "lines": one anagram per line. "json": a single JSON array.
format = "lines"
# Print "N anagrams" to stderr after the results.
summary = false
"#
}
