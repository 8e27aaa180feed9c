//! Configuration system for the hazard analyser.
//!
//! This module defines the structures used to parameterize a session. It provides:
//! 1. **Defaults:** The three classic runs and output locations.
//! 2. **Run selection:** Forwarding and branch prediction flags per run.
//! 3. **Output:** Where reports go and whether summaries are echoed.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or built with
//! `Config::default()`; every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration values.
mod defaults {
    /// Directory receiving report files.
    pub const OUTPUT_DIR: &str = ".";

    /// Report files are written unless disabled.
    pub const WRITE_FILES: bool = true;

    /// Summaries are echoed to stdout unless disabled.
    pub const ECHO_SUMMARY: bool = true;
}

/// Flags selecting the hazard policies of a single run.
///
/// Immutable for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Report name; derived from the flags when absent.
    #[serde(default)]
    pub name: Option<String>,

    /// Results are forwarded, so only load-use hazards stall.
    #[serde(default)]
    pub forwarding: bool,

    /// Branches are predicted; only mispredicted ones stall their successor.
    #[serde(default)]
    pub branch_prediction: bool,
}

impl RunConfig {
    /// A run with the given flags and a derived name.
    pub const fn new(forwarding: bool, branch_prediction: bool) -> Self {
        Self {
            name: None,
            forwarding,
            branch_prediction,
        }
    }

    /// No forwarding, no branch prediction.
    pub const fn baseline() -> Self {
        Self::new(false, false)
    }

    /// Forwarding, no branch prediction.
    pub const fn forwarding() -> Self {
        Self::new(true, false)
    }

    /// Forwarding and branch prediction.
    pub const fn forwarding_with_prediction() -> Self {
        Self::new(true, true)
    }

    /// The three classic configurations, in order.
    pub fn standard() -> Vec<Self> {
        vec![
            Self::baseline(),
            Self::forwarding(),
            Self::forwarding_with_prediction(),
        ]
    }

    /// Overrides the report name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Report name, e.g. `with_forward_no_bp`.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!(
                "{}_forward_{}_bp",
                if self.forwarding { "with" } else { "no" },
                if self.branch_prediction { "with" } else { "no" },
            )
        })
    }
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `<run>_<N>.txt` report files.
    #[serde(default = "OutputConfig::default_dir")]
    pub dir: PathBuf,

    /// Write report files.
    #[serde(default = "OutputConfig::default_write_files")]
    pub write_files: bool,

    /// Print each run summary to stdout.
    #[serde(default = "OutputConfig::default_echo_summary")]
    pub echo_summary: bool,
}

impl OutputConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from(defaults::OUTPUT_DIR)
    }

    const fn default_write_files() -> bool {
        defaults::WRITE_FILES
    }

    const fn default_echo_summary() -> bool {
        defaults::ECHO_SUMMARY
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            write_files: defaults::WRITE_FILES,
            echo_summary: defaults::ECHO_SUMMARY,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use stallscope_core::config::Config;
///
/// let json = r#"{
///     "seed": 42,
///     "output": { "dir": "reports", "write_files": false },
///     "runs": [
///         { "name": "fwd", "forwarding": true }
///     ]
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.seed, Some(42));
/// assert!(!config.output.write_files);
/// assert!(config.output.echo_summary);
/// assert_eq!(config.runs.len(), 1);
/// assert!(config.runs[0].forwarding);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Seed for the misprediction draw; OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Runs to perform, in order.
    #[serde(default = "RunConfig::standard")]
    pub runs: Vec<RunConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            output: OutputConfig::default(),
            runs: RunConfig::standard(),
        }
    }
}

impl Config {
    /// Parses a JSON configuration string.
    ///
    /// # Errors
    ///
    /// Returns the deserializer error for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file is unreadable, malformed, or lists no runs.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoRuns`] when `runs` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runs.is_empty() {
            return Err(ConfigError::NoRuns);
        }
        Ok(())
    }
}
