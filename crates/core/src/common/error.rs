//! Error definitions.
//!
//! The hazard engine itself is total and never fails. Errors only arise at the
//! I/O boundary:
//! 1. **Loading:** The program source cannot be read or holds no instructions.
//! 2. **Configuration:** A configuration file cannot be read, parsed, or names no runs.
//! 3. **Reporting:** A report file cannot be written.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while acquiring a program from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("could not read program `{}`", path.display())]
    Io {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The input was readable but contained no instructions.
    #[error("program `{}` contains no instructions", path.display())]
    Empty {
        /// Path of the input file.
        path: PathBuf,
    },
}

/// Failure while reading a JSON configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config `{}`", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config `{}`", path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration explicitly lists zero runs.
    #[error("configuration defines no runs")]
    NoRuns,
}

/// Failure while writing a run report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report file or its directory could not be written.
    #[error("could not write report `{}`", path.display())]
    Io {
        /// Destination path of the report.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Any error surfaced by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Program acquisition failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Configuration handling failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Report output failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
