//! Program loader.
//!
//! Reads instruction text from disk and decodes it into a [`Program`]. Fails
//! fast: an unreadable file or a file without instructions is an error, so no
//! analysis ever runs on missing data.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::error::LoadError;
use crate::isa::{Program, parse_program};

/// Decodes program text, rejecting text that holds no instructions.
///
/// # Arguments
///
/// * `source` - Instruction text, one instruction per line.
/// * `path` - Origin of the text, used in the error.
///
/// # Errors
///
/// [`LoadError::Empty`] when no line decodes to an instruction.
pub fn parse_source(source: &str, path: &Path) -> Result<Program, LoadError> {
    let program = parse_program(source);
    if program.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(program)
}

/// Loads and decodes a program file.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be read, [`LoadError::Empty`] when
/// it contains no instructions.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let program = parse_source(&source, path)?;
    info!(path = %path.display(), instructions = program.len(), "program loaded");
    Ok(program)
}
