//! Dataset text format reading and writing
//!
//! One instruction per line. Blank lines and lines starting with `#` are
//! ignored; everything else must parse as an instruction, reported with its
//! one-based line number on failure.

use crate::io::error::{Result, WalkError, parse_error};
use crate::walk::instruction::Instruction;
use std::path::Path;

/// Parse dataset text into an instruction sequence
///
/// # Errors
///
/// Returns [`WalkError::DatasetParse`] for the first line that fails to
/// parse, carrying its one-based line number.
pub fn parse_dataset(text: &str) -> Result<Vec<Instruction>> {
    let mut instructions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let instruction = trimmed
            .parse::<Instruction>()
            .map_err(|error| parse_error(index + 1, &error))?;
        instructions.push(instruction);
    }
    Ok(instructions)
}

/// Read and parse a dataset file
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line fails to parse.
pub fn load_dataset(path: &Path) -> Result<Vec<Instruction>> {
    let text = std::fs::read_to_string(path).map_err(|e| WalkError::FileSystem {
        path: path.to_path_buf(),
        operation: "read file",
        source: e,
    })?;
    parse_dataset(&text)
}

/// Write an instruction sequence to a dataset file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_dataset(instructions: &[Instruction], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| WalkError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let mut text = String::new();
    for instruction in instructions {
        text.push_str(&instruction.to_string());
        text.push('\n');
    }
    std::fs::write(path, text).map_err(|e| WalkError::FileSystem {
        path: path.to_path_buf(),
        operation: "write file",
        source: e,
    })
}
