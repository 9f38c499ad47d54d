//! Error types for walk and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all walk and rendering operations
#[derive(Debug)]
pub enum WalkError {
    /// Canvas or walk parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A dataset line could not be parsed as an instruction
    DatasetParse {
        /// One-based line number within the dataset text
        line: usize,
        /// Description of what is wrong with the line
        reason: String,
    },

    /// The instruction sequence is unusable as a whole
    ///
    /// Raised when exporting a visualization of a walk that never drew a
    /// scene, or when a dataset violates sequence-level rules.
    InvalidDataset {
        /// Description of what is wrong with the sequence
        reason: String,
    },

    /// A colour specification matched neither a known name nor `#RRGGBB`
    UnknownColour {
        /// The rejected specification
        value: String,
    },

    /// An instruction moved the cursor outside the grid
    OutOfBounds {
        /// Destination column (zero-based, may be negative)
        column: i64,
        /// Destination row (zero-based, may be negative)
        row: i64,
        /// Instruction index when the violation occurred
        iteration: usize,
        /// Grid dimensions (columns, rows)
        grid: (usize, usize),
    },

    /// A `Change` or `Move` instruction arrived before any `Start`
    MissingStart {
        /// Instruction index when the violation occurred
        iteration: usize,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DatasetParse { line, reason } => {
                write!(f, "Dataset line {line}: {reason}")
            }
            Self::InvalidDataset { reason } => {
                write!(f, "Invalid dataset: {reason}")
            }
            Self::UnknownColour { value } => {
                write!(f, "Unknown colour '{value}' (expected a name or #RRGGBB)")
            }
            Self::OutOfBounds {
                column,
                row,
                iteration,
                grid,
            } => {
                write!(
                    f,
                    "Instruction {iteration} leaves the grid at column {column}, row {row} \
                     (grid size {}x{})",
                    grid.0, grid.1
                )
            }
            Self::MissingStart { iteration } => {
                write!(
                    f,
                    "Instruction {iteration} arrived before any start instruction"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for walk results
pub type Result<T> = std::result::Result<T, WalkError>;

impl From<image::ImageError> for WalkError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for WalkError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WalkError {
    WalkError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a dataset parse error for a specific line
pub fn parse_error(line: usize, reason: &impl ToString) -> WalkError {
    WalkError::DatasetParse {
        line,
        reason: reason.to_string(),
    }
}
