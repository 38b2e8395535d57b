//! Error types for layer construction, validation, and re-tiling

use std::fmt;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

/// Main error type for all brickwork operations
#[derive(Debug)]
pub enum BrickworkError {
    /// Layer dimension is odd or outside the supported range
    InvalidDimension {
        /// Name of the offending dimension ("rows" or "cols")
        parameter: &'static str,
        /// Provided value that failed validation
        value: i32,
    },

    /// A cell holds a non-positive value where a brick id is required
    InvalidBrickValue {
        /// Grid position (row, col) of the offending cell
        position: [i32; 2],
        /// The non-positive value found there
        value: i32,
    },

    /// A cell's neighborhood does not form exactly a 1x2 brick
    InvalidBrickShape {
        /// Grid position (row, col) of the offending cell
        position: [i32; 2],
        /// Description of the shape violation
        reason: &'static str,
    },

    /// The greedy engine ran out of legal moves before covering the grid
    NoSolution {
        /// Bricks placed before the engine stalled
        placed_bricks: usize,
        /// Bricks a complete layer requires
        total_slots: usize,
    },

    /// Coordinates outside the grid were passed to a layer operation
    ///
    /// A defensive invariant violation rather than a user-facing condition:
    /// callers respecting the scan bounds never trigger it.
    OutOfRange {
        /// The rejected position (row, col)
        position: [i32; 2],
        /// Current layer dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// The dimension header line is missing or malformed
    InvalidHeader {
        /// Content of the offending line
        content: String,
    },

    /// Input supplied the wrong number of data rows
    InvalidRowCount {
        /// Rows declared by the header
        expected: usize,
        /// Rows actually supplied
        actual: usize,
    },

    /// A data row supplied the wrong number of columns
    InvalidColCount {
        /// Zero-based index of the offending row
        row: usize,
        /// Columns declared by the header
        expected: usize,
        /// Columns actually supplied
        actual: usize,
    },

    /// An input token could not be parsed as an integer
    InvalidToken {
        /// One-based input line number
        line: usize,
        /// The unparseable token
        token: String,
        /// Underlying integer parsing error
        source: ParseIntError,
    },

    /// CLI target is neither a layout file nor a directory
    InvalidTarget {
        /// The rejected path
        path: PathBuf,
        /// Why the target was rejected
        reason: &'static str,
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

impl fmt::Display for BrickworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { parameter, value } => {
                write!(
                    f,
                    "Invalid {parameter} = {value}: must be an even number between 2 and 100"
                )
            }
            Self::InvalidBrickValue { position, value } => {
                write!(
                    f,
                    "Invalid brick value {value} at ({}, {}): ids must be positive",
                    position[0], position[1]
                )
            }
            Self::InvalidBrickShape { position, reason } => {
                write!(
                    f,
                    "Invalid brick at ({}, {}): {reason}",
                    position[0], position[1]
                )
            }
            Self::NoSolution {
                placed_bricks,
                total_slots,
            } => {
                write!(
                    f,
                    "No solution: placed {placed_bricks} of {total_slots} bricks before running out of legal moves"
                )
            }
            Self::OutOfRange {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} layer",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidHeader { content } => {
                write!(
                    f,
                    "Invalid dimension header '{content}': expected two integers"
                )
            }
            Self::InvalidRowCount { expected, actual } => {
                write!(f, "Invalid number of rows: expected {expected}, found {actual}")
            }
            Self::InvalidColCount {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid number of cols in row {row}: expected {expected}, found {actual}"
                )
            }
            Self::InvalidToken {
                line,
                token,
                source,
            } => {
                write!(f, "Invalid token '{token}' on line {line}: {source}")
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
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

impl std::error::Error for BrickworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidToken { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for brickwork results
pub type Result<T> = std::result::Result<T, BrickworkError>;

impl From<std::io::Error> for BrickworkError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a file system error for a failed operation on a path
pub fn file_system_error(
    path: &Path,
    operation: &'static str,
    source: std::io::Error,
) -> BrickworkError {
    BrickworkError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
