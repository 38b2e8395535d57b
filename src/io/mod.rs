//! Input/output adapters around the re-tiling core
//!
//! The core never performs I/O; everything here maps between the outside
//! world (lines of text, files, the terminal) and the core's typed API.

/// Command-line interface and batch file processing
pub mod cli;
/// I/O constants and output conventions
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Batch progress tracking
pub mod progress;
/// Line-based layout parsing
pub mod reader;
/// Layer presenters
pub mod render;
