//! I/O constants and output conventions

/// Extension recognized for layout input files
pub const INPUT_EXTENSION: &str = "txt";

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: usize = 40;
