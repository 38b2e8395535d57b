//! Command-line interface for solving brick layout files
//!
//! A layout names a first layer of bricks; solving it means validating the
//! layer and building a different second layer over the same grid. Input
//! comes from standard input, a single layout file, or a directory of
//! layout files processed as a batch.

use crate::algorithm::engine::build_second_layer;
use crate::algorithm::validation::validate_first_layer;
use crate::io::configuration::{INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{BrickworkError, Result, file_system_error};
use crate::io::progress::ProgressManager;
use crate::io::reader::read_first_layer;
use crate::io::render::{render_diagram, render_plain};
use crate::spatial::Layer;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "brickwork")]
#[command(
    author,
    version,
    about = "Validate a brick layer and build a different layer over it"
)]
/// Command-line arguments for the re-tiling tool
pub struct Cli {
    /// Layout file or directory to process; reads standard input when omitted
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Render the second layer as an ASCII diagram instead of plain rows
    #[arg(short, long)]
    pub diagram: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Solve one layout: parse the first layer, validate its shape, and build
/// the second layer
///
/// # Errors
///
/// Returns the first parsing, validation, or re-tiling error; no partial
/// result survives a failure.
pub fn solve_layout<R: BufRead>(input: R) -> Result<Layer> {
    let mut first_layer = read_first_layer(input)?;
    validate_first_layer(&first_layer)?;
    build_second_layer(&mut first_layer)
}

/// Orchestrates solving layout targets with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process standard input or the target path
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or layout solving fails.
    pub fn process(&mut self) -> Result<()> {
        if let Some(target) = self.cli.target.clone() {
            return self.process_target(&target);
        }
        Self::process_stdin(&self.cli)
    }

    // Program output belongs on stdout
    #[allow(clippy::print_stdout)]
    fn process_stdin(cli: &Cli) -> Result<()> {
        let stdin = std::io::stdin();
        let second_layer = solve_layout(stdin.lock())?;
        let rendered = render_layer(cli, &second_layer)?;
        println!("{rendered}");
        Ok(())
    }

    fn process_target(&mut self, target: &Path) -> Result<()> {
        let files = self.collect_files(target)?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self, target: &Path) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                if self.should_process_file(target) {
                    Ok(vec![target.to_path_buf()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(BrickworkError::InvalidTarget {
                    path: target.to_path_buf(),
                    reason: "target file must be a .txt layout",
                })
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)
                .map_err(|source| file_system_error(target, "read", source))?
            {
                let path = entry
                    .map_err(|source| file_system_error(target, "read", source))?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                    && !Self::is_result_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(BrickworkError::InvalidTarget {
                path: target.to_path_buf(),
                reason: "target must be a layout file or directory",
            })
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback when skipping
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let file =
            File::open(input_path).map_err(|source| file_system_error(input_path, "open", source))?;
        let second_layer = solve_layout(BufReader::new(file))?;
        let rendered = render_layer(&self.cli, &second_layer)?;

        let output_path = Self::output_path(input_path);
        std::fs::write(&output_path, rendered + "\n")
            .map_err(|source| file_system_error(&output_path, "write", source))?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    // Keeps a directory sweep from re-ingesting its own results
    fn is_result_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Render the second layer according to the chosen output style
fn render_layer(cli: &Cli, layer: &Layer) -> Result<String> {
    if cli.diagram {
        render_diagram(layer)
    } else {
        render_plain(layer)
    }
}
