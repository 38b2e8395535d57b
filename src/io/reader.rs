//! Line-based parsing of brick layout input
//!
//! The reader consumes a dimension header followed by exactly `rows` data
//! lines and populates a first-layer grid. It checks line and token counts
//! only; brick geometry is the validator's concern.

use std::io::BufRead;

use crate::io::error::{BrickworkError, Result};
use crate::spatial::Layer;

/// Read a first layer from line-based input
///
/// The first line must hold exactly two integers, `rows` and `cols`; the
/// next `rows` lines must each hold exactly `cols` integers. Input must
/// end after the last data row (trailing blank space is tolerated,
/// trailing content is not).
///
/// # Errors
///
/// Returns `InvalidHeader` for a missing or malformed dimension line,
/// `InvalidDimension` for odd or out-of-bounds dimensions, `InvalidToken`
/// for non-integer tokens, `InvalidRowCount`/`InvalidColCount` when the
/// supplied grid does not match the declared shape, and `FileSystem` if
/// the underlying source fails.
pub fn read_first_layer<R: BufRead>(input: R) -> Result<Layer> {
    let mut lines = input.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(BrickworkError::InvalidHeader {
                content: String::new(),
            });
        }
    };
    let (rows, cols) = parse_header(&header)?;
    let mut layer = Layer::new(rows, cols)?;

    for row in 0..layer.rows() {
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(BrickworkError::InvalidRowCount {
                    expected: layer.rows(),
                    actual: row,
                });
            }
        };

        // Data rows start on line 2, after the header
        let values = parse_tokens(&line, row + 2)?;
        if values.len() != layer.cols() {
            return Err(BrickworkError::InvalidColCount {
                row,
                expected: layer.cols(),
                actual: values.len(),
            });
        }
        for (col, value) in values.iter().enumerate() {
            layer.set_value(row as i32, col as i32, *value)?;
        }
    }

    // Content after the declared rows means the header undersold the input
    if let Some(line) = lines.next()
        && !line?.trim().is_empty()
    {
        return Err(BrickworkError::InvalidRowCount {
            expected: layer.rows(),
            actual: layer.rows() + 1,
        });
    }

    Ok(layer)
}

/// Parse the `rows cols` dimension header
fn parse_header(header: &str) -> Result<(i32, i32)> {
    let tokens = parse_tokens(header, 1)?;
    match tokens.as_slice() {
        [rows, cols] => Ok((*rows, *cols)),
        _ => Err(BrickworkError::InvalidHeader {
            content: header.trim().to_string(),
        }),
    }
}

/// Split a line on whitespace and parse every token as an integer
fn parse_tokens(line: &str, line_number: usize) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|source| BrickworkError::InvalidToken {
                    line: line_number,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}
