//! Shape validation for a populated first layer
//!
//! Confirms that every cell of the input tiling belongs to exactly one
//! 1x2 brick before the re-tiling engine runs. Validation is fail-fast:
//! the first offending cell aborts with a typed error and no diagnostics
//! are accumulated.

use crate::io::error::{BrickworkError, Result};
use crate::spatial::Layer;
use crate::spatial::layer::NEIGHBOR_OFFSETS;

/// Cells a brick may cover in a straight line
const MAX_BRICK_SPAN: u32 = 2;

/// Validate that a populated layer is a well-formed brick tiling
///
/// Visits every cell in row-major order and checks, in this order, that the
/// value is positive, that at least one 4-neighbor holds the same value,
/// and that no same-valued straight run exceeds two cells.
///
/// # Errors
///
/// Returns `InvalidBrickValue` for a non-positive cell, `InvalidBrickShape`
/// for an isolated half or an overlong run, and propagates `OutOfRange`
/// if the layer reports inconsistent dimensions.
pub fn validate_first_layer(layer: &Layer) -> Result<()> {
    let rows = layer.rows() as i32;
    let cols = layer.cols() as i32;

    for row in 0..rows {
        for col in 0..cols {
            check_brick_span(layer, row, col)?;
        }
    }
    Ok(())
}

/// Per-cell check: positivity, matching half, and span in all four
/// directions
fn check_brick_span(layer: &Layer, row: i32, col: i32) -> Result<()> {
    let value = layer.value(row, col)?;
    if value <= 0 {
        return Err(BrickworkError::InvalidBrickValue {
            position: [row, col],
            value,
        });
    }

    ensure_matching_half(layer, row, col, value)?;

    for offset in NEIGHBOR_OFFSETS {
        walk_direction(layer, row, col, offset, value)?;
    }
    Ok(())
}

/// A brick half must have its other half somewhere among the 4-neighbors
fn ensure_matching_half(layer: &Layer, row: i32, col: i32, value: i32) -> Result<()> {
    for offset in NEIGHBOR_OFFSETS {
        if layer
            .value(row + offset[0], col + offset[1])
            .is_ok_and(|neighbor| neighbor == value)
        {
            return Ok(());
        }
    }

    Err(BrickworkError::InvalidBrickShape {
        position: [row, col],
        reason: "brick has no matching half",
    })
}

/// Follow a straight line of equal values away from the origin cell
///
/// Counting starts at 1 for the origin itself. The walk stops at the grid
/// edge or the first differing value, and fails as soon as the run exceeds
/// `MAX_BRICK_SPAN`, so it is bounded by construction.
fn walk_direction(layer: &Layer, row: i32, col: i32, offset: [i32; 2], value: i32) -> Result<()> {
    let mut occurrences: u32 = 1;
    let mut next_row = row + offset[0];
    let mut next_col = col + offset[1];

    while layer.value(next_row, next_col).is_ok_and(|next| next == value) {
        occurrences += 1;
        if occurrences > MAX_BRICK_SPAN {
            return Err(BrickworkError::InvalidBrickShape {
                position: [row, col],
                reason: "brick spans more than two cells",
            });
        }
        next_row += offset[0];
        next_col += offset[1];
    }
    Ok(())
}
