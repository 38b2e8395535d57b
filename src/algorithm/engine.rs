//! Greedy construction of the second brick layer
//!
//! Repeatedly scans the grid in row-major order, forms the first legal
//! brick it finds, and restarts the scan from the origin. Restarting after
//! every placement costs a full rescan per brick but pins down exactly
//! which brick forms next: the lowest row-major origin with a legal move.
//! The output is therefore a pure function of the input tiling.

use crate::io::error::{BrickworkError, Result};
use crate::spatial::Layer;
use crate::spatial::layer::NEIGHBOR_OFFSETS;

/// Placement offsets tried at each scan origin, in preference order:
/// horizontal (right) before vertical (up). A left or down neighbor never
/// starts a brick here, because it was already the right/up partner of an
/// earlier-scanned origin.
const PLACEMENT_OFFSETS: [[i32; 2]; 2] = [NEIGHBOR_OFFSETS[0], NEIGHBOR_OFFSETS[1]];

/// Build a complete second layer over a validated first layer
///
/// Every new brick spans two cells that held different ids in the first
/// layer, so the resulting tiling shares no brick with the input. The first
/// layer is progressively marked consumed (cells negated) as the second
/// layer fills; on success it consists entirely of negated ids.
///
/// # Errors
///
/// Returns `NoSolution` if a full scan pass finds no legal placement while
/// the second layer is still incomplete. Propagates `OutOfRange` only if a
/// placement escapes the scan bounds, which would be an internal defect.
pub fn build_second_layer(first_layer: &mut Layer) -> Result<Layer> {
    let mut second_layer = Layer::new(first_layer.rows() as i32, first_layer.cols() as i32)?;

    while !second_layer.is_complete() {
        if !place_next_brick(first_layer, &mut second_layer)? {
            return Err(BrickworkError::NoSolution {
                placed_bricks: second_layer.placed_bricks(),
                total_slots: second_layer.total_slots(),
            });
        }
    }
    Ok(second_layer)
}

/// One scan pass: place the first legal brick and report whether one was
/// placed
///
/// The pass is abandoned immediately after a placement so the next pass
/// starts over from (0, 0).
fn place_next_brick(first_layer: &mut Layer, second_layer: &mut Layer) -> Result<bool> {
    let rows = first_layer.rows() as i32;
    let cols = first_layer.cols() as i32;

    for row in 0..rows {
        for col in 0..cols {
            for offset in PLACEMENT_OFFSETS {
                if first_layer.can_place_brick(row, col, offset[0], offset[1]) {
                    second_layer.place_brick(row, col, offset[0], offset[1])?;
                    first_layer.mark_as_placed(row, col, offset[0], offset[1])?;
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}
