//! Presenters for completed brick layers
//!
//! The core exposes a layer as a row-major mapping from position to brick
//! id; these renderers turn that into plain rows of integers or an
//! ASCII-art diagram grouping each domino's two halves.

use crate::io::error::Result;
use crate::spatial::Layer;

/// Render a layer as space-separated brick ids, one line per row
///
/// # Errors
///
/// Propagates `OutOfRange` if the layer reports inconsistent dimensions.
pub fn render_plain(layer: &Layer) -> Result<String> {
    let mut lines = Vec::with_capacity(layer.rows());

    for row in 0..layer.rows() as i32 {
        let mut values = Vec::with_capacity(layer.cols());
        for col in 0..layer.cols() as i32 {
            values.push(layer.value(row, col)?.to_string());
        }
        lines.push(values.join(" "));
    }
    Ok(lines.join("\n"))
}

/// Render a layer as an ASCII wall diagram
///
/// Cells are drawn inside a grid of `*` walls; the wall between the two
/// halves of one brick is omitted, so every domino reads as a single
/// connected room:
///
/// ```text
/// *********
/// *2*1 1*4*
/// * ***** *
/// *2*3 3*4*
/// *********
/// ```
///
/// # Errors
///
/// Propagates `OutOfRange` if the layer reports inconsistent dimensions.
pub fn render_diagram(layer: &Layer) -> Result<String> {
    let width = cell_width(layer)?;
    let border = "*".repeat(layer.cols() * (width + 1) + 1);

    let mut lines = vec![border.clone()];
    for row in 0..layer.rows() as i32 {
        lines.push(value_line(layer, row, width)?);
        if row + 1 < layer.rows() as i32 {
            lines.push(separation_line(layer, row, width)?);
        }
    }
    lines.push(border);

    Ok(lines.join("\n"))
}

/// One row of cell values, with walls between cells of different bricks
fn value_line(layer: &Layer, row: i32, width: usize) -> Result<String> {
    let mut line = String::from("*");
    for col in 0..layer.cols() as i32 {
        let value = layer.value(row, col)?;
        line.push_str(&format!("{value:>width$}"));

        let fused = col + 1 < layer.cols() as i32 && layer.value(row, col + 1)? == value;
        line.push(if fused { ' ' } else { '*' });
    }
    Ok(line)
}

/// The wall between one row and the next, opened under vertical bricks
fn separation_line(layer: &Layer, row: i32, width: usize) -> Result<String> {
    let mut line = String::from("*");
    for col in 0..layer.cols() as i32 {
        let fused = layer.value(row, col)? == layer.value(row + 1, col)?;
        if fused {
            line.push_str(&" ".repeat(width));
        } else {
            line.push_str(&"*".repeat(width));
        }
        line.push('*');
    }
    Ok(line)
}

/// Widest rendered cell value in the layer, for column alignment
fn cell_width(layer: &Layer) -> Result<usize> {
    let mut width = 1;
    for row in 0..layer.rows() as i32 {
        for col in 0..layer.cols() as i32 {
            width = width.max(layer.value(row, col)?.to_string().len());
        }
    }
    Ok(width)
}
