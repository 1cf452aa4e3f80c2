use crate::core::constants::{CELL_SIZE_DEG, SPAN_TOLERANCE_DEG};
use crate::util::coord::Coordinate;

/// Number of whole cells covering `span` degrees.
///
/// Returns `None` if the span is not finite, not positive, or not a multiple of
/// [`CELL_SIZE_DEG`] within tolerance.
pub fn span_to_cells(span: f64) -> Option<u32> {
    if !span.is_finite() || span <= 0.0 {
        return None;
    }

    let cells = (span / CELL_SIZE_DEG).round();
    if cells < 1.0 || cells > u32::MAX as f64 {
        return None;
    }
    if (cells * CELL_SIZE_DEG - span).abs() > SPAN_TOLERANCE_DEG {
        return None;
    }

    Some(cells as u32)
}

/// Converts a coordinate to `(row, col)` relative to a chart's northwest corner.
///
/// Rows count south from `north_lat`, columns count east from `west_lon`. Both use
/// `floor`, so points north or west of the corner give negative indices.
pub fn point_to_row_col<C: Coordinate>(coord: &C, north_lat: f64, west_lon: f64) -> (i64, i64) {
    let row = ((north_lat - coord.lat()) / CELL_SIZE_DEG).floor() as i64;
    let col = ((coord.lon() - west_lon) / CELL_SIZE_DEG).floor() as i64;
    (row, col)
}

/// Row-major, 1-based cell number for a `(row, col)` pair.
pub fn row_col_to_cell_number(row: i64, col: i64, columns_per_row: u32) -> i64 {
    row * columns_per_row as i64 + col + 1
}

/// Inverse of [`row_col_to_cell_number`] for a grid of `rows` x `columns_per_row` cells.
///
/// Returns `None` for cell numbers outside `1..=rows * columns_per_row`.
pub fn cell_number_to_row_col(
    cell_number: u32,
    columns_per_row: u32,
    rows: u32,
) -> Option<(u32, u32)> {
    if cell_number == 0 || columns_per_row == 0 {
        return None;
    }

    let index = cell_number - 1;
    let row = index / columns_per_row;
    let col = index % columns_per_row;
    if row >= rows {
        return None;
    }

    Some((row, col))
}

/// Northwest corner `(lat, lon)` of the cell at `(row, col)`.
pub fn row_col_to_corner(row: u32, col: u32, north_lat: f64, west_lon: f64) -> (f64, f64) {
    let lat = north_lat - row as f64 * CELL_SIZE_DEG;
    let lon = west_lon + col as f64 * CELL_SIZE_DEG;
    (lat, lon)
}
