pub mod chart;
pub mod constants;
pub mod geometry;
pub mod grid;

pub use chart::{ChartRecord, SectionalChart};
pub use constants::{CELL_SIZE_DEG, FAA_SECTIONAL_BOUNDS};
pub use geometry::{create_cell, create_rect, rect_to_polygon};
pub use grid::{
    cell_number_to_row_col, point_to_row_col, row_col_to_cell_number, row_col_to_corner,
    span_to_cells,
};
