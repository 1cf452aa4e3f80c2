pub mod grid_ref;
pub mod readout;
pub mod resolver;
pub mod table;

pub use grid_ref::GridReference;
pub use resolver::{OUTSIDE_COVERAGE, SectionalGridResolver};
pub use table::{ChartOverlap, ChartTable, ChartTableBuilder};
