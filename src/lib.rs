//! # capgrid-rs
//!
//! Maps latitude/longitude onto CAP grid references such as `"CHARLOTTE 087"`: the FAA
//! sectional chart that contains the point, and the 15-minute grid cell within it.
//!
//! There are currently three main entry points.
//!
//! ### 1. `SectionalGridResolver` - Coordinate Lookup
//!
//! ```
//! use capgrid_rs::{ChartTable, LatLon, SectionalGridResolver};
//!
//! # fn main() -> Result<(), capgrid_rs::CapGridError> {
//! let resolver = SectionalGridResolver::new(ChartTable::faa_sectionals()?);
//!
//! let pos = LatLon::new(34.9, -76.9);
//! if let Some(grid_ref) = resolver.grid_reference(&pos) {
//!     println!("{}", grid_ref);
//! }
//! println!("{}", resolver.grid_label(&LatLon::new(0.0, 0.0))); // "Outside coverage"
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `ChartTable` - Swappable Chart Boundaries
//!
//! The chart table is configuration. Build it from the built-in data, from records, or
//! load it from JSON/CSV:
//!
//! ```
//! use capgrid_rs::{ChartRecord, ChartTable, SectionalGridResolver};
//!
//! # fn main() -> Result<(), capgrid_rs::CapGridError> {
//! let table = ChartTable::builder()
//!     .chart(ChartRecord::new("CHARLOTTE", 38.0, 34.0, -82.0, -76.0))
//!     .build()?;
//!
//! let resolver = SectionalGridResolver::new(table);
//! assert_eq!(resolver.grid_number(&(-81.96, 37.70)), Some(25));
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToGrid` - CSV File Conversion
//!
//! ```no_run
//! use capgrid_rs::{ChartTable, CsvGridConfig, CsvToGrid, GeometryFormat, SectionalGridResolver};
//!
//! # fn main() -> Result<(), capgrid_rs::CapGridError> {
//! let resolver = SectionalGridResolver::new(ChartTable::faa_sectionals()?);
//! let config = CsvGridConfig::from_coords("Longitude", "Latitude")
//!     .with_cell_geometry(GeometryFormat::GeoJson);
//!
//! "sorties.csv".to_grid_csv("sorties_grid.csv", &config, &resolver)?;
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod io;
pub mod util;

pub use api::readout::{
    NO_FIX, format_accuracy, format_altitude, format_date, format_degrees, format_time,
    format_utc_offset, grid_label, zulu,
};
pub use api::{
    ChartOverlap, ChartTable, ChartTableBuilder, GridReference, OUTSIDE_COVERAGE,
    SectionalGridResolver,
};
pub use core::{
    CELL_SIZE_DEG, ChartRecord, FAA_SECTIONAL_BOUNDS, SectionalChart, cell_number_to_row_col,
    point_to_row_col, row_col_to_cell_number,
};
pub use io::{
    CoordinateSource, CsvGridConfig, CsvGridSummary, CsvToGrid, GeometryFormat, cell_feature,
    csv_to_grid_csv, parse_point,
};
pub use util::{CapGridError, Coordinate, LatLon};

pub use geo_types;
pub use geojson;
