use crate::core::constants::CELL_SIZE_DEG;
use crate::core::geometry::{create_cell, create_rect, rect_to_polygon};
use crate::core::grid::{
    cell_number_to_row_col, point_to_row_col, row_col_to_cell_number, row_col_to_corner,
    span_to_cells,
};
use crate::util::coord::Coordinate;
use crate::util::error::CapGridError;
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// Unvalidated chart bounds, as stored in a table file.
///
/// This is the loadable form of a chart. Convert it with [`SectionalChart::try_from`]
/// (or load a whole table through `ChartTable`) to get a validated chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub name: String,
    pub north_lat: f64,
    pub south_lat: f64,
    pub west_lon: f64,
    pub east_lon: f64,
}

impl ChartRecord {
    pub fn new(
        name: impl Into<String>,
        north_lat: f64,
        south_lat: f64,
        west_lon: f64,
        east_lon: f64,
    ) -> Self {
        Self {
            name: name.into(),
            north_lat,
            south_lat,
            west_lon,
            east_lon,
        }
    }
}

impl From<(&str, f64, f64, f64, f64)> for ChartRecord {
    fn from((name, north_lat, south_lat, west_lon, east_lon): (&str, f64, f64, f64, f64)) -> Self {
        Self::new(name, north_lat, south_lat, west_lon, east_lon)
    }
}

/// A named rectangular region tiled by 0.25° grid cells.
///
/// Cells are numbered from 1 at the northwest corner, increasing east along a row and
/// then continuing at the west end of the next row south.
///
/// # Example
///
/// ```
/// use capgrid_rs::{LatLon, SectionalChart};
///
/// # fn main() -> Result<(), capgrid_rs::CapGridError> {
/// let chart = SectionalChart::new("CHARLOTTE", 38.0, 34.0, -82.0, -75.0)?;
/// assert_eq!(chart.columns_per_row(), 28);
///
/// let pos = LatLon::new(37.70, -81.96);
/// assert!(chart.contains(&pos));
/// assert_eq!(chart.cell_number(&pos), 29);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SectionalChart {
    name: String,
    north_lat: f64,
    south_lat: f64,
    west_lon: f64,
    east_lon: f64,
    columns_per_row: u32,
    rows: u32,
}

impl SectionalChart {
    /// Validates the bounds and derives the grid dimensions.
    ///
    /// Both spans must be positive whole multiples of [`CELL_SIZE_DEG`].
    pub fn new(
        name: impl Into<String>,
        north_lat: f64,
        south_lat: f64,
        west_lon: f64,
        east_lon: f64,
    ) -> Result<Self, CapGridError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CapGridError::invalid_chart(&name, "name cannot be empty"));
        }
        if ![north_lat, south_lat, west_lon, east_lon]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(CapGridError::invalid_chart(&name, "bounds must be finite"));
        }
        if north_lat <= south_lat {
            return Err(CapGridError::invalid_chart(
                &name,
                format!("north_lat {} must exceed south_lat {}", north_lat, south_lat),
            ));
        }
        if east_lon <= west_lon {
            return Err(CapGridError::invalid_chart(
                &name,
                format!("east_lon {} must exceed west_lon {}", east_lon, west_lon),
            ));
        }

        let columns_per_row = span_to_cells(east_lon - west_lon).ok_or_else(|| {
            CapGridError::invalid_chart(
                &name,
                format!(
                    "longitude span {} is not a multiple of {}",
                    east_lon - west_lon,
                    CELL_SIZE_DEG
                ),
            )
        })?;
        let rows = span_to_cells(north_lat - south_lat).ok_or_else(|| {
            CapGridError::invalid_chart(
                &name,
                format!(
                    "latitude span {} is not a multiple of {}",
                    north_lat - south_lat,
                    CELL_SIZE_DEG
                ),
            )
        })?;

        if rows.checked_mul(columns_per_row).is_none() {
            return Err(CapGridError::invalid_chart(&name, "too many cells"));
        }

        Ok(Self {
            name,
            north_lat,
            south_lat,
            west_lon,
            east_lon,
            columns_per_row,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn north_lat(&self) -> f64 {
        self.north_lat
    }

    pub fn south_lat(&self) -> f64 {
        self.south_lat
    }

    pub fn west_lon(&self) -> f64 {
        self.west_lon
    }

    pub fn east_lon(&self) -> f64 {
        self.east_lon
    }

    pub fn columns_per_row(&self) -> u32 {
        self.columns_per_row
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells; the largest valid cell number.
    pub fn cell_count(&self) -> u32 {
        self.rows * self.columns_per_row
    }

    /// Half-open containment: the south and west edges belong to this chart,
    /// the north and east edges belong to the neighbouring chart.
    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        let (lat, lon) = (coord.lat(), coord.lon());
        lat >= self.south_lat && lat < self.north_lat && lon >= self.west_lon && lon < self.east_lon
    }

    /// Row-major cell number for a coordinate.
    ///
    /// Bounds are not re-checked: call [`contains`](Self::contains) first. Indices are
    /// floored, so a point north of the chart numbers below 1 and a point west of it
    /// falls back into the previous row instead of being clamped to column 0.
    pub fn cell_number<C: Coordinate>(&self, coord: &C) -> i64 {
        let (row, col) = point_to_row_col(coord, self.north_lat, self.west_lon);
        row_col_to_cell_number(row, col, self.columns_per_row)
    }

    /// Zero-based `(row, col)` of a cell, or `None` if the number is not on this chart.
    pub fn cell_row_col(&self, cell_number: u32) -> Option<(u32, u32)> {
        cell_number_to_row_col(cell_number, self.columns_per_row, self.rows)
    }

    /// The rectangle covered by a cell, or `None` if the number is not on this chart.
    pub fn cell_bounds(&self, cell_number: u32) -> Option<Rect<f64>> {
        let (row, col) = self.cell_row_col(cell_number)?;
        let (lat, lon) = row_col_to_corner(row, col, self.north_lat, self.west_lon);
        Some(create_cell(lat, lon, CELL_SIZE_DEG))
    }

    /// Center point of a cell (x = longitude, y = latitude).
    pub fn cell_center(&self, cell_number: u32) -> Option<Point<f64>> {
        self.cell_bounds(cell_number).map(|rect| rect.center().into())
    }

    pub fn bounds(&self) -> Rect<f64> {
        create_rect(self.north_lat, self.south_lat, self.west_lon, self.east_lon)
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        rect_to_polygon(&self.bounds())
    }

    pub fn to_record(&self) -> ChartRecord {
        ChartRecord::new(
            self.name.clone(),
            self.north_lat,
            self.south_lat,
            self.west_lon,
            self.east_lon,
        )
    }
}

impl TryFrom<ChartRecord> for SectionalChart {
    type Error = CapGridError;

    fn try_from(record: ChartRecord) -> Result<Self, Self::Error> {
        SectionalChart::new(
            record.name,
            record.north_lat,
            record.south_lat,
            record.west_lon,
            record.east_lon,
        )
    }
}
