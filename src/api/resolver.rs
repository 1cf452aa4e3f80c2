use crate::api::grid_ref::GridReference;
use crate::api::table::ChartTable;
use crate::core::chart::SectionalChart;
use crate::util::coord::Coordinate;

/// Text shown when a coordinate falls outside every chart.
pub const OUTSIDE_COVERAGE: &str = "Outside coverage";

/// Maps coordinates to CAP grid references over an injected [`ChartTable`].
///
/// Every operation is total: coordinates outside all charts (including NaN or
/// out-of-range values) give `None`, never an error. The resolver never mutates its
/// table, so it can be shared between threads by reference or behind an `Arc`.
///
/// # Example
///
/// ```
/// use capgrid_rs::{ChartTable, LatLon, SectionalGridResolver};
///
/// # fn main() -> Result<(), capgrid_rs::CapGridError> {
/// let resolver = SectionalGridResolver::new(ChartTable::faa_sectionals()?);
///
/// let grid_ref = resolver.grid_reference(&LatLon::new(34.9, -76.9));
/// assert_eq!(grid_ref.map(|r| r.to_string()).as_deref(), Some("CHARLOTTE 357"));
///
/// assert!(resolver.grid_reference(&LatLon::new(0.0, 0.0)).is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SectionalGridResolver {
    table: ChartTable,
}

impl SectionalGridResolver {
    pub fn new(table: ChartTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ChartTable {
        &self.table
    }

    /// First chart, in declaration order, whose half-open bounds contain the coordinate.
    pub fn find_region<C: Coordinate>(&self, coord: &C) -> Option<&SectionalChart> {
        self.table.iter().find(|chart| chart.contains(coord))
    }

    /// Row-major cell number of `coord` on `chart`, without a bounds check.
    ///
    /// Only meaningful when `chart.contains(coord)`; see [`SectionalChart::cell_number`].
    pub fn cell_number<C: Coordinate>(&self, chart: &SectionalChart, coord: &C) -> i64 {
        chart.cell_number(coord)
    }

    /// Matching chart and cell number; `None` when nothing matches or the cell number
    /// does not fit a `u32`.
    fn resolve<C: Coordinate>(&self, coord: &C) -> Option<(&SectionalChart, u32)> {
        let chart = self.find_region(coord)?;
        let cell_number = u32::try_from(self.cell_number(chart, coord)).ok()?;
        Some((chart, cell_number))
    }

    pub fn grid_reference<C: Coordinate>(&self, coord: &C) -> Option<GridReference> {
        self.resolve(coord)
            .map(|(chart, cell_number)| GridReference::new(chart.name(), cell_number))
    }

    pub fn sectional_name<C: Coordinate>(&self, coord: &C) -> Option<&str> {
        self.resolve(coord).map(|(chart, _)| chart.name())
    }

    pub fn grid_number<C: Coordinate>(&self, coord: &C) -> Option<u32> {
        self.resolve(coord).map(|(_, cell_number)| cell_number)
    }

    /// The rendered grid reference, or [`OUTSIDE_COVERAGE`].
    pub fn grid_label<C: Coordinate>(&self, coord: &C) -> String {
        self.grid_reference(coord)
            .map(|grid_ref| grid_ref.to_string())
            .unwrap_or_else(|| OUTSIDE_COVERAGE.to_string())
    }
}
