use crate::core::chart::{ChartRecord, SectionalChart};
use crate::core::constants::FAA_SECTIONAL_BOUNDS;
use crate::core::geometry::create_rect;
use crate::util::error::CapGridError;
use geo_types::Rect;

/// Ordered, validated collection of sectional charts.
///
/// Lookups scan in declaration order and the first containing chart wins, so when two
/// charts overlap the one declared earlier shadows the other. Overlaps are allowed and
/// can be listed with [`ChartTable::overlaps`].
///
/// # Example
///
/// ```
/// use capgrid_rs::{ChartRecord, ChartTable};
///
/// # fn main() -> Result<(), capgrid_rs::CapGridError> {
/// let table = ChartTable::builder()
///     .chart(ChartRecord::new("CHARLOTTE", 38.0, 34.0, -82.0, -75.0))
///     .chart(ChartRecord::new("ATLANTA", 36.0, 32.0, -86.0, -80.0))
///     .build()?;
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.overlaps().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTable {
    charts: Vec<SectionalChart>,
}

/// Two charts whose interiors intersect.
///
/// `shadowing` is declared first and wins lookups inside `area`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOverlap {
    pub shadowing: String,
    pub shadowed: String,
    pub area: Rect<f64>,
}

impl ChartTable {
    pub fn builder() -> ChartTableBuilder {
        ChartTableBuilder::new()
    }

    /// Wraps already-validated charts, keeping their order.
    pub fn from_charts(charts: Vec<SectionalChart>) -> Self {
        let table = Self { charts };
        tracing::debug!(charts = table.len(), "built chart table");
        for overlap in table.overlaps() {
            tracing::warn!(
                shadowing = %overlap.shadowing,
                shadowed = %overlap.shadowed,
                "overlapping charts; the earlier chart wins lookups in the shared area"
            );
        }
        table
    }

    /// Validates every record, failing on the first bad one.
    pub fn from_records<I>(records: I) -> Result<Self, CapGridError>
    where
        I: IntoIterator<Item = ChartRecord>,
    {
        let charts = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                SectionalChart::try_from(record).map_err(|e| CapGridError::InvalidRecord {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_charts(charts))
    }

    /// The built-in FAA sectional chart boundaries.
    pub fn faa_sectionals() -> Result<Self, CapGridError> {
        Self::from_records(FAA_SECTIONAL_BOUNDS.iter().map(|&bounds| ChartRecord::from(bounds)))
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn charts(&self) -> &[SectionalChart] {
        &self.charts
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionalChart> {
        self.charts.iter()
    }

    /// First chart with exactly this name.
    pub fn get(&self, name: &str) -> Option<&SectionalChart> {
        self.charts.iter().find(|chart| chart.name() == name)
    }

    pub fn to_records(&self) -> Vec<ChartRecord> {
        self.charts.iter().map(SectionalChart::to_record).collect()
    }

    /// Every pair of charts whose interiors intersect, in declaration order.
    ///
    /// Charts that only share an edge do not overlap.
    pub fn overlaps(&self) -> Vec<ChartOverlap> {
        let mut overlaps = Vec::new();

        for (i, first) in self.charts.iter().enumerate() {
            for second in &self.charts[i + 1..] {
                let north = first.north_lat().min(second.north_lat());
                let south = first.south_lat().max(second.south_lat());
                let east = first.east_lon().min(second.east_lon());
                let west = first.west_lon().max(second.west_lon());

                if south < north && west < east {
                    overlaps.push(ChartOverlap {
                        shadowing: first.name().to_string(),
                        shadowed: second.name().to_string(),
                        area: create_rect(north, south, west, east),
                    });
                }
            }
        }

        overlaps
    }
}

impl<'a> IntoIterator for &'a ChartTable {
    type Item = &'a SectionalChart;
    type IntoIter = std::slice::Iter<'a, SectionalChart>;

    fn into_iter(self) -> Self::IntoIter {
        self.charts.iter()
    }
}

#[derive(Debug, Default)]
pub struct ChartTableBuilder {
    records: Vec<ChartRecord>,
}

impl ChartTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart(mut self, record: ChartRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn charts(mut self, records: impl IntoIterator<Item = ChartRecord>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn build(self) -> Result<ChartTable, CapGridError> {
        ChartTable::from_records(self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faa_sectionals_are_valid() -> Result<(), CapGridError> {
        let table = ChartTable::faa_sectionals()?;
        assert_eq!(table.len(), FAA_SECTIONAL_BOUNDS.len());
        assert!(!table.is_empty());

        let charlotte = table
            .get("CHARLOTTE")
            .ok_or_else(|| CapGridError::invalid_chart("CHARLOTTE", "missing"))?;
        assert_eq!(charlotte.columns_per_row(), 28);
        Ok(())
    }

    #[test]
    fn test_from_records_reports_bad_index() {
        let result = ChartTable::from_records(vec![
            ChartRecord::new("CHARLOTTE", 38.0, 34.0, -82.0, -75.0),
            ChartRecord::new("BROKEN", 38.0, 34.0, -75.0, -75.0),
        ]);

        match result {
            Err(CapGridError::InvalidRecord { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, CapGridError::InvalidChart { .. }));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_keeps_declaration_order() -> Result<(), CapGridError> {
        let table = ChartTable::builder()
            .chart(ChartRecord::new("B", 2.0, 1.0, 0.0, 1.0))
            .charts(vec![
                ChartRecord::new("A", 1.0, 0.0, 0.0, 1.0),
                ChartRecord::new("C", 3.0, 2.0, 0.0, 1.0),
            ])
            .build()?;

        let names: Vec<&str> = table.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        Ok(())
    }

    #[test]
    fn test_edge_sharing_charts_do_not_overlap() -> Result<(), CapGridError> {
        let table = ChartTable::builder()
            .chart(ChartRecord::new("WEST", 1.0, 0.0, 0.0, 1.0))
            .chart(ChartRecord::new("EAST", 1.0, 0.0, 1.0, 2.0))
            .chart(ChartRecord::new("NORTH", 2.0, 1.0, 0.0, 1.0))
            .build()?;

        assert!(table.overlaps().is_empty());
        Ok(())
    }

    #[test]
    fn test_overlap_area() -> Result<(), CapGridError> {
        let table = ChartTable::builder()
            .chart(ChartRecord::new("GREAT FALLS", 48.0, 44.0, -118.0, -108.0))
            .chart(ChartRecord::new("BILLINGS", 48.0, 44.0, -112.0, -104.0))
            .build()?;

        let overlaps = table.overlaps();
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].shadowing, "GREAT FALLS");
        assert_eq!(overlaps[0].shadowed, "BILLINGS");
        assert_eq!(overlaps[0].area.min().x, -112.0);
        assert_eq!(overlaps[0].area.max().x, -108.0);
        Ok(())
    }

    #[test]
    fn test_builtin_table_has_known_overlaps() -> Result<(), CapGridError> {
        let table = ChartTable::faa_sectionals()?;
        let overlaps = table.overlaps();
        assert!(
            overlaps
                .iter()
                .any(|o| o.shadowing == "WASHINGTON" && o.shadowed == "CHARLOTTE")
        );
        Ok(())
    }
}
