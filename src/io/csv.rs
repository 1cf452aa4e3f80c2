use crate::api::resolver::SectionalGridResolver;
use crate::core::geometry::rect_to_polygon;
use crate::io::geojson::{GeometryFormat, format_polygon};
use crate::io::parse::parse_point;
use crate::util::coord::LatLon;
use crate::util::error::CapGridError;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Specifies how to extract a location from CSV rows.
#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing a WKT or GeoJSON point
    GeometryColumn(String),
    /// Separate longitude and latitude columns, in decimal degrees
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
}

/// Configuration for annotating a CSV of positions with grid references.
#[derive(Debug, Clone)]
pub struct CsvGridConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub include_cell_geometry: Option<GeometryFormat>,
}

/// Row counts from a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CsvGridSummary {
    pub rows: usize,
    pub matched: usize,
}

impl CsvGridConfig {
    /// Config for a CSV with a point geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use capgrid_rs::CsvGridConfig;
    ///
    /// let config = CsvGridConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    /// Config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use capgrid_rs::{CsvGridConfig, GeometryFormat};
    ///
    /// let config = CsvGridConfig::from_coords("Longitude", "Latitude")
    ///     .with_cell_geometry(GeometryFormat::Wkt);
    /// ```
    pub fn from_coords(lon_column: impl Into<String>, lat_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the matched cell's polygon in the output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToGrid {
    fn to_grid_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGridConfig,
        resolver: &SectionalGridResolver,
    ) -> Result<CsvGridSummary, CapGridError>;
}

impl<P: AsRef<Path>> CsvToGrid for P {
    fn to_grid_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGridConfig,
        resolver: &SectionalGridResolver,
    ) -> Result<CsvGridSummary, CapGridError> {
        csv_to_grid_csv(self, output_path, config, resolver)
    }
}

fn column_index(
    headers: &csv::StringRecord,
    name: &str,
    label: &str,
) -> Result<usize, CapGridError> {
    if name.is_empty() {
        return Err(CapGridError::CsvError(format!(
            "{} column name cannot be empty",
            label
        )));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CapGridError::CsvError(format!("{} column '{}' not found", label, name)))
}

fn parse_degrees(
    record: &csv::StringRecord,
    idx: usize,
    label: &str,
) -> Result<f64, CapGridError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| {
            CapGridError::CsvError(format!("Missing {} column at index {}", label, idx))
        })?
        .trim();
    raw.parse()
        .map_err(|_| CapGridError::CsvError(format!("Invalid {}: '{}'", label, raw)))
}

/// Converts a CSV of positions to a CSV annotated with CAP grid references.
///
/// Output columns are `grid_ref`, `sectional`, `grid_number`, an optional
/// `cell_geometry`, then every input column that is neither a source column nor
/// excluded. Rows outside coverage keep empty grid fields. Rows are streamed.
///
/// # Example
///
/// ```no_run
/// use capgrid_rs::{ChartTable, CsvGridConfig, SectionalGridResolver, csv_to_grid_csv};
///
/// # fn main() -> Result<(), capgrid_rs::CapGridError> {
/// let resolver = SectionalGridResolver::new(ChartTable::faa_sectionals()?);
/// let config = CsvGridConfig::from_coords("Longitude", "Latitude");
///
/// csv_to_grid_csv("waypoints.csv", "waypoints_grid.csv", &config, &resolver)?;
/// # Ok(())
/// # }
/// ```
pub fn csv_to_grid_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvGridConfig,
    resolver: &SectionalGridResolver,
) -> Result<CsvGridSummary, CapGridError> {
    let file = File::open(csv_path).map_err(|e| CapGridError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| CapGridError::CsvError(e.to_string()))?
        .clone();

    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = column_index(&headers, lon_column, "Longitude")?;
            let lat_idx = column_index(&headers, lat_column, "Latitude")?;
            (
                SourceIndices::Coordinates { lon_idx, lat_idx },
                HashSet::from([lon_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| CapGridError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["grid_ref", "sectional", "grid_number"];
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| CapGridError::CsvError(e.to_string()))?;

    let mut summary = CsvGridSummary::default();

    for result in reader.records() {
        let record = result.map_err(|e| CapGridError::CsvError(e.to_string()))?;

        let position = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    CapGridError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let pt = parse_point(geom_str)?;
                LatLon::new(pt.y(), pt.x())
            }
            SourceIndices::Coordinates { lon_idx, lat_idx } => {
                let lon = parse_degrees(&record, *lon_idx, "longitude")?;
                let lat = parse_degrees(&record, *lat_idx, "latitude")?;
                LatLon::new(lat, lon)
            }
        };

        let mut row: Vec<String> = Vec::with_capacity(header_row.len());

        match resolver.grid_reference(&position) {
            Some(grid_ref) => {
                summary.matched += 1;
                row.push(grid_ref.to_string());
                row.push(grid_ref.chart.clone());
                row.push(grid_ref.cell_number.to_string());
                if let Some(format) = config.include_cell_geometry {
                    let cell = resolver
                        .find_region(&position)
                        .and_then(|chart| chart.cell_bounds(grid_ref.cell_number));
                    let geom_str = match cell {
                        Some(rect) => format_polygon(&rect_to_polygon(&rect), format),
                        None => {
                            // South-edge points number one row past the last cell row
                            tracing::debug!(
                                lat = position.lat,
                                lon = position.lon,
                                cell_number = grid_ref.cell_number,
                                "cell lies outside the chart grid, no geometry written"
                            );
                            String::new()
                        }
                    };
                    row.push(geom_str);
                }
            }
            None => {
                tracing::debug!(
                    lat = position.lat,
                    lon = position.lon,
                    "position outside coverage"
                );
                row.extend(std::iter::repeat_n(String::new(), 3));
                if config.include_cell_geometry.is_some() {
                    row.push(String::new());
                }
            }
        }

        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| CapGridError::CsvError(e.to_string()))?;
        summary.rows += 1;
    }

    writer
        .flush()
        .map_err(|e| CapGridError::IoError(e.to_string()))?;

    tracing::info!(
        rows = summary.rows,
        matched = summary.matched,
        "annotated CSV with grid references"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::table::ChartTable;
    use crate::core::chart::ChartRecord;
    use std::io::Write;
    use tempfile::tempdir;

    fn resolver() -> Result<SectionalGridResolver, CapGridError> {
        Ok(SectionalGridResolver::new(ChartTable::faa_sectionals()?))
    }

    #[test]
    fn test_csv_from_coords() -> Result<(), CapGridError> {
        let dir = tempdir().map_err(|e| CapGridError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("waypoints.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "ID,Longitude,Latitude,Description")
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "1,-76.9,34.9,Coastal Carolina")
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "2,0.0,0.0,Gulf of Guinea")
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        drop(file);

        let config = CsvGridConfig::from_coords("Longitude", "Latitude");
        let summary = csv_to_grid_csv(&csv_path, &output_path, &config, &resolver()?)?;
        assert_eq!(summary, CsvGridSummary { rows: 2, matched: 1 });

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "grid_ref,sectional,grid_number,ID,Description");
        assert_eq!(lines[1], "CHARLOTTE 357,CHARLOTTE,357,1,Coastal Carolina");
        assert_eq!(lines[2], ",,,2,Gulf of Guinea");
        Ok(())
    }

    #[test]
    fn test_csv_geometry_column_with_cell_geometry() -> Result<(), CapGridError> {
        let dir = tempdir().map_err(|e| CapGridError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "NAME,Notes,geometry").map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "KJAX,skip me,\"POINT(-81.6 30.3)\"")
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        drop(file);

        let config = CsvGridConfig::new("geometry")
            .exclude(vec!["Notes".into()])
            .with_cell_geometry(GeometryFormat::Wkt);
        csv_to_grid_csv(&csv_path, &output_path, &config, &resolver()?)?;

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        assert!(output.starts_with("grid_ref,sectional,grid_number,cell_geometry,NAME"));
        assert!(output.contains("JACKSONVILLE"));
        assert!(output.contains("POLYGON"));
        assert!(!output.contains("skip me"));
        Ok(())
    }

    #[test]
    fn test_csv_south_edge_point_has_no_cell_geometry() -> Result<(), CapGridError> {
        let dir = tempdir().map_err(|e| CapGridError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("edge.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "id,lon,lat").map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "EDGE,-81.9,34.0").map_err(|e| CapGridError::IoError(e.to_string()))?;
        drop(file);

        let table = ChartTable::builder()
            .chart(ChartRecord::new("CHARLOTTE", 38.0, 34.0, -82.0, -75.0))
            .build()?;
        let config =
            CsvGridConfig::from_coords("lon", "lat").with_cell_geometry(GeometryFormat::Wkt);
        let summary = csv_to_grid_csv(
            &csv_path,
            &output_path,
            &config,
            &SectionalGridResolver::new(table),
        )?;
        assert_eq!(summary.matched, 1);

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "CHARLOTTE 449,CHARLOTTE,449,,EDGE");
        Ok(())
    }

    #[test]
    fn test_csv_trait_on_path() -> Result<(), CapGridError> {
        let dir = tempdir().map_err(|e| CapGridError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "lon,lat").map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "-142.1,62.1").map_err(|e| CapGridError::IoError(e.to_string()))?;
        drop(file);

        let config = CsvGridConfig::from_coords("lon", "lat");
        let summary = csv_path.to_grid_csv(&output_path, &config, &resolver()?)?;
        assert_eq!(summary.matched, 1);

        let output = std::fs::read_to_string(&output_path)
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        assert!(output.contains("FAIRBANKS 1344"));
        Ok(())
    }

    #[test]
    fn test_csv_missing_column() -> Result<(), CapGridError> {
        let dir = tempdir().map_err(|e| CapGridError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "x,y").map_err(|e| CapGridError::IoError(e.to_string()))?;
        drop(file);

        let config = CsvGridConfig::from_coords("Longitude", "Latitude");
        let result = csv_to_grid_csv(&csv_path, &output_path, &config, &resolver()?);
        assert!(matches!(result, Err(CapGridError::CsvError(_))));
        Ok(())
    }

    #[test]
    fn test_csv_invalid_coordinate() -> Result<(), CapGridError> {
        let dir = tempdir().map_err(|e| CapGridError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        let mut file = File::create(&csv_path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "lon,lat").map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "west,35.0").map_err(|e| CapGridError::IoError(e.to_string()))?;
        drop(file);

        let config = CsvGridConfig::from_coords("lon", "lat");
        match csv_to_grid_csv(&csv_path, &output_path, &config, &resolver()?) {
            Err(CapGridError::CsvError(msg)) => assert!(msg.contains("longitude")),
            other => panic!("Expected CsvError, got {:?}", other),
        }
        Ok(())
    }
}
