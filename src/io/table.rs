use crate::api::table::ChartTable;
use crate::core::chart::ChartRecord;
use crate::util::error::CapGridError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loading and saving chart tables.
///
/// JSON tables are an array of records:
///
/// ```json
/// [{"name": "CHARLOTTE", "north_lat": 38.0, "south_lat": 34.0, "west_lon": -82.0, "east_lon": -75.0}]
/// ```
///
/// CSV tables use the header `name,north_lat,south_lat,west_lon,east_lon`. Row order is
/// lookup order in both formats.
impl ChartTable {
    /// # Example
    ///
    /// ```
    /// use capgrid_rs::ChartTable;
    ///
    /// # fn main() -> Result<(), capgrid_rs::CapGridError> {
    /// let table = ChartTable::from_json_str(
    ///     r#"[{"name":"CHARLOTTE","north_lat":38.0,"south_lat":34.0,"west_lon":-82.0,"east_lon":-76.0}]"#,
    /// )?;
    /// assert_eq!(table.charts()[0].columns_per_row(), 24);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self, CapGridError> {
        let records: Vec<ChartRecord> =
            serde_json::from_str(s).map_err(|e| CapGridError::JsonError(e.to_string()))?;
        Self::from_records(records)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CapGridError> {
        let records: Vec<ChartRecord> = serde_json::from_reader(reader)
            .map_err(|e| CapGridError::JsonError(e.to_string()))?;
        Self::from_records(records)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, CapGridError> {
        let file = File::open(path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CapGridError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let records = reader
            .deserialize::<ChartRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CapGridError::CsvError(e.to_string()))?;
        Self::from_records(records)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CapGridError> {
        let file = File::open(path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        Self::from_csv_reader(BufReader::new(file))
    }

    pub fn to_json_string(&self) -> Result<String, CapGridError> {
        serde_json::to_string_pretty(&self.to_records())
            .map_err(|e| CapGridError::JsonError(e.to_string()))
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), CapGridError> {
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| CapGridError::CsvError(e.to_string()))?;
        for record in self.to_records() {
            writer
                .serialize(record)
                .map_err(|e| CapGridError::CsvError(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_json_round_trip_keeps_order() -> Result<(), CapGridError> {
        let table = ChartTable::faa_sectionals()?;
        let json = table.to_json_string()?;
        let restored = ChartTable::from_json_str(&json)?;
        assert_eq!(table, restored);
        Ok(())
    }

    #[test]
    fn test_json_invalid_chart_reports_index() {
        let json = r#"[
            {"name":"CHARLOTTE","north_lat":38.0,"south_lat":34.0,"west_lon":-82.0,"east_lon":-75.0},
            {"name":"OMAHA","north_lat":44.0,"south_lat":40.0,"west_lon":-101.0,"east_lon":-93.1}
        ]"#;

        let result = ChartTable::from_json_str(json);
        assert!(matches!(
            result,
            Err(CapGridError::InvalidRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_json_malformed() {
        let result = ChartTable::from_json_str("{not json");
        assert!(matches!(result, Err(CapGridError::JsonError(_))));
    }

    #[test]
    fn test_from_csv_path() -> Result<(), CapGridError> {
        let dir = tempdir().map_err(|e| CapGridError::IoError(e.to_string()))?;
        let path = dir.path().join("charts.csv");

        let mut file = File::create(&path).map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "name,north_lat,south_lat,west_lon,east_lon")
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "CHICAGO, 44.0, 40.0, -93.0, -85.0")
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        writeln!(file, "\"SALT LAKE CITY\",42.0,38.0,-118.0,-108.0")
            .map_err(|e| CapGridError::IoError(e.to_string()))?;
        drop(file);

        let table = ChartTable::from_csv_path(&path)?;
        assert_eq!(table.len(), 2);
        assert_eq!(table.charts()[0].name(), "CHICAGO");
        assert_eq!(table.charts()[1].name(), "SALT LAKE CITY");
        assert_eq!(table.charts()[1].columns_per_row(), 40);
        Ok(())
    }

    #[test]
    fn test_csv_write_then_load() -> Result<(), CapGridError> {
        let dir = tempdir().map_err(|e| CapGridError::IoError(e.to_string()))?;
        let path = dir.path().join("charts.csv");

        let table = ChartTable::faa_sectionals()?;
        table.write_csv(&path)?;
        assert_eq!(ChartTable::from_csv_path(&path)?, table);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = ChartTable::from_json_path("/nonexistent/charts.json");
        assert!(matches!(result, Err(CapGridError::IoError(_))));
    }
}
