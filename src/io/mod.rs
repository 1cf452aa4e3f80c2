pub mod csv;
pub mod geojson;
pub mod parse;
pub mod table;

pub use self::csv::{
    CoordinateSource, CsvGridConfig, CsvGridSummary, CsvToGrid, csv_to_grid_csv,
};
pub use self::geojson::{
    GeometryFormat, cell_feature, format_polygon, polygon_to_geojson, polygon_to_wkt,
};
pub use parse::{parse_geojson, parse_point, parse_wkt};
