use crate::api::grid_ref::GridReference;
use crate::api::table::ChartTable;
use crate::core::chart::SectionalChart;
use crate::core::geometry::rect_to_polygon;
use geo_types::Polygon;
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};

/// Output format for cell polygon geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

pub fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

pub fn format_polygon(polygon: &Polygon<f64>, format: GeometryFormat) -> String {
    match format {
        GeometryFormat::Wkt => polygon_to_wkt(polygon),
        GeometryFormat::GeoJson => polygon_to_geojson(polygon),
    }
}

fn polygon_feature(polygon: &Polygon<f64>, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::from(polygon)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// GeoJSON feature for one grid cell, or `None` if the cell is not on the chart.
///
/// Properties: `chart`, `cell_number`, `grid_reference`.
pub fn cell_feature(chart: &SectionalChart, cell_number: u32) -> Option<Feature> {
    let rect = chart.cell_bounds(cell_number)?;
    let grid_ref = GridReference::new(chart.name(), cell_number);

    let mut properties = JsonObject::new();
    properties.insert("chart".to_string(), JsonValue::from(chart.name()));
    properties.insert("cell_number".to_string(), JsonValue::from(cell_number));
    properties.insert(
        "grid_reference".to_string(),
        JsonValue::from(grid_ref.to_string()),
    );

    Some(polygon_feature(&rect_to_polygon(&rect), properties))
}

impl SectionalChart {
    /// Chart outline as a GeoJSON feature with `name`, `columns_per_row` and `rows`.
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), JsonValue::from(self.name()));
        properties.insert(
            "columns_per_row".to_string(),
            JsonValue::from(self.columns_per_row()),
        );
        properties.insert("rows".to_string(), JsonValue::from(self.rows()));

        polygon_feature(&self.to_polygon(), properties)
    }
}

impl ChartTable {
    /// Every chart outline, in lookup order.
    pub fn to_geojson(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.iter().map(SectionalChart::to_feature).collect(),
            foreign_members: None,
        }
    }
}
