use crate::util::error::CapGridError;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a point geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT. Coordinates
/// are `x = longitude`, `y = latitude`. Non-point geometries are rejected.
pub fn parse_point(s: &str) -> Result<Point<f64>, CapGridError> {
    let trimmed = s.trim();
    let geom = if trimmed.starts_with('{') {
        parse_geojson(trimmed)?
    } else {
        parse_wkt(trimmed)?
    };

    match geom {
        Geometry::Point(pt) => Ok(pt),
        Geometry::MultiPoint(mp) if mp.0.len() == 1 => Ok(mp.0[0]),
        other => Err(CapGridError::GeometryParseError(format!(
            "Expected a point, got {}",
            geometry_kind(&other)
        ))),
    }
}

fn geometry_kind(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        _ => "Geometry",
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, CapGridError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| CapGridError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| CapGridError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| CapGridError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| CapGridError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(CapGridError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, CapGridError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| CapGridError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        CapGridError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}
