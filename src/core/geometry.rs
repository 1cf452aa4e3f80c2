use geo_types::{Polygon, Rect, coord};

/// Builds a lat/lon rectangle (x = longitude, y = latitude) from its four edges.
pub fn create_rect(north_lat: f64, south_lat: f64, west_lon: f64, east_lon: f64) -> Rect<f64> {
    Rect::new(
        coord! { x: west_lon, y: south_lat },
        coord! { x: east_lon, y: north_lat },
    )
}

/// Square cell of `size` degrees hanging south-east from its northwest corner.
pub fn create_cell(nw_lat: f64, nw_lon: f64, size: f64) -> Rect<f64> {
    create_rect(nw_lat, nw_lat - size, nw_lon, nw_lon + size)
}

pub fn rect_to_polygon(rect: &Rect<f64>) -> Polygon<f64> {
    rect.to_polygon()
}
