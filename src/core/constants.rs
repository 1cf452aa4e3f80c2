/// Grid cell edge in degrees (15 minutes of arc on both axes)
pub const CELL_SIZE_DEG: f64 = 0.25;

/// Allowed slack when checking that a chart span is a whole number of cells
pub(crate) const SPAN_TOLERANCE_DEG: f64 = 1e-9;

/// Built-in sectional chart bounds as `(name, north_lat, south_lat, west_lon, east_lon)`.
///
/// Order matters: lookup is first-match-wins, and several of these rectangles overlap.
/// The values approximate the FAA VFR sectional corner coordinates and are expected to be
/// corrected over time; load a replacement table through `ChartTable::from_json_str` or
/// `ChartTable::from_csv_path` rather than relying on these as ground truth.
pub const FAA_SECTIONAL_BOUNDS: [(&str, f64, f64, f64, f64); 40] = [
    // Northern tier
    ("SEATTLE", 48.0, 44.0, -126.0, -118.0),
    ("GREAT FALLS", 48.0, 44.0, -118.0, -108.0),
    ("BILLINGS", 48.0, 44.0, -112.0, -104.0),
    ("TWIN CITIES", 48.0, 44.0, -98.0, -90.0),
    ("GREEN BAY", 48.0, 44.0, -92.0, -84.0),
    ("LAKE HURON", 48.0, 44.0, -86.0, -78.0),
    ("MONTREAL", 48.0, 44.0, -78.0, -70.0),
    ("HALIFAX", 48.0, 44.0, -70.0, -62.0),
    // Upper-mid tier
    ("KLAMATH FALLS", 44.0, 40.0, -126.0, -118.0),
    ("SALT LAKE CITY", 42.0, 38.0, -118.0, -108.0),
    ("OMAHA", 44.0, 40.0, -101.0, -93.0),
    ("CHICAGO", 44.0, 40.0, -93.0, -85.0),
    ("DETROIT", 44.0, 40.0, -85.0, -77.0),
    ("NEW YORK", 42.0, 38.0, -78.0, -70.0),
    // Mid tier
    ("SAN FRANCISCO", 40.0, 36.0, -126.0, -120.0),
    ("DENVER", 42.0, 38.0, -109.0, -101.0),
    ("WICHITA", 40.0, 36.0, -101.0, -95.0),
    ("KANSAS CITY", 41.0, 37.0, -98.0, -92.0),
    ("ST LOUIS", 41.0, 37.0, -92.0, -86.0),
    ("CINCINNATI", 41.0, 37.0, -86.0, -80.0),
    ("WASHINGTON", 41.0, 37.0, -80.0, -74.0),
    // Lower-mid tier
    ("LOS ANGELES", 36.0, 32.0, -122.0, -116.0),
    ("LAS VEGAS", 38.0, 34.0, -118.0, -112.0),
    ("PHOENIX", 36.0, 32.0, -114.0, -108.0),
    ("ALBUQUERQUE", 36.0, 32.0, -108.0, -102.0),
    ("DALLAS-FT WORTH", 36.0, 32.0, -100.0, -94.0),
    ("MEMPHIS", 38.0, 34.0, -92.0, -86.0),
    ("ATLANTA", 36.0, 32.0, -86.0, -80.0),
    ("CHARLOTTE", 38.0, 34.0, -82.0, -75.0),
    // Southern tier
    ("EL PASO", 34.0, 30.0, -108.0, -102.0),
    ("SAN ANTONIO", 32.0, 28.0, -102.0, -96.0),
    ("HOUSTON", 32.0, 28.0, -98.0, -92.0),
    ("NEW ORLEANS", 32.0, 28.0, -92.0, -85.0),
    ("JACKSONVILLE", 32.0, 28.0, -85.0, -79.0),
    ("BROWNSVILLE", 28.0, 24.0, -100.0, -96.0),
    ("MIAMI", 28.0, 24.0, -84.0, -78.0),
    // Alaska (simplified)
    ("ANCHORAGE", 64.0, 58.0, -156.0, -144.0),
    ("FAIRBANKS", 68.0, 62.0, -156.0, -142.0),
    ("JUNEAU", 62.0, 56.0, -142.0, -130.0),
    // Hawaii
    ("HONOLULU", 22.5, 18.5, -161.0, -154.0),
];
