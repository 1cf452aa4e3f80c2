/// Error type for capgrid-rs operations.
///
/// A coordinate outside every chart is not an error; lookups return `None` for it.
#[derive(Debug, PartialEq)]
pub enum CapGridError {
    /// A chart's bounds cannot be tiled by grid cells (bad span, non-finite value, empty name).
    InvalidChart { name: String, reason: String },
    /// A loaded table record failed validation. `index` is zero-based.
    InvalidRecord {
        index: usize,
        source: Box<CapGridError>,
    },
    /// Text could not be parsed as a grid reference (e.g. "CHARLOTTE 087").
    InvalidGridReference(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing, reading or writing error.
    CsvError(String),
    /// JSON (de)serialization error.
    JsonError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl CapGridError {
    pub(crate) fn invalid_chart(name: &str, reason: impl Into<String>) -> Self {
        CapGridError::InvalidChart {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for CapGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapGridError::InvalidChart { name, reason } => {
                write!(f, "Invalid chart '{}': {}", name, reason)
            }
            CapGridError::InvalidRecord { index, source } => {
                write!(f, "Invalid chart record at index {}: {}", index, source)
            }
            CapGridError::InvalidGridReference(s) => write!(f, "Invalid grid reference: '{}'", s),
            CapGridError::IoError(msg) => write!(f, "IO error: {}", msg),
            CapGridError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            CapGridError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            CapGridError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for CapGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CapGridError::InvalidRecord { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_invalid_chart() {
        let err = CapGridError::invalid_chart("CHARLOTTE", "longitude span must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid chart 'CHARLOTTE': longitude span must be positive"
        );
    }

    #[test]
    fn test_invalid_record_exposes_source() {
        let err = CapGridError::InvalidRecord {
            index: 3,
            source: Box::new(CapGridError::invalid_chart("OMAHA", "bad span")),
        };
        assert!(err.to_string().starts_with("Invalid chart record at index 3"));
        assert!(err.source().is_some());
    }
}
