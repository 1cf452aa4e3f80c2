use crate::util::error::CapGridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chart name plus a 1-based cell number, rendered as `"CHARLOTTE 087"`.
///
/// The cell number is zero-padded to at least three digits; larger numbers keep all
/// their digits (`"FAIRBANKS 1344"`).
///
/// # Example
///
/// ```
/// use capgrid_rs::GridReference;
///
/// # fn main() -> Result<(), capgrid_rs::CapGridError> {
/// let grid_ref: GridReference = "SALT LAKE CITY 012".parse()?;
/// assert_eq!(grid_ref.chart, "SALT LAKE CITY");
/// assert_eq!(grid_ref.cell_number, 12);
/// assert_eq!(grid_ref.to_string(), "SALT LAKE CITY 012");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridReference {
    pub chart: String,
    pub cell_number: u32,
}

impl GridReference {
    pub fn new(chart: impl Into<String>, cell_number: u32) -> Self {
        Self {
            chart: chart.into(),
            cell_number,
        }
    }
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:03}", self.chart, self.cell_number)
    }
}

impl FromStr for GridReference {
    type Err = CapGridError;

    /// Splits on the last space; chart names may contain spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CapGridError::InvalidGridReference(s.to_string());

        let (chart, number) = s.trim().rsplit_once(' ').ok_or_else(invalid)?;
        let chart = chart.trim_end();
        if chart.is_empty() || number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let cell_number: u32 = number.parse().map_err(|_| invalid())?;
        if cell_number == 0 {
            return Err(invalid());
        }

        Ok(Self::new(chart, cell_number))
    }
}
