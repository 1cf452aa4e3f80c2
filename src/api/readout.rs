//! Text for the clock and location readout shown next to the grid reference.
//!
//! Every formatter takes the value it renders and returns a fresh `String`; a missing
//! value (no location fix yet) renders as [`NO_FIX`]. Clock formatters take the instant
//! and the display offset as arguments, so Zulu and local readouts share one code path.

use crate::api::resolver::SectionalGridResolver;
use crate::util::coord::Coordinate;
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Placeholder for fields that have no location fix behind them.
pub const NO_FIX: &str = "--";

/// Latitude or longitude with six decimal places.
pub fn format_degrees(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6}", v),
        None => NO_FIX.to_string(),
    }
}

pub fn format_altitude(meters: Option<f64>) -> String {
    match meters {
        Some(m) => format!("{:.1} m", m),
        None => NO_FIX.to_string(),
    }
}

/// Horizontal accuracy as a plus/minus radius.
pub fn format_accuracy(meters: Option<f64>) -> String {
    match meters {
        Some(m) => format!("\u{00B1}{:.1} m", m),
        None => NO_FIX.to_string(),
    }
}

/// The UTC offset, for Zulu readouts.
pub fn zulu() -> FixedOffset {
    Utc.fix()
}

/// Wall-clock time `HH:MM:SS` of `instant` at `offset`.
pub fn format_time(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format("%H:%M:%S").to_string()
}

/// Calendar date `YYYY-MM-DD` of `instant` at `offset`.
pub fn format_date(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant.with_timezone(&offset).format("%Y-%m-%d").to_string()
}

/// Offset from UTC as `+HHMM` / `-HHMM`.
///
/// The sign comes from the total offset, so offsets under an hour west of UTC keep
/// their minus sign (`-0030`).
pub fn format_utc_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{}{:02}{:02}", sign, minutes / 60, minutes % 60)
}

/// Grid reference text for an optional fix: [`NO_FIX`], `"Outside coverage"`, or
/// the rendered reference.
pub fn grid_label<C: Coordinate>(resolver: &SectionalGridResolver, fix: Option<&C>) -> String {
    match fix {
        Some(coord) => resolver.grid_label(coord),
        None => NO_FIX.to_string(),
    }
}
