use capgrid_rs::{
    ChartTable, LatLon, SectionalGridResolver, format_date, format_degrees, format_time,
    format_utc_offset, grid_label, zulu,
};
use chrono::{Local, Offset, Utc};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Charlotte Douglas, used when no position is given.
const DEFAULT_POSITION: LatLon = LatLon {
    lat: 35.2140,
    lon: -80.9431,
};

#[derive(Parser)]
#[command(name = "capgrid-rs")]
#[command(about = "Resolve a position to its CAP sectional grid reference", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Latitude in decimal degrees
    #[arg(requires = "lon")]
    lat: Option<f64>,

    /// Longitude in decimal degrees (western hemisphere negative)
    lon: Option<f64>,

    /// Replacement chart table (.json or .csv) instead of the built-in FAA sectionals
    #[arg(long, env = "CAPGRID_TABLE")]
    table: Option<PathBuf>,
}

fn load_table(path: Option<&PathBuf>) -> Result<ChartTable, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ChartTable::faa_sectionals()?);
    };

    let table = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => ChartTable::from_csv_path(path)?,
        _ => ChartTable::from_json_path(path)?,
    };
    tracing::info!(path = %path.display(), charts = table.len(), "loaded chart table");
    Ok(table)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let pos = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => LatLon::new(lat, lon),
        _ => DEFAULT_POSITION,
    };
    let resolver = SectionalGridResolver::new(load_table(args.table.as_ref())?);

    let now = Utc::now();
    let local = Local::now().offset().fix();

    println!("Zulu:      {} {}", format_time(now, zulu()), format_date(now, zulu()));
    println!(
        "Local:     {} {} ({})",
        format_time(now, local),
        format_date(now, local),
        format_utc_offset(local)
    );
    println!("Latitude:  {}", format_degrees(Some(pos.lat)));
    println!("Longitude: {}", format_degrees(Some(pos.lon)));
    println!("CAP Grid:  {}", grid_label(&resolver, Some(&pos)));

    if let Some(chart) = resolver.find_region(&pos) {
        println!(
            "Chart:     {} ({} x {} cells)",
            chart.name(),
            chart.rows(),
            chart.columns_per_row()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_accept_negative_longitude() -> Result<(), clap::Error> {
        let args = Args::try_parse_from(["capgrid-rs", "34.9", "-76.9"])?;
        assert_eq!(args.lat, Some(34.9));
        assert_eq!(args.lon, Some(-76.9));
        Ok(())
    }

    #[test]
    fn test_args_default_to_no_position() -> Result<(), clap::Error> {
        let args = Args::try_parse_from(["capgrid-rs", "--table", "charts.csv"])?;
        assert_eq!(args.lat, None);
        assert_eq!(args.table, Some(PathBuf::from("charts.csv")));
        Ok(())
    }

    #[test]
    fn test_args_reject_bad_input() {
        assert!(Args::try_parse_from(["capgrid-rs", "35.2", "abc"]).is_err());
        assert!(Args::try_parse_from(["capgrid-rs", "35.2"]).is_err());
    }
}
