use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::ArrivalRecord;
use crate::error::ExplorerResult;

/// Raw CSV row; numeric columns stay textual so malformed cells can be
/// handled per column instead of failing the whole load.
#[derive(Debug, Deserialize)]
struct RawArrivalRow {
    country: String,
    iso3: String,
    region: String,
    year: String,
    arrivals: String,
}

/// Parses long-format arrivals CSV (`country,iso3,region,year,arrivals`).
///
/// Columns are matched by header name and extra columns are ignored.
/// Unparseable `arrivals` cells become `NaN` and the row is kept. Rows whose
/// `year` is not an integer are skipped.
pub fn load_records_from_reader<Rd: Read>(reader: Rd) -> ExplorerResult<Vec<ArrivalRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in csv_reader.deserialize::<RawArrivalRow>().enumerate() {
        let row = row?;
        let Some(year) = parse_year(&row.year) else {
            warn!(row = index + 1, year = %row.year, "skipping row with non-integer year");
            skipped += 1;
            continue;
        };
        records.push(ArrivalRecord {
            country: row.country,
            iso3: row.iso3,
            region: row.region,
            year,
            arrivals: parse_arrivals(&row.arrivals),
        });
    }

    debug!(loaded = records.len(), skipped, "loaded arrival records");
    Ok(records)
}

pub fn load_records_from_path(path: impl AsRef<Path>) -> ExplorerResult<Vec<ArrivalRecord>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening arrivals dataset");
    let file = File::open(path)?;
    load_records_from_reader(file)
}

fn parse_year(raw: &str) -> Option<i32> {
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) {
        Some(value as i32)
    } else {
        None
    }
}

fn parse_arrivals(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(f64::NAN)
}
