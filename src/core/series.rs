use serde::{Deserialize, Serialize};

use crate::core::YearValue;
use crate::error::{ExplorerError, ExplorerResult};

/// Whether a series stands for one country or a summed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Country,
    Region,
}

/// Ordered per-year arrivals for one country or region.
///
/// For region series `key` holds the region name, mirroring how country
/// series are keyed, so downstream code treats both shapes alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub region: String,
    pub kind: SeriesKind,
    pub values: Vec<YearValue>,
}

impl Series {
    #[must_use]
    pub fn value_at(&self, year: i32) -> Option<YearValue> {
        find_year(&self.values, year)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A series after measure transformation.
///
/// `values` drive plotting and axis domains; `original_values` keep absolute
/// arrivals for tooltips and stats. Both share the same year alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySeries {
    pub key: String,
    pub region: String,
    pub kind: SeriesKind,
    pub values: Vec<YearValue>,
    pub original_values: Vec<YearValue>,
}

impl DisplaySeries {
    #[must_use]
    pub fn value_at(&self, year: i32) -> Option<YearValue> {
        find_year(&self.values, year)
    }

    #[must_use]
    pub fn original_at(&self, year: i32) -> Option<YearValue> {
        find_year(&self.original_values, year)
    }

    /// Looks up `(transformed, original)` for a year, reporting a gap as an error.
    pub fn lookup_strict(&self, year: i32) -> ExplorerResult<(f64, f64)> {
        match (self.value_at(year), self.original_at(year)) {
            (Some(value), Some(original)) => Ok((value.arrivals, original.arrivals)),
            _ => Err(ExplorerError::DataGap {
                series: self.key.clone(),
                year,
            }),
        }
    }
}

fn find_year(values: &[YearValue], year: i32) -> Option<YearValue> {
    // Values are sorted ascending by year.
    values
        .binary_search_by(|value| value.year.cmp(&year))
        .ok()
        .map(|index| values[index])
}
