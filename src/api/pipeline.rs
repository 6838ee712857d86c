#[cfg(feature = "parallel-measures")]
use rayon::prelude::*;
use tracing::trace;

use crate::core::{DisplaySeries, Measure, Series, aggregate_by_region, values_in_year_window};

use super::ViewState;

/// Filters country series by the view's selections and year window.
///
/// Series left without samples are dropped. When neither region nor country
/// is selected the result is replaced by per-region sums.
#[must_use]
pub fn filter_series(state: &ViewState, country_series: &[Series]) -> Vec<Series> {
    let (year_min, year_max) = state.year_range();
    let filtered: Vec<Series> = country_series
        .iter()
        .filter(|series| state.region.matches(&series.region) && state.country.matches(&series.key))
        .map(|series| Series {
            key: series.key.clone(),
            region: series.region.clone(),
            kind: series.kind,
            values: values_in_year_window(&series.values, year_min, year_max),
        })
        .filter(|series| !series.is_empty())
        .collect();

    trace!(
        input = country_series.len(),
        kept = filtered.len(),
        year_min,
        year_max,
        "filtered series"
    );

    if state.aggregates_regions() {
        aggregate_by_region(&filtered)
    } else {
        filtered
    }
}

/// Filters, then applies the view's measure.
///
/// The order is a contract: growth and baseline measures are relative to the
/// first year of the *selected* window, so changing the year range changes
/// what "baseline" and "previous year" mean.
#[must_use]
pub fn derive_display_series(state: &ViewState, country_series: &[Series]) -> Vec<DisplaySeries> {
    let filtered = filter_series(state, country_series);
    apply_measure(state.measure, &filtered)
}

#[cfg(not(feature = "parallel-measures"))]
#[must_use]
pub fn apply_measure(measure: Measure, series: &[Series]) -> Vec<DisplaySeries> {
    series.iter().map(|entry| measure.apply(entry)).collect()
}

#[cfg(feature = "parallel-measures")]
#[must_use]
pub fn apply_measure(measure: Measure, series: &[Series]) -> Vec<DisplaySeries> {
    series.par_iter().map(|entry| measure.apply(entry)).collect()
}
