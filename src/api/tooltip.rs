use serde::{Deserialize, Serialize};

use crate::core::{DisplaySeries, Measure};

use super::label_format::{
    MISSING_VALUE_PLACEHOLDER, format_arrivals, format_measure_value, format_signed_percent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeClass {
    Positive,
    Negative,
    Neutral,
}

/// Transformed and absolute values of one series at one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipValue {
    pub year: i32,
    pub value: Option<f64>,
    pub original: Option<f64>,
    /// `value` formatted for the measure, or the missing-value placeholder.
    pub value_label: String,
    /// Absolute arrivals for percentage measures; `None` for `absolute`.
    pub original_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub key: String,
    pub region: String,
    pub period: String,
    pub first: TooltipValue,
    pub last: TooltipValue,
    /// Percent change of absolute arrivals across the period.
    pub change_percent: Option<f64>,
    pub change_label: Option<String>,
    pub change_class: ChangeClass,
}

/// Looks up `year` in both the transformed and the absolute sequences.
#[must_use]
pub fn tooltip_value(series: &DisplaySeries, measure: Measure, year: i32) -> TooltipValue {
    let value = series.value_at(year).map(|sample| sample.arrivals);
    let original = series.original_at(year).map(|sample| sample.arrivals);
    let value_label = value.map_or_else(
        || MISSING_VALUE_PLACEHOLDER.to_owned(),
        |value| format_measure_value(measure, value),
    );
    let original_label = measure.is_percentage().then(|| {
        original.map_or_else(|| MISSING_VALUE_PLACEHOLDER.to_owned(), format_arrivals)
    });
    TooltipValue {
        year,
        value,
        original,
        value_label,
        original_label,
    }
}

#[must_use]
pub fn build_tooltip(
    series: &DisplaySeries,
    measure: Measure,
    year_range: (i32, i32),
) -> TooltipPayload {
    let (year_min, year_max) = year_range;
    let first = tooltip_value(series, measure, year_min);
    let last = tooltip_value(series, measure, year_max);

    let change_percent = match (first.original, last.original) {
        (Some(start), Some(end)) if start > 0.0 => Some((end - start) / start * 100.0),
        _ => None,
    };
    let change_class = match change_percent {
        Some(change) if change > 0.0 => ChangeClass::Positive,
        Some(change) if change < 0.0 => ChangeClass::Negative,
        _ => ChangeClass::Neutral,
    };

    TooltipPayload {
        key: series.key.clone(),
        region: series.region.clone(),
        period: format!("{year_min}–{year_max}"),
        first,
        last,
        change_label: change_percent.map(format_signed_percent),
        change_percent,
        change_class,
    }
}
