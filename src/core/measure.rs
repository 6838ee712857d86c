use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{DisplaySeries, Series, YearValue};
use crate::error::{ExplorerError, ExplorerResult};

/// Display transform applied to a series' absolute arrivals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Measure {
    /// Raw arrivals.
    #[default]
    #[serde(rename = "absolute")]
    Absolute,
    /// Year-over-year change in percent; the first sample is 0.
    #[serde(rename = "growth")]
    Growth,
    /// Percent of the first sample in the series (the baseline).
    #[serde(rename = "growthRate")]
    GrowthRate,
    /// Percent of the series peak.
    ///
    /// Historically exposed as `perCapita`, although no population data is
    /// involved; the wire name is kept for compatibility.
    #[serde(rename = "perCapita", alias = "peakNormalized")]
    PeakNormalized,
}

impl Measure {
    pub const ALL: [Self; 4] = [
        Self::Absolute,
        Self::Growth,
        Self::GrowthRate,
        Self::PeakNormalized,
    ];

    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Growth => "growth",
            Self::GrowthRate => "growthRate",
            Self::PeakNormalized => "perCapita",
        }
    }

    /// Whether transformed values are percentages rather than arrivals.
    #[must_use]
    pub fn is_percentage(self) -> bool {
        !matches!(self, Self::Absolute)
    }

    /// Whether transformed values can go below zero.
    #[must_use]
    pub fn allows_negative(self) -> bool {
        matches!(self, Self::Growth)
    }

    #[must_use]
    pub fn axis_label(self, baseline_year: i32) -> String {
        match self {
            Self::Absolute => "International Tourist Arrivals".to_owned(),
            Self::Growth => "Year-over-Year Growth (%)".to_owned(),
            Self::GrowthRate => format!("Growth Rate (% of {baseline_year} baseline)"),
            Self::PeakNormalized => "Normalized Arrivals (% of peak)".to_owned(),
        }
    }

    /// Transforms chronological values, resolving degenerate divisors to
    /// numeric fallbacks.
    #[must_use]
    pub fn transform_values(self, values: &[YearValue]) -> Vec<YearValue> {
        match self {
            Self::Absolute => values.to_vec(),
            Self::Growth => year_over_year(values),
            Self::GrowthRate => {
                let baseline = values
                    .first()
                    .map(|value| value.arrivals)
                    .filter(|arrivals| is_truthy(*arrivals))
                    .unwrap_or(1.0);
                relative_to(values, baseline)
            }
            Self::PeakNormalized => {
                let peak = peak_arrivals(values)
                    .filter(|peak| is_truthy(*peak))
                    .unwrap_or(1.0);
                values
                    .iter()
                    .map(|value| YearValue::new(value.year, value.arrivals / peak * 100.0))
                    .collect()
            }
        }
    }

    /// Applies the measure to a series, keeping the absolute values alongside.
    #[must_use]
    pub fn apply(self, series: &Series) -> DisplaySeries {
        DisplaySeries {
            key: series.key.clone(),
            region: series.region.clone(),
            kind: series.kind,
            values: self.transform_values(&series.values),
            original_values: series.values.clone(),
        }
    }

    /// Like [`Measure::apply`] but reports a zero, negative or absent
    /// baseline/peak instead of substituting a fallback divisor.
    pub fn apply_strict(self, series: &Series) -> ExplorerResult<DisplaySeries> {
        let divisor = match self {
            Self::Absolute | Self::Growth => None,
            Self::GrowthRate => Some(series.values.first().map(|value| value.arrivals)),
            Self::PeakNormalized => Some(peak_arrivals(&series.values)),
        };
        if let Some(divisor) = divisor {
            let valid = divisor.is_some_and(|value| value.is_finite() && value > 0.0);
            if !valid && !series.values.is_empty() {
                return Err(ExplorerError::InvalidDivisor {
                    series: series.key.clone(),
                });
            }
        }
        Ok(self.apply(series))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Measure {
    type Err = ExplorerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "absolute" => Ok(Self::Absolute),
            "growth" => Ok(Self::Growth),
            "growthRate" => Ok(Self::GrowthRate),
            "perCapita" | "peakNormalized" => Ok(Self::PeakNormalized),
            other => Err(ExplorerError::InvalidData(format!(
                "unknown measure `{other}`"
            ))),
        }
    }
}

fn year_over_year(values: &[YearValue]) -> Vec<YearValue> {
    let mut transformed = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    for value in values {
        let growth = match previous {
            Some(prev) if prev > 0.0 => (value.arrivals - prev) / prev * 100.0,
            _ => 0.0,
        };
        transformed.push(YearValue::new(value.year, growth));
        previous = Some(value.arrivals);
    }
    transformed
}

fn relative_to(values: &[YearValue], baseline: f64) -> Vec<YearValue> {
    values
        .iter()
        .map(|value| {
            let relative = if baseline > 0.0 {
                value.arrivals / baseline * 100.0
            } else {
                100.0
            };
            YearValue::new(value.year, relative)
        })
        .collect()
}

/// Max arrivals ignoring NaN samples.
fn peak_arrivals(values: &[YearValue]) -> Option<f64> {
    values
        .iter()
        .map(|value| value.arrivals)
        .filter(|arrivals| !arrivals.is_nan())
        .reduce(f64::max)
}

/// Zero and NaN are treated as "no value".
fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
