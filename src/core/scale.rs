use serde::{Deserialize, Serialize};

use crate::core::{DisplaySeries, Measure};
use crate::error::{ExplorerError, ExplorerResult};

/// Linear mapping from a numeric domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ExplorerResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ExplorerError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value into `range`; `range` may be inverted (y axes).
    pub fn domain_to_pixel(self, value: f64, range: (f64, f64)) -> ExplorerResult<f64> {
        validate_range(range)?;
        if !value.is_finite() {
            return Err(ExplorerError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(range.0 + normalized * (range.1 - range.0))
    }

    pub fn pixel_to_domain(self, pixel: f64, range: (f64, f64)) -> ExplorerResult<f64> {
        validate_range(range)?;
        if !pixel.is_finite() {
            return Err(ExplorerError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - range.0) / (range.1 - range.0);
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_range(range: (f64, f64)) -> ExplorerResult<()> {
    if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
        return Err(ExplorerError::InvalidData(
            "pixel range must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}

/// Computes the y domain for transformed series.
///
/// Non-negative measures span `[0, max]` with `padding_ratio` of `max` added
/// on top. Growth spans `[min, max]` padded on both ends by `padding_ratio`
/// of the value range. An absent or zero maximum falls back to 1.
#[must_use]
pub fn value_domain(series: &[DisplaySeries], measure: Measure, padding_ratio: f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in series.iter().flat_map(|entry| entry.values.iter()) {
        if value.arrivals.is_nan() {
            continue;
        }
        min = min.min(value.arrivals);
        max = max.max(value.arrivals);
    }

    let max = if max.is_finite() && max != 0.0 { max } else { 1.0 };
    let padding_ratio = if padding_ratio.is_finite() {
        padding_ratio.max(0.0)
    } else {
        0.0
    };

    if measure.allows_negative() {
        let min = if min.is_finite() { min.min(max) } else { 0.0 };
        if max - min <= f64::EPSILON {
            return (min - 1.0, max + 1.0);
        }
        let padding = (max - min) * padding_ratio;
        (min - padding, max + padding)
    } else {
        (0.0, max + max * padding_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, value_domain};
    use crate::core::{DisplaySeries, Measure, SeriesKind, YearValue};

    fn display(values: &[(i32, f64)]) -> DisplaySeries {
        let values: Vec<YearValue> = values.iter().map(|(y, v)| YearValue::new(*y, *v)).collect();
        DisplaySeries {
            key: "A".to_owned(),
            region: "R".to_owned(),
            kind: SeriesKind::Country,
            original_values: values.clone(),
            values,
        }
    }

    #[test]
    fn linear_scale_maps_inverted_range() {
        let scale = LinearScale::new(0.0, 100.0).expect("scale");
        let px = scale.domain_to_pixel(25.0, (400.0, 0.0)).expect("px");
        assert!((px - 300.0).abs() <= 1e-9);
        let back = scale.pixel_to_domain(px, (400.0, 0.0)).expect("back");
        assert!((back - 25.0).abs() <= 1e-9);
    }

    #[test]
    fn absolute_domain_starts_at_zero_with_top_padding() {
        let domain = value_domain(&[display(&[(2000, 50.0), (2001, 200.0)])], Measure::Absolute, 0.05);
        assert_eq!(domain.0, 0.0);
        assert!((domain.1 - 210.0).abs() <= 1e-9);
    }

    #[test]
    fn growth_domain_pads_both_ends() {
        let domain = value_domain(&[display(&[(2000, -20.0), (2001, 80.0)])], Measure::Growth, 0.05);
        assert!((domain.0 - (-25.0)).abs() <= 1e-9);
        assert!((domain.1 - 85.0).abs() <= 1e-9);
    }

    #[test]
    fn empty_domain_falls_back_to_unit_max() {
        let domain = value_domain(&[], Measure::Absolute, 0.05);
        assert_eq!(domain, (0.0, 1.05));
        let domain = value_domain(&[], Measure::Growth, 0.0);
        assert_eq!(domain, (0.0, 1.0));
    }
}
