use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Measure};
use crate::error::ExplorerResult;

use super::label_format::{format_measure_value, format_year};

pub(super) const AXIS_X_MAX_TICKS: usize = 10;
pub(super) const AXIS_Y_MIN_TICKS: usize = 4;
pub(super) const AXIS_Y_SPACING_PX: f64 = 80.0;

/// One labelled tick in viewport pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
    pub label: String,
}

/// `min(10, year_max - year_min + 1)` ticks for the year axis.
pub(super) fn year_tick_target_count(year_min: i32, year_max: i32) -> usize {
    let years = (i64::from(year_max) - i64::from(year_min) + 1).max(1);
    usize::try_from(years).map_or(AXIS_X_MAX_TICKS, |years| years.min(AXIS_X_MAX_TICKS))
}

/// `max(4, plot_height / 80)` ticks for the value axis.
pub(super) fn value_tick_target_count(plot_height_px: f64) -> usize {
    if !plot_height_px.is_finite() || plot_height_px <= 0.0 {
        return AXIS_Y_MIN_TICKS;
    }
    ((plot_height_px / AXIS_Y_SPACING_PX).floor() as usize).max(AXIS_Y_MIN_TICKS)
}

/// Step of the form 1, 2 or 5 × 10ⁿ covering `span` in about `count` steps.
pub(super) fn nice_step(span: f64, count: usize) -> Option<f64> {
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return None;
    }
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some(factor * power)
}

/// Tick values inside `[start, end]` aligned to multiples of a nice step.
pub(super) fn nice_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    if low == high && low.is_finite() {
        return vec![low];
    }
    let Some(step) = nice_step(high - low, count) else {
        return Vec::new();
    };
    let first = (low / step).ceil() as i64;
    let last = (high / step).floor() as i64;
    (first..=last).map(|index| index as f64 * step).collect()
}

/// Integer year ticks for the (possibly zoomed) x domain.
pub(super) fn build_year_ticks(
    domain: (f64, f64),
    year_range: (i32, i32),
    x_range: (f64, f64),
) -> ExplorerResult<Vec<AxisTick>> {
    let count = year_tick_target_count(year_range.0, year_range.1);
    let step = nice_step(domain.1 - domain.0, count).map_or(1.0, |step| step.max(1.0).round());
    let scale = LinearScale::new(domain.0, domain.1)?;

    let first = (domain.0 / step).ceil() as i64;
    let last = (domain.1 / step).floor() as i64;
    let mut ticks = Vec::new();
    for index in first..=last {
        let year = index as f64 * step;
        ticks.push(AxisTick {
            value: year,
            pixel: scale.domain_to_pixel(year, x_range)?,
            label: format_year(year),
        });
    }
    Ok(ticks)
}

pub(super) fn build_value_ticks(
    domain: (f64, f64),
    measure: Measure,
    y_range: (f64, f64),
) -> ExplorerResult<Vec<AxisTick>> {
    let count = value_tick_target_count((y_range.0 - y_range.1).abs());
    let scale = LinearScale::new(domain.0, domain.1)?;
    nice_ticks(domain.0, domain.1, count)
        .into_iter()
        .map(|value| {
            Ok(AxisTick {
                value,
                pixel: scale.domain_to_pixel(value, y_range)?,
                label: format_measure_value(measure, value),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{nice_step, nice_ticks, value_tick_target_count, year_tick_target_count};

    #[test]
    fn year_tick_count_caps_at_ten() {
        assert_eq!(year_tick_target_count(1995, 2020), 10);
        assert_eq!(year_tick_target_count(2015, 2017), 3);
        assert_eq!(year_tick_target_count(2015, 2015), 1);
    }

    #[test]
    fn value_tick_count_has_floor_of_four() {
        assert_eq!(value_tick_target_count(100.0), 4);
        assert_eq!(value_tick_target_count(470.0), 5);
        assert_eq!(value_tick_target_count(f64::NAN), 4);
    }

    #[test]
    fn nice_steps_follow_one_two_five_sequence() {
        assert_eq!(nice_step(100.0, 10), Some(10.0));
        assert_eq!(nice_step(100.0, 4), Some(20.0));
        assert_eq!(nice_step(25.0, 10), Some(2.0));
        assert_eq!(nice_step(0.0, 10), None);
    }

    #[test]
    fn nice_ticks_stay_inside_domain() {
        let ticks = nice_ticks(-5.0, 105.0, 5);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }
}
