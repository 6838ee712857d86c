use approx::assert_relative_eq;
use tourism_explorer::ExplorerError;
use tourism_explorer::core::{Measure, Series, SeriesKind, YearValue};

fn series(key: &str, values: &[(i32, f64)]) -> Series {
    Series {
        key: key.to_owned(),
        region: "R".to_owned(),
        kind: SeriesKind::Country,
        values: values
            .iter()
            .map(|(year, arrivals)| YearValue::new(*year, *arrivals))
            .collect(),
    }
}

fn pairs(values: &[YearValue]) -> Vec<(i32, f64)> {
    values.iter().map(|value| (value.year, value.arrivals)).collect()
}

#[test]
fn growth_is_year_over_year_percent() {
    let display = Measure::Growth.apply(&series("A", &[(2000, 100.0), (2001, 150.0)]));
    assert_eq!(pairs(&display.values), vec![(2000, 0.0), (2001, 50.0)]);
    assert_eq!(pairs(&display.original_values), vec![(2000, 100.0), (2001, 150.0)]);
}

#[test]
fn growth_after_zero_previous_is_zero() {
    let display = Measure::Growth.apply(&series("A", &[(2000, 0.0), (2001, 10.0), (2002, 5.0)]));
    assert_eq!(pairs(&display.values), vec![(2000, 0.0), (2001, 0.0), (2002, -50.0)]);
}

#[test]
fn peak_normalized_divides_by_series_max() {
    let display = Measure::PeakNormalized.apply(&series("A", &[(2000, 100.0), (2001, 50.0)]));
    assert_eq!(pairs(&display.values), vec![(2000, 100.0), (2001, 50.0)]);
}

#[test]
fn growth_rate_is_relative_to_first_year() {
    let display = Measure::GrowthRate.apply(&series("A", &[(2000, 80.0), (2001, 100.0), (2002, 60.0)]));
    assert_relative_eq!(display.values[0].arrivals, 100.0);
    assert_relative_eq!(display.values[1].arrivals, 125.0);
    assert_relative_eq!(display.values[2].arrivals, 75.0);
}

#[test]
fn absolute_is_identity() {
    let input = series("A", &[(2000, 1.5), (2001, 2.5)]);
    let display = Measure::Absolute.apply(&input);
    assert_eq!(display.values, input.values);
    assert_eq!(display.values, display.original_values);
}

#[test]
fn strict_mode_reports_degenerate_divisors() {
    let zero_baseline = series("Zero", &[(2000, 0.0), (2001, 10.0)]);
    let err = Measure::GrowthRate
        .apply_strict(&zero_baseline)
        .expect_err("zero baseline");
    assert!(matches!(err, ExplorerError::InvalidDivisor { ref series } if series == "Zero"));

    let all_zero = series("Flat", &[(2000, 0.0), (2001, 0.0)]);
    assert!(Measure::PeakNormalized.apply_strict(&all_zero).is_err());

    assert!(Measure::Growth.apply_strict(&zero_baseline).is_ok());
    assert!(Measure::GrowthRate.apply_strict(&series("Empty", &[])).is_ok());
}

#[test]
fn strict_lookup_reports_data_gap() {
    let display = Measure::Absolute.apply(&series("A", &[(2000, 1.0), (2002, 3.0)]));
    assert_eq!(display.lookup_strict(2002).expect("present"), (3.0, 3.0));
    let err = display.lookup_strict(2001).expect_err("gap");
    assert!(matches!(err, ExplorerError::DataGap { year: 2001, .. }));
}

#[test]
fn axis_labels_follow_measure() {
    assert_eq!(Measure::Absolute.axis_label(2000), "International Tourist Arrivals");
    assert_eq!(Measure::Growth.axis_label(2000), "Year-over-Year Growth (%)");
    assert!(Measure::GrowthRate.axis_label(2005).contains("2005"));
    assert!(Measure::PeakNormalized.axis_label(2005).contains("peak"));
}

#[test]
fn wire_names_round_trip_through_serde() {
    let json = serde_json::to_string(&Measure::PeakNormalized).expect("serialize");
    assert_eq!(json, "\"perCapita\"");
    let alias: Measure = serde_json::from_str("\"peakNormalized\"").expect("alias");
    assert_eq!(alias, Measure::PeakNormalized);
    assert!("relative2000".parse::<Measure>().is_err());
}
