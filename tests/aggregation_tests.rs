use tourism_explorer::core::{
    ArrivalRecord, Dataset, SeriesKind, aggregate_by_region, group_by_country,
};

fn record(country: &str, region: &str, year: i32, arrivals: f64) -> ArrivalRecord {
    ArrivalRecord::new(country, &country[..3.min(country.len())], region, year, arrivals)
}

#[test]
fn group_by_country_sorts_years_and_keeps_first_region() {
    let records = vec![
        record("Spain", "Europe", 2002, 60.0),
        record("Japan", "Asia", 2000, 5.0),
        record("Spain", "Europe", 2000, 50.0),
        record("Spain", "Southern Europe", 2001, 55.0),
    ];

    let series = group_by_country(&records);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].key, "Spain");
    assert_eq!(series[0].region, "Europe");
    assert_eq!(series[0].kind, SeriesKind::Country);
    let years: Vec<i32> = series[0].values.iter().map(|value| value.year).collect();
    assert_eq!(years, vec![2000, 2001, 2002]);
    assert_eq!(series[1].key, "Japan");
}

#[test]
fn region_aggregation_sums_same_year() {
    let countries = group_by_country(&[record("B", "R", 2005, 10.0), record("C", "R", 2005, 20.0)]);
    let regions = aggregate_by_region(&countries);

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].key, "R");
    assert_eq!(regions[0].kind, SeriesKind::Region);
    assert_eq!(regions[0].value_at(2005).map(|value| value.arrivals), Some(30.0));
}

#[test]
fn region_aggregation_covers_year_union_with_missing_as_zero() {
    let countries = group_by_country(&[
        record("B", "R", 2000, 10.0),
        record("B", "R", 2001, 11.0),
        record("C", "R", 2001, 20.0),
        record("C", "R", 2002, 22.0),
    ]);
    let regions = aggregate_by_region(&countries);

    let values: Vec<(i32, f64)> = regions[0]
        .values
        .iter()
        .map(|value| (value.year, value.arrivals))
        .collect();
    assert_eq!(values, vec![(2000, 10.0), (2001, 31.0), (2002, 22.0)]);
}

#[test]
fn dataset_derives_options_and_bounds() {
    let dataset = Dataset::from_records(vec![
        record("World", "Aggregates", 1995, 500.0),
        record("Spain", "Europe", 2000, 50.0),
        record("Japan", "Asia", 2019, 31.0),
        record("Nowhere", "", 2005, 1.0),
    ]);

    assert_eq!(dataset.regions(), ["Asia", "Europe"]);
    assert_eq!(dataset.countries(), ["Japan", "Nowhere", "Spain", "World"]);
    assert_eq!(dataset.year_bounds(), Some((1995, 2019)));
    assert_eq!(dataset.max_arrivals(), Some(500.0));
    assert_eq!(dataset.country_series().len(), 4);
}

#[test]
fn empty_dataset_has_no_bounds() {
    let dataset = Dataset::from_records(Vec::new());
    assert!(dataset.is_empty());
    assert_eq!(dataset.year_bounds(), None);
    assert_eq!(dataset.max_arrivals(), None);
}
