use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::core::{ArrivalRecord, Series, SeriesKind, YearValue};

/// Partitions records by country in first-appearance order.
///
/// Each partition is sorted ascending by year. The region is taken from the
/// first record of the partition; it is not cross-checked against the rest.
#[must_use]
pub fn group_by_country(records: &[ArrivalRecord]) -> Vec<Series> {
    let mut partitions: IndexMap<&str, Series> = IndexMap::new();
    for record in records {
        partitions
            .entry(record.country.as_str())
            .or_insert_with(|| Series {
                key: record.country.clone(),
                region: record.region.clone(),
                kind: SeriesKind::Country,
                values: Vec::new(),
            })
            .values
            .push(YearValue::new(record.year, record.arrivals));
    }

    partitions
        .into_values()
        .map(|mut series| {
            series.values.sort_by_key(|value| value.year);
            series
        })
        .collect()
}

/// Sums country series into one series per region.
///
/// Regions keep first-appearance order. Each region covers the union of its
/// members' years; a member without a value for a year contributes 0.
#[must_use]
pub fn aggregate_by_region(series: &[Series]) -> Vec<Series> {
    let mut regions: IndexMap<&str, BTreeMap<i32, f64>> = IndexMap::new();
    for country in series {
        let totals = regions.entry(country.region.as_str()).or_default();
        for value in &country.values {
            *totals.entry(value.year).or_insert(0.0) += value.arrivals;
        }
    }

    regions
        .into_iter()
        .map(|(region, totals)| Series {
            key: region.to_owned(),
            region: region.to_owned(),
            kind: SeriesKind::Region,
            values: totals
                .into_iter()
                .map(|(year, arrivals)| YearValue::new(year, arrivals))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{aggregate_by_region, group_by_country};
    use crate::core::{ArrivalRecord, SeriesKind, YearValue};

    #[test]
    fn grouping_sorts_years_and_keeps_first_region() {
        let records = vec![
            ArrivalRecord::new("A", "AAA", "North", 2001, 2.0),
            ArrivalRecord::new("B", "BBB", "South", 2000, 5.0),
            ArrivalRecord::new("A", "AAA", "Elsewhere", 2000, 1.0),
        ];
        let grouped = group_by_country(&records);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].key, "A");
        assert_eq!(grouped[0].region, "North");
        assert_eq!(
            grouped[0].values,
            vec![YearValue::new(2000, 1.0), YearValue::new(2001, 2.0)]
        );
        assert_eq!(grouped[1].key, "B");
    }

    #[test]
    fn region_union_of_years_treats_missing_as_zero() {
        let records = vec![
            ArrivalRecord::new("B", "BBB", "R", 2005, 10.0),
            ArrivalRecord::new("C", "CCC", "R", 2005, 20.0),
            ArrivalRecord::new("C", "CCC", "R", 2006, 7.0),
        ];
        let regions = aggregate_by_region(&group_by_country(&records));
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].key, "R");
        assert_eq!(regions[0].kind, SeriesKind::Region);
        assert_eq!(
            regions[0].values,
            vec![YearValue::new(2005, 30.0), YearValue::new(2006, 7.0)]
        );
    }
}
