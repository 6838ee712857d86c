use std::collections::BTreeSet;

use crate::core::{ArrivalRecord, Series, group_by_country};

/// Region label used by the source for pseudo-regions such as "World".
pub const AGGREGATES_REGION: &str = "Aggregates";

/// Loaded arrivals plus everything derived once per load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<ArrivalRecord>,
    country_series: Vec<Series>,
    regions: Vec<String>,
    countries: Vec<String>,
    year_bounds: Option<(i32, i32)>,
}

impl Dataset {
    #[must_use]
    pub fn from_records(records: Vec<ArrivalRecord>) -> Self {
        let country_series = group_by_country(&records);

        let regions: BTreeSet<&str> = records
            .iter()
            .map(|record| record.region.as_str())
            .filter(|region| !region.is_empty() && *region != AGGREGATES_REGION)
            .collect();
        let countries: BTreeSet<&str> = records
            .iter()
            .map(|record| record.country.as_str())
            .collect();

        let year_bounds = records.iter().fold(None, |bounds, record| match bounds {
            None => Some((record.year, record.year)),
            Some((min, max)) => Some((record.year.min(min), record.year.max(max))),
        });

        Self {
            regions: regions.into_iter().map(str::to_owned).collect(),
            countries: countries.into_iter().map(str::to_owned).collect(),
            country_series,
            year_bounds,
            records,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ArrivalRecord] {
        &self.records
    }

    /// Country series grouped once at load time.
    #[must_use]
    pub fn country_series(&self) -> &[Series] {
        &self.country_series
    }

    /// Region selector options, sorted, without the aggregates pseudo-region.
    #[must_use]
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Country selector options, sorted.
    #[must_use]
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    #[must_use]
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.year_bounds
    }

    #[must_use]
    pub fn max_arrivals(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|record| record.arrivals)
            .filter(|arrivals| !arrivals.is_nan())
            .reduce(f64::max)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;
    use crate::core::ArrivalRecord;

    #[test]
    fn option_lists_are_sorted_and_skip_aggregates() {
        let dataset = Dataset::from_records(vec![
            ArrivalRecord::new("World", "WLD", "Aggregates", 2000, 900.0),
            ArrivalRecord::new("Peru", "PER", "Latin America", 2001, 3.0),
            ArrivalRecord::new("France", "FRA", "Europe", 1999, 70.0),
            ArrivalRecord::new("Nowhere", "NWH", "", 2000, 1.0),
        ]);
        assert_eq!(dataset.regions(), ["Europe", "Latin America"]);
        assert_eq!(dataset.countries(), ["France", "Nowhere", "Peru", "World"]);
        assert_eq!(dataset.year_bounds(), Some((1999, 2001)));
        assert_eq!(dataset.max_arrivals(), Some(900.0));
        assert_eq!(dataset.country_series().len(), 4);
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.year_bounds(), None);
    }
}
