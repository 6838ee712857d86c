use crate::core::YearValue;

/// Returns samples whose year falls inside an inclusive year window.
#[must_use]
pub fn values_in_year_window(values: &[YearValue], start: i32, end: i32) -> Vec<YearValue> {
    let (min_year, max_year) = normalize_year_range(start, end);

    values
        .iter()
        .copied()
        .filter(|value| value.year >= min_year && value.year <= max_year)
        .collect()
}

/// Orders a year pair so the first element is never greater than the second.
#[must_use]
pub fn normalize_year_range(start: i32, end: i32) -> (i32, i32) {
    if start <= end { (start, end) } else { (end, start) }
}

#[cfg(test)]
mod tests {
    use super::{normalize_year_range, values_in_year_window};
    use crate::core::YearValue;

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let values: Vec<YearValue> = (1995..=2000).map(|y| YearValue::new(y, 1.0)).collect();
        let window = values_in_year_window(&values, 1996, 1998);
        let years: Vec<i32> = window.iter().map(|value| value.year).collect();
        assert_eq!(years, vec![1996, 1997, 1998]);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        assert_eq!(normalize_year_range(2010, 2000), (2000, 2010));
        assert_eq!(normalize_year_range(2000, 2000), (2000, 2000));
    }
}
