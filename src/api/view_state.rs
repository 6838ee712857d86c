use serde::{Deserialize, Serialize};

use crate::core::{Measure, Selection, normalize_year_range};
use crate::interaction::ZoomTransform;

/// Single authoritative set of control selections for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ViewStateRepr")]
pub struct ViewState {
    pub region: Selection,
    pub country: Selection,
    pub measure: Measure,
    year_min: i32,
    year_max: i32,
    pub focused: Option<String>,
    pub zoom_transform: ZoomTransform,
}

/// Wire form; the year pair is normalized on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewStateRepr {
    region: Selection,
    country: Selection,
    measure: Measure,
    year_min: i32,
    year_max: i32,
    focused: Option<String>,
    zoom_transform: ZoomTransform,
}

impl From<ViewStateRepr> for ViewState {
    fn from(repr: ViewStateRepr) -> Self {
        let (year_min, year_max) = normalize_year_range(repr.year_min, repr.year_max);
        Self {
            region: repr.region,
            country: repr.country,
            measure: repr.measure,
            year_min,
            year_max,
            focused: repr.focused,
            zoom_transform: repr.zoom_transform,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(year_min: i32, year_max: i32) -> Self {
        let (year_min, year_max) = normalize_year_range(year_min, year_max);
        Self {
            region: Selection::All,
            country: Selection::All,
            measure: Measure::Absolute,
            year_min,
            year_max,
            focused: None,
            zoom_transform: ZoomTransform::IDENTITY,
        }
    }

    #[must_use]
    pub fn year_min(&self) -> i32 {
        self.year_min
    }

    #[must_use]
    pub fn year_max(&self) -> i32 {
        self.year_max
    }

    #[must_use]
    pub fn year_range(&self) -> (i32, i32) {
        (self.year_min, self.year_max)
    }

    /// Dual-slider write; a reversed pair is swapped.
    pub fn set_year_range(&mut self, year_min: i32, year_max: i32) {
        let (year_min, year_max) = normalize_year_range(year_min, year_max);
        self.year_min = year_min;
        self.year_max = year_max;
    }

    /// Region aggregation happens only when neither filter is set.
    #[must_use]
    pub fn aggregates_regions(&self) -> bool {
        self.region.is_all() && self.country.is_all()
    }

    /// Series are colored per country whenever any filter is set.
    #[must_use]
    pub fn colors_by_country(&self) -> bool {
        !self.aggregates_regions()
    }

    /// Single-selection toggle. Returns the focus after the toggle.
    pub fn toggle_focus(&mut self, key: &str) -> Option<&str> {
        if self.focused.as_deref() == Some(key) {
            self.focused = None;
        } else {
            self.focused = Some(key.to_owned());
        }
        self.focused.as_deref()
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Clears filters and focus and applies the given year range.
    pub fn reset(&mut self, year_min: i32, year_max: i32) {
        let measure = self.measure;
        *self = Self::new(year_min, year_max);
        self.measure = measure;
    }
}
