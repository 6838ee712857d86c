use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::DisplaySeries;
use crate::render::Color;

use super::ViewState;

/// Ten-color palette used when series are colored per region.
pub const REGION_PALETTE: [Color; 10] = [
    Color::from_hex(0x4e79a7),
    Color::from_hex(0xf28e2c),
    Color::from_hex(0xe15759),
    Color::from_hex(0x76b7b2),
    Color::from_hex(0x59a14f),
    Color::from_hex(0xedc949),
    Color::from_hex(0xaf7aa1),
    Color::from_hex(0xff9da7),
    Color::from_hex(0x9c755f),
    Color::from_hex(0xbab0ab),
];

/// Ten-color palette used when series are colored per country.
pub const COUNTRY_PALETTE: [Color; 10] = [
    Color::from_hex(0x1f77b4),
    Color::from_hex(0xff7f0e),
    Color::from_hex(0x2ca02c),
    Color::from_hex(0xd62728),
    Color::from_hex(0x9467bd),
    Color::from_hex(0x8c564b),
    Color::from_hex(0xe377c2),
    Color::from_hex(0x7f7f7f),
    Color::from_hex(0xbcbd22),
    Color::from_hex(0x17becf),
];

pub const BASE_STROKE_WIDTH: f64 = 2.0;
pub const FOCUSED_STROKE_WIDTH: f64 = 4.0;
pub const DIMMED_OPACITY: f64 = 0.15;

/// Which attribute of a series picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorBy {
    Country,
    Region,
}

/// Ordinal category → color assignment in domain order, cycling the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    color_by: ColorBy,
    domain: IndexSet<String>,
}

impl ColorScale {
    #[must_use]
    pub fn for_series(state: &ViewState, series: &[DisplaySeries]) -> Self {
        let color_by = if state.colors_by_country() {
            ColorBy::Country
        } else {
            ColorBy::Region
        };
        let domain = series
            .iter()
            .map(|entry| match color_by {
                ColorBy::Country => entry.key.clone(),
                ColorBy::Region => entry.region.clone(),
            })
            .collect();
        Self { color_by, domain }
    }

    #[must_use]
    pub fn color_by(&self) -> ColorBy {
        self.color_by
    }

    #[must_use]
    pub fn color_for_category(&self, category: &str) -> Color {
        let palette: &[Color] = match self.color_by {
            ColorBy::Country => &COUNTRY_PALETTE,
            ColorBy::Region => &REGION_PALETTE,
        };
        let index = self
            .domain
            .get_index_of(category)
            .unwrap_or(self.domain.len());
        palette[index % palette.len()]
    }

    #[must_use]
    pub fn color_for_series(&self, series: &DisplaySeries) -> Color {
        match self.color_by {
            ColorBy::Country => self.color_for_category(&series.key),
            ColorBy::Region => self.color_for_category(&series.region),
        }
    }
}

/// Visual weight of a series given the current focus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesEmphasis {
    pub focused: bool,
    pub opacity: f64,
    pub stroke_width: f64,
}

#[must_use]
pub fn series_emphasis(focused: Option<&str>, key: &str) -> SeriesEmphasis {
    match focused {
        None => SeriesEmphasis {
            focused: false,
            opacity: 1.0,
            stroke_width: BASE_STROKE_WIDTH,
        },
        Some(focus) if focus == key => SeriesEmphasis {
            focused: true,
            opacity: 1.0,
            stroke_width: FOCUSED_STROKE_WIDTH,
        },
        Some(_) => SeriesEmphasis {
            focused: false,
            opacity: DIMMED_OPACITY,
            stroke_width: BASE_STROKE_WIDTH,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    /// Clicking the entry selects it as the region filter; only region
    /// entries of the unfiltered view do.
    pub selects_region: bool,
}

/// Legend content for the displayed series.
///
/// A selected country lists series in display order, a selected region lists
/// its countries sorted, and the unfiltered view lists distinct regions sorted.
#[must_use]
pub fn build_legend(
    state: &ViewState,
    series: &[DisplaySeries],
    colors: &ColorScale,
) -> Vec<LegendEntry> {
    let labels: Vec<String> = if !state.country.is_all() {
        series.iter().map(|entry| entry.key.clone()).collect()
    } else if !state.region.is_all() {
        let mut keys: Vec<String> = series.iter().map(|entry| entry.key.clone()).collect();
        keys.sort();
        keys
    } else {
        let mut regions: Vec<String> = series
            .iter()
            .map(|entry| entry.region.clone())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        regions.sort();
        regions
    };

    let selects_region = state.aggregates_regions();
    labels
        .into_iter()
        .map(|label| LegendEntry {
            color: colors.color_for_category(&label),
            label,
            selects_region,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{COUNTRY_PALETTE, DIMMED_OPACITY, series_emphasis};

    #[test]
    fn emphasis_dims_everything_but_focus() {
        let none = series_emphasis(None, "Spain");
        assert_eq!(none.opacity, 1.0);
        assert_eq!(none.stroke_width, 2.0);

        let hit = series_emphasis(Some("Spain"), "Spain");
        assert!(hit.focused);
        assert_eq!(hit.stroke_width, 4.0);

        let miss = series_emphasis(Some("Spain"), "Italy");
        assert_eq!(miss.opacity, DIMMED_OPACITY);
    }

    #[test]
    fn palettes_have_distinct_colors() {
        for (index, color) in COUNTRY_PALETTE.iter().enumerate() {
            assert!(COUNTRY_PALETTE[index + 1..].iter().all(|other| other != color));
        }
    }
}
