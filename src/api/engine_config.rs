use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ExplorerError, ExplorerResult};

/// Fallback upper year for playback when no dataset bound is known.
pub const DEFAULT_PLAYBACK_UPPER_YEAR: i32 = 2020;

/// Space reserved around the plot area for axes and legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 28.0,
            right: 120.0,
            bottom: 42.0,
            left: 80.0,
        }
    }
}

/// Inner plot rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.left, self.left + self.width)
    }

    /// Inverted so larger values sit higher on screen.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.top + self.height, self.top)
    }
}

/// Public explorer bootstrap configuration.
///
/// Serializable so hosts can persist/load setup; every field has a default so
/// partial JSON documents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_year_min")]
    pub default_year_min: i32,
    #[serde(default = "default_year_max")]
    pub default_year_max: i32,
    #[serde(default = "default_playback_interval_ms")]
    pub playback_interval_ms: u64,
    /// Upper year where playback wraps; `None` uses the dataset's max year.
    #[serde(default)]
    pub playback_upper_year: Option<i32>,
    #[serde(default = "default_zoom_scale_extent")]
    pub zoom_scale_extent: (f64, f64),
    #[serde(default = "default_zoom_reset_transition_ms")]
    pub zoom_reset_transition_ms: u64,
    #[serde(default = "default_stats_top_n")]
    pub stats_top_n: usize,
    #[serde(default = "default_y_padding_ratio")]
    pub y_padding_ratio: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            default_year_min: default_year_min(),
            default_year_max: default_year_max(),
            playback_interval_ms: default_playback_interval_ms(),
            playback_upper_year: None,
            zoom_scale_extent: default_zoom_scale_extent(),
            zoom_reset_transition_ms: default_zoom_reset_transition_ms(),
            stats_top_n: default_stats_top_n(),
            y_padding_ratio: default_y_padding_ratio(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_default_years(mut self, year_min: i32, year_max: i32) -> Self {
        self.default_year_min = year_min;
        self.default_year_max = year_max;
        self
    }

    #[must_use]
    pub fn with_playback_upper_year(mut self, upper_year: i32) -> Self {
        self.playback_upper_year = Some(upper_year);
        self
    }

    #[must_use]
    pub fn playback_interval(self) -> Duration {
        Duration::from_millis(self.playback_interval_ms)
    }

    #[must_use]
    pub fn zoom_reset_transition(self) -> Duration {
        Duration::from_millis(self.zoom_reset_transition_ms)
    }

    /// Plot rectangle left after subtracting margins; may be zero-sized.
    #[must_use]
    pub fn plot_area(self) -> PlotArea {
        PlotArea {
            left: self.margins.left,
            top: self.margins.top,
            width: (f64::from(self.viewport.width) - self.margins.left - self.margins.right)
                .max(0.0),
            height: (f64::from(self.viewport.height) - self.margins.top - self.margins.bottom)
                .max(0.0),
        }
    }

    pub fn validate(self) -> ExplorerResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ExplorerError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let margins = [
            self.margins.top,
            self.margins.right,
            self.margins.bottom,
            self.margins.left,
        ];
        if margins.iter().any(|margin| !margin.is_finite() || *margin < 0.0) {
            return Err(ExplorerError::InvalidData(
                "plot margins must be finite and >= 0".to_owned(),
            ));
        }
        let area = self.plot_area();
        if area.width <= 0.0 || area.height <= 0.0 {
            return Err(ExplorerError::InvalidData(
                "plot margins leave no drawable area".to_owned(),
            ));
        }
        if self.playback_interval_ms == 0 {
            return Err(ExplorerError::InvalidData(
                "playback interval must be > 0".to_owned(),
            ));
        }
        if self.stats_top_n == 0 {
            return Err(ExplorerError::InvalidData(
                "stats top-n must be > 0".to_owned(),
            ));
        }
        if !self.y_padding_ratio.is_finite() || self.y_padding_ratio < 0.0 {
            return Err(ExplorerError::InvalidData(
                "y padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ExplorerResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> ExplorerResult<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(960, 540)
}

fn default_year_min() -> i32 {
    1995
}

fn default_year_max() -> i32 {
    2020
}

fn default_playback_interval_ms() -> u64 {
    600
}

fn default_zoom_scale_extent() -> (f64, f64) {
    (0.5, 10.0)
}

fn default_zoom_reset_transition_ms() -> u64 {
    750
}

fn default_stats_top_n() -> usize {
    5
}

fn default_y_padding_ratio() -> f64 {
    0.05
}
