use serde::{Deserialize, Serialize};

use crate::core::DisplaySeries;
use crate::interaction::ZoomMode;
use crate::render::Renderer;

use super::{ExplorerEngine, LegendEntry, PlaybackState, StatsPanel, ViewState};

/// Serializable view of everything a host needs to draw one frame of UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub state: ViewState,
    pub regions: Vec<String>,
    pub countries: Vec<String>,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub axis_label: String,
    pub series: Vec<DisplaySeries>,
    pub legend: Vec<LegendEntry>,
    pub stats: StatsPanel,
    pub playback: PlaybackState,
    pub zoom_mode: ZoomMode,
}

impl<R: Renderer> ExplorerEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            state: self.state.clone(),
            regions: self.regions().to_vec(),
            countries: self.countries().to_vec(),
            x_domain: self.x_domain(),
            y_domain: self.derived.y_domain,
            axis_label: self.axis_label(),
            series: self.derived.series.clone(),
            legend: self.legend(),
            stats: self.stats(),
            playback: self.runtime.playback.state(),
            zoom_mode: self.runtime.zoom.mode(),
        }
    }
}
