use serde::{Deserialize, Serialize};

use crate::api::PlaybackState;
use crate::core::Measure;
use crate::interaction::ZoomMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub year_range: (i32, i32),
    pub measure: Measure,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub records_len: usize,
    pub displayed_series_len: usize,
    pub zoom_mode: ZoomMode,
    pub playback: PlaybackState,
    pub has_focus: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataLoaded { records_len: usize, countries_len: usize },
    FiltersChanged,
    MeasureChanged { measure: Measure },
    YearRangeChanged { year_min: i32, year_max: i32 },
    FocusChanged { focused: bool },
    ZoomChanged { start: f64, end: f64 },
    ZoomReset,
    PlaybackStarted,
    PlaybackTick { year_min: i32, year_max: i32 },
    PlaybackStopped,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
pub trait ExplorerPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
