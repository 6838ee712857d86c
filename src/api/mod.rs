//! Explorer facade: view state, control handlers and derived view output.
//!
//! `ExplorerEngine` is split across several files, each contributing one
//! `impl` block for a group of related operations.

mod axis_ticks;
mod control_handlers;
mod engine;
mod engine_config;
mod frame_builder;
mod json_contract;
mod label_format;
mod pipeline;
mod playback;
mod plugin_dispatch;
mod plugin_registry;
mod presentation;
mod snapshot;
mod stats;
mod tooltip;
mod view_state;
mod zoom_controller;

pub use axis_ticks::AxisTick;
pub use engine::ExplorerEngine;
pub use engine_config::{DEFAULT_PLAYBACK_UPPER_YEAR, ExplorerConfig, PlotArea, PlotMargins};
pub use json_contract::{VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshotJsonContractV1};
pub use label_format::{
    EMPTY_STATS_PLACEHOLDER, MISSING_VALUE_PLACEHOLDER, format_arrivals, format_measure_value,
    format_optional_arrivals, format_percent, format_signed_percent, format_year,
};
pub use pipeline::{apply_measure, derive_display_series, filter_series};
pub use playback::{PlaybackController, PlaybackFrame, PlaybackState};
pub use presentation::{
    BASE_STROKE_WIDTH, COUNTRY_PALETTE, ColorBy, ColorScale, DIMMED_OPACITY, FOCUSED_STROKE_WIDTH,
    LegendEntry, REGION_PALETTE, SeriesEmphasis, build_legend, series_emphasis,
};
pub use snapshot::ViewSnapshot;
pub use stats::{StatsEntry, StatsKind, StatsPanel, build_stats};
pub use tooltip::{ChangeClass, TooltipPayload, TooltipValue, build_tooltip, tooltip_value};
pub use view_state::ViewState;
pub use zoom_controller::ZoomController;

pub use crate::extensions::PluginEvent;
