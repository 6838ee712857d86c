use std::path::Path;

use tracing::{debug, warn};

use crate::core::{ArrivalRecord, Dataset, DisplaySeries, Measure, value_domain};
use crate::error::ExplorerResult;
use crate::extensions::ExplorerPlugin;
use crate::interaction::{ZoomMode, ZoomTransform};
use crate::render::{RenderFrame, Renderer};

use super::engine_config::DEFAULT_PLAYBACK_UPPER_YEAR;
use super::presentation::{ColorScale, LegendEntry, build_legend};
use super::stats::{StatsPanel, build_stats};
use super::{
    ExplorerConfig, PlaybackController, PlaybackState, PluginEvent, ViewState, ZoomController,
    derive_display_series, frame_builder,
};

/// Everything derived from `(dataset, view state)`; rebuilt on every change.
pub(super) struct DerivedView {
    pub(super) series: Vec<DisplaySeries>,
    pub(super) y_domain: (f64, f64),
    pub(super) colors: ColorScale,
}

pub(super) struct ExplorerRuntime {
    pub(super) zoom: ZoomController,
    pub(super) playback: PlaybackController,
    pub(super) plugins: Vec<Box<dyn ExplorerPlugin>>,
}

/// Main orchestration facade consumed by host applications.
///
/// `ExplorerEngine` owns the dataset and the single authoritative
/// [`ViewState`]. Every control handler mutates state and then recomputes the
/// derived view before returning, so reads never observe stale output.
pub struct ExplorerEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ExplorerConfig,
    pub(super) dataset: Dataset,
    pub(super) state: ViewState,
    pub(super) derived: DerivedView,
    pub(super) runtime: ExplorerRuntime,
}

impl<R: Renderer> ExplorerEngine<R> {
    pub fn new(renderer: R, config: ExplorerConfig) -> ExplorerResult<Self> {
        let config = config.validate()?;
        let state = ViewState::new(config.default_year_min, config.default_year_max);
        let derived = DerivedView {
            series: Vec::new(),
            y_domain: value_domain(&[], state.measure, config.y_padding_ratio),
            colors: ColorScale::for_series(&state, &[]),
        };

        Ok(Self {
            runtime: ExplorerRuntime {
                zoom: ZoomController::new(config.zoom_scale_extent)?,
                playback: PlaybackController::new(config.playback_interval())?,
                plugins: Vec::new(),
            },
            renderer,
            config,
            dataset: Dataset::default(),
            state,
            derived,
        })
    }

    /// Replaces the dataset and selects its full year range.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        debug!(
            records = dataset.records().len(),
            countries = dataset.countries().len(),
            regions = dataset.regions().len(),
            "load dataset"
        );
        self.runtime.playback.stop();
        self.dataset = dataset;
        let (year_min, year_max) = self.default_year_range();
        self.state.reset(year_min, year_max);
        self.runtime.zoom.reset(std::time::Duration::ZERO);
        self.recompute();
        self.emit_plugin_event(PluginEvent::DataLoaded {
            records_len: self.dataset.records().len(),
            countries_len: self.dataset.countries().len(),
        });
    }

    pub fn load_records(&mut self, records: Vec<ArrivalRecord>) {
        self.load_dataset(Dataset::from_records(records));
    }

    pub fn load_csv_path(&mut self, path: impl AsRef<Path>) -> ExplorerResult<()> {
        let records = crate::core::load_records_from_path(path)?;
        self.load_records(records);
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> ExplorerConfig {
        self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn regions(&self) -> &[String] {
        self.dataset.regions()
    }

    #[must_use]
    pub fn countries(&self) -> &[String] {
        self.dataset.countries()
    }

    /// Filtered and measure-transformed series for the current view.
    #[must_use]
    pub fn display_series(&self) -> &[DisplaySeries] {
        &self.derived.series
    }

    #[must_use]
    pub fn display_series_by_key(&self, key: &str) -> Option<&DisplaySeries> {
        self.derived.series.iter().find(|series| series.key == key)
    }

    #[must_use]
    pub fn y_domain(&self) -> (f64, f64) {
        self.derived.y_domain
    }

    /// Visible year domain after zoom, always inside the selected range.
    #[must_use]
    pub fn x_domain(&self) -> (f64, f64) {
        self.runtime
            .zoom
            .x_domain(self.state.year_range(), self.plot_width())
    }

    #[must_use]
    pub fn axis_label(&self) -> String {
        self.state.measure.axis_label(self.state.year_min())
    }

    #[must_use]
    pub fn measure(&self) -> Measure {
        self.state.measure
    }

    #[must_use]
    pub fn zoom_mode(&self) -> ZoomMode {
        self.runtime.zoom.mode()
    }

    #[must_use]
    pub fn zoom_transform(&self) -> ZoomTransform {
        self.runtime.zoom.transform()
    }

    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.runtime.playback.state()
    }

    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        build_legend(&self.state, &self.derived.series, &self.derived.colors)
    }

    #[must_use]
    pub fn stats(&self) -> StatsPanel {
        build_stats(
            &self.derived.series,
            self.state.year_range(),
            self.config.stats_top_n,
        )
    }

    pub fn build_frame(&self) -> ExplorerResult<RenderFrame> {
        frame_builder::build_render_frame(self)
    }

    pub fn render(&mut self) -> ExplorerResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn plot_width(&self) -> f64 {
        self.config.plot_area().width
    }

    /// Dataset year bounds, or the configured defaults without data.
    pub(super) fn default_year_range(&self) -> (i32, i32) {
        self.dataset
            .year_bounds()
            .unwrap_or((self.config.default_year_min, self.config.default_year_max))
    }

    pub(super) fn playback_upper_year(&self) -> i32 {
        self.config
            .playback_upper_year
            .or_else(|| self.dataset.year_bounds().map(|(_, max)| max))
            .unwrap_or(DEFAULT_PLAYBACK_UPPER_YEAR)
    }

    /// Rebuilds the derived view from the dataset and the current state.
    pub(super) fn recompute(&mut self) {
        let series = derive_display_series(&self.state, self.dataset.country_series());
        if series.is_empty() && !self.dataset.is_empty() {
            warn!(
                region = ?self.state.region,
                country = ?self.state.country,
                year_min = self.state.year_min(),
                year_max = self.state.year_max(),
                "current filters match no series"
            );
        }
        self.runtime
            .zoom
            .reclamp(self.state.year_range(), self.plot_width());
        self.state.zoom_transform = self.runtime.zoom.transform();
        self.derived = DerivedView {
            y_domain: value_domain(&series, self.state.measure, self.config.y_padding_ratio),
            colors: ColorScale::for_series(&self.state, &series),
            series,
        };
    }
}
