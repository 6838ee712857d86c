use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{Measure, Selection};
use crate::error::ExplorerResult;
use crate::interaction::ZoomTransform;
use crate::render::Renderer;

use super::tooltip::{TooltipPayload, TooltipValue, build_tooltip, tooltip_value};
use super::{ExplorerEngine, PlaybackState, PluginEvent};

impl<R: Renderer> ExplorerEngine<R> {
    /// Region selector.
    pub fn set_region(&mut self, region: Selection) {
        debug!(?region, "set region filter");
        self.state.region = region;
        self.recompute();
        self.emit_plugin_event(PluginEvent::FiltersChanged);
    }

    /// Country selector.
    pub fn set_country(&mut self, country: Selection) {
        debug!(?country, "set country filter");
        self.state.country = country;
        self.recompute();
        self.emit_plugin_event(PluginEvent::FiltersChanged);
    }

    pub fn set_measure(&mut self, measure: Measure) {
        debug!(%measure, "set measure");
        self.state.measure = measure;
        self.recompute();
        self.emit_plugin_event(PluginEvent::MeasureChanged { measure });
    }

    /// Dual year slider; a reversed pair is swapped before it is applied.
    pub fn set_year_range(&mut self, year_min: i32, year_max: i32) {
        self.state.set_year_range(year_min, year_max);
        let (year_min, year_max) = self.state.year_range();
        debug!(year_min, year_max, "set year range");
        self.recompute();
        self.emit_plugin_event(PluginEvent::YearRangeChanged { year_min, year_max });
    }

    /// Series click. Returns the focused key after the toggle.
    pub fn toggle_focus(&mut self, key: &str) -> Option<String> {
        let focused = self.state.toggle_focus(key).map(str::to_owned);
        trace!(?focused, "toggle focus");
        self.emit_plugin_event(PluginEvent::FocusChanged {
            focused: focused.is_some(),
        });
        focused
    }

    /// Background click clears any focus.
    pub fn clear_focus(&mut self) {
        if self.state.focused.is_none() {
            return;
        }
        self.state.clear_focus();
        self.emit_plugin_event(PluginEvent::FocusChanged { focused: false });
    }

    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        self.state.focused.as_deref()
    }

    /// Legend click. Entries only select a region while the legend lists
    /// regions; returns whether the click changed the filter.
    pub fn select_legend_entry(&mut self, label: &str) -> bool {
        if !self.state.aggregates_regions() {
            return false;
        }
        self.set_region(Selection::only(label));
        true
    }

    /// Reset button: filters, year range, focus, playback and zoom.
    pub fn reset(&mut self) {
        debug!("reset view");
        self.stop_playback();
        let (year_min, year_max) = self.default_year_range();
        self.state.reset(year_min, year_max);
        self.runtime.zoom.reset(self.config.zoom_reset_transition());
        self.recompute();
        self.emit_plugin_event(PluginEvent::ZoomReset);
        self.emit_plugin_event(PluginEvent::YearRangeChanged { year_min, year_max });
    }

    pub fn zoom_begin(&mut self) {
        self.runtime.zoom.begin_gesture();
    }

    /// Applies a gesture transform; the result is clamped to the year range.
    pub fn zoom_update(&mut self, transform: ZoomTransform) -> ExplorerResult<(f64, f64)> {
        let bounds = self.state.year_range();
        let width = self.plot_width();
        let domain = self.runtime.zoom.update_gesture(transform, bounds, width)?;
        self.after_zoom_change(domain);
        Ok(domain)
    }

    pub fn zoom_end(&mut self) {
        self.runtime.zoom.end_gesture();
    }

    /// Wheel zoom around a pixel measured from the plot's left edge.
    pub fn wheel_zoom(&mut self, wheel_delta_y: f64, anchor_px: f64) -> ExplorerResult<(f64, f64)> {
        let bounds = self.state.year_range();
        let width = self.plot_width();
        let domain = self
            .runtime
            .zoom
            .wheel_zoom(wheel_delta_y, anchor_px, bounds, width)?;
        self.after_zoom_change(domain);
        Ok(domain)
    }

    pub fn pan_by_pixels(&mut self, delta_px: f64) -> ExplorerResult<(f64, f64)> {
        let bounds = self.state.year_range();
        let width = self.plot_width();
        let domain = self.runtime.zoom.pan_by_pixels(delta_px, bounds, width)?;
        self.after_zoom_change(domain);
        Ok(domain)
    }

    /// Double click: animate back to the identity transform.
    pub fn reset_zoom(&mut self) {
        self.runtime.zoom.reset(self.config.zoom_reset_transition());
        self.state.zoom_transform = self.runtime.zoom.transform();
        self.emit_plugin_event(PluginEvent::ZoomReset);
    }

    /// Play/pause button. Returns the new playback state.
    pub fn toggle_playback(&mut self) -> PlaybackState {
        if self.runtime.playback.is_playing() {
            self.stop_playback();
        } else {
            self.start_playback();
        }
        self.runtime.playback.state()
    }

    /// Starts (or restarts) the year sweep from the current range.
    pub fn start_playback(&mut self) {
        let (year_min, year_max) = self.state.year_range();
        let upper_year = self.playback_upper_year();
        self.runtime.playback.start(year_min, year_max, upper_year);
        self.emit_plugin_event(PluginEvent::PlaybackStarted);
    }

    pub fn stop_playback(&mut self) {
        if !self.runtime.playback.is_playing() {
            return;
        }
        self.runtime.playback.stop();
        self.emit_plugin_event(PluginEvent::PlaybackStopped);
    }

    /// Host clock hook: steps the zoom reset transition and fires due
    /// playback ticks. Returns the number of playback ticks applied.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let bounds = self.state.year_range();
        let width = self.plot_width();
        if self.runtime.zoom.advance(elapsed, bounds, width) {
            self.state.zoom_transform = self.runtime.zoom.transform();
        }

        let frames = self.runtime.playback.advance(elapsed);
        for frame in &frames {
            self.state.set_year_range(frame.year_min, frame.year_max);
            self.recompute();
            self.emit_plugin_event(PluginEvent::PlaybackTick {
                year_min: frame.year_min,
                year_max: frame.year_max,
            });
        }
        frames.len()
    }

    /// Hover payload for a displayed series over the selected range.
    #[must_use]
    pub fn tooltip_for(&self, key: &str) -> Option<TooltipPayload> {
        let series = self.display_series_by_key(key)?;
        Some(build_tooltip(series, self.state.measure, self.state.year_range()))
    }

    /// Transformed and absolute values of a displayed series at one year.
    #[must_use]
    pub fn tooltip_at_year(&self, key: &str, year: i32) -> Option<TooltipValue> {
        let series = self.display_series_by_key(key)?;
        Some(tooltip_value(series, self.state.measure, year))
    }

    fn after_zoom_change(&mut self, domain: (f64, f64)) {
        self.state.zoom_transform = self.runtime.zoom.transform();
        self.emit_plugin_event(PluginEvent::ZoomChanged {
            start: domain.0,
            end: domain.1,
        });
    }
}
