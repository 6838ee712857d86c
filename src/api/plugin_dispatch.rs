use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ExplorerEngine, PluginEvent};

impl<R: Renderer> ExplorerEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            year_range: self.state.year_range(),
            measure: self.state.measure,
            x_domain: self.x_domain(),
            y_domain: self.derived.y_domain,
            records_len: self.dataset.records().len(),
            displayed_series_len: self.derived.series.len(),
            zoom_mode: self.runtime.zoom.mode(),
            playback: self.runtime.playback.state(),
            has_focus: self.state.focused.is_some(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.runtime.plugins {
            plugin.on_event(event, context);
        }
    }
}
