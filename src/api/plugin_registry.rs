use tracing::debug;

use crate::error::{ExplorerError, ExplorerResult};
use crate::extensions::ExplorerPlugin;
use crate::render::Renderer;

use super::ExplorerEngine;

impl<R: Renderer> ExplorerEngine<R> {
    /// Adds a plugin; ids must be non-empty and unique per engine.
    pub fn register_plugin(&mut self, plugin: Box<dyn ExplorerPlugin>) -> ExplorerResult<()> {
        let id = plugin.id();
        if id.is_empty() {
            return Err(ExplorerError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(id) {
            return Err(ExplorerError::InvalidData(format!(
                "plugin `{id}` is already registered"
            )));
        }
        debug!(plugin = id, "register plugin");
        self.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Returns `true` when a plugin with `id` was removed.
    pub fn unregister_plugin(&mut self, id: &str) -> bool {
        let before = self.runtime.plugins.len();
        self.runtime.plugins.retain(|plugin| plugin.id() != id);
        let removed = self.runtime.plugins.len() != before;
        if removed {
            debug!(plugin = id, "unregister plugin");
        }
        removed
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, id: &str) -> bool {
        self.runtime.plugins.iter().any(|plugin| plugin.id() == id)
    }
}
