//! Optional hooks for host code that observes the explorer.
//!
//! Plugins read state snapshots and never mutate engine internals directly.

pub mod plugins;

pub use plugins::{ExplorerPlugin, PluginContext, PluginEvent};
