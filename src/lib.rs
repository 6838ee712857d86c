//! tourism-explorer: headless engine for an interactive line chart of
//! international tourism arrivals.
//!
//! The crate loads per-country yearly arrivals, filters and aggregates them
//! into series, applies a measure transform and exposes zoom, playback, focus
//! and summary output through [`ExplorerEngine`]. Drawing is delegated to a
//! [`render::Renderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ExplorerConfig, ExplorerEngine};
pub use error::{ExplorerError, ExplorerResult};
