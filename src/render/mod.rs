mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PathPrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ExplorerResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from filtering, measures and view state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ExplorerResult<()>;
}
