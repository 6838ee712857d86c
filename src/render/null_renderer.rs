use crate::error::ExplorerResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer that validates each frame and keeps its shape.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_series_count: usize,
    pub last_legend_rows: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ExplorerResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_series_count = frame.paths.len();
        // One swatch per legend row.
        self.last_legend_rows = frame.rects.len();
        Ok(())
    }
}
