use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer: validates frames and counts what would be drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        *self = Self {
            frames_rendered: self.frames_rendered + 1,
            last_line_count: frame.lines.len(),
            last_rect_count: frame.rects.len(),
            last_text_count: frame.texts.len(),
        };
        Ok(())
    }
}
