use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Fallback font when a frame does not name one.
pub const DEFAULT_FONT_FAMILY: &str = "Sans";

/// Everything a backend paints for one chart, in paint order: background,
/// rects (bars, legend swatches), lines (zero rule), texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub font_family: String,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: Color::TRANSPARENT,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Checks every primitive before a backend touches the surface.
    pub fn validate(&self) -> ChartResult<()> {
        let Viewport { width, height } = self.viewport;
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        if self.font_family.trim().is_empty() {
            return Err(ChartError::InvalidData("frame has no font family".to_owned()));
        }

        self.background.validate()?;
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.lines.iter().try_for_each(|line| line.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len() + self.lines.len() + self.texts.len()
    }
}
