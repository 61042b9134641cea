use std::f64::consts::FRAC_PI_2;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextVAlign,
};

/// Primitive counts of the most recent [`CairoRenderer::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Rasterizes chart frames into an ARGB32 image surface.
///
/// Bars are painted first, then rules, then text, so labels always sit on top.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: width.max(0).unsigned_abs(),
                height: height.max(0).unsigned_abs(),
            });
        }

        let surface =
            ImageSurface::create(Format::ARgb32, width, height).map_err(cairo_error("create surface"))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Surface sized to the frame's viewport.
    pub fn for_frame(frame: &RenderFrame) -> ChartResult<Self> {
        let to_i32 = |side: u32| {
            i32::try_from(side).map_err(|_| ChartError::InvalidViewport {
                width: frame.viewport.width,
                height: frame.viewport.height,
            })
        };
        Self::new(to_i32(frame.viewport.width)?, to_i32(frame.viewport.height)?)
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the surface as PNG, replacing whatever is at `path`.
    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let png_error = |action: &str, err: &dyn std::fmt::Display| {
            ChartError::Render(format!("failed to {action} `{}`: {err}", path.display()))
        };
        let mut file = File::create(path).map_err(|err| png_error("create", &err))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| png_error("encode", &err))
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let context = Context::new(&self.surface).map_err(cairo_error("create context"))?;

        context.set_operator(Operator::Source);
        set_color(&context, frame.background);
        context.paint().map_err(cairo_error("clear surface"))?;
        context.set_operator(Operator::Over);

        for rect in &frame.rects {
            fill_rect(&context, rect)?;
        }
        for line in &frame.lines {
            stroke_line(&context, line)?;
        }
        for text in &frame.texts {
            show_text(&context, &frame.font_family, text)?;
        }

        self.last_stats = CairoRenderStats {
            lines_drawn: frame.lines.len(),
            rects_drawn: frame.rects.len(),
            texts_drawn: frame.texts.len(),
        };
        trace!(stats = ?self.last_stats, "cairo frame rendered");
        Ok(())
    }
}

fn fill_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    set_color(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context.fill().map_err(cairo_error("fill rect"));
    }

    context.fill_preserve().map_err(cairo_error("fill rect"))?;
    set_color(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context.stroke().map_err(cairo_error("stroke rect border"))
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    set_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context.stroke().map_err(cairo_error("stroke line"))
}

/// Lays `text` out with Pango, anchors it per its alignment and rotates it
/// counter-clockwise around the anchor.
fn show_text(context: &Context, font_family: &str, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let mut font = FontDescription::from_string(font_family);
    font.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let (width, height) = (f64::from(width), f64::from(height));
    let offset_x = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -width / 2.0,
        TextHAlign::Right => -width,
    };
    let offset_y = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -height / 2.0,
        TextVAlign::Bottom => -height,
    };

    context.save().map_err(cairo_error("save state"))?;
    context.translate(text.x, text.y);
    context.rotate(-FRAC_PI_2 * f64::from(text.rotation_quarter_turns));
    set_color(context, text.color);
    context.move_to(offset_x, offset_y);
    pangocairo::functions::show_layout(context, &layout);
    context.restore().map_err(cairo_error("restore state"))
}

fn set_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn cairo_error(action: &'static str) -> impl Fn(cairo::Error) -> ChartError {
    move |err| ChartError::Render(format!("cairo failed to {action}: {err}"))
}
