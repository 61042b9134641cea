mod frame;
mod null_renderer;
mod overlay;
mod primitives;

pub use frame::{DEFAULT_FONT_FAMILY, RenderFrame};
pub use null_renderer::NullRenderer;
pub use overlay::{
    OVERLAY_ALPHA, OVERLAY_INSET_X, OVERLAY_INSET_Y, apply_overlay, build_overlay,
};
pub use primitives::{
    Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::ChartResult;

/// Paints a prepared [`RenderFrame`]. Layout never happens here.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
