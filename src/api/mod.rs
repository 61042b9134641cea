//! Chart generation: style, layout, frame building, PNG output and the
//! sheet-by-sheet pipeline.

mod bar_chart_layout;
mod bar_frame_builder;
#[cfg(feature = "cairo-backend")]
mod chart_renderer;
mod pipeline;
mod style_config;

pub use bar_chart_layout::{
    BAR_BORDER_WIDTH_PX, BAR_GAP_RATIO, BarChartLayout, CHART_FONT_FAMILY, CHART_MARGINS,
    LEGEND_ANCHOR, PlotArea, TITLE_ANCHOR, VALUE_AXIS_DOMAIN, estimate_text_width,
};
pub use bar_frame_builder::{BarChartScene, build_bar_chart_frame};
#[cfg(feature = "cairo-backend")]
pub use chart_renderer::{PngChartSink, chart_output_path, render_chart};
pub use pipeline::{ChartPipeline, ChartSink};
pub use style_config::{
    DEFAULT_AXIS_FONT_SIZE, DEFAULT_HEIGHT_PX, DEFAULT_LEGEND_FONT_SIZE, DEFAULT_TITLE_FONT_SIZE,
    DEFAULT_VALUE_FONT_SIZE, DEFAULT_WIDTH_PX, StyleConfig, StyleConfigText, StyleField,
};
