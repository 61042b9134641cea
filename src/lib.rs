//! sheet-bars: turns every sheet of a workbook into a branded bar-chart PNG.
//!
//! Each sheet's first column names the chart (`"<Title> (<AxisLabel>)"`) and
//! lists the categories; every further column becomes one bar series. Charts
//! are rasterized with Cairo/Pango and finished with a translucent overlay.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod workbook;

pub use api::{ChartPipeline, ChartSink, StyleConfig, StyleConfigText, build_bar_chart_frame};
#[cfg(feature = "cairo-backend")]
pub use api::{PngChartSink, render_chart};
pub use error::{ChartError, ChartResult};
pub use render::apply_overlay;
pub use telemetry::{PipelineLogger, RecordingLogger, TracingLogger};
pub use workbook::load_workbook;
