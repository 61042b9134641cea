use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::TabularDataset;
use crate::error::{ChartError, ChartResult};
use crate::render::{CairoRenderer, Renderer, apply_overlay};

use super::{ChartSink, StyleConfig, build_bar_chart_frame};

/// Renders one dataset to `<output_dir>/<title>.png` and shades it.
///
/// An existing file with the same title is overwritten.
pub fn render_chart(
    dataset: &TabularDataset,
    output_dir: impl AsRef<Path>,
    style: &StyleConfig,
) -> ChartResult<PathBuf> {
    let output_dir = output_dir.as_ref();
    let scene = build_bar_chart_frame(dataset, style)?;
    if !output_dir.is_dir() {
        return Err(ChartError::Render(format!(
            "output directory `{}` does not exist",
            output_dir.display()
        )));
    }

    let path = chart_output_path(output_dir, &scene.header.title);
    let mut renderer = CairoRenderer::for_frame(&scene.frame)?;
    renderer.render(&scene.frame)?;
    renderer.write_png(&path)?;
    let stats = renderer.last_stats();
    debug!(
        path = %path.display(),
        rects = stats.rects_drawn,
        texts = stats.texts_drawn,
        "wrote chart png"
    );

    apply_overlay(&path, style.height, style.width)
}

/// Output location for a chart title.
#[must_use]
pub fn chart_output_path(output_dir: &Path, title: &str) -> PathBuf {
    output_dir.join(format!("{title}.png"))
}

/// [`ChartSink`] backed by the Cairo rasterizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngChartSink;

impl ChartSink for PngChartSink {
    fn render(
        &mut self,
        dataset: &TabularDataset,
        output_dir: &Path,
        style: &StyleConfig,
    ) -> ChartResult<PathBuf> {
        render_chart(dataset, output_dir, style)
    }
}
