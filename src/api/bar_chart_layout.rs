use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};

/// Display face first, generic fallback second.
pub const CHART_FONT_FAMILY: &str = "Bebas Neue, sans-serif";
pub const CHART_MARGINS: Margins = Margins::new(100.0, 100.0, 300.0, 300.0);
/// Fraction of the plot area (from the bottom) occupied by the value axis.
pub const VALUE_AXIS_DOMAIN: (f64, f64) = (0.0, 0.75);
/// Title top-left corner in figure fractions, `y` measured from the bottom.
pub const TITLE_ANCHOR: (f64, f64) = (0.1, 0.9);
/// Legend bottom-right corner in plot-area fractions, `y` measured from the bottom.
pub const LEGEND_ANCHOR: (f64, f64) = (0.9, 0.9);
/// Share of each category band left empty around its bar group.
pub const BAR_GAP_RATIO: f64 = 0.2;
pub const BAR_BORDER_WIDTH_PX: f64 = 3.0;
pub const VALUE_LABEL_PADDING_PX: f64 = 6.0;
pub const CATEGORY_LABEL_PADDING_PX: f64 = 8.0;
pub const ZERO_LINE_WIDTH_PX: f64 = 2.0;
pub const LEGEND_ITEM_SPACING_PX: f64 = 40.0;
pub const LEGEND_SWATCH_GAP_PX: f64 = 10.0;
/// Swatch edge length relative to the legend font size.
pub const LEGEND_SWATCH_RATIO: f64 = 0.6;
/// Average glyph advance relative to font size for the condensed display face.
pub const TEXT_WIDTH_EM_RATIO: f64 = 0.5;

/// Axis-aligned pixel region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }
}

/// Pixel geometry of one bar chart, derived from the output size alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarChartLayout {
    pub viewport: Viewport,
    /// Region inside the margins.
    pub paper: PlotArea,
    /// Lower part of `paper` that holds the bars.
    pub value_axis: PlotArea,
    pub title_x: f64,
    pub title_y: f64,
    pub legend_right: f64,
    pub legend_bottom: f64,
}

impl BarChartLayout {
    /// Fails when the margins leave no room for a plot.
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let margins = CHART_MARGINS;
        if width <= margins.left + margins.right || height <= margins.top + margins.bottom {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let paper = PlotArea {
            left: margins.left,
            top: margins.top,
            right: width - margins.right,
            bottom: height - margins.bottom,
        };
        let (domain_low, domain_high) = VALUE_AXIS_DOMAIN;
        let value_axis = PlotArea {
            left: paper.left,
            top: paper.bottom - domain_high * paper.height(),
            right: paper.right,
            bottom: paper.bottom - domain_low * paper.height(),
        };

        Ok(Self {
            viewport,
            paper,
            value_axis,
            title_x: TITLE_ANCHOR.0 * width,
            title_y: (1.0 - TITLE_ANCHOR.1) * height,
            legend_right: paper.left + LEGEND_ANCHOR.0 * paper.width(),
            legend_bottom: paper.bottom - LEGEND_ANCHOR.1 * paper.height(),
        })
    }

    /// Left edge and width of the band holding category `index`.
    #[must_use]
    pub fn category_band(&self, index: usize, count: usize) -> (f64, f64) {
        let band = self.value_axis.width() / count.max(1) as f64;
        (self.value_axis.left + band * index as f64, band)
    }

    /// Left edge and width of one bar inside a category's group.
    #[must_use]
    pub fn bar_slot(
        &self,
        category_index: usize,
        category_count: usize,
        series_index: usize,
        series_count: usize,
    ) -> (f64, f64) {
        let (band_left, band_width) = self.category_band(category_index, category_count);
        let group_width = band_width * (1.0 - BAR_GAP_RATIO);
        let bar_width = group_width / series_count.max(1) as f64;
        let group_left = band_left + band_width * BAR_GAP_RATIO / 2.0;
        (group_left + bar_width * series_index as f64, bar_width)
    }
}

/// Rough rendered width of `text`, good enough to lay out legends.
#[must_use]
pub fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * TEXT_WIDTH_EM_RATIO
}
