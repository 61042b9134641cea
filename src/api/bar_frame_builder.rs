use tracing::{debug, trace};

use crate::core::brand::DEFAULT_BAR_COLOR;
use crate::core::{ChartHeader, ColorMapping, LinearScale, TabularDataset, parse_header};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::bar_chart_layout::{
    BAR_BORDER_WIDTH_PX, BarChartLayout, CATEGORY_LABEL_PADDING_PX,
    CHART_FONT_FAMILY, LEGEND_ITEM_SPACING_PX, LEGEND_SWATCH_GAP_PX, LEGEND_SWATCH_RATIO,
    VALUE_LABEL_PADDING_PX, ZERO_LINE_WIDTH_PX, estimate_text_width,
};
use super::StyleConfig;

/// Everything needed to rasterize one dataset, plus the facts the caller
/// needs afterwards (the title names the output file).
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartScene {
    pub header: ChartHeader,
    pub layout: BarChartLayout,
    pub frame: RenderFrame,
    /// Number of bar rects at the start of `frame.rects`; legend swatches follow.
    pub bar_count: usize,
    pub legend_entries: Vec<String>,
    /// `None` when the categories carry no brand names.
    pub colors: Option<ColorMapping>,
}

/// Builds the backend-agnostic frame for one dataset.
///
/// Fails with a header error when the first column name lacks `(`/`)`, and
/// with a viewport error when the style leaves no room inside the margins.
pub fn build_bar_chart_frame(
    dataset: &TabularDataset,
    style: &StyleConfig,
) -> ChartResult<BarChartScene> {
    let style = style.validate()?;
    let header = parse_header(dataset.header())?;
    let layout = BarChartLayout::new(style.viewport())?;

    let labels = dataset
        .category_column()
        .map(|column| column.labels())
        .unwrap_or_default();
    let colors = ColorMapping::from_labels(&labels);
    let default_color = Color::from_css(DEFAULT_BAR_COLOR)?;
    let bar_colors = labels
        .iter()
        .map(|label| {
            colors
                .as_ref()
                .and_then(|mapping| mapping.color_for(label))
                .map_or(Ok(default_color), Color::from_css)
        })
        .collect::<ChartResult<Vec<_>>>()?;

    let metrics = dataset.metric_columns();
    let scale = LinearScale::autorange_with_zero(
        metrics
            .iter()
            .flat_map(|column| column.values.iter().filter_map(|cell| cell.as_number())),
        layout.value_axis.bottom,
        layout.value_axis.top,
    )?;
    let zero_y = scale.domain_to_pixel(0.0)?;

    let value_font = f64::from(style.value_font_size);
    let mut frame = RenderFrame::new(layout.viewport)
        .with_background(Color::TRANSPARENT)
        .with_font_family(CHART_FONT_FAMILY);

    for (series_index, metric) in metrics.iter().enumerate() {
        for (category_index, cell) in metric.values.iter().enumerate() {
            let Some(value) = cell.as_number() else {
                trace!(metric = %metric.name, category_index, "skipping non-numeric cell");
                continue;
            };
            let (bar_left, bar_width) =
                layout.bar_slot(category_index, labels.len(), series_index, metrics.len());
            let value_y = scale.domain_to_pixel(value)?;
            let top = value_y.min(zero_y);
            let height = (value_y - zero_y).abs();

            frame.rects.push(
                RectPrimitive::new(bar_left, top, bar_width, height, bar_colors[category_index])
                    .with_border(BAR_BORDER_WIDTH_PX, Color::BLACK),
            );

            let center_x = bar_left + bar_width / 2.0;
            let label = if value >= 0.0 {
                TextPrimitive::new(
                    cell.to_string(),
                    center_x,
                    top - VALUE_LABEL_PADDING_PX,
                    value_font,
                    Color::WHITE,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Bottom)
            } else {
                TextPrimitive::new(
                    cell.to_string(),
                    center_x,
                    top + height + VALUE_LABEL_PADDING_PX,
                    value_font,
                    Color::WHITE,
                    TextHAlign::Center,
                )
            };
            frame.texts.push(label);
        }
    }
    let bar_count = frame.rects.len();

    for (category_index, label) in labels.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let (band_left, band_width) = layout.category_band(category_index, labels.len());
        frame.texts.push(TextPrimitive::new(
            label.clone(),
            band_left + band_width / 2.0,
            layout.value_axis.bottom + CATEGORY_LABEL_PADDING_PX,
            value_font,
            Color::WHITE,
            TextHAlign::Center,
        ));
    }

    if style.zero_line_on_y {
        frame.lines.push(LinePrimitive::new(
            layout.value_axis.left,
            zero_y,
            layout.value_axis.right,
            zero_y,
            ZERO_LINE_WIDTH_PX,
            Color::WHITE,
        ));
    }

    let title = header.title.to_uppercase();
    if !title.is_empty() {
        frame.texts.push(TextPrimitive::new(
            title,
            layout.title_x,
            layout.title_y,
            f64::from(style.title_font_size),
            Color::WHITE,
            TextHAlign::Left,
        ));
    }

    if !header.axis_label.trim().is_empty() {
        frame.texts.push(
            TextPrimitive::new(
                header.axis_label.clone(),
                layout.value_axis.left,
                (layout.value_axis.top + layout.value_axis.bottom) / 2.0,
                f64::from(style.axis_font_size),
                Color::WHITE,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Bottom)
            .rotated_quarter_turns(1),
        );
    }

    let swatch_color = bar_colors.first().copied().unwrap_or(default_color);
    let legend_entries = push_legend(&mut frame, &layout, &style, metrics, swatch_color);

    debug!(
        title = %header.title,
        bars = bar_count,
        legend_entries = legend_entries.len(),
        brand_colors = colors.is_some(),
        "built bar chart frame"
    );

    Ok(BarChartScene {
        header,
        layout,
        frame,
        bar_count,
        legend_entries,
        colors,
    })
}

/// Lays the legend out right-to-left so its bottom-right corner sits on the
/// legend anchor, then appends swatches and names in column order.
fn push_legend(
    frame: &mut RenderFrame,
    layout: &BarChartLayout,
    style: &StyleConfig,
    metrics: &[crate::core::Column],
    swatch_color: Color,
) -> Vec<String> {
    let entries: Vec<String> = metrics
        .iter()
        .map(|column| column.name.clone())
        .filter(|name| !name.is_empty())
        .collect();
    if entries.is_empty() {
        return entries;
    }

    let font = f64::from(style.legend_font_size);
    let swatch = font * LEGEND_SWATCH_RATIO;
    let item_widths: Vec<f64> = entries
        .iter()
        .map(|name| swatch + LEGEND_SWATCH_GAP_PX + estimate_text_width(name, font))
        .collect();
    let total_width = item_widths.iter().sum::<f64>()
        + LEGEND_ITEM_SPACING_PX * (entries.len() - 1) as f64;

    let center_y = layout.legend_bottom - font / 2.0;
    let mut x = layout.legend_right - total_width;
    for (name, width) in entries.iter().zip(&item_widths) {
        frame.rects.push(
            RectPrimitive::new(x, center_y - swatch / 2.0, swatch, swatch, swatch_color)
                .with_border(BAR_BORDER_WIDTH_PX, Color::BLACK),
        );
        frame.texts.push(
            TextPrimitive::new(
                name.clone(),
                x + swatch + LEGEND_SWATCH_GAP_PX,
                center_y,
                font,
                Color::WHITE,
                TextHAlign::Left,
            )
            .with_v_align(TextVAlign::Middle),
        );
        x += width + LEGEND_ITEM_SPACING_PX;
    }

    entries
}
