use approx::assert_relative_eq;
use sheet_bars::ChartError;
use sheet_bars::api::{BarChartLayout, StyleConfig, build_bar_chart_frame};
use sheet_bars::core::brand::{AMD_RED, NVIDIA_GREEN};
use sheet_bars::core::{CellValue, Column, TabularDataset, Viewport};
use sheet_bars::render::{Color, NullRenderer, Renderer, TextHAlign};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_owned())
}

fn benchmark_dataset() -> TabularDataset {
    TabularDataset::new(
        "Sheet1",
        vec![
            Column::new("Benchmark (Score)", vec![text("RTX 3060"), text("RX 6600")]),
            Column::new("Score", vec![CellValue::Number(100.0), CellValue::Number(90.0)]),
        ],
    )
    .expect("rectangular dataset")
}

#[test]
fn frame_contains_one_bar_per_numeric_cell() {
    let scene = build_bar_chart_frame(&benchmark_dataset(), &StyleConfig::default())
        .expect("frame should build");

    assert_eq!(scene.bar_count, 2);
    assert_eq!(scene.legend_entries, vec!["Score".to_owned()]);
    assert_eq!(scene.header.title, "Benchmark");
    assert_eq!(scene.header.axis_label, "Score");
    assert_eq!(scene.frame.viewport, Viewport::new(2560, 1440));

    let mut renderer = NullRenderer::default();
    renderer.render(&scene.frame).expect("frame should validate");
    // Two bars plus one legend swatch.
    assert_eq!(renderer.last_rect_count, 3);
    assert_eq!(renderer.last_line_count, 0);
}

#[test]
fn bars_take_brand_colors_and_black_borders() {
    let scene = build_bar_chart_frame(&benchmark_dataset(), &StyleConfig::default())
        .expect("frame should build");
    let bars = &scene.frame.rects[..scene.bar_count];

    let green = Color::from_css(NVIDIA_GREEN).expect("green");
    let red = Color::from_css(AMD_RED).expect("red");
    assert_eq!(bars[0].fill_color, green);
    assert_eq!(bars[1].fill_color, red);
    for bar in bars {
        assert_relative_eq!(bar.border_width, 3.0);
        assert_eq!(bar.border_color, Color::BLACK);
    }

    let mapping = scene.colors.expect("brand mapping");
    assert_eq!(mapping.color_for("RX 6600"), Some(AMD_RED));
}

#[test]
fn non_brand_categories_render_yellow() {
    let dataset = TabularDataset::new(
        "Fruit",
        vec![
            Column::new("Fruit (kg)", vec![text("Apple"), text("Banana")]),
            Column::new("Mass", vec![CellValue::Number(3.0), CellValue::Number(5.0)]),
        ],
    )
    .expect("dataset");
    let scene = build_bar_chart_frame(&dataset, &StyleConfig::default()).expect("frame");

    assert!(scene.colors.is_none());
    let yellow = Color::from_css("yellow").expect("yellow");
    assert!(
        scene.frame.rects[..scene.bar_count]
            .iter()
            .all(|bar| bar.fill_color == yellow)
    );
}

#[test]
fn bar_heights_are_proportional_to_values() {
    let scene = build_bar_chart_frame(&benchmark_dataset(), &StyleConfig::default())
        .expect("frame should build");
    let bars = &scene.frame.rects[..scene.bar_count];

    assert_relative_eq!(bars[0].bottom(), bars[1].bottom(), epsilon = 1e-9);
    assert_relative_eq!(bars[1].height / bars[0].height, 0.9, epsilon = 1e-9);
    assert!(bars[0].right() <= bars[1].x);
}

#[test]
fn title_is_uppercased_and_placed_at_title_anchor() {
    let scene = build_bar_chart_frame(&benchmark_dataset(), &StyleConfig::default())
        .expect("frame should build");
    let title = scene
        .frame
        .texts
        .iter()
        .find(|text| text.text == "BENCHMARK")
        .expect("title text");

    assert_relative_eq!(title.x, 256.0);
    assert_relative_eq!(title.y, 144.0);
    assert_relative_eq!(title.font_size_px, 60.0);
    assert_eq!(title.h_align, TextHAlign::Left);
}

#[test]
fn axis_label_is_rotated_and_value_labels_use_plain_numbers() {
    let scene = build_bar_chart_frame(&benchmark_dataset(), &StyleConfig::default())
        .expect("frame should build");
    let axis = scene
        .frame
        .texts
        .iter()
        .find(|text| text.text == "Score" && text.rotation_quarter_turns == 1)
        .expect("rotated axis label");
    assert_relative_eq!(axis.font_size_px, 60.0);
    assert_relative_eq!(axis.x, scene.layout.value_axis.left);

    let values: Vec<&str> = scene
        .frame
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .collect();
    assert!(values.contains(&"100"));
    assert!(values.contains(&"90"));
    assert!(values.contains(&"RTX 3060"));
}

#[test]
fn zero_line_follows_style_flag() {
    let without = build_bar_chart_frame(&benchmark_dataset(), &StyleConfig::default())
        .expect("frame");
    assert!(without.frame.lines.is_empty());

    let style = StyleConfig::default().with_zero_line_on_y(true);
    let with = build_bar_chart_frame(&benchmark_dataset(), &style).expect("frame");
    assert_eq!(with.frame.lines.len(), 1);
    let line = with.frame.lines[0];
    assert_eq!(line.color, Color::WHITE);
    assert_relative_eq!(line.stroke_width, 2.0);
    assert_relative_eq!(line.y1, line.y2);
    let bars = &with.frame.rects[..with.bar_count];
    assert_relative_eq!(line.y1, bars[0].bottom(), epsilon = 1e-9);
}

#[test]
fn negative_values_hang_below_zero() {
    let dataset = TabularDataset::new(
        "Delta",
        vec![
            Column::new("Delta (%)", vec![text("RTX 4060"), text("RX 7600")]),
            Column::new("Change", vec![CellValue::Number(12.0), CellValue::Number(-4.0)]),
        ],
    )
    .expect("dataset");
    let scene = build_bar_chart_frame(&dataset, &StyleConfig::default()).expect("frame");
    let bars = &scene.frame.rects[..scene.bar_count];

    assert_relative_eq!(bars[0].bottom(), bars[1].y, epsilon = 1e-9);
}

#[test]
fn every_metric_column_gets_a_series_and_legend_entry() {
    let dataset = TabularDataset::new(
        "Games",
        vec![
            Column::new("Games (FPS)", vec![text("RTX 4070"), text("RX 7800")]),
            Column::new("1080p", vec![CellValue::Number(140.0), CellValue::Number(150.0)]),
            Column::new("1440p", vec![CellValue::Number(110.0), CellValue::Empty]),
        ],
    )
    .expect("dataset");
    let scene = build_bar_chart_frame(&dataset, &StyleConfig::default()).expect("frame");

    assert_eq!(scene.bar_count, 3);
    assert_eq!(scene.legend_entries, vec!["1080p".to_owned(), "1440p".to_owned()]);
    assert_eq!(scene.frame.rects.len(), 5);
}

#[test]
fn malformed_header_is_reported() {
    let dataset = TabularDataset::new(
        "Bad",
        vec![
            Column::new("NoParens", vec![text("RTX 3060")]),
            Column::new("Score", vec![CellValue::Number(1.0)]),
        ],
    )
    .expect("dataset");
    assert!(matches!(
        build_bar_chart_frame(&dataset, &StyleConfig::default()),
        Err(ChartError::HeaderFormat { .. })
    ));
}

#[test]
fn style_too_small_for_margins_is_rejected() {
    let style = StyleConfig::default().with_size(500, 150);
    assert!(matches!(
        build_bar_chart_frame(&benchmark_dataset(), &style),
        Err(ChartError::InvalidViewport { .. })
    ));
    assert!(BarChartLayout::new(Viewport::new(601, 201)).is_ok());
}
