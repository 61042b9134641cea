use criterion::{Criterion, criterion_group, criterion_main};
use sheet_bars::core::{CellValue, Column, LinearScale, TabularDataset, resolve_colors};
use sheet_bars::render::{NullRenderer, Renderer};
use sheet_bars::{StyleConfig, build_bar_chart_frame};
use std::hint::black_box;

const BRANDS: [&str; 4] = ["RTX", "RX", "ARC", "Core"];

fn labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{} {}", BRANDS[i % BRANDS.len()], 1000 + i))
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 1_300.0, 400.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123)).expect("to pixel");
            let _ = scale.pixel_to_domain(px).expect("from pixel");
        })
    });
}

fn bench_resolve_colors_1k(c: &mut Criterion) {
    let labels = labels(1_000);

    c.bench_function("resolve_colors_1k", |b| {
        b.iter(|| {
            let _ = resolve_colors(black_box(&labels));
        })
    });
}

fn bench_bar_frame_200_categories(c: &mut Criterion) {
    let labels = labels(200);
    let metric = |offset: f64| {
        (0..labels.len())
            .map(|i| CellValue::Number(offset + (i as f64 * 0.37).sin() * 50.0))
            .collect::<Vec<_>>()
    };
    let dataset = TabularDataset::new(
        "Bench",
        vec![
            Column::new(
                "Throughput (ops/s)",
                labels.iter().cloned().map(CellValue::Text).collect(),
            ),
            Column::new("Run A", metric(100.0)),
            Column::new("Run B", metric(80.0)),
        ],
    )
    .expect("valid dataset");
    let style = StyleConfig::default();
    let mut renderer = NullRenderer::default();

    c.bench_function("bar_frame_200_categories", |b| {
        b.iter(|| {
            let scene = build_bar_chart_frame(black_box(&dataset), black_box(&style))
                .expect("frame should build");
            renderer.render(&scene.frame).expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_resolve_colors_1k,
    bench_bar_frame_200_categories
);
criterion_main!(benches);
