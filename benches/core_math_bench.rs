use criterion::{Criterion, criterion_group, criterion_main};
use linechart_rs::api::{LineChartConfig, LineChartEngine};
use linechart_rs::core::{DataPoint, SeriesSet, VisibleWindow, WindowInput, YScale};
use linechart_rs::render::{NullRenderer, TextMetricsMeasurer};
use std::hint::black_box;

fn generated_points(labels: usize, series: usize) -> Vec<DataPoint> {
    (0..labels)
        .flat_map(|i| {
            (0..series).map(move |s| {
                let value = 100.0 + (i as f64 * 0.37 + s as f64).sin() * 40.0;
                DataPoint::new(format!("s{s}"), format!("t{i}"), value, "#3366ff")
            })
        })
        .collect()
}

fn bench_visible_window_10k(c: &mut Criterion) {
    c.bench_function("visible_window_10k", |b| {
        let mut scroll_left = 0.0;
        b.iter(|| {
            scroll_left = (scroll_left + 37.0) % 590_000.0;
            let _ = VisibleWindow::compute(black_box(WindowInput {
                point_width: 60.0,
                container_width: 1_280.0,
                scroll_left,
                scroll_enabled: true,
                label_count: 10_000,
            }));
        })
    });
}

fn bench_series_set_10k_x4(c: &mut Criterion) {
    let points = generated_points(10_000, 4);

    c.bench_function("series_set_10k_x4", |b| {
        b.iter(|| {
            let set = SeriesSet::from_points(black_box(&points));
            let _ = YScale::from_points(black_box(&points), 200.0, 5, 0.2);
            black_box(set.label_count());
        })
    });
}

fn bench_scrolled_frame_10k_x4(c: &mut Criterion) {
    let config = LineChartConfig::default().with_scroll(true);
    let mut engine = LineChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(generated_points(10_000, 4));
    engine.set_container_width(1_280.0);
    engine.on_scroll(300_000.0);
    engine.on_pointer_move(40.0 + 5_010.0 * 60.0, 100.0);

    let mut measurer = TextMetricsMeasurer::default();
    c.bench_function("scrolled_frame_10k_x4", |b| {
        b.iter(|| {
            let _ = engine
                .render_measured(black_box(&mut measurer))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_visible_window_10k,
    bench_series_set_10k_x4,
    bench_scrolled_frame_10k_x4
);
criterion_main!(benches);
