use criterion::{Criterion, criterion_group, criterion_main};
use heat_ladder::api::{ChartEngine, ChartEngineConfig, ChartOptions};
use heat_ladder::core::{
    Axis, BoundingBox, ColorRange, Distribution, HeatLadderData, IndexWindow, ResolvedScale,
    pixel_to_value, resolve_ladder_range, value_to_pixel,
};
use heat_ladder::render::NullRenderer;
use std::hint::black_box;

fn generated_data(len: usize, rungs: usize) -> HeatLadderData {
    let series: Vec<f64> = (0..len).map(|i| 1_546_300_800.0 + i as f64 * 60.0).collect();
    let ladders: Vec<Vec<f64>> = (0..len)
        .map(|i| {
            (0..rungs)
                .map(|j| 10.0 + ((i * 7 + j * 13) % 300) as f64)
                .collect()
        })
        .collect();
    let weights: Vec<Vec<f64>> = (0..len)
        .map(|i| (0..rungs).map(|j| ((i + j * 31) % 256) as f64).collect())
        .collect();
    HeatLadderData::from_vecs(
        series,
        ladders,
        weights,
        ColorRange::new(10.0, 256.0).expect("valid color range"),
    )
}

fn bench_transform_round_trip(c: &mut Criterion) {
    let bbox = BoundingBox::new(56.0, 32.0, 1368.0, 532.0);
    let scale = ResolvedScale::new(Distribution::Linear, Some((0.0, 10_000.0)));

    c.bench_function("transform_round_trip", |b| {
        b.iter(|| {
            let px = value_to_pixel(black_box(4_321.123), Axis::Y, &scale, bbox).expect("to pixel");
            let _ = pixel_to_value(px, Axis::Y, &scale, bbox).expect("from pixel");
        })
    });
}

fn bench_ladder_range_10k(c: &mut Criterion) {
    let data = generated_data(10_000, 6);
    let window = IndexWindow::new(1_000, 8_999, data.len()).expect("valid window");

    c.bench_function("ladder_range_10k", |b| {
        b.iter(|| {
            let _ = resolve_ladder_range(black_box(&data.ladders), black_box(window));
        })
    });
}

fn bench_full_draw_pass_2k(c: &mut Criterion) {
    let config = ChartEngineConfig::heat_ladder(ChartOptions::default());
    let mut engine = ChartEngine::new(NullRenderer::default(), config, generated_data(2_000, 6))
        .expect("engine init");

    c.bench_function("full_draw_pass_2k", |b| {
        b.iter(|| {
            engine.render().expect("render");
        })
    });
}

fn bench_pointer_sweep(c: &mut Criterion) {
    let config = ChartEngineConfig::heat_ladder(ChartOptions::default());
    let mut engine = ChartEngine::new(NullRenderer::default(), config, generated_data(500, 6))
        .expect("engine init");
    engine.pointer_enter().expect("enter");

    c.bench_function("pointer_sweep_500", |b| {
        b.iter(|| {
            for x in (0..1_300).step_by(5) {
                let _ = engine.pointer_move(black_box(x as f64), 100.0).expect("move");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_transform_round_trip,
    bench_ladder_range_10k,
    bench_full_draw_pass_2k,
    bench_pointer_sweep
);
criterion_main!(benches);
