use heat_ladder::api::{ChartEngine, ChartEngineConfig, ChartOptions};
use heat_ladder::core::{ColorRange, Distribution, HeatLadderData};
use heat_ladder::extensions::{HeatLadderPlugin, heat_intensity};
use heat_ladder::render::{LayerKind, NullRenderer};
use proptest::prelude::*;

fn increasing_series(steps: &[f64]) -> Vec<f64> {
    steps
        .iter()
        .scan(1_546_300_800.0, |time, step| {
            *time += step;
            Some(*time)
        })
        .collect()
}

proptest! {
    #[test]
    fn highlight_band_centers_on_ladder_column(
        steps in prop::collection::vec(1.0f64..3_600.0, 2..24),
        ordinal in any::<bool>(),
        ratio_step in 0usize..3,
    ) {
        let pixel_ratio = [1.0, 1.5, 2.0][ratio_step];
        let series = increasing_series(&steps);
        let len = series.len();
        let data = HeatLadderData::from_vecs(
            series,
            (0..len).map(|i| vec![10.0 + i as f64, 40.0]).collect(),
            (0..len).map(|_| vec![1.0, 2.0]).collect(),
            ColorRange::new(0.0, 2.0).expect("valid color range"),
        );
        let distribution = if ordinal { Distribution::Ordinal } else { Distribution::Linear };
        let options = ChartOptions::heat_ladder(900, 400, "alignment")
            .with_pixel_ratio(pixel_ratio)
            .with_x_distribution(distribution);
        let config = ChartEngineConfig::heat_ladder(options);
        let mut engine = ChartEngine::new(NullRenderer::default(), config, data)
            .expect("engine init");
        engine.pointer_enter().expect("enter");

        let bbox = engine.render_context().bbox();
        let cells = HeatLadderPlugin::new().layout(engine.render_context());

        for index in 0..len {
            let column = cells
                .iter()
                .find(|cell| cell.index == index)
                .expect("every column has cells");
            let center = column.rect.center_x();
            let pointer_x = (center - bbox.left) / pixel_ratio;

            let hovered = engine.pointer_move(pointer_x, 10.0).expect("pointer move");
            prop_assert_eq!(hovered, Some(index));

            let overlay = engine.renderer().last_overlay().expect("overlay");
            let band = overlay.layer(LayerKind::Under).expect("under layer").rects[0];
            prop_assert!((band.center_x() - center).abs() < 1e-6);
        }
    }

    #[test]
    fn intensity_is_monotonic_in_weight(
        a in -100.0f64..1_000.0,
        b in -100.0f64..1_000.0,
        max in 1.0f64..500.0,
    ) {
        let range = ColorRange::new(0.0, max).expect("valid color range");
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(heat_intensity(low, range) <= heat_intensity(high, range));
    }
}

#[test]
fn highlight_band_centers_on_ladder_column_in_narrow_window() {
    let series = increasing_series(&[60.0, 45.0, 300.0, 30.0, 90.0, 600.0, 15.0, 120.0]);
    let len = series.len();
    for distribution in [Distribution::Linear, Distribution::Ordinal] {
        for pixel_ratio in [1.0, 2.0] {
            let data = HeatLadderData::from_vecs(
                series.clone(),
                (0..len).map(|i| vec![5.0 * i as f64, 80.0]).collect(),
                (0..len).map(|_| vec![1.0, 2.0]).collect(),
                ColorRange::new(0.0, 2.0).expect("valid color range"),
            );
            let options = ChartOptions::heat_ladder(900, 400, "narrow window")
                .with_pixel_ratio(pixel_ratio)
                .with_x_distribution(distribution);
            let mut engine = ChartEngine::new(
                NullRenderer::default(),
                ChartEngineConfig::heat_ladder(options),
                data,
            )
            .expect("engine init");
            engine.set_visible_window(2, 5).expect("window inside series");
            engine.pointer_enter().expect("enter");

            let bbox = engine.render_context().bbox();
            let cells = HeatLadderPlugin::new().layout(engine.render_context());
            assert!(cells.iter().all(|cell| (2..=5).contains(&cell.index)));

            for index in 2..=5 {
                let center = cells
                    .iter()
                    .find(|cell| cell.index == index)
                    .expect("visible column has cells")
                    .rect
                    .center_x();
                let pointer_x = (center - bbox.left) / pixel_ratio;
                assert_eq!(
                    engine.pointer_move(pointer_x, 10.0).expect("pointer move"),
                    Some(index)
                );

                let overlay = engine.renderer().last_overlay().expect("overlay");
                let band = overlay.layer(LayerKind::Under).expect("under layer").rects[0];
                assert!((band.center_x() - center).abs() < 1e-6);
                assert!((band.width - bbox.width / 3.0).abs() < 1e-6);
            }
        }
    }
}
