#![cfg(feature = "cairo-backend")]

use heat_ladder::ChartError;
use heat_ladder::api::{ChartEngine, ChartEngineConfig, ChartOptions};
use heat_ladder::core::{ColorRange, HeatLadderData};
use heat_ladder::render::{CairoRenderer, Color};

fn data() -> HeatLadderData {
    HeatLadderData::from_vecs(
        vec![0.0, 60.0, 120.0],
        vec![vec![10.0, 20.0], vec![30.0], vec![5.0, 25.0, 45.0]],
        vec![vec![10.0, 100.0], vec![256.0], vec![20.0, 40.0, 80.0]],
        ColorRange::new(10.0, 256.0).expect("valid color range"),
    )
}

fn engine() -> ChartEngine<CairoRenderer> {
    let renderer = CairoRenderer::new(600, 300).expect("renderer");
    let config = ChartEngineConfig::heat_ladder(ChartOptions::heat_ladder(600, 300, "cairo"));
    ChartEngine::new(renderer, config, data()).expect("engine init")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_rejects_invalid_clear_color() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    assert!(renderer.set_clear_color(Color::rgba(2.0, 0.0, 0.0, 1.0)).is_err());
}

#[test]
fn full_pass_paints_every_ladder_cell() {
    let engine = engine();
    let stats = engine.renderer().last_stats();
    assert_eq!(stats.rects_drawn, 6);
    assert_eq!(stats.lines_drawn, 2);
    assert!(stats.texts_drawn >= 4);
    assert_eq!(stats.overlay_repaints, 0);
}

#[test]
fn hover_repaints_overlay_over_cached_main_layer() {
    let mut engine = engine();
    engine.pointer_enter().expect("enter");
    engine.pointer_move(260.0, 40.0).expect("pointer move");

    let stats = engine.renderer().last_stats();
    assert!(stats.overlay_repaints >= 1);
    // six ladder cells plus the highlight band
    assert_eq!(stats.rects_drawn, 7);
}

#[test]
fn rendered_surface_is_written_as_png() {
    let engine = engine();
    let path = std::env::temp_dir().join(format!("heat-ladder-{}.png", std::process::id()));
    engine.renderer().write_png(&path).expect("write png");

    let bytes = std::fs::read(&path).expect("read png");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    let _ = std::fs::remove_file(&path);
}
