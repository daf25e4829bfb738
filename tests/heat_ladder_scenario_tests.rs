use approx::assert_relative_eq;
use heat_ladder::api::{ChartEngine, ChartEngineConfig, ChartOptions};
use heat_ladder::core::{ColorRange, HeatLadderData};
use heat_ladder::extensions::{HeatLadderPlugin, heat_fill_color};
use heat_ladder::render::{LayerKind, NullRenderer, RectPrimitive};

fn scenario_data() -> HeatLadderData {
    HeatLadderData::from_vecs(
        vec![0.0, 1.0, 2.0],
        vec![vec![10.0, 20.0], vec![30.0], vec![40.0, 50.0, 60.0]],
        vec![vec![10.0, 20.0], vec![128.0], vec![40.0, 256.0, 60.0]],
        ColorRange::new(10.0, 256.0).expect("valid color range"),
    )
}

fn engine() -> ChartEngine<NullRenderer> {
    let options = ChartOptions::heat_ladder(1440, 600, "scenario");
    let config = ChartEngineConfig::heat_ladder(options);
    ChartEngine::new(NullRenderer::default(), config, scenario_data()).expect("engine init")
}

fn ladder_rects(engine: &ChartEngine<NullRenderer>) -> Vec<RectPrimitive> {
    let frame = engine.renderer().last_frame().expect("full pass rendered");
    frame
        .layer(LayerKind::Main)
        .expect("main layer")
        .rects
        .clone()
}

#[test]
fn construction_renders_one_cell_per_rung() {
    let engine = engine();
    assert_eq!(engine.renderer().full_passes, 1);

    let rects = ladder_rects(&engine);
    assert_eq!(rects.len(), 6);

    let bbox = engine.render_context().bbox();
    let column_x = |index: usize| bbox.left + bbox.width * index as f64 / 2.0;
    let cells_in = |index: usize| {
        rects
            .iter()
            .filter(|rect| (rect.center_x() - column_x(index)).abs() < 1e-6)
            .count()
    };
    assert_eq!(cells_in(0), 2);
    assert_eq!(cells_in(1), 1);
    assert_eq!(cells_in(2), 3);
}

#[test]
fn y_scale_spans_visible_rungs() {
    let engine = engine();
    assert_eq!(engine.y_scale().range, Some((10.0, 60.0)));
    assert_eq!(engine.x_scale().range, Some((0.0, 2.0)));
}

#[test]
fn cells_are_colored_by_weight() {
    let engine = engine();
    let rects = ladder_rects(&engine);
    let color_range = engine.data().color_range;
    let top_of_column_two = engine
        .render_context()
        .y_pixel_of(50.0)
        .expect("rung in range");

    let cell = rects
        .iter()
        .find(|rect| (rect.y - top_of_column_two).abs() < 1e-6)
        .expect("cell for rung 50");
    assert_eq!(cell.fill, heat_fill_color(256.0, color_range));
    assert_eq!(cell.fill.blue8(), 255);
    assert_relative_eq!(cell.fill.alpha, 0.5);
}

#[test]
fn hovering_last_index_centers_band_on_its_column() {
    let mut engine = engine();
    let bbox = engine.render_context().bbox();

    engine.pointer_enter().expect("enter");
    let index = engine
        .pointer_move(bbox.width - 10.0, 40.0)
        .expect("pointer move");
    assert_eq!(index, Some(2));

    let overlay = engine.renderer().last_overlay().expect("overlay repainted");
    let band = overlay.layer(LayerKind::Under).expect("under layer").rects[0];

    let cells = HeatLadderPlugin::new().layout(engine.render_context());
    let column = cells
        .iter()
        .find(|cell| cell.index == 2)
        .expect("column 2 cells");
    assert_relative_eq!(band.center_x(), column.rect.center_x(), epsilon = 1e-9);
    assert_relative_eq!(band.width, bbox.width / 2.0, epsilon = 1e-9);
    assert_relative_eq!(band.height, bbox.height);
}

#[test]
fn missing_ladder_entry_draws_nothing_for_that_column() {
    let mut data = scenario_data();
    data.ladders[1] = None;
    data.weights[1] = None;

    let config = ChartEngineConfig::heat_ladder(ChartOptions::heat_ladder(600, 300, "gaps"));
    let engine = ChartEngine::new(NullRenderer::default(), config, data).expect("engine init");
    assert_eq!(ladder_rects(&engine).len(), 5);
    assert_eq!(engine.y_scale().range, Some((10.0, 60.0)));
}

#[test]
fn all_missing_ladders_give_a_degenerate_axis() {
    let data = HeatLadderData::new(
        vec![0.0, 1.0],
        vec![None, None],
        vec![None, None],
        ColorRange::new(0.0, 1.0).expect("valid color range"),
    );
    let config = ChartEngineConfig::heat_ladder(ChartOptions::heat_ladder(600, 300, "empty"));
    let engine = ChartEngine::new(NullRenderer::default(), config, data).expect("engine init");

    assert!(engine.y_scale().is_degenerate());
    assert!(ladder_rects(&engine).is_empty());
}
