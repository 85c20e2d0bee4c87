use chromat_rs::ChromatEngine;
use chromat_rs::core::{ChromatogramRecord, PlotData, ViewWindow};
use chromat_rs::render::{NullRenderer, Renderer};

fn ten_base_record() -> ChromatogramRecord {
    ChromatogramRecord {
        name: "FZ01_A12".to_owned(),
        id: "FZ01_A12".to_owned(),
        description: "forward read".to_owned(),
        bases: b"ACGTACGTAC".to_vec(),
        channels: *b"ACGT",
        traces: std::array::from_fn(|slot| {
            (0..100).map(|k| ((k + slot) % 9) as f64).collect()
        }),
        peak_positions: (0..10).map(|i| 5.0 + 10.0 * i as f64).collect(),
        trace_x: None,
    }
}

#[test]
fn engine_starts_with_the_placeholder_plot() {
    let engine = ChromatEngine::new();
    let plot = engine.plot().expect("plot");
    assert!(plot.is_empty());
    assert_eq!(plot.bounds().x_min, -2.0);
    assert_eq!(plot.bounds().x_max, 102.0);
}

#[test]
fn loading_a_record_produces_a_frame() {
    let mut engine = ChromatEngine::new();
    engine.load_record(ten_base_record()).expect("load");

    let PlotData::Frame(frame) = engine.plot().expect("plot") else {
        panic!("expected a frame");
    };
    assert_eq!(frame.curves.len(), 4);
    assert_eq!(frame.labels.len(), 10);

    engine.clear_record();
    assert!(engine.plot().expect("plot").is_empty());
}

#[test]
fn clicking_toggles_the_highlight() {
    let mut engine = ChromatEngine::new();
    engine.load_record(ten_base_record()).expect("load");

    let first = engine.click(24.0).expect("click").expect("highlight");
    assert_eq!(first.index, 2);
    assert_eq!(first.peak, 25.0);

    // Same base again clears the highlight.
    assert!(engine.click(24.0).expect("click").is_none());

    // A different base replaces rather than toggles.
    let second = engine.click(24.0).expect("click").expect("highlight");
    assert_eq!(second.index, 2);
    let third = engine.click(36.0).expect("click").expect("highlight");
    assert_eq!(third.index, 3);
}

#[test]
fn out_of_view_clicks_leave_the_state_untouched() {
    let mut engine = ChromatEngine::new();
    engine.load_record(ten_base_record()).expect("load");
    engine
        .set_window(ViewWindow::base_range(0, 3).expect("window"))
        .expect("set window");

    let region = engine.click(14.0).expect("click").expect("highlight");
    assert_eq!(region.index, 1);

    // Peak 95 is far outside the three-base view.
    let unchanged = engine.click(90.0).expect("click").expect("still highlighted");
    assert_eq!(unchanged.index, 1);
}

#[test]
fn window_changes_clear_the_highlight() {
    let mut engine = ChromatEngine::new();
    engine.load_record(ten_base_record()).expect("load");

    engine.click(24.0).expect("click").expect("highlight");
    engine
        .set_window(ViewWindow::x_range(10.0, 60.0).expect("window"))
        .expect("set window");
    assert!(engine.highlight().is_none());

    engine.click(24.0).expect("click").expect("highlight");
    engine.reset_window();
    assert!(engine.highlight().is_none());
}

#[test]
fn reverse_complement_swaps_the_record_and_resets_the_view() {
    let mut engine = ChromatEngine::new();
    engine.load_record(ten_base_record()).expect("load");
    engine
        .set_window(ViewWindow::base_range(2, 5).expect("window"))
        .expect("set window");
    engine.click(30.0).expect("click");

    engine.reverse_complement().expect("revcomp");
    assert!(engine.window().is_none());
    assert!(engine.highlight().is_none());
    assert_eq!(engine.record().expect("record").bases, b"GTACGTACGT".to_vec());

    engine.reverse_complement().expect("back");
    assert_eq!(engine.record().expect("record").bases, b"ACGTACGTAC".to_vec());
}

#[test]
fn reverse_complement_requires_a_record() {
    let mut engine = ChromatEngine::new();
    assert!(engine.reverse_complement().is_err());
}

#[test]
fn clicks_without_a_record_are_no_ops() {
    let mut engine = ChromatEngine::new();
    assert!(engine.click(10.0).expect("click").is_none());
}

#[test]
fn render_frame_carries_the_highlight_rectangle() {
    let mut engine = ChromatEngine::new();
    engine.load_record(ten_base_record()).expect("load");
    engine.click(24.0).expect("click").expect("highlight");

    let frame = engine.render_frame().expect("frame");
    assert_eq!(frame.strokes.len(), 4);
    assert_eq!(frame.texts.len(), 10);

    let rect = frame.highlight.expect("rect");
    assert_eq!(rect.x_min, 20.0);
    assert_eq!(rect.x_max, 30.0);
    assert_eq!(rect.y_min, frame.bounds.y_min);
    assert_eq!(rect.y_max, frame.bounds.y_max);
    assert_eq!(rect.fill.alpha, 0.3);
}

#[test]
fn null_renderer_accepts_engine_frames() {
    let mut engine = ChromatEngine::new();
    engine.load_record(ten_base_record()).expect("load");

    let mut renderer = NullRenderer::default();
    let frame = engine.render_frame().expect("frame");
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.last_stroke_count, 4);
    assert_eq!(renderer.last_text_count, 10);
    assert_eq!(renderer.frames_rendered, 1);

    engine.clear_record();
    let placeholder = engine.render_frame().expect("frame");
    assert!(placeholder.is_empty());
    renderer.render(&placeholder).expect("render");
    assert_eq!(renderer.frames_rendered, 2);
}
