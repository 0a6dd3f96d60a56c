use chartview::ChartError;
use chartview::api::{build_highlight_frame, select_highlighted_entries};
use chartview::core::{CandleDataSet, CandleEntry, DisplayDensity, Viewport};
use chartview::marker::{
    LabelBoxView, LayoutId, Marker, MarkerView, TemplateRegistry, ValueMarker, View,
};
use chartview::render::{Canvas, Color, NullRenderer, RecordingCanvas, Renderer};

const PRICE_MARKER: LayoutId = LayoutId(1);

#[derive(Debug)]
struct InflatedMarker {
    view: MarkerView,
    refreshed: Vec<(usize, usize)>,
}

impl Marker for InflatedMarker {
    fn view(&self) -> &dyn View {
        &self.view
    }

    fn refresh_content(&mut self, entry: &dyn chartview::core::ChartEntry, data_set_index: usize) {
        self.refreshed.push((entry.x_index(), data_set_index));
    }

    fn x_offset(&self) -> i32 {
        -(self.view.width() as i32) / 2
    }

    fn y_offset(&self) -> i32 {
        -(self.view.height() as i32)
    }
}

fn registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    registry.register(PRICE_MARKER, || {
        let mut view = LabelBoxView::new(DisplayDensity::default())
            .with_colors(Color::BLACK, Color::rgb(255, 255, 224));
        view.set_lines(["price"]);
        view
    });
    registry
}

fn candles() -> CandleDataSet {
    CandleDataSet::new(
        vec![
            CandleEntry::new(0, 10.0, 11.0, 9.5, 10.5).expect("c0"),
            CandleEntry::new(1, 10.5, 12.0, 10.0, 11.5).expect("c1"),
            CandleEntry::new(2, 11.5, 11.8, 10.2, 10.4).expect("c2"),
        ],
        "ohlc",
    )
}

#[test]
fn inflated_marker_draws_centered_above_point() {
    let view = MarkerView::inflate(&registry(), PRICE_MARKER).expect("inflate");
    let (width, height) = (view.width(), view.height());
    let marker = InflatedMarker {
        view,
        refreshed: Vec::new(),
    };

    let mut canvas = RecordingCanvas::new(Viewport::new(800, 600));
    marker.draw(&mut canvas, 400.0, 300.0).expect("draw");

    let frame = canvas.frame();
    let background = frame.rects[0];
    assert_eq!(background.x, 400.0 - f64::from(width as i32 / 2));
    assert_eq!(background.y, 300.0 - f64::from(height as i32));
    assert_eq!(canvas.translation(), (0.0, 0.0));
    assert_eq!(canvas.translate_count(), 2);
}

#[test]
fn unknown_template_surfaces_as_error() {
    let err = MarkerView::inflate(&registry(), LayoutId(404)).expect_err("missing layout");
    assert!(matches!(err, ChartError::UnknownLayout(404)));
}

#[test]
fn selection_flow_refreshes_then_draws_marker_and_highlight() {
    let set = candles();
    let sets = [set];
    let selected = select_highlighted_entries(&sets, 1);
    assert_eq!(selected.len(), 1);

    let mut marker = ValueMarker::new(DisplayDensity::default()).with_series_names(["ohlc"]);
    let (data_set_index, entry) = selected[0];
    marker.refresh_content(entry, data_set_index);

    let viewport = Viewport::new(640, 480);
    let mut frame = build_highlight_frame(&sets[0], 320.0, 200.0, viewport).expect("highlight");
    let mut canvas = RecordingCanvas::new(viewport);
    marker.draw(&mut canvas, 320.0, 200.0).expect("marker");
    frame.merge(canvas.into_frame());

    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.lines[0].color, Color::rgb(255, 187, 115));
    assert_eq!(frame.texts.len(), 4);
    assert_eq!(frame.texts[0].text, "ohlc: O 10.50");

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_rect_count, 1);
}

#[test]
fn sibling_draws_are_unaffected_by_marker_translation() {
    let marker = ValueMarker::new(DisplayDensity::default());
    let mut canvas = RecordingCanvas::new(Viewport::new(100, 100));

    marker.draw(&mut canvas, 50.0, 50.0).expect("marker");
    canvas
        .draw_rect(chartview::render::RectPrimitive::new(1.0, 2.0, 3.0, 4.0, Color::BLACK))
        .expect("sibling");

    let sibling = canvas.frame().rects.last().copied().expect("sibling rect");
    assert_eq!((sibling.x, sibling.y), (1.0, 2.0));
}

#[test]
fn nan_position_is_an_error_and_leaves_canvas_untouched() {
    let marker = ValueMarker::new(DisplayDensity::default());
    let mut canvas = RecordingCanvas::new(Viewport::new(100, 100));

    let err = marker
        .draw(&mut canvas, f64::NAN, 10.0)
        .expect_err("nan position");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(canvas.translation(), (0.0, 0.0));

    marker.draw(&mut canvas, 20.0, 30.0).expect("later draw");
    assert_eq!(canvas.translation(), (0.0, 0.0));
}

#[test]
fn fractional_positions_restore_the_exact_origin() {
    let marker = ValueMarker::new(DisplayDensity::default());
    let mut canvas = RecordingCanvas::new(Viewport::new(400, 400));
    canvas.translate(0.1, 0.7);

    marker.draw(&mut canvas, 0.2, 123.456).expect("marker");

    assert_eq!(canvas.translation(), (0.1, 0.7));
}
