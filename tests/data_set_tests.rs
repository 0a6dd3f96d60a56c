use chartview::core::{
    BarDataSet, BarEntry, CandleDataSet, CandleEntry, ChartEntry, DEFAULT_HIGHLIGHT_COLOR,
    DataSet, HighlightStyle, LineDataSet, ScatterDataSet,
};
use chartview::core::{AxisDependency, Entry};
use chartview::render::Color;
use rust_decimal::Decimal;

fn highlight_defaults<S: HighlightStyle>(set: &S) -> Color {
    set.highlight_color()
}

#[test]
fn every_chart_family_defaults_to_the_same_highlight_color() {
    let bar = BarDataSet::new(vec![BarEntry::new(1.0, 0).expect("bar")], "bar");
    let line = LineDataSet::new(vec![Entry::new(1.0, 0).expect("line")], "line");
    let scatter = ScatterDataSet::new(Vec::new(), "scatter");
    let candle = CandleDataSet::new(
        vec![CandleEntry::new(0, 1.0, 2.0, 0.5, 1.5).expect("candle")],
        "candle",
    );

    assert_eq!(DEFAULT_HIGHLIGHT_COLOR, Color::rgb(255, 187, 115));
    for color in [
        highlight_defaults(&bar),
        highlight_defaults(&line),
        highlight_defaults(&scatter),
        highlight_defaults(&candle),
    ] {
        assert_eq!(color, DEFAULT_HIGHLIGHT_COLOR);
    }
}

#[test]
fn highlight_color_is_only_changed_by_its_setter() {
    let mut set = LineDataSet::new(vec![Entry::new(1.0, 0).expect("entry")], "line");
    set.data_set_mut().add_entry(Entry::new(5.0, 1).expect("entry"));
    set.data_set_mut().set_colors([Color::BLACK]);
    assert_eq!(set.highlight_color(), DEFAULT_HIGHLIGHT_COLOR);

    set.set_highlight_color(Color::argb(0, 1, 2, 3));
    assert_eq!(set.highlight_color(), Color::argb(0, 1, 2, 3));
}

#[test]
fn decimal_prices_feed_candle_sets() {
    let candle = CandleEntry::from_decimal(
        4,
        Decimal::new(10_050, 2),
        Decimal::new(10_200, 2),
        Decimal::new(9_900, 2),
        Decimal::new(10_110, 2),
    )
    .expect("candle");
    let set = CandleDataSet::new(vec![candle], "ohlc");

    assert!((set.y_max() - 101.10).abs() < 1e-9);
    assert!(set.entries()[0].is_bullish());
}

#[test]
fn stacked_bars_contribute_their_sum_to_bounds() {
    let set = DataSet::new(
        vec![
            BarEntry::stacked(vec![1.0, 2.0, 3.0], 0).expect("bar"),
            BarEntry::new(-2.0, 1).expect("bar"),
        ],
        "bars",
    );
    assert_eq!(set.y_max(), 6.0);
    assert_eq!(set.y_min(), -2.0);
    assert_eq!(set.average(), 2.0);
}

#[test]
fn display_attributes_are_plain_state() {
    let mut set = DataSet::new(vec![Entry::new(3.0, 2).expect("entry")], "s");
    assert!(set.is_visible());
    assert!(set.is_draw_values_enabled());
    assert_eq!(set.axis_dependency(), AxisDependency::Left);

    set.set_visible(false);
    set.set_draw_values(false);
    set.set_axis_dependency(AxisDependency::Right);
    set.set_value_text_color(Color::WHITE);
    set.add_color(Color::BLACK);

    assert!(!set.is_visible());
    assert!(!set.is_draw_values_enabled());
    assert_eq!(set.axis_dependency(), AxisDependency::Right);
    assert_eq!(set.value_text_color(), Color::WHITE);
    assert_eq!(set.colors().len(), 2);
    assert_eq!(set.entry_for_x_index(0).map(ChartEntry::x_index), Some(2));
}
