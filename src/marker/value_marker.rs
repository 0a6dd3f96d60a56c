use crate::core::{ChartEntry, DisplayDensity, EntryKind};
use crate::marker::{LabelBoxView, Marker, MarkerView, View};

/// Ready-made marker that prints the selected value in a box centered above
/// the data point.
#[derive(Debug)]
pub struct ValueMarker {
    view: MarkerView<LabelBoxView>,
    precision: usize,
    series_names: Vec<String>,
}

impl ValueMarker {
    #[must_use]
    pub fn new(density: DisplayDensity) -> Self {
        Self::with_content(LabelBoxView::new(density))
    }

    #[must_use]
    pub fn with_content(content: LabelBoxView) -> Self {
        Self {
            view: MarkerView::from_view(content),
            precision: 2,
            series_names: Vec::new(),
        }
    }

    /// Number of decimals shown for values.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Names prefixed to the first line, looked up by data set index.
    #[must_use]
    pub fn with_series_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn marker_view(&self) -> &MarkerView<LabelBoxView> {
        &self.view
    }

    fn format_lines(&self, entry: &dyn ChartEntry, data_set_index: usize) -> Vec<String> {
        let p = self.precision;
        let mut lines = match entry.kind() {
            EntryKind::Point(point) => vec![format!("{:.p$}", point.value())],
            EntryKind::Bar(bar) => match bar.stack() {
                Some(stack) => {
                    let parts: Vec<String> = stack.iter().map(|v| format!("{v:.p$}")).collect();
                    vec![format!("{:.p$}", bar.value()), parts.join(" / ")]
                }
                None => vec![format!("{:.p$}", bar.value())],
            },
            EntryKind::Candle(candle) => vec![
                format!("O {:.p$}", candle.open),
                format!("H {:.p$}", candle.high),
                format!("L {:.p$}", candle.low),
                format!("C {:.p$}", candle.close),
            ],
        };
        if let Some(name) = self.series_names.get(data_set_index) {
            lines[0] = format!("{name}: {}", lines[0]);
        }
        lines
    }
}

impl Marker for ValueMarker {
    fn view(&self) -> &dyn View {
        &self.view
    }

    fn refresh_content(&mut self, entry: &dyn ChartEntry, data_set_index: usize) {
        let lines = self.format_lines(entry, data_set_index);
        self.view.content_mut().set_lines(lines);
        self.view.remeasure();
    }

    fn x_offset(&self) -> i32 {
        -(self.view.width() / 2.0).round() as i32
    }

    fn y_offset(&self) -> i32 {
        -self.view.height().round() as i32
    }
}
