use std::ops::Deref;

use crate::core::{BarEntry, CandleEntry, ChartEntry, DataSet, DisplayDensity, Entry};
use crate::render::Color;

/// Default highlight indicator color, `RGB(255, 187, 115)`.
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::rgb(255, 187, 115);

pub const MIN_HIGHLIGHT_LINE_WIDTH_DP: f64 = 0.2;
pub const MAX_HIGHLIGHT_LINE_WIDTH_DP: f64 = 10.0;

/// Highlight styling shared by every point-series chart family.
pub trait HighlightStyle {
    fn highlight_color(&self) -> Color;

    fn set_highlight_color(&mut self, color: Color);

    fn highlight_enabled(&self) -> bool;

    fn set_highlight_enabled(&mut self, enabled: bool);

    /// Stroke width of the highlight indicator in pixels.
    fn highlight_line_width(&self) -> f64;

    /// Sets the stroke width in dp, clamped to `[0.2, 10]` before conversion.
    fn set_highlight_line_width(&mut self, width_dp: f64);
}

/// Base data set of the bar, line, scatter and candle chart families.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLineScatterCandleDataSet<T: ChartEntry> {
    data_set: DataSet<T>,
    highlight_color: Color,
    highlight_enabled: bool,
    highlight_line_width: f64,
}

pub type BarDataSet = BarLineScatterCandleDataSet<BarEntry>;
pub type LineDataSet = BarLineScatterCandleDataSet<Entry>;
pub type ScatterDataSet = BarLineScatterCandleDataSet<Entry>;
pub type CandleDataSet = BarLineScatterCandleDataSet<CandleEntry>;

impl<T: ChartEntry> BarLineScatterCandleDataSet<T> {
    #[must_use]
    pub fn new(entries: Vec<T>, label: impl Into<String>) -> Self {
        Self::from_data_set(DataSet::new(entries, label))
    }

    #[must_use]
    pub fn with_density(
        entries: Vec<T>,
        label: impl Into<String>,
        density: DisplayDensity,
    ) -> Self {
        Self::from_data_set(DataSet::with_density(entries, label, density))
    }

    #[must_use]
    pub fn from_data_set(data_set: DataSet<T>) -> Self {
        let highlight_line_width = data_set.density().dp_to_px(1.0);
        Self {
            data_set,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            highlight_enabled: true,
            highlight_line_width,
        }
    }

    #[must_use]
    pub fn data_set(&self) -> &DataSet<T> {
        &self.data_set
    }

    pub fn data_set_mut(&mut self) -> &mut DataSet<T> {
        &mut self.data_set
    }

    #[must_use]
    pub fn into_data_set(self) -> DataSet<T> {
        self.data_set
    }
}

impl<T: ChartEntry> Deref for BarLineScatterCandleDataSet<T> {
    type Target = DataSet<T>;

    fn deref(&self) -> &Self::Target {
        &self.data_set
    }
}

impl<T: ChartEntry> HighlightStyle for BarLineScatterCandleDataSet<T> {
    fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    fn highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    fn set_highlight_enabled(&mut self, enabled: bool) {
        self.highlight_enabled = enabled;
    }

    fn highlight_line_width(&self) -> f64 {
        self.highlight_line_width
    }

    fn set_highlight_line_width(&mut self, width_dp: f64) {
        let clamped = width_dp.clamp(MIN_HIGHLIGHT_LINE_WIDTH_DP, MAX_HIGHLIGHT_LINE_WIDTH_DP);
        self.highlight_line_width = self.data_set.density().dp_to_px(clamped);
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_HIGHLIGHT_COLOR, HighlightStyle, LineDataSet};
    use crate::core::{DisplayDensity, Entry};
    use crate::render::Color;

    #[test]
    fn highlight_color_defaults_and_is_stored_verbatim() {
        let mut set = LineDataSet::new(vec![Entry::new(1.0, 0).expect("entry")], "line");
        assert_eq!(set.highlight_color(), DEFAULT_HIGHLIGHT_COLOR);

        set.set_highlight_color(Color(0x1234_5678));
        assert_eq!(set.highlight_color(), Color(0x1234_5678));
    }

    #[test]
    fn base_data_set_is_reachable_through_deref() {
        let mut set = LineDataSet::new(vec![Entry::new(4.0, 0).expect("entry")], "line");
        assert_eq!(set.label(), "line");
        set.data_set_mut().set_label("renamed");
        assert_eq!(set.data_set().label(), "renamed");
    }

    #[test]
    fn highlight_line_width_is_clamped_then_converted() {
        let density = DisplayDensity::new(1.5).expect("density");
        let mut set = LineDataSet::with_density(Vec::new(), "line", density);
        assert_eq!(set.highlight_line_width(), 1.5);
        set.set_highlight_line_width(50.0);
        assert_eq!(set.highlight_line_width(), 15.0);
    }
}
