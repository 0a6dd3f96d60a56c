use ordered_float::OrderedFloat;
use smallvec::{SmallVec, smallvec};

use crate::core::primitives::clamp_text_size_dp;
use crate::core::{AxisDependency, ChartEntry, DisplayDensity};
use crate::render::Color;

/// Default series color (light blue).
pub const DEFAULT_SERIES_COLOR: Color = Color::rgb(140, 234, 255);

pub type SeriesColors = SmallVec<[Color; 4]>;

/// Ordered entries of one chart series plus its display attributes.
///
/// Entries are kept sorted by `x_index`; `y_min`, `y_max` and the value sum
/// are recomputed on every mutation so readers never see stale bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet<T: ChartEntry> {
    entries: Vec<T>,
    label: String,
    colors: SeriesColors,
    visible: bool,
    draw_values: bool,
    value_text_color: Color,
    value_text_size: f64,
    axis_dependency: AxisDependency,
    density: DisplayDensity,
    y_min: f64,
    y_max: f64,
    y_value_sum: f64,
}

impl<T: ChartEntry> DataSet<T> {
    #[must_use]
    pub fn new(entries: Vec<T>, label: impl Into<String>) -> Self {
        Self::with_density(entries, label, DisplayDensity::default())
    }

    #[must_use]
    pub fn with_density(
        mut entries: Vec<T>,
        label: impl Into<String>,
        density: DisplayDensity,
    ) -> Self {
        entries.sort_by_key(ChartEntry::x_index);
        let mut set = Self {
            entries,
            label: label.into(),
            colors: smallvec![DEFAULT_SERIES_COLOR],
            visible: true,
            draw_values: true,
            value_text_color: Color::BLACK,
            value_text_size: density.dp_to_px(17.0),
            axis_dependency: AxisDependency::Left,
            density,
            y_min: 0.0,
            y_max: 0.0,
            y_value_sum: 0.0,
        };
        set.calc_min_max();
        set
    }

    fn calc_min_max(&mut self) {
        if self.entries.is_empty() {
            self.y_min = 0.0;
            self.y_max = 0.0;
            self.y_value_sum = 0.0;
            return;
        }

        let values = self.entries.iter().map(|e| OrderedFloat(e.value()));
        self.y_min = values.clone().min().map_or(0.0, |v| v.0);
        self.y_max = values.max().map_or(0.0, |v| v.0);
        self.y_value_sum = self.entries.iter().map(ChartEntry::value).sum();
    }

    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn y_value_sum(&self) -> f64 {
        self.y_value_sum
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.y_value_sum / self.entries.len() as f64
    }

    /// Returns the entry at `x_index`, or the one closest to it when no entry
    /// sits exactly there. Ties resolve to the lower index.
    #[must_use]
    pub fn entry_for_x_index(&self, x_index: usize) -> Option<&T> {
        match self.entries.binary_search_by_key(&x_index, ChartEntry::x_index) {
            Ok(pos) => Some(&self.entries[pos]),
            Err(pos) => {
                let before = pos.checked_sub(1).map(|p| &self.entries[p]);
                let after = self.entries.get(pos);
                match (before, after) {
                    (Some(b), Some(a)) => {
                        if x_index - b.x_index() <= a.x_index() - x_index {
                            Some(b)
                        } else {
                            Some(a)
                        }
                    }
                    (Some(b), None) => Some(b),
                    (None, a) => a,
                }
            }
        }
    }

    /// Value of the entry exactly at `x_index`, `NaN` when there is none.
    #[must_use]
    pub fn y_value_for_x_index(&self, x_index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&x_index, ChartEntry::x_index)
            .map_or(f64::NAN, |pos| self.entries[pos].value())
    }

    /// Inserts `entry` after any entries sharing its `x_index`.
    pub fn add_entry(&mut self, entry: T) {
        let pos = self
            .entries
            .partition_point(|e| e.x_index() <= entry.x_index());
        self.entries.insert(pos, entry);
        self.calc_min_max();
    }

    /// Removes the first entry at `x_index`. Returns whether one was removed.
    pub fn remove_entry_at_x_index(&mut self, x_index: usize) -> bool {
        let Ok(pos) = self
            .entries
            .binary_search_by_key(&x_index, ChartEntry::x_index)
        else {
            return false;
        };
        let first = self.entries[..pos]
            .iter()
            .rposition(|e| e.x_index() != x_index)
            .map_or(0, |p| p + 1);
        self.entries.remove(first);
        self.calc_min_max();
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.calc_min_max();
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color for the entry at position `index`, cycling through the list.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Replaces the color list with a single color.
    pub fn set_color(&mut self, color: Color) {
        self.colors = smallvec![color];
    }

    /// Replaces the color list. An empty list falls back to the default color.
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = Color>) {
        self.colors = colors.into_iter().collect();
        if self.colors.is_empty() {
            self.colors.push(DEFAULT_SERIES_COLOR);
        }
    }

    pub fn add_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn is_draw_values_enabled(&self) -> bool {
        self.draw_values
    }

    pub fn set_draw_values(&mut self, enabled: bool) {
        self.draw_values = enabled;
    }

    #[must_use]
    pub fn value_text_color(&self) -> Color {
        self.value_text_color
    }

    pub fn set_value_text_color(&mut self, color: Color) {
        self.value_text_color = color;
    }

    #[must_use]
    pub fn value_text_size(&self) -> f64 {
        self.value_text_size
    }

    /// Sets the value label size in dp, clamped to `[6, 24]` before
    /// conversion to pixels.
    pub fn set_value_text_size(&mut self, size_dp: f64) {
        self.value_text_size = self.density.dp_to_px(clamp_text_size_dp(size_dp));
    }

    #[must_use]
    pub fn axis_dependency(&self) -> AxisDependency {
        self.axis_dependency
    }

    pub fn set_axis_dependency(&mut self, dependency: AxisDependency) {
        self.axis_dependency = dependency;
    }

    #[must_use]
    pub fn density(&self) -> DisplayDensity {
        self.density
    }
}
