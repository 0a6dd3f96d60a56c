use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentBase};
use crate::core::{BarLineScatterCandleDataSet, ChartEntry, DisplayDensity, Viewport};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    estimate_text_width_px,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendPosition {
    #[default]
    BelowChartLeft,
    BelowChartCenter,
    BelowChartRight,
    RightOfChart,
}

/// Shape drawn next to each legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendForm {
    #[default]
    Square,
    Circle,
    Line,
}

/// Legend listing series labels with their colors, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    base: ComponentBase,
    position: LegendPosition,
    form: LegendForm,
    form_size: f64,
    form_to_text_space: f64,
    entry_space: f64,
    entries: IndexMap<String, Color>,
}

impl Legend {
    #[must_use]
    pub fn new(density: DisplayDensity) -> Self {
        Self {
            base: ComponentBase::new(density),
            position: LegendPosition::default(),
            form: LegendForm::default(),
            form_size: density.dp_to_px(8.0),
            form_to_text_space: density.dp_to_px(5.0),
            entry_space: density.dp_to_px(6.0),
            entries: IndexMap::new(),
        }
    }

    /// Builds a legend with one entry per data set, using each set's label
    /// and first color.
    #[must_use]
    pub fn from_data_sets<T: ChartEntry>(
        data_sets: &[BarLineScatterCandleDataSet<T>],
        density: DisplayDensity,
    ) -> Self {
        let mut legend = Self::new(density);
        for set in data_sets {
            legend.push_entry(set.label(), set.color_at(0));
        }
        legend
    }

    /// Adds or recolors an entry. Recoloring keeps the original position.
    pub fn push_entry(&mut self, label: impl Into<String>, color: Color) {
        self.entries.insert(label.into(), color);
    }

    pub fn remove_entry(&mut self, label: &str) -> Option<Color> {
        self.entries.shift_remove(label)
    }

    #[must_use]
    pub fn entries(&self) -> &IndexMap<String, Color> {
        &self.entries
    }

    #[must_use]
    pub fn position(&self) -> LegendPosition {
        self.position
    }

    pub fn set_position(&mut self, position: LegendPosition) {
        self.position = position;
    }

    #[must_use]
    pub fn form(&self) -> LegendForm {
        self.form
    }

    pub fn set_form(&mut self, form: LegendForm) {
        self.form = form;
    }

    #[must_use]
    pub fn form_size(&self) -> f64 {
        self.form_size
    }

    pub fn set_form_size(&mut self, size_dp: f64) {
        self.form_size = self.base.density().dp_to_px(size_dp);
    }

    fn entry_width(&self, label: &str) -> f64 {
        self.form_size
            + self.form_to_text_space
            + estimate_text_width_px(label, self.base.text_size())
    }

    fn row_height(&self) -> f64 {
        self.form_size.max(self.base.text_size())
    }

    /// Lays the legend out inside `viewport`.
    ///
    /// A disabled or empty legend yields an empty frame.
    pub fn build_frame(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(viewport);
        if !self.base.is_enabled() || self.entries.is_empty() {
            return Ok(frame);
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let x_offset = self.base.x_offset();
        let y_offset = self.base.y_offset();
        let row_height = self.row_height();

        match self.position {
            LegendPosition::RightOfChart => {
                let column_width = self
                    .entries
                    .keys()
                    .map(|label| self.entry_width(label))
                    .fold(0.0, f64::max);
                let left = width - x_offset - column_width;
                let step = row_height + self.entry_space;
                for (row, (label, color)) in self.entries.iter().enumerate() {
                    let top = y_offset + row as f64 * step;
                    self.push_entry_primitives(&mut frame, label, *color, left, top);
                }
            }
            position => {
                let total: f64 = self
                    .entries
                    .keys()
                    .map(|label| self.entry_width(label))
                    .sum::<f64>()
                    + self.entry_space * (self.entries.len() - 1) as f64;
                let mut left = match position {
                    LegendPosition::BelowChartCenter => (width - total) * 0.5,
                    LegendPosition::BelowChartRight => width - x_offset - total,
                    _ => x_offset,
                };
                let top = height - y_offset - row_height;
                for (label, color) in &self.entries {
                    self.push_entry_primitives(&mut frame, label, *color, left, top);
                    left += self.entry_width(label) + self.entry_space;
                }
            }
        }

        frame.validate()?;
        Ok(frame)
    }

    fn push_entry_primitives(
        &self,
        frame: &mut RenderFrame,
        label: &str,
        color: Color,
        left: f64,
        top: f64,
    ) {
        let row_height = self.row_height();
        let form_top = top + (row_height - self.form_size) * 0.5;
        match self.form {
            LegendForm::Square => {
                frame.rects.push(RectPrimitive::new(
                    left,
                    form_top,
                    self.form_size,
                    self.form_size,
                    color,
                ));
            }
            LegendForm::Circle => {
                frame.rects.push(
                    RectPrimitive::new(left, form_top, self.form_size, self.form_size, color)
                        .with_corner_radius(self.form_size * 0.5),
                );
            }
            LegendForm::Line => {
                let center_y = top + row_height * 0.5;
                let stroke = (self.form_size * 0.25).max(1.0);
                frame.lines.push(LinePrimitive::new(
                    left,
                    center_y,
                    left + self.form_size,
                    center_y,
                    stroke,
                    color,
                ));
            }
        }

        if label.is_empty() {
            return;
        }
        let text_top = top + (row_height - self.base.text_size()) * 0.5;
        let mut text = TextPrimitive::new(
            label,
            left + self.form_size + self.form_to_text_space,
            text_top,
            self.base.text_size(),
            self.base.text_color(),
            TextHAlign::Left,
        );
        if let Some(typeface) = self.base.typeface() {
            text = typeface.style_text(text);
        }
        frame.texts.push(text);
    }
}

impl Component for Legend {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }
}
