use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentBase};
use crate::core::DisplayDensity;
use crate::render::{Color, TextHAlign, TextPrimitive};

/// Edge of the plot area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisSide {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

impl AxisSide {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }
}

/// Styled axis: shared component typography plus line and grid flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisComponent {
    base: ComponentBase,
    side: AxisSide,
    draw_labels: bool,
    draw_grid_lines: bool,
    draw_axis_line: bool,
    grid_color: Color,
    axis_line_color: Color,
}

impl AxisComponent {
    #[must_use]
    pub fn new(side: AxisSide, density: DisplayDensity) -> Self {
        Self {
            base: ComponentBase::new(density),
            side,
            draw_labels: true,
            draw_grid_lines: true,
            draw_axis_line: true,
            grid_color: Color::rgb(160, 160, 160),
            axis_line_color: Color::rgb(160, 160, 160),
        }
    }

    #[must_use]
    pub fn side(&self) -> AxisSide {
        self.side
    }

    pub fn set_side(&mut self, side: AxisSide) {
        self.side = side;
    }

    #[must_use]
    pub fn is_draw_labels_enabled(&self) -> bool {
        self.draw_labels
    }

    pub fn set_draw_labels(&mut self, enabled: bool) {
        self.draw_labels = enabled;
    }

    #[must_use]
    pub fn is_draw_grid_lines_enabled(&self) -> bool {
        self.draw_grid_lines
    }

    pub fn set_draw_grid_lines(&mut self, enabled: bool) {
        self.draw_grid_lines = enabled;
    }

    #[must_use]
    pub fn is_draw_axis_line_enabled(&self) -> bool {
        self.draw_axis_line
    }

    pub fn set_draw_axis_line(&mut self, enabled: bool) {
        self.draw_axis_line = enabled;
    }

    #[must_use]
    pub fn grid_color(&self) -> Color {
        self.grid_color
    }

    pub fn set_grid_color(&mut self, color: Color) {
        self.grid_color = color;
    }

    #[must_use]
    pub fn axis_line_color(&self) -> Color {
        self.axis_line_color
    }

    pub fn set_axis_line_color(&mut self, color: Color) {
        self.axis_line_color = color;
    }

    /// Label anchor for a tick at `(tick_x, tick_y)` in pixels.
    ///
    /// The returned `y` is the top edge of the label. Labels move away from
    /// the plot area: down for a bottom axis, up for a top axis, outwards
    /// horizontally for vertical axes.
    #[must_use]
    pub fn label_anchor(&self, tick_x: f64, tick_y: f64) -> (f64, f64) {
        let x_offset = self.base.x_offset();
        let y_offset = self.base.y_offset();
        match self.side {
            AxisSide::Bottom => (tick_x, tick_y + y_offset),
            AxisSide::Top => (tick_x, tick_y - y_offset - self.base.text_size()),
            AxisSide::Left => (tick_x - x_offset, tick_y + y_offset),
            AxisSide::Right => (tick_x + x_offset, tick_y + y_offset),
        }
    }

    /// Builds the label primitive for one tick, or `None` when the axis or
    /// its labels are disabled.
    #[must_use]
    pub fn tick_label(&self, text: &str, tick_x: f64, tick_y: f64) -> Option<TextPrimitive> {
        if !self.base.is_enabled() || !self.draw_labels || text.is_empty() {
            return None;
        }
        let (x, y) = self.label_anchor(tick_x, tick_y);
        let h_align = match self.side {
            AxisSide::Bottom | AxisSide::Top => TextHAlign::Center,
            AxisSide::Left => TextHAlign::Right,
            AxisSide::Right => TextHAlign::Left,
        };
        let label = TextPrimitive::new(
            text,
            x,
            y,
            self.base.text_size(),
            self.base.text_color(),
            h_align,
        );
        Some(match self.base.typeface() {
            Some(typeface) => typeface.style_text(label),
            None => label,
        })
    }
}

impl Component for AxisComponent {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }
}
