use crate::core::DisplayDensity;
use crate::error::ChartResult;
use crate::marker::view::{Bounds, MeasureSpec, Size, View};
use crate::render::{
    Canvas, Color, RectPrimitive, TextHAlign, TextPrimitive, estimate_text_width_px,
    line_height_px,
};

/// Rounded box with stacked text lines: the stock marker content.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBoxView {
    lines: Vec<String>,
    text_size: f64,
    text_color: Color,
    background: Color,
    padding: f64,
    corner_radius: f64,
    measured: Size,
    bounds: Bounds,
}

impl LabelBoxView {
    #[must_use]
    pub fn new(density: DisplayDensity) -> Self {
        Self {
            lines: Vec::new(),
            text_size: density.dp_to_px(12.0),
            text_color: Color::WHITE,
            background: Color::argb(204, 48, 48, 48),
            padding: density.dp_to_px(6.0),
            corner_radius: density.dp_to_px(4.0),
            measured: Size::default(),
            bounds: Bounds::default(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, text_color: Color, background: Color) -> Self {
        self.text_color = text_color;
        self.background = background;
        self
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replaces the displayed text. Callers re-run measure/layout afterwards
    /// if the box should resize.
    pub fn set_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
    }

    #[must_use]
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    fn natural_size(&self) -> Size {
        let text_width = self
            .lines
            .iter()
            .map(|line| estimate_text_width_px(line, self.text_size))
            .fold(0.0, f64::max);
        let text_height = self.lines.len() as f64 * line_height_px(self.text_size);
        Size::new(text_width + 2.0 * self.padding, text_height + 2.0 * self.padding)
    }
}

impl View for LabelBoxView {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let natural = self.natural_size();
        self.measured = Size::new(width.resolve(natural.width), height.resolve(natural.height));
        self.measured
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> ChartResult<()> {
        let width = self.bounds.width();
        let height = self.bounds.height();
        if width <= 0.0 || height <= 0.0 {
            return Ok(());
        }

        canvas.draw_rect(
            RectPrimitive::new(
                self.bounds.left,
                self.bounds.top,
                width,
                height,
                self.background,
            )
            .with_corner_radius(self.corner_radius),
        )?;

        let line_height = line_height_px(self.text_size);
        for (row, line) in self.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            canvas.draw_text(&TextPrimitive::new(
                line.as_str(),
                self.bounds.left + self.padding,
                self.bounds.top + self.padding + row as f64 * line_height,
                self.text_size,
                self.text_color,
                TextHAlign::Left,
            ))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LabelBoxView;
    use crate::core::{DisplayDensity, Viewport};
    use crate::marker::view::{Bounds, MeasureSpec, View};
    use crate::render::RecordingCanvas;

    #[test]
    fn natural_size_grows_with_content() {
        let mut view = LabelBoxView::new(DisplayDensity::default());
        let empty = view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        view.set_lines(["close 123.45", "vol 9000"]);
        let filled = view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);

        assert_eq!((empty.width, empty.height), (12.0, 12.0));
        assert!(filled.width > empty.width);
        assert_eq!(filled.height, 12.0 + 2.0 * 15.0);
    }

    #[test]
    fn draw_emits_background_then_one_text_per_line() {
        let mut view = LabelBoxView::new(DisplayDensity::default());
        view.set_lines(["a", "", "c"]);
        let size = view.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        view.layout(Bounds::at_origin(size));

        let mut canvas = RecordingCanvas::new(Viewport::new(100, 100));
        view.draw(&mut canvas).expect("draw");
        let frame = canvas.into_frame();
        assert_eq!(frame.rects.len(), 1);
        assert_eq!(frame.texts.len(), 2);
    }
}
