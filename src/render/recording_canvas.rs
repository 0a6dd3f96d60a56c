use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::canvas::OriginStack;
use crate::render::{Canvas, LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

/// Headless canvas that records primitives in absolute (viewport) space.
///
/// Every primitive is validated and shifted by the current translation before
/// it is stored, so the resulting `RenderFrame` can be handed to any
/// `Renderer` unchanged.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    frame: RenderFrame,
    origins: OriginStack,
    translate_count: usize,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            frame: RenderFrame::new(viewport),
            origins: OriginStack::default(),
            translate_count: 0,
        }
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }

    /// Number of `translate` calls observed since construction.
    #[must_use]
    pub fn translate_count(&self) -> usize {
        self.translate_count
    }
}

impl Canvas for RecordingCanvas {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.origins.translate(dx, dy);
        self.translate_count += 1;
    }

    fn translation(&self) -> (f64, f64) {
        self.origins.origin()
    }

    fn draw_line(&mut self, line: LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        let (x, y) = self.origins.origin();
        self.frame.lines.push(line.translated(x, y));
        Ok(())
    }

    fn draw_rect(&mut self, rect: RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        let (x, y) = self.origins.origin();
        self.frame.rects.push(rect.translated(x, y));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let (x, y) = self.origins.origin();
        self.frame.texts.push(text.clone().translated(x, y));
        Ok(())
    }
}
