use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Drawing surface supplied by the host toolkit.
///
/// Primitives are expressed in the canvas's current local frame. `translate`
/// moves the origin of that frame; callers that translate are expected to
/// translate back so sibling draw calls see an unchanged frame. A translate
/// that exactly negates the most recent unmatched one restores the origin
/// saved before it, so paired moves are net-zero bit for bit.
pub trait Canvas {
    fn translate(&mut self, dx: f64, dy: f64);

    /// Accumulated origin offset of the current frame.
    fn translation(&self) -> (f64, f64);

    fn draw_line(&mut self, line: LinePrimitive) -> ChartResult<()>;

    fn draw_rect(&mut self, rect: RectPrimitive) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn translate(&mut self, dx: f64, dy: f64) {
        (**self).translate(dx, dy);
    }

    fn translation(&self) -> (f64, f64) {
        (**self).translation()
    }

    fn draw_line(&mut self, line: LinePrimitive) -> ChartResult<()> {
        (**self).draw_line(line)
    }

    fn draw_rect(&mut self, rect: RectPrimitive) -> ChartResult<()> {
        (**self).draw_rect(rect)
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        (**self).draw_text(text)
    }
}

/// Whether a translate moved the origin or undid the previous move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OriginChange {
    Moved,
    Restored,
}

#[derive(Debug, Clone, Copy)]
struct SavedOrigin {
    dx: f64,
    dy: f64,
    origin: (f64, f64),
}

/// Origin bookkeeping shared by the canvas implementations.
///
/// Each translate is remembered with the origin it started from. The inverse
/// translate pops that entry and reinstates the saved origin instead of
/// summing floats again.
#[derive(Debug, Clone, Default)]
pub(crate) struct OriginStack {
    origin: (f64, f64),
    saved: Vec<SavedOrigin>,
}

impl OriginStack {
    pub(crate) fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub(crate) fn translate(&mut self, dx: f64, dy: f64) -> OriginChange {
        let cancels_last = self
            .saved
            .last()
            .is_some_and(|top| top.dx == -dx && top.dy == -dy);
        if cancels_last {
            if let Some(top) = self.saved.pop() {
                self.origin = top.origin;
            }
            return OriginChange::Restored;
        }

        self.saved.push(SavedOrigin {
            dx,
            dy,
            origin: self.origin,
        });
        self.origin = (self.origin.0 + dx, self.origin.1 + dy);
        OriginChange::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::{OriginChange, OriginStack};

    #[test]
    fn inverse_translate_restores_saved_origin_exactly() {
        let mut stack = OriginStack::default();
        stack.translate(0.1, 0.7);
        assert_eq!(stack.translate(0.2, 123.456), OriginChange::Moved);
        assert_eq!(stack.translate(-0.2, -123.456), OriginChange::Restored);
        assert_eq!(stack.origin(), (0.1, 0.7));
    }

    #[test]
    fn nested_pairs_unwind_in_order() {
        let mut stack = OriginStack::default();
        stack.translate(1.0, 0.0);
        stack.translate(1.0, 0.0);
        assert_eq!(stack.origin(), (2.0, 0.0));

        assert_eq!(stack.translate(-1.0, 0.0), OriginChange::Restored);
        assert_eq!(stack.origin(), (1.0, 0.0));
        assert_eq!(stack.translate(-1.0, 0.0), OriginChange::Restored);
        assert_eq!(stack.origin(), (0.0, 0.0));
    }

    #[test]
    fn unmatched_translate_accumulates() {
        let mut stack = OriginStack::default();
        stack.translate(3.0, 4.0);
        assert_eq!(stack.translate(-1.0, -4.0), OriginChange::Moved);
        assert_eq!(stack.origin(), (2.0, 0.0));
    }
}
