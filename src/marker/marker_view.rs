use tracing::{debug, trace};

use crate::core::ChartEntry;
use crate::core::primitives::ensure_finite;
use crate::error::ChartResult;
use crate::marker::view::{
    Bounds, LayoutId, LayoutInflater, LayoutSizing, MeasureSpec, Size, View,
};
use crate::render::Canvas;

/// Overlay content shown at a selected value.
///
/// Construction inflates or adopts a content view, sizes it to its content,
/// measures it without constraints and lays it out at `(0, 0)` with its
/// natural size. The measured `width`/`height` are what marker offset
/// accessors are expected to use (for example `-width / 2` to center).
#[derive(Debug)]
pub struct MarkerView<V: View + ?Sized = dyn View> {
    size: Size,
    content: Box<V>,
}

impl MarkerView {
    /// Inflates `layout_id` through `inflater` and runs the initial
    /// measure/layout pass.
    pub fn inflate(inflater: &dyn LayoutInflater, layout_id: LayoutId) -> ChartResult<Self> {
        let content = inflater.inflate(layout_id)?;
        let view = Self::from_boxed(content);
        debug!(
            layout = layout_id.0,
            width = view.size.width,
            height = view.size.height,
            "marker view inflated"
        );
        Ok(view)
    }
}

impl<V: View> MarkerView<V> {
    #[must_use]
    pub fn from_view(content: V) -> Self {
        Self::from_boxed(Box::new(content))
    }
}

impl<V: View + ?Sized> MarkerView<V> {
    fn from_boxed(mut content: Box<V>) -> Self {
        content.set_layout_sizing(LayoutSizing::WrapContent, LayoutSizing::WrapContent);
        let size = measure_and_layout(&mut *content);
        Self { size, content }
    }

    /// Re-runs the natural-size pass, typically after `refresh_content`
    /// changed what the content displays.
    pub fn remeasure(&mut self) -> Size {
        self.size = measure_and_layout(&mut *self.content);
        self.size
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    #[must_use]
    pub fn content(&self) -> &V {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut V {
        &mut self.content
    }
}

fn measure_and_layout<V: View + ?Sized>(content: &mut V) -> Size {
    let size = content.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    content.layout(Bounds::at_origin(size));
    size
}

impl<V: View + ?Sized> View for MarkerView<V> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let natural = self.content.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        Size::new(width.resolve(natural.width), height.resolve(natural.height))
    }

    fn layout(&mut self, bounds: Bounds) {
        self.size = Size::new(bounds.width(), bounds.height());
        self.content.layout(Bounds::at_origin(self.size));
    }

    fn bounds(&self) -> Bounds {
        Bounds::at_origin(self.size)
    }

    fn draw(&self, canvas: &mut dyn Canvas) -> ChartResult<()> {
        self.content.draw(canvas)
    }
}

/// Capabilities every concrete marker supplies.
pub trait Marker {
    /// The laid-out view drawn at the marker position.
    fn view(&self) -> &dyn View;

    /// Updates the displayed content for `entry`, which belongs to the data
    /// set at `data_set_index`. Called once per redraw before `draw`.
    fn refresh_content(&mut self, entry: &dyn ChartEntry, data_set_index: usize);

    /// Horizontal pixel offset from the anchor point.
    fn x_offset(&self) -> i32;

    /// Vertical pixel offset from the anchor point.
    fn y_offset(&self) -> i32;

    /// Draws the marker with its offsets applied to `(pos_x, pos_y)`.
    ///
    /// The canvas translation is restored before returning, including when
    /// the view fails to draw. A non-finite position is rejected before the
    /// canvas is touched.
    fn draw(&self, canvas: &mut dyn Canvas, pos_x: f64, pos_y: f64) -> ChartResult<()> {
        let dx = ensure_finite(pos_x + f64::from(self.x_offset()), "marker x")?;
        let dy = ensure_finite(pos_y + f64::from(self.y_offset()), "marker y")?;
        trace!(pos_x, pos_y, dx, dy, "drawing marker");

        canvas.translate(dx, dy);
        let result = self.view().draw(canvas);
        canvas.translate(-dx, -dy);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::{Marker, MarkerView};
    use crate::core::{ChartEntry, DisplayDensity, Entry, Viewport};
    use crate::error::{ChartError, ChartResult};
    use crate::marker::view::{Bounds, LayoutId, MeasureSpec, Size, TemplateRegistry, View};
    use crate::marker::LabelBoxView;
    use crate::render::{Canvas, Color, RecordingCanvas, RectPrimitive};

    #[derive(Debug, Default)]
    struct FixedBox {
        bounds: Bounds,
        fail: bool,
    }

    impl View for FixedBox {
        fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
            Size::new(width.resolve(40.0), height.resolve(20.0))
        }

        fn layout(&mut self, bounds: Bounds) {
            self.bounds = bounds;
        }

        fn bounds(&self) -> Bounds {
            self.bounds
        }

        fn draw(&self, canvas: &mut dyn Canvas) -> ChartResult<()> {
            canvas.draw_rect(RectPrimitive::new(
                0.0,
                0.0,
                self.bounds.width(),
                self.bounds.height(),
                Color::BLACK,
            ))?;
            if self.fail {
                return Err(ChartError::Backend("boom".to_owned()));
            }
            Ok(())
        }
    }

    struct CenteredAbove {
        view: MarkerView<FixedBox>,
        last_index: Option<usize>,
    }

    impl Marker for CenteredAbove {
        fn view(&self) -> &dyn View {
            &self.view
        }

        fn refresh_content(&mut self, entry: &dyn ChartEntry, _data_set_index: usize) {
            self.last_index = Some(entry.x_index());
        }

        fn x_offset(&self) -> i32 {
            -(self.view.width() / 2.0) as i32
        }

        fn y_offset(&self) -> i32 {
            -self.view.height() as i32
        }
    }

    #[test]
    fn construction_lays_content_out_at_natural_size() {
        let view = MarkerView::from_view(FixedBox::default());
        assert_eq!((view.width(), view.height()), (40.0, 20.0));
        assert_eq!(view.content().bounds, Bounds::new(0.0, 0.0, 40.0, 20.0));
    }

    #[test]
    fn draw_applies_offsets_and_restores_translation() {
        let mut marker = CenteredAbove {
            view: MarkerView::from_view(FixedBox::default()),
            last_index: None,
        };
        marker.refresh_content(&Entry::new(1.0, 9).expect("entry"), 0);
        assert_eq!(marker.last_index, Some(9));

        let mut canvas = RecordingCanvas::new(Viewport::new(400, 300));
        canvas.translate(3.0, 4.0);

        marker.draw(&mut canvas, 100.0, 50.0).expect("draw");

        assert_eq!(canvas.translation(), (3.0, 4.0));
        let rect = canvas.frame().rects[0];
        assert_eq!((rect.x, rect.y), (83.0, 34.0));
    }

    #[test]
    fn failed_view_draw_still_restores_translation() {
        let marker = CenteredAbove {
            view: MarkerView::from_view(FixedBox {
                fail: true,
                ..FixedBox::default()
            }),
            last_index: None,
        };
        let mut canvas = RecordingCanvas::new(Viewport::new(400, 300));
        assert!(marker.draw(&mut canvas, 10.0, 10.0).is_err());
        assert_eq!(canvas.translation(), (0.0, 0.0));
    }

    #[test]
    fn non_finite_position_is_rejected_without_translating() {
        let marker = CenteredAbove {
            view: MarkerView::from_view(FixedBox::default()),
            last_index: None,
        };
        let mut canvas = RecordingCanvas::new(Viewport::new(400, 300));

        let err = marker
            .draw(&mut canvas, f64::INFINITY, 10.0)
            .expect_err("infinite x");
        assert!(matches!(err, ChartError::InvalidData(_)));
        assert_eq!(canvas.translate_count(), 0);
        assert!(canvas.frame().is_empty());
    }

    #[test]
    fn inflate_uses_registered_template() {
        let mut registry = TemplateRegistry::new();
        registry.register(LayoutId(7), || {
            let mut view = LabelBoxView::new(DisplayDensity::default());
            view.set_lines(["x"]);
            view
        });

        let view = MarkerView::inflate(&registry, LayoutId(7)).expect("inflate");
        assert!(view.width() > 0.0);
        assert_eq!(view.content().bounds().width(), view.width());

        let missing = MarkerView::inflate(&registry, LayoutId(8));
        assert!(matches!(missing, Err(ChartError::UnknownLayout(8))));
    }
}
