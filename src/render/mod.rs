mod canvas;
mod frame;
mod null_renderer;
mod primitives;
mod recording_canvas;
mod text_metrics;

pub use canvas::Canvas;
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use recording_canvas::RecordingCanvas;
pub use text_metrics::{estimate_text_width_px, line_height_px};

use crate::error::ChartResult;

/// Contract implemented by any backend that replays a whole frame.
///
/// Immediate-mode drawing (markers) goes through `Canvas`; batched overlays
/// (legends, highlight crosshairs) are collected into a `RenderFrame` first.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoCanvas, CairoRenderStats, CairoRenderer};
