use cairo::{Context, Format, ImageSurface, Matrix};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ChartError, ChartResult};
use crate::render::canvas::{OriginChange, OriginStack};
use crate::render::{
    Canvas, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// `Canvas` implementation over an external Cairo context, for example the
/// context handed to a GTK `DrawingArea` draw callback.
///
/// Translations are forwarded to Cairo and mirrored locally so
/// `Canvas::translation` does not need to query the context matrix. An
/// inverse translate reinstates the matrix saved before the matching move.
#[derive(Debug)]
pub struct CairoCanvas<'a> {
    context: &'a Context,
    origins: OriginStack,
    saved_matrices: Vec<Matrix>,
    stats: CairoRenderStats,
}

impl<'a> CairoCanvas<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            origins: OriginStack::default(),
            saved_matrices: Vec::new(),
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }
}

impl Canvas for CairoCanvas<'_> {
    fn translate(&mut self, dx: f64, dy: f64) {
        match self.origins.translate(dx, dy) {
            OriginChange::Moved => {
                self.saved_matrices.push(self.context.matrix());
                self.context.translate(dx, dy);
            }
            OriginChange::Restored => match self.saved_matrices.pop() {
                Some(matrix) => self.context.set_matrix(matrix),
                None => self.context.translate(dx, dy),
            },
        }
    }

    fn translation(&self) -> (f64, f64) {
        self.origins.origin()
    }

    fn draw_line(&mut self, line: LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        apply_color(self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        self.context.move_to(line.x1, line.y1);
        self.context.line_to(line.x2, line.y2);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_rect(&mut self, rect: RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        append_rect_path(self.context, rect);
        apply_color(self.context, rect.fill_color);
        if rect.border_width > 0.0 {
            self.context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            apply_color(self.context, rect.border_color);
            self.context.set_line_width(rect.border_width);
            self.context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
        } else {
            self.context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        }
        self.stats.rects_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let layout = pangocairo::functions::create_layout(self.context);
        let font_description = FontDescription::from_string(&text.font_description());
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(self.context, text.color);
        self.context.move_to(x, text.y);
        pangocairo::functions::show_layout(self.context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

/// Offscreen renderer replaying a `RenderFrame` onto an image surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut canvas = CairoCanvas::new(&context);
        for line in &frame.lines {
            canvas.draw_line(*line)?;
        }
        for rect in &frame.rects {
            canvas.draw_rect(*rect)?;
        }
        for text in &frame.texts {
            canvas.draw_text(text)?;
        }
        self.last_stats = canvas.stats();
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    let (red, green, blue, alpha) = color.to_unit_rgba();
    context.set_source_rgba(red, green, blue, alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
