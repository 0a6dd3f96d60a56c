use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Packed `0xAARRGGBB` color value.
///
/// Style attributes store colors as raw integers and never validate them, so
/// any `u32` is a valid color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self(0);

    #[must_use]
    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::argb(255, red, green, blue)
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels normalized to `0..=1`, ordered red, green, blue, alpha.
    #[must_use]
    pub fn to_unit_rgba(self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red()) / 255.0,
            f64::from(self.green()) / 255.0,
            f64::from(self.blue()) / 255.0,
            f64::from(self.alpha()) / 255.0,
        )
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one filled rectangle with optional border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `y` is the top edge of the text box, not the baseline; `x` is the anchor
/// interpreted by `h_align`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub font_family: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            font_family: None,
            bold: false,
            italic: false,
            color,
            h_align,
        }
    }

    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_font_style(mut self, bold: bool, italic: bool) -> Self {
        self.bold = bold;
        self.italic = italic;
        self
    }

    /// Pango-style font description, e.g. `"Sans Bold Italic 12"`.
    #[must_use]
    pub fn font_description(&self) -> String {
        let family = self.font_family.as_deref().unwrap_or("Sans");
        let mut description = family.to_owned();
        if self.bold {
            description.push_str(" Bold");
        }
        if self.italic {
            description.push_str(" Italic");
        }
        format!("{description} {}", self.font_size_px)
    }

    #[must_use]
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn color_packs_channels_as_argb() {
        let color = Color::rgb(255, 187, 115);
        assert_eq!(color.0, 0xFFFF_BB73);
        assert_eq!(color.alpha(), 255);
        assert_eq!(color.red(), 255);
        assert_eq!(color.green(), 187);
        assert_eq!(color.blue(), 115);
    }

    #[test]
    fn unit_rgba_normalizes_channels() {
        let (r, g, b, a) = Color::argb(0, 255, 0, 51).to_unit_rgba();
        assert_eq!((r, g, a), (1.0, 0.0, 0.0));
        assert!((b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn zero_width_line_is_rejected() {
        let line = LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 0.0, Color::BLACK);
        assert!(line.validate().is_err());
    }

    #[test]
    fn negative_rect_size_is_rejected() {
        let rect = RectPrimitive::new(0.0, 0.0, -1.0, 4.0, Color::WHITE);
        assert!(rect.validate().is_err());
    }

    #[test]
    fn font_description_carries_style_flags() {
        let text = TextPrimitive::new("a", 0.0, 0.0, 12.0, Color::BLACK, TextHAlign::Left);
        assert_eq!(text.font_description(), "Sans 12");

        let styled = text
            .with_font_family("DejaVu Serif")
            .with_font_style(true, true);
        assert_eq!(styled.font_description(), "DejaVu Serif Bold Italic 12");
    }
}
