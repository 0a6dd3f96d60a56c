use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DisplayDensity, clamp_text_size_dp};
use crate::render::{Color, TextPrimitive};

pub const DEFAULT_OFFSET_DP: f64 = 5.0;
pub const DEFAULT_TEXT_SIZE_DP: f64 = 10.0;

/// Font handle used for component labels.
///
/// The crate never resolves fonts itself; backends map the family name to
/// whatever their text stack provides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Typeface {
    pub family: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Typeface {
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            bold: false,
            italic: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Stamps family and style flags onto a label.
    #[must_use]
    pub fn style_text(&self, text: TextPrimitive) -> TextPrimitive {
        text.with_font_family(self.family.clone())
            .with_font_style(self.bold, self.italic)
    }
}

/// Style attributes shared by axis and legend components.
///
/// Offsets and text size are stored in device pixels. Setters take
/// density-independent units and convert on write, so getters always return
/// pixel values.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentBase {
    enabled: bool,
    x_offset: f64,
    y_offset: f64,
    typeface: Option<Typeface>,
    text_size: f64,
    text_color: Color,
    density: DisplayDensity,
}

impl ComponentBase {
    #[must_use]
    pub fn new(density: DisplayDensity) -> Self {
        Self {
            enabled: true,
            x_offset: density.dp_to_px(DEFAULT_OFFSET_DP),
            y_offset: density.dp_to_px(DEFAULT_OFFSET_DP),
            typeface: None,
            text_size: density.dp_to_px(DEFAULT_TEXT_SIZE_DP),
            text_color: Color::BLACK,
            density,
        }
    }

    #[must_use]
    pub fn density(&self) -> DisplayDensity {
        self.density
    }

    #[must_use]
    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    /// Sets the label offset along x in dp. Applied before and after the label.
    pub fn set_x_offset(&mut self, offset_dp: f64) {
        self.x_offset = self.density.dp_to_px(offset_dp);
    }

    #[must_use]
    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Sets the label offset along y in dp. For legends a larger offset moves
    /// the whole legend further from the top.
    pub fn set_y_offset(&mut self, offset_dp: f64) {
        self.y_offset = self.density.dp_to_px(offset_dp);
    }

    #[must_use]
    pub fn typeface(&self) -> Option<&Typeface> {
        self.typeface.as_ref()
    }

    pub fn set_typeface(&mut self, typeface: Option<Typeface>) {
        self.typeface = typeface;
    }

    #[must_use]
    pub fn text_size(&self) -> f64 {
        self.text_size
    }

    /// Sets the label text size in dp, clamped to `[6, 24]` before
    /// conversion.
    pub fn set_text_size(&mut self, size_dp: f64) {
        let clamped = clamp_text_size_dp(size_dp);
        if clamped != size_dp && !size_dp.is_nan() {
            debug!(requested = size_dp, applied = clamped, "text size clamped");
        }
        self.text_size = self.density.dp_to_px(clamped);
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Whether the component should be drawn at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Default for ComponentBase {
    fn default() -> Self {
        Self::new(DisplayDensity::default())
    }
}

/// Capability set of every styled chart component.
///
/// Implementors only expose their `ComponentBase`; the style accessors are
/// provided and forward to it.
pub trait Component {
    fn base(&self) -> &ComponentBase;

    fn base_mut(&mut self) -> &mut ComponentBase;

    fn x_offset(&self) -> f64 {
        self.base().x_offset()
    }

    fn set_x_offset(&mut self, offset_dp: f64) {
        self.base_mut().set_x_offset(offset_dp);
    }

    fn y_offset(&self) -> f64 {
        self.base().y_offset()
    }

    fn set_y_offset(&mut self, offset_dp: f64) {
        self.base_mut().set_y_offset(offset_dp);
    }

    fn typeface(&self) -> Option<&Typeface> {
        self.base().typeface()
    }

    fn set_typeface(&mut self, typeface: Option<Typeface>) {
        self.base_mut().set_typeface(typeface);
    }

    fn text_size(&self) -> f64 {
        self.base().text_size()
    }

    fn set_text_size(&mut self, size_dp: f64) {
        self.base_mut().set_text_size(size_dp);
    }

    fn text_color(&self) -> Color {
        self.base().text_color()
    }

    fn set_text_color(&mut self, color: Color) {
        self.base_mut().set_text_color(color);
    }

    fn is_enabled(&self) -> bool {
        self.base().is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.base_mut().set_enabled(enabled);
    }
}

impl Component for ComponentBase {
    fn base(&self) -> &ComponentBase {
        self
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        self
    }
}
