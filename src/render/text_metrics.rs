/// Deterministic, backend-independent text width estimate in pixels.
///
/// Used for natural-size measurement before a real text stack is available.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            c if !c.is_ascii() => 1.0,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Line height used for stacked labels.
#[must_use]
pub fn line_height_px(font_size_px: f64) -> f64 {
    font_size_px * 1.25
}
