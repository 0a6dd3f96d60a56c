use std::ops::Deref;

use crate::core::{ChartEntry, DataSet, HighlightStyle, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RenderFrame};

/// Builds the highlight crosshair for a selected value at `(x, y)` pixels.
///
/// Emits one vertical and one horizontal line spanning the viewport, painted
/// in the set's highlight color and stroke width. A set with highlighting
/// disabled yields an empty frame.
pub fn build_highlight_frame<S>(
    set: &S,
    x: f64,
    y: f64,
    viewport: Viewport,
) -> ChartResult<RenderFrame>
where
    S: HighlightStyle,
{
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let mut frame = RenderFrame::new(viewport);
    if !set.highlight_enabled() {
        return Ok(frame);
    }
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(
            "highlight position must be finite".to_owned(),
        ));
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let x = x.clamp(0.0, width);
    let y = y.clamp(0.0, height);
    let color = set.highlight_color();
    let stroke = set.highlight_line_width();

    frame.lines.push(LinePrimitive::new(x, 0.0, x, height, stroke, color));
    frame.lines.push(LinePrimitive::new(0.0, y, width, y, stroke, color));
    frame.validate()?;
    Ok(frame)
}

/// Finds the entry to highlight for `x_index` in every visible set.
///
/// Returns `(data_set_index, entry)` pairs in set order, which is the shape
/// marker refresh expects.
pub fn select_highlighted_entries<'a, T, D>(
    data_sets: &'a [D],
    x_index: usize,
) -> Vec<(usize, &'a T)>
where
    T: ChartEntry + 'a,
    D: Deref<Target = DataSet<T>>,
{
    data_sets
        .iter()
        .enumerate()
        .filter(|(_, set)| set.is_visible())
        .filter_map(|(index, set)| set.entry_for_x_index(x_index).map(|entry| (index, entry)))
        .collect()
}
