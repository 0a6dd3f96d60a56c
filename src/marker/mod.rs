//! Marker overlays drawn over selected chart values.

mod label_box;
mod marker_view;
mod value_marker;
mod view;

pub use label_box::LabelBoxView;
pub use marker_view::{Marker, MarkerView};
pub use value_marker::ValueMarker;
pub use view::{
    Bounds, LayoutId, LayoutInflater, LayoutSizing, MeasureSpec, Size, TemplateRegistry, View,
};
