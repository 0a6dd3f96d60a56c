//! Chart-facing helpers built on the components, data sets and render
//! primitives: highlight crosshair frames and persisted component styles.

mod highlight;
mod style_config;

pub use highlight::{build_highlight_frame, select_highlighted_entries};
pub use style_config::{COMPONENT_STYLE_JSON_SCHEMA_V1, ComponentStyleConfig};
