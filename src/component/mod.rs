//! Styled chart components (axes, legends) built on a shared
//! `ComponentBase`.

pub mod axis;
pub mod component_base;
pub mod legend;

pub use axis::{AxisComponent, AxisSide};
pub use component_base::{
    Component, ComponentBase, DEFAULT_OFFSET_DP, DEFAULT_TEXT_SIZE_DP, Typeface,
};
pub use legend::{Legend, LegendForm, LegendPosition};
