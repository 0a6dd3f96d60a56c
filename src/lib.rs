//! chartview: chart component styling, marker overlays and highlightable
//! data sets.
//!
//! The crate holds the presentation state a chart renderer consumes (axis and
//! legend typography, marker overlays, per-series highlight styling) and
//! talks to the host toolkit only through the narrow `Canvas`, `View` and
//! `LayoutInflater` seams.

pub mod api;
pub mod component;
pub mod core;
pub mod error;
pub mod marker;
pub mod render;
pub mod telemetry;

pub use component::{AxisComponent, Component, ComponentBase, Legend};
pub use core::{BarLineScatterCandleDataSet, DataSet, DisplayDensity, Entry};
pub use error::{ChartError, ChartResult};
pub use marker::{Marker, MarkerView};
