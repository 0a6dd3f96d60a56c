pub mod data_set;
pub mod density;
pub mod entry;
pub mod highlight_data_set;
pub mod primitives;
pub mod types;

pub use data_set::{DEFAULT_SERIES_COLOR, DataSet, SeriesColors};
pub use density::DisplayDensity;
pub use entry::{BarEntry, CandleEntry, ChartEntry, Entry, EntryKind};
pub use highlight_data_set::{
    BarDataSet, BarLineScatterCandleDataSet, CandleDataSet, DEFAULT_HIGHLIGHT_COLOR,
    HighlightStyle, LineDataSet, ScatterDataSet,
};
pub use primitives::{MAX_TEXT_SIZE_DP, MIN_TEXT_SIZE_DP, clamp_text_size_dp};
pub use types::{AxisDependency, Viewport};
