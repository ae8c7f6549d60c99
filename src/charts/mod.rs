//! Dashboard Charts
//!
//! - **selection**: `FilterSelection`, the row predicate
//! - **figure**: `ChartPayload`, a Plotly-compatible figure
//! - **update**: `update_charts`, selection to price and volume figures

pub mod figure;
pub mod selection;
pub mod update;

pub use figure::{Axis, ChartPayload, FigureLayout, Title, Trace};
pub use selection::FilterSelection;
pub use update::{empty_charts, update_charts, ChartPair};
