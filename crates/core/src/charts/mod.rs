//! Charts module - pie chart layout from percentage weights.

mod charts_layout;
mod charts_model;

pub use charts_layout::layout;
pub use charts_model::{ChartDataItem, LegendEntry, PieChartLayout, PieSlice, SliceLabel};
