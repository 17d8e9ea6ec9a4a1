//! Pie chart geometry models.
//!
//! Angles are in degrees in screen coordinates: 0° points right, positive
//! angles turn clockwise (y grows downward), so the top of the circle
//! is −90°.

use serde::{Deserialize, Serialize};

use crate::colors::Color;

/// One incomplete item's contribution to the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataItem {
    pub title: String,
    pub percentage: f64,
    pub color: Color,
}

/// Label anchor in chart coordinates (origin at the top-left of the
/// bounding square).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SliceLabel {
    pub x: f64,
    pub y: f64,
}

/// A laid-out slice. `label` is absent for slices below the visibility
/// threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub title: String,
    pub percentage: f64,
    pub color: Color,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub label: Option<SliceLabel>,
}

/// Legend row. `color` is absent for the trailing "remaining" entry,
/// which renders in the neutral background color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub label: String,
    pub percentage: f64,
    pub color: Option<Color>,
}

/// Complete layout for one render of the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PieChartLayout {
    pub size: f64,
    /// Radius of the donut hole; the center shows the total used percent.
    pub inner_radius: f64,
    /// Raw sum of the data percentages (what the center label displays).
    pub total_percent: f64,
    /// Unallocated share of the budget, zero when the data fills it.
    pub remainder_percent: f64,
    pub slices: Vec<PieSlice>,
    pub legend: Vec<LegendEntry>,
}
