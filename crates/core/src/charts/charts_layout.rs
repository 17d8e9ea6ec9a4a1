//! Pie chart layout: percentages to angles to label coordinates.

use crate::charts::charts_model::{
    ChartDataItem, LegendEntry, PieChartLayout, PieSlice, SliceLabel,
};
use crate::constants::{
    CHART_START_ANGLE_DEG, DONUT_HOLE_RATIO, LABEL_MIN_PERCENT, LABEL_RADIUS_RATIO, PERCENT_BUDGET,
};

/// Lay out `data` as a pie chart in a square of side `size`.
///
/// Slices start at the top and proceed clockwise, contiguous in item order.
/// Each slice spans `percentage / 100 × 360` degrees; when the data sums
/// past the budget, later slices are clamped so the pie never wraps past
/// the top. Labels sit at the slice's mid-angle and are omitted for slices
/// below the visibility threshold.
pub fn layout(data: &[ChartDataItem], size: f64) -> PieChartLayout {
    let total_percent: f64 = data.iter().map(|item| item.percentage).sum();
    let radius = size / 2.0;
    let center = size / 2.0;
    let label_radius = radius * LABEL_RADIUS_RATIO;

    let mut slices = Vec::with_capacity(data.len());
    let mut consumed = 0.0;

    for item in data {
        let available = (PERCENT_BUDGET - consumed).max(0.0);
        let share = item.percentage.min(available);

        let start_angle_deg = CHART_START_ANGLE_DEG + (consumed / PERCENT_BUDGET) * 360.0;
        let end_angle_deg = start_angle_deg + (share / PERCENT_BUDGET) * 360.0;

        let label = if share >= LABEL_MIN_PERCENT {
            let mid_rad = ((start_angle_deg + end_angle_deg) / 2.0).to_radians();
            Some(SliceLabel {
                x: center + label_radius * mid_rad.cos(),
                y: center + label_radius * mid_rad.sin(),
            })
        } else {
            None
        };

        slices.push(PieSlice {
            title: item.title.clone(),
            percentage: item.percentage,
            color: item.color,
            start_angle_deg,
            end_angle_deg,
            label,
        });

        consumed += share;
    }

    let remainder_percent = (PERCENT_BUDGET - total_percent).max(0.0);

    let mut legend: Vec<LegendEntry> = data
        .iter()
        .map(|item| LegendEntry {
            label: item.title.clone(),
            percentage: item.percentage,
            color: Some(item.color),
        })
        .collect();
    if !data.is_empty() && remainder_percent > 0.0 {
        legend.push(LegendEntry {
            label: "Remaining".to_string(),
            percentage: remainder_percent,
            color: None,
        });
    }

    PieChartLayout {
        size,
        inner_radius: radius * DONUT_HOLE_RATIO,
        total_percent,
        remainder_percent,
        slices,
        legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::PALETTE;

    const SIZE: f64 = 240.0;

    fn data(entries: &[(&str, f64)]) -> Vec<ChartDataItem> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (title, percentage))| ChartDataItem {
                title: title.to_string(),
                percentage: *percentage,
                color: PALETTE[i % PALETTE.len()],
            })
            .collect()
    }

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_empty_data_has_no_slices() {
        let chart = layout(&[], SIZE);
        assert!(chart.slices.is_empty());
        assert!(chart.legend.is_empty());
        assert_approx(chart.total_percent, 0.0);
        assert_approx(chart.remainder_percent, 100.0);
    }

    #[test]
    fn test_slices_are_contiguous_from_the_top() {
        let chart = layout(&data(&[("A", 25.0), ("B", 25.0)]), SIZE);
        assert_approx(chart.slices[0].start_angle_deg, -90.0);
        assert_approx(chart.slices[0].end_angle_deg, 0.0);
        assert_approx(chart.slices[1].start_angle_deg, 0.0);
        assert_approx(chart.slices[1].end_angle_deg, 90.0);
    }

    #[test]
    fn test_label_sits_at_the_mid_angle() {
        // One 50% slice: -90°..90°, mid-angle 0° (pointing right).
        let chart = layout(&data(&[("Half", 50.0)]), SIZE);
        let label = chart.slices[0].label.unwrap();
        assert_approx(label.x, 120.0 + 120.0 * 0.8);
        assert_approx(label.y, 120.0);
    }

    #[test]
    fn test_full_circle_label_points_down() {
        // A single 100% slice: -90°..270°, mid-angle 90° (pointing down).
        let chart = layout(&data(&[("All", 100.0)]), SIZE);
        assert_approx(chart.slices[0].end_angle_deg, 270.0);
        let label = chart.slices[0].label.unwrap();
        assert_approx(label.x, 120.0);
        assert_approx(label.y, 120.0 + 120.0 * 0.8);
        assert_approx(chart.remainder_percent, 0.0);
    }

    #[test]
    fn test_thin_slices_get_no_label() {
        let chart = layout(&data(&[("Thin", 2.9), ("Visible", 3.0)]), SIZE);
        assert!(chart.slices[0].label.is_none());
        assert!(chart.slices[1].label.is_some());
    }

    #[test]
    fn test_overflow_is_clamped_at_the_top() {
        // 80 + 40 sums past the budget; the second slice is clamped to the
        // remaining 20% and the pie ends exactly at the top.
        let chart = layout(&data(&[("A", 80.0), ("B", 40.0)]), SIZE);
        assert_approx(chart.slices[1].end_angle_deg, 270.0);
        assert_approx(chart.total_percent, 120.0);
        assert_approx(chart.remainder_percent, 0.0);
    }

    #[test]
    fn test_legend_includes_remaining_entry() {
        let chart = layout(&data(&[("A", 30.0), ("B", 25.0)]), SIZE);
        assert_eq!(chart.legend.len(), 3);
        let remaining = chart.legend.last().unwrap();
        assert_eq!(remaining.label, "Remaining");
        assert_approx(remaining.percentage, 45.0);
        assert!(remaining.color.is_none());

        let full = layout(&data(&[("A", 100.0)]), SIZE);
        assert_eq!(full.legend.len(), 1);
    }

    #[test]
    fn test_donut_hole_ratio() {
        let chart = layout(&data(&[("A", 10.0)]), SIZE);
        assert_approx(chart.inner_radius, 120.0 * 0.6);
    }
}
