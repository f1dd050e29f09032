use crate::models::AnalyticsItem;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub category: String,
    pub total: f64,
    pub percentage: f64,
}

impl ReportRow {
    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total)
    }

    pub fn percentage_display(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}

/// Category breakdown ordered for display, largest share first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyticsReport {
    pub rows: Vec<ReportRow>,
}

impl AnalyticsReport {
    pub fn from_breakdown(breakdown: &BTreeMap<String, AnalyticsItem>) -> Self {
        let mut rows: Vec<ReportRow> = breakdown
            .iter()
            .map(|(category, item)| ReportRow {
                category: category.clone(),
                total: item.total,
                percentage: item.percentage,
            })
            .collect();
        // Stable sort keeps ties in category order.
        rows.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bar length in percent of the chart width, scaled so the largest
    /// share fills the chart.
    pub fn bar_width(&self, row: &ReportRow) -> f64 {
        let max = self
            .rows
            .iter()
            .map(|row| row.percentage)
            .fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return 0.0;
        }
        (row.percentage / max * 100.0).clamp(0.0, 100.0)
    }
}
