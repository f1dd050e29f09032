use crate::models::{AnalyticsItem, CategoryTotal};
use std::collections::BTreeMap;

/// Turns per-category totals into a breakdown keyed by category, with each
/// category's share of the grand total as a percentage.
pub fn build_breakdown(rows: &[CategoryTotal]) -> BTreeMap<String, AnalyticsItem> {
    let grand_total: f64 = rows.iter().map(|row| row.total).sum();

    rows.iter()
        .map(|row| {
            let percentage = if grand_total != 0.0 {
                row.total / grand_total * 100.0
            } else {
                0.0
            };
            (
                row.category.clone(),
                AnalyticsItem {
                    total: row.total,
                    percentage,
                },
            )
        })
        .collect()
}
