//! Conversion of weekly score totals into proportions

use super::aggregate::WeeklyTotals;

/// Normalize each week's scores so they sum to 1.
///
/// A week whose scores sum to exactly zero takes the previous week's
/// normalized proportions; a zero first week becomes uniform.
pub(crate) fn normalize_weeks(totals: &[WeeklyTotals]) -> Vec<Vec<f64>> {
    let mut normalized: Vec<Vec<f64>> = Vec::with_capacity(totals.len());

    for (week_idx, week) in totals.iter().enumerate() {
        let sum: f64 = week.scores.iter().sum();

        let proportions = if sum == 0.0 {
            match normalized.last() {
                Some(previous) => {
                    tracing::debug!(week = week_idx, "zero-sum week, reusing previous week");
                    previous.clone()
                }
                None => {
                    tracing::debug!(week = week_idx, "zero-sum first week, using uniform");
                    let n = week.scores.len();
                    vec![1.0 / n as f64; n]
                }
            }
        } else {
            week.scores.iter().map(|s| s / sum).collect()
        };

        normalized.push(proportions);
    }

    normalized
}

/// Convert proportions to percentages
pub(crate) fn proportions_to_percentages(proportions: &[f64]) -> Vec<f64> {
    proportions.iter().map(|p| p * 100.0).collect()
}
