//! Cluster name labels and week date labels

use chrono::{Days, NaiveDate};

use super::colors::DATE_LABEL;
use super::{FONT_SIZE, GRAPH_BORDER, Layout, MARGIN_X};
use crate::report::{Cluster, Rgb};

/// Horizontal room one date label needs, in font sizes
const DATE_LABEL_SPACING: f64 = 0.175;

/// Right-aligned text anchored in document space
#[derive(Clone, Debug, PartialEq)]
pub(super) struct TextLabel {
    pub(super) text: String,
    pub(super) x: f64,
    pub(super) y: f64,
    pub(super) color: Rgb,
}

/// One label per cluster, level with the middle of its band at the first
/// week and at least one line below the previous label.
pub(super) fn cluster_labels(clusters: &[Cluster], boundaries: &[Vec<f64>]) -> Vec<TextLabel> {
    let mut last_y = 0.0f64;

    clusters
        .iter()
        .enumerate()
        .map(|(i, cluster)| {
            let lower = boundaries[i][0];
            let upper = if i > 0 { boundaries[i - 1][0] } else { 0.0 };
            let y = ((lower + upper) / 2.0).max(last_y + FONT_SIZE);
            last_y = y;

            TextLabel {
                text: cluster.name.clone(),
                x: MARGIN_X,
                y,
                color: cluster.color,
            }
        })
        .collect()
}

/// Draw a date label every n-th week so labels don't collide.
///
/// `1 + floor(required / available)` where available is the graph width per
/// week in font sizes.
pub(super) fn date_label_interval(graph_width: f64, num_weeks: usize) -> usize {
    let available = graph_width / (FONT_SIZE * num_weeks as f64);
    let required = FONT_SIZE * DATE_LABEL_SPACING;
    1 + (1.0 / (available / required)) as usize
}

/// Last day of the week starting `week_idx` weeks after `start`, capped at
/// `today`
pub(crate) fn week_end_date(start: NaiveDate, week_idx: usize, today: NaiveDate) -> NaiveDate {
    start
        .checked_add_days(Days::new(week_idx as u64 * 7 + 6))
        .unwrap_or(NaiveDate::MAX)
        .min(today)
}

pub(crate) fn format_week_date(date: NaiveDate) -> String {
    date.format("%b-%d").to_string()
}

/// Date labels under the x axis, counted back from the most recent week
pub(super) fn date_labels(layout: &Layout, start: NaiveDate, today: NaiveDate) -> Vec<TextLabel> {
    let num_weeks = layout.num_weeks;
    let interval = date_label_interval(layout.graph_width, num_weeks);
    let y = layout.graph_height + FONT_SIZE - GRAPH_BORDER;

    (0..num_weeks)
        .filter(|i| (num_weeks - i - 1) % interval == 0)
        .map(|i| TextLabel {
            text: format_week_date(week_end_date(start, i, today)),
            x: layout.week_x(i) + MARGIN_X,
            y,
            color: DATE_LABEL,
        })
        .collect()
}
