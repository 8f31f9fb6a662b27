//! Per-week reduction of artist plays into cluster score totals

use crate::report::Report;

/// Score totals and play count for one week
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WeeklyTotals {
    /// One entry per cluster: sum of `plays * score` over the week's artists
    pub(crate) scores: Vec<f64>,
    pub(crate) plays: u64,
}

/// Weight every artist's score vector by its plays and sum per week.
///
/// Unknown artists add nothing to the score vector but still count toward
/// the week's plays. Short score vectors read as zero-padded. Play totals
/// saturate at `u64::MAX`.
pub(crate) fn aggregate_weeks(report: &Report) -> Vec<WeeklyTotals> {
    let num_clusters = report.clusters.len();

    report
        .artist_weekly
        .iter()
        .map(|week| {
            let mut scores = vec![0.0f64; num_clusters];
            let mut plays = 0u64;

            for artist in week {
                plays = plays.saturating_add(artist.plays);
                if let Some(artist_scores) = report.artist_profile_scores.get(&artist.name) {
                    for (total, score) in scores.iter_mut().zip(artist_scores) {
                        *total += score * artist.plays as f64;
                    }
                }
            }

            WeeklyTotals { scores, plays }
        })
        .collect()
}

/// Largest weekly play count (0 for an all-silent report)
pub(crate) fn max_weekly_plays(totals: &[WeeklyTotals]) -> u64 {
    totals.iter().map(|w| w.plays).max().unwrap_or(0)
}
