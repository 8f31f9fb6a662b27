//! Translucent weekly play-count bars behind the bands

use super::Layout;

/// Fraction of the graph height used by the busiest week
const HEIGHT_SCALE: f64 = 0.9;
/// Horizontal gap between neighbouring bars
const BAR_GAP: i64 = 4;

/// Bar geometry in whole graph-space pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct PlayBar {
    pub(super) x: i64,
    pub(super) y: i64,
    pub(super) width: i64,
    pub(super) height: i64,
}

/// One vertically centred bar per week, height relative to the busiest week.
///
/// Bars are centred on their week's x position. With `max_plays == 0`
/// every bar is flat.
pub(super) fn play_bars(layout: &Layout, weekly_plays: &[u64], max_plays: u64) -> Vec<PlayBar> {
    let span = layout.week_span;
    let width = (span as i64 - BAR_GAP).max(0);

    weekly_plays
        .iter()
        .enumerate()
        .map(|(i, &plays)| {
            let height = if max_plays == 0 {
                0
            } else {
                (plays as f64 / max_plays as f64 * layout.graph_height * HEIGHT_SCALE) as i64
            };
            PlayBar {
                x: (span * i as f64 - span / 2.0) as i64 + BAR_GAP / 2,
                y: (layout.graph_height / 2.0 - height as f64 / 2.0) as i64,
                width,
                height,
            }
        })
        .collect()
}
