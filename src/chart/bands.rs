//! Closed band regions and separator lines between stacked clusters

use std::fmt::Write;

use kurbo::Point;

use super::Layout;
use crate::report::{Cluster, Rgb};
use crate::spline::{monotonic_spline_commands, write_commands};

/// SVG path data with its fill color
#[derive(Clone, Debug, PartialEq)]
pub(super) struct FilledPath {
    pub(super) data: String,
    pub(super) color: Rgb,
}

fn move_to(out: &mut String, point: Point) {
    let _ = write!(out, "M{},{}", point.x, point.y);
}

/// One closed region per cluster.
///
/// Each region runs forward along the cluster's own boundary, across the
/// right edge, and back along the boundary above it (the top edge for the
/// first cluster).
pub(super) fn band_fills(
    layout: &Layout,
    clusters: &[Cluster],
    boundaries: &[Vec<f64>],
) -> Vec<FilledPath> {
    let mut previous = vec![Point::ORIGIN, Point::new(layout.graph_width, 0.0)];
    let mut fills = Vec::with_capacity(clusters.len());

    for (cluster, boundary) in clusters.iter().zip(boundaries) {
        let points = layout.boundary_points(boundary);
        let previous_end = previous[previous.len() - 1];

        let mut data = String::new();
        move_to(&mut data, points[0]);
        write_commands(&mut data, &monotonic_spline_commands(&points));
        let _ = write!(data, "L{},{}", layout.graph_width, previous_end.y);
        let reversed: Vec<Point> = previous.iter().rev().copied().collect();
        write_commands(&mut data, &monotonic_spline_commands(&reversed));
        data.push('Z');

        fills.push(FilledPath {
            data,
            color: cluster.color,
        });
        previous = points;
    }

    fills
}

/// Separator line along every boundary except the fixed bottom one
pub(super) fn band_strokes(layout: &Layout, boundaries: &[Vec<f64>]) -> Vec<String> {
    let interior = &boundaries[..boundaries.len().saturating_sub(1)];

    interior
        .iter()
        .map(|boundary| {
            let points = layout.boundary_points(boundary);
            let mut data = String::new();
            move_to(&mut data, points[0]);
            write_commands(&mut data, &monotonic_spline_commands(&points));
            data
        })
        .collect()
}
