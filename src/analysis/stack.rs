//! Stacked-area layout: cumulative proportions in pixel space

/// Cumulative band boundaries for every cluster.
///
/// Returns `num_clusters` sequences indexed `[cluster][week]`. Boundary `i`
/// is `graph_height` times the cumulative proportion through cluster `i`;
/// the last boundary is pinned to `graph_height`.
pub(crate) fn stack_boundaries(
    proportions: &[Vec<f64>],
    num_clusters: usize,
    graph_height: f64,
) -> Vec<Vec<f64>> {
    let num_weeks = proportions.len();
    let mut boundaries: Vec<Vec<f64>> = Vec::with_capacity(num_clusters);
    let mut cumulative = vec![0.0f64; num_weeks];

    for cluster_idx in 0..num_clusters.saturating_sub(1) {
        for (total, week) in cumulative.iter_mut().zip(proportions) {
            *total += week[cluster_idx];
        }
        // Rounding can push the running sum a hair past 1
        boundaries.push(
            cumulative
                .iter()
                .map(|c| (c * graph_height).min(graph_height))
                .collect(),
        );
    }

    boundaries.push(vec![graph_height; num_weeks]);
    boundaries
}
