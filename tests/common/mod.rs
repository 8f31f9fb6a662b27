//! Common test utilities

use std::path::Path;

use serde_json::{Value, json};

/// Cluster definition as (name, [r, g, b])
pub type ClusterDef<'a> = (&'a str, [f64; 3]);

/// Build a report JSON value
pub fn report_json(
    start_date: &str,
    clusters: &[ClusterDef],
    weeks: &[&[(&str, u64)]],
    scores: &[(&str, &[f64])],
) -> Value {
    let clusters: Vec<Value> = clusters
        .iter()
        .map(|(name, color)| json!({ "name": name, "color": color }))
        .collect();
    let weeks: Vec<Value> = weeks
        .iter()
        .map(|week| {
            Value::Array(
                week.iter()
                    .map(|(name, plays)| json!({ "name": name, "plays": plays }))
                    .collect(),
            )
        })
        .collect();
    let scores: serde_json::Map<String, Value> = scores
        .iter()
        .map(|(name, s)| (name.to_string(), json!(s)))
        .collect();

    json!({
        "start_date": start_date,
        "clusters": clusters,
        "artist_weekly": weeks,
        "artist_profile_scores": scores,
    })
}

/// The two-cluster, two-week scenario: X=[0.6, 0.4], Y=[0.2, 0.8]
pub fn two_week_report() -> Value {
    report_json(
        "2024-01-01",
        &[("Calm", [0.2, 0.4, 0.8]), ("Energetic", [0.9, 0.3, 0.1])],
        &[&[("X", 10), ("Y", 5)], &[("X", 0), ("Y", 20)]],
        &[("X", &[0.6, 0.4]), ("Y", &[0.2, 0.8])],
    )
}

/// A longer report with `num_weeks` weeks of pseudo-random plays
pub fn generated_report(num_weeks: usize, seed: u64) -> Value {
    let mut rng = SimpleRng::new(seed);
    let artists = ["A1", "A2", "A3", "A4", "A5"];

    let plays: Vec<Vec<(&str, u64)>> = (0..num_weeks)
        .map(|_| {
            artists
                .iter()
                .map(|&a| (a, rng.next_u64() % 40))
                .collect()
        })
        .collect();
    let weeks: Vec<&[(&str, u64)]> = plays.iter().map(|w| w.as_slice()).collect();

    let score_vectors: Vec<Vec<f64>> = artists
        .iter()
        .map(|_| (0..3).map(|_| rng.next_f64()).collect())
        .collect();
    let scores: Vec<(&str, &[f64])> = artists
        .iter()
        .zip(&score_vectors)
        .map(|(&a, s)| (a, s.as_slice()))
        .collect();

    report_json(
        "2024-01-01",
        &[
            ("Mellow", [0.3, 0.5, 0.9]),
            ("Upbeat", [0.95, 0.7, 0.2]),
            ("Dark", [0.4, 0.1, 0.3]),
        ],
        &weeks,
        &scores,
    )
}

/// Simple pseudo-random number generator (xorshift)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        self.next_u64() as f64 / u64::MAX as f64
    }
}

/// Write a report JSON value to the given path
pub fn write_report(path: &Path, report: &Value) -> std::io::Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(report)?)
}
