use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Value, json};

const CLUSTERS: [(&str, [f64; 3]); 4] = [
    ("Mellow", [0.30, 0.50, 0.90]),
    ("Upbeat", [0.95, 0.70, 0.20]),
    ("Dark", [0.40, 0.10, 0.30]),
    ("Acoustic", [0.45, 0.75, 0.40]),
];

/// Xorshift, so fixtures are identical on every run
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        self.next_u64() as f64 / u64::MAX as f64
    }
}

fn write_report(path: &Path, report: &Value) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

fn clusters(count: usize) -> Vec<Value> {
    CLUSTERS[..count]
        .iter()
        .map(|(name, color)| json!({ "name": name, "color": color }))
        .collect()
}

fn random_report(weeks: usize, artists: usize, num_clusters: usize, seed: u64) -> Value {
    let mut rng = Rng(seed);
    let names: Vec<String> = (1..=artists).map(|i| format!("Artist {}", i)).collect();

    let scores: serde_json::Map<String, Value> = names
        .iter()
        .map(|name| {
            let vector: Vec<f64> = (0..num_clusters).map(|_| rng.next_f64()).collect();
            (name.clone(), json!(vector))
        })
        .collect();

    let artist_weekly: Vec<Value> = (0..weeks)
        .map(|_| {
            names
                .iter()
                // Roughly a third of artists are silent in any given week
                .filter_map(|name| match rng.next_u64() % 60 {
                    0..20 => None,
                    plays => Some(json!({ "name": name, "plays": plays - 20 })),
                })
                .collect()
        })
        .collect();

    json!({
        "start_date": "2024-01-01",
        "clusters": clusters(num_clusters),
        "artist_weekly": artist_weekly,
        "artist_profile_scores": scores,
    })
}

/// Listening stops for a few weeks mid-year
fn gap_report() -> Value {
    let week = |plays: u64| json!([{ "name": "A", "plays": plays }, { "name": "B", "plays": 3 }]);
    let silent = json!([]);
    json!({
        "start_date": "2024-03-04",
        "clusters": clusters(2),
        "artist_weekly": [week(12), week(4), silent, silent, week(20), week(9)],
        "artist_profile_scores": [
            { "name": "A", "scores": [0.9, 0.1] },
            { "name": "B", "scores": [0.3, 0.7] }
        ],
    })
}

fn main() -> std::io::Result<()> {
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    // Full year, three clusters
    write_report(&dir.join("year.json"), &random_report(52, 12, 3, 42))?;

    // One month, four clusters
    write_report(&dir.join("month.json"), &random_report(4, 6, 4, 7))?;

    // A single week (drawn across the whole graph)
    write_report(&dir.join("single_week.json"), &random_report(1, 3, 2, 3))?;

    // Silent weeks that repeat the previous shares, list-form scores
    write_report(&dir.join("gap.json"), &gap_report())?;

    println!("Generated: year.json, month.json, single_week.json, gap.json");
    Ok(())
}
