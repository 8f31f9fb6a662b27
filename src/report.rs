//! Weekly listening report: the input to the chart pipeline

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::error::{ChartError, ChartResult};

/// Color with channels in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    /// CSS `rgb(r, g, b)` with each channel truncated to 0-255
    pub fn to_css(self) -> String {
        let channel = |v: f64| (v * 255.0).clamp(0.0, 255.0) as u8;
        format!(
            "rgb({}, {}, {})",
            channel(self.0),
            channel(self.1),
            channel(self.2)
        )
    }
}

/// Named mood cluster; order in the report is stacking order
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Cluster {
    pub name: String,
    pub color: Rgb,
}

/// Play count of one artist within one week
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArtistPlays {
    pub name: String,
    pub plays: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Report {
    pub start_date: NaiveDate,
    pub clusters: Vec<Cluster>,
    /// One entry per week, chronological
    pub artist_weekly: Vec<Vec<ArtistPlays>>,
    /// Artist name -> affinity per cluster
    #[serde(deserialize_with = "deserialize_scores")]
    pub artist_profile_scores: HashMap<String, Vec<f64>>,
}

impl Report {
    pub fn num_weeks(&self) -> usize {
        self.artist_weekly.len()
    }

    /// Check the invariants the pipeline relies on.
    ///
    /// Score vectors shorter than the cluster list are accepted and read as
    /// zero-padded; longer ones are rejected, as are negative or non-finite
    /// scores (they would fold the stacked bands over each other).
    pub fn validate(&self) -> ChartResult<()> {
        if self.artist_weekly.is_empty() {
            return Err(ChartError::validation("report contains no weeks"));
        }
        if self.clusters.is_empty() {
            return Err(ChartError::validation("report contains no clusters"));
        }

        let num_clusters = self.clusters.len();
        let mut too_long: Vec<&str> = Vec::new();
        let mut out_of_range: Vec<&str> = Vec::new();
        for (artist, scores) in &self.artist_profile_scores {
            if scores.iter().any(|s| !s.is_finite() || *s < 0.0) {
                out_of_range.push(artist);
            }
            if scores.len() > num_clusters {
                too_long.push(artist);
            } else if scores.len() < num_clusters {
                tracing::warn!(
                    artist = %artist,
                    len = scores.len(),
                    clusters = num_clusters,
                    "score vector shorter than cluster list, padding with zeros"
                );
            }
        }

        if !out_of_range.is_empty() {
            out_of_range.sort_unstable();
            return Err(ChartError::validation(format!(
                "negative or non-finite scores for artist(s): {}",
                out_of_range.join(", ")
            )));
        }

        if !too_long.is_empty() {
            too_long.sort_unstable();
            return Err(ChartError::validation(format!(
                "score vector longer than {} clusters for artist(s): {}",
                num_clusters,
                too_long.join(", ")
            )));
        }

        Ok(())
    }
}

/// Upstream reports carry scores as a list of `{name, scores}` records;
/// hand-written ones tend to use a plain map. Accept both.
fn deserialize_scores<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct ArtistScores {
        name: String,
        scores: Vec<f64>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Map(HashMap<String, Vec<f64>>),
        List(Vec<ArtistScores>),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Map(map) => map,
        Repr::List(list) => list.into_iter().map(|a| (a.name, a.scores)).collect(),
    })
}

/// Read and parse a report JSON file
pub fn load_report(path: &Path) -> anyhow::Result<Report> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report {}", path.display()))?;
    let report: Report = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse report {}", path.display()))?;
    Ok(report)
}

/// Two clusters A/B, artists X=[0.6, 0.4] and Y=[0.2, 0.8], starting 2024-01-01
#[cfg(test)]
pub(crate) fn sample_report(weeks: &[&[(&str, u64)]]) -> Report {
    let mut scores = HashMap::new();
    scores.insert("X".to_string(), vec![0.6, 0.4]);
    scores.insert("Y".to_string(), vec![0.2, 0.8]);

    Report {
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        clusters: vec![
            Cluster {
                name: "A".to_string(),
                color: Rgb(1.0, 0.0, 0.0),
            },
            Cluster {
                name: "B".to_string(),
                color: Rgb(0.0, 0.0, 1.0),
            },
        ],
        artist_weekly: weeks
            .iter()
            .map(|week| {
                week.iter()
                    .map(|&(name, plays)| ArtistPlays {
                        name: name.to_string(),
                        plays,
                    })
                    .collect()
            })
            .collect(),
        artist_profile_scores: scores,
    }
}
