//! Weekly mood chart rendering (stacked cluster bands + play histogram)

mod bands;
mod colors;
mod histogram;
mod labels;
mod svg;


pub(crate) use labels::{format_week_date, week_end_date};

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use kurbo::Point;

use crate::analysis::{aggregate_weeks, max_weekly_plays, normalize_weeks, stack_boundaries};
use crate::error::{ChartError, ChartResult};
use crate::report::Report;

/// Default image size
pub const DEFAULT_WIDTH: u32 = 420;
pub const DEFAULT_HEIGHT: u32 = 300;

/// Space reserved left of and below the graph for labels
pub(super) const MARGIN_X: f64 = 60.0;
pub(super) const MARGIN_Y: f64 = 35.0;
/// Horizontal inset of the graph from the label margin
pub(super) const GRAPH_BORDER: f64 = 2.0;
pub(super) const FONT_SIZE: f64 = 12.0;
/// Label rotation of -0.5 rad in degrees, converted with pi taken as 3.14159
/// so existing charts keep their exact transforms
pub(super) const LABEL_ROTATION_DEGREES: f64 = -28.647913954398888;

/// Rendering options for a single chart
#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    /// Date labels never run past this day
    pub today: NaiveDate,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            today: chrono::Local::now().date_naive(),
        }
    }
}

/// Pixel geometry of the graph area
#[derive(Clone, Copy, Debug)]
pub(super) struct Layout {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) graph_width: f64,
    pub(super) graph_height: f64,
    /// Horizontal distance between consecutive weeks
    pub(super) week_span: f64,
    pub(super) num_weeks: usize,
}

impl Layout {
    pub(super) fn new(options: &ChartOptions, num_weeks: usize) -> ChartResult<Self> {
        let graph_width = options.width as f64 - MARGIN_X;
        let graph_height = options.height as f64 - MARGIN_Y;
        if graph_width <= 0.0 || graph_height <= 0.0 {
            return Err(ChartError::validation(format!(
                "image size {}x{} leaves no room for the graph (margins {}x{})",
                options.width, options.height, MARGIN_X, MARGIN_Y
            )));
        }
        if num_weeks == 0 {
            return Err(ChartError::validation("report contains no weeks"));
        }

        // A lone week is stretched across the whole graph
        let week_span = if num_weeks > 1 {
            graph_width / (num_weeks - 1) as f64
        } else {
            graph_width
        };

        Ok(Self {
            width: options.width,
            height: options.height,
            graph_width,
            graph_height,
            week_span,
            num_weeks,
        })
    }

    /// Graph-space x of a week
    pub(super) fn week_x(&self, week_idx: usize) -> f64 {
        week_idx as f64 * self.week_span
    }

    /// Graph-space points of one boundary, one per week
    pub(super) fn boundary_points(&self, boundary: &[f64]) -> Vec<Point> {
        if let [y] = boundary {
            return vec![Point::new(0.0, *y), Point::new(self.graph_width, *y)];
        }
        boundary
            .iter()
            .enumerate()
            .map(|(i, &y)| Point::new(self.week_x(i), y))
            .collect()
    }
}

/// Build the chart document for a report
#[tracing::instrument(skip_all, fields(weeks = report.num_weeks(), clusters = report.clusters.len()))]
pub fn render_to_string(report: &Report, options: &ChartOptions) -> ChartResult<String> {
    report.validate()?;
    let layout = Layout::new(options, report.num_weeks())?;

    let totals = aggregate_weeks(report);
    let proportions = normalize_weeks(&totals);
    let boundaries = stack_boundaries(&proportions, report.clusters.len(), layout.graph_height);
    let max_plays = max_weekly_plays(&totals);
    tracing::debug!(max_plays, "weekly totals computed");

    let weekly_plays: Vec<u64> = totals.iter().map(|w| w.plays).collect();
    let fills = bands::band_fills(&layout, &report.clusters, &boundaries);
    let bars = histogram::play_bars(&layout, &weekly_plays, max_plays);
    let strokes = bands::band_strokes(&layout, &boundaries);
    let cluster_labels = labels::cluster_labels(&report.clusters, &boundaries);
    let date_labels = labels::date_labels(&layout, report.start_date, options.today);

    let mut doc = svg::SvgDocument::new(&layout);
    doc.begin_graph();
    for fill in &fills {
        doc.filled_path(fill);
    }
    for bar in &bars {
        doc.play_bar(bar);
    }
    for stroke in &strokes {
        doc.stroke_path(stroke);
    }
    doc.end_graph();
    for label in cluster_labels.iter().chain(&date_labels) {
        doc.text(label);
    }

    Ok(doc.finish())
}

/// Render a report to an SVG file.
///
/// The file is written to a temporary sibling and moved over `output_path`,
/// so a failed write leaves no partial chart behind.
pub fn render(report: &Report, output_path: &Path, options: &ChartOptions) -> ChartResult<()> {
    let document = render_to_string(report, options)?;
    write_atomic(output_path, document.as_bytes())?;
    tracing::debug!(path = %output_path.display(), bytes = document.len(), "chart written");
    Ok(())
}

fn write_atomic(path: &Path, contents: &[u8]) -> ChartResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
