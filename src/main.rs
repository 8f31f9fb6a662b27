mod analysis;
mod chart;
mod error;
mod output;
mod report;
mod spline;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use tracing::Level;

use analysis::{aggregate_weeks, normalize_weeks, proportions_to_percentages};
use chart::{ChartOptions, DEFAULT_HEIGHT, DEFAULT_WIDTH, format_week_date, week_end_date};
use error::ChartError;
use output::{
    get_display_name, print_average_row, print_error, print_header, print_legend,
    print_report_info, print_separator, print_warning, print_week_row,
};
use report::{Report, load_report};

#[derive(Parser)]
#[command(
    name = "temperchart",
    version,
    about = "Weekly listening mood chart generator (stacked cluster bands as SVG)",
    after_help = "Examples:
  temperchart report.json                          Render weekly_report.svg
  temperchart report.json chart.svg                Render to a specific path
  temperchart report.json --width 840 --height 600 Larger chart
  temperchart report.json --today 2024-06-30       Fix the date used for labels
  temperchart --no-color report.json               Disable colored output"
)]
struct Args {
    /// Report JSON (clusters, weekly artist plays, artist cluster scores)
    report: PathBuf,

    /// Output SVG path [default: weekly_<report name>.svg]
    output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_name = "PX")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_name = "PX")]
    height: u32,

    /// Cap week dates at this day instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn default_output_path(report_path: &Path) -> PathBuf {
    let stem = report_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    PathBuf::from(format!("weekly_{}.svg", stem))
}

/// Per-week table of cluster shares and plays
fn print_summary(report: &Report, display_name: &str, today: NaiveDate, quiet: bool) {
    let totals = aggregate_weeks(report);
    let proportions = normalize_weeks(&totals);

    if !quiet {
        print_report_info(display_name, report);
    }

    print_header(&report.clusters);
    print_separator(&report.clusters);

    let mut sum_pct = vec![0.0f64; report.clusters.len()];
    let mut sum_plays = 0u64;

    for (week_idx, (week, shares)) in totals.iter().zip(&proportions).enumerate() {
        let percentages = proportions_to_percentages(shares);
        for (total, pct) in sum_pct.iter_mut().zip(&percentages) {
            *total += pct;
        }
        sum_plays = sum_plays.saturating_add(week.plays);

        let carried_over = week.scores.iter().sum::<f64>() == 0.0;
        let label = format_week_date(week_end_date(report.start_date, week_idx, today));
        print_week_row(&label, &percentages, week.plays, carried_over);
    }

    print_separator(&report.clusters);

    let num_weeks = totals.len() as f64;
    let avg_pct: Vec<f64> = sum_pct.iter().map(|s| s / num_weeks).collect();
    print_average_row(&avg_pct, sum_plays as f64 / num_weeks);

    println!();
    println!("Weeks: {}, Total plays: {}", totals.len(), sum_plays);

    if sum_plays == 0 {
        print_warning("Report has no plays; the histogram will be empty");
    }

    if !quiet {
        println!();
        print_legend();
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_target(false)
        .with_ansi(!args.no_color)
        .init();

    // Validate image size
    if args.width as f64 <= chart::MARGIN_X || args.height as f64 <= chart::MARGIN_Y {
        print_error(&format!(
            "Image size must exceed the {}x{} label margins",
            chart::MARGIN_X,
            chart::MARGIN_Y
        ));
        std::process::exit(1);
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.report));

    // Validate output path
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        print_error(&format!("Directory does not exist: {}", parent.display()));
        std::process::exit(1);
    }

    let report = load_report(&args.report).unwrap_or_else(|e| {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    });

    let mut options = ChartOptions {
        width: args.width,
        height: args.height,
        ..ChartOptions::default()
    };
    if let Some(today) = args.today {
        options.today = today;
    }

    // Rendering validates the report, so the summary below can rely on it
    match chart::render(&report, &output_path, &options) {
        Ok(()) => {}
        Err(e @ ChartError::Validation(_)) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
        Err(e) => {
            print_error(&format!("Failed to save chart: {}", e));
            std::process::exit(1);
        }
    }

    let report_name = args.report.to_string_lossy();
    print_summary(
        &report,
        get_display_name(&report_name),
        options.today,
        args.quiet,
    );

    eprintln!("Chart saved to: {}", output_path.display());
}
