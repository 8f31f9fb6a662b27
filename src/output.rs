use colored::*;

use crate::report::{Cluster, Report, Rgb};

/// Width of the leading week column
const LABEL_WIDTH: usize = 8;
/// Cluster names are cut to fit their column
const COLUMN_WIDTH: usize = 6;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

fn style_cluster(name: &str, color: Rgb) -> ColoredString {
    let channel = |v: f64| (v * 255.0).clamp(0.0, 255.0) as u8;
    name.truecolor(channel(color.0), channel(color.1), channel(color.2))
        .bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

pub(crate) fn print_report_info(display_name: &str, report: &Report) {
    println!("Report: {}", display_name);
    println!(
        "Start: {}, Weeks: {}, Clusters: {}",
        report.start_date,
        report.num_weeks(),
        report.clusters.len()
    );
    println!();
}

fn short_name(name: &str) -> String {
    name.chars().take(COLUMN_WIDTH).collect()
}

pub(crate) fn print_header(clusters: &[Cluster]) {
    print!("{:<width$}", "WEEK", width = LABEL_WIDTH);
    for cluster in clusters {
        let name = format!("{:>width$}", short_name(&cluster.name), width = COLUMN_WIDTH);
        print!(" {}", style_cluster(&name, cluster.color));
    }
    println!(" {:>8}", "PLAYS");
}

pub(crate) fn print_separator(clusters: &[Cluster]) {
    print!("{}", "-".repeat(LABEL_WIDTH));
    for _ in clusters {
        print!("{}", "-".repeat(COLUMN_WIDTH + 1));
    }
    println!("{}", "-".repeat(9));
}

/// One week's cluster shares (%) and total plays. Carried-over weeks (no
/// scored plays of their own) are dimmed.
pub(crate) fn print_week_row(label: &str, percentages: &[f64], plays: u64, carried_over: bool) {
    let label = format!("{:<width$}", label, width = LABEL_WIDTH);
    if carried_over {
        print!("{}", label.dimmed());
    } else {
        print!("{}", label);
    }
    for pct in percentages {
        print!(" {:>width$.1}", pct, width = COLUMN_WIDTH);
    }
    println!(" {:>8}", plays);
}

pub(crate) fn print_average_row(percentages: &[f64], mean_plays: f64) {
    print!(
        "{}",
        style_label(&format!("{:<width$}", "AVG", width = LABEL_WIDTH))
    );
    for pct in percentages {
        if pct.is_finite() {
            print!(" {:>width$.1}", pct, width = COLUMN_WIDTH);
        } else {
            print!(" {:>width$}", "-", width = COLUMN_WIDTH);
        }
    }
    println!(" {:>8.1}", mean_plays);
}

pub(crate) fn print_legend() {
    println!("Values: share of each week's listening per mood cluster (%)");
    println!("PLAYS: total plays in the week (drawn as the background histogram)");
    println!("Dimmed weeks have no scored plays and repeat the previous week's shares");
}
