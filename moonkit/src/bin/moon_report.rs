//! Print moon snapshots for a range of dates.
//!
//! Usage: `moon-report [CONFIG]`. Without an argument the config is looked up
//! in the default locations (see `ReportConfig::from_default_location`).

use std::env;

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use moonkit_rust::config::{OutputFormat, ReportConfig};
use moonkit_rust::services::{compute_moon_snapshot, DateValidator, LunarCalendar};
use moonkit_rust::MoonSnapshot;

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => ReportConfig::from_file(&path)
            .with_context(|| format!("Failed to load report config from {}", path))?,
        None => ReportConfig::from_default_location().context("Failed to load report config")?,
    };
    config.validate().context("Invalid report config")?;

    let start = config.report.start;
    let validation = DateValidator::validate(&start);
    for warning in &validation.warnings {
        warn!("{}: {}", start, warning);
    }
    if !validation.is_valid {
        if config.output.strict {
            anyhow::bail!("Invalid start date {}: {}", start, validation.errors.join("; "));
        }
        for error in &validation.errors {
            warn!("{}: {}", start, error);
        }
        warn!("Start date does not exist, reporting only that date");
        let snapshot = compute_moon_snapshot(&start);
        match config.output.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
            OutputFormat::Table => {
                print_header();
                print_row(&snapshot);
            }
        }
        return Ok(());
    }

    info!(
        "Building lunar calendar from {} ({} days, step {})",
        start, config.report.days, config.report.step_days
    );
    let calendar = LunarCalendar::build(&start, config.report.days, config.report.step_days)
        .context("Failed to build lunar calendar")?;

    match config.output.format {
        OutputFormat::Json => print_json(&calendar, &config)?,
        OutputFormat::Table => print_table(&calendar, config.output.summary),
    }

    Ok(())
}

fn print_json(calendar: &LunarCalendar, config: &ReportConfig) -> Result<()> {
    let json = if config.output.summary {
        let report = serde_json::json!({
            "entries": calendar.entries(),
            "transitions": calendar.transitions(),
            "summary": calendar.summary(),
        });
        if config.output.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        }
    } else {
        calendar.to_json(config.output.pretty)?
    };

    println!("{}", json);
    Ok(())
}

fn print_header() {
    println!(
        "{:<12} {:>7} {:<16} {:>9} {:>9} {:>10}",
        "date", "age", "phase", "distance", "latitude", "longitude"
    );
}

fn print_table(calendar: &LunarCalendar, with_summary: bool) {
    print_header();
    for snapshot in calendar.entries() {
        print_row(snapshot);
    }

    if !with_summary {
        return;
    }

    println!();
    for transition in calendar.transitions() {
        println!("{}  {} -> {}", transition.date, transition.from, transition.to);
    }

    let summary = calendar.summary();
    println!();
    for count in &summary.phase_counts {
        println!("{:<16} {:>5}", count.phase, count.days);
    }
    if let (Some(nearest), Some(farthest)) = (summary.nearest, summary.farthest) {
        println!(
            "nearest  {} at {:.2} Earth radii",
            nearest.date,
            nearest.distance_earth_radii()
        );
        println!(
            "farthest {} at {:.2} Earth radii",
            farthest.date,
            farthest.distance_earth_radii()
        );
    }
}

fn print_row(snapshot: &MoonSnapshot) {
    println!(
        "{:<12} {:>7.2} {:<16} {:>9.2} {:>9.2} {:>10.2}",
        snapshot.date.to_string(),
        snapshot.age_days(),
        snapshot.phase.name(),
        snapshot.distance_earth_radii(),
        snapshot.latitude_degrees(),
        snapshot.longitude_degrees()
    );
}
