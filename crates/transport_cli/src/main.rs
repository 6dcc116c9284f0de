//! Runs the reference transport scenario with all four schemes and reports their timings.

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn, Level};
use transport_core::benchmark::{run_benchmark, BenchmarkMode, BenchmarkReport, SystemClock};
use transport_core::settings::TransportSettings;

const BAR_WIDTH: usize = 40;

fn main() -> Result<()> {
    // Also installs the `log` bridge, so warnings from transport_core show up here.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to install log subscriber: {err}"))?;

    let settings = TransportSettings::default();
    info!(
        "Domain length {}, {} points, {} steps of dt = {}, c = {}, g = {}",
        settings.length,
        settings.points,
        settings.steps,
        settings.dt,
        settings.wave_speed,
        settings.variance
    );

    let report = run_benchmark(&settings, BenchmarkMode::Independent, &mut SystemClock::new())
        .context("Benchmark run failed.")?;

    for run in &report.runs {
        if run.field.iter().any(|v| !v.is_finite()) {
            warn!("{} produced non-finite values", run.label);
        }
        let peak = run.field.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        info!("{:<24} {:>10.6} s   peak {:.4}", run.label, run.seconds, peak);
    }

    for line in timing_chart(&report) {
        println!("{line}");
    }

    Ok(())
}

/// Horizontal bar chart of run times, one line per scheme, scaled to the slowest run.
fn timing_chart(report: &BenchmarkReport) -> Vec<String> {
    let slowest = report
        .runs
        .iter()
        .map(|run| run.seconds)
        .fold(0.0_f64, f64::max);

    report
        .runs
        .iter()
        .map(|run| {
            let width = if slowest > 0.0 {
                ((run.seconds / slowest) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!(
                "{:<24} |{:<bar$}| {:.6} s",
                run.label,
                "#".repeat(width),
                run.seconds,
                bar = BAR_WIDTH
            )
        })
        .collect()
}
