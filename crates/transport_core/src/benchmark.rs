//! Timing harness comparing the four scheme variants on one scenario.
//!
//! The caller supplies the settings and the clock; the report carries every field and elapsed
//! time needed to draw the solution and a timing chart.

use crate::cfl::CflDiagnostic;
use crate::scheme::Scheme;
use crate::settings::TransportSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Source of elapsed time in seconds. Only differences between readings are used.
pub trait Clock {
    fn now_seconds(&mut self) -> f64;
}

/// Monotonic wall clock backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_seconds(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkMode {
    /// Every scheme starts from the initial pulse.
    #[default]
    Independent,
    /// Each scheme continues from the field the previous scheme left behind.
    Chained,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeRun {
    pub scheme: Scheme,
    pub label: String,
    pub seconds: f64,
    pub field: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub settings: TransportSettings,
    pub mode: BenchmarkMode,
    pub grid: Vec<f64>,
    pub initial_field: Vec<f64>,
    pub cfl: CflDiagnostic,
    pub runs: Vec<SchemeRun>,
}

impl BenchmarkReport {
    /// `(label, seconds)` pairs in run order.
    pub fn timings(&self) -> Vec<(&str, f64)> {
        self.runs
            .iter()
            .map(|run| (run.label.as_str(), run.seconds))
            .collect()
    }

    pub fn run(&self, scheme: Scheme) -> Option<&SchemeRun> {
        self.runs.iter().find(|run| run.scheme == scheme)
    }
}

pub fn run_benchmark(
    settings: &TransportSettings,
    mode: BenchmarkMode,
    clock: &mut impl Clock,
) -> Result<BenchmarkReport> {
    let grid = settings.grid().context("Failed to build the transport grid.")?;
    let pulse = settings
        .initial_condition(&grid)
        .context("Failed to sample the initial pulse.")?;

    let cfl = settings.cfl();
    cfl.report();

    let mut runs = Vec::with_capacity(Scheme::ALL.len());
    let mut carried = pulse.field.clone();

    for scheme in Scheme::ALL {
        let start_field = match mode {
            BenchmarkMode::Independent => &pulse.field,
            BenchmarkMode::Chained => &carried,
        };

        let start = clock.now_seconds();
        let field = settings
            .integrate_unreported(start_field, scheme)
            .with_context(|| format!("Integration failed for scheme {}.", scheme.name()))?;
        let seconds = clock.now_seconds() - start;

        log::debug!("{} finished in {:.6} s", scheme.label(), seconds);

        if mode == BenchmarkMode::Chained {
            carried.copy_from_slice(&field);
        }
        runs.push(SchemeRun {
            scheme,
            label: scheme.label().to_string(),
            seconds,
            field,
        });
    }

    Ok(BenchmarkReport {
        settings: *settings,
        mode,
        grid: grid.points().to_vec(),
        initial_field: pulse.field,
        cfl,
        runs,
    })
}
