use crate::traits::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Courant number `c dt / dx`.
pub fn courant_number<T: Scalar>(wave_speed: T, dt: T, dx: T) -> T {
    wave_speed * dt / dx
}

/// Advisory stability check for the explicit schemes.
///
/// `|cfl| >= 1` is reported as unstable, but nothing prevents the run from going ahead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CflDiagnostic {
    Stable { cfl: f64 },
    Unstable { cfl: f64 },
}

impl CflDiagnostic {
    pub fn assess(wave_speed: f64, dt: f64, dx: f64) -> Self {
        Self::from_ratio(courant_number(wave_speed, dt, dx))
    }

    pub fn from_ratio(cfl: f64) -> Self {
        if cfl.abs() < 1.0 {
            CflDiagnostic::Stable { cfl }
        } else {
            CflDiagnostic::Unstable { cfl }
        }
    }

    pub fn cfl(&self) -> f64 {
        match *self {
            CflDiagnostic::Stable { cfl } | CflDiagnostic::Unstable { cfl } => cfl,
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, CflDiagnostic::Stable { .. })
    }

    /// Sends the diagnostic to the `log` facade: unstable ratios as warnings, stable ones as info.
    pub fn report(&self) {
        match self {
            CflDiagnostic::Stable { .. } => log::info!("{}", self),
            CflDiagnostic::Unstable { .. } => log::warn!("{}", self),
        }
    }
}

impl fmt::Display for CflDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.cfl() * 100.0).round() / 100.0;
        match self {
            CflDiagnostic::Stable { .. } => write!(f, "CFL = {}", rounded),
            CflDiagnostic::Unstable { .. } => write!(
                f,
                "CFL = {} is at or above 1; the explicit scheme may blow up",
                rounded
            ),
        }
    }
}
