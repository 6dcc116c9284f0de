use crate::cfl::CflDiagnostic;
use crate::error::{TransportError, MIN_GRID_POINTS};
use crate::grid::Grid;
use crate::initial::{gaussian_pulse, GaussianPulse};
use crate::scheme::Scheme;
use crate::stepper::{integrate, integrate_unreported};
use serde::{Deserialize, Serialize};

/// Parameters of one transport run: a Gaussian pulse advected across a periodic domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Domain length `L`.
    pub length: f64,
    /// Number of grid points, endpoints included.
    pub points: usize,
    /// Number of timesteps.
    pub steps: usize,
    pub dt: f64,
    pub wave_speed: f64,
    /// Gaussian width parameter `g`.
    pub variance: f64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            length: 2.0,
            points: 600,
            steps: 200,
            dt: 0.0025,
            wave_speed: 1.0,
            variance: 0.01,
        }
    }
}

impl TransportSettings {
    pub fn validate(&self) -> Result<(), TransportError> {
        if self.points < MIN_GRID_POINTS {
            return Err(TransportError::too_few_points(self.points));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(TransportError::parameter(
                "length",
                format!("must be positive and finite, got {}.", self.length),
            ));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(TransportError::parameter(
                "dt",
                format!("must be positive and finite, got {}.", self.dt),
            ));
        }
        if !self.wave_speed.is_finite() {
            return Err(TransportError::parameter(
                "wave_speed",
                format!("must be finite, got {}.", self.wave_speed),
            ));
        }
        if !self.variance.is_finite() || self.variance <= 0.0 {
            return Err(TransportError::parameter(
                "variance",
                format!("must be positive and finite, got {}.", self.variance),
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> Result<Grid<f64>, TransportError> {
        self.validate()?;
        Grid::uniform(self.length, self.points)
    }

    pub fn initial_condition(&self, grid: &Grid<f64>) -> Result<GaussianPulse<f64>, TransportError> {
        gaussian_pulse(grid.points(), self.length, self.variance)
    }

    pub fn spacing(&self) -> f64 {
        self.length / self.points.saturating_sub(1) as f64
    }

    pub fn cfl(&self) -> CflDiagnostic {
        CflDiagnostic::assess(self.wave_speed, self.dt, self.spacing())
    }

    /// Runs `scheme` for `steps` timesteps from `field`.
    pub fn integrate(&self, field: &[f64], scheme: Scheme) -> Result<Vec<f64>, TransportError> {
        self.check_field(field)?;
        integrate(
            field,
            self.spacing(),
            self.wave_speed,
            self.dt,
            self.steps,
            scheme,
        )
    }

    /// Same as `integrate`, leaving the CFL report to the caller.
    pub(crate) fn integrate_unreported(
        &self,
        field: &[f64],
        scheme: Scheme,
    ) -> Result<Vec<f64>, TransportError> {
        self.check_field(field)?;
        integrate_unreported(
            field,
            self.spacing(),
            self.wave_speed,
            self.dt,
            self.steps,
            scheme,
        )
    }

    fn check_field(&self, field: &[f64]) -> Result<(), TransportError> {
        self.validate()?;
        if field.len() != self.points {
            return Err(TransportError::InvalidGrid(format!(
                "field has {} values but the grid has {} points.",
                field.len(),
                self.points
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_reference_scenario() {
        let settings = TransportSettings::default();
        settings.validate().expect("defaults are valid");
        let grid = settings.grid().expect("grid");
        assert_eq!(grid.len(), 600);
        assert!((settings.spacing() - 2.0 / 599.0).abs() < 1e-15);
        assert!(settings.cfl().is_stable());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: TransportSettings =
            serde_json::from_str(r#"{ "points": 101, "wave_speed": -0.5 }"#).expect("json");
        assert_eq!(settings.points, 101);
        assert_eq!(settings.wave_speed, -0.5);
        assert_eq!(settings.steps, 200);
        assert_eq!(settings.dt, 0.0025);
    }

    #[test]
    fn validate_rejects_each_bad_field() {
        let base = TransportSettings::default();
        let cases = [
            (TransportSettings { points: 2, ..base }, None),
            (TransportSettings { length: -2.0, ..base }, Some("length")),
            (TransportSettings { dt: 0.0, ..base }, Some("dt")),
            (TransportSettings { wave_speed: f64::NAN, ..base }, Some("wave_speed")),
            (TransportSettings { variance: 0.0, ..base }, Some("variance")),
        ];
        for (settings, field) in cases {
            let err = settings.validate().expect_err("invalid settings");
            match (err, field) {
                (TransportError::InvalidGrid(_), None) => {}
                (TransportError::InvalidParameter { name, .. }, Some(expected)) => {
                    assert_eq!(name, expected)
                }
                (other, _) => panic!("unexpected error {other:?} for {settings:?}"),
            }
        }
    }

    #[test]
    fn integrate_rejects_field_of_wrong_length() {
        let settings = TransportSettings {
            points: 10,
            ..TransportSettings::default()
        };
        let err = settings
            .integrate(&[0.0; 9], Scheme::UPWIND_SCALAR)
            .expect_err("length mismatch");
        assert!(err.to_string().contains("9 values"), "unexpected error: {err}");
    }

    #[test]
    fn large_timestep_is_flagged_but_runs() {
        let settings = TransportSettings {
            points: 21,
            steps: 2,
            dt: 0.15,
            ..TransportSettings::default()
        };
        assert!(!settings.cfl().is_stable());
        let grid = settings.grid().expect("grid");
        let pulse = settings.initial_condition(&grid).expect("pulse");
        let out = settings
            .integrate(&pulse.field, Scheme::CENTRAL_VECTORIZED)
            .expect("integrate");
        assert_eq!(out.len(), 21);
    }
}
