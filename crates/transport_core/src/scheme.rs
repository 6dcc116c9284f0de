use crate::error::TransportError;
use crate::traits::Scalar;
use nalgebra::DVectorView;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Finite-difference formula for the spatial derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stencil {
    /// Backward difference, `u[i] - u[i-1]`.
    Upwind,
    /// Symmetric difference, `(u[i+1] - u[i-1]) / 2`.
    Central,
}

/// How the interior update is evaluated. Both produce identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Execution {
    /// Explicit index loop.
    Scalar,
    /// Whole-slice arithmetic on `nalgebra` vector views.
    Vectorized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scheme {
    pub stencil: Stencil,
    pub execution: Execution,
}

impl Scheme {
    pub const UPWIND_SCALAR: Scheme = Scheme::new(Stencil::Upwind, Execution::Scalar);
    pub const UPWIND_VECTORIZED: Scheme = Scheme::new(Stencil::Upwind, Execution::Vectorized);
    pub const CENTRAL_SCALAR: Scheme = Scheme::new(Stencil::Central, Execution::Scalar);
    pub const CENTRAL_VECTORIZED: Scheme = Scheme::new(Stencil::Central, Execution::Vectorized);

    /// All variants, in the order they are benchmarked and reported.
    pub const ALL: [Scheme; 4] = [
        Scheme::UPWIND_SCALAR,
        Scheme::UPWIND_VECTORIZED,
        Scheme::CENTRAL_SCALAR,
        Scheme::CENTRAL_VECTORIZED,
    ];

    pub const fn new(stencil: Stencil, execution: Execution) -> Self {
        Self { stencil, execution }
    }

    /// Machine-friendly name, accepted back by `FromStr`.
    pub fn name(&self) -> &'static str {
        match (self.stencil, self.execution) {
            (Stencil::Upwind, Execution::Scalar) => "upwind",
            (Stencil::Upwind, Execution::Vectorized) => "upwind_vectorized",
            (Stencil::Central, Execution::Scalar) => "central",
            (Stencil::Central, Execution::Vectorized) => "central_vectorized",
        }
    }

    /// Label used in timing reports.
    pub fn label(&self) -> &'static str {
        match (self.stencil, self.execution) {
            (Stencil::Upwind, Execution::Scalar) => "BDS",
            (Stencil::Upwind, Execution::Vectorized) => "BDS with vectorization",
            (Stencil::Central, Execution::Scalar) => "CDS",
            (Stencil::Central, Execution::Vectorized) => "CDS with vectorization",
        }
    }

    /// Overwrites the interior of `current` from `previous`. Ends are untouched.
    ///
    /// `coefficient` must come from `Stencil::coefficient` for the same stencil.
    pub(crate) fn update_interior<T: Scalar>(&self, previous: &[T], current: &mut [T], coefficient: T) {
        assert_eq!(
            previous.len(),
            current.len(),
            "snapshot and field lengths differ"
        );
        if previous.len() < 3 {
            return;
        }
        match self.execution {
            Execution::Scalar => self.stencil.update_scalar(previous, current, coefficient),
            Execution::Vectorized => self.stencil.update_vectorized(previous, current, coefficient),
        }
    }
}

impl Stencil {
    /// Multiplier applied to the neighbour difference: `c dt / dx` for upwind,
    /// `c dt / (2 dx)` for central.
    pub fn coefficient<T: Scalar>(&self, wave_speed: T, dt: T, dx: T) -> T {
        match self {
            Stencil::Upwind => wave_speed * dt / dx,
            Stencil::Central => wave_speed * dt / ((T::one() + T::one()) * dx),
        }
    }

    fn update_scalar<T: Scalar>(&self, previous: &[T], current: &mut [T], coefficient: T) {
        let n = previous.len();
        match self {
            Stencil::Upwind => {
                for i in 1..n - 1 {
                    current[i] = previous[i] - coefficient * (previous[i] - previous[i - 1]);
                }
            }
            Stencil::Central => {
                for i in 1..n - 1 {
                    current[i] = previous[i] - coefficient * (previous[i + 1] - previous[i - 1]);
                }
            }
        }
    }

    fn update_vectorized<T: Scalar>(&self, previous: &[T], current: &mut [T], coefficient: T) {
        let n = previous.len();
        let interior = n - 2;
        let centre = DVectorView::from_slice(&previous[1..n - 1], interior);
        let left = DVectorView::from_slice(&previous[..n - 2], interior);

        let updated = match self {
            Stencil::Upwind => &centre - (&centre - &left) * coefficient,
            Stencil::Central => {
                let right = DVectorView::from_slice(&previous[2..], interior);
                &centre - (&right - &left) * coefficient
            }
        };

        current[1..n - 1].copy_from_slice(updated.as_slice());
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scheme {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == normalized)
            .ok_or_else(|| TransportError::UnknownScheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(scheme: Scheme, previous: &[f64], coefficient: f64) -> Vec<f64> {
        let mut current = previous.to_vec();
        scheme.update_interior(previous, &mut current, coefficient);
        current
    }

    #[test]
    fn upwind_interior_uses_left_neighbour() {
        let previous = [0.0, 0.0, 1.0, 0.0, 0.0];
        let current = apply(Scheme::UPWIND_SCALAR, &previous, 0.2);
        assert_eq!(current[1], 0.0);
        assert!((current[2] - 0.8).abs() < 1e-15);
        assert!((current[3] - 0.2).abs() < 1e-15);
        // ends are left for the boundary routine
        assert_eq!(current[0], 0.0);
        assert_eq!(current[4], 0.0);
    }

    #[test]
    fn central_interior_uses_both_neighbours() {
        let previous = [0.0, 0.0, 1.0, 0.0, 0.0];
        let current = apply(Scheme::CENTRAL_SCALAR, &previous, 0.1);
        assert!((current[1] - -0.1).abs() < 1e-15);
        assert_eq!(current[2], 1.0);
        assert!((current[3] - 0.1).abs() < 1e-15);
    }

    #[test]
    fn vectorized_matches_scalar_bit_for_bit() {
        let previous: Vec<f64> = (0..64).map(|i| (i as f64 * 0.37).sin()).collect();
        for (scalar, vectorized) in [
            (Scheme::UPWIND_SCALAR, Scheme::UPWIND_VECTORIZED),
            (Scheme::CENTRAL_SCALAR, Scheme::CENTRAL_VECTORIZED),
        ] {
            let a = apply(scalar, &previous, 0.3);
            let b = apply(vectorized, &previous, 0.3);
            assert_eq!(a, b, "{scalar} and {vectorized} disagree");
        }
    }

    #[test]
    #[should_panic(expected = "snapshot and field lengths differ")]
    fn update_interior_rejects_mismatched_buffers() {
        let previous = [0.0_f64; 6];
        let mut current = [0.0_f64; 5];
        Scheme::UPWIND_VECTORIZED.update_interior(&previous, &mut current, 0.5);
    }

    #[test]
    fn central_coefficient_halves_upwind() {
        let upwind = Stencil::Upwind.coefficient(1.0_f64, 0.1, 0.5);
        let central = Stencil::Central.coefficient(1.0_f64, 0.1, 0.5);
        assert!((upwind - 0.2).abs() < 1e-15);
        assert!((central - 0.1).abs() < 1e-15);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for scheme in Scheme::ALL {
            let parsed: Scheme = scheme.name().parse().expect("known name");
            assert_eq!(parsed, scheme);
        }
        assert_eq!(
            " Central_Vectorized ".parse::<Scheme>().expect("case-insensitive"),
            Scheme::CENTRAL_VECTORIZED
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "lax_wendroff".parse::<Scheme>().expect_err("unknown scheme");
        assert_eq!(err, TransportError::UnknownScheme("lax_wendroff".to_string()));
    }

    #[test]
    fn labels_follow_report_order() {
        let labels: Vec<&str> = Scheme::ALL.iter().map(Scheme::label).collect();
        assert_eq!(
            labels,
            ["BDS", "BDS with vectorization", "CDS", "CDS with vectorization"]
        );
    }
}
