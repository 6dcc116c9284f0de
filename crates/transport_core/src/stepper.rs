use crate::boundary::apply_periodic;
use crate::cfl::{courant_number, CflDiagnostic};
use crate::error::{TransportError, MIN_GRID_POINTS};
use crate::scheme::Scheme;
use crate::traits::{Scalar, Steppable};

/// Explicit advection stepper with its own snapshot buffer.
///
/// Each step copies the field into the snapshot, rewrites the interior from the snapshot,
/// then wraps the ends from the freshly written interior.
pub struct AdvectionStepper<T: Scalar> {
    scheme: Scheme,
    coefficient: T,
    previous: Vec<T>,
}

impl<T: Scalar> AdvectionStepper<T> {
    pub fn new(
        scheme: Scheme,
        wave_speed: T,
        dt: T,
        dx: T,
        dim: usize,
    ) -> Result<Self, TransportError> {
        if dim < MIN_GRID_POINTS {
            return Err(TransportError::too_few_points(dim));
        }
        Ok(Self {
            scheme,
            coefficient: scheme.stencil.coefficient(wave_speed, dt, dx),
            previous: vec![T::zero(); dim],
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn dimension(&self) -> usize {
        self.previous.len()
    }
}

impl<T: Scalar> Steppable<T> for AdvectionStepper<T> {
    /// Panics if `state` does not have `dimension()` values.
    fn step(&mut self, state: &mut [T]) {
        assert_eq!(
            state.len(),
            self.previous.len(),
            "field length does not match the stepper dimension"
        );
        self.previous.copy_from_slice(state);
        self.scheme
            .update_interior(&self.previous, state, self.coefficient);
        apply_periodic(state);
    }
}

/// Advances `initial_field` by `nt` steps of `scheme` and returns the final field.
///
/// A Courant number of magnitude 1 or more is logged as a warning; the run still happens.
/// Non-finite values produced by an unstable run are returned as-is.
pub fn integrate<T: Scalar>(
    initial_field: &[T],
    grid_spacing: T,
    wave_speed: T,
    dt: T,
    nt: usize,
    scheme: Scheme,
) -> Result<Vec<T>, TransportError> {
    check_inputs(initial_field, grid_spacing, wave_speed, dt)?;

    let cfl = courant_number(wave_speed, dt, grid_spacing)
        .to_f64()
        .unwrap_or(f64::NAN);
    CflDiagnostic::from_ratio(cfl).report();

    run(initial_field, grid_spacing, wave_speed, dt, nt, scheme)
}

/// `integrate` without the CFL report, for callers that report it once for several runs.
pub(crate) fn integrate_unreported<T: Scalar>(
    initial_field: &[T],
    grid_spacing: T,
    wave_speed: T,
    dt: T,
    nt: usize,
    scheme: Scheme,
) -> Result<Vec<T>, TransportError> {
    check_inputs(initial_field, grid_spacing, wave_speed, dt)?;
    run(initial_field, grid_spacing, wave_speed, dt, nt, scheme)
}

fn check_inputs<T: Scalar>(
    initial_field: &[T],
    grid_spacing: T,
    wave_speed: T,
    dt: T,
) -> Result<(), TransportError> {
    let dim = initial_field.len();
    if dim < MIN_GRID_POINTS {
        return Err(TransportError::too_few_points(dim));
    }
    if !grid_spacing.is_finite() || grid_spacing <= T::zero() {
        return Err(TransportError::InvalidGrid(format!(
            "grid spacing must be positive and finite, got {:?}.",
            grid_spacing
        )));
    }
    if !dt.is_finite() || dt <= T::zero() {
        return Err(TransportError::parameter(
            "dt",
            format!("must be positive and finite, got {:?}.", dt),
        ));
    }
    if !wave_speed.is_finite() {
        return Err(TransportError::parameter(
            "wave_speed",
            format!("must be finite, got {:?}.", wave_speed),
        ));
    }
    Ok(())
}

fn run<T: Scalar>(
    initial_field: &[T],
    grid_spacing: T,
    wave_speed: T,
    dt: T,
    nt: usize,
    scheme: Scheme,
) -> Result<Vec<T>, TransportError> {
    let dim = initial_field.len();
    let mut stepper = AdvectionStepper::new(scheme, wave_speed, dt, grid_spacing, dim)?;
    let mut state = initial_field.to_vec();

    log::debug!("{}: {} steps on {} points", scheme.name(), nt, dim);
    for _ in 0..nt {
        stepper.step(&mut state);
    }

    Ok(state)
}
