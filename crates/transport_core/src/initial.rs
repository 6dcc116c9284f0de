use crate::error::TransportError;
use crate::traits::Scalar;

/// A normalized Gaussian pulse sampled on a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianPulse<T: Scalar> {
    /// Position scaled so the middle of the domain sits at 1.
    pub theta: Vec<T>,
    pub field: Vec<T>,
}

/// Samples `u0 = exp(-(1 - theta)^2 / (4 g)) / (2 sqrt(pi g))` with `theta = x / (length / 2)`.
///
/// The pulse peaks at `x = length / 2`; `variance` controls its width.
pub fn gaussian_pulse<T: Scalar>(
    x: &[T],
    length: T,
    variance: T,
) -> Result<GaussianPulse<T>, TransportError> {
    if !length.is_finite() || length <= T::zero() {
        return Err(TransportError::parameter(
            "length",
            format!("must be positive and finite, got {:?}.", length),
        ));
    }
    if !variance.is_finite() || variance <= T::zero() {
        return Err(TransportError::parameter(
            "variance",
            format!("must be positive and finite, got {:?}.", variance),
        ));
    }

    let one = T::one();
    let two = one + one;
    let four = two * two;
    let half_length = length / two;
    let amplitude = one / (two * (T::PI() * variance).sqrt());

    let theta: Vec<T> = x.iter().map(|&xi| xi / half_length).collect();
    let field = theta
        .iter()
        .map(|&th| {
            let offset = one - th;
            amplitude * (-(offset * offset) / (four * variance)).exp()
        })
        .collect();

    Ok(GaussianPulse { theta, field })
}
