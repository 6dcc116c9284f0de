use crate::error::{TransportError, MIN_GRID_POINTS};
use crate::traits::Scalar;

/// Uniformly spaced points on `[0, length]`, endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Scalar> {
    points: Vec<T>,
    length: T,
    spacing: T,
}

impl<T: Scalar> Grid<T> {
    pub fn uniform(length: T, points: usize) -> Result<Self, TransportError> {
        if points < MIN_GRID_POINTS {
            return Err(TransportError::too_few_points(points));
        }
        if !length.is_finite() || length <= T::zero() {
            return Err(TransportError::InvalidGrid(format!(
                "domain length must be positive and finite, got {:?}.",
                length
            )));
        }

        let intervals = T::from_usize(points - 1).ok_or_else(|| {
            TransportError::InvalidGrid(format!("{} points exceed the scalar range.", points))
        })?;
        let spacing = length / intervals;

        let mut xs = Vec::with_capacity(points);
        for i in 0..points - 1 {
            let index = T::from_usize(i).ok_or_else(|| {
                TransportError::InvalidGrid(format!("index {} exceeds the scalar range.", i))
            })?;
            xs.push(index * spacing);
        }
        // Last point is exactly `length`.
        xs.push(length);

        Ok(Self {
            points: xs,
            length,
            spacing,
        })
    }

    pub fn points(&self) -> &[T] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn length(&self) -> T {
        self.length
    }

    pub fn spacing(&self) -> T {
        self.spacing
    }
}
