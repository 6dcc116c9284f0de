use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::Debug;

/// A trait for types that can be used as field values on the transport grid.
/// Must support float arithmetic, in-place operators, and the bulk operations of `nalgebra`.
pub trait Scalar:
    Float + FloatConst + FromPrimitive + NumAssign + Debug + nalgebra::Scalar
{
}

impl<T> Scalar for T where
    T: Float + FloatConst + FromPrimitive + NumAssign + Debug + nalgebra::Scalar
{
}

/// A trait for explicit schemes that advance a field by one timestep.
pub trait Steppable<T: Scalar> {
    /// Performs one timestep.
    /// state: current field (overwritten with the next field)
    fn step(&mut self, state: &mut [T]);
}
