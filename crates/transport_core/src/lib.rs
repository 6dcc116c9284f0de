pub mod benchmark;
pub mod boundary;
pub mod cfl;
pub mod error;
pub mod grid;
pub mod initial;
pub mod scheme;
pub mod settings;
pub mod stepper;
#[cfg(test)]
mod test_log;
/// The `transport_core` crate solves the 1D linear transport equation `u_t + c u_x = 0`
/// on a periodic domain with explicit finite differences.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `Steppable` (one explicit timestep).
/// - **Schemes**: upwind and central stencils, each with an index-loop and a slice-arithmetic execution.
/// - **Stepper**: the double-buffered `AdvectionStepper` and the `integrate` entry point.
/// - **Benchmark**: timing harness comparing all four scheme variants on one scenario.
pub mod traits;

pub use error::TransportError;
pub use scheme::{Execution, Scheme, Stencil};
pub use stepper::integrate;
