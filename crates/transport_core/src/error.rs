use thiserror::Error;

/// Smallest grid that leaves at least one interior point for the stencils.
pub const MIN_GRID_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Unknown scheme `{0}`")]
    UnknownScheme(String),
}

impl TransportError {
    pub(crate) fn too_few_points(points: usize) -> Self {
        TransportError::InvalidGrid(format!(
            "at least {} points are required, got {}.",
            MIN_GRID_POINTS, points
        ))
    }

    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        TransportError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
