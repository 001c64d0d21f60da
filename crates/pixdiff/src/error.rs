use thiserror::Error;

/// Precondition failures. Raised before any pixel is read.
///
/// Images of different sizes are not an error; see
/// [`DiffResult::dimension_mismatch`](crate::DiffResult::dimension_mismatch).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("threshold must be within -1.0..=1.0, got {0}")]
    InvalidThreshold(f32),
}
