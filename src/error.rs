use thiserror::Error;

/// Alias for a `Result<T, projector::error::ProjError>`.
pub type Result<T> = std::result::Result<T, ProjError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Unsupported projection: {0}")]
    UnsupportedProjection(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),

    #[error("Projection degenerate at pole: {0}")]
    PoleDegenerate(String),

    #[error("No convergence: {0}")]
    NonConvergence(String),
}
