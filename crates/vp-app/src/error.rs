//! Error types for the vp-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    DataSource(#[from] vp_compounds::DataSourceError),

    #[error(transparent)]
    NotFound(#[from] vp_compounds::NotFoundError),

    #[error(transparent)]
    Curve(#[from] vp_curves::CurveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for vp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<vp_curves::InvalidRangeError> for AppError {
    fn from(err: vp_curves::InvalidRangeError) -> Self {
        AppError::Curve(err.into())
    }
}
