use thiserror::Error;

/// Result type for model building.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Reasons the model builder refuses an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("field '{field}' was built without a parent node")]
    MissingParent { field: String },

    #[error("'{path}' is nested deeper than the limit of {limit}")]
    DepthExceeded { path: String, limit: usize },

    #[error("path '{path}' is already taken by another node")]
    PathCollision { path: String },
}
