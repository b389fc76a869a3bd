use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("viewport cannot be resized while the simulation is running")]
    Running,
}
