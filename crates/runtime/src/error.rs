//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, grid registration, content loading, and
//! configuration so callers can bubble them up with consistent context.
use thiserror::Error;

use tilemap_core::{ParseBoundsError, RegistryError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to load content: {0}")]
    Content(String),

    #[error("invalid save configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    InvalidBounds(#[from] ParseBoundsError),
}
