//! Persistence for snapshot documents.
//!
//! The [`SnapshotRepository`] trait is the storage seam used by the service.
//! [`FileSnapshotRepository`] writes a single snapshot file; the in-memory
//! variant backs tests and tooling.
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSnapshotRepository;
pub use memory::InMemorySnapshotRepo;
pub use traits::SnapshotRepository;
