//! Save/load orchestration for tile-grid snapshots.
//!
//! This crate wires the pure codec from `tilemap-core` to storage and content:
//! consumers build a [`SnapshotService`] holding their grids, the tile
//! identity table, and a [`SnapshotRepository`], then call
//! [`SnapshotService::save`] / [`SnapshotService::load`].
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the save/load facade and its builder
//! - [`repository`] persists snapshot documents (file-backed or in memory)
//! - [`config`] resolves where and how snapshots are written
//! - [`diagnostics`] turns codec issues into `tracing` events
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod repository;
pub mod service;

pub use config::{SaveConfig, SnapshotFormat, default_save_dir};
pub use error::{Result, RuntimeError};
pub use repository::{
    FileSnapshotRepository, InMemorySnapshotRepo, RepositoryError, SnapshotRepository,
};
pub use service::{SnapshotService, SnapshotServiceBuilder};
