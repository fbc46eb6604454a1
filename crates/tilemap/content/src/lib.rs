//! Data-driven tile content and loaders.
//!
//! This crate reads authored content from RON/TOML data files:
//! - Tile catalogs binding stable names to tile types (RON)
//! - Initial grid layouts placed by catalog name (RON)
//! - Save settings overriding the runtime defaults (TOML)
//!
//! Content is consumed by the runtime when it assembles a snapshot service and
//! never appears inside a snapshot document.

pub mod settings;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use settings::SaveSettings;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LayoutLoader, LoadResult};
