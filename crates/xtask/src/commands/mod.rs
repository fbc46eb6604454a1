//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod clean;
mod read_snapshot;
mod verify_snapshot;

pub use clean::Clean;
pub use read_snapshot::ReadSnapshot;
pub use verify_snapshot::VerifySnapshot;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tilemap_core::SnapshotDocument;
use tilemap_runtime::{FileSnapshotRepository, SaveConfig, SnapshotFormat, SnapshotRepository};

/// Where to find the snapshot file.
#[derive(Args, Debug, Clone, Default)]
pub struct SnapshotLocation {
    /// Snapshot file (defaults to the configured save path)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Snapshot encoding (inferred from the file extension when omitted)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<SnapshotFormat>,
}

impl SnapshotLocation {
    /// Resolve the snapshot path and format.
    ///
    /// Without `--file`, the path comes from `TILEMAP_*` environment variables.
    pub fn resolve(&self) -> (PathBuf, SnapshotFormat) {
        match &self.file {
            Some(path) => {
                let format = self
                    .format
                    .unwrap_or_else(|| SnapshotFormat::from_path(path));
                (path.clone(), format)
            }
            None => {
                let mut config = SaveConfig::from_env();
                if let Some(format) = self.format {
                    config.format = format;
                }
                (config.snapshot_path(), config.format)
            }
        }
    }

    pub fn repository(&self) -> FileSnapshotRepository {
        let (path, format) = self.resolve();
        FileSnapshotRepository::open(path, format)
    }

    /// Load the snapshot, failing if it does not exist.
    pub fn load(&self) -> Result<(FileSnapshotRepository, SnapshotDocument)> {
        let repo = self.repository();
        let document = repo
            .load()
            .with_context(|| format!("Failed to read snapshot: {}", repo.path().display()))?
            .with_context(|| format!("Snapshot file not found: {}", repo.path().display()))?;
        Ok((repo, document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_infers_format() {
        let location = SnapshotLocation {
            file: Some(PathBuf::from("saves/tilemapData.bin")),
            format: None,
        };

        let (path, format) = location.resolve();

        assert_eq!(path, PathBuf::from("saves/tilemapData.bin"));
        assert_eq!(format, SnapshotFormat::Bincode);
    }

    #[test]
    fn explicit_format_wins() {
        let location = SnapshotLocation {
            file: Some(PathBuf::from("world.dat")),
            format: Some(SnapshotFormat::Bincode),
        };

        assert_eq!(location.resolve().1, SnapshotFormat::Bincode);
    }
}
