//! File-based SnapshotRepository implementation.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tilemap_core::SnapshotDocument;

use super::{RepositoryError, Result, SnapshotRepository};
use crate::config::{SaveConfig, SnapshotFormat};

/// File-based implementation of SnapshotRepository.
///
/// Keeps one snapshot file at a fixed path. Writes go to a sibling
/// `.tmp` file that is renamed over the target, so a failed save never
/// leaves a half-written snapshot behind.
///
/// # File Format
///
/// - [`SnapshotFormat::Json`]: pretty-printed JSON array of grid snapshots
/// - [`SnapshotFormat::Bincode`]: bincode encoding of the same document
#[derive(Clone, Debug)]
pub struct FileSnapshotRepository {
    path: PathBuf,
    format: SnapshotFormat,
}

impl FileSnapshotRepository {
    /// Create a repository writing `filename` inside `base_dir`.
    ///
    /// The directory is created if missing.
    pub fn new(
        base_dir: impl AsRef<Path>,
        filename: &str,
        format: SnapshotFormat,
    ) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(filename),
            format,
        })
    }

    /// Open an existing snapshot path without touching the filesystem.
    pub fn open(path: impl Into<PathBuf>, format: SnapshotFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn from_config(config: &SaveConfig) -> Result<Self> {
        Self::new(config.save_dir(), config.filename(), config.format)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn encode(&self, document: &SnapshotDocument) -> Result<Vec<u8>> {
        match self.format {
            SnapshotFormat::Json => serde_json::to_vec_pretty(document)
                .map_err(|e| RepositoryError::Json(e.to_string())),
            SnapshotFormat::Bincode => bincode::serialize(document)
                .map_err(|e| RepositoryError::Serialization(e.to_string())),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<SnapshotDocument> {
        if bytes.is_empty() {
            return Err(RepositoryError::CorruptedData(format!(
                "snapshot file {} is empty",
                self.path.display()
            )));
        }

        match self.format {
            SnapshotFormat::Json => {
                serde_json::from_slice(bytes).map_err(|e| RepositoryError::Json(e.to_string()))
            }
            SnapshotFormat::Bincode => bincode::deserialize(bytes)
                .map_err(|e| RepositoryError::Serialization(e.to_string())),
        }
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, document: &SnapshotDocument) -> Result<()> {
        let temp_path = self.temp_path();
        let bytes = self.encode(document)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved snapshot ({} grids, {} records) to {}",
            document.len(),
            document.record_count(),
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<SnapshotDocument>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::Io(e)),
        };
        let document = self.decode(&bytes)?;

        tracing::debug!(
            "Loaded snapshot ({} grids, {} records) from {}",
            document.len(),
            document.record_count(),
            self.path.display()
        );

        Ok(Some(document))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::info!("Deleted snapshot: {}", self.path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tilemap_core::{GridSnapshot, Position, SnapshotRecord};

    fn sample() -> SnapshotDocument {
        SnapshotDocument::new(vec![
            GridSnapshot::with_records(
                "Ground",
                vec![
                    SnapshotRecord::new(Position::new(0, 0), "grass_01"),
                    SnapshotRecord::new(Position::new(2, 0), "water_01"),
                ],
            ),
            GridSnapshot::new("Decor"),
        ])
    }

    fn setup(format: SnapshotFormat) -> (TempDir, FileSnapshotRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo =
            FileSnapshotRepository::new(temp_dir.path(), format.default_filename(), format)
                .unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_file_loads_nothing() {
        let (_dir, repo) = setup(SnapshotFormat::Json);

        assert!(!repo.exists());
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_json() {
        let (_dir, repo) = setup(SnapshotFormat::Json);

        repo.save(&sample()).unwrap();

        assert!(repo.exists());
        assert!(!repo.temp_path().exists());
        assert_eq!(repo.load().unwrap(), Some(sample()));

        let text = fs::read_to_string(repo.path()).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"key\": \"Ground\""));
    }

    #[test]
    fn test_save_and_load_bincode() {
        let (_dir, repo) = setup(SnapshotFormat::Bincode);

        repo.save(&sample()).unwrap();

        assert_eq!(repo.path().file_name().unwrap(), "tilemapData.bin");
        assert_eq!(repo.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_load_after_external_delete() {
        let (_dir, repo) = setup(SnapshotFormat::Bincode);

        repo.save(&sample()).unwrap();
        fs::remove_file(repo.path()).unwrap();

        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_directory_in_place_of_file_is_an_error() {
        let (_dir, repo) = setup(SnapshotFormat::Json);

        fs::create_dir(repo.path()).unwrap();

        assert!(matches!(repo.load(), Err(RepositoryError::Io(_))));
    }

    #[test]
    fn test_save_overwrites() {
        let (_dir, repo) = setup(SnapshotFormat::Json);

        repo.save(&sample()).unwrap();
        let replacement = SnapshotDocument::new(vec![GridSnapshot::new("Walls")]);
        repo.save(&replacement).unwrap();

        assert_eq!(repo.load().unwrap(), Some(replacement));
    }

    #[test]
    fn test_corrupted_file() {
        let (_dir, repo) = setup(SnapshotFormat::Json);

        fs::write(repo.path(), "").unwrap();
        assert!(matches!(
            repo.load(),
            Err(RepositoryError::CorruptedData(_))
        ));

        fs::write(repo.path(), "{ not json").unwrap();
        assert!(matches!(repo.load(), Err(RepositoryError::Json(_))));
    }

    #[test]
    fn test_delete() {
        let (_dir, repo) = setup(SnapshotFormat::Json);

        repo.delete().unwrap();
        repo.save(&sample()).unwrap();
        repo.delete().unwrap();

        assert!(!repo.exists());
    }
}
