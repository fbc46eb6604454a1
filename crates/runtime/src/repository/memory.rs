use std::sync::RwLock;

use tilemap_core::SnapshotDocument;

use super::{RepositoryError, Result, SnapshotRepository};

/// In-memory implementation of SnapshotRepository
#[derive(Debug, Default)]
pub struct InMemorySnapshotRepo {
    document: RwLock<Option<SnapshotDocument>>,
}

impl InMemorySnapshotRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded with a stored snapshot.
    pub fn with_document(document: SnapshotDocument) -> Self {
        Self {
            document: RwLock::new(Some(document)),
        }
    }
}

impl SnapshotRepository for InMemorySnapshotRepo {
    fn save(&self, document: &SnapshotDocument) -> Result<()> {
        let mut current = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = Some(document.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SnapshotDocument>> {
        let current = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(current.clone())
    }

    fn exists(&self) -> bool {
        self.document
            .read()
            .map(|current| current.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut current = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = None;
        Ok(())
    }
}
