//! Repository contract for storing snapshot documents.

use tilemap_core::SnapshotDocument;

use super::Result;

/// Storage for the single current snapshot.
///
/// Saving replaces whatever was stored before. Loading a repository that
/// has never been written returns `Ok(None)`.
pub trait SnapshotRepository: Send + Sync {
    /// Persist a snapshot, replacing any previous one.
    fn save(&self, document: &SnapshotDocument) -> Result<()>;

    /// Load the stored snapshot, if one exists.
    fn load(&self) -> Result<Option<SnapshotDocument>>;

    /// Check if a snapshot exists
    fn exists(&self) -> bool;

    /// Delete the stored snapshot. Deleting nothing is not an error.
    fn delete(&self) -> Result<()>;
}

impl<R> SnapshotRepository for Box<R>
where
    R: SnapshotRepository + ?Sized,
{
    fn save(&self, document: &SnapshotDocument) -> Result<()> {
        (**self).save(document)
    }

    fn load(&self) -> Result<Option<SnapshotDocument>> {
        (**self).load()
    }

    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn delete(&self) -> Result<()> {
        (**self).delete()
    }
}
