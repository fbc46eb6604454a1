use crate::error::{IssueSeverity, SnapshotIssue};

/// Outcome of [`crate::encode`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeReport {
    /// Grids written to the document.
    pub grids: usize,
    /// Records written across all grids.
    pub records: usize,
    /// Occupied cells left out because their tile has no catalog entry.
    pub unmapped: usize,
    pub issues: Vec<SnapshotIssue>,
}

impl EncodeReport {
    /// True when every occupied cell in the scanned bounds was saved.
    pub fn is_lossless(&self) -> bool {
        self.unmapped == 0
    }
}

/// Outcome of [`crate::decode`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Grids that were cleared and replayed.
    pub restored_grids: usize,
    /// Records written into grids.
    pub applied: usize,
    /// Snapshot keys with no registered grid.
    pub skipped_grids: Vec<String>,
    /// Records whose tile identifier could not be resolved.
    pub skipped_records: usize,
    pub issues: Vec<SnapshotIssue>,
}

impl DecodeReport {
    /// True when every grid and record in the document was applied.
    pub fn is_complete(&self) -> bool {
        self.skipped_grids.is_empty() && self.skipped_records == 0
    }

    pub fn issues_with(&self, severity: IssueSeverity) -> impl Iterator<Item = &SnapshotIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity() == severity)
    }
}
