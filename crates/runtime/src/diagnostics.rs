//! Reporting of codec issues through `tracing`.
//!
//! Skipped data is a warning; catalog authoring mistakes are errors.
use tilemap_core::{DecodeReport, EncodeReport, IssueSeverity, SnapshotIssue};

pub fn log_issue(issue: &SnapshotIssue) {
    match issue.severity() {
        IssueSeverity::Skipped => {
            tracing::warn!(code = issue.code(), grid = issue.grid(), "{}", issue);
        }
        IssueSeverity::Authoring => {
            tracing::error!(code = issue.code(), "{}", issue);
        }
    }
}

pub fn log_issues<'a>(issues: impl IntoIterator<Item = &'a SnapshotIssue>) {
    for issue in issues {
        log_issue(issue);
    }
}

pub fn log_encode_report(report: &EncodeReport) {
    log_issues(&report.issues);
    tracing::info!(
        grids = report.grids,
        records = report.records,
        unmapped = report.unmapped,
        "Captured tile snapshot"
    );
}

pub fn log_decode_report(report: &DecodeReport) {
    log_issues(&report.issues);
    tracing::info!(
        restored = report.restored_grids,
        applied = report.applied,
        skipped_grids = report.skipped_grids.len(),
        skipped_records = report.skipped_records,
        "Restored tile snapshot"
    );
}
