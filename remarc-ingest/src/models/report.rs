//! Outcome counters for an ingestion batch

use serde::Serialize;
use std::fmt;

/// Result of sinking one assembled document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkOutcome {
    /// Document written to its collection
    pub inserted: bool,
    /// Group had no content collection, nothing written
    pub insert_skipped: bool,
    /// Store rejected the insert
    pub insert_failed: bool,
    pub files_copied: usize,
    pub copy_failures: usize,
}

impl SinkOutcome {
    /// True when neither the insert nor any copy failed
    pub fn is_complete(&self) -> bool {
        !self.insert_failed && self.copy_failures == 0
    }
}

/// Summary of a `process_upload_dir` run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub directories_scanned: usize,
    /// Directories whose groups were discarded (properties failure or unreadable)
    pub directories_aborted: usize,
    pub documents_inserted: usize,
    pub inserts_skipped: usize,
    pub insert_failures: usize,
    pub files_copied: usize,
    pub copy_failures: usize,
    /// Files with an unrecognised extension
    pub files_skipped: usize,
    pub cleanup_succeeded: bool,
}

impl IngestReport {
    pub fn record(&mut self, outcome: SinkOutcome) {
        if outcome.inserted {
            self.documents_inserted += 1;
        }
        if outcome.insert_skipped {
            self.inserts_skipped += 1;
        }
        if outcome.insert_failed {
            self.insert_failures += 1;
        }
        self.files_copied += outcome.files_copied;
        self.copy_failures += outcome.copy_failures;
    }

    /// Overall partial-success flag: false if anything was aborted or failed
    pub fn is_complete(&self) -> bool {
        self.directories_aborted == 0
            && self.insert_failures == 0
            && self.copy_failures == 0
            && self.cleanup_succeeded
    }
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories scanned ({} aborted), {} documents inserted ({} failed, {} skipped), \
             {} files copied ({} failed), {} unrecognised files, cleanup {}",
            self.directories_scanned,
            self.directories_aborted,
            self.documents_inserted,
            self.insert_failures,
            self.inserts_skipped,
            self.files_copied,
            self.copy_failures,
            self.files_skipped,
            if self.cleanup_succeeded { "ok" } else { "failed" },
        )
    }
}
