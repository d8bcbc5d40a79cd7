use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A JPEG found during a scan, paired with its resolved capture time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateRecord {
    pub capture_time: NaiveDateTime,
    pub source_path: PathBuf,
    pub original_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnresolvedReason {
    NotFound,
    ReadError { message: String },
}

/// A JPEG whose capture time could not be resolved. It is never renamed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Unresolved {
    pub source_path: PathBuf,
    pub original_name: String,
    pub reason: UnresolvedReason,
}

impl Unresolved {
    pub fn read_error(&self) -> Option<&str> {
        match &self.reason {
            UnresolvedReason::ReadError { message } => Some(message),
            UnresolvedReason::NotFound => None,
        }
    }
}

/// Stable sort by capture time; equal times keep their scan order.
pub fn sort_by_capture_time(records: &mut [CandidateRecord]) {
    records.sort_by_key(|record| record.capture_time);
}
