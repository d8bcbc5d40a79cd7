use crate::exif_reader::read_capture_time;
use crate::metadata::{sort_by_capture_time, CandidateRecord, Unresolved, UnresolvedReason};
use crate::naming::target_file_name;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlannedAction {
    Rename,
    SkipExisting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameCandidate {
    pub index: usize,
    pub capture_time: NaiveDateTime,
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub original_name: String,
    pub target_name: String,
    pub action: PlannedAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub scanned_files: usize,
    pub jpg_files: usize,
    pub skipped_non_jpg: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub planned_renames: usize,
    pub planned_skips: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    pub root: PathBuf,
    pub candidates: Vec<RenameCandidate>,
    pub unresolved: Vec<Unresolved>,
    pub stats: ScanStats,
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub records: Vec<CandidateRecord>,
    pub unresolved: Vec<Unresolved>,
    pub stats: ScanStats,
    existing_names: HashSet<OsString>,
}

/// Lists `root` (non-recursive), reads capture times and returns the
/// resolved records oldest first.
///
/// Entries are visited in file-name order, which is also the tie-break for
/// equal capture times.
pub fn scan_directory(root: &Path) -> Result<ScanResult> {
    let mut stats = ScanStats::default();
    let mut existing_names = HashSet::new();
    let mut jpg_files = Vec::new();

    for entry in
        fs::read_dir(root).with_context(|| format!("cannot read directory: {}", root.display()))?
    {
        let entry = entry.with_context(|| format!("cannot read entry in: {}", root.display()))?;
        existing_names.insert(entry.file_name());

        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        stats.scanned_files += 1;

        if is_jpg(&path) {
            stats.jpg_files += 1;
            jpg_files.push(path);
        } else {
            stats.skipped_non_jpg += 1;
        }
    }
    jpg_files.sort();

    let mut records = Vec::with_capacity(jpg_files.len());
    let mut unresolved = Vec::new();
    for path in jpg_files {
        let original_name = file_name_of(&path);
        match read_capture_time(&path) {
            Ok(Some(capture_time)) => {
                tracing::debug!(file = %original_name, %capture_time, "resolved capture time");
                records.push(CandidateRecord {
                    capture_time,
                    source_path: path,
                    original_name,
                });
            }
            Ok(None) => {
                tracing::debug!(file = %original_name, "no capture time");
                unresolved.push(Unresolved {
                    source_path: path,
                    original_name,
                    reason: UnresolvedReason::NotFound,
                });
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "failed to read EXIF");
                unresolved.push(Unresolved {
                    source_path: path,
                    original_name,
                    reason: UnresolvedReason::ReadError {
                        message: err.to_string(),
                    },
                });
            }
        }
    }

    sort_by_capture_time(&mut records);
    stats.resolved = records.len();
    stats.unresolved = unresolved.len();

    Ok(ScanResult {
        records,
        unresolved,
        stats,
        existing_names,
    })
}

pub fn generate_plan(root: &Path) -> Result<RenamePlan> {
    if !root.is_dir() {
        anyhow::bail!("directory does not exist: {}", root.display());
    }

    let ScanResult {
        records,
        unresolved,
        mut stats,
        mut existing_names,
    } = scan_directory(root)?;

    let mut candidates = Vec::with_capacity(records.len());
    for (offset, record) in records.into_iter().enumerate() {
        let index = offset + 1;
        let target_name = target_file_name(index, &record.capture_time);
        let action = predict_action(&mut existing_names, &record.original_name, &target_name);
        match action {
            PlannedAction::Rename => stats.planned_renames += 1,
            PlannedAction::SkipExisting => stats.planned_skips += 1,
        }

        candidates.push(RenameCandidate {
            index,
            capture_time: record.capture_time,
            target_path: root.join(&target_name),
            original_path: record.source_path,
            original_name: record.original_name,
            target_name,
            action,
        });
    }

    Ok(RenamePlan {
        root: root.to_path_buf(),
        candidates,
        unresolved,
        stats,
    })
}

/// Replays the batch against the names present at scan time so a dry run
/// reports the same skips a real run would.
fn predict_action(
    existing_names: &mut HashSet<OsString>,
    original_name: &str,
    target_name: &str,
) -> PlannedAction {
    let target = OsString::from(target_name);
    if existing_names.contains(&target) {
        return PlannedAction::SkipExisting;
    }
    existing_names.remove(&OsString::from(original_name));
    existing_names.insert(target);
    PlannedAction::Rename
}

fn is_jpg(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg")
        })
        .unwrap_or(false)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_default()
}
