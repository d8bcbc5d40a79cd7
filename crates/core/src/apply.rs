use crate::planner::{RenameCandidate, RenamePlan};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameStatus {
    Renamed,
    SkippedExisting,
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub index: usize,
    pub original_name: String,
    pub target_name: String,
    #[serde(flatten)]
    pub status: RenameStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApplyResult {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub outcomes: Vec<RenameOutcome>,
}

/// Renames every candidate in plan order.
///
/// The target is checked on disk right before each rename; an existing name
/// is never overwritten. Failures are recorded and the batch moves on, and
/// nothing is rolled back.
pub fn apply_plan(plan: &RenamePlan) -> ApplyResult {
    let mut result = ApplyResult::default();

    for candidate in &plan.candidates {
        let status = rename_one(candidate);
        match &status {
            RenameStatus::Renamed => result.renamed += 1,
            RenameStatus::SkippedExisting => result.skipped += 1,
            RenameStatus::Failed { .. } => result.failed += 1,
        }
        result.outcomes.push(RenameOutcome {
            index: candidate.index,
            original_name: candidate.original_name.clone(),
            target_name: candidate.target_name.clone(),
            status,
        });
    }

    result
}

fn rename_one(candidate: &RenameCandidate) -> RenameStatus {
    if target_taken(&candidate.target_path) {
        tracing::warn!(
            file = %candidate.original_name,
            target = %candidate.target_name,
            "target already exists, skipping"
        );
        return RenameStatus::SkippedExisting;
    }

    match fs::rename(&candidate.original_path, &candidate.target_path) {
        Ok(()) => {
            tracing::info!(
                file = %candidate.original_name,
                target = %candidate.target_name,
                "renamed"
            );
            RenameStatus::Renamed
        }
        Err(err) => {
            tracing::warn!(
                file = %candidate.original_path.display(),
                target = %candidate.target_path.display(),
                error = %err,
                "rename failed"
            );
            RenameStatus::Failed {
                message: err.to_string(),
            }
        }
    }
}

// symlink_metadata so a dangling symlink still counts as taken.
fn target_taken(target: &Path) -> bool {
    fs::symlink_metadata(target).is_ok()
}
