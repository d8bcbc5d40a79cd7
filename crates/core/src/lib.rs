mod apply;
mod config;
mod exif_reader;
mod metadata;
mod naming;
mod planner;
#[cfg(test)]
mod test_support;

pub use apply::{apply_plan, ApplyResult, RenameOutcome, RenameStatus};
pub use config::{app_paths, load_config, load_config_from, AppConfig, AppPaths, OutputFormat};
pub use exif_reader::{parse_capture_time, read_capture_time, MetadataError};
pub use metadata::{sort_by_capture_time, CandidateRecord, Unresolved, UnresolvedReason};
pub use naming::{format_date, target_file_name};
pub use planner::{
    generate_plan, scan_directory, PlannedAction, RenameCandidate, RenamePlan, ScanResult,
    ScanStats,
};
