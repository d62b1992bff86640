use crate::error::{Error, Result};
use crate::model::ActivityRecord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const LOG_FILE_NAME: &str = "activity-log.json";

#[derive(Debug, Clone, Default)]
pub struct CollectedActivity {
    pub records: Vec<ActivityRecord>,
    pub projects_scanned: usize,
    pub logs_loaded: usize,
    pub skipped: Vec<SkippedLog>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLog {
    pub project: String,
    pub reason: String,
}

pub fn collect_activity(root: &Path) -> Result<CollectedActivity> {
    let mut collected = CollectedActivity::default();
    if !root.exists() {
        debug!(root = %root.display(), "projects directory does not exist");
        return Ok(collected);
    }

    let entries = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        collected.projects_scanned += 1;

        let project = entry.file_name().to_string_lossy().to_string();
        let log_path = entry.path().join(LOG_FILE_NAME);
        match read_log(&log_path) {
            Ok(Some(records)) => {
                debug!(%project, records = records.len(), "loaded activity log");
                collected.logs_loaded += 1;
                collected.records.extend(records);
            }
            Ok(None) => {
                debug!(%project, "no activity log");
            }
            Err(err) => {
                warn!(%project, path = %log_path.display(), error = %err, "skipping activity log");
                collected.skipped.push(SkippedLog {
                    project,
                    reason: err.to_string(),
                });
            }
        }
    }
    Ok(collected)
}

fn read_log(path: &Path) -> Result<Option<Vec<ActivityRecord>>> {
    let json_str = match fs::read_to_string(path) {
        Ok(json_str) => json_str,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(Error::io(path, err)),
    };
    parse(&json_str).map(Some)
}

fn parse(json_str: &str) -> Result<Vec<ActivityRecord>> {
    Ok(serde_json::from_str(json_str)?)
}
