pub mod collector;

pub use collector::{collect_activity, CollectedActivity, SkippedLog, LOG_FILE_NAME};
