mod activity;
mod repository;

pub use activity::{ActivityRecord, Changes, CodeQuality};
pub use repository::Repository;
