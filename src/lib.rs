pub mod analyze;
pub mod config;
pub mod error;
pub mod github;
pub mod job;
pub mod logs;
pub mod model;
pub mod report;
pub mod utils;

pub use error::{Error, Result};
