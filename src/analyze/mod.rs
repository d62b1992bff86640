pub mod analyzer;
mod model;

pub use analyzer::Analyzer;
pub use model::{ActivityAnalyzed, DailyActivity, ProjectActivity, QualitySample, QualityTrend};
