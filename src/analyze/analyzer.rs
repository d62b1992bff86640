use crate::analyze::{ActivityAnalyzed, DailyActivity, ProjectActivity, QualityTrend};
use crate::model::ActivityRecord;

pub trait Analyzer {
    fn analyze_activity(&self) -> ActivityAnalyzed;
}

impl Analyzer for [ActivityRecord] {
    fn analyze_activity(&self) -> ActivityAnalyzed {
        ActivityAnalyzed {
            daily: DailyActivity::from_records(self),
            projects: ProjectActivity::from_records(self),
            quality: QualityTrend::from_records(self),
        }
    }
}
