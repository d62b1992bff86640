use crate::model::{ActivityRecord, CodeQuality};
use indexmap::IndexMap;
use itertools::Itertools;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityAnalyzed {
    pub daily: DailyActivity,
    pub projects: ProjectActivity,
    pub quality: QualityTrend,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyActivity(pub IndexMap<String, usize>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectActivity(pub IndexMap<String, usize>);

impl DailyActivity {
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        Self(count_by(records, ActivityRecord::date))
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn scale_max(&self) -> usize {
        scale_max(&self.0)
    }
}

impl ProjectActivity {
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        Self(count_by(records, |record| record.project.clone()))
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn scale_max(&self) -> usize {
        scale_max(&self.0)
    }
}

fn count_by<F>(records: &[ActivityRecord], key: F) -> IndexMap<String, usize>
where
    F: Fn(&ActivityRecord) -> String,
{
    records.iter().fold(IndexMap::new(), |mut acc, record| {
        *acc.entry(key(record)).or_insert(0) += 1;
        acc
    })
}

fn scale_max(counts: &IndexMap<String, usize>) -> usize {
    counts.values().copied().max().unwrap_or(0).max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualitySample {
    pub date: String,
    pub comment_percentage: f64,
    pub complexity: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityTrend(pub Vec<QualitySample>);

impl QualityTrend {
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        let sums = records
            .iter()
            .filter_map(|record| record.code_quality().map(|q| (record.date(), q)))
            .fold(
                IndexMap::<String, QualitySum>::new(),
                |mut acc, (date, quality)| {
                    acc.entry(date).or_default().add(quality);
                    acc
                },
            );
        let samples = sums
            .into_iter()
            .map(|(date, sum)| sum.into_sample(date))
            .sorted_by(|a, b| a.date.cmp(&b.date))
            .collect();
        Self(samples)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn max_complexity(&self) -> f64 {
        self.0.iter().map(|s| s.complexity).fold(0.0, f64::max)
    }

    pub fn max_comment_percentage(&self) -> f64 {
        self.0.iter().map(|s| s.comment_percentage).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Default)]
struct QualitySum {
    comment_percentage: f64,
    complexity: f64,
    count: usize,
}

impl QualitySum {
    fn add(&mut self, quality: &CodeQuality) {
        self.comment_percentage += quality.comment_percentage.unwrap_or(0.0);
        self.complexity += quality.complexity.unwrap_or(0.0);
        self.count += 1;
    }

    fn into_sample(self, date: String) -> QualitySample {
        let average = |sum: f64| {
            if self.count == 0 {
                0.0
            } else {
                sum / self.count as f64
            }
        };
        QualitySample {
            date,
            comment_percentage: average(self.comment_percentage),
            complexity: average(self.complexity),
            samples: self.count,
        }
    }
}
