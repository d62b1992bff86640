use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub timestamp: String,
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<Changes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Changes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_quality: Option<CodeQuality>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeQuality {
    #[serde(default)]
    pub comment_percentage: Option<f64>,
    #[serde(default)]
    pub complexity: Option<f64>,
}

// Create
impl ActivityRecord {
    pub fn new(timestamp: impl ToString, project: impl ToString) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            project: project.to_string(),
            changes: None,
        }
    }

    pub fn with_quality(mut self, comment_percentage: f64, complexity: f64) -> Self {
        self.changes = Some(Changes {
            code_quality: Some(CodeQuality {
                comment_percentage: Some(comment_percentage),
                complexity: Some(complexity),
            }),
        });
        self
    }
}

// Accessors
impl ActivityRecord {
    /// UTC calendar day; timestamps that are not RFC 3339 are cut at the first `T`.
    pub fn date(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(datetime) => datetime
                .with_timezone(&Utc)
                .date_naive()
                .format("%Y-%m-%d")
                .to_string(),
            Err(_) => self
                .timestamp
                .split('T')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn code_quality(&self) -> Option<&CodeQuality> {
        self.changes.as_ref()?.code_quality.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_with_nested_quality() {
        let json = r#"{
            "timestamp": "2024-03-05T10:15:00Z",
            "project": "atlas",
            "changes": {"codeQuality": {"commentPercentage": 12.5, "complexity": 3}},
            "linesAdded": 40
        }"#;
        let record: ActivityRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record.project, "atlas");
        let quality = record.code_quality().expect("quality");
        assert_eq!(quality.comment_percentage, Some(12.5));
        assert_eq!(quality.complexity, Some(3.0));
    }

    #[test]
    fn partial_quality_keeps_the_record() {
        let json = r#"{
            "timestamp": "2024-03-05T10:15:00Z",
            "project": "atlas",
            "changes": {"codeQuality": {"complexity": 3, "commentPercentage": null}}
        }"#;
        let record: ActivityRecord = serde_json::from_str(json).expect("parse record");
        let quality = record.code_quality().expect("quality");
        assert_eq!(quality.complexity, Some(3.0));
        assert_eq!(quality.comment_percentage, None);
    }

    #[test]
    fn changes_without_quality_is_not_a_sample() {
        let json = r#"{"timestamp": "2024-03-05T10:15:00Z", "project": "atlas", "changes": {}}"#;
        let record: ActivityRecord = serde_json::from_str(json).expect("parse record");
        assert!(record.changes.is_some());
        assert!(record.code_quality().is_none());
    }

    #[test]
    fn date_is_taken_in_utc() {
        let record = ActivityRecord::new("2024-01-01T23:30:00-02:00", "a");
        assert_eq!(record.date(), "2024-01-02");
    }

    #[test]
    fn unparsable_timestamp_is_truncated_at_time_separator() {
        let record = ActivityRecord::new("2024-01-01Tnot-a-time", "a");
        assert_eq!(record.date(), "2024-01-01");
        let record = ActivityRecord::new("2024-01-01", "a");
        assert_eq!(record.date(), "2024-01-01");
    }
}
