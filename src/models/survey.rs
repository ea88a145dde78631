use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Setup {
    #[serde(rename = "Second Entry")]
    SecondEntry,
    Fade,
    Trap,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Confident,
    Doubtful,
    Impulsive,
    Fearful,
}

/// One trader self-assessment, keyed by a caller-assigned trade id.
///
/// Entries are submitted whole; there is no partial update. The persisted
/// form is a flat JSON array of these objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyEntry {
    pub id: i64,
    pub expectation: i64,
    pub setup: Setup,
    pub trend: Trend,
    #[serde(rename = "stopLossMoved")]
    pub stop_loss_moved: bool,
    pub emotion: Emotion,
    pub comment: String,
}

/// Result envelope for a survey upsert, marshaled by the routing layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SurveyOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> SurveyEntry {
        SurveyEntry {
            id: 7,
            expectation: 3,
            setup: Setup::SecondEntry,
            trend: Trend::Bullish,
            stop_loss_moved: false,
            emotion: Emotion::Confident,
            comment: "Clean pullback entry".to_string(),
        }
    }

    #[test]
    fn test_entry_serializes_with_wire_field_names() {
        let json = serde_json::to_string(&sample_entry()).unwrap();

        assert!(json.contains("\"stopLossMoved\":false"));
        assert!(json.contains("\"setup\":\"Second Entry\""));
        assert!(json.contains("\"trend\":\"Bullish\""));
        assert!(json.contains("\"emotion\":\"Confident\""));
    }

    #[test]
    fn test_entry_round_trips() {
        let entry = sample_entry();
        let json = serde_json::to_string_pretty(&entry).unwrap();
        let back: SurveyEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(back, entry);
    }

    #[test]
    fn test_outcome_error_is_omitted_on_success() {
        let json = serde_json::to_string(&SurveyOutcome::ok()).unwrap();
        assert_eq!(json, "{\"success\":true}");

        let json = serde_json::to_string(&SurveyOutcome::error("disk full")).unwrap();
        assert_eq!(json, "{\"success\":false,\"error\":\"disk full\"}");
    }
}
