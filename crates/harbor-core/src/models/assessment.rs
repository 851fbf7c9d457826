use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user's answer to a single question.
///
/// `value` is the option index for multiple-choice questions, the selected
/// point for scale questions and 0/1 for yes/no questions. `text` is a display
/// label only and never participates in scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: f64) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Coarse classification bucket for a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Level {
    Mild,
    Moderate,
    Severe,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Mild => "mild",
            Level::Moderate => "moderate",
            Level::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a completed assessment. Computed, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    /// Weighted percentage rounded to the nearest integer, 0–100.
    pub score: u8,
    pub level: Level,
    pub title: String,
    pub description: String,
    pub recommendations: Vec<String>,
    /// Program ids, in display order.
    pub programs: Vec<String>,
}
