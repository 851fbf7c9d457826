use std::collections::HashSet;

use harbor_core::models::assessment::Answer;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{AnswerError, BankError};

/// How a question is answered, and therefore how its answer is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionKind {
    /// Scored by the 0-based position of the chosen option.
    MultipleChoice { options: Vec<String> },
    /// Scored by the chosen point, `min..=max`.
    Scale {
        #[serde(rename = "scaleMin")]
        min: i32,
        #[serde(rename = "scaleMax")]
        max: i32,
        /// Low-end and high-end labels.
        #[serde(rename = "scaleLabels")]
        labels: (String, String),
    },
    /// Scored 0 for No, 1 for Yes.
    YesNo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub weight: f64,
}

impl Question {
    /// Largest weighted value an answer to this question can contribute.
    pub fn max_contribution(&self) -> f64 {
        let raw_max = match &self.kind {
            QuestionKind::MultipleChoice { options } => options.len().saturating_sub(1) as f64,
            QuestionKind::Scale { max, .. } => f64::from(*max),
            QuestionKind::YesNo => 1.0,
        };
        raw_max * self.weight
    }

    /// Inclusive range of raw answer values this question accepts.
    pub fn value_range(&self) -> (f64, f64) {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => {
                (0.0, options.len().saturating_sub(1) as f64)
            }
            QuestionKind::Scale { min, max, .. } => (f64::from(*min), f64::from(*max)),
            QuestionKind::YesNo => (0.0, 1.0),
        }
    }

    /// Display label for a raw value, when the question defines one.
    pub fn label_for(&self, value: f64) -> Option<String> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => {
                if value < 0.0 || value.fract() != 0.0 {
                    return None;
                }
                options.get(value as usize).cloned()
            }
            QuestionKind::Scale { .. } => Some(format!("{value}")),
            QuestionKind::YesNo => match value {
                v if v == 0.0 => Some("No".to_string()),
                v if v == 1.0 => Some("Yes".to_string()),
                _ => None,
            },
        }
    }

    fn check(&self) -> Result<(), BankError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(BankError::InvalidWeight {
                id: self.id.clone(),
                weight: self.weight,
            });
        }
        match &self.kind {
            QuestionKind::MultipleChoice { options } if options.len() < 2 => {
                Err(BankError::TooFewOptions(self.id.clone()))
            }
            QuestionKind::Scale { min, max, .. } if *max <= 0 || min > max => {
                Err(BankError::InvalidScale {
                    id: self.id.clone(),
                    min: *min,
                    max: *max,
                })
            }
            _ => Ok(()),
        }
    }
}

/// An ordered, validated list of questions.
///
/// Construction enforces the preconditions the scoring rules rely on, so a
/// bank that exists always has a positive maximum score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(BankError::DuplicateId(question.id.clone()));
            }
            question.check()?;
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Sum of every question's maximum contribution.
    pub fn max_possible_score(&self) -> f64 {
        self.questions.iter().map(Question::max_contribution).sum()
    }

    /// Check that an answer refers to a known question and lies in its domain.
    pub fn check_answer(&self, answer: &Answer) -> Result<(), AnswerError> {
        let question = self
            .find(&answer.question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(answer.question_id.clone()))?;

        if !answer.value.is_finite() || answer.value.fract() != 0.0 {
            return Err(AnswerError::NotWhole {
                id: question.id.clone(),
                value: answer.value,
            });
        }

        let (min, max) = question.value_range();
        if answer.value < min || answer.value > max {
            return Err(AnswerError::OutOfRange {
                id: question.id.clone(),
                value: answer.value,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Question>> for QuestionBank {
    type Error = BankError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<QuestionBank> for Vec<Question> {
    fn from(bank: QuestionBank) -> Self {
        bank.questions
    }
}
