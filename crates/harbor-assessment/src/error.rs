use thiserror::Error;

/// Data-integrity problems in a question bank. Raised once, at construction.
#[derive(Debug, Error, PartialEq)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateId(String),

    #[error("question '{id}' has invalid weight {weight}")]
    InvalidWeight { id: String, weight: f64 },

    #[error("multiple-choice question '{0}' needs at least two options")]
    TooFewOptions(String),

    #[error("scale question '{id}' has invalid range [{min}, {max}]")]
    InvalidScale { id: String, min: i32, max: i32 },
}

/// An answer whose value is outside its question's domain.
#[derive(Debug, Error, PartialEq)]
pub enum AnswerError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("question '{id}': value {value} is not a whole number")]
    NotWhole { id: String, value: f64 },

    #[error("question '{id}': value {value} is outside [{min}, {max}]")]
    OutOfRange {
        id: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum FlowError {
    #[error("assessment is already completed")]
    Completed,

    #[error(transparent)]
    InvalidAnswer(#[from] AnswerError),
}
