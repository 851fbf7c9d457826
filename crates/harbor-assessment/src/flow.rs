use harbor_core::models::assessment::{Answer, AssessmentResult};

use crate::error::FlowError;
use crate::question::{Question, QuestionBank};
use crate::scoring::calculate_result;

#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    InProgress {
        current_index: usize,
        answers: Vec<Answer>,
    },
    Completed {
        answers: Vec<Answer>,
        result: AssessmentResult,
    },
}

impl FlowState {
    fn initial() -> Self {
        FlowState::InProgress {
            current_index: 0,
            answers: Vec::new(),
        }
    }
}

/// What a navigation call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advanced,
    Retreated,
    Completed,
    Unchanged,
}

/// One questionnaire session: which question is showing and what has been
/// answered so far. Owned by a single session, never shared.
#[derive(Debug, Clone)]
pub struct AssessmentFlow<'a> {
    bank: &'a QuestionBank,
    state: FlowState,
}

impl<'a> AssessmentFlow<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            state: FlowState::initial(),
        }
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, FlowState::Completed { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            FlowState::InProgress { current_index, .. } => Some(*current_index),
            FlowState::Completed { .. } => None,
        }
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.current_index().and_then(|i| self.bank.get(i))
    }

    pub fn answers(&self) -> &[Answer] {
        match &self.state {
            FlowState::InProgress { answers, .. } | FlowState::Completed { answers, .. } => answers,
        }
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        let question = self.current_question()?;
        self.answers().iter().find(|a| a.question_id == question.id)
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.state {
            FlowState::Completed { result, .. } => Some(result),
            FlowState::InProgress { .. } => None,
        }
    }

    /// Fraction of the questionnaire reached, `(index + 1) / total`.
    pub fn progress(&self) -> f64 {
        match &self.state {
            FlowState::InProgress { current_index, .. } => {
                (*current_index + 1) as f64 / self.bank.len() as f64
            }
            FlowState::Completed { .. } => 1.0,
        }
    }

    /// Record an answer for the current question, replacing any earlier one.
    /// Does not advance.
    pub fn answer(&mut self, value: f64, text: Option<String>) -> Result<(), FlowError> {
        let FlowState::InProgress {
            current_index,
            answers,
        } = &mut self.state
        else {
            return Err(FlowError::Completed);
        };
        let Some(question) = self.bank.get(*current_index) else {
            return Err(FlowError::Completed);
        };

        let text = text.or_else(|| question.label_for(value));
        let answer = Answer {
            question_id: question.id.clone(),
            value,
            text,
        };
        self.bank.check_answer(&answer)?;

        match answers.iter_mut().find(|a| a.question_id == question.id) {
            Some(existing) => *existing = answer,
            None => answers.push(answer),
        }
        Ok(())
    }

    /// Move to the next question, or score the run from the last one.
    /// Ignored while the current question is unanswered.
    pub fn next(&mut self) -> Step {
        let FlowState::InProgress {
            current_index,
            answers,
        } = &mut self.state
        else {
            return Step::Unchanged;
        };
        let Some(question) = self.bank.get(*current_index) else {
            return Step::Unchanged;
        };
        if !answers.iter().any(|a| a.question_id == question.id) {
            return Step::Unchanged;
        }

        if *current_index + 1 < self.bank.len() {
            *current_index += 1;
            return Step::Advanced;
        }

        let answers = std::mem::take(answers);
        let result = calculate_result(&answers, self.bank);
        tracing::debug!(score = result.score, level = %result.level, "assessment completed");
        self.state = FlowState::Completed { answers, result };
        Step::Completed
    }

    pub fn previous(&mut self) -> Step {
        match &mut self.state {
            FlowState::InProgress { current_index, .. } if *current_index > 0 => {
                *current_index -= 1;
                Step::Retreated
            }
            _ => Step::Unchanged,
        }
    }

    /// Discard all answers and any result and start over.
    pub fn restart(&mut self) {
        self.state = FlowState::initial();
    }
}
