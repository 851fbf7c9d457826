use harbor_core::models::assessment::{Answer, AssessmentResult, Level};

use crate::question::QuestionBank;
use crate::tiers::tier_content;

/// Highest percentage still classified as [`Level::Mild`].
pub const MILD_MAX_PERCENT: f64 = 30.0;

/// Highest percentage still classified as [`Level::Moderate`].
pub const MODERATE_MAX_PERCENT: f64 = 60.0;

/// Weighted sum of the answered values. Unanswered questions add nothing.
///
/// When an answer set holds several answers for one question the last one wins.
pub fn total_score(answers: &[Answer], bank: &QuestionBank) -> f64 {
    bank.questions()
        .iter()
        .filter_map(|question| {
            answers
                .iter()
                .rev()
                .find(|a| a.question_id == question.id)
                .map(|a| a.value * question.weight)
        })
        .sum()
}

/// Unrounded weighted percentage of the bank's maximum score.
///
/// # Panics
///
/// Panics if the bank's maximum score is not positive. [`QuestionBank::new`]
/// rules that out, so hitting it means the static data is corrupt.
pub fn percentage(answers: &[Answer], bank: &QuestionBank) -> f64 {
    let max_possible = bank.max_possible_score();
    assert!(
        max_possible > 0.0,
        "question bank has no scorable questions (max score {max_possible})"
    );
    total_score(answers, bank) * 100.0 / max_possible
}

/// Tier for an unrounded percentage. Boundaries belong to the lower tier.
pub fn classify(percentage: f64) -> Level {
    if percentage <= MILD_MAX_PERCENT {
        Level::Mild
    } else if percentage <= MODERATE_MAX_PERCENT {
        Level::Moderate
    } else {
        Level::Severe
    }
}

/// Score a (possibly partial) answer set against a question bank.
///
/// Missing answers count as zero but their question still contributes its
/// full maximum to the denominator.
pub fn calculate_result(answers: &[Answer], bank: &QuestionBank) -> AssessmentResult {
    let percentage = percentage(answers, bank);
    let level = classify(percentage);
    let content = tier_content(level);

    tracing::debug!(percentage, level = %level, answered = answers.len(), "assessment scored");

    AssessmentResult {
        score: percentage.round().clamp(0.0, 100.0) as u8,
        level,
        title: content.title.to_string(),
        description: content.description.to_string(),
        recommendations: content.recommendations.iter().map(|r| r.to_string()).collect(),
        programs: content.programs.iter().map(|p| p.to_string()).collect(),
    }
}
