use std::sync::LazyLock;

use crate::question::{Question, QuestionBank, QuestionKind};

/// The recovery self-assessment shown on the public site.
///
/// Every scale starts at 0 so that an all-minimum run scores 0%.
pub fn default_bank() -> &'static QuestionBank {
    static BANK: LazyLock<QuestionBank> = LazyLock::new(|| {
        QuestionBank::new(vec![
            multiple_choice(
                "frequency",
                "How often have you used alcohol or drugs in the past month?",
                &["Not at all", "Once or twice", "Weekly", "Several times a week", "Daily"],
                1.5,
            ),
            scale(
                "cravings",
                "How strong are your cravings on a typical day?",
                ("No cravings", "Overwhelming"),
                1.0,
            ),
            yes_no(
                "cut_down",
                "Have you tried to cut down or stop and found you couldn't?",
                1.0,
            ),
            multiple_choice(
                "responsibilities",
                "How often has your use gotten in the way of work, school or family commitments?",
                &["Never", "Rarely", "Sometimes", "Often"],
                1.0,
            ),
            yes_no(
                "relationships",
                "Have friends or family expressed concern about your use?",
                1.0,
            ),
            scale(
                "stress",
                "How much do you rely on substances to cope with stress?",
                ("Not at all", "Completely"),
                1.0,
            ),
            yes_no(
                "withdrawal",
                "Do you feel physically unwell when you go without?",
                1.5,
            ),
            multiple_choice(
                "time_spent",
                "How much of your day is spent getting, using or recovering from substances?",
                &["Almost none", "A little", "A fair amount", "Most of it"],
                1.0,
            ),
            scale(
                "confidence",
                "How difficult would it be to stay sober for the next 30 days on your own?",
                ("Easy", "Impossible"),
                1.0,
            ),
            yes_no(
                "support",
                "Are you currently without a sober support network you can call on?",
                1.0,
            ),
        ])
        .expect("default question bank is well-formed")
    });
    &BANK
}

fn multiple_choice(id: &str, text: &str, options: &[&str], weight: f64) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::MultipleChoice {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
        weight,
    }
}

fn scale(id: &str, text: &str, labels: (&str, &str), weight: f64) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::Scale {
            min: 0,
            max: 10,
            labels: (labels.0.to_string(), labels.1.to_string()),
        },
        weight,
    }
}

fn yes_no(id: &str, text: &str, weight: f64) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::YesNo,
        weight,
    }
}
