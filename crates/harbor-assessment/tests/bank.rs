use harbor_assessment::error::{AnswerError, BankError};
use harbor_assessment::programs::{all_programs, get_program, resolve};
use harbor_assessment::tiers::tier_content;
use harbor_assessment::{Question, QuestionBank, QuestionKind, calculate_result, default_bank};
use harbor_core::models::assessment::{Answer, Level};

fn question(id: &str, kind: QuestionKind, weight: f64) -> Question {
    Question {
        id: id.to_string(),
        text: "?".to_string(),
        kind,
        weight,
    }
}

#[test]
fn empty_bank_is_rejected() {
    assert_eq!(QuestionBank::new(vec![]), Err(BankError::Empty));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = QuestionBank::new(vec![
        question("a", QuestionKind::YesNo, 1.0),
        question("a", QuestionKind::YesNo, 1.0),
    ])
    .unwrap_err();
    assert_eq!(err, BankError::DuplicateId("a".to_string()));
}

#[test]
fn non_positive_weights_are_rejected() {
    for weight in [0.0, -1.0, f64::NAN] {
        let err = QuestionBank::new(vec![question("a", QuestionKind::YesNo, weight)]).unwrap_err();
        assert!(matches!(err, BankError::InvalidWeight { .. }));
    }
}

#[test]
fn degenerate_question_shapes_are_rejected() {
    let err = QuestionBank::new(vec![question(
        "mc",
        QuestionKind::MultipleChoice { options: vec![] },
        1.0,
    )])
    .unwrap_err();
    assert_eq!(err, BankError::TooFewOptions("mc".to_string()));

    let labels = ("lo".to_string(), "hi".to_string());
    let err = QuestionBank::new(vec![question(
        "sc",
        QuestionKind::Scale {
            min: 0,
            max: 0,
            labels: labels.clone(),
        },
        1.0,
    )])
    .unwrap_err();
    assert!(matches!(err, BankError::InvalidScale { .. }));

    let err = QuestionBank::new(vec![question(
        "sc",
        QuestionKind::Scale {
            min: 5,
            max: 3,
            labels,
        },
        1.0,
    )])
    .unwrap_err();
    assert!(matches!(err, BankError::InvalidScale { .. }));
}

#[test]
fn single_option_question_cannot_form_a_zero_maximum_bank() {
    let single = QuestionBank::new(vec![question(
        "only",
        QuestionKind::MultipleChoice {
            options: vec!["A".to_string()],
        },
        1.0,
    )]);
    assert_eq!(single, Err(BankError::TooFewOptions("only".to_string())));

    let json = serde_json::json!([{
        "id": "only",
        "text": "?",
        "kind": { "type": "multiple-choice", "options": ["A"] },
        "weight": 1.0
    }]);
    assert!(serde_json::from_value::<QuestionBank>(json).is_err());

    let pair = QuestionBank::new(vec![question(
        "pair",
        QuestionKind::MultipleChoice {
            options: vec!["A".to_string(), "B".to_string()],
        },
        1.0,
    )])
    .unwrap();
    assert!(pair.max_possible_score() > 0.0);
    assert_eq!(calculate_result(&[], &pair).score, 0);
}

#[test]
fn check_answer_enforces_each_kind_of_domain() {
    let bank = default_bank();
    assert!(bank.check_answer(&Answer::new("frequency", 4.0)).is_ok());
    assert!(matches!(
        bank.check_answer(&Answer::new("frequency", 5.0)),
        Err(AnswerError::OutOfRange { .. })
    ));
    assert!(bank.check_answer(&Answer::new("cravings", 10.0)).is_ok());
    assert!(matches!(
        bank.check_answer(&Answer::new("cravings", -1.0)),
        Err(AnswerError::OutOfRange { .. })
    ));
    assert!(matches!(
        bank.check_answer(&Answer::new("cut_down", 0.5)),
        Err(AnswerError::NotWhole { .. })
    ));
    assert_eq!(
        bank.check_answer(&Answer::new("nope", 0.0)),
        Err(AnswerError::UnknownQuestion("nope".to_string()))
    );
}

#[test]
fn bank_round_trips_through_json_with_validation() {
    let json = serde_json::to_value(default_bank()).unwrap();
    let first = &json[0];
    assert_eq!(first["id"], "frequency");
    assert_eq!(first["kind"]["type"], "multiple-choice");
    assert_eq!(json[1]["kind"]["type"], "scale");
    assert_eq!(json[2]["kind"]["type"], "yes-no");
    assert_eq!(json[1]["kind"]["scaleMin"], 0);
    assert_eq!(json[1]["kind"]["scaleMax"], 10);
    assert!(json[1]["kind"]["scaleLabels"].is_array());
    assert!(json[1]["kind"].get("min").is_none());

    let back: QuestionBank = serde_json::from_value(json).unwrap();
    assert_eq!(&back, default_bank());

    let invalid: Result<QuestionBank, _> = serde_json::from_str("[]");
    assert!(invalid.is_err());
}

#[test]
fn labels_follow_question_kind() {
    let bank = default_bank();
    assert_eq!(
        bank.find("frequency").unwrap().label_for(4.0).as_deref(),
        Some("Daily")
    );
    assert_eq!(bank.find("cut_down").unwrap().label_for(1.0).as_deref(), Some("Yes"));
    assert_eq!(bank.find("frequency").unwrap().label_for(9.0), None);
}

#[test]
fn tier_table_has_copy_for_every_level() {
    for level in [Level::Mild, Level::Moderate, Level::Severe] {
        let content = tier_content(level);
        assert!(!content.title.is_empty());
        assert!(!content.description.is_empty());
        assert!(!content.recommendations.is_empty());
        for id in content.programs {
            assert!(get_program(id).is_some(), "{level}: unknown program {id}");
        }
    }
}

#[test]
fn program_catalog_lookup() {
    assert_eq!(all_programs().len(), 5);
    assert_eq!(
        get_program("guided-coaching").map(|p| p.name),
        Some("Guided Coaching")
    );
    assert!(get_program("missing").is_none());

    let resolved = resolve(&["family-support".to_string(), "missing".to_string()]);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, "family-support");
}
