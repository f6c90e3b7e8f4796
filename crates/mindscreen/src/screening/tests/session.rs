use super::common::*;

use crate::screening::domain::{Answer, FeatureField};
use crate::screening::locale::Locale;
use crate::screening::session::{AnswerInput, FormSession, FormState, InputRejected};

#[test]
fn age_bounds_are_inclusive() {
    let mut session = FormSession::new(Locale::English);

    session.set_age(18).expect("lower bound accepted");
    assert_eq!(session.answers().get(FeatureField::Age), Some(&Answer::Number(18)));
    session.set_age(34).expect("upper bound accepted");
    assert_eq!(session.answers().get(FeatureField::Age), Some(&Answer::Number(34)));

    for rejected in [17, 35, -1, 300] {
        match session.set_age(rejected) {
            Err(InputRejected::OutOfRange { field, value, min, max }) => {
                assert_eq!(field, FeatureField::Age);
                assert_eq!(value, rejected);
                assert_eq!((min, max), (18, 34));
            }
            other => panic!("expected out-of-range rejection, got {other:?}"),
        }
    }

    assert_eq!(session.answers().get(FeatureField::Age), Some(&Answer::Number(34)));
}

#[test]
fn study_hours_accept_zero_through_twelve() {
    let mut session = FormSession::new(Locale::Indonesian);

    session.set_study_hours(0).expect("zero accepted");
    session.set_study_hours(12).expect("twelve accepted");
    assert_eq!(
        session.answers().get(FeatureField::StudyHours),
        Some(&Answer::Choice("12".to_string()))
    );

    assert!(matches!(
        session.set_study_hours(13),
        Err(InputRejected::OutOfRange { field: FeatureField::StudyHours, .. })
    ));
    assert!(matches!(
        session.select(FeatureField::StudyHours, "13"),
        Err(InputRejected::UnknownOption { field: FeatureField::StudyHours, .. })
    ));
}

#[test]
fn sentinel_clears_a_previous_selection() {
    let mut session = scenario_session(Locale::Indonesian);
    assert_eq!(session.state(), FormState::Ready);

    session
        .select(FeatureField::DietaryHabits, Locale::Indonesian.sentinel())
        .expect("sentinel accepted");

    assert!(!session.answers().contains(FeatureField::DietaryHabits));
    assert_eq!(
        session.state(),
        FormState::Incomplete {
            missing: vec![FeatureField::DietaryHabits]
        }
    );
}

#[test]
fn fresh_session_reports_every_field_missing_in_order() {
    let session = FormSession::new(Locale::English);
    match session.ready() {
        Err(missing) => assert_eq!(missing, FeatureField::ordered().to_vec()),
        Ok(_) => panic!("empty session must not be ready"),
    }
}

#[test]
fn rejected_input_leaves_answers_untouched() {
    let mut session = scenario_session(Locale::English);
    let before = session.answers().clone();

    assert!(session.select(FeatureField::Gender, "Laki-laki").is_err());
    assert!(session.select(FeatureField::Age, "22").is_err());
    assert!(session.set_age(40).is_err());
    assert!(session
        .apply(FeatureField::SleepDuration, &AnswerInput::Number(6))
        .is_err());

    assert_eq!(session.answers(), &before);
}

#[test]
fn apply_routes_raw_client_values() {
    let mut session = FormSession::new(Locale::English);

    session
        .apply(FeatureField::Age, &AnswerInput::from("21"))
        .expect("numeric text accepted for age");
    session
        .apply(FeatureField::StudyHours, &AnswerInput::from(7_i64))
        .expect("number accepted for study hours");
    session
        .apply(FeatureField::Gender, &AnswerInput::from("Female"))
        .expect("display string accepted");

    assert_eq!(session.answers().get(FeatureField::Age), Some(&Answer::Number(21)));
    assert_eq!(
        session.answers().get(FeatureField::StudyHours),
        Some(&Answer::Choice("7".to_string()))
    );

    assert!(matches!(
        session.apply(FeatureField::Age, &AnswerInput::from("twenty")),
        Err(InputRejected::ExpectedNumber { field: FeatureField::Age, .. })
    ));

    session
        .apply(FeatureField::Age, &AnswerInput::from(""))
        .expect("blank clears age");
    assert!(!session.answers().contains(FeatureField::Age));
}

#[test]
fn study_hours_entered_as_number_or_choice_are_equivalent() {
    let mut by_number = scenario_session(Locale::English);
    let mut by_choice = scenario_session(Locale::English);

    by_number.set_study_hours(5).expect("accepted");
    by_choice
        .select(FeatureField::StudyHours, "5")
        .expect("accepted");

    assert_eq!(by_number.answers(), by_choice.answers());
}
