use super::common::*;
use crate::compliance::domain::{
    ComplexRisk, ExecTask, InputError, Pathway, Supervision, WizardField, WizardInputs,
    WizardSubmission,
};

fn planning_submission() -> WizardSubmission {
    WizardSubmission {
        pathway: Some("planning".to_string()),
        scope: Some("replace_same".to_string()),
        pitch: Some("low".to_string()),
        complex: vec!["none".to_string()],
        age: Some("old".to_string()),
        consent_status: Some("yes".to_string()),
        ..WizardSubmission::default()
    }
}

#[test]
fn valid_submission_converts_to_inputs() {
    let inputs = WizardInputs::try_from(planning_submission()).expect("valid submission");
    assert_eq!(inputs, low_pitch_repair());
}

#[test]
fn unknown_enum_value_is_rejected_with_field_name() {
    let submission = WizardSubmission {
        pitch: Some("steep".to_string()),
        ..planning_submission()
    };

    match WizardInputs::try_from(submission) {
        Err(InputError::UnknownValue {
            field,
            value,
            expected,
        }) => {
            assert_eq!(field, WizardField::Pitch);
            assert_eq!(value, "steep");
            assert_eq!(expected, "standard, low, zero");
        }
        other => panic!("expected unknown value error, got {other:?}"),
    }
}

#[test]
fn unknown_complex_tag_is_rejected() {
    let submission = WizardSubmission {
        complex: vec!["skillion".to_string(), "chimney".to_string()],
        ..planning_submission()
    };

    match WizardInputs::try_from(submission) {
        Err(InputError::UnknownValue { field, value, .. }) => {
            assert_eq!(field, WizardField::Complex);
            assert_eq!(value, "chimney");
        }
        other => panic!("expected unknown complex tag, got {other:?}"),
    }
}

#[test]
fn licence_errors_name_the_licence_field() {
    let submission = WizardSubmission {
        pathway: Some("execution".to_string()),
        licence: Some("maybe".to_string()),
        ..WizardSubmission::default()
    };

    match WizardInputs::try_from(submission) {
        Err(InputError::UnknownValue { field, .. }) => assert_eq!(field, WizardField::Licence),
        other => panic!("expected licence error, got {other:?}"),
    }
}

#[test]
fn blank_values_are_treated_as_unanswered() {
    let submission = WizardSubmission {
        pathway: Some("  ".to_string()),
        complex: vec![String::new()],
        ..WizardSubmission::default()
    };

    let inputs = WizardInputs::try_from(submission).expect("blank values accepted");
    assert_eq!(inputs, WizardInputs::default());
}

#[test]
fn answers_are_case_and_whitespace_insensitive() {
    let mut inputs = WizardInputs::default();
    inputs
        .apply_answer(WizardField::Pathway, " Execution ")
        .expect("valid pathway");
    inputs
        .apply_answer(WizardField::Supervision, "SELF")
        .expect("valid supervision");
    inputs
        .apply_answer(WizardField::ExecTask, "none")
        .expect("valid task");

    assert_eq!(inputs.pathway, Some(Pathway::Execution));
    assert_eq!(inputs.supervision, Some(Supervision::SelfPerformed));
    assert_eq!(inputs.exec_task, Some(ExecTask::NoTask));
}

#[test]
fn complex_answer_accepts_comma_separated_tags() {
    let mut inputs = WizardInputs::planning();
    inputs
        .apply_answer(WizardField::Complex, "skillion, h1_upgrade,")
        .expect("valid tags");

    assert_eq!(
        inputs.complex,
        risks(&[ComplexRisk::Skillion, ComplexRisk::H1Upgrade])
    );

    inputs.clear_answer(WizardField::Complex);
    assert!(inputs.complex.is_empty());
}

#[test]
fn field_names_parse_from_wire_names() {
    for field in WizardField::ordered() {
        assert_eq!(field.as_str().parse::<WizardField>(), Ok(field));
        assert!(!field.options().is_empty());
    }
    assert_eq!(
        "roof_colour".parse::<WizardField>(),
        Err(InputError::UnknownField("roof_colour".to_string()))
    );
}

#[test]
fn submission_round_trips_through_inputs() {
    let inputs = residential_execution();
    let submission = WizardSubmission::from(&inputs);

    assert_eq!(submission.b_type.as_deref(), Some("residential"));
    assert_eq!(submission.supervision.as_deref(), Some("self"));
    assert_eq!(submission.discovery.as_deref(), Some("checked_ok"));
    assert_eq!(WizardInputs::try_from(submission), Ok(inputs));
}

#[test]
fn inputs_deserialise_from_wire_json() {
    let inputs: WizardInputs = serde_json::from_value(serde_json::json!({
        "pathway": "execution",
        "b_type": "rental",
        "exec_task": "finish_eaves",
        "discovery": "none",
        "supervision": "remote",
    }))
    .expect("inputs deserialise");

    assert_eq!(inputs.exec_task, Some(ExecTask::FinishEaves));
    assert_eq!(inputs.supervision, Some(Supervision::Remote));
    assert!(inputs.complex.is_empty());
}

#[test]
fn submitted_complex_tags_may_be_comma_separated() {
    let submission = WizardSubmission {
        complex: vec!["truss,solar".to_string(), " skillion ".to_string()],
        ..planning_submission()
    };

    let inputs = WizardInputs::try_from(submission).expect("valid tags");
    assert_eq!(
        inputs.complex,
        risks(&[ComplexRisk::Truss, ComplexRisk::Solar, ComplexRisk::Skillion])
    );

    let mut stepped = WizardInputs::planning();
    stepped
        .apply_answer(WizardField::Complex, "truss,solar, skillion")
        .expect("valid tags");
    assert_eq!(stepped.complex, inputs.complex);
}

#[test]
fn comma_separated_submission_reports_trimmed_unknown_tag() {
    let submission = WizardSubmission {
        complex: vec!["truss, chimney".to_string()],
        ..planning_submission()
    };

    match WizardInputs::try_from(submission) {
        Err(InputError::UnknownValue { field, value, .. }) => {
            assert_eq!(field, WizardField::Complex);
            assert_eq!(value, "chimney");
        }
        other => panic!("expected unknown complex tag, got {other:?}"),
    }
}

#[test]
fn empty_complex_answer_is_rejected() {
    let mut inputs = WizardInputs {
        complex: risks(&[ComplexRisk::Truss]),
        ..WizardInputs::planning()
    };

    for raw in ["", " , "] {
        assert_eq!(
            inputs.apply_answer(WizardField::Complex, raw),
            Err(InputError::EmptyAnswer(WizardField::Complex))
        );
    }
    assert_eq!(inputs.complex, risks(&[ComplexRisk::Truss]));
}
