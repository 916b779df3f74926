use crate::compliance::domain::WizardField;
use crate::compliance::knowledge::{
    case_study_database, determination_database, explanation_for, lookup_case_study,
    lookup_determination, CaseStudyKey, DeterminationKey, EXPLANATIONS,
};

const CITED_DETERMINATIONS: [&str; 12] = [
    "zero_pitch",
    "low_pitch_repair",
    "skillion_vent",
    "truss_cow",
    "dormer_fire",
    "container_roof",
    "attic_storage",
    "underlay_uv",
    "flashing_laps",
    "flue_gap",
    "membrane_sub",
    "spray_foam",
];

#[test]
fn every_cited_determination_exists() {
    for key in CITED_DETERMINATIONS {
        let record = lookup_determination(key).unwrap_or_else(|| panic!("missing {key}"));
        assert_eq!(record.key, key);
        assert!(!record.id.is_empty());
        assert!(record.file.ends_with(".pdf"));
    }
    assert_eq!(determination_database().len(), CITED_DETERMINATIONS.len());
}

#[test]
fn determination_keys_resolve_to_matching_records() {
    for key in DeterminationKey::ordered() {
        assert_eq!(key.record().key, key.as_str());
        assert!(determination_database().contains_key(key.as_str()));
    }
}

#[test]
fn case_study_keys_resolve_to_matching_records() {
    for key in CaseStudyKey::ordered() {
        let record = lookup_case_study(key.as_str()).expect("case study present");
        assert_eq!(record, key.record());
        assert!(record.id.starts_with("BPB"));
    }
    assert_eq!(case_study_database().len(), CaseStudyKey::ordered().len());
}

#[test]
fn citation_ids_are_unique() {
    let mut ids: Vec<&str> = determination_database()
        .values()
        .map(|record| record.id)
        .chain(case_study_database().values().map(|record| record.id))
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn unknown_keys_are_absent() {
    assert!(lookup_determination("gutter_overflow").is_none());
    assert!(lookup_case_study("zero_pitch").is_none());
}

#[test]
fn every_question_has_an_explanation() {
    for field in WizardField::ordered() {
        let explanation = explanation_for(field).expect("explanation present");
        assert_eq!(explanation.field, field.as_str());
    }
    assert_eq!(EXPLANATIONS.len(), WizardField::ordered().len());
}

#[test]
fn determination_serialises_alert_type_as_type() {
    let value = serde_json::to_value(DeterminationKey::ZeroPitch.record()).expect("serialises");
    assert_eq!(value["type"], "danger-box");
    assert_eq!(value["id"], "Det 2016/016");
}
