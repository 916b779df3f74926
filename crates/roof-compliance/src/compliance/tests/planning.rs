use super::common::*;
use crate::compliance::domain::{
    BuildingAge, BuildingType, ComplexRisk, ConsentStatus, Discovery, RoofPitch, RoofScope,
    Supervision, WizardField, WizardInputs,
};
use crate::compliance::evaluation::evaluate_compliance;
use crate::compliance::evaluation::planning::{
    CERTIFICATE_OF_ACCEPTANCE_ACTION, LBP_MANDATORY_REASON, LBP_NOT_MANDATED_REASON,
};
use crate::compliance::knowledge::AlertType;
use crate::compliance::result::{ComplianceStatus, WarningSource};

#[test]
fn low_pitch_like_for_like_repair_is_likely_exempt() {
    let result = evaluate_compliance(&low_pitch_repair());

    assert_eq!(result.status, ComplianceStatus::LikelyExempt);
    assert_eq!(result.banner_class, AlertType::SuccessBox);
    assert_eq!(result.banner_title, "LIKELY EXEMPT");
    assert_eq!(result.warning_keys(), vec!["low_pitch_repair"]);
    assert_eq!(result.reasons.last().map(String::as_str), Some(LBP_NOT_MANDATED_REASON));
}

#[test]
fn low_pitch_override_beats_young_building_base_rule() {
    let mut inputs = low_pitch_repair();
    inputs.age = Some(BuildingAge::Young);

    let result = evaluate_compliance(&inputs);

    assert_eq!(result.status, ComplianceStatus::LikelyExempt);
    assert!(result.has_warning("low_pitch_repair"));
}

#[test]
fn truss_rule_forces_consent_back_after_low_pitch_override() {
    let mut inputs = low_pitch_repair();
    inputs.complex = risks(&[ComplexRisk::Truss]);

    let result = evaluate_compliance(&inputs);

    assert_eq!(result.status, ComplianceStatus::ConsentRequired);
    assert_eq!(result.warning_keys(), vec!["low_pitch_repair", "truss_cow"]);
    assert_eq!(result.reasons.last().map(String::as_str), Some(LBP_MANDATORY_REASON));
}

#[test]
fn container_rule_forces_consent_back_after_low_pitch_override() {
    let mut inputs = low_pitch_repair();
    inputs.complex = risks(&[ComplexRisk::Container]);

    let result = evaluate_compliance(&inputs);

    assert_eq!(result.status, ComplianceStatus::ConsentRequired);
    assert_eq!(
        result.warning_keys(),
        vec!["low_pitch_repair", "container_roof"]
    );
}

#[test]
fn gutter_tag_requires_consent_unless_low_pitch_override_applies() {
    let inputs = WizardInputs {
        pitch: Some(RoofPitch::Standard),
        complex: risks(&[ComplexRisk::Gutter]),
        ..low_pitch_repair()
    };
    let standard = evaluate_compliance(&inputs);
    assert_eq!(standard.status, ComplianceStatus::ConsentRequired);
    assert!(standard.has_warning("internal_gutters"));

    let low = evaluate_compliance(&WizardInputs {
        pitch: Some(RoofPitch::Low),
        ..inputs
    });
    assert_eq!(low.status, ComplianceStatus::LikelyExempt);
    assert_eq!(low.warning_keys(), vec!["low_pitch_repair", "internal_gutters"]);
}

#[test]
fn standard_pitch_like_for_like_on_old_roof_is_exempt() {
    let inputs = WizardInputs {
        pitch: Some(RoofPitch::Standard),
        ..low_pitch_repair()
    };

    let result = evaluate_compliance(&inputs);

    assert_eq!(result.status, ComplianceStatus::LikelyExempt);
    assert!(result.warnings.is_empty());
    assert_eq!(result.reasons, vec![LBP_NOT_MANDATED_REASON.to_string()]);
}

#[test]
fn young_roof_replacement_requires_consent() {
    let inputs = WizardInputs {
        pitch: Some(RoofPitch::Standard),
        age: Some(BuildingAge::Young),
        ..low_pitch_repair()
    };

    let result = evaluate_compliance(&inputs);

    assert_eq!(result.status, ComplianceStatus::ConsentRequired);
    assert!(result.reasons[0].contains("premature failure"));
}

#[test]
fn zero_pitch_new_build_requires_consent_and_cites_determination() {
    let result = evaluate_compliance(&new_zero_pitch_roof());

    assert_eq!(result.status, ComplianceStatus::ConsentRequired);
    assert_eq!(result.banner_title, "BUILDING CONSENT REQUIRED");
    assert_eq!(result.banner_class, AlertType::DangerBox);
    assert!(result.has_warning("zero_pitch"));
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("specific membrane design")));
}

#[test]
fn informational_tags_attach_warnings_in_rule_order() {
    let inputs = WizardInputs {
        complex: risks(&[
            ComplexRisk::Asbestos,
            ComplexRisk::Solar,
            ComplexRisk::Sips,
            ComplexRisk::AtticStorage,
            ComplexRisk::Dormer,
            ComplexRisk::Skillion,
        ]),
        ..new_zero_pitch_roof()
    };

    let result = evaluate_compliance(&inputs);

    assert_eq!(
        result.warning_keys(),
        vec![
            "zero_pitch",
            "skillion_vent",
            "dormer_fire",
            "attic_storage",
            "sips_delamination",
            "solar_exemption",
            "asbestos_removal",
        ]
    );
    let sources: Vec<WarningSource> = result.warnings.iter().map(|w| w.source).collect();
    assert_eq!(sources[4], WarningSource::CaseStudy);
    assert_eq!(sources[5], WarningSource::Custom);
    assert!(result.warnings[5].pdf_link.is_some());
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("B1 Structure")));
}

#[test]
fn skillion_with_h1_upgrade_adds_double_risk_warning() {
    let skillion_only = evaluate_compliance(&WizardInputs {
        complex: risks(&[ComplexRisk::Skillion]),
        ..new_zero_pitch_roof()
    });
    assert!(!skillion_only.has_warning("skillion_h1_double_risk"));

    let h1_only = evaluate_compliance(&WizardInputs {
        complex: risks(&[ComplexRisk::H1Upgrade]),
        ..new_zero_pitch_roof()
    });
    assert!(!h1_only.has_warning("skillion_h1_double_risk"));

    let both = evaluate_compliance(&WizardInputs {
        complex: risks(&[ComplexRisk::Skillion, ComplexRisk::H1Upgrade]),
        ..new_zero_pitch_roof()
    });
    assert!(both.has_warning("skillion_vent"));
    assert!(both.has_warning("skillion_h1_double_risk"));
}

#[test]
fn unchecked_consent_warns_of_negligence_only_when_consent_required() {
    let required = evaluate_compliance(&WizardInputs {
        consent_status: Some(ConsentStatus::NoCheck),
        ..new_zero_pitch_roof()
    });
    assert!(required.has_warning("negligence_no_consent"));

    let exempt = evaluate_compliance(&WizardInputs {
        consent_status: Some(ConsentStatus::NoCheck),
        ..low_pitch_repair()
    });
    assert_eq!(exempt.status, ComplianceStatus::LikelyExempt);
    assert!(!exempt.has_warning("negligence_no_consent"));
}

#[test]
fn emergency_work_requires_certificate_of_acceptance_regardless_of_status() {
    for base in [low_pitch_repair(), new_zero_pitch_roof()] {
        let result = evaluate_compliance(&WizardInputs {
            consent_status: Some(ConsentStatus::Emergency),
            ..base
        });
        assert_eq!(
            result.required_actions,
            vec![CERTIFICATE_OF_ACCEPTANCE_ACTION.to_string()]
        );
    }
}

#[test]
fn planning_ignores_execution_fields() {
    let baseline = evaluate_compliance(&low_pitch_repair());

    let noisy = evaluate_compliance(&WizardInputs {
        b_type: Some(BuildingType::Commercial),
        discovery: Some(Discovery::Structural),
        supervision: Some(Supervision::Remote),
        ..low_pitch_repair()
    });

    assert_eq!(baseline, noisy);
}

#[test]
fn unanswered_scope_defaults_to_consent_required() {
    let result = evaluate_compliance(&WizardInputs::planning());

    assert_eq!(result.status, ComplianceStatus::ConsentRequired);
    assert_eq!(result.legislation_keys, vec![WizardField::Pathway]);
}

#[test]
fn legislation_keys_list_answered_planning_fields() {
    let result = evaluate_compliance(&new_zero_pitch_roof());

    assert_eq!(
        result.legislation_keys,
        vec![
            WizardField::Pathway,
            WizardField::Scope,
            WizardField::Pitch,
            WizardField::Complex,
            WizardField::ConsentStatus,
        ]
    );
}

#[test]
fn scope_change_requires_consent_even_on_low_pitch() {
    let result = evaluate_compliance(&WizardInputs {
        scope: Some(RoofScope::ReplaceChange),
        ..low_pitch_repair()
    });

    assert_eq!(result.status, ComplianceStatus::ConsentRequired);
    assert!(!result.has_warning("low_pitch_repair"));
}

#[test]
fn overridden_base_grounds_are_not_reported_as_reasons() {
    let result = evaluate_compliance(&WizardInputs {
        age: Some(BuildingAge::Young),
        complex: risks(&[ComplexRisk::Gutter]),
        ..low_pitch_repair()
    });

    assert_eq!(result.status, ComplianceStatus::LikelyExempt);
    assert_eq!(result.reasons, vec![LBP_NOT_MANDATED_REASON.to_string()]);
    assert!(result
        .reasons
        .iter()
        .all(|reason| !reason.contains("always require") && !reason.contains("premature")));
}

#[test]
fn base_grounds_lead_the_reasons_when_consent_stands() {
    let result = evaluate_compliance(&WizardInputs {
        pitch: Some(RoofPitch::Standard),
        age: Some(BuildingAge::Young),
        complex: risks(&[ComplexRisk::Gutter, ComplexRisk::AtticStorage]),
        ..low_pitch_repair()
    });

    assert_eq!(result.status, ComplianceStatus::ConsentRequired);
    assert_eq!(result.reasons.len(), 4);
    assert!(result.reasons[0].contains("premature failure"));
    assert!(result.reasons[1].contains("consented design"));
    assert!(result.reasons[2].contains("B1 Structure"));
    assert_eq!(result.reasons[3], LBP_MANDATORY_REASON);
}

#[test]
fn unanswered_scope_gives_no_scope_reason() {
    let result = evaluate_compliance(&WizardInputs::planning());

    assert_eq!(result.reasons, vec![LBP_MANDATORY_REASON.to_string()]);
}
