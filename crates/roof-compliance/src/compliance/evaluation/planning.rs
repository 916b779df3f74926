use std::collections::BTreeSet;

use super::{apply_rules, Findings, Rule};
use crate::compliance::domain::{
    BuildingAge, ComplexRisk, ConsentStatus, RoofPitch, RoofScope, WizardInputs,
};
use crate::compliance::knowledge::{AlertType, CaseStudyKey, DeterminationKey};
use crate::compliance::result::{ComplianceResult, ComplianceStatus, CustomAlert};

pub(crate) const CERTIFICATE_OF_ACCEPTANCE_ACTION: &str = "Apply for a <strong>Certificate of Acceptance</strong> from council for the emergency work already carried out (Building Act s 96).";

pub(crate) const LBP_MANDATORY_REASON: &str = "Because building consent is required, the roofing is <strong>Restricted Building Work</strong> and must be carried out or supervised by a Roofing LBP.";

pub(crate) const LBP_NOT_MANDATED_REASON: &str = "The work is likely exempt under Schedule 1, so there is <strong>no LBP mandate</strong>. Engaging a Roofing LBP is still recommended.";

const SCOPE_CHANGE_GROUND: &str = "Only like-for-like replacement in the same position is covered by the Schedule 1 repair exemption. <strong>New or changed roofing needs building consent.</strong>";

const PREMATURE_FAILURE_GROUND: &str = "The existing roof is less than 15 years old. Replacing it indicates <strong>premature failure</strong> under B2 Durability, which is outside the exemption.";

const CONSENTED_DESIGN_GROUND: &str = "Internal gutters and container structures always require a <strong>consented design</strong>.";

/// Complex risk tags that on their own take work outside the repair exemption.
const CONSENT_FLAGGED_RISKS: [ComplexRisk; 2] = [ComplexRisk::Gutter, ComplexRisk::Container];

/// Planning-stage answers. Execution fields are not reachable from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanningAnswers {
    pub scope: Option<RoofScope>,
    pub pitch: Option<RoofPitch>,
    pub complex: BTreeSet<ComplexRisk>,
    pub age: Option<BuildingAge>,
    pub consent_status: Option<ConsentStatus>,
}

impl From<&WizardInputs> for PlanningAnswers {
    fn from(inputs: &WizardInputs) -> Self {
        Self {
            scope: inputs.scope,
            pitch: inputs.pitch,
            complex: inputs.complex.clone(),
            age: inputs.age,
            consent_status: inputs.consent_status,
        }
    }
}

impl PlanningAnswers {
    fn has(&self, risk: ComplexRisk) -> bool {
        self.complex.contains(&risk)
    }
}

#[derive(Debug, Default)]
pub(crate) struct PlanningDecision {
    pub consent_required: bool,
    /// Base-rule explanations, reported only if consent is still required at the end.
    pub consent_grounds: Vec<&'static str>,
    pub findings: Findings,
}

/// Evaluation order. The low-pitch override may clear the consent flag; the truss and
/// container rules after it may set it again. The last writer wins.
static PLANNING_RULES: [Rule<PlanningAnswers, PlanningDecision>; 15] = [
    Rule { name: "base_default", apply: base_default },
    Rule { name: "low_pitch_override", apply: low_pitch_override },
    Rule { name: "zero_pitch", apply: zero_pitch },
    Rule { name: "skillion_ventilation", apply: skillion_ventilation },
    Rule { name: "truss_alteration", apply: truss_alteration },
    Rule { name: "dormer_fire_rating", apply: dormer_fire_rating },
    Rule { name: "container_structure", apply: container_structure },
    Rule { name: "attic_storage", apply: attic_storage },
    Rule { name: "sips_panels", apply: sips_panels },
    Rule { name: "solar_install", apply: solar_install },
    Rule { name: "asbestos_roofing", apply: asbestos_roofing },
    Rule { name: "skillion_h1_double_risk", apply: skillion_h1_double_risk },
    Rule { name: "internal_gutters", apply: internal_gutters },
    Rule { name: "unchecked_consent", apply: unchecked_consent },
    Rule { name: "emergency_work", apply: emergency_work },
];

pub(crate) fn evaluate(answers: &PlanningAnswers) -> ComplianceResult {
    let decision = apply_rules(&PLANNING_RULES, answers, PlanningDecision::default());
    finalize(decision)
}

fn base_default(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    let mut fired = false;

    if answers.scope != Some(RoofScope::ReplaceSame) {
        decision.consent_required = true;
        if answers.scope.is_some() {
            decision.consent_grounds.push(SCOPE_CHANGE_GROUND);
        }
        fired = true;
    }

    if answers.age == Some(BuildingAge::Young) {
        decision.consent_required = true;
        decision.consent_grounds.push(PREMATURE_FAILURE_GROUND);
        fired = true;
    }

    if CONSENT_FLAGGED_RISKS.iter().any(|risk| answers.has(*risk)) {
        decision.consent_required = true;
        decision.consent_grounds.push(CONSENTED_DESIGN_GROUND);
        fired = true;
    }

    fired
}

fn low_pitch_override(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if answers.pitch != Some(RoofPitch::Low) || answers.scope != Some(RoofScope::ReplaceSame) {
        return false;
    }

    decision.consent_required = false;
    decision.findings.warn(DeterminationKey::LowPitchRepair);
    true
}

fn zero_pitch(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if answers.pitch != Some(RoofPitch::Zero) {
        return false;
    }

    decision.findings.warn(DeterminationKey::ZeroPitch);
    decision.findings.reason(
        "A zero-pitch roof is outside E2/AS1 and needs a <strong>specific membrane design</strong> with a minimum 1.5 degree finished fall.",
    );
    true
}

fn skillion_ventilation(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::Skillion) {
        return false;
    }

    decision.findings.warn(DeterminationKey::SkillionVent);
    true
}

fn truss_alteration(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::Truss) {
        return false;
    }

    decision.consent_required = true;
    decision.findings.warn(DeterminationKey::TrussCow);
    true
}

fn dormer_fire_rating(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::Dormer) {
        return false;
    }

    decision.findings.warn(DeterminationKey::DormerFire);
    true
}

fn container_structure(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::Container) {
        return false;
    }

    decision.consent_required = true;
    decision.findings.warn(DeterminationKey::ContainerRoof);
    true
}

fn attic_storage(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::AtticStorage) {
        return false;
    }

    decision.findings.warn(DeterminationKey::AtticStorage);
    decision.findings.reason(
        "Using the roof space for storage adds floor load. The trusses must be checked by an engineer for <strong>B1 Structure</strong>.",
    );
    true
}

fn sips_panels(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::Sips) {
        return false;
    }

    decision.findings.warn(CaseStudyKey::SipsDelamination);
    true
}

fn solar_install(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::Solar) {
        return false;
    }

    decision.findings.warn(
        CustomAlert::new(
            "solar_exemption",
            "Schedule 1, exemption 3A",
            "Solar panels on an existing roof",
            "Solar arrays installed by a qualified person are exempt from consent where the roof structure is verified to carry the extra load. <strong>Penetrations through the cladding must still be flashed to E2.</strong>",
            AlertType::InfoBox,
        )
        .with_pdf_link("https://www.building.govt.nz/assets/Uploads/projects-and-consents/solar-panel-guidance.pdf"),
    );
    true
}

fn asbestos_roofing(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::Asbestos) {
        return false;
    }

    decision.findings.warn(CustomAlert::new(
        "asbestos_removal",
        "Health and Safety at Work (Asbestos) Regulations 2016",
        "Asbestos roofing",
        "Removing more than 10m2 of non-friable asbestos requires a <strong>Class B licensed removalist</strong> and notification to WorkSafe at least five days before work starts.",
        AlertType::DangerBox,
    ));
    true
}

fn skillion_h1_double_risk(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !(answers.has(ComplexRisk::Skillion) && answers.has(ComplexRisk::H1Upgrade)) {
        return false;
    }

    decision.findings.warn(CustomAlert::new(
        "skillion_h1_double_risk",
        "E3 / H1 interaction",
        "Double risk: skillion roof with an insulation upgrade",
        "Adding insulation to meet current H1 values in a skillion roof usually fills the ventilation cavity. The combination is the <strong>leading cause of hidden condensation damage</strong> and needs a specific design.",
        AlertType::DangerBox,
    ));
    true
}

fn internal_gutters(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if !answers.has(ComplexRisk::Gutter) {
        return false;
    }

    decision.findings.warn(CustomAlert::new(
        "internal_gutters",
        "E2/AS1 8.5",
        "Internal gutters",
        "Internal and box gutters discharge inside the building envelope when they overflow. They need <strong>overflow outlets</strong>, a continuous membrane and a designed fall.",
        AlertType::TechAlert,
    ));
    true
}

fn unchecked_consent(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if answers.consent_status != Some(ConsentStatus::NoCheck) || !decision.consent_required {
        return false;
    }

    decision.findings.warn(CaseStudyKey::NegligenceNoConsent);
    true
}

fn emergency_work(answers: &PlanningAnswers, decision: &mut PlanningDecision) -> bool {
    if answers.consent_status != Some(ConsentStatus::Emergency) {
        return false;
    }

    decision.findings.require(CERTIFICATE_OF_ACCEPTANCE_ACTION);
    true
}

fn finalize(mut decision: PlanningDecision) -> ComplianceResult {
    let (status, banner_class, banner_title, banner_subtitle) = if decision.consent_required {
        let mut reasons: Vec<String> = decision
            .consent_grounds
            .iter()
            .map(|ground| ground.to_string())
            .collect();
        reasons.append(&mut decision.findings.reasons);
        decision.findings.reasons = reasons;
        decision.findings.reason(LBP_MANDATORY_REASON);
        (
            ComplianceStatus::ConsentRequired,
            AlertType::DangerBox,
            "BUILDING CONSENT REQUIRED",
            "Restricted Building Work: a Roofing LBP must carry out or supervise the work.",
        )
    } else {
        decision.findings.reason(LBP_NOT_MANDATED_REASON);
        (
            ComplianceStatus::LikelyExempt,
            AlertType::SuccessBox,
            "LIKELY EXEMPT",
            "Schedule 1 repair and maintenance exemption likely applies. Confirm with council before starting.",
        )
    };

    let Findings {
        warnings,
        reasons,
        required_actions,
    } = decision.findings;

    ComplianceResult {
        status,
        banner_class,
        banner_title: banner_title.to_string(),
        banner_subtitle: banner_subtitle.to_string(),
        warnings,
        reasons,
        required_actions,
        legislation_keys: Vec::new(),
    }
}
