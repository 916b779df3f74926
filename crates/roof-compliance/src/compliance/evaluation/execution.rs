use super::{apply_rules, Findings, Rule};
use crate::compliance::domain::{
    BuildingType, Completion, Discovery, ExecTask, Supervision, WizardInputs, YesNo,
};
use crate::compliance::knowledge::{AlertType, CaseStudyKey, DeterminationKey};
use crate::compliance::result::{ComplianceResult, ComplianceStatus, CustomAlert};

pub(crate) const SUPERVISED_RESTRICTED_WORK_REASON: &str = "Roofing on a house is <strong>Restricted Building Work</strong>. It must be carried out or supervised by an LBP holding the correct Roofing licence class.";

pub(crate) const UNDERLAY_TURN_DOWN_ACTION: &str =
    "Trim the underlay clear of the gutter and install <strong>turn-downs</strong> at the eaves.";

pub(crate) const HALT_SUBSTITUTION_ACTION: &str = "Stop work on the substituted product and apply to council for a <strong>formal amendment</strong> before continuing.";

pub(crate) const PHYSICAL_INSPECTION_ACTION: &str = "Schedule an immediate <strong>physical site inspection</strong> by the supervising LBP.";

pub(crate) const STRUCTURAL_REPLACEMENT_REASON: &str = "Any replaced structure must meet the <strong>current Building Code</strong>, not the standard it was originally built to.";

pub(crate) const IN_PROGRESS_REASON: &str =
    "Work can continue while it remains under compliant supervision.";

pub(crate) const ISSUE_ROW_ON_COMPLETION_REASON: &str =
    "Remember to issue a <strong>Record of Work</strong> as soon as your restricted work is complete.";

pub(crate) const ISSUE_ROW_ACTION: &str =
    "Issue the <strong>Record of Work</strong> to both the owner and the council.";

pub(crate) const STATUTORY_ROW_ACTION: &str = "Issue the Record of Work now. It is a <strong>statutory obligation under s 88</strong>, not a contractual term, and cannot be withheld over payment.";

pub(crate) const TERMINATED_ROW_ACTION: &str = "Issue a Record of Work for the work completed to date. It marks the <strong>boundary of your liability</strong> for the job.";

pub(crate) const CLOSING_ROW_REASON: &str =
    "Send the Record of Work to both the owner and the council when your restricted work is done.";

const LBP_REQUIRED_SUBTITLE: &str =
    "Restricted Building Work: Roofing LBP supervision and a Record of Work are mandatory.";

const STRUCTURAL_SUBTITLE: &str = "Structural work discovered: confirm with council whether a consent amendment is required before continuing.";

/// Execution-stage answers. Planning fields are not reachable from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionAnswers {
    pub b_type: Option<BuildingType>,
    pub variation: Option<YesNo>,
    pub exec_task: ExecTask,
    pub discovery: Option<Discovery>,
    pub licence: Option<YesNo>,
    pub supervision: Option<Supervision>,
    pub completion: Option<Completion>,
}

impl From<&WizardInputs> for ExecutionAnswers {
    fn from(inputs: &WizardInputs) -> Self {
        Self {
            b_type: inputs.b_type,
            variation: inputs.variation,
            exec_task: inputs.task(),
            discovery: inputs.discovery,
            licence: inputs.licence,
            supervision: inputs.supervision,
            completion: inputs.completion,
        }
    }
}

impl ExecutionAnswers {
    /// Houses and rentals fall under the restricted building work regime.
    fn is_residential(&self) -> bool {
        matches!(
            self.b_type,
            Some(BuildingType::Residential) | Some(BuildingType::Rental)
        )
    }
}

#[derive(Debug)]
pub(crate) struct ExecutionDecision {
    pub status: ComplianceStatus,
    pub banner_subtitle: &'static str,
    pub findings: Findings,
}

impl Default for ExecutionDecision {
    fn default() -> Self {
        Self {
            status: ComplianceStatus::LbpRequired,
            banner_subtitle: LBP_REQUIRED_SUBTITLE,
            findings: Findings::default(),
        }
    }
}

static EXECUTION_RULES: [Rule<ExecutionAnswers, ExecutionDecision>; 8] = [
    Rule { name: "building_type", apply: building_type },
    Rule { name: "task_determination", apply: task_determination },
    Rule { name: "unapproved_variation", apply: unapproved_variation },
    Rule { name: "substrate_discovery", apply: substrate_discovery },
    Rule { name: "licence_class", apply: licence_class },
    Rule { name: "remote_supervision", apply: remote_supervision },
    Rule { name: "completion_state", apply: completion_state },
    Rule { name: "record_of_work_reminder", apply: record_of_work_reminder },
];

pub(crate) fn evaluate(answers: &ExecutionAnswers) -> ComplianceResult {
    let decision = apply_rules(&EXECUTION_RULES, answers, ExecutionDecision::default());
    finalize(decision)
}

fn building_type(answers: &ExecutionAnswers, decision: &mut ExecutionDecision) -> bool {
    match answers.b_type {
        Some(BuildingType::Commercial) => {
            decision.status = ComplianceStatus::CommercialExempt;
            decision.findings.reason(
                "Commercial buildings are outside the Restricted Building Work regime. <strong>No LBP is mandated</strong>, although consent conditions still apply.",
            );
            true
        }
        Some(b_type) => {
            decision.findings.reason(SUPERVISED_RESTRICTED_WORK_REASON);
            if b_type == BuildingType::Rental {
                decision.findings.warn(CustomAlert::new(
                    "rental_ventilation",
                    "Residential Tenancies (Healthy Homes Standards) Regulations 2019",
                    "Tenanted property ventilation",
                    "Roof work on a rental must preserve ceiling insulation and extraction ducting. Disturbing either can put the landlord in breach of the <strong>Healthy Homes ventilation and insulation standards</strong>.",
                    AlertType::WarningBox,
                ));
            }
            if answers.discovery == Some(Discovery::Structural) {
                decision.banner_subtitle = STRUCTURAL_SUBTITLE;
            }
            true
        }
        None => false,
    }
}

fn task_determination(answers: &ExecutionAnswers, decision: &mut ExecutionDecision) -> bool {
    match answers.exec_task {
        ExecTask::FinishEaves => {
            decision.findings.warn(DeterminationKey::UnderlayUv);
            decision.findings.require(UNDERLAY_TURN_DOWN_ACTION);
        }
        ExecTask::Flashings => decision.findings.warn(DeterminationKey::FlashingLaps),
        ExecTask::Penetration => decision.findings.warn(DeterminationKey::FlueGap),
        ExecTask::Substitution => {
            decision.findings.warn(DeterminationKey::MembraneSub);
            decision.findings.warn(CaseStudyKey::ProductSubstitution);
            decision.findings.require(HALT_SUBSTITUTION_ACTION);
        }
        ExecTask::Insulation => {
            decision.findings.warn(DeterminationKey::SprayFoam);
            decision.findings.warn(CustomAlert::new(
                "pir_board",
                "BRANZ Bulletin 643",
                "PIR board under roofing",
                "Rigid PIR boards laid directly under metal roofing need a <strong>drained cavity or vapour control layer</strong>. Without one, condensation forms on the underside of the cladding.",
                AlertType::TechAlert,
            ));
        }
        ExecTask::NoTask => return false,
    }
    true
}

fn unapproved_variation(answers: &ExecutionAnswers, decision: &mut ExecutionDecision) -> bool {
    if answers.variation != Some(YesNo::Yes) {
        return false;
    }

    decision.findings.warn(CaseStudyKey::MinorVariation);
    true
}

fn substrate_discovery(answers: &ExecutionAnswers, decision: &mut ExecutionDecision) -> bool {
    match answers.discovery {
        Some(Discovery::Structural) => decision.findings.reason(STRUCTURAL_REPLACEMENT_REASON),
        Some(Discovery::NotChecked) => decision.findings.warn(CaseStudyKey::InheritedDefect),
        Some(Discovery::CheckedOk) | None => return false,
    }
    true
}

fn licence_class(answers: &ExecutionAnswers, decision: &mut ExecutionDecision) -> bool {
    if answers.licence != Some(YesNo::No) {
        return false;
    }

    decision.findings.warn(CaseStudyKey::LicenceBreach);
    decision.findings.warn(CustomAlert::new(
        "licence_scope",
        "Licensing Classes Order 2010",
        "Scope of licence: tanking versus roofing",
        "Membrane tanking of decks and roofs is covered by the <strong>Roofing (Membrane) class</strong>, not by External Plastering or Carpentry. Check the licence class matches the system being installed.",
        AlertType::InfoBox,
    ));
    true
}

fn remote_supervision(answers: &ExecutionAnswers, decision: &mut ExecutionDecision) -> bool {
    if answers.supervision != Some(Supervision::Remote) {
        return false;
    }

    decision.findings.warn(CaseStudyKey::RemoteSupervision);
    decision.findings.warn(CaseStudyKey::SubcontractLiability);
    decision.findings.require(PHYSICAL_INSPECTION_ACTION);
    true
}

fn completion_state(answers: &ExecutionAnswers, decision: &mut ExecutionDecision) -> bool {
    let residential = answers.is_residential();
    match answers.completion {
        Some(Completion::InProgress) => {
            decision.findings.reason(IN_PROGRESS_REASON);
            if residential {
                decision.findings.reason(ISSUE_ROW_ON_COMPLETION_REASON);
            }
        }
        Some(Completion::Finished) => {
            if residential {
                decision.findings.require(ISSUE_ROW_ACTION);
            }
        }
        Some(Completion::Dispute) => {
            decision.findings.warn(CaseStudyKey::RecordOfWorkLeverage);
            if residential {
                decision.findings.require(STATUTORY_ROW_ACTION);
            }
        }
        Some(Completion::Terminated) => {
            if residential {
                decision.findings.require(TERMINATED_ROW_ACTION);
            }
        }
        None => return false,
    }
    true
}

// Repeats the completion-specific reminders on purpose; consumers expect both lines.
fn record_of_work_reminder(answers: &ExecutionAnswers, decision: &mut ExecutionDecision) -> bool {
    if !answers.is_residential() {
        return false;
    }

    decision.findings.reason(CLOSING_ROW_REASON);
    true
}

fn finalize(decision: ExecutionDecision) -> ComplianceResult {
    let (banner_class, banner_title, banner_subtitle) = match decision.status {
        ComplianceStatus::CommercialExempt => (
            AlertType::InfoBox,
            "COMMERCIAL EXEMPT",
            "Commercial work is outside the Restricted Building Work regime.",
        ),
        _ => (
            AlertType::WarningBox,
            "LBP REQUIRED",
            decision.banner_subtitle,
        ),
    };

    let Findings {
        warnings,
        reasons,
        required_actions,
    } = decision.findings;

    ComplianceResult {
        status: decision.status,
        banner_class,
        banner_title: banner_title.to_string(),
        banner_subtitle: banner_subtitle.to_string(),
        warnings,
        reasons,
        required_actions,
        legislation_keys: Vec::new(),
    }
}
