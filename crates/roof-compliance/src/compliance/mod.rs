//! Building-compliance evaluation for roofing jobs.
//!
//! A questionnaire ([`WizardInputs`]) is evaluated by one of two ordered rule lists,
//! chosen by pathway, into a [`ComplianceResult`]. The engine holds no state and
//! performs no I/O; the knowledge base is compiled in.

pub mod domain;
pub mod evaluation;
pub mod knowledge;
pub mod navigation;
pub mod result;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{
    BuildingAge, BuildingType, Completion, ComplexRisk, ConsentStatus, Discovery, ExecTask,
    InputError, Pathway, RoofPitch, RoofScope, Supervision, WizardField, WizardInputs,
    WizardSubmission, YesNo,
};
pub use evaluation::{evaluate_compliance, ExecutionAnswers, PlanningAnswers};
pub use knowledge::{
    case_study_database, determination_database, explanation_for, lookup_case_study,
    lookup_determination, AlertType, CaseStudy, CaseStudyKey, Determination, DeterminationKey,
    Explanation, EXPLANATIONS,
};
pub use navigation::{
    is_wizard_complete, legislation_keys, next_required_field, required_fields,
    wizard_progress, WizardProgress,
};
pub use result::{ComplianceResult, ComplianceStatus, CustomAlert, Warning, WarningSource};
pub use router::{compliance_router, EvaluationResponse, ProgressResponse};
