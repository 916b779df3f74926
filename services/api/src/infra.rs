use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use roof_compliance::compliance::{
    evaluate_compliance, next_required_field, ComplianceResult, WizardField, WizardInputs,
    WizardSubmission,
};
use roof_compliance::error::AppError;
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Evaluation stamped with the time it was produced, as printed by `evaluate --json`.
#[derive(Debug, Serialize)]
pub(crate) struct EvaluationRecord {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) complete: bool,
    pub(crate) next_field: Option<WizardField>,
    pub(crate) result: ComplianceResult,
}

impl EvaluationRecord {
    pub(crate) fn new(inputs: &WizardInputs, evaluated_at: DateTime<Utc>) -> Self {
        let next_field = next_required_field(inputs);
        Self {
            evaluated_at,
            complete: next_field.is_none(),
            next_field,
            result: evaluate_compliance(inputs),
        }
    }
}

pub(crate) fn parse_submission(raw: &str) -> Result<WizardInputs, AppError> {
    let submission: WizardSubmission = serde_json::from_str(raw)?;
    Ok(WizardInputs::try_from(submission)?)
}

pub(crate) fn read_submission(path: &Path) -> Result<WizardInputs, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_submission(&raw)
}
