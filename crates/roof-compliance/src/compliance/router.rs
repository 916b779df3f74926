use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::domain::{WizardField, WizardInputs, WizardSubmission};
use super::evaluation::evaluate_compliance;
use super::knowledge::{
    case_study_database, determination_database, lookup_determination, CaseStudy,
    Determination, Explanation, EXPLANATIONS,
};
use super::navigation::{next_required_field, wizard_progress};
use super::result::ComplianceResult;

/// Body returned by the evaluate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub result: ComplianceResult,
    pub complete: bool,
    pub next_field: Option<WizardField>,
}

/// Body returned by the progress endpoint: what to ask next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressResponse {
    pub complete: bool,
    pub next_field: Option<WizardField>,
    pub question: Option<&'static str>,
    pub options: Vec<AnswerOption>,
    pub answered: usize,
    pub required: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ProgressResponse {
    pub fn for_inputs(inputs: &WizardInputs) -> Self {
        let progress = wizard_progress(inputs);
        let next_field = next_required_field(inputs);
        let options = next_field
            .map(|field| {
                field
                    .options()
                    .into_iter()
                    .map(|(value, label)| AnswerOption { value, label })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            complete: next_field.is_none(),
            next_field,
            question: next_field.map(WizardField::question),
            options,
            answered: progress.answered,
            required: progress.required,
        }
    }
}

/// Router builder exposing the engine and its reference tables over HTTP.
pub fn compliance_router() -> Router {
    Router::new()
        .route("/api/v1/compliance/evaluate", post(evaluate_handler))
        .route("/api/v1/compliance/progress", post(progress_handler))
        .route(
            "/api/v1/compliance/determinations",
            get(determinations_handler),
        )
        .route(
            "/api/v1/compliance/determinations/:key",
            get(determination_handler),
        )
        .route("/api/v1/compliance/case-studies", get(case_studies_handler))
        .route("/api/v1/compliance/explanations", get(explanations_handler))
}

fn unprocessable(error: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn evaluate_handler(Json(submission): Json<WizardSubmission>) -> Response {
    let inputs = match WizardInputs::try_from(submission) {
        Ok(inputs) => inputs,
        Err(error) => return unprocessable(error),
    };

    let result = evaluate_compliance(&inputs);
    let next_field = next_required_field(&inputs);
    info!(status = ?result.status, complete = next_field.is_none(), "compliance evaluated");

    let body = EvaluationResponse {
        result,
        complete: next_field.is_none(),
        next_field,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn progress_handler(Json(submission): Json<WizardSubmission>) -> Response {
    match WizardInputs::try_from(submission) {
        Ok(inputs) => {
            let body = ProgressResponse::for_inputs(&inputs);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => unprocessable(error),
    }
}

pub(crate) async fn determinations_handler() -> Json<Vec<&'static Determination>> {
    Json(determination_database().values().collect())
}

pub(crate) async fn determination_handler(Path(key): Path<String>) -> Response {
    match lookup_determination(&key) {
        Some(determination) => (StatusCode::OK, Json(determination)).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown determination '{key}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn case_studies_handler() -> Json<Vec<&'static CaseStudy>> {
    Json(case_study_database().values().collect())
}

pub(crate) async fn explanations_handler() -> Json<&'static [Explanation]> {
    Json(EXPLANATIONS.as_slice())
}
