use std::collections::BTreeSet;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;

use crate::compliance::domain::{
    BuildingAge, BuildingType, Completion, ComplexRisk, ConsentStatus, Discovery, ExecTask,
    Pathway, RoofPitch, RoofScope, Supervision, WizardInputs, YesNo,
};

pub(super) fn risks(tags: &[ComplexRisk]) -> BTreeSet<ComplexRisk> {
    tags.iter().copied().collect()
}

/// Like-for-like, low-pitch re-roof of an older house with consent confirmed.
pub(super) fn low_pitch_repair() -> WizardInputs {
    WizardInputs {
        pathway: Some(Pathway::Planning),
        scope: Some(RoofScope::ReplaceSame),
        pitch: Some(RoofPitch::Low),
        complex: risks(&[ComplexRisk::NoneSelected]),
        age: Some(BuildingAge::Old),
        consent_status: Some(ConsentStatus::Yes),
        ..WizardInputs::default()
    }
}

pub(super) fn new_zero_pitch_roof() -> WizardInputs {
    WizardInputs {
        pathway: Some(Pathway::Planning),
        scope: Some(RoofScope::New),
        pitch: Some(RoofPitch::Zero),
        complex: risks(&[ComplexRisk::NoneSelected]),
        consent_status: Some(ConsentStatus::Yes),
        ..WizardInputs::default()
    }
}

/// Residential job, task-free, substrate checked, properly licensed and supervised.
pub(super) fn residential_execution() -> WizardInputs {
    WizardInputs {
        pathway: Some(Pathway::Execution),
        b_type: Some(BuildingType::Residential),
        variation: Some(YesNo::No),
        exec_task: Some(ExecTask::NoTask),
        discovery: Some(Discovery::CheckedOk),
        licence: Some(YesNo::Yes),
        supervision: Some(Supervision::SelfPerformed),
        completion: Some(Completion::InProgress),
        ..WizardInputs::default()
    }
}

pub(super) fn count_of(items: &[String], needle: &str) -> usize {
    items.iter().filter(|item| item.as_str() == needle).count()
}

pub(super) fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
