use crate::infra::{read_submission, EvaluationRecord};
use chrono::Utc;
use clap::Args;
use roof_compliance::compliance::{
    case_study_database, determination_database, evaluate_compliance, explanation_for,
    lookup_determination, next_required_field, wizard_progress, BuildingAge, BuildingType,
    Completion, ComplexRisk, ComplianceResult, ConsentStatus, Discovery, ExecTask, Pathway,
    ProgressResponse, RoofPitch, RoofScope, Supervision, WizardField, WizardInputs, YesNo,
};
use roof_compliance::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuestionnaireArgs {
    /// Questionnaire answers as a JSON object keyed by field name
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the JSON payload instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DeterminationsArgs {
    /// Show a single determination by key (e.g. zero_pitch)
    #[arg(long)]
    pub(crate) key: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the step-by-step questionnaire walkthrough.
    #[arg(long)]
    pub(crate) skip_walkthrough: bool,
}

pub(crate) fn run_evaluate(args: QuestionnaireArgs) -> Result<(), AppError> {
    let inputs = read_submission(&args.input)?;
    let record = EvaluationRecord::new(&inputs, Utc::now());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    render_result(&record.result);
    match record.next_field {
        Some(field) => println!("\nQuestionnaire incomplete; next question: {}", field.question()),
        None => println!("\nQuestionnaire complete."),
    }
    Ok(())
}

pub(crate) fn run_next(args: QuestionnaireArgs) -> Result<(), AppError> {
    let inputs = read_submission(&args.input)?;
    let progress = ProgressResponse::for_inputs(&inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
        return Ok(());
    }

    println!(
        "Answered {} of {} required questions",
        progress.answered, progress.required
    );
    let Some(field) = progress.next_field else {
        println!("Questionnaire complete.");
        return Ok(());
    };

    println!("Next: {}", field.question());
    for option in &progress.options {
        println!("  - {} ({})", option.label, option.value);
    }
    if let Some(explanation) = explanation_for(field) {
        println!("Why it matters: {} ({})", explanation.title, explanation.legislation);
    }
    Ok(())
}

pub(crate) fn run_determinations(args: DeterminationsArgs) -> Result<(), AppError> {
    if let Some(key) = args.key {
        match lookup_determination(&key) {
            Some(determination) => {
                println!("{} ({})", determination.title, determination.id);
                println!("  file: {}", determination.file);
                println!("  {}", strip_markup(determination.summary));
            }
            None => {
                println!("No determination recorded under '{key}'. Known keys:");
                for key in determination_database().keys() {
                    println!("  - {key}");
                }
            }
        }
        return Ok(());
    }

    println!("Determinations");
    for determination in determination_database().values() {
        println!(
            "  - {:<18} {:<14} {}",
            determination.key, determination.id, determination.title
        );
    }
    println!("\nCase studies");
    for case_study in case_study_database().values() {
        println!(
            "  - {:<22} {:<12} {}",
            case_study.key, case_study.id, case_study.title
        );
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Roof compliance demo");

    for (title, inputs) in demo_scenarios() {
        println!("\n== {title}");
        render_result(&evaluate_compliance(&inputs));
    }

    if args.skip_walkthrough {
        return Ok(());
    }

    println!("\nQuestionnaire walkthrough");
    let mut inputs = WizardInputs::default();
    while let Some(field) = next_required_field(&inputs) {
        let answer = walkthrough_answer(field);
        let progress = wizard_progress(&inputs);
        println!(
            "  [{}/{}] {} -> {}",
            progress.answered + 1,
            progress.required,
            field.question(),
            answer
        );
        if let Err(err) = inputs.apply_answer(field, answer) {
            println!("  Answer rejected: {err}");
            return Ok(());
        }
    }
    println!("  {}", evaluate_compliance(&inputs).summary());

    Ok(())
}

fn render_result(result: &ComplianceResult) {
    println!("{}", result.banner_title);
    println!("  {}", strip_markup(&result.banner_subtitle));

    if !result.warnings.is_empty() {
        println!("Warnings:");
        for warning in &result.warnings {
            println!("  - [{}] {} ({})", warning.alert_type.as_str(), warning.title, warning.id);
        }
    }
    if !result.reasons.is_empty() {
        println!("Reasons:");
        for reason in &result.reasons {
            println!("  - {}", strip_markup(reason));
        }
    }
    if !result.required_actions.is_empty() {
        println!("Required actions:");
        for action in &result.required_actions {
            println!("  - {}", strip_markup(action));
        }
    }
}

// Reasons carry <strong> emphasis for the web UI; drop it for the terminal.
fn strip_markup(text: &str) -> String {
    text.replace("<strong>", "").replace("</strong>", "")
}

// Scripted answers for a like-for-like reroof that the truss alteration pushes back
// into consent.
fn walkthrough_answer(field: WizardField) -> &'static str {
    match field {
        WizardField::Pathway => "planning",
        WizardField::Scope => "replace_same",
        WizardField::Pitch => "low",
        WizardField::Complex => "truss,solar",
        WizardField::Age => "old",
        WizardField::ConsentStatus => "yes",
        WizardField::BuildingType => "residential",
        WizardField::Variation | WizardField::Licence => "no",
        WizardField::ExecTask => "none",
        WizardField::Discovery => "checked_ok",
        WizardField::Supervision => "self",
        WizardField::Completion => "in_progress",
    }
}

fn planning_job(
    scope: RoofScope,
    pitch: RoofPitch,
    complex: ComplexRisk,
    consent_status: ConsentStatus,
) -> WizardInputs {
    WizardInputs {
        pathway: Some(Pathway::Planning),
        scope: Some(scope),
        pitch: Some(pitch),
        complex: [complex].into_iter().collect(),
        age: (scope == RoofScope::ReplaceSame).then_some(BuildingAge::Old),
        consent_status: Some(consent_status),
        ..WizardInputs::default()
    }
}

fn execution_job(b_type: BuildingType, supervision: Supervision) -> WizardInputs {
    WizardInputs {
        pathway: Some(Pathway::Execution),
        b_type: Some(b_type),
        variation: Some(YesNo::No),
        exec_task: Some(ExecTask::NoTask),
        discovery: Some(Discovery::CheckedOk),
        licence: Some(YesNo::Yes),
        supervision: Some(supervision),
        completion: Some(Completion::InProgress),
        ..WizardInputs::default()
    }
}

fn demo_scenarios() -> Vec<(&'static str, WizardInputs)> {
    vec![
        (
            "Like-for-like low-pitch reroof",
            planning_job(
                RoofScope::ReplaceSame,
                RoofPitch::Low,
                ComplexRisk::NoneSelected,
                ConsentStatus::Yes,
            ),
        ),
        (
            "Low-pitch reroof with truss alterations",
            planning_job(
                RoofScope::ReplaceSame,
                RoofPitch::Low,
                ComplexRisk::Truss,
                ConsentStatus::Yes,
            ),
        ),
        (
            "New zero-pitch roof",
            planning_job(
                RoofScope::New,
                RoofPitch::Zero,
                ComplexRisk::NoneSelected,
                ConsentStatus::Yes,
            ),
        ),
        (
            "Storm repair carried out before consent",
            planning_job(
                RoofScope::ReplaceChange,
                RoofPitch::Standard,
                ComplexRisk::NoneSelected,
                ConsentStatus::Emergency,
            ),
        ),
        (
            "Residential reroof supervised by phone",
            execution_job(BuildingType::Residential, Supervision::Remote),
        ),
        (
            "Commercial warehouse reroof",
            execution_job(BuildingType::Commercial, Supervision::Check),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use roof_compliance::compliance::{is_wizard_complete, ComplianceStatus};

    #[test]
    fn demo_scenarios_are_complete_and_cover_each_outcome() {
        let statuses: Vec<ComplianceStatus> = demo_scenarios()
            .iter()
            .map(|(title, inputs)| {
                assert!(is_wizard_complete(inputs), "{title} is incomplete");
                evaluate_compliance(inputs).status
            })
            .collect();

        assert_eq!(
            statuses,
            vec![
                ComplianceStatus::LikelyExempt,
                ComplianceStatus::ConsentRequired,
                ComplianceStatus::ConsentRequired,
                ComplianceStatus::ConsentRequired,
                ComplianceStatus::LbpRequired,
                ComplianceStatus::CommercialExempt,
            ]
        );
    }

    #[test]
    fn walkthrough_answers_are_accepted() {
        let mut inputs = WizardInputs::default();
        while let Some(field) = next_required_field(&inputs) {
            inputs
                .apply_answer(field, walkthrough_answer(field))
                .expect("scripted answer parses");
        }

        let result = evaluate_compliance(&inputs);
        assert_eq!(result.status, ComplianceStatus::ConsentRequired);
        assert!(result.has_warning("solar_exemption"));
    }

    #[test]
    fn strip_markup_removes_emphasis() {
        assert_eq!(
            strip_markup("a <strong>statutory</strong> duty"),
            "a statutory duty"
        );
    }
}
