pub(crate) mod execution;
pub(crate) mod planning;

pub use execution::ExecutionAnswers;
pub use planning::PlanningAnswers;

use tracing::debug;

use super::domain::{Pathway, WizardInputs};
use super::navigation::legislation_keys;
use super::result::{ComplianceResult, Warning};

/// Evaluate the questionnaire and produce a verdict.
///
/// Pure: the same inputs always yield the same result. Fields belonging to the
/// pathway that was not selected are never read.
pub fn evaluate_compliance(inputs: &WizardInputs) -> ComplianceResult {
    let Some(pathway) = inputs.pathway else {
        debug!("no pathway selected; returning neutral result");
        return ComplianceResult::pathway_pending();
    };

    let result = match pathway {
        Pathway::Planning => planning::evaluate(&PlanningAnswers::from(inputs)),
        Pathway::Execution => execution::evaluate(&ExecutionAnswers::from(inputs)),
    };

    let result = ComplianceResult {
        legislation_keys: legislation_keys(inputs),
        ..result
    };

    debug!(
        pathway = pathway.as_str(),
        status = ?result.status,
        warnings = result.warnings.len(),
        "compliance evaluation finished"
    );
    result
}

/// Warnings, reasons and actions accumulated as rules fire, in firing order.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub warnings: Vec<Warning>,
    pub reasons: Vec<String>,
    pub required_actions: Vec<String>,
}

impl Findings {
    pub fn warn(&mut self, warning: impl Into<Warning>) {
        self.warnings.push(warning.into());
    }

    pub fn reason(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub fn require(&mut self, action: impl Into<String>) {
        self.required_actions.push(action.into());
    }
}

/// A named step in an ordered rule list. `apply` returns whether the rule fired.
pub(crate) struct Rule<Answers, Decision> {
    pub name: &'static str,
    pub apply: fn(&Answers, &mut Decision) -> bool,
}

/// Fold `rules` over `decision` strictly in declaration order; later rules see and
/// may overwrite what earlier rules decided.
pub(crate) fn apply_rules<Answers, Decision>(
    rules: &[Rule<Answers, Decision>],
    answers: &Answers,
    mut decision: Decision,
) -> Decision {
    for rule in rules {
        if (rule.apply)(answers, &mut decision) {
            debug!(rule = rule.name, "compliance rule fired");
        }
    }
    decision
}
