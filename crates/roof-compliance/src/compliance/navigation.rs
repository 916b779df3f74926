use serde::{Deserialize, Serialize};

use super::domain::{Pathway, RoofScope, WizardField, WizardInputs};

const PLANNING_FIELDS: [WizardField; 5] = [
    WizardField::Scope,
    WizardField::Pitch,
    WizardField::Complex,
    WizardField::Age,
    WizardField::ConsentStatus,
];

const EXECUTION_FIELDS: [WizardField; 7] = [
    WizardField::BuildingType,
    WizardField::Variation,
    WizardField::ExecTask,
    WizardField::Discovery,
    WizardField::Licence,
    WizardField::Supervision,
    WizardField::Completion,
];

/// Fields a pathway reads, in canonical prompt order.
pub const fn pathway_fields(pathway: Pathway) -> &'static [WizardField] {
    match pathway {
        Pathway::Planning => &PLANNING_FIELDS,
        Pathway::Execution => &EXECUTION_FIELDS,
    }
}

fn is_required(inputs: &WizardInputs, field: WizardField) -> bool {
    match field {
        WizardField::Pathway => true,
        // Age only matters for like-for-like replacement.
        WizardField::Age => inputs.scope == Some(RoofScope::ReplaceSame),
        // Defaults to `none` and is never prompted for.
        WizardField::ExecTask => false,
        _ => true,
    }
}

/// Fields that must be answered before the questionnaire is complete, in the order
/// they are asked.
pub fn required_fields(inputs: &WizardInputs) -> Vec<WizardField> {
    let mut fields = vec![WizardField::Pathway];
    if let Some(pathway) = inputs.pathway {
        fields.extend(
            pathway_fields(pathway)
                .iter()
                .copied()
                .filter(|field| is_required(inputs, *field)),
        );
    }
    fields
}

pub fn is_wizard_complete(inputs: &WizardInputs) -> bool {
    next_required_field(inputs).is_none()
}

/// First unanswered required field, or `None` once the questionnaire is complete.
pub fn next_required_field(inputs: &WizardInputs) -> Option<WizardField> {
    required_fields(inputs)
        .into_iter()
        .find(|field| !inputs.is_answered(*field))
}

/// Answered versus required counts for progress indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardProgress {
    pub answered: usize,
    pub required: usize,
}

impl WizardProgress {
    pub fn is_complete(&self) -> bool {
        self.answered == self.required
    }
}

pub fn wizard_progress(inputs: &WizardInputs) -> WizardProgress {
    let required = required_fields(inputs);
    let answered = required
        .iter()
        .filter(|field| inputs.is_answered(**field))
        .count();

    WizardProgress {
        answered,
        required: required.len(),
    }
}

/// Answered fields of the selected pathway, used to link a result back to the
/// legislation explanations.
pub fn legislation_keys(inputs: &WizardInputs) -> Vec<WizardField> {
    let Some(pathway) = inputs.pathway else {
        return Vec::new();
    };

    std::iter::once(WizardField::Pathway)
        .chain(
            pathway_fields(pathway)
                .iter()
                .copied()
                .filter(|field| inputs.is_answered(*field)),
        )
        .collect()
}
