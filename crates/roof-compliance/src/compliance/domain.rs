use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised when untrusted questionnaire answers are converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown questionnaire field '{0}'")]
    UnknownField(String),
    #[error("an answer is required for {0}")]
    EmptyAnswer(WizardField),
    #[error("'{value}' is not a valid answer for {field} (expected one of: {expected})")]
    UnknownValue {
        field: WizardField,
        value: String,
        expected: String,
    },
}

/// Declares a closed questionnaire answer set with its wire names and UI labels.
macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident => $field:expr, {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const fn ordered() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = InputError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let value = raw.trim().to_ascii_lowercase();
                Self::ordered()
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == value)
                    .ok_or_else(|| InputError::UnknownValue {
                        field: $field,
                        value: raw.to_string(),
                        expected: Self::ordered()
                            .iter()
                            .map(|candidate| candidate.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

answer_enum! {
    /// Stage of the job being assessed.
    Pathway => WizardField::Pathway, {
        Planning => ("planning", "Planning (before work starts)"),
        Execution => ("execution", "Execution (work underway or finished)"),
    }
}

answer_enum! {
    /// Nature of the roofing work being planned.
    RoofScope => WizardField::Scope, {
        New => ("new", "New roof or extension"),
        ReplaceSame => ("replace_same", "Replace with comparable material in the same position"),
        ReplaceChange => ("replace_change", "Replace with a different material or profile"),
    }
}

answer_enum! {
    RoofPitch => WizardField::Pitch, {
        Standard => ("standard", "Standard pitch (above 10 degrees)"),
        Low => ("low", "Low pitch (3 to 10 degrees)"),
        Zero => ("zero", "Zero or near-flat pitch (below 3 degrees)"),
    }
}

answer_enum! {
    /// Risk tags that change how the roof must be designed or consented.
    ComplexRisk => WizardField::Complex, {
        Gutter => ("gutter", "Internal or box gutters"),
        Skillion => ("skillion", "Skillion roof"),
        Truss => ("truss", "Truss alterations"),
        Dormer => ("dormer", "Dormer or boundary wall junction"),
        Container => ("container", "Container or relocatable structure"),
        AtticStorage => ("attic_storage", "Attic converted to storage"),
        H1Upgrade => ("h1_upgrade", "H1 insulation upgrade"),
        Sips => ("sips", "Structural insulated panels (SIPs)"),
        Solar => ("solar", "Solar panel installation"),
        Asbestos => ("asbestos", "Asbestos roofing material"),
        NoneSelected => ("none", "None of these"),
    }
}

answer_enum! {
    /// Whether the structure is past the 15 year durability threshold.
    BuildingAge => WizardField::Age, {
        Old => ("old", "Older than 15 years"),
        Young => ("young", "Younger than 15 years (premature failure)"),
    }
}

answer_enum! {
    ConsentStatus => WizardField::ConsentStatus, {
        Yes => ("yes", "Consent obtained or confirmed not needed"),
        Emergency => ("emergency", "Emergency work already carried out"),
        NoCheck => ("no_check", "Not checked with council"),
    }
}

answer_enum! {
    BuildingType => WizardField::BuildingType, {
        Residential => ("residential", "Owner-occupied residential"),
        Rental => ("rental", "Residential rental"),
        Commercial => ("commercial", "Commercial"),
    }
}

answer_enum! {
    /// Plain yes/no answer used by the variation and licence questions.
    YesNo => WizardField::Variation, {
        Yes => ("yes", "Yes"),
        No => ("no", "No"),
    }
}

answer_enum! {
    ExecTask => WizardField::ExecTask, {
        FinishEaves => ("finish_eaves", "Finishing eaves and underlay"),
        Flashings => ("flashings", "Flashings"),
        Penetration => ("penetration", "Penetrations and flues"),
        Substitution => ("substitution", "Substituting a specified product"),
        Insulation => ("insulation", "Insulation"),
        NoTask => ("none", "None of these"),
    }
}

answer_enum! {
    /// What was found when the existing substrate was opened up.
    Discovery => WizardField::Discovery, {
        Structural => ("structural", "Structural damage found"),
        CheckedOk => ("checked_ok", "Checked, no issues"),
        NotChecked => ("none", "Substrate not checked"),
    }
}

answer_enum! {
    Supervision => WizardField::Supervision, {
        SelfPerformed => ("self", "Carried out by the LBP personally"),
        Check => ("check", "Supervised with regular site checks"),
        Remote => ("remote", "Supervised remotely"),
    }
}

answer_enum! {
    Completion => WizardField::Completion, {
        InProgress => ("in_progress", "Work in progress"),
        Finished => ("finished", "Work finished"),
        Dispute => ("dispute", "Payment or contract dispute"),
        Terminated => ("terminated", "Contract terminated"),
    }
}

/// Every question the wizard can ask, in canonical prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardField {
    Pathway,
    Scope,
    Pitch,
    Complex,
    Age,
    ConsentStatus,
    #[serde(rename = "b_type")]
    BuildingType,
    Variation,
    ExecTask,
    Discovery,
    Licence,
    Supervision,
    Completion,
}

impl WizardField {
    pub const fn ordered() -> [Self; 13] {
        [
            Self::Pathway,
            Self::Scope,
            Self::Pitch,
            Self::Complex,
            Self::Age,
            Self::ConsentStatus,
            Self::BuildingType,
            Self::Variation,
            Self::ExecTask,
            Self::Discovery,
            Self::Licence,
            Self::Supervision,
            Self::Completion,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pathway => "pathway",
            Self::Scope => "scope",
            Self::Pitch => "pitch",
            Self::Complex => "complex",
            Self::Age => "age",
            Self::ConsentStatus => "consent_status",
            Self::BuildingType => "b_type",
            Self::Variation => "variation",
            Self::ExecTask => "exec_task",
            Self::Discovery => "discovery",
            Self::Licence => "licence",
            Self::Supervision => "supervision",
            Self::Completion => "completion",
        }
    }

    /// Prompt shown to the user when this field is next.
    pub const fn question(self) -> &'static str {
        match self {
            Self::Pathway => "Are you planning roofing work, or is the work already underway?",
            Self::Scope => "What is the scope of the roofing work?",
            Self::Pitch => "What is the pitch of the roof?",
            Self::Complex => "Do any of these complex risk features apply?",
            Self::Age => "How old is the existing roof?",
            Self::ConsentStatus => "What is the building consent situation?",
            Self::BuildingType => "What type of building is it?",
            Self::Variation => "Has the work changed from the consented plans?",
            Self::ExecTask => "Which task is currently being carried out?",
            Self::Discovery => "What did you find when the existing roof was removed?",
            Self::Licence => "Does the practitioner hold the correct LBP licence class?",
            Self::Supervision => "How is the work being supervised?",
            Self::Completion => "What is the completion status of the job?",
        }
    }

    /// Wire values and labels accepted for this field.
    pub fn options(self) -> Vec<(&'static str, &'static str)> {
        fn pairs<T: Copy>(
            values: &[T],
            wire: fn(T) -> &'static str,
            label: fn(T) -> &'static str,
        ) -> Vec<(&'static str, &'static str)> {
            values
                .iter()
                .map(|value| (wire(*value), label(*value)))
                .collect()
        }

        match self {
            Self::Pathway => pairs(Pathway::ordered(), Pathway::as_str, Pathway::label),
            Self::Scope => pairs(RoofScope::ordered(), RoofScope::as_str, RoofScope::label),
            Self::Pitch => pairs(RoofPitch::ordered(), RoofPitch::as_str, RoofPitch::label),
            Self::Complex => pairs(ComplexRisk::ordered(), ComplexRisk::as_str, ComplexRisk::label),
            Self::Age => pairs(BuildingAge::ordered(), BuildingAge::as_str, BuildingAge::label),
            Self::ConsentStatus => pairs(
                ConsentStatus::ordered(),
                ConsentStatus::as_str,
                ConsentStatus::label,
            ),
            Self::BuildingType => pairs(
                BuildingType::ordered(),
                BuildingType::as_str,
                BuildingType::label,
            ),
            Self::Variation | Self::Licence => pairs(YesNo::ordered(), YesNo::as_str, YesNo::label),
            Self::ExecTask => pairs(ExecTask::ordered(), ExecTask::as_str, ExecTask::label),
            Self::Discovery => pairs(Discovery::ordered(), Discovery::as_str, Discovery::label),
            Self::Supervision => pairs(
                Supervision::ordered(),
                Supervision::as_str,
                Supervision::label,
            ),
            Self::Completion => pairs(Completion::ordered(), Completion::as_str, Completion::label),
        }
    }
}

impl FromStr for WizardField {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| InputError::UnknownField(raw.to_string()))
    }
}

impl fmt::Display for WizardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Questionnaire state. Unset fields are unanswered questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardInputs {
    #[serde(default)]
    pub pathway: Option<Pathway>,
    #[serde(default)]
    pub scope: Option<RoofScope>,
    #[serde(default)]
    pub pitch: Option<RoofPitch>,
    #[serde(default)]
    pub complex: BTreeSet<ComplexRisk>,
    #[serde(default)]
    pub age: Option<BuildingAge>,
    #[serde(default)]
    pub consent_status: Option<ConsentStatus>,
    #[serde(default)]
    pub b_type: Option<BuildingType>,
    #[serde(default)]
    pub variation: Option<YesNo>,
    #[serde(default)]
    pub exec_task: Option<ExecTask>,
    #[serde(default)]
    pub discovery: Option<Discovery>,
    #[serde(default)]
    pub licence: Option<YesNo>,
    #[serde(default)]
    pub supervision: Option<Supervision>,
    #[serde(default)]
    pub completion: Option<Completion>,
}

impl WizardInputs {
    pub fn planning() -> Self {
        Self {
            pathway: Some(Pathway::Planning),
            ..Self::default()
        }
    }

    pub fn execution() -> Self {
        Self {
            pathway: Some(Pathway::Execution),
            ..Self::default()
        }
    }

    /// Selected task, with an unanswered task treated as `none`.
    pub fn task(&self) -> ExecTask {
        self.exec_task.unwrap_or(ExecTask::NoTask)
    }

    pub fn is_answered(&self, field: WizardField) -> bool {
        match field {
            WizardField::Pathway => self.pathway.is_some(),
            WizardField::Scope => self.scope.is_some(),
            WizardField::Pitch => self.pitch.is_some(),
            WizardField::Complex => !self.complex.is_empty(),
            WizardField::Age => self.age.is_some(),
            WizardField::ConsentStatus => self.consent_status.is_some(),
            WizardField::BuildingType => self.b_type.is_some(),
            WizardField::Variation => self.variation.is_some(),
            WizardField::ExecTask => self.exec_task.is_some(),
            WizardField::Discovery => self.discovery.is_some(),
            WizardField::Licence => self.licence.is_some(),
            WizardField::Supervision => self.supervision.is_some(),
            WizardField::Completion => self.completion.is_some(),
        }
    }

    /// Parse and store a single answer. `complex` accepts a comma separated list,
    /// replaces the current selection and rejects an answer with no tags.
    pub fn apply_answer(&mut self, field: WizardField, raw: &str) -> Result<(), InputError> {
        match field {
            WizardField::Pathway => self.pathway = Some(raw.parse()?),
            WizardField::Scope => self.scope = Some(raw.parse()?),
            WizardField::Pitch => self.pitch = Some(raw.parse()?),
            WizardField::Complex => {
                let complex = parse_complex([raw])?;
                if complex.is_empty() {
                    return Err(InputError::EmptyAnswer(field));
                }
                self.complex = complex;
            }
            WizardField::Age => self.age = Some(raw.parse()?),
            WizardField::ConsentStatus => self.consent_status = Some(raw.parse()?),
            WizardField::BuildingType => self.b_type = Some(raw.parse()?),
            WizardField::Variation => self.variation = Some(raw.parse()?),
            WizardField::ExecTask => self.exec_task = Some(raw.parse()?),
            WizardField::Discovery => self.discovery = Some(raw.parse()?),
            WizardField::Licence => self.licence = Some(parse_yes_no(WizardField::Licence, raw)?),
            WizardField::Supervision => self.supervision = Some(raw.parse()?),
            WizardField::Completion => self.completion = Some(raw.parse()?),
        }
        Ok(())
    }

    pub fn clear_answer(&mut self, field: WizardField) {
        match field {
            WizardField::Pathway => self.pathway = None,
            WizardField::Scope => self.scope = None,
            WizardField::Pitch => self.pitch = None,
            WizardField::Complex => self.complex.clear(),
            WizardField::Age => self.age = None,
            WizardField::ConsentStatus => self.consent_status = None,
            WizardField::BuildingType => self.b_type = None,
            WizardField::Variation => self.variation = None,
            WizardField::ExecTask => self.exec_task = None,
            WizardField::Discovery => self.discovery = None,
            WizardField::Licence => self.licence = None,
            WizardField::Supervision => self.supervision = None,
            WizardField::Completion => self.completion = None,
        }
    }
}

/// Complex tags from one or more answers, each of which may be comma separated.
/// Blank tags are skipped.
fn parse_complex<'a>(
    answers: impl IntoIterator<Item = &'a str>,
) -> Result<BTreeSet<ComplexRisk>, InputError> {
    answers
        .into_iter()
        .flat_map(|answer| answer.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.parse::<ComplexRisk>())
        .collect()
}

// YesNo reports errors against `variation`; rebind them for the licence question.
fn parse_yes_no(field: WizardField, raw: &str) -> Result<YesNo, InputError> {
    raw.parse::<YesNo>().map_err(|err| match err {
        InputError::UnknownValue {
            value, expected, ..
        } => InputError::UnknownValue {
            field,
            value,
            expected,
        },
        other => other,
    })
}

/// Untrusted questionnaire payload as received from a form or JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSubmission {
    #[serde(default)]
    pub pathway: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub pitch: Option<String>,
    #[serde(default)]
    pub complex: Vec<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub consent_status: Option<String>,
    #[serde(default)]
    pub b_type: Option<String>,
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub exec_task: Option<String>,
    #[serde(default)]
    pub discovery: Option<String>,
    #[serde(default)]
    pub licence: Option<String>,
    #[serde(default)]
    pub supervision: Option<String>,
    #[serde(default)]
    pub completion: Option<String>,
}

impl TryFrom<WizardSubmission> for WizardInputs {
    type Error = InputError;

    fn try_from(submission: WizardSubmission) -> Result<Self, Self::Error> {
        let mut inputs = WizardInputs::default();

        let scalar_answers = [
            (WizardField::Pathway, submission.pathway),
            (WizardField::Scope, submission.scope),
            (WizardField::Pitch, submission.pitch),
            (WizardField::Age, submission.age),
            (WizardField::ConsentStatus, submission.consent_status),
            (WizardField::BuildingType, submission.b_type),
            (WizardField::Variation, submission.variation),
            (WizardField::ExecTask, submission.exec_task),
            (WizardField::Discovery, submission.discovery),
            (WizardField::Licence, submission.licence),
            (WizardField::Supervision, submission.supervision),
            (WizardField::Completion, submission.completion),
        ];

        for (field, raw) in scalar_answers {
            if let Some(raw) = raw.filter(|value| !value.trim().is_empty()) {
                inputs.apply_answer(field, &raw)?;
            }
        }

        // An empty or all-blank list leaves the question unanswered, like a blank scalar.
        inputs.complex = parse_complex(submission.complex.iter().map(String::as_str))?;

        Ok(inputs)
    }
}

impl From<&WizardInputs> for WizardSubmission {
    fn from(inputs: &WizardInputs) -> Self {
        fn wire<T: fmt::Display>(value: Option<T>) -> Option<String> {
            value.map(|value| value.to_string())
        }

        Self {
            pathway: wire(inputs.pathway),
            scope: wire(inputs.scope),
            pitch: wire(inputs.pitch),
            complex: inputs.complex.iter().map(|risk| risk.to_string()).collect(),
            age: wire(inputs.age),
            consent_status: wire(inputs.consent_status),
            b_type: wire(inputs.b_type),
            variation: wire(inputs.variation),
            exec_task: wire(inputs.exec_task),
            discovery: wire(inputs.discovery),
            licence: wire(inputs.licence),
            supervision: wire(inputs.supervision),
            completion: wire(inputs.completion),
        }
    }
}
