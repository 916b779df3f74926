use serde::{Deserialize, Serialize};

use super::domain::WizardField;
use super::knowledge::{AlertType, CaseStudy, CaseStudyKey, Determination, DeterminationKey};

/// Verdict produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    ConsentRequired,
    LbpRequired,
    LikelyExempt,
    CommercialExempt,
    CheckRequired,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ConsentRequired => "Consent required",
            Self::LbpRequired => "LBP required",
            Self::LikelyExempt => "Likely exempt",
            Self::CommercialExempt => "Commercial exempt",
            Self::CheckRequired => "Check required",
        }
    }
}

/// Where a warning's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSource {
    Determination,
    CaseStudy,
    Custom,
}

/// Alert composed inline during evaluation rather than cited from the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAlert {
    pub key: String,
    pub id: String,
    pub file: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    #[serde(default)]
    pub pdf_link: Option<String>,
}

impl CustomAlert {
    pub fn new(
        key: impl Into<String>,
        id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        alert_type: AlertType,
    ) -> Self {
        Self {
            key: key.into(),
            id: id.into(),
            file: String::new(),
            title: title.into(),
            summary: summary.into(),
            alert_type,
            pdf_link: None,
        }
    }

    pub fn with_pdf_link(mut self, link: impl Into<String>) -> Self {
        self.pdf_link = Some(link.into());
        self
    }
}

/// One rendered alert in the order the rules fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub source: WarningSource,
    pub key: String,
    pub id: String,
    pub file: String,
    pub title: String,
    pub summary: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
}

impl From<&Determination> for Warning {
    fn from(record: &Determination) -> Self {
        Self {
            source: WarningSource::Determination,
            key: record.key.to_string(),
            id: record.id.to_string(),
            file: record.file.to_string(),
            title: record.title.to_string(),
            summary: record.summary.to_string(),
            alert_type: record.alert_type,
            pdf_link: None,
        }
    }
}

impl From<&CaseStudy> for Warning {
    fn from(record: &CaseStudy) -> Self {
        Self {
            source: WarningSource::CaseStudy,
            key: record.key.to_string(),
            id: record.id.to_string(),
            file: record.file.to_string(),
            title: record.title.to_string(),
            summary: record.summary.to_string(),
            alert_type: record.alert_type,
            pdf_link: None,
        }
    }
}

impl From<DeterminationKey> for Warning {
    fn from(key: DeterminationKey) -> Self {
        Self::from(key.record())
    }
}

impl From<CaseStudyKey> for Warning {
    fn from(key: CaseStudyKey) -> Self {
        Self::from(key.record())
    }
}

impl From<CustomAlert> for Warning {
    fn from(alert: CustomAlert) -> Self {
        Self {
            source: WarningSource::Custom,
            key: alert.key,
            id: alert.id,
            file: alert.file,
            title: alert.title,
            summary: alert.summary,
            alert_type: alert.alert_type,
            pdf_link: alert.pdf_link,
        }
    }
}

/// Engine output. Wholly derived from the questionnaire answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub status: ComplianceStatus,
    pub banner_class: AlertType,
    pub banner_title: String,
    pub banner_subtitle: String,
    pub warnings: Vec<Warning>,
    pub reasons: Vec<String>,
    pub required_actions: Vec<String>,
    pub legislation_keys: Vec<WizardField>,
}

impl ComplianceResult {
    /// Neutral result returned before a pathway has been chosen.
    pub fn pathway_pending() -> Self {
        Self {
            status: ComplianceStatus::CheckRequired,
            banner_class: AlertType::InfoBox,
            banner_title: "SELECT PATHWAY".to_string(),
            banner_subtitle: "Choose planning or execution to begin the assessment.".to_string(),
            warnings: Vec::new(),
            reasons: Vec::new(),
            required_actions: Vec::new(),
            legislation_keys: Vec::new(),
        }
    }

    pub fn has_warning(&self, key: &str) -> bool {
        self.warnings.iter().any(|warning| warning.key == key)
    }

    pub fn warning_keys(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .map(|warning| warning.key.as_str())
            .collect()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!("{}: {}", self.status.label(), self.banner_title);
        if !self.warnings.is_empty() {
            summary.push_str(&format!(", {} warning(s)", self.warnings.len()));
        }
        if !self.required_actions.is_empty() {
            summary.push_str(&format!(
                ", {} required action(s)",
                self.required_actions.len()
            ));
        }
        summary
    }
}
