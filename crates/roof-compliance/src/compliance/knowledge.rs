//! Compiled-in reference material: MBIE determinations, Building Practitioners Board
//! case studies and the per-question legislation explanations.
//!
//! Records are addressed through [`DeterminationKey`] and [`CaseStudyKey`] so the
//! evaluators cannot cite a record that does not exist. The string-keyed tables are
//! built once on first use and never mutated afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::domain::WizardField;

/// Visual class the UI applies to an alert or banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertType {
    DangerBox,
    WarningBox,
    PrecedentBox,
    SuccessBox,
    CaseStudyBox,
    TechAlert,
    InfoBox,
}

impl AlertType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DangerBox => "danger-box",
            Self::WarningBox => "warning-box",
            Self::PrecedentBox => "precedent-box",
            Self::SuccessBox => "success-box",
            Self::CaseStudyBox => "case-study-box",
            Self::TechAlert => "tech-alert",
            Self::InfoBox => "info-box",
        }
    }
}

/// Summary of a formal MBIE determination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Determination {
    pub key: &'static str,
    pub id: &'static str,
    pub file: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
}

/// Summary of a Building Practitioners Board disciplinary decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub key: &'static str,
    pub id: &'static str,
    pub file: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeterminationKey {
    ZeroPitch,
    LowPitchRepair,
    SkillionVent,
    TrussCow,
    DormerFire,
    ContainerRoof,
    AtticStorage,
    UnderlayUv,
    FlashingLaps,
    FlueGap,
    MembraneSub,
    SprayFoam,
}

impl DeterminationKey {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::ZeroPitch,
            Self::LowPitchRepair,
            Self::SkillionVent,
            Self::TrussCow,
            Self::DormerFire,
            Self::ContainerRoof,
            Self::AtticStorage,
            Self::UnderlayUv,
            Self::FlashingLaps,
            Self::FlueGap,
            Self::MembraneSub,
            Self::SprayFoam,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroPitch => "zero_pitch",
            Self::LowPitchRepair => "low_pitch_repair",
            Self::SkillionVent => "skillion_vent",
            Self::TrussCow => "truss_cow",
            Self::DormerFire => "dormer_fire",
            Self::ContainerRoof => "container_roof",
            Self::AtticStorage => "attic_storage",
            Self::UnderlayUv => "underlay_uv",
            Self::FlashingLaps => "flashing_laps",
            Self::FlueGap => "flue_gap",
            Self::MembraneSub => "membrane_sub",
            Self::SprayFoam => "spray_foam",
        }
    }

    pub fn record(self) -> &'static Determination {
        determination_record(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStudyKey {
    NegligenceNoConsent,
    SipsDelamination,
    ProductSubstitution,
    MinorVariation,
    InheritedDefect,
    LicenceBreach,
    RemoteSupervision,
    SubcontractLiability,
    RecordOfWorkLeverage,
}

impl CaseStudyKey {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::NegligenceNoConsent,
            Self::SipsDelamination,
            Self::ProductSubstitution,
            Self::MinorVariation,
            Self::InheritedDefect,
            Self::LicenceBreach,
            Self::RemoteSupervision,
            Self::SubcontractLiability,
            Self::RecordOfWorkLeverage,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NegligenceNoConsent => "negligence_no_consent",
            Self::SipsDelamination => "sips_delamination",
            Self::ProductSubstitution => "product_substitution",
            Self::MinorVariation => "minor_variation",
            Self::InheritedDefect => "inherited_defect",
            Self::LicenceBreach => "licence_breach",
            Self::RemoteSupervision => "remote_supervision",
            Self::SubcontractLiability => "subcontract_liability",
            Self::RecordOfWorkLeverage => "record_of_work_leverage",
        }
    }

    pub fn record(self) -> &'static CaseStudy {
        case_study_record(self)
    }
}

/// String-keyed view of every determination, built once on first access.
pub fn determination_database() -> &'static BTreeMap<&'static str, Determination> {
    static DATABASE: OnceLock<BTreeMap<&'static str, Determination>> = OnceLock::new();
    DATABASE.get_or_init(|| {
        DeterminationKey::ordered()
            .into_iter()
            .map(|key| (key.as_str(), determination_record(key).clone()))
            .collect()
    })
}

pub fn case_study_database() -> &'static BTreeMap<&'static str, CaseStudy> {
    static DATABASE: OnceLock<BTreeMap<&'static str, CaseStudy>> = OnceLock::new();
    DATABASE.get_or_init(|| {
        CaseStudyKey::ordered()
            .into_iter()
            .map(|key| (key.as_str(), case_study_record(key).clone()))
            .collect()
    })
}

pub fn lookup_determination(key: &str) -> Option<&'static Determination> {
    determination_database().get(key.trim())
}

pub fn lookup_case_study(key: &str) -> Option<&'static CaseStudy> {
    case_study_database().get(key.trim())
}

/// Legislation background for a questionnaire field, keyed by its wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub field: &'static str,
    pub title: &'static str,
    pub legislation: &'static str,
    pub detail: &'static str,
}

pub static EXPLANATIONS: [Explanation; 13] = [
    Explanation {
        field: "pathway",
        title: "Planning versus execution",
        legislation: "Building Act 2004, ss 40 and 84",
        detail: "Consent decisions are made before work starts; supervision and Record of Work duties attach once restricted work is underway.",
    },
    Explanation {
        field: "scope",
        title: "Scope of roofing work",
        legislation: "Building Act 2004, Schedule 1 exemption 1",
        detail: "Only like-for-like replacement with comparable material in the same position sits inside the general repair and maintenance exemption.",
    },
    Explanation {
        field: "pitch",
        title: "Roof pitch and weathertightness",
        legislation: "Building Code clause E2 External Moisture; E2/AS1 Table 7",
        detail: "Roofs below 10 degrees sit outside most acceptable solutions for profiled metal, and near-flat roofs need a specific membrane design.",
    },
    Explanation {
        field: "complex",
        title: "Complex risk features",
        legislation: "Building (Designation of Building Work Licensing Classes) Order 2010",
        detail: "Structural alterations, internal gutters and relocatable structures fall outside the repair exemption and usually need a consented design.",
    },
    Explanation {
        field: "age",
        title: "Durability threshold",
        legislation: "Building Code clause B2 Durability",
        detail: "A roof cladding is expected to last at least 15 years. Replacing a younger roof signals premature failure, which takes the work outside the exemption.",
    },
    Explanation {
        field: "consent_status",
        title: "Consent status",
        legislation: "Building Act 2004, ss 40, 41 and 96",
        detail: "Emergency work may proceed without consent but must be followed by an application for a Certificate of Acceptance.",
    },
    Explanation {
        field: "b_type",
        title: "Building type",
        legislation: "Building Act 2004, s 7 definition of restricted building work",
        detail: "Restricted building work applies to houses and small-to-medium apartments. Commercial buildings are outside the regime.",
    },
    Explanation {
        field: "variation",
        title: "Changes to consented plans",
        legislation: "Building Act 2004, s 45A minor variations",
        detail: "Any departure from the consented plans needs council approval as a minor variation or a formal amendment before the work is built.",
    },
    Explanation {
        field: "exec_task",
        title: "Task being carried out",
        legislation: "Building Code clauses E2 and H1; E2/AS1",
        detail: "Eaves, flashings, penetrations and insulation are the details most often cited in weathertightness determinations.",
    },
    Explanation {
        field: "discovery",
        title: "Discoveries during strip-off",
        legislation: "Building Act 2004, s 17 and Building Code clause B1 Structure",
        detail: "Replaced structure must comply with the current Building Code, and building over a known defect transfers liability to the practitioner.",
    },
    Explanation {
        field: "licence",
        title: "LBP licence class",
        legislation: "Building Act 2004, s 85 and Licensing Classes Order 2010",
        detail: "Restricted roofing work must be carried out or supervised by an LBP holding the Roofing licence class appropriate to the system.",
    },
    Explanation {
        field: "supervision",
        title: "Supervision of restricted work",
        legislation: "Building Act 2004, s 7 definition of supervise",
        detail: "Supervision means providing control or direction and oversight sufficient to ensure the work complies with the consent.",
    },
    Explanation {
        field: "completion",
        title: "Record of Work",
        legislation: "Building Act 2004, s 88",
        detail: "Every LBP must provide a Record of Work to the owner and the territorial authority on completion of their restricted building work.",
    },
];

pub fn explanation_for(field: WizardField) -> Option<&'static Explanation> {
    EXPLANATIONS
        .iter()
        .find(|explanation| explanation.field == field.as_str())
}

fn determination_record(key: DeterminationKey) -> &'static Determination {
    match key {
        DeterminationKey::ZeroPitch => &ZERO_PITCH,
        DeterminationKey::LowPitchRepair => &LOW_PITCH_REPAIR,
        DeterminationKey::SkillionVent => &SKILLION_VENT,
        DeterminationKey::TrussCow => &TRUSS_COW,
        DeterminationKey::DormerFire => &DORMER_FIRE,
        DeterminationKey::ContainerRoof => &CONTAINER_ROOF,
        DeterminationKey::AtticStorage => &ATTIC_STORAGE,
        DeterminationKey::UnderlayUv => &UNDERLAY_UV,
        DeterminationKey::FlashingLaps => &FLASHING_LAPS,
        DeterminationKey::FlueGap => &FLUE_GAP,
        DeterminationKey::MembraneSub => &MEMBRANE_SUB,
        DeterminationKey::SprayFoam => &SPRAY_FOAM,
    }
}

fn case_study_record(key: CaseStudyKey) -> &'static CaseStudy {
    match key {
        CaseStudyKey::NegligenceNoConsent => &NEGLIGENCE_NO_CONSENT,
        CaseStudyKey::SipsDelamination => &SIPS_DELAMINATION,
        CaseStudyKey::ProductSubstitution => &PRODUCT_SUBSTITUTION,
        CaseStudyKey::MinorVariation => &MINOR_VARIATION,
        CaseStudyKey::InheritedDefect => &INHERITED_DEFECT,
        CaseStudyKey::LicenceBreach => &LICENCE_BREACH,
        CaseStudyKey::RemoteSupervision => &REMOTE_SUPERVISION,
        CaseStudyKey::SubcontractLiability => &SUBCONTRACT_LIABILITY,
        CaseStudyKey::RecordOfWorkLeverage => &RECORD_OF_WORK_LEVERAGE,
    }
}

static ZERO_PITCH: Determination = Determination {
    key: "zero_pitch",
    id: "Det 2016/016",
    file: "2016-016.pdf",
    title: "Membrane roof laid at zero fall",
    summary: "A membrane roof with no designed fall ponded across the deck and failed clause E2. <strong>Zero-pitch roofs are outside every acceptable solution</strong> and require a specific design with a minimum 1.5 degree finished fall.",
    alert_type: AlertType::DangerBox,
};

static LOW_PITCH_REPAIR: Determination = Determination {
    key: "low_pitch_repair",
    id: "Det 2019/042",
    file: "2019-042.pdf",
    title: "Like-for-like re-roof of a low-pitch roof",
    summary: "Replacing low-pitch corrugate with the same profile in the same position was held to be repair and maintenance under Schedule 1. <strong>No building consent was required</strong>, provided the fixings and laps match the original durability.",
    alert_type: AlertType::PrecedentBox,
};

static SKILLION_VENT: Determination = Determination {
    key: "skillion_vent",
    id: "Det 2020/011",
    file: "2020-011.pdf",
    title: "Unventilated skillion roof condensation",
    summary: "Condensation accumulated under the skillion sarking and rotted the rafters within four years. A skillion roof needs a <strong>drained and ventilated cavity</strong> or a specific design to meet E3 Internal Moisture.",
    alert_type: AlertType::WarningBox,
};

static TRUSS_COW: Determination = Determination {
    key: "truss_cow",
    id: "Det 2018/033",
    file: "2018-033.pdf",
    title: "Truss alterations for a roof change of weight",
    summary: "Cutting or re-spacing trusses to suit a heavier cladding altered the primary structure. <strong>Alterations to trusses always require building consent</strong> and engineering sign-off under clause B1.",
    alert_type: AlertType::DangerBox,
};

static DORMER_FIRE: Determination = Determination {
    key: "dormer_fire",
    id: "Det 2017/058",
    file: "2017-058.pdf",
    title: "Dormer close to the boundary",
    summary: "A dormer cheek within 1 metre of the boundary lacked the fire rating required by clause C3. Roof work near a boundary wall must keep the <strong>fire separation</strong> intact.",
    alert_type: AlertType::WarningBox,
};

static CONTAINER_ROOF: Determination = Determination {
    key: "container_roof",
    id: "Det 2021/007",
    file: "2021-007.pdf",
    title: "Roof added over shipping containers",
    summary: "Fixing a roof across two containers created a building requiring consent. The containers became <strong>structural supports</strong> and needed specific bracing and tie-down design.",
    alert_type: AlertType::DangerBox,
};

static ATTIC_STORAGE: Determination = Determination {
    key: "attic_storage",
    id: "Det 2015/049",
    file: "2015-049.pdf",
    title: "Attic conversion to storage",
    summary: "Flooring an attic over standard trusses added load the trusses were never designed to carry. Storage use changes the <strong>design loads under B1</strong> and needs consent.",
    alert_type: AlertType::WarningBox,
};

static UNDERLAY_UV: Determination = Determination {
    key: "underlay_uv",
    id: "Det 2019/015",
    file: "2019-015.pdf",
    title: "Exposed underlay at the eaves",
    summary: "Underlay left protruding into the gutter degraded under UV and wicked water back into the eaves. Underlay must be <strong>trimmed and supported with a turn-down</strong> into the gutter.",
    alert_type: AlertType::TechAlert,
};

static FLASHING_LAPS: Determination = Determination {
    key: "flashing_laps",
    id: "Det 2018/061",
    file: "2018-061.pdf",
    title: "Insufficient flashing laps",
    summary: "Barge and apron flashings lapped 75mm instead of the 150mm required by E2/AS1. Short laps allowed wind-driven rain past the flashing and the work was held to be <strong>non-compliant with E2</strong>.",
    alert_type: AlertType::TechAlert,
};

static FLUE_GAP: Determination = Determination {
    key: "flue_gap",
    id: "Det 2017/024",
    file: "2017-024.pdf",
    title: "Flue penetration clearance",
    summary: "A flue passed through the roof without the manufacturer's clearance to combustible framing and without a proprietary flashing collar. Penetrations must meet <strong>C3 fire clearances and E2 weathertightness</strong> together.",
    alert_type: AlertType::DangerBox,
};

static MEMBRANE_SUB: Determination = Determination {
    key: "membrane_sub",
    id: "Det 2020/029",
    file: "2020-029.pdf",
    title: "Membrane substituted without approval",
    summary: "The consented butyl membrane was replaced with a cheaper TPO system on site. Substituting a specified product is a <strong>change to the consent</strong> and must be approved before installation.",
    alert_type: AlertType::DangerBox,
};

static SPRAY_FOAM: Determination = Determination {
    key: "spray_foam",
    id: "Det 2022/012",
    file: "2022-012.pdf",
    title: "Spray foam applied to roof underside",
    summary: "Spray foam applied directly to the underside of roofing iron trapped moisture and prevented inspection of fixings. The product had <strong>no appraisal for that use</strong> and the work did not comply with B2 or E2.",
    alert_type: AlertType::WarningBox,
};

static NEGLIGENCE_NO_CONSENT: CaseStudy = CaseStudy {
    key: "negligence_no_consent",
    id: "BPB CB25612",
    file: "CB25612.pdf",
    title: "Work carried out without consent",
    summary: "The LBP re-roofed and altered the structure without checking whether consent was required. The Board found <strong>negligence</strong>: confirming consent is part of every practitioner's duty, not only the owner's.",
    alert_type: AlertType::CaseStudyBox,
};

static SIPS_DELAMINATION: CaseStudy = CaseStudy {
    key: "sips_delamination",
    id: "BPB CB26044",
    file: "CB26044.pdf",
    title: "SIPs roof panels delaminated",
    summary: "Structural insulated panels were installed without the supplier's joint tape and spline detail. Moisture entered at the joints and the panels delaminated. <strong>Proprietary systems must be installed exactly to their appraisal.</strong>",
    alert_type: AlertType::CaseStudyBox,
};

static PRODUCT_SUBSTITUTION: CaseStudy = CaseStudy {
    key: "product_substitution",
    id: "BPB CB25891",
    file: "CB25891.pdf",
    title: "Unauthorised product swap",
    summary: "The LBP swapped the consented underlay for an unapproved alternative to save cost. The Board held that building other than in accordance with the consent was a <strong>disciplinary offence</strong> regardless of product quality.",
    alert_type: AlertType::CaseStudyBox,
};

static MINOR_VARIATION: CaseStudy = CaseStudy {
    key: "minor_variation",
    id: "BPB CB25377",
    file: "CB25377.pdf",
    title: "Changes made without a minor variation",
    summary: "The roof profile and fall were changed on site at the owner's request with no council approval. Every change to consented work needs a <strong>formal minor variation application</strong> before it is built.",
    alert_type: AlertType::CaseStudyBox,
};

static INHERITED_DEFECT: CaseStudy = CaseStudy {
    key: "inherited_defect",
    id: "BPB CB26108",
    file: "CB26108.pdf",
    title: "New roof laid over rotten sarking",
    summary: "The practitioner did not inspect the substrate before laying the new roof. Rot in the existing sarking caused failure within two years and the LBP <strong>inherited liability</strong> for the prior defect.",
    alert_type: AlertType::CaseStudyBox,
};

static LICENCE_BREACH: CaseStudy = CaseStudy {
    key: "licence_breach",
    id: "BPB CB25203",
    file: "CB25203.pdf",
    title: "Restricted work outside licence class",
    summary: "A practitioner licensed in Carpentry carried out membrane roofing. Working outside the licence class was treated as <strong>unlicensed restricted building work</strong> and attracted a fine and censure.",
    alert_type: AlertType::CaseStudyBox,
};

static REMOTE_SUPERVISION: CaseStudy = CaseStudy {
    key: "remote_supervision",
    id: "BPB CB25758",
    file: "CB25758.pdf",
    title: "Supervision by phone",
    summary: "The supervising LBP gave instructions by phone and photos and never attended site. The Board found that <strong>remote supervision is not supervision</strong> for restricted work performed by unlicensed staff.",
    alert_type: AlertType::CaseStudyBox,
};

static SUBCONTRACT_LIABILITY: CaseStudy = CaseStudy {
    key: "subcontract_liability",
    id: "BPB CB26011",
    file: "CB26011.pdf",
    title: "Liability for subcontracted crews",
    summary: "The head contractor's LBP signed the Record of Work for a subcontracted roofing crew he had not supervised. <strong>Signing for work you did not supervise</strong> is a breach regardless of who was paid.",
    alert_type: AlertType::CaseStudyBox,
};

static RECORD_OF_WORK_LEVERAGE: CaseStudy = CaseStudy {
    key: "record_of_work_leverage",
    id: "BPB CB25490",
    file: "CB25490.pdf",
    title: "Record of Work withheld over payment",
    summary: "The LBP refused to issue a Record of Work until an invoice was paid. The Board confirmed the Record of Work is a <strong>statutory obligation</strong> that cannot be used as payment leverage.",
    alert_type: AlertType::CaseStudyBox,
};
