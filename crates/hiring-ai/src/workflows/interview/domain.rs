use serde::{Deserialize, Serialize};

/// Sections of the interviewer scorecard. Declaration order is the order the
/// form presents them; only sections with scale questions ever produce a
/// section score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Opening,
    Experience,
    Values,
    Closing,
    Decision,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Opening,
        SectionId::Experience,
        SectionId::Values,
        SectionId::Closing,
        SectionId::Decision,
    ];

    /// Workbook-style key used in the serialized section-score map.
    pub const fn key(self) -> &'static str {
        match self {
            SectionId::Opening => "OPENING",
            SectionId::Experience => "EXPERIENCE",
            SectionId::Values => "VALUES",
            SectionId::Closing => "CLOSING",
            SectionId::Decision => "DECISION",
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            SectionId::Opening => "opening",
            SectionId::Experience => "experience",
            SectionId::Values => "values",
            SectionId::Closing => "closing",
            SectionId::Decision => "decision",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == raw.trim().to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Scale,
    Textarea,
    Select,
    Number,
    Multiselect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Anchor text for each point of the 1-3 scale on questions that carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rubric {
    #[serde(rename = "3")]
    pub strong: &'static str,
    #[serde(rename = "2")]
    pub adequate: &'static str,
    #[serde(rename = "1")]
    pub concern: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionQuestion {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Rubric>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub options: &'static [SelectOption],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationSection {
    pub id: SectionId,
    pub name: &'static str,
    pub description: &'static str,
    pub questions: &'static [SectionQuestion],
}

/// One point on the shared evaluation scale, with its reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleLevel {
    pub value: u8,
    pub label: &'static str,
    pub description: &'static str,
}

pub const EVALUATION_SCALE: [ScaleLevel; 3] = [
    ScaleLevel {
        value: 3,
        label: "Strong",
        description: "Exceeds expectations, clear competency demonstrated",
    },
    ScaleLevel {
        value: 2,
        label: "Adequate",
        description: "Meets expectations, shows potential",
    },
    ScaleLevel {
        value: 1,
        label: "Concern",
        description: "Below expectations, raises questions",
    },
];

/// One scorecard answer as submitted. Scale answers carry a number (or a
/// numeric string from older form clients); text answers carry prose that the
/// aggregator ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl EvaluationResponse {
    /// The numeric rating, if this answer carries one. Zero and non-numeric
    /// values read as skipped.
    pub fn rating(&self) -> Option<u8> {
        match &self.value {
            Some(serde_json::Value::Number(n)) => {
                let n = n.as_u64()?;
                (n >= 1 && n <= u64::from(u8::MAX)).then_some(n as u8)
            }
            Some(serde_json::Value::String(s)) => {
                let n = s.trim().parse::<u8>().ok()?;
                (n >= 1).then_some(n)
            }
            _ => None,
        }
    }
}
