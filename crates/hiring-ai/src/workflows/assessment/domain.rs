use serde::{Deserialize, Serialize};

use super::profiles::TraitProfile;

/// The four communication-style buckets of the forced-choice assessment.
/// Declaration order doubles as the tie-break order when counts are equal,
/// so Gold wins a four-way tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Gold,
    Green,
    Orange,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Gold, Color::Green, Color::Orange, Color::Blue];

    pub const fn id(self) -> &'static str {
        match self {
            Color::Gold => "gold",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Blue => "blue",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Color::Gold => "Gold",
            Color::Green => "Green",
            Color::Orange => "Orange",
            Color::Blue => "Blue",
        }
    }

    /// Accepts either the lowercase id or the display name, any casing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gold" => Some(Color::Gold),
            "green" => Some(Color::Green),
            "orange" => Some(Color::Orange),
            "blue" => Some(Color::Blue),
            _ => None,
        }
    }

    pub fn profile(self) -> &'static TraitProfile {
        super::profiles::profile(self)
    }
}

/// One raw answer as submitted over the wire. Anything that fails category
/// membership or lacks a question id is dropped before tallying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub color: String,
}

/// Count and share of valid answers for one color. Percentages are rounded
/// independently (`round(100 * count / total)`, half away from zero), so the
/// four shares need not sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTally {
    pub color: Color,
    pub count: usize,
    pub percentage: u8,
}

/// The four tallies ordered by descending count, ties resolved by the
/// declaration order of [`Color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRanking {
    entries: [ColorTally; 4],
}

impl ColorRanking {
    pub(crate) fn new(entries: [ColorTally; 4]) -> Self {
        Self { entries }
    }

    pub fn primary(&self) -> &ColorTally {
        &self.entries[0]
    }

    pub fn secondary(&self) -> &ColorTally {
        &self.entries[1]
    }

    pub fn tertiary(&self) -> &ColorTally {
        &self.entries[2]
    }

    pub fn quaternary(&self) -> &ColorTally {
        &self.entries[3]
    }

    pub fn entries(&self) -> &[ColorTally; 4] {
        &self.entries
    }

    /// True when every color appears exactly once. The classifier builds
    /// rankings that satisfy this by construction; the report composer still
    /// verifies it before trusting the ordering.
    pub fn covers_every_color(&self) -> bool {
        Color::ALL
            .iter()
            .all(|color| self.entries.iter().filter(|t| t.color == *color).count() == 1)
    }
}

/// Classifier output: the ranking plus how many answers survived validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedSubmission {
    pub ranking: ColorRanking,
    pub valid_responses: usize,
}

/// Identity attached to a submission; name falls back to "Anonymous".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateIdentity {
    pub name: String,
    pub email: Option<String>,
}

impl CandidateIdentity {
    pub fn anonymous() -> Self {
        Self {
            name: "Anonymous".to_string(),
            email: None,
        }
    }
}
