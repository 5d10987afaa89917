//! Red-flag and green-flag catalogs. Flags are counted, never weighted;
//! counts feed the decision rules while the resolved definitions appear in
//! the evaluation report.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub static RED_FLAGS: [FlagDefinition; 10] = [
    FlagDefinition {
        id: "RF1",
        label: "Vague answers",
        description: "Unable to provide specific examples or details",
    },
    FlagDefinition {
        id: "RF2",
        label: "Lack of self-awareness",
        description: "Cannot identify areas for growth or improvement",
    },
    FlagDefinition {
        id: "RF3",
        label: "External motivation only",
        description: "Focused solely on pay/schedule without mission connection",
    },
    FlagDefinition {
        id: "RF4",
        label: "Defensive responses",
        description: "Becomes defensive when asked follow-up questions",
    },
    FlagDefinition {
        id: "RF5",
        label: "Blaming others",
        description: "Consistently attributes problems to others without self-reflection",
    },
    FlagDefinition {
        id: "RF6",
        label: "Inconsistent stories",
        description: "Details change or contradict throughout interview",
    },
    FlagDefinition {
        id: "RF7",
        label: "Poor boundaries",
        description: "Shares inappropriate personal information or demonstrates boundary issues",
    },
    FlagDefinition {
        id: "RF8",
        label: "Lack of trauma awareness",
        description: "Shows no understanding of trauma-informed principles",
    },
    FlagDefinition {
        id: "RF9",
        label: "Judgmental language",
        description: "Uses stigmatizing or blaming language about families",
    },
    FlagDefinition {
        id: "RF10",
        label: "Rigid thinking",
        description: "Unable to consider multiple perspectives or adapt approach",
    },
];

pub static GREEN_FLAGS: [FlagDefinition; 10] = [
    FlagDefinition {
        id: "GF1",
        label: "Growth mindset",
        description: "Shows genuine willingness to learn and develop",
    },
    FlagDefinition {
        id: "GF2",
        label: "Appropriate vulnerability",
        description: "Shares challenges and lessons learned authentically",
    },
    FlagDefinition {
        id: "GF3",
        label: "Specific examples",
        description: "Provides detailed, relevant examples from experience",
    },
    FlagDefinition {
        id: "GF4",
        label: "Mission connection",
        description: "Demonstrates genuine alignment with family preservation values",
    },
    FlagDefinition {
        id: "GF5",
        label: "Self-awareness",
        description: "Accurately assesses own strengths and growth areas",
    },
    FlagDefinition {
        id: "GF6",
        label: "Empathy with boundaries",
        description: "Shows compassion while maintaining professional stance",
    },
    FlagDefinition {
        id: "GF7",
        label: "Team orientation",
        description: "Values collaboration and supporting colleagues",
    },
    FlagDefinition {
        id: "GF8",
        label: "Accountability",
        description: "Takes responsibility for actions and outcomes",
    },
    FlagDefinition {
        id: "GF9",
        label: "Curiosity",
        description: "Asks thoughtful questions, wants to understand",
    },
    FlagDefinition {
        id: "GF10",
        label: "Realistic expectations",
        description: "Understands challenges of the work without being deterred",
    },
];

/// Resolve submitted flag ids against a catalog, dropping ids that match
/// nothing. Counts for the decision rules come from the raw id lists, not
/// from this resolution.
pub fn resolve_flags(
    ids: &[String],
    catalog: &'static [FlagDefinition],
) -> Vec<&'static FlagDefinition> {
    ids.iter()
        .filter_map(|id| catalog.iter().find(|flag| flag.id == id))
        .collect()
}
