//! Static descriptive reference data for the four communication styles.
//! Loaded into the binary at compile time and never mutated; the rest of the
//! module reads it through [`profile`], which is a closed match so a missing
//! entry cannot compile.

use serde::Serialize;

use super::domain::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationStyle {
    pub style: &'static str,
    pub prefers: &'static str,
    pub avoids: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyServicesFit {
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
}

/// Everything we know about one color: identity, narrative copy, and the
/// domain-specific guidance surfaced in interviewer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub core_values: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub in_family_services: FamilyServicesFit,
    pub communication: CommunicationStyle,
    pub stress_response: &'static str,
}

pub fn profile(color: Color) -> &'static TraitProfile {
    match color {
        Color::Gold => &GOLD,
        Color::Green => &GREEN,
        Color::Orange => &ORANGE,
        Color::Blue => &BLUE,
    }
}

static GOLD: TraitProfile = TraitProfile {
    id: "gold",
    name: "Gold",
    color: "#D4AF37",
    tagline: "The Responsible Planner",
    description: "You are organized, dependable, and value structure. You bring stability and reliability to any team.",
    core_values: &[
        "Responsibility",
        "Organization",
        "Tradition",
        "Security",
        "Punctuality",
    ],
    strengths: &[
        "Highly organized and detail-oriented",
        "Dependable and follows through on commitments",
        "Creates and maintains efficient systems",
        "Thorough documentation and record-keeping",
        "Respects policies and procedures",
    ],
    challenges: &[
        "May struggle with ambiguity or rapid change",
        "Can appear rigid or inflexible",
        "May focus too much on rules over relationships",
        "Can be overly critical of those who seem disorganized",
    ],
    in_family_services: FamilyServicesFit {
        strengths: &[
            "Excellent at documentation and case notes",
            "Reliable with appointments and follow-through",
            "Creates consistent structure for families",
            "Follows agency protocols carefully",
        ],
        growth_areas: &[
            "Developing flexibility with unpredictable family situations",
            "Balancing procedures with relationship-building",
            "Adapting when plans change unexpectedly",
        ],
    },
    communication: CommunicationStyle {
        style: "Direct, organized, and factual",
        prefers: "Clear agendas, timelines, and written plans",
        avoids: "Ambiguity, last-minute changes, disorganization",
    },
    stress_response: "May become more rigid, critical, or controlling under stress",
};

static GREEN: TraitProfile = TraitProfile {
    id: "green",
    name: "Green",
    color: "#2E8B57",
    tagline: "The Analytical Thinker",
    description: "You are logical, curious, and value knowledge. You bring innovative problem-solving and strategic thinking to any team.",
    core_values: &[
        "Knowledge",
        "Competence",
        "Logic",
        "Independence",
        "Innovation",
    ],
    strengths: &[
        "Strong analytical and problem-solving skills",
        "Sees the big picture and connections",
        "Innovative and creative solutions",
        "Calm under pressure",
        "Objective and fair-minded",
    ],
    challenges: &[
        "May appear detached or unemotional",
        "Can over-analyze and delay action",
        "May struggle with emotional conversations",
        "Can seem arrogant or dismissive of others' ideas",
    ],
    in_family_services: FamilyServicesFit {
        strengths: &[
            "Excellent at assessing complex family dynamics",
            "Develops creative intervention strategies",
            "Stays calm during crises",
            "Identifies patterns and root causes",
        ],
        growth_areas: &[
            "Developing emotional attunement with families",
            "Balancing analysis with action",
            "Showing warmth and connection alongside competence",
        ],
    },
    communication: CommunicationStyle {
        style: "Logical, questioning, and conceptual",
        prefers: "Data, rationale, and time to think",
        avoids: "Small talk, emotional appeals, being rushed",
    },
    stress_response: "May withdraw, become sarcastic, or over-intellectualize under stress",
};

static ORANGE: TraitProfile = TraitProfile {
    id: "orange",
    name: "Orange",
    color: "#FF8C00",
    tagline: "The Adventurous Doer",
    description: "You are energetic, adaptable, and action-oriented. You bring spontaneity and resourcefulness to any team.",
    core_values: &["Freedom", "Action", "Excitement", "Flexibility", "Skill"],
    strengths: &[
        "Highly adaptable and flexible",
        "Thrives in crisis situations",
        "Energetic and enthusiastic",
        "Resourceful problem-solver",
        "Excellent at building rapport quickly",
    ],
    challenges: &[
        "May struggle with routine and documentation",
        "Can be impulsive or take unnecessary risks",
        "May get bored with long-term planning",
        "Can appear scattered or unfocused",
    ],
    in_family_services: FamilyServicesFit {
        strengths: &[
            "Excellent at de-escalation and crisis response",
            "Builds rapport with resistant families quickly",
            "Adapts to unpredictable home visit situations",
            "Brings energy and optimism to difficult cases",
        ],
        growth_areas: &[
            "Developing consistency in documentation",
            "Following through on long-term case plans",
            "Slowing down to ensure thoroughness",
        ],
    },
    communication: CommunicationStyle {
        style: "Informal, energetic, and action-focused",
        prefers: "Variety, hands-on activities, immediate results",
        avoids: "Lengthy meetings, excessive paperwork, rigid schedules",
    },
    stress_response: "May become impulsive, scattered, or escape-seeking under stress",
};

static BLUE: TraitProfile = TraitProfile {
    id: "blue",
    name: "Blue",
    color: "#4169E1",
    tagline: "The Compassionate Connector",
    description: "You are empathetic, sincere, and relationship-focused. You bring warmth and genuine connection to any team.",
    core_values: &[
        "Relationships",
        "Authenticity",
        "Harmony",
        "Compassion",
        "Connection",
    ],
    strengths: &[
        "Deeply empathetic and understanding",
        "Excellent at building trust and rapport",
        "Creates safe, supportive environments",
        "Strong communication and listening skills",
        "Inspires and motivates others",
    ],
    challenges: &[
        "May take things too personally",
        "Can struggle with conflict or tough conversations",
        "May over-invest emotionally in cases",
        "Can have difficulty with boundaries",
    ],
    in_family_services: FamilyServicesFit {
        strengths: &[
            "Builds deep trust with families",
            "Creates safe space for vulnerable conversations",
            "Advocates passionately for children and families",
            "Naturally trauma-informed in approach",
        ],
        growth_areas: &[
            "Developing professional boundaries",
            "Having difficult accountability conversations",
            "Managing emotional investment and self-care",
        ],
    },
    communication: CommunicationStyle {
        style: "Warm, personal, and encouraging",
        prefers: "Personal connection, meaningful conversations, appreciation",
        avoids: "Conflict, criticism, impersonal interactions",
    },
    stress_response: "May become emotional, withdraw, or seek excessive reassurance under stress",
};
