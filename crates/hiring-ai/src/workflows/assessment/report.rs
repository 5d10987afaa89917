//! Builds the two audience-specific views of a classified assessment: the
//! short candidate summary and the detailed interviewer report. Pure
//! lookup/merge over the ranking and the static guidance tables.

use serde::Serialize;

use super::classifier::AssessmentError;
use super::domain::{Color, ColorRanking};
use super::profiles::CommunicationStyle;

/// Supervision guidance keyed by primary color. A closed match keeps the
/// table exhaustive at compile time.
fn supervision_guidance(color: Color) -> &'static [&'static str] {
    match color {
        Color::Gold => &[
            "Provide clear expectations and written guidelines",
            "Give regular feedback on performance",
            "Respect their need for organization and planning",
            "Help them develop flexibility for unpredictable situations",
        ],
        Color::Green => &[
            "Allow time for independent thinking and analysis",
            "Explain the \"why\" behind decisions and policies",
            "Value their innovative ideas and problem-solving",
            "Support development of emotional connection skills",
        ],
        Color::Orange => &[
            "Provide variety and new challenges",
            "Give freedom with clear accountability",
            "Support with documentation and follow-through",
            "Channel their energy toward positive outcomes",
        ],
        Color::Blue => &[
            "Build a personal, supportive relationship",
            "Provide regular appreciation and recognition",
            "Help establish healthy boundaries",
            "Support self-care and emotional processing",
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDynamics {
    pub works_well_with: &'static str,
    pub potential_friction: &'static str,
    pub contribution: &'static str,
}

fn team_dynamics(color: Color) -> TeamDynamics {
    match color {
        Color::Gold => TeamDynamics {
            works_well_with: "Blues (both value commitment) and Greens (both appreciate competence)",
            potential_friction: "Oranges (different pace and structure preferences)",
            contribution: "Brings organization, reliability, and follow-through to the team",
        },
        Color::Green => TeamDynamics {
            works_well_with: "Golds (both value competence) and other Greens (intellectual stimulation)",
            potential_friction: "Blues (different decision-making styles)",
            contribution: "Brings analysis, innovation, and objective perspective to the team",
        },
        Color::Orange => TeamDynamics {
            works_well_with: "Blues (both are people-oriented) and other Oranges (energy match)",
            potential_friction: "Golds (different structure preferences)",
            contribution: "Brings energy, adaptability, and crisis management to the team",
        },
        Color::Blue => TeamDynamics {
            works_well_with: "Oranges (both are people-focused) and Golds (complementary strengths)",
            potential_friction: "Greens (different communication styles)",
            contribution: "Brings empathy, connection, and team harmony",
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorHighlight {
    pub name: &'static str,
    pub color: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumEntry {
    pub name: &'static str,
    pub color: &'static str,
    pub percentage: u8,
}

/// What the candidate sees: primary/secondary with copy, and the percentage
/// breakdown across all four colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateReport {
    pub primary_color: ColorHighlight,
    pub secondary_color: ColorHighlight,
    pub color_spectrum: Vec<SpectrumEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub primary_color: &'static str,
    pub primary_percentage: u8,
    pub secondary_color: &'static str,
    pub secondary_percentage: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorProfileEntry {
    pub color: &'static str,
    pub hex_color: &'static str,
    pub percentage: u8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryDetails {
    pub name: &'static str,
    pub tagline: &'static str,
    pub core_values: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub communication: CommunicationStyle,
    pub stress_response: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryDetails {
    pub name: &'static str,
    pub tagline: &'static str,
    pub core_values: &'static [&'static str],
    pub strengths: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyServicesProfile {
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
    pub secondary_strengths: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisionRecommendations {
    pub primary_recommendations: &'static [&'static str],
    pub blended_approach: String,
}

/// What the hiring team sees: the full profile plus supervision and
/// team-dynamics guidance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewerReport {
    pub summary: ReportSummary,
    pub color_profile: Vec<ColorProfileEntry>,
    pub primary_details: PrimaryDetails,
    pub secondary_details: SecondaryDetails,
    pub family_services_profile: FamilyServicesProfile,
    pub supervision_recommendations: SupervisionRecommendations,
    pub team_dynamics: TeamDynamics,
}

pub fn candidate_report(ranking: &ColorRanking) -> Result<CandidateReport, AssessmentError> {
    verify_ranking(ranking)?;

    let primary = ranking.primary();
    let secondary = ranking.secondary();
    let primary_profile = primary.color.profile();
    let secondary_profile = secondary.color.profile();

    Ok(CandidateReport {
        primary_color: ColorHighlight {
            name: primary_profile.name,
            color: primary_profile.color,
            tagline: primary_profile.tagline,
            description: primary_profile.description,
            percentage: primary.percentage,
        },
        secondary_color: ColorHighlight {
            name: secondary_profile.name,
            color: secondary_profile.color,
            tagline: secondary_profile.tagline,
            description: secondary_profile.description,
            percentage: secondary.percentage,
        },
        color_spectrum: ranking
            .entries()
            .iter()
            .map(|tally| {
                let profile = tally.color.profile();
                SpectrumEntry {
                    name: profile.name,
                    color: profile.color,
                    percentage: tally.percentage,
                }
            })
            .collect(),
    })
}

pub fn interviewer_report(ranking: &ColorRanking) -> Result<InterviewerReport, AssessmentError> {
    verify_ranking(ranking)?;

    let primary = ranking.primary();
    let secondary = ranking.secondary();
    let primary_profile = primary.color.profile();
    let secondary_profile = secondary.color.profile();

    Ok(InterviewerReport {
        summary: ReportSummary {
            primary_color: primary_profile.name,
            primary_percentage: primary.percentage,
            secondary_color: secondary_profile.name,
            secondary_percentage: secondary.percentage,
            description: primary_profile.description,
        },
        color_profile: ranking
            .entries()
            .iter()
            .map(|tally| {
                let profile = tally.color.profile();
                ColorProfileEntry {
                    color: profile.name,
                    hex_color: profile.color,
                    percentage: tally.percentage,
                    count: tally.count,
                }
            })
            .collect(),
        primary_details: PrimaryDetails {
            name: primary_profile.name,
            tagline: primary_profile.tagline,
            core_values: primary_profile.core_values,
            strengths: primary_profile.strengths,
            challenges: primary_profile.challenges,
            communication: primary_profile.communication,
            stress_response: primary_profile.stress_response,
        },
        secondary_details: SecondaryDetails {
            name: secondary_profile.name,
            tagline: secondary_profile.tagline,
            core_values: secondary_profile.core_values,
            strengths: secondary_profile.strengths,
        },
        family_services_profile: FamilyServicesProfile {
            strengths: primary_profile.in_family_services.strengths,
            growth_areas: primary_profile.in_family_services.growth_areas,
            secondary_strengths: secondary_profile.in_family_services.strengths,
        },
        supervision_recommendations: SupervisionRecommendations {
            primary_recommendations: supervision_guidance(primary.color),
            blended_approach: blended_approach(primary.color, secondary.color),
        },
        team_dynamics: team_dynamics(primary.color),
    })
}

fn blended_approach(primary: Color, secondary: Color) -> String {
    let primary_profile = primary.profile();
    let secondary_profile = secondary.profile();
    format!(
        "This candidate blends {} and {} - balance {}'s need for {} with {}'s value of {}.",
        primary_profile.name,
        secondary_profile.name,
        primary_profile.name,
        primary_profile.core_values[0].to_lowercase(),
        secondary_profile.name,
        secondary_profile.core_values[0].to_lowercase(),
    )
}

fn verify_ranking(ranking: &ColorRanking) -> Result<(), AssessmentError> {
    if ranking.covers_every_color() {
        Ok(())
    } else {
        Err(AssessmentError::IncoherentRanking)
    }
}
