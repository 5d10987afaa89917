//! Evaluation report assembly: section scores, resolved flags, and the
//! calculated recommendation merged into the structure the hiring team and
//! the spreadsheet consume.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::decision::{recommend, DecisionInput, DecisionOutcome, InterviewerRecommendation};
use super::domain::EvaluationResponse;
use super::flags::{resolve_flags, FlagDefinition, GREEN_FLAGS, RED_FLAGS};
use super::scoring::{aggregate, OverallScore, SectionScore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewerInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The decision block of a submitted scorecard. Only the overall score is
/// mandatory; the router rejects submissions without it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSubmission {
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub green_flags: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub recommendation: Option<InterviewerRecommendation>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub next_steps: Option<Vec<String>>,
}

/// Flags as they appear in the report: submitted ids resolved against the
/// catalogs, unknown ids dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagViews {
    pub green: Vec<&'static FlagDefinition>,
    pub red: Vec<&'static FlagDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub evaluation_id: String,
    pub timestamp: DateTime<Utc>,
    pub candidate_info: CandidateInfo,
    pub interviewer_info: InterviewerInfo,
    pub section_scores: BTreeMap<&'static str, SectionScore>,
    pub overall_section_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_section_rating: Option<&'static str>,
    pub interview_score: f64,
    pub flags: FlagViews,
    pub calculated_recommendation: DecisionOutcome,
    pub interviewer_recommendation: Option<InterviewerRecommendation>,
    pub rationale: Option<String>,
    pub next_steps: Vec<String>,
}

pub(crate) struct ComposeInputs {
    pub evaluation_id: String,
    pub timestamp: DateTime<Utc>,
    pub candidate_info: CandidateInfo,
    pub interviewer_info: InterviewerInfo,
    pub responses: Vec<EvaluationResponse>,
    pub decision: DecisionSubmission,
    pub overall_score: f64,
}

pub(crate) fn compose_report(inputs: ComposeInputs) -> EvaluationReport {
    let breakdown = aggregate(&inputs.responses);

    let calculated = recommend(&DecisionInput {
        overall_score: inputs.overall_score,
        red_flags: inputs.decision.red_flags.len(),
        green_flags: inputs.decision.green_flags.len(),
    });

    let next_steps = inputs
        .decision
        .next_steps
        .filter(|steps| !steps.is_empty())
        .unwrap_or_else(|| {
            calculated
                .next_steps
                .iter()
                .map(|step| step.to_string())
                .collect()
        });

    let section_scores: BTreeMap<&'static str, SectionScore> = breakdown
        .sections
        .into_iter()
        .map(|score| (score.section.key(), score))
        .collect();

    let (overall_average, overall_rating) = match breakdown.overall {
        Some(OverallScore { average, band }) => (Some(average), Some(band.label())),
        None => (None, None),
    };

    EvaluationReport {
        evaluation_id: inputs.evaluation_id,
        timestamp: inputs.timestamp,
        candidate_info: inputs.candidate_info,
        interviewer_info: inputs.interviewer_info,
        section_scores,
        overall_section_average: overall_average,
        overall_section_rating: overall_rating,
        interview_score: inputs.overall_score,
        flags: FlagViews {
            green: resolve_flags(&inputs.decision.green_flags, &GREEN_FLAGS),
            red: resolve_flags(&inputs.decision.red_flags, &RED_FLAGS),
        },
        calculated_recommendation: calculated,
        interviewer_recommendation: inputs.decision.recommendation,
        rationale: inputs.decision.rationale,
        next_steps,
    }
}
