//! Scenario submission handling: completion gating and per-scenario
//! organization of free-text answers, plus the interviewer's category
//! scoring pass.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{scenarios, total_question_count, ASSESSMENT_CATEGORIES};
use crate::notify::email::escape_html;
use crate::notify::{notify_async, EmailMessage, NotificationGateway};
use crate::workflows::assessment::domain::CandidateIdentity;
use crate::workflows::rubric::{is_valid_rating, round2, ScaleBand};

/// One free-text answer as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAnswer {
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub response: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSubmission {
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default)]
    pub responses: Option<Vec<ScenarioAnswer>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Candidate name is required")]
    MissingCandidateName,
    #[error("Scenario responses are required")]
    MissingResponses,
    #[error("Please complete at least 50% of the scenario questions")]
    IncompleteSubmission { completion_percentage: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    pub question_id: String,
    pub question_text: &'static str,
    pub response: String,
}

/// A candidate's answers regrouped under the scenario they belong to, with
/// the scoring criteria interviewers read them against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizedScenario {
    pub scenario_title: &'static str,
    pub category: &'static str,
    pub responses: Vec<AnsweredQuestion>,
    pub scoring_criteria: &'static [&'static str],
}

/// Blank per-category scoring sheet included with every submission so
/// interviewers can score without refetching the rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringTemplateEntry {
    pub category: &'static str,
    pub description: &'static str,
    pub score: Option<u8>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSubmissionResult {
    pub success: bool,
    pub submission_id: String,
    pub submitted_at: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
    pub candidate: CandidateIdentity,
    pub completion_percentage: u8,
    pub total_responses: usize,
    pub total_questions: usize,
    pub scenario_responses: BTreeMap<&'static str, OrganizedScenario>,
    pub scoring_template: Vec<ScoringTemplateEntry>,
}

/// Service handling candidate submissions and interviewer scoring.
pub struct ScenarioService<N> {
    mailer: Arc<N>,
}

impl<N> ScenarioService<N>
where
    N: NotificationGateway + 'static,
{
    pub fn new(mailer: Arc<N>) -> Self {
        Self { mailer }
    }

    pub fn submit(
        &self,
        submission: ScenarioSubmission,
    ) -> Result<ScenarioSubmissionResult, ScenarioError> {
        let candidate_name = submission
            .candidate_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ScenarioError::MissingCandidateName)?;
        let responses = submission
            .responses
            .filter(|responses| !responses.is_empty())
            .ok_or(ScenarioError::MissingResponses)?;

        let valid_count = responses
            .iter()
            .filter(|answer| {
                !answer.question_id.trim().is_empty() && !answer.response.trim().is_empty()
            })
            .count();

        let total_questions = total_question_count();
        let completion_percentage =
            ((valid_count as f64 / total_questions as f64) * 100.0).round() as u8;

        if completion_percentage < 50 {
            return Err(ScenarioError::IncompleteSubmission {
                completion_percentage,
            });
        }

        let timestamp = Utc::now();
        Ok(ScenarioSubmissionResult {
            success: true,
            submission_id: format!("SCEN-{}", timestamp.timestamp_millis()),
            submitted_at: timestamp,
            timestamp,
            candidate: CandidateIdentity {
                name: candidate_name,
                email: submission
                    .candidate_email
                    .filter(|email| !email.trim().is_empty()),
            },
            completion_percentage,
            total_responses: valid_count,
            total_questions,
            scenario_responses: organize_responses(&responses),
            scoring_template: ASSESSMENT_CATEGORIES
                .iter()
                .map(|category| ScoringTemplateEntry {
                    category: category.name,
                    description: category.description,
                    score: None,
                    notes: String::new(),
                })
                .collect(),
        })
    }

    /// Announce the submission without blocking the response.
    pub fn dispatch_outbound(&self, result: &ScenarioSubmissionResult) {
        notify_async(self.mailer.clone(), render_notification(result));
    }
}

/// Group answers under the scenario whose id prefixes their question id.
/// Answers that match no catalog question keep their text with an unknown
/// marker so interviewers still see what was submitted.
pub fn organize_responses(
    responses: &[ScenarioAnswer],
) -> BTreeMap<&'static str, OrganizedScenario> {
    scenarios()
        .iter()
        .map(|scenario| {
            let answered = responses
                .iter()
                .filter(|answer| answer.question_id.starts_with(scenario.id))
                .map(|answer| AnsweredQuestion {
                    question_id: answer.question_id.clone(),
                    question_text: scenario
                        .questions
                        .iter()
                        .find(|question| question.id == answer.question_id)
                        .map(|question| question.text)
                        .unwrap_or("Unknown question"),
                    response: answer.response.clone(),
                })
                .collect();

            (
                scenario.id,
                OrganizedScenario {
                    scenario_title: scenario.title,
                    category: scenario.category,
                    responses: answered,
                    scoring_criteria: scenario.scoring_criteria,
                },
            )
        })
        .collect()
}

/// One category score from the interviewer's pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioScoreRequest {
    #[serde(default)]
    pub submission_id: Option<String>,
    #[serde(default)]
    pub interviewer_name: Option<String>,
    #[serde(default)]
    pub category_scores: Option<Vec<CategoryScore>>,
    #[serde(default)]
    pub overall_notes: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioScoreError {
    #[error("Submission ID and interviewer name are required")]
    MissingIdentity,
    #[error("Category scores are required")]
    MissingScores,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioScoreResult {
    pub success: bool,
    pub scoring_id: String,
    pub submission_id: String,
    pub interviewer_name: String,
    pub timestamp: DateTime<Utc>,
    pub category_scores: Vec<CategoryScore>,
    pub average_score: f64,
    pub overall_rating: &'static str,
    pub overall_notes: Option<String>,
    pub recommendation: Option<String>,
}

/// Average the in-range category scores and band the result. With no valid
/// scores the average is zero and the band reads Concern, matching what the
/// hiring sheet has always recorded.
pub fn score_submission(
    request: ScenarioScoreRequest,
) -> Result<ScenarioScoreResult, ScenarioScoreError> {
    let submission_id = request
        .submission_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(ScenarioScoreError::MissingIdentity)?;
    let interviewer_name = request
        .interviewer_name
        .filter(|name| !name.trim().is_empty())
        .ok_or(ScenarioScoreError::MissingIdentity)?;
    let category_scores = request
        .category_scores
        .ok_or(ScenarioScoreError::MissingScores)?;

    let valid: Vec<u8> = category_scores
        .iter()
        .filter_map(|entry| entry.score)
        .filter(|score| is_valid_rating(*score))
        .collect();

    let average = if valid.is_empty() {
        0.0
    } else {
        valid.iter().map(|score| f64::from(*score)).sum::<f64>() / valid.len() as f64
    };

    let timestamp = Utc::now();
    Ok(ScenarioScoreResult {
        success: true,
        scoring_id: format!("SCORE-{}", timestamp.timestamp_millis()),
        submission_id,
        interviewer_name,
        timestamp,
        category_scores,
        average_score: round2(average),
        overall_rating: ScaleBand::for_average(average).label(),
        overall_notes: request.overall_notes,
        recommendation: request.recommendation,
    })
}

pub(crate) fn render_notification(result: &ScenarioSubmissionResult) -> EmailMessage {
    use std::fmt::Write as _;

    let mut body = String::new();
    writeln!(body, "<h1>New Scenario Submission</h1>").expect("write heading");
    writeln!(
        body,
        "<p><strong>Candidate:</strong> {}</p>",
        escape_html(&result.candidate.name)
    )
    .expect("write candidate");
    writeln!(
        body,
        "<p><strong>Email:</strong> {}</p>",
        escape_html(result.candidate.email.as_deref().unwrap_or("Not provided"))
    )
    .expect("write email");
    writeln!(
        body,
        "<p><strong>Submission ID:</strong> {} ({}% complete)</p>",
        escape_html(&result.submission_id),
        result.completion_percentage
    )
    .expect("write id");

    for organized in result.scenario_responses.values() {
        if organized.responses.is_empty() {
            continue;
        }
        writeln!(
            body,
            "<h2>{}</h2><p><em>{}</em></p>",
            organized.scenario_title, organized.category
        )
        .expect("write scenario heading");
        for answer in &organized.responses {
            writeln!(
                body,
                "<p><strong>{}</strong></p><p>{}</p>",
                escape_html(answer.question_text),
                escape_html(&answer.response)
            )
            .expect("write answer");
        }
    }

    EmailMessage {
        subject: format!("Scenario Submission: {}", result.candidate.name),
        html_body: body,
    }
}
