use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use super::domain::EvaluationResponse;
use super::report::{
    compose_report, CandidateInfo, ComposeInputs, DecisionSubmission, EvaluationReport,
    InterviewerInfo,
};
use crate::notify::email::escape_html;
use crate::notify::{
    notify_async, record_async, EmailMessage, LedgerRecord, NotificationGateway, SheetLedger,
    SheetName,
};

/// Scorecard submission body. Every block is optional at the serde level so
/// validation can answer with the precise missing piece.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    #[serde(default)]
    pub candidate_info: Option<CandidateInfo>,
    #[serde(default)]
    pub interviewer_info: Option<InterviewerInfo>,
    #[serde(default)]
    pub responses: Option<Vec<EvaluationResponse>>,
    #[serde(default)]
    pub decision: Option<DecisionSubmission>,
}

#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("Candidate information is required")]
    MissingCandidate,
    #[error("Interviewer information is required")]
    MissingInterviewer,
    #[error("Evaluation responses are required")]
    MissingResponses,
    #[error("Decision with overall score is required")]
    MissingDecisionScore,
}

/// Service composing the aggregator, decision engine, and outbound gateways.
pub struct InterviewService<N, L> {
    mailer: Arc<N>,
    ledger: Arc<L>,
}

impl<N, L> InterviewService<N, L>
where
    N: NotificationGateway + 'static,
    L: SheetLedger + 'static,
{
    pub fn new(mailer: Arc<N>, ledger: Arc<L>) -> Self {
        Self { mailer, ledger }
    }

    pub fn submit(&self, request: EvaluationRequest) -> Result<EvaluationReport, InterviewError> {
        let candidate_info = request
            .candidate_info
            .filter(|info| !info.name.trim().is_empty())
            .ok_or(InterviewError::MissingCandidate)?;
        let interviewer_info = request
            .interviewer_info
            .filter(|info| !info.name.trim().is_empty())
            .ok_or(InterviewError::MissingInterviewer)?;
        let responses = request
            .responses
            .ok_or(InterviewError::MissingResponses)?;
        let decision = request
            .decision
            .ok_or(InterviewError::MissingDecisionScore)?;
        let overall_score = decision
            .overall_score
            .ok_or(InterviewError::MissingDecisionScore)?;

        let timestamp = Utc::now();
        Ok(compose_report(ComposeInputs {
            evaluation_id: format!("EVAL-{}", timestamp.timestamp_millis()),
            timestamp,
            candidate_info,
            interviewer_info,
            responses,
            decision,
            overall_score,
        }))
    }

    /// Announce the evaluation and append it to the interviews sheet, both
    /// fire-and-forget.
    pub fn dispatch_outbound(&self, report: &EvaluationReport) {
        notify_async(self.mailer.clone(), render_notification(report));
        record_async(self.ledger.clone(), ledger_record(report));
    }
}

pub(crate) fn render_notification(report: &EvaluationReport) -> EmailMessage {
    let recommendation = &report.calculated_recommendation;

    let mut body = String::new();
    writeln!(body, "<h1>Interview Evaluation Complete</h1>").expect("write heading");
    writeln!(
        body,
        "<p><strong>Candidate:</strong> {}</p>",
        escape_html(&report.candidate_info.name)
    )
    .expect("write candidate");
    if let Some(position) = &report.candidate_info.position {
        writeln!(
            body,
            "<p><strong>Position:</strong> {}</p>",
            escape_html(position)
        )
        .expect("write position");
    }
    writeln!(
        body,
        "<p><strong>Interviewer:</strong> {}</p>",
        escape_html(&report.interviewer_info.name)
    )
    .expect("write interviewer");
    writeln!(
        body,
        "<h2>Score: {}/10</h2>",
        report.interview_score
    )
    .expect("write score");

    writeln!(
        body,
        "<h2>Calculated Recommendation</h2><p><strong>{}</strong> (confidence {})</p><p>{}</p>",
        recommendation.recommendation.label(),
        recommendation.confidence.label(),
        recommendation.rationale
    )
    .expect("write recommendation");

    writeln!(body, "<h2>Green Flags</h2><ul>").expect("write green heading");
    if report.flags.green.is_empty() {
        body.push_str("<li>None noted</li>");
    }
    for flag in &report.flags.green {
        writeln!(body, "<li>{}</li>", flag.label).expect("write green flag");
    }
    body.push_str("</ul><h2>Red Flags</h2><ul>");
    if report.flags.red.is_empty() {
        body.push_str("<li>None noted</li>");
    }
    for flag in &report.flags.red {
        writeln!(body, "<li>{}</li>", flag.label).expect("write red flag");
    }
    body.push_str("</ul>");

    writeln!(body, "<h2>Section Scores</h2><ul>").expect("write sections heading");
    for (key, score) in &report.section_scores {
        writeln!(
            body,
            "<li>{}: {:.2} ({}), {}/{} answered</li>",
            key,
            score.average,
            score.band.label(),
            score.questions_answered,
            score.total_scale_questions
        )
        .expect("write section score");
    }
    body.push_str("</ul>");

    if let Some(rationale) = &report.rationale {
        writeln!(
            body,
            "<h2>Interviewer Rationale</h2><p>{}</p>",
            escape_html(rationale)
        )
        .expect("write rationale");
    }

    EmailMessage {
        subject: format!(
            "Interview: {} - {} ({}/10)",
            report.candidate_info.name,
            recommendation.recommendation.label(),
            report.interview_score
        ),
        html_body: body,
    }
}

pub(crate) fn ledger_record(report: &EvaluationReport) -> LedgerRecord {
    LedgerRecord {
        sheet: SheetName::Interviews,
        headers: &[
            "Timestamp",
            "Candidate",
            "Interviewer",
            "Interview Score",
            "Overall Section Average",
            "Green Flags",
            "Red Flags",
            "Calculated Recommendation",
            "Interviewer Recommendation",
        ],
        values: vec![
            report.timestamp.to_rfc3339(),
            report.candidate_info.name.clone(),
            report.interviewer_info.name.clone(),
            report.interview_score.to_string(),
            report
                .overall_section_average
                .map(|average| average.to_string())
                .unwrap_or_default(),
            report.flags.green.len().to_string(),
            report.flags.red.len().to_string(),
            report
                .calculated_recommendation
                .recommendation
                .label()
                .to_string(),
            report
                .interviewer_recommendation
                .map(|pick| pick.label().to_string())
                .unwrap_or_default(),
        ],
    }
}
