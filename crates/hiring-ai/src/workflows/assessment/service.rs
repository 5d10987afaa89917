use std::fmt::Write as _;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classifier::{classify, AssessmentError};
use super::domain::{CandidateIdentity, Color, SubmittedAnswer};
use super::questions;
use super::report::{candidate_report, interviewer_report, CandidateReport, InterviewerReport};
use crate::notify::email::escape_html;
use crate::notify::{
    notify_async, record_async, EmailMessage, LedgerRecord, NotificationGateway, SheetLedger,
    SheetName,
};

/// Parsed submission body for the personality assessment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default)]
    pub responses: Option<Vec<SubmittedAnswer>>,
}

/// Full scoring result returned to the client and handed to the outbound
/// gateways. Candidate and interviewer views are both included; the UI
/// decides which one to show.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub success: bool,
    pub assessment_id: String,
    pub timestamp: DateTime<Utc>,
    pub candidate: CandidateIdentity,
    pub responses_received: usize,
    pub total_questions: usize,
    pub candidate_results: CandidateReport,
    pub interviewer_report: InterviewerReport,
}

/// Service composing the classifier, report composer, and outbound gateways.
pub struct AssessmentService<N, L> {
    mailer: Arc<N>,
    ledger: Arc<L>,
}

impl<N, L> AssessmentService<N, L>
where
    N: NotificationGateway + 'static,
    L: SheetLedger + 'static,
{
    pub fn new(mailer: Arc<N>, ledger: Arc<L>) -> Self {
        Self { mailer, ledger }
    }

    /// Score a submission. Pure apart from the id/timestamp stamped onto the
    /// result; outbound delivery happens separately in
    /// [`Self::dispatch_outbound`].
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentResult, AssessmentError> {
        let responses = submission
            .responses
            .ok_or(AssessmentError::MissingResponses)?;
        let expected = questions::expected_question_count();
        let classified = classify(&responses, expected)?;

        let candidate_results = candidate_report(&classified.ranking)?;
        let interviewer = interviewer_report(&classified.ranking)?;

        let timestamp = Utc::now();
        let candidate = CandidateIdentity {
            name: submission
                .candidate_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| CandidateIdentity::anonymous().name),
            email: submission
                .candidate_email
                .filter(|email| !email.trim().is_empty()),
        };

        Ok(AssessmentResult {
            success: true,
            assessment_id: format!("TC-{}", timestamp.timestamp_millis()),
            timestamp,
            candidate,
            responses_received: classified.valid_responses,
            total_questions: expected,
            candidate_results,
            interviewer_report: interviewer,
        })
    }

    /// Announce the result by email and append it to the assessments sheet.
    /// Both are fire-and-forget: the HTTP response never waits on them and
    /// their failures are only logged.
    pub fn dispatch_outbound(&self, result: &AssessmentResult) {
        notify_async(self.mailer.clone(), render_notification(result));
        record_async(self.ledger.clone(), ledger_record(result));
    }
}

pub(crate) fn render_notification(result: &AssessmentResult) -> EmailMessage {
    let primary = &result.candidate_results.primary_color;
    let secondary = &result.candidate_results.secondary_color;

    let mut body = String::new();
    writeln!(body, "<h1>New True Colors Assessment</h1>").expect("write heading");
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
        "<p><strong>Assessment ID:</strong> {}</p>",
        escape_html(&result.assessment_id)
    )
    .expect("write id");

    writeln!(
        body,
        "<h2>Primary: {} — {}</h2><p>{}</p>",
        primary.name, primary.tagline, primary.description
    )
    .expect("write primary");
    writeln!(
        body,
        "<h2>Secondary: {} — {}</h2>",
        secondary.name, secondary.tagline
    )
    .expect("write secondary");

    writeln!(body, "<h2>Color Distribution</h2><ul>").expect("write spectrum heading");
    for entry in &result.candidate_results.color_spectrum {
        writeln!(body, "<li>{}: {}%</li>", entry.name, entry.percentage).expect("write spectrum");
    }
    body.push_str("</ul>");

    let fit = &result.interviewer_report.family_services_profile;
    writeln!(body, "<h2>Family Services Fit</h2><h3>Strengths</h3><ul>")
        .expect("write fit heading");
    for strength in fit.strengths {
        writeln!(body, "<li>{strength}</li>").expect("write strength");
    }
    body.push_str("</ul><h3>Growth Areas</h3><ul>");
    for growth in fit.growth_areas {
        writeln!(body, "<li>{growth}</li>").expect("write growth");
    }
    body.push_str("</ul>");

    let supervision = &result.interviewer_report.supervision_recommendations;
    writeln!(body, "<h2>Supervision Recommendations</h2><ul>").expect("write supervision heading");
    for recommendation in supervision.primary_recommendations {
        writeln!(body, "<li>{recommendation}</li>").expect("write recommendation");
    }
    writeln!(
        body,
        "</ul><p><em>{}</em></p>",
        escape_html(&supervision.blended_approach)
    )
    .expect("write blend");

    let dynamics = &result.interviewer_report.team_dynamics;
    writeln!(
        body,
        "<h2>Team Dynamics</h2><p><strong>Works well with:</strong> {}</p><p><strong>Potential friction:</strong> {}</p><p><strong>Contribution:</strong> {}</p>",
        dynamics.works_well_with, dynamics.potential_friction, dynamics.contribution
    )
    .expect("write dynamics");

    EmailMessage {
        subject: format!(
            "True Colors Assessment: {} - Primary {}",
            result.candidate.name, primary.name
        ),
        html_body: body,
    }
}

pub(crate) fn ledger_record(result: &AssessmentResult) -> LedgerRecord {
    let percentage_for = |color: Color| {
        result
            .interviewer_report
            .color_profile
            .iter()
            .find(|entry| entry.color == color.display_name())
            .map(|entry| entry.percentage)
            .unwrap_or(0)
    };

    LedgerRecord {
        sheet: SheetName::Assessments,
        headers: &[
            "Timestamp",
            "Candidate",
            "Email",
            "Primary",
            "Secondary",
            "Gold %",
            "Green %",
            "Orange %",
            "Blue %",
        ],
        values: vec![
            result.timestamp.to_rfc3339(),
            result.candidate.name.clone(),
            result.candidate.email.clone().unwrap_or_default(),
            result.candidate_results.primary_color.name.to_string(),
            result.candidate_results.secondary_color.name.to_string(),
            percentage_for(Color::Gold).to_string(),
            percentage_for(Color::Green).to_string(),
            percentage_for(Color::Orange).to_string(),
            percentage_for(Color::Blue).to_string(),
        ],
    }
}
