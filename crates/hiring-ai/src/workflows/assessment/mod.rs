//! Forced-choice personality assessment: question catalog, trait profiles,
//! the tally/rank classifier, and the candidate/interviewer report composer.

pub(crate) mod classifier;
pub mod domain;
pub mod profiles;
pub mod questions;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use classifier::{classify, AssessmentError};
pub use domain::{
    CandidateIdentity, ClassifiedSubmission, Color, ColorRanking, ColorTally, SubmittedAnswer,
};
pub use report::{candidate_report, interviewer_report, CandidateReport, InterviewerReport};
pub use router::assessment_router;
pub use service::{AssessmentResult, AssessmentService, AssessmentSubmission};
