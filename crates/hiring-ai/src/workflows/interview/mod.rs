//! Interviewer scorecard: section catalog, flag catalogs, the section
//! aggregator, the rule-based decision engine, and evaluation report
//! assembly.

pub mod decision;
pub mod domain;
pub mod flags;
pub mod report;
pub mod router;
pub(crate) mod sections;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use decision::{
    recommend, Confidence, DecisionInput, DecisionOutcome, InterviewerRecommendation,
    RecommendationTier,
};
pub use domain::{EvaluationResponse, SectionId, EVALUATION_SCALE};
pub use flags::{FlagDefinition, GREEN_FLAGS, RED_FLAGS};
pub use report::{CandidateInfo, DecisionSubmission, EvaluationReport, InterviewerInfo};
pub use router::interview_router;
pub use scoring::{aggregate, OverallScore, SectionBreakdown, SectionScore};
pub use service::{EvaluationRequest, InterviewError, InterviewService};
