//! Scenario-based written evaluation: candidate-facing catalog, completion
//! gating, and interviewer category scoring.

pub mod catalog;
pub mod router;
pub mod scoring;

pub use catalog::{scenario, scenarios, Scenario, ASSESSMENT_CATEGORIES, SCORING_RUBRIC};
pub use router::scenario_router;
pub use scoring::{
    score_submission, ScenarioError, ScenarioScoreError, ScenarioScoreRequest,
    ScenarioScoreResult, ScenarioService, ScenarioSubmission, ScenarioSubmissionResult,
};
