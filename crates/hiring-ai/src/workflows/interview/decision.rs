//! Rule-based hiring recommendation. An ordered rule list over the overall
//! score and flag counts; the first matching rule wins and every input
//! produces exactly one outcome.

use serde::{Deserialize, Serialize};

/// Inputs to the recommendation rules. The score is caller-supplied and not
/// range-validated here; flag counts come from the raw submitted id lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionInput {
    pub overall_score: f64,
    pub red_flags: usize,
    pub green_flags: usize,
}

/// Tiers the engine can emit. Interviewers picking their own recommendation
/// use the wider [`InterviewerRecommendation`] vocabulary, which also allows
/// a strong no.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendationTier {
    #[serde(rename = "STRONG YES")]
    StrongYes,
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "MAYBE")]
    Maybe,
    #[serde(rename = "NO")]
    No,
}

impl RecommendationTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongYes => "STRONG YES",
            Self::Yes => "YES",
            Self::Maybe => "MAYBE",
            Self::No => "NO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewerRecommendation {
    StrongYes,
    Yes,
    Maybe,
    No,
    StrongNo,
}

impl InterviewerRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongYes => "strong_yes",
            Self::Yes => "yes",
            Self::Maybe => "maybe",
            Self::No => "no",
            Self::StrongNo => "strong_no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutcome {
    pub recommendation: RecommendationTier,
    pub confidence: Confidence,
    pub rationale: &'static str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub next_steps: &'static [&'static str],
}

/// Apply the recommendation rules in order.
///
/// The rules do not partition the input space cleanly: a score of 6.5 with
/// three red flags matches none of the first four rules and lands on the
/// low-confidence default. That fall-through is intended behavior, not a gap
/// to close.
pub fn recommend(input: &DecisionInput) -> DecisionOutcome {
    if input.overall_score >= 8.0 && input.green_flags >= 4 && input.red_flags <= 1 {
        return DecisionOutcome {
            recommendation: RecommendationTier::StrongYes,
            confidence: Confidence::High,
            rationale: "Excellent interview with strong alignment and minimal concerns",
            next_steps: &[],
        };
    }

    if input.overall_score >= 7.0 && input.green_flags >= 3 && input.red_flags <= 2 {
        return DecisionOutcome {
            recommendation: RecommendationTier::Yes,
            confidence: Confidence::High,
            rationale: "Strong interview showing good fit and potential",
            next_steps: &[],
        };
    }

    if input.overall_score >= 6.0 && input.red_flags <= 2 {
        return DecisionOutcome {
            recommendation: RecommendationTier::Maybe,
            confidence: Confidence::Medium,
            rationale: "Moderate interview - reference check and team discussion recommended",
            next_steps: &[
                "Complete reference checks",
                "Discuss with team",
                "Consider second interview",
            ],
        };
    }

    if input.overall_score < 5.0 || input.red_flags >= 4 {
        return DecisionOutcome {
            recommendation: RecommendationTier::No,
            confidence: Confidence::High,
            rationale: "Significant concerns identified during interview",
            next_steps: &[],
        };
    }

    DecisionOutcome {
        recommendation: RecommendationTier::Maybe,
        confidence: Confidence::Low,
        rationale: "Mixed results - additional evaluation needed",
        next_steps: &["Gather additional input", "Review with supervisor"],
    }
}
