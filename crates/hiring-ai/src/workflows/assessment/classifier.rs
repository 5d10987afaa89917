//! Pure scoring core for the forced-choice assessment: validate, tally,
//! rank. No side effects and no clock access; identical input yields
//! identical output.

use super::domain::{ClassifiedSubmission, Color, ColorRanking, ColorTally, SubmittedAnswer};

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    /// The submission carried no responses array at all.
    #[error("Please provide assessment responses")]
    MissingResponses,
    /// Fewer than three quarters of the expected questions carried a usable
    /// answer. Exactly 75% is accepted.
    #[error("incomplete assessment: {valid} valid responses, need at least {required} of {expected}")]
    IncompleteSubmission {
        valid: usize,
        required: usize,
        expected: usize,
    },
    /// A ranking reached the report composer without covering every color
    /// exactly once. Unreachable through [`classify`]; kept as a guard
    /// against a future refactor handing the composer a hand-built ranking.
    #[error("color ranking does not cover every color exactly once")]
    IncoherentRanking,
}

impl AssessmentError {
    /// Validation failures are the caller's fault; anything else indicates a
    /// defect and is logged as such by the HTTP layer.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AssessmentError::MissingResponses | AssessmentError::IncompleteSubmission { .. }
        )
    }
}

/// Minimum valid answers for a submission against `expected` questions:
/// ceil(0.75 * expected), computed in integers so the boundary is exact.
fn required_valid(expected: usize) -> usize {
    (expected * 3).div_ceil(4)
}

/// Tally valid answers per color and rank the colors by count.
///
/// Answers with a blank question id or an unrecognized color label are
/// discarded before the completeness gate is applied, so `valid_responses`
/// always reflects the post-filter count. Ties in the ranking resolve to the
/// first-declared color.
pub fn classify(
    answers: &[SubmittedAnswer],
    expected: usize,
) -> Result<ClassifiedSubmission, AssessmentError> {
    let valid: Vec<Color> = answers
        .iter()
        .filter(|answer| !answer.question_id.trim().is_empty())
        .filter_map(|answer| Color::parse(&answer.color))
        .collect();

    let required = required_valid(expected).max(1);
    if valid.len() < required {
        return Err(AssessmentError::IncompleteSubmission {
            valid: valid.len(),
            required,
            expected,
        });
    }

    let total = valid.len();
    let mut entries = Color::ALL.map(|color| {
        let count = valid.iter().filter(|chosen| **chosen == color).count();
        ColorTally {
            color,
            count,
            percentage: percentage_of(count, total),
        }
    });

    // Stable sort keeps declaration order within equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(ClassifiedSubmission {
        ranking: ColorRanking::new(entries),
        valid_responses: total,
    })
}

/// `round(100 * count / total)`, rounding halves away from zero. Shares are
/// rounded independently and may not sum to 100; downstream consumers accept
/// that rather than redistributing the remainder.
fn percentage_of(count: usize, total: usize) -> u8 {
    ((count as f64 / total as f64) * 100.0).round() as u8
}
