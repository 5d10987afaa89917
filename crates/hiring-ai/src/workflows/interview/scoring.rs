//! Section aggregation over scorecard answers: group scale ratings by
//! section, average, and band. Pure over its inputs and the static section
//! tables.

use serde::Serialize;

use super::domain::{EvaluationResponse, SectionId};
use super::sections::scale_question_ids;
use crate::workflows::rubric::{round2, ScaleBand};

/// Aggregate for one section that received at least one rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    #[serde(skip)]
    pub section: SectionId,
    pub section_name: &'static str,
    pub average: f64,
    #[serde(rename = "rating")]
    pub band: ScaleBand,
    pub questions_answered: usize,
    pub total_scale_questions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub average: f64,
    #[serde(rename = "rating")]
    pub band: ScaleBand,
}

/// Per-section scores plus the overall average across every rated item. A
/// section with no rated answers is absent from `sections`; with no rated
/// answers anywhere `overall` is `None` rather than zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBreakdown {
    pub sections: Vec<SectionScore>,
    pub overall: Option<OverallScore>,
}

pub fn aggregate(responses: &[EvaluationResponse]) -> SectionBreakdown {
    let mut sections = Vec::new();
    let mut all_ratings: Vec<u8> = Vec::new();

    for section in SectionId::ALL {
        let question_ids: Vec<&'static str> = scale_question_ids(section).collect();
        if question_ids.is_empty() {
            continue;
        }

        let ratings: Vec<u8> = responses
            .iter()
            .filter(|response| question_ids.contains(&response.question_id.as_str()))
            .filter_map(EvaluationResponse::rating)
            .collect();

        if ratings.is_empty() {
            continue;
        }

        let sum: u32 = ratings.iter().map(|rating| u32::from(*rating)).sum();
        let average = f64::from(sum) / ratings.len() as f64;

        // Band from the raw mean; the stored average is rounded for display.
        sections.push(SectionScore {
            section,
            section_name: super::sections::section(section).name,
            average: round2(average),
            band: ScaleBand::for_average(average),
            questions_answered: ratings.len(),
            total_scale_questions: question_ids.len(),
        });
        all_ratings.extend(ratings);
    }

    let overall = if all_ratings.is_empty() {
        None
    } else {
        let sum: u32 = all_ratings.iter().map(|rating| u32::from(*rating)).sum();
        let average = f64::from(sum) / all_ratings.len() as f64;
        Some(OverallScore {
            average: round2(average),
            band: ScaleBand::for_average(average),
        })
    };

    SectionBreakdown { sections, overall }
}
