use serde_json::json;

use super::common::*;
use crate::workflows::interview::domain::{EvaluationResponse, SectionId};
use crate::workflows::interview::scoring::aggregate;
use crate::workflows::rubric::ScaleBand;

#[test]
fn averages_only_the_rated_answers() {
    // Three of the opening section's scale questions; one skipped.
    let responses = vec![
        rated("OPN1", 3),
        rated("OPN2", 2),
        skipped("OPN4"),
        rated("EXP1", 1),
    ];

    let breakdown = aggregate(&responses);
    let opening = breakdown
        .sections
        .iter()
        .find(|score| score.section == SectionId::Opening)
        .expect("opening section scored");

    assert_eq!(opening.average, 2.5);
    assert_eq!(opening.band, ScaleBand::Strong);
    assert_eq!(opening.questions_answered, 2);
    assert_eq!(opening.total_scale_questions, 3);
}

#[test]
fn mixed_ratings_round_to_two_decimals() {
    let responses = vec![rated("EXP1", 3), rated("EXP2", 2), rated("EXP4", 1)];

    let breakdown = aggregate(&responses);
    let experience = breakdown
        .sections
        .iter()
        .find(|score| score.section == SectionId::Experience)
        .expect("experience section scored");

    assert_eq!(experience.average, 2.0);
    assert_eq!(experience.band, ScaleBand::Adequate);
    assert_eq!(experience.questions_answered, 3);
    assert_eq!(experience.total_scale_questions, 5);
}

#[test]
fn sections_without_ratings_are_omitted_not_zeroed() {
    let responses = vec![rated("OPN1", 2)];

    let breakdown = aggregate(&responses);
    assert_eq!(breakdown.sections.len(), 1);
    assert!(breakdown
        .sections
        .iter()
        .all(|score| score.section == SectionId::Opening));
}

#[test]
fn no_ratings_anywhere_leaves_overall_absent() {
    let responses = vec![
        skipped("OPN1"),
        EvaluationResponse {
            question_id: "CLS6".to_string(),
            value: Some(json!("Great rapport with the panel")),
        },
    ];

    let breakdown = aggregate(&responses);
    assert!(breakdown.sections.is_empty());
    assert!(breakdown.overall.is_none());
}

#[test]
fn overall_average_spans_all_rated_items() {
    // Opening averages 3.0 and experience 2.0, but the overall is item-level:
    // (3 + 2 + 2) / 3.
    let responses = vec![rated("OPN1", 3), rated("EXP1", 2), rated("EXP2", 2)];

    let breakdown = aggregate(&responses);
    let overall = breakdown.overall.expect("overall present");
    assert_eq!(overall.average, 2.33);
    assert_eq!(overall.band, ScaleBand::Adequate);
}

#[test]
fn numeric_strings_from_older_clients_still_count() {
    let responses = vec![EvaluationResponse {
        question_id: "VAL1".to_string(),
        value: Some(json!("3")),
    }];

    let breakdown = aggregate(&responses);
    let values = breakdown
        .sections
        .iter()
        .find(|score| score.section == SectionId::Values)
        .expect("values section scored");
    assert_eq!(values.average, 3.0);
    assert_eq!(values.questions_answered, 1);
}

#[test]
fn decision_section_has_no_scale_questions_to_score() {
    let responses = vec![rated("DEC1", 3)];
    let breakdown = aggregate(&responses);
    assert!(breakdown.sections.is_empty());
}

#[test]
fn service_report_carries_sections_flags_and_recommendation() {
    let service = build_service();
    let responses = vec![rated("OPN1", 3), rated("OPN2", 3), rated("OPN4", 2)];
    let report = service
        .submit(request(responses, decision(8.0, 4, 1)))
        .expect("report builds");

    assert!(report.evaluation_id.starts_with("EVAL-"));
    assert_eq!(report.interview_score, 8.0);
    assert!(report.section_scores.contains_key("OPENING"));
    assert_eq!(report.flags.green.len(), 4);
    assert_eq!(report.flags.red.len(), 1);
    assert_eq!(
        report.calculated_recommendation.rationale,
        "Excellent interview with strong alignment and minimal concerns"
    );
    assert_eq!(report.overall_section_average, Some(2.67));
}

#[test]
fn unknown_flag_ids_are_dropped_from_the_report_but_still_counted() {
    let service = build_service();
    let mut decision = decision(8.0, 4, 0);
    decision.green_flags.push("GF99".to_string());
    // Five ids submitted, four resolve; the rules still saw five.
    let report = service
        .submit(request(vec![rated("OPN1", 3)], decision))
        .expect("report builds");

    assert_eq!(report.flags.green.len(), 4);
    assert_eq!(
        report.calculated_recommendation.rationale,
        "Excellent interview with strong alignment and minimal concerns"
    );
}
