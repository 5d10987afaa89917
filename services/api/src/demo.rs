use std::sync::Arc;

use clap::Args;
use hiring_ai::config::{LedgerConfig, NotificationConfig};
use hiring_ai::error::AppError;
use hiring_ai::notify::{CsvLedger, LoggingMailer};
use hiring_ai::workflows::assessment::{
    AssessmentService, AssessmentSubmission, Color, SubmittedAnswer,
};
use hiring_ai::workflows::interview::{recommend, DecisionInput};

#[derive(Args, Debug)]
pub(crate) struct DecisionArgs {
    /// Overall interview score (0-10)
    #[arg(long)]
    score: f64,
    /// Number of green flags observed
    #[arg(long, default_value_t = 0)]
    green_flags: usize,
    /// Number of red flags observed
    #[arg(long, default_value_t = 0)]
    red_flags: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Candidate name used in the demo output
    #[arg(long, default_value = "Demo Candidate")]
    candidate: String,
}

pub(crate) fn run_decision(args: DecisionArgs) -> Result<(), AppError> {
    let outcome = recommend(&DecisionInput {
        overall_score: args.score,
        green_flags: args.green_flags,
        red_flags: args.red_flags,
    });

    println!("Hiring decision calculator");
    println!(
        "Input: score {}, {} green flag(s), {} red flag(s)",
        args.score, args.green_flags, args.red_flags
    );
    println!(
        "Recommendation: {} (confidence {})",
        outcome.recommendation.label(),
        outcome.confidence.label()
    );
    println!("Rationale: {}", outcome.rationale);
    if !outcome.next_steps.is_empty() {
        println!("Next steps:");
        for step in outcome.next_steps {
            println!("- {step}");
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mailer = Arc::new(LoggingMailer::new(&NotificationConfig { recipient: None }));
    let ledger = Arc::new(CsvLedger::new(&LedgerConfig { directory: None }));
    let service = AssessmentService::new(mailer, ledger);

    let submission = AssessmentSubmission {
        candidate_name: Some(args.candidate.clone()),
        candidate_email: None,
        responses: Some(demo_answers()),
    };

    let result = service
        .submit(submission)
        .expect("demo answers satisfy the completeness gate");

    println!("Personality assessment demo for {}", args.candidate);
    println!(
        "Responses scored: {}/{}",
        result.responses_received, result.total_questions
    );

    let candidate = &result.candidate_results;
    println!(
        "Primary: {} ({}%) - {}",
        candidate.primary_color.name,
        candidate.primary_color.percentage,
        candidate.primary_color.tagline
    );
    println!(
        "Secondary: {} ({}%) - {}",
        candidate.secondary_color.name,
        candidate.secondary_color.percentage,
        candidate.secondary_color.tagline
    );

    println!("\nColor spectrum");
    for entry in &candidate.color_spectrum {
        println!("- {}: {}%", entry.name, entry.percentage);
    }

    let interviewer = &result.interviewer_report;
    println!("\nSupervision recommendations");
    for recommendation in interviewer
        .supervision_recommendations
        .primary_recommendations
    {
        println!("- {recommendation}");
    }
    println!(
        "\n{}",
        interviewer.supervision_recommendations.blended_approach
    );

    println!("\nSample hiring decisions");
    for (score, green, red) in [(8.5, 5, 0), (6.5, 2, 3), (4.0, 1, 4)] {
        let outcome = recommend(&DecisionInput {
            overall_score: score,
            green_flags: green,
            red_flags: red,
        });
        println!(
            "- score {score}, {green} green / {red} red -> {} ({})",
            outcome.recommendation.label(),
            outcome.confidence.label()
        );
    }

    Ok(())
}

/// A plausible mixed submission: blue-leaning with a gold secondary.
fn demo_answers() -> Vec<SubmittedAnswer> {
    let pattern = [
        Color::Blue,
        Color::Gold,
        Color::Blue,
        Color::Green,
        Color::Blue,
        Color::Gold,
        Color::Orange,
        Color::Blue,
        Color::Gold,
        Color::Blue,
        Color::Blue,
        Color::Gold,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Blue,
        Color::Gold,
        Color::Blue,
        Color::Blue,
        Color::Gold,
    ];

    pattern
        .iter()
        .enumerate()
        .map(|(index, color)| SubmittedAnswer {
            question_id: format!("Q{}", index + 1),
            color: color.id().to_string(),
        })
        .collect()
}
