//! Static scorecard structure: the five evaluation sections with their
//! questions, plus the interviewer question templates served for reference.

use super::domain::{
    EvaluationSection, QuestionKind, Rubric, SectionId, SectionQuestion, SelectOption,
};

pub fn sections() -> &'static [EvaluationSection; 5] {
    &SECTIONS
}

pub fn section(id: SectionId) -> &'static EvaluationSection {
    &SECTIONS[SectionId::ALL
        .iter()
        .position(|candidate| *candidate == id)
        .expect("section declared")]
}

/// Scale questions belonging to one section; the aggregator only looks at
/// these.
pub fn scale_question_ids(id: SectionId) -> impl Iterator<Item = &'static str> {
    section(id)
        .questions
        .iter()
        .filter(|question| question.kind == QuestionKind::Scale)
        .map(|question| question.id)
}

const fn scale(id: &'static str, text: &'static str) -> SectionQuestion {
    SectionQuestion {
        id,
        text,
        kind: QuestionKind::Scale,
        required: true,
        rubric: None,
        options: &[],
    }
}

const fn scale_with_rubric(
    id: &'static str,
    text: &'static str,
    strong: &'static str,
    adequate: &'static str,
    concern: &'static str,
) -> SectionQuestion {
    SectionQuestion {
        id,
        text,
        kind: QuestionKind::Scale,
        required: true,
        rubric: Some(Rubric {
            strong,
            adequate,
            concern,
        }),
        options: &[],
    }
}

const fn textarea(id: &'static str, text: &'static str, required: bool) -> SectionQuestion {
    SectionQuestion {
        id,
        text,
        kind: QuestionKind::Textarea,
        required,
        rubric: None,
        options: &[],
    }
}

static SECTIONS: [EvaluationSection; 5] = [
    EvaluationSection {
        id: SectionId::Opening,
        name: "Opening & First Impressions",
        description: "Initial assessment of candidate presentation and motivation",
        questions: &[
            scale(
                "OPN1",
                "How did the candidate present themselves? (professionalism, communication, demeanor)",
            ),
            scale(
                "OPN2",
                "How well did they articulate their interest in this specific role?",
            ),
            textarea("OPN3", "What was your overall first impression?", true),
            scale(
                "OPN4",
                "Did they demonstrate knowledge of the agency and our mission?",
            ),
        ],
    },
    EvaluationSection {
        id: SectionId::Experience,
        name: "Experience & Background",
        description: "Assessment of relevant experience and skills",
        questions: &[
            scale_with_rubric(
                "EXP1",
                "Quality of examples from previous experience",
                "Provided specific, detailed, relevant examples",
                "Examples were adequate but lacked depth",
                "Vague or no relevant examples provided",
            ),
            scale_with_rubric(
                "EXP2",
                "Experience with families in crisis or trauma",
                "Significant relevant experience, demonstrated learning",
                "Some experience, shows potential",
                "Limited or no relevant experience",
            ),
            scale_with_rubric(
                "EXP3",
                "Experience with addiction/substance use issues",
                "Strong understanding, direct experience, non-judgmental approach",
                "Basic understanding, some exposure",
                "Limited understanding or concerning attitudes",
            ),
            scale_with_rubric(
                "EXP4",
                "Crisis response and de-escalation skills",
                "Demonstrated clear crisis intervention skills",
                "Basic skills, would need development",
                "Concerning gaps in crisis response",
            ),
            scale("EXP5", "Documentation and case management experience"),
            textarea("EXP6", "Notes on experience discussion:", false),
        ],
    },
    EvaluationSection {
        id: SectionId::Values,
        name: "Values & Alignment",
        description: "Alignment with agency core values and trauma-informed practice",
        questions: &[
            scale_with_rubric(
                "VAL1",
                "Trauma-Informed Care understanding",
                "Strong understanding, can articulate and apply principles",
                "Basic understanding, open to learning",
                "Limited understanding or concerning attitudes",
            ),
            scale_with_rubric(
                "VAL2",
                "Family Preservation philosophy alignment",
                "Strong belief in family-centered approach",
                "Generally aligned with some development needed",
                "Misaligned with family preservation values",
            ),
            scale_with_rubric(
                "VAL3",
                "Non-judgmental approach with families",
                "Demonstrated non-judgmental language and perspective",
                "Generally non-judgmental with occasional slips",
                "Concerning judgmental or stigmatizing attitudes",
            ),
            scale_with_rubric(
                "VAL4",
                "Professional boundaries understanding",
                "Clear understanding of appropriate boundaries",
                "Basic understanding, some areas need development",
                "Boundary concerns identified",
            ),
            scale_with_rubric(
                "VAL5",
                "Self-care and burnout awareness",
                "Has concrete self-care practices and insight",
                "Awareness but practices are vague",
                "Limited awareness or concerning lack of self-care",
            ),
            scale_with_rubric(
                "VAL6",
                "Accountability and growth orientation",
                "Demonstrates accountability and eagerness to grow",
                "Generally accountable, open to feedback",
                "Defensive or avoids responsibility",
            ),
            textarea("VAL7", "Notes on values alignment:", false),
        ],
    },
    EvaluationSection {
        id: SectionId::Closing,
        name: "Closing Assessment",
        description: "Final impressions and readiness evaluation",
        questions: &[
            scale_with_rubric(
                "CLS1",
                "Quality of questions the candidate asked",
                "Thoughtful, insightful questions showing genuine interest",
                "Basic questions, adequate interest",
                "No questions or only logistical concerns",
            ),
            scale_with_rubric(
                "CLS2",
                "Realistic expectations about the role",
                "Clear-eyed about challenges, still committed",
                "Somewhat realistic, minor concerns",
                "Unrealistic expectations or major gaps",
            ),
            scale_with_rubric(
                "CLS3",
                "Motivation and commitment level",
                "Genuine intrinsic motivation, mission-driven",
                "Mixed motivation, adequate interest",
                "Primarily external motivation",
            ),
            scale(
                "CLS4",
                "How well would this candidate fit with the current team?",
            ),
            SectionQuestion {
                id: "CLS5",
                text: "What level of supervision/support would this candidate need?",
                kind: QuestionKind::Select,
                required: true,
                rubric: None,
                options: &[
                    SelectOption {
                        value: "minimal",
                        label: "Minimal - Can work independently quickly",
                    },
                    SelectOption {
                        value: "standard",
                        label: "Standard - Normal onboarding and supervision",
                    },
                    SelectOption {
                        value: "intensive",
                        label: "Intensive - Will need significant support and mentoring",
                    },
                ],
            },
            textarea(
                "CLS6",
                "What stood out most positively about this candidate?",
                true,
            ),
            textarea(
                "CLS7",
                "What concerns, if any, arose during the interview?",
                true,
            ),
            textarea(
                "CLS8",
                "Specific training or development needs identified:",
                false,
            ),
        ],
    },
    EvaluationSection {
        id: SectionId::Decision,
        name: "Final Decision",
        description: "Hiring recommendation and rationale",
        questions: &[
            SectionQuestion {
                id: "DEC1",
                text: "Overall Interview Score (1-10)",
                kind: QuestionKind::Number,
                required: true,
                rubric: None,
                options: &[],
            },
            SectionQuestion {
                id: "DEC2",
                text: "Green flags observed (select all that apply)",
                kind: QuestionKind::Multiselect,
                required: false,
                rubric: None,
                options: &[],
            },
            SectionQuestion {
                id: "DEC3",
                text: "Red flags observed (select all that apply)",
                kind: QuestionKind::Multiselect,
                required: false,
                rubric: None,
                options: &[],
            },
            SectionQuestion {
                id: "DEC4",
                text: "Hiring Recommendation",
                kind: QuestionKind::Select,
                required: true,
                rubric: None,
                options: &[
                    SelectOption {
                        value: "strong_yes",
                        label: "Strong Yes - Highly recommend hiring",
                    },
                    SelectOption {
                        value: "yes",
                        label: "Yes - Recommend hiring",
                    },
                    SelectOption {
                        value: "maybe",
                        label: "Maybe - Need reference check or second opinion",
                    },
                    SelectOption {
                        value: "no",
                        label: "No - Do not recommend hiring",
                    },
                    SelectOption {
                        value: "strong_no",
                        label: "Strong No - Significant concerns",
                    },
                ],
            },
            textarea("DEC5", "Detailed rationale for your recommendation:", true),
            textarea("DEC6", "Next steps or follow-up items:", false),
        ],
    },
];

/// Suggested interview prompts grouped by conversation phase. Reference
/// material only; nothing is scored against these.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct QuestionTemplates {
    pub opening: &'static [&'static str],
    pub experience: &'static [&'static str],
    pub values: &'static [&'static str],
    pub closing: &'static [&'static str],
}

pub fn question_templates() -> QuestionTemplates {
    QuestionTemplates {
        opening: &[
            "Tell me about yourself and what brought you to apply for this position.",
            "What do you know about our agency and our mission?",
            "Why are you interested in in-home family services specifically?",
            "What does \"family preservation\" mean to you?",
            "Tell me about your journey to this type of work.",
            "What are you hoping to find in your next role?",
        ],
        experience: &[
            "Describe your experience working with families in crisis.",
            "Tell me about a time you worked with someone struggling with addiction. What did you learn?",
            "Describe a situation where you had to build trust with someone who was initially resistant.",
            "Tell me about a time you had to make a difficult decision about child safety.",
            "How have you handled a situation where you disagreed with a supervisor or policy?",
            "Describe your experience with documentation and case notes.",
            "Tell me about a time you had to de-escalate a tense situation.",
            "What experience do you have coordinating with other agencies (courts, schools, mental health)?",
            "Describe a time you received difficult feedback. How did you respond?",
            "Tell me about a family you worked with that had a positive outcome. What contributed to that?",
        ],
        values: &[
            "What does trauma-informed care mean to you? Give an example of how you practice it.",
            "How do you balance child safety with keeping families together?",
            "What does it mean to be \"non-judgmental\" in this work? Give a specific example.",
            "How do you maintain professional boundaries while building genuine relationships?",
            "Describe your self-care practices. How do you manage the emotional weight of this work?",
            "What role does accountability play in your work with families?",
            "How do you approach working with families whose values differ from your own?",
            "What does recovery and healing look like to you?",
            "How do you handle situations where a parent is not making progress?",
            "What is your understanding of generational trauma and how it affects families?",
        ],
        closing: &[
            "What questions do you have for us about the role or organization?",
            "Is there anything about your experience or qualifications we haven't covered that you'd like to share?",
            "What does your ideal supervision and support look like?",
            "What would success look like for you in the first 90 days?",
            "Do you have any concerns about the role that we could address?",
            "What are you most excited about regarding this opportunity?",
        ],
    }
}

pub fn templates_for(id: SectionId) -> &'static [&'static str] {
    let templates = question_templates();
    match id {
        SectionId::Opening => templates.opening,
        SectionId::Experience => templates.experience,
        SectionId::Values => templates.values,
        SectionId::Closing => templates.closing,
        SectionId::Decision => &[],
    }
}
