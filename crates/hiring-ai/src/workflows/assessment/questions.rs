//! The forced-choice question catalog served to candidates. Each question
//! offers one answer per color; a submission is a list of chosen colors keyed
//! by question id.

use serde::Serialize;

use super::domain::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: Color,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub options: [AnswerOption; 4],
}

pub fn questions() -> &'static [AssessmentQuestion] {
    &QUESTIONS
}

pub fn expected_question_count() -> usize {
    QUESTIONS.len()
}

const fn options(
    gold: &'static str,
    green: &'static str,
    orange: &'static str,
    blue: &'static str,
) -> [AnswerOption; 4] {
    [
        AnswerOption {
            value: Color::Gold,
            label: gold,
        },
        AnswerOption {
            value: Color::Green,
            label: green,
        },
        AnswerOption {
            value: Color::Orange,
            label: orange,
        },
        AnswerOption {
            value: Color::Blue,
            label: blue,
        },
    ]
}

static QUESTIONS: [AssessmentQuestion; 20] = [
    AssessmentQuestion {
        id: "Q1",
        text: "When starting a new project, I prefer to:",
        options: options(
            "Create a detailed plan with clear steps and timeline",
            "Research and understand all aspects before beginning",
            "Jump in and figure it out as I go",
            "Discuss with others and get everyone aligned",
        ),
    },
    AssessmentQuestion {
        id: "Q2",
        text: "In meetings, I typically:",
        options: options(
            "Follow the agenda and keep things on track",
            "Ask questions and challenge assumptions",
            "Look for opportunities to take action",
            "Make sure everyone feels heard and included",
        ),
    },
    AssessmentQuestion {
        id: "Q3",
        text: "When plans change unexpectedly, I:",
        options: options(
            "Feel stressed and want to reorganize quickly",
            "Analyze why the change happened and what it means",
            "Adapt easily and see it as an opportunity",
            "Check in on how others are handling the change",
        ),
    },
    AssessmentQuestion {
        id: "Q4",
        text: "I feel most satisfied at work when I:",
        options: options(
            "Complete tasks on time with high quality",
            "Solve a complex problem or learn something new",
            "Take on exciting challenges and see immediate results",
            "Make a real difference in someone's life",
        ),
    },
    AssessmentQuestion {
        id: "Q5",
        text: "When working with a difficult person, I:",
        options: options(
            "Focus on the task and set clear expectations",
            "Try to understand their perspective logically",
            "Use humor and charm to break the tension",
            "Try to connect with them on a personal level",
        ),
    },
    AssessmentQuestion {
        id: "Q6",
        text: "My ideal work environment is:",
        options: options(
            "Structured with clear expectations and procedures",
            "Intellectually stimulating with room for innovation",
            "Fast-paced with variety and freedom",
            "Collaborative with supportive relationships",
        ),
    },
    AssessmentQuestion {
        id: "Q7",
        text: "When making decisions, I rely most on:",
        options: options(
            "Policies, precedent, and proven methods",
            "Logic, data, and careful analysis",
            "Instinct, experience, and quick assessment",
            "Values, feelings, and impact on people",
        ),
    },
    AssessmentQuestion {
        id: "Q8",
        text: "When stressed, I tend to:",
        options: options(
            "Become more controlling or critical",
            "Withdraw and need time alone to think",
            "Become restless and look for escape or distraction",
            "Become emotional and need reassurance",
        ),
    },
    AssessmentQuestion {
        id: "Q9",
        text: "I am most frustrated by people who:",
        options: options(
            "Are disorganized or unreliable",
            "Are illogical or don't think things through",
            "Are rigid or slow to act",
            "Are cold or don't value relationships",
        ),
    },
    AssessmentQuestion {
        id: "Q10",
        text: "When giving feedback, I:",
        options: options(
            "Focus on specific behaviors and expectations",
            "Explain the rationale and provide objective assessment",
            "Keep it brief and action-oriented",
            "Balance honesty with encouragement and support",
        ),
    },
    AssessmentQuestion {
        id: "Q11",
        text: "When a family is struggling, my first instinct is to:",
        options: options(
            "Create a structured plan with clear steps",
            "Assess the situation and identify root causes",
            "Take immediate action to address urgent needs",
            "Build trust and understand their experience",
        ),
    },
    AssessmentQuestion {
        id: "Q12",
        text: "In documentation and paperwork, I am:",
        options: options(
            "Thorough and detailed - I enjoy getting it right",
            "Analytical - I focus on accurate assessment",
            "Efficient - I get it done but prefer fieldwork",
            "Thoughtful - I focus on capturing the human story",
        ),
    },
    AssessmentQuestion {
        id: "Q13",
        text: "When I disagree with a decision, I:",
        options: options(
            "Follow the decision but document my concerns",
            "Present my logical case and evidence",
            "Speak up directly and advocate for change",
            "Consider the impact on relationships before responding",
        ),
    },
    AssessmentQuestion {
        id: "Q14",
        text: "I build trust with families by:",
        options: options(
            "Being reliable, consistent, and following through",
            "Demonstrating competence and giving good advice",
            "Being authentic, flexible, and non-judgmental",
            "Showing genuine care and really listening",
        ),
    },
    AssessmentQuestion {
        id: "Q15",
        text: "When working with a crisis situation, I:",
        options: options(
            "Follow established protocols and procedures",
            "Quickly assess the situation and determine priorities",
            "Stay calm, adapt, and take decisive action",
            "Focus on the emotional needs of those involved",
        ),
    },
    AssessmentQuestion {
        id: "Q16",
        text: "I believe the best teams:",
        options: options(
            "Have clear roles, responsibilities, and accountability",
            "Challenge each other and value diverse perspectives",
            "Are flexible, energetic, and get things done",
            "Support each other and work together harmoniously",
        ),
    },
    AssessmentQuestion {
        id: "Q17",
        text: "When I receive criticism, I:",
        options: options(
            "Consider if I failed to meet expectations and how to improve",
            "Evaluate if the criticism is logical and valid",
            "Take what's useful and move on quickly",
            "Feel hurt but try to understand the intent behind it",
        ),
    },
    AssessmentQuestion {
        id: "Q18",
        text: "I recharge and recover by:",
        options: options(
            "Getting organized and accomplishing small tasks",
            "Having quiet time to think, read, or learn",
            "Doing something active, fun, or adventurous",
            "Spending quality time with people I care about",
        ),
    },
    AssessmentQuestion {
        id: "Q19",
        text: "When a parent is resistant to services, I:",
        options: options(
            "Explain requirements and consequences clearly",
            "Try to understand their reasoning and address concerns",
            "Try a different approach and stay persistent",
            "Build relationship first and find what matters to them",
        ),
    },
    AssessmentQuestion {
        id: "Q20",
        text: "At the end of a difficult day, I feel best when I:",
        options: options(
            "Know I did my job correctly and nothing fell through cracks",
            "Learned something valuable from the experience",
            "Handled whatever came up and made it through",
            "Made a meaningful connection with someone",
        ),
    },
];
