//! Static catalog of the in-home family-services scenarios candidates
//! complete before the interview, plus the rubric interviewers score them
//! against.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioQuestion {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub guidance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub situation: &'static str,
    pub questions: &'static [ScenarioQuestion],
    #[serde(skip)]
    pub scoring_criteria: &'static [&'static str],
}

/// One dimension interviewers rate free-text responses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RubricLevel {
    pub label: &'static str,
    pub description: &'static str,
}

pub const SCORING_RUBRIC: [(u8, RubricLevel); 3] = [
    (
        3,
        RubricLevel {
            label: "Strong",
            description: "Demonstrates clear understanding, uses trauma-informed approach, provides specific and appropriate responses",
        },
    ),
    (
        2,
        RubricLevel {
            label: "Adequate",
            description: "Shows basic understanding, generally appropriate responses with some areas needing development",
        },
    ),
    (
        1,
        RubricLevel {
            label: "Concern",
            description: "Missing key elements, concerning approach, or significantly incomplete understanding",
        },
    ),
];

pub static ASSESSMENT_CATEGORIES: [AssessmentCategory; 7] = [
    AssessmentCategory {
        id: "trauma_informed",
        name: "Trauma-Informed Thinking",
        description: "Understands how trauma shapes behavior and responds accordingly",
    },
    AssessmentCategory {
        id: "problem_solving",
        name: "Problem-Solving Approach",
        description: "Practical, creative, and appropriate solutions to complex situations",
    },
    AssessmentCategory {
        id: "non_judgment",
        name: "Non-Judgment & Compassion",
        description: "Sees humanity in families while maintaining appropriate accountability",
    },
    AssessmentCategory {
        id: "boundaries",
        name: "Boundaries & Professional Limits",
        description: "Knows when to act, when to refer, and when to involve others",
    },
    AssessmentCategory {
        id: "communication",
        name: "Communication & Language",
        description: "Uses respectful, clear, non-blaming language appropriate to the audience",
    },
    AssessmentCategory {
        id: "self_awareness",
        name: "Self-Awareness",
        description: "Recognizes own reactions, biases, and limitations",
    },
    AssessmentCategory {
        id: "safety_assessment",
        name: "Safety Assessment",
        description: "Correctly identifies and prioritizes safety concerns",
    },
];

pub fn scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

pub fn scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.id == id)
}

pub fn total_question_count() -> usize {
    SCENARIOS.iter().map(|scenario| scenario.questions.len()).sum()
}

const fn question(
    id: &'static str,
    text: &'static str,
    guidance: &'static str,
) -> ScenarioQuestion {
    ScenarioQuestion {
        id,
        text,
        kind: "textarea",
        guidance,
    }
}

static SCENARIOS: [Scenario; 6] = [
    Scenario {
        id: "SC1",
        title: "Parent in Recovery - Signs of Relapse",
        category: "Addiction & Safety",
        difficulty: "Complex",
        situation: "You arrive for a scheduled home visit with Maria (32) and her son Carlos (8). Maria has been in recovery from opioid addiction for 6 months and making good progress. Today, you notice:\n\n\u{2022} Several empty beer bottles in the kitchen sink\n\u{2022} Maria seems slightly unsteady and her speech is slower than usual\n\u{2022} Carlos quietly tells you \"Mom was sad last night and had some beers\"\n\u{2022} When you check in with Maria, she says \"It's just beer, not the hard stuff. I can handle it.\"\n\u{2022} Your next check-in with the DHHS caseworker is scheduled for tomorrow",
        questions: &[
            question(
                "SC1_Q1",
                "What are you noticing in this situation, and what concerns you most?",
                "Consider both immediate safety and longer-term recovery implications",
            ),
            question(
                "SC1_Q2",
                "How would you approach talking to Maria about what you observed? What would you say?",
                "Think about non-judgmental, trauma-informed communication",
            ),
            question(
                "SC1_Q3",
                "What is your responsibility here regarding safety, reporting, and maintaining your relationship with Maria?",
                "Consider mandatory reporting obligations vs. collaborative problem-solving",
            ),
            question(
                "SC1_Q4",
                "If Maria becomes defensive or angry, how would you respond?",
                "Think about de-escalation and maintaining professional boundaries",
            ),
            question(
                "SC1_Q5",
                "How would you document this visit? What specific language would you use?",
                "Focus on objective, behavioral documentation",
            ),
        ],
        scoring_criteria: &[
            "Recognizes alcohol use as potential relapse behavior",
            "Uses non-judgmental, curious communication",
            "Balances accountability with compassion",
            "Understands mandatory reporting requirements",
            "Documents objectively without judgment",
        ],
    },
    Scenario {
        id: "SC2",
        title: "Trauma Response in a Child",
        category: "Trauma & Family Dynamics",
        difficulty: "Complex",
        situation: "You're working with the Rodriguez family. Dad (Jorge) recently completed anger management after a domestic violence incident 8 months ago. During your home visit with Jorge and his daughter Sofia (14):\n\n\u{2022} Sofia won't make eye contact with her father\n\u{2022} When Jorge tries to talk to her, she gives one-word answers and looks away\n\u{2022} Jorge is frustrated: \"She won't even try. I've done everything\u{2014}took classes, got help, I'm sober. When is she going to forgive me?\"\n\u{2022} Sofia leaves the room without explanation\n\u{2022} Jorge turns to you: \"She's being disrespectful. Can you talk to her?\"\n\u{2022} Later, Sofia privately tells you: \"I'm still scared of him sometimes.\"",
        questions: &[
            question(
                "SC2_Q1",
                "What do you think is happening with Sofia? Why might she be responding this way?",
                "Consider trauma responses and the impact of witnessing domestic violence",
            ),
            question(
                "SC2_Q2",
                "How would you help Jorge understand Sofia's behavior without shaming him for his past?",
                "Balance validating his efforts while educating about trauma",
            ),
            question(
                "SC2_Q3",
                "Sofia told you privately that she's still scared of her dad. What do you do with this information?",
                "Consider confidentiality, safety, and the therapeutic relationship",
            ),
            question(
                "SC2_Q4",
                "What would you say to Sofia (privately) to help her feel seen and heard?",
                "Think about validating without making promises you can't keep",
            ),
            question(
                "SC2_Q5",
                "What would be your goals for the next 2-3 home visits with this family?",
                "Consider realistic, small-step interventions for rebuilding trust",
            ),
        ],
        scoring_criteria: &[
            "Understands trauma responses in children",
            "Can hold both perspectives without taking sides",
            "Navigates confidentiality appropriately",
            "Uses age-appropriate, validating language with the child",
            "Develops realistic intervention plans",
        ],
    },
    Scenario {
        id: "SC3",
        title: "Crisis During Home Visit - Mental Health Emergency",
        category: "Crisis Response",
        difficulty: "High",
        situation: "You arrive for a home visit with the Thompson family. Mom (Angela, 38) has a history of depression and anxiety. When you arrive:\n\n\u{2022} Angela answers the door in pajamas, hasn't showered in days\n\u{2022} The house is unusually messy with dishes piled up\n\u{2022} Her two children (ages 6 and 9) are watching TV unsupervised\n\u{2022} Angela tells you she hasn't slept in three days\n\u{2022} She says: \"I just can't do this anymore. Everyone would be better off without me.\"\n\u{2022} The children seem unaware of their mother's distress\n\u{2022} Angela's phone shows multiple missed calls from her sister",
        questions: &[
            question(
                "SC3_Q1",
                "What is your immediate assessment of this situation? What are your priorities?",
                "Consider safety assessment and triage",
            ),
            question(
                "SC3_Q2",
                "How do you respond to Angela's statement that \"everyone would be better off without me\"?",
                "Think about suicide assessment and crisis intervention",
            ),
            question(
                "SC3_Q3",
                "What steps do you take in the next 30 minutes? Be specific about actions and order.",
                "Consider immediate safety, support resources, and documentation",
            ),
            question(
                "SC3_Q4",
                "How do you involve the children appropriately while managing this crisis?",
                "Balance child safety with not alarming them unnecessarily",
            ),
            question(
                "SC3_Q5",
                "What are the limits of your role in this situation? When do you need to involve others?",
                "Understand professional boundaries and when to escalate",
            ),
        ],
        scoring_criteria: &[
            "Correctly identifies potential suicidal ideation",
            "Knows crisis intervention basics",
            "Prioritizes immediate safety appropriately",
            "Understands professional limits and when to escalate",
            "Considers impact on children while managing adult crisis",
        ],
    },
    Scenario {
        id: "SC4",
        title: "Resistant Parent - Service Non-Compliance",
        category: "Engagement & Boundaries",
        difficulty: "Moderate",
        situation: "You've been assigned to work with the Mitchell family. Mom (Tanya, 29) has a 4-year-old son (Jayden) and is court-ordered to participate in in-home family services after neglect allegations. During your visits over the past month:\n\n\u{2022} Tanya has cancelled 3 of your 6 scheduled visits at the last minute\n\u{2022} When you do meet, she sits with arms crossed and gives minimal responses\n\u{2022} She says: \"I don't need this. CPS is just out to get me because I'm poor.\"\n\u{2022} \"Those other workers didn't help. Why should you be any different?\"\n\u{2022} Jayden is clean and fed, but Tanya rarely interacts with him during your visits\n\u{2022} Your supervisor is asking for progress updates",
        questions: &[
            question(
                "SC4_Q1",
                "What do you think is driving Tanya's resistance? What might be underneath her anger?",
                "Consider her history and context",
            ),
            question(
                "SC4_Q2",
                "How would you approach building a relationship with Tanya given her resistance?",
                "Think about engagement strategies for resistant clients",
            ),
            question(
                "SC4_Q3",
                "She says \"Why should you be any different?\" How do you respond?",
                "Consider authenticity and managing expectations",
            ),
            question(
                "SC4_Q4",
                "How do you balance respecting her autonomy with the court-ordered nature of services?",
                "Think about mandated vs. voluntary dynamics",
            ),
            question(
                "SC4_Q5",
                "What would you report to your supervisor about progress with this family?",
                "Consider honest reporting while advocating for the family",
            ),
        ],
        scoring_criteria: &[
            "Shows empathy for client's perspective and history",
            "Has strategies for building trust with resistant clients",
            "Responds authentically without being defensive",
            "Understands mandated service dynamics",
            "Can report honestly while maintaining advocacy stance",
        ],
    },
    Scenario {
        id: "SC5",
        title: "Suspected Child Abuse - Mandatory Reporting",
        category: "Safety & Reporting",
        difficulty: "High",
        situation: "You've been working with the Davis family for two months. Mom (Keisha) and her partner (Marcus) have two children: Destiny (7) and Marcus Jr. (4). Today during your home visit:\n\n\u{2022} You notice Destiny has a bruise on her upper arm that looks like finger marks\n\u{2022} When you ask casually, Destiny says \"I fell\" and looks at her mom\n\u{2022} Keisha quickly says \"She's so clumsy, always falling\"\n\u{2022} Marcus is in the other room but you notice Destiny keeps watching the doorway\n\u{2022} Keisha then says privately: \"Please don't make a big deal of this. I'm afraid if you report, Marcus will leave and I can't afford rent alone.\"\n\u{2022} Keisha has disclosed to you previously that Marcus has a \"temper\" but insisted he's never hurt the kids",
        questions: &[
            question(
                "SC5_Q1",
                "What observations are concerning you, and why?",
                "Identify specific behavioral and physical indicators",
            ),
            question(
                "SC5_Q2",
                "What is your legal and ethical obligation in this situation?",
                "Consider mandatory reporting requirements",
            ),
            question(
                "SC5_Q3",
                "How do you talk to Keisha about your obligation to report, given her fear?",
                "Balance honesty about requirements with maintaining relationship",
            ),
            question(
                "SC5_Q4",
                "What specific information would you include in your report?",
                "Focus on objective observations and statements",
            ),
            question(
                "SC5_Q5",
                "How do you continue working with this family after making a report?",
                "Consider ongoing relationship and safety planning",
            ),
        ],
        scoring_criteria: &[
            "Correctly identifies indicators of potential abuse",
            "Understands mandatory reporting obligations",
            "Communicates honestly while maintaining compassion",
            "Documents objectively and completely",
            "Has plan for ongoing engagement after reporting",
        ],
    },
    Scenario {
        id: "SC6",
        title: "Co-Occurring Addiction and Grief",
        category: "Addiction & Trauma",
        difficulty: "Complex",
        situation: "You're working with the Williams family. Mom (Patricia, 45) lost her adult son to overdose 18 months ago. She has two remaining children at home: Devon (16) and Alicia (12). Patricia is 9 months sober from alcohol and prescription pills.\n\nDuring today's home visit:\n\n\u{2022} Patricia tells you the anniversary of her son's death is next week\n\u{2022} She admits: \"I almost used last weekend. I had the bottle in my hand. But I called my sponsor instead.\"\n\u{2022} Devon is angry: \"She acts like he was the only one who died. We're still here, but she's always sad.\"\n\u{2022} Alicia is anxious and keeps asking you: \"Is my mom going to be okay? Is she going to drink again?\"\n\u{2022} Patricia looks exhausted and says: \"I don't know how to be there for them when I can barely get through the day.\"",
        questions: &[
            question(
                "SC6_Q1",
                "What is Patricia dealing with beyond just staying sober?",
                "Consider complicated grief and parenting while in recovery",
            ),
            question(
                "SC6_Q2",
                "Patricia tells you she \"almost used\" but didn't. How do you respond to this disclosure?",
                "Think about supporting recovery without shaming",
            ),
            question(
                "SC6_Q3",
                "How do you support Devon's anger without dismissing Patricia's grief?",
                "Consider holding space for multiple family members' experiences",
            ),
            question(
                "SC6_Q4",
                "What would you say to 12-year-old Alicia about her concerns?",
                "Think about age-appropriate reassurance without false promises",
            ),
            question(
                "SC6_Q5",
                "What resources or supports might help this family, and how would you introduce them?",
                "Consider grief support, family counseling, recovery resources",
            ),
        ],
        scoring_criteria: &[
            "Understands complicated grief and recovery intersection",
            "Validates recovery efforts and normalizes urges",
            "Can hold space for multiple perspectives",
            "Uses age-appropriate communication with children",
            "Knows community resources and how to connect families",
        ],
    },
];
