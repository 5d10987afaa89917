//! Static configuration for employee performance reviews: rating categories,
//! the 1-5 scale, review types, and bonus tiers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub criteria: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingLevel {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewType {
    pub value: &'static str,
    pub label: &'static str,
    pub bonus_eligible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusTier {
    pub min_average: f64,
    pub amount: &'static str,
}

pub static REVIEW_CATEGORIES: [ReviewCategory; 3] = [
    ReviewCategory {
        id: "performance",
        name: "Job Performance",
        criteria: &[
            "Accountability",
            "Problem Solving",
            "Quality of Work",
            "Time Management",
            "Professionalism",
        ],
    },
    ReviewCategory {
        id: "relationship",
        name: "Relationship",
        criteria: &["Clients", "Coworkers", "Consumers", "Public"],
    },
    ReviewCategory {
        id: "governance",
        name: "Governance & Compliance",
        criteria: &[
            "Policies & Procedures",
            "Certifications",
            "Licensures",
            "Safety",
            "Reporting",
            "Documentation",
        ],
    },
];

pub static RATING_SCALE: [RatingLevel; 5] = [
    RatingLevel {
        value: 5,
        label: "Significant Strength",
    },
    RatingLevel {
        value: 4,
        label: "Strength",
    },
    RatingLevel {
        value: 3,
        label: "Acceptable",
    },
    RatingLevel {
        value: 2,
        label: "Needs Development",
    },
    RatingLevel {
        value: 1,
        label: "Needs Significant Development",
    },
];

pub static REVIEW_TYPES: [ReviewType; 3] = [
    ReviewType {
        value: "6-month",
        label: "6 Month Initial Review",
        bonus_eligible: false,
    },
    ReviewType {
        value: "12-month",
        label: "12 Month Evaluation",
        bonus_eligible: true,
    },
    ReviewType {
        value: "annual",
        label: "Annual Review",
        bonus_eligible: false,
    },
];

pub static BONUS_TIERS: [BonusTier; 3] = [
    BonusTier {
        min_average: 5.0,
        amount: "$100",
    },
    BonusTier {
        min_average: 4.0,
        amount: "$80",
    },
    BonusTier {
        min_average: 3.0,
        amount: "$60",
    },
];
