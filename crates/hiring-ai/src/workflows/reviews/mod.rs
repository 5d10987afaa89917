//! Employee performance reviews: static form configuration and submission
//! handling with email notification.

pub mod catalog;
pub mod router;
pub mod service;

pub use catalog::{BONUS_TIERS, RATING_SCALE, REVIEW_CATEGORIES, REVIEW_TYPES};
pub use router::review_router;
pub use service::{ReviewError, ReviewReceipt, ReviewService, ReviewSubmission};
