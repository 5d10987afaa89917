pub mod assessment;
pub mod interview;
pub mod reviews;
pub mod rubric;
pub mod scenarios;
