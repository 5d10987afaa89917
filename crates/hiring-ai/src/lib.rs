pub mod config;
pub mod error;
pub mod notify;
pub mod telemetry;
pub mod workflows;
