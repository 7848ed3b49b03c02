pub mod config;
pub mod error;
pub mod salaries;
pub mod telemetry;
