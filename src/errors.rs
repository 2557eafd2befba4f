use mealplan_config::ConfigError;
use mealplan_core::CoreError;
use mealplan_domain::DomainError;
use thiserror::Error;

/// Error type surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Domain(#[from] DomainError),
    #[error("Could not encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Plan `{0}` has no start or end date")]
    IncompleteHorizon(String),
    #[error("Plan `{name}` starts on {start} after it ends on {end}")]
    InvalidRange {
        name: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}
