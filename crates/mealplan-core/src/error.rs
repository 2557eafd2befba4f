use mealplan_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Plan not found: {0}")]
    PlanNotFound(String),
    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
