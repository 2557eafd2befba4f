use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// Errors raised when a domain value is constructed from out-of-range input.
///
/// These indicate a programming error in the caller rather than bad user data.
pub enum DomainError {
    InvalidWeekdayIndex(usize),
    InvalidDiscountRate {
        location: Option<String>,
        rate: f64,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidWeekdayIndex(index) => {
                write!(f, "weekday index {index} is out of range (expected 0..=6)")
            }
            DomainError::InvalidDiscountRate {
                location: Some(location),
                rate,
            } => write!(
                f,
                "discount rate {rate} for `{location}` must be within [0, 1)"
            ),
            DomainError::InvalidDiscountRate {
                location: None,
                rate,
            } => write!(f, "flat discount rate {rate} must be within [0, 1)"),
        }
    }
}

impl std::error::Error for DomainError {}
