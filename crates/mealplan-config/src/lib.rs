//! mealplan-config
//!
//! Persistent user preferences: discount rates, default plan kind, display options.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, DiscountSettings};
