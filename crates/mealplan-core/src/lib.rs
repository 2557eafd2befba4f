//! mealplan-core
//!
//! The budget calculation engine: discounts, calendar arithmetic, meal
//! aggregation, grand-total projection and balance depletion.
//! Depends on mealplan-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod aggregation_service;
pub mod calendar;
pub mod depletion_service;
pub mod discount_service;
pub mod error;
pub mod projection_service;
pub mod selection_service;
pub mod storage;

pub use aggregation_service::*;
pub use calendar::*;
pub use depletion_service::*;
pub use discount_service::*;
pub use error::CoreError;
pub use projection_service::*;
pub use selection_service::*;
