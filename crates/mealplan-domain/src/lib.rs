//! mealplan-domain
//!
//! Pure domain models (Meal, WeeklySelection, DiscountTable, PlanningHorizon, etc.).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod catalog;
pub mod common;
pub mod discount;
pub mod error;
pub mod meal;
pub mod plan;
pub mod selection;

pub use catalog::*;
pub use common::*;
pub use discount::*;
pub use error::DomainError;
pub use meal::*;
pub use plan::*;
pub use selection::*;
