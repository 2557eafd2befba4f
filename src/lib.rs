#![doc(test(attr(deny(warnings))))]

//! Mealplan projects dining-plan spending over a semester: the grand total for
//! a weekly meal template, per-weekday breakdowns, and the date a starting
//! balance runs out.
//!
//! The calculation engine lives in [`mealplan_core`]; this crate wires it to
//! configuration, JSON storage and the `mealplan_cli` binary.

pub mod cli;
pub mod errors;
pub mod format;
pub mod utils;

pub use mealplan_config as config;
pub use mealplan_core as engine;
pub use mealplan_domain as domain;
pub use mealplan_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Mealplan tracing initialized.");
    });
}
