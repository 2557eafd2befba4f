use std::{collections::BTreeMap, path::PathBuf};

use mealplan_domain::{
    DiscountTable, DomainError, PlanKind, DEFAULT_FLAT_RATE, DEFAULT_LOCATION_RATES,
};
use serde::{Deserialize, Serialize};

/// Stores user-configurable calculator preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub default_plan_kind: PlanKind,
    #[serde(default)]
    pub discounts: DiscountSettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for saved plans. Defaults to `~/Documents/Mealplans`.
    pub default_plan_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_plan_kind: PlanKind::default(),
            discounts: DiscountSettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_plan_root: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Builds the validated discount table described by this configuration.
    pub fn discount_table(&self) -> Result<DiscountTable, DomainError> {
        DiscountTable::new(
            self.discounts.location_rates.clone(),
            self.discounts.flat_rate,
        )
    }

    pub fn resolve_default_plan_root(&self) -> PathBuf {
        if let Some(path) = &self.default_plan_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Mealplans")
    }
}

/// Discount rates as written in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountSettings {
    #[serde(default = "DiscountSettings::default_flat_rate")]
    pub flat_rate: f64,
    #[serde(default = "DiscountSettings::default_location_rates")]
    pub location_rates: BTreeMap<String, f64>,
}

impl DiscountSettings {
    pub fn default_flat_rate() -> f64 {
        DEFAULT_FLAT_RATE
    }

    pub fn default_location_rates() -> BTreeMap<String, f64> {
        DEFAULT_LOCATION_RATES
            .iter()
            .map(|(location, rate)| ((*location).to_string(), *rate))
            .collect()
    }
}

impl Default for DiscountSettings {
    fn default() -> Self {
        Self {
            flat_rate: Self::default_flat_rate(),
            location_rates: Self::default_location_rates(),
        }
    }
}
