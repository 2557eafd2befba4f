//! Planning horizon and the persisted budget plan document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{discount::PlanKind, meal::Meal, selection::WeeklySelection};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Date range, weeks off and starting balance entered by the user.
///
/// Dates are optional because a half-filled form is a valid state.
pub struct PlanningHorizon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub weeks_off: u32,
    #[serde(default)]
    pub starting_balance: f64,
}

impl PlanningHorizon {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            weeks_off: 0,
            starting_balance: 0.0,
        }
    }

    pub fn with_weeks_off(mut self, weeks_off: u32) -> Self {
        self.weeks_off = weeks_off;
        self
    }

    pub fn with_starting_balance(mut self, balance: f64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Both dates, when both have been entered.
    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date?, self.end_date?))
    }

    pub fn is_complete(&self) -> bool {
        self.dates().is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Everything a user enters for one budgeting scenario.
pub struct BudgetPlan {
    pub name: String,
    /// Falls back to the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_kind: Option<PlanKind>,
    #[serde(default)]
    pub horizon: PlanningHorizon,
    #[serde(default)]
    pub selection: WeeklySelection,
    #[serde(default)]
    pub custom_meals: Vec<Meal>,
}

impl BudgetPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plan_kind: None,
            horizon: PlanningHorizon::default(),
            selection: WeeklySelection::new(),
            custom_meals: Vec::new(),
        }
    }

    pub fn plan_kind_or(&self, fallback: PlanKind) -> PlanKind {
        self.plan_kind.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_horizon_has_no_dates() {
        let mut horizon = PlanningHorizon::default();
        assert!(horizon.dates().is_none());
        horizon.start_date = NaiveDate::from_ymd_opt(2024, 8, 26);
        assert!(!horizon.is_complete());
    }

    #[test]
    fn plan_deserializes_with_defaults() {
        let plan: BudgetPlan = serde_json::from_str(r#"{"name": "Fall"}"#).unwrap();
        assert_eq!(plan.name, "Fall");
        assert_eq!(plan.plan_kind, None);
        assert!(plan.selection.is_empty());
        assert!(!plan.horizon.is_complete());
    }
}
