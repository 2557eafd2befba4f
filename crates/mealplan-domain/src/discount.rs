//! Discount plans and the per-location discount table.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Flat rate applied to every location on the à la carte plan.
pub const DEFAULT_FLAT_RATE: f64 = 0.10;

/// Negotiated per-location rates for the Dining Dollars plan.
pub const DEFAULT_LOCATION_RATES: [(&str, f64); 4] = [
    ("Dining Commons", 0.10),
    ("Campus Market", 0.05),
    ("Student Union Grill", 0.10),
    ("Library Cafe", 0.15),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
/// Enrollment status that decides which discount regime applies.
pub enum PlanKind {
    /// Discount plan with venue-specific rates.
    #[default]
    DiningDollars,
    /// Non-discount plan with one blanket rate.
    ALaCarte,
}

impl PlanKind {
    pub fn is_discount_plan(self) -> bool {
        matches!(self, PlanKind::DiningDollars)
    }
}

impl From<bool> for PlanKind {
    fn from(is_discount_plan: bool) -> Self {
        if is_discount_plan {
            PlanKind::DiningDollars
        } else {
            PlanKind::ALaCarte
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlanKind::DiningDollars => "Dining Dollars",
            PlanKind::ALaCarte => "À la carte",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Location rates for the discount plan plus the flat rate for the non-discount plan.
pub struct DiscountTable {
    rates: BTreeMap<String, f64>,
    flat_rate: f64,
}

impl DiscountTable {
    /// Validates every rate lies within `[0, 1)`.
    pub fn new(rates: BTreeMap<String, f64>, flat_rate: f64) -> Result<Self, DomainError> {
        if !is_valid_rate(flat_rate) {
            return Err(DomainError::InvalidDiscountRate {
                location: None,
                rate: flat_rate,
            });
        }
        if let Some((location, rate)) = rates.iter().find(|(_, rate)| !is_valid_rate(**rate)) {
            return Err(DomainError::InvalidDiscountRate {
                location: Some(location.clone()),
                rate: *rate,
            });
        }
        Ok(Self { rates, flat_rate })
    }

    /// A table with no location rates and no flat rate.
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
            flat_rate: 0.0,
        }
    }

    /// Rate for `location` on the discount plan; absent locations get `0.0`.
    pub fn rate_for(&self, location: &str) -> f64 {
        self.rates.get(location).copied().unwrap_or(0.0)
    }

    pub fn flat_rate(&self) -> f64 {
        self.flat_rate
    }

    pub fn rates(&self) -> &BTreeMap<String, f64> {
        &self.rates
    }
}

impl Default for DiscountTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_LOCATION_RATES
                .iter()
                .map(|(location, rate)| ((*location).to_string(), *rate))
                .collect(),
            flat_rate: DEFAULT_FLAT_RATE,
        }
    }
}

fn is_valid_rate(rate: f64) -> bool {
    (0.0..1.0).contains(&rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_rates_outside_unit_interval() {
        let mut rates = BTreeMap::new();
        rates.insert("Commons".to_string(), 1.0);
        let err = DiscountTable::new(rates, 0.1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidDiscountRate { location: Some(ref loc), .. } if loc == "Commons"
        ));

        assert!(DiscountTable::new(BTreeMap::new(), -0.05).is_err());
        assert!(DiscountTable::new(BTreeMap::new(), f64::NAN).is_err());
    }

    #[test]
    fn unknown_location_has_zero_rate() {
        let table = DiscountTable::default();
        assert_eq!(table.rate_for("Food Truck"), 0.0);
        assert_eq!(table.rate_for("Campus Market"), 0.05);
        assert_eq!(table.flat_rate(), DEFAULT_FLAT_RATE);
    }

    #[test]
    fn plan_kind_from_discount_flag() {
        assert_eq!(PlanKind::from(true), PlanKind::DiningDollars);
        assert_eq!(PlanKind::from(false), PlanKind::ALaCarte);
        assert!(!PlanKind::ALaCarte.is_discount_plan());
    }
}
