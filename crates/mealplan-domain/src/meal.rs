//! Meal records and the lightweight references stored in weekly selections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity, Weekday};

/// Namespace for deterministic catalog meal identifiers.
const CATALOG_NAMESPACE: Uuid = Uuid::NAMESPACE_OID;

/// Derives the stable identifier of a catalog meal from its location and name.
pub fn catalog_meal_id(location: &str, name: &str) -> Uuid {
    Uuid::new_v5(&CATALOG_NAMESPACE, format!("{location}:{name}").as_bytes())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A priced item offered at a dining location, either from the catalog or user-authored.
pub struct Meal {
    pub id: Uuid,
    pub location: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub unavailable: BTreeSet<Weekday>,
}

impl Meal {
    /// Builds a catalog meal whose id is derived from `location` and `name`.
    pub fn catalog(location: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        let location = location.into();
        let name = name.into();
        Self {
            id: catalog_meal_id(&location, &name),
            location,
            name,
            price,
            is_custom: false,
            unavailable: BTreeSet::new(),
        }
    }

    /// Builds a user-authored meal with a freshly generated id.
    pub fn custom(location: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            location: location.into(),
            name: name.into(),
            price,
            is_custom: true,
            unavailable: BTreeSet::new(),
        }
    }

    pub fn with_unavailable(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.unavailable.extend(days);
        self
    }

    pub fn is_available_on(&self, day: Weekday) -> bool {
        !self.unavailable.contains(&day)
    }
}

impl Identifiable for Meal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Meal {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Pointer to a catalog meal placed on a weekday.
///
/// `instance_id` distinguishes two placements of the same meal on one day.
pub struct MealReference {
    pub id: Uuid,
    pub instance_id: Uuid,
}

impl MealReference {
    pub fn new(meal_id: Uuid) -> Self {
        Self {
            id: meal_id,
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn to(meal: &Meal) -> Self {
        Self::new(meal.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_deterministic() {
        let first = Meal::catalog("Commons", "Burrito Bowl", 8.0);
        let second = Meal::catalog("Commons", "Burrito Bowl", 9.5);
        assert_eq!(first.id, second.id);
        assert_ne!(first.id, Meal::catalog("Market", "Burrito Bowl", 8.0).id);
    }

    #[test]
    fn custom_meals_get_unique_ids() {
        let a = Meal::custom("Home", "Sandwich", 3.0);
        let b = Meal::custom("Home", "Sandwich", 3.0);
        assert!(a.is_custom);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn references_to_same_meal_have_distinct_instances() {
        let meal = Meal::catalog("Commons", "Salad", 6.0);
        let a = MealReference::to(&meal);
        let b = MealReference::to(&meal);
        assert_eq!(a.id, b.id);
        assert_ne!(a.instance_id, b.instance_id);
    }

    #[test]
    fn unavailable_days_block_selection() {
        let meal = Meal::catalog("Grill", "Burger", 7.25).with_unavailable([Weekday::Sunday]);
        assert!(!meal.is_available_on(Weekday::Sunday));
        assert!(meal.is_available_on(Weekday::Monday));
    }
}
