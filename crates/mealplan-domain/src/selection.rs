//! The repeating weekly template of planned meals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::{Weekday, WeekdayMap},
    meal::{Meal, MealReference},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
/// Ordered meal references for each of the seven weekday slots.
pub struct WeeklySelection {
    days: WeekdayMap<Vec<MealReference>>,
}

impl WeeklySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Weekday) -> &[MealReference] {
        &self.days[day]
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[MealReference])> {
        self.days.iter().map(|(day, refs)| (day, refs.as_slice()))
    }

    /// Places `meal` on `day` and returns the new reference.
    pub fn add(&mut self, day: Weekday, meal: &Meal) -> MealReference {
        let reference = MealReference::to(meal);
        self.days[day].push(reference);
        reference
    }

    pub fn push_reference(&mut self, day: Weekday, reference: MealReference) {
        self.days[day].push(reference);
    }

    /// Places `meal` on every weekday in `days`.
    pub fn add_to_days(&mut self, days: impl IntoIterator<Item = Weekday>, meal: &Meal) {
        for day in days {
            self.add(day, meal);
        }
    }

    /// Removes the placement with `instance_id`; returns whether one was found.
    pub fn remove_instance(&mut self, instance_id: Uuid) -> bool {
        for day in Weekday::ALL {
            let refs = &mut self.days[day];
            if let Some(pos) = refs.iter().position(|r| r.instance_id == instance_id) {
                refs.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn clear_day(&mut self, day: Weekday) {
        self.days[day].clear();
    }

    /// Builds a new selection keeping only references accepted by `keep`.
    pub fn filtered(&self, mut keep: impl FnMut(Weekday, &MealReference) -> bool) -> Self {
        Self {
            days: self.days.map(|day, refs| {
                refs.iter()
                    .filter(|reference| keep(day, *reference))
                    .copied()
                    .collect()
            }),
        }
    }

    pub fn placement_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.placement_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_selection_has_seven_empty_days() {
        let selection = WeeklySelection::new();
        assert_eq!(selection.days().count(), 7);
        assert!(selection.is_empty());
    }

    #[test]
    fn add_and_remove_instances() {
        let meal = Meal::catalog("Commons", "Pasta", 7.0);
        let mut selection = WeeklySelection::new();
        let first = selection.add(Weekday::Monday, &meal);
        selection.add(Weekday::Monday, &meal);
        assert_eq!(selection.day(Weekday::Monday).len(), 2);

        assert!(selection.remove_instance(first.instance_id));
        assert!(!selection.remove_instance(first.instance_id));
        assert_eq!(selection.placement_count(), 1);
    }

    #[test]
    fn partial_json_deserializes_to_full_week() {
        let meal = Meal::catalog("Commons", "Pasta", 7.0);
        let json = format!(
            r#"{{"tuesday": [{{"id": "{}", "instance_id": "{}"}}]}}"#,
            meal.id,
            Uuid::new_v4()
        );
        let selection: WeeklySelection = serde_json::from_str(&json).unwrap();
        assert_eq!(selection.day(Weekday::Tuesday).len(), 1);
        assert!(selection.day(Weekday::Sunday).is_empty());
    }
}
