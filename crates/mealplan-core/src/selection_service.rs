use std::fmt;

use mealplan_domain::{MealCatalog, MealReference, Weekday, WeeklySelection};
use uuid::Uuid;

/// A placement in a weekly selection that the calculation silently tolerates
/// but a user should be told about.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionIssue {
    /// The referenced meal is no longer in the catalog or custom meals.
    Dangling {
        weekday: Weekday,
        reference: MealReference,
    },
    /// The meal is not offered on the weekday it was placed on.
    Unavailable {
        weekday: Weekday,
        reference: MealReference,
        meal_name: String,
    },
}

impl SelectionIssue {
    pub fn weekday(&self) -> Weekday {
        match self {
            SelectionIssue::Dangling { weekday, .. }
            | SelectionIssue::Unavailable { weekday, .. } => *weekday,
        }
    }

    pub fn instance_id(&self) -> Uuid {
        match self {
            SelectionIssue::Dangling { reference, .. }
            | SelectionIssue::Unavailable { reference, .. } => reference.instance_id,
        }
    }
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionIssue::Dangling { weekday, reference } => write!(
                f,
                "{weekday}: meal {} is missing from the catalog",
                reference.id
            ),
            SelectionIssue::Unavailable {
                weekday, meal_name, ..
            } => write!(f, "{weekday}: `{meal_name}` is not offered on this day"),
        }
    }
}

pub struct SelectionService;

impl SelectionService {
    /// Lists dangling and unavailable placements in weekday order.
    pub fn issues(selection: &WeeklySelection, catalog: &MealCatalog) -> Vec<SelectionIssue> {
        let mut issues = Vec::new();
        for (weekday, references) in selection.days() {
            for reference in references {
                match catalog.resolve(reference) {
                    None => issues.push(SelectionIssue::Dangling {
                        weekday,
                        reference: *reference,
                    }),
                    Some(meal) if !meal.is_available_on(weekday) => {
                        issues.push(SelectionIssue::Unavailable {
                            weekday,
                            reference: *reference,
                            meal_name: meal.name.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        issues
    }

    /// A copy of `selection` without references missing from `catalog`.
    pub fn prune_dangling(selection: &WeeklySelection, catalog: &MealCatalog) -> WeeklySelection {
        selection.filtered(|_, reference| catalog.resolve(reference).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_domain::Meal;

    #[test]
    fn reports_dangling_and_unavailable_placements() {
        let brunch = Meal::catalog("Commons", "Brunch", 9.0).with_unavailable([Weekday::Monday]);
        let catalog = MealCatalog::from_meals(vec![brunch.clone()]);
        let mut selection = WeeklySelection::new();
        selection.add(Weekday::Sunday, &brunch);
        let misplaced = selection.add(Weekday::Monday, &brunch);
        let stale = MealReference::new(Uuid::new_v4());
        selection.push_reference(Weekday::Friday, stale);

        let issues = SelectionService::issues(&selection, &catalog);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].weekday(), Weekday::Monday);
        assert_eq!(issues[0].instance_id(), misplaced.instance_id);
        assert!(issues[0].to_string().contains("Brunch"));
        assert_eq!(
            issues[1],
            SelectionIssue::Dangling {
                weekday: Weekday::Friday,
                reference: stale,
            }
        );
    }

    #[test]
    fn prune_dangling_keeps_resolvable_references() {
        let soup = Meal::catalog("Commons", "Soup", 4.0);
        let catalog = MealCatalog::from_meals(vec![soup.clone()]);
        let mut selection = WeeklySelection::new();
        selection.add(Weekday::Tuesday, &soup);
        selection.push_reference(Weekday::Tuesday, MealReference::new(Uuid::new_v4()));

        let pruned = SelectionService::prune_dangling(&selection, &catalog);
        assert_eq!(pruned.day(Weekday::Tuesday).len(), 1);
        assert_eq!(selection.day(Weekday::Tuesday).len(), 2);
        assert!(SelectionService::issues(&pruned, &catalog).is_empty());
    }
}
