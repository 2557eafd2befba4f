//! Indexed snapshot of standard and custom meals.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    common::Identifiable,
    meal::{Meal, MealReference},
};

#[derive(Debug, Clone, Default)]
/// Standard catalog plus custom meals, with an id lookup built once per snapshot.
///
/// When two meals share an id the first one supplied wins, standard meals first.
pub struct MealCatalog {
    meals: Vec<Meal>,
    index: HashMap<Uuid, usize>,
}

impl MealCatalog {
    pub fn new(
        standard: impl IntoIterator<Item = Meal>,
        custom: impl IntoIterator<Item = Meal>,
    ) -> Self {
        let meals: Vec<Meal> = standard.into_iter().chain(custom).collect();
        let mut index = HashMap::with_capacity(meals.len());
        for (position, meal) in meals.iter().enumerate() {
            index.entry(meal.id()).or_insert(position);
        }
        Self { meals, index }
    }

    pub fn from_meals(meals: impl IntoIterator<Item = Meal>) -> Self {
        Self::new(meals, Vec::new())
    }

    pub fn get(&self, id: Uuid) -> Option<&Meal> {
        self.index.get(&id).and_then(|pos| self.meals.get(*pos))
    }

    /// Dereferences `reference`; `None` means the reference is dangling.
    pub fn resolve(&self, reference: &MealReference) -> Option<&Meal> {
        self.get(reference.id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.index.contains_key(&id)
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
