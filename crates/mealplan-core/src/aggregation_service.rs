use mealplan_domain::{Meal, MealCatalog, Weekday, WeekdayAmounts, WeekdayCounts, WeeklySelection};
use tracing::debug;

use crate::discount_service::Pricing;

pub struct AggregationService;

impl AggregationService {
    /// Sums the discounted price of `meals` and multiplies it by `occurrences`.
    pub fn day_total<'m>(
        meals: impl IntoIterator<Item = &'m Meal>,
        occurrences: u32,
        pricing: &Pricing<'_>,
    ) -> f64 {
        let single: f64 = meals.into_iter().map(|meal| pricing.price_of(meal)).sum();
        single * f64::from(occurrences)
    }

    /// Meals planned for `day`, skipping references missing from `catalog`.
    pub fn resolve_day<'c>(
        selection: &WeeklySelection,
        day: Weekday,
        catalog: &'c MealCatalog,
    ) -> Vec<&'c Meal> {
        selection
            .day(day)
            .iter()
            .filter_map(|reference| {
                let meal = catalog.resolve(reference);
                if meal.is_none() {
                    debug!(
                        "skipping dangling meal reference {} on {}",
                        reference.id, day
                    );
                }
                meal
            })
            .collect()
    }

    /// Grand total of the weekly template repeated `counts[day]` times per weekday.
    pub fn weekly_total(
        selection: &WeeklySelection,
        counts: &WeekdayCounts,
        pricing: &Pricing<'_>,
        catalog: &MealCatalog,
    ) -> f64 {
        Weekday::ALL
            .into_iter()
            .map(|day| {
                let meals = Self::resolve_day(selection, day, catalog);
                Self::day_total(meals, counts[day], pricing)
            })
            .sum()
    }

    /// Cost of a single occurrence of each weekday slot.
    pub fn weekday_totals(
        selection: &WeeklySelection,
        pricing: &Pricing<'_>,
        catalog: &MealCatalog,
    ) -> WeekdayAmounts {
        WeekdayAmounts::from_fn(|day| {
            Self::day_total(Self::resolve_day(selection, day, catalog), 1, pricing)
        })
    }

    /// Cost of one full template week.
    pub fn week_cost(
        selection: &WeeklySelection,
        pricing: &Pricing<'_>,
        catalog: &MealCatalog,
    ) -> f64 {
        Self::weekly_total(selection, &WeekdayCounts::filled(1), pricing, catalog)
    }
}
