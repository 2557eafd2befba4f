//! Grand-total projection over a planning horizon.

use chrono::NaiveDate;
use mealplan_domain::{MealCatalog, PlanningHorizon, WeekdayAmounts, WeekdayCounts, WeeklySelection};
use tracing::debug;

use crate::{
    aggregation_service::AggregationService,
    calendar::{days_between, weekday_occurrences, INVALID_RANGE},
    discount_service::Pricing,
};

/// Spending breakdown for a complete, valid planning horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub occurrences: WeekdayCounts,
    pub total: f64,
    /// Horizon spend attributed to each weekday slot.
    pub per_weekday: WeekdayAmounts,
    /// Cost of one occurrence of each weekday slot.
    pub daily_costs: WeekdayAmounts,
    pub week_cost: f64,
    pub billable_days: u32,
    pub average_daily: f64,
    pub remaining_balance: f64,
}

pub struct ProjectionService;

impl ProjectionService {
    /// Total projected spend; zero while a date is missing or the range is inverted.
    pub fn grand_total(
        horizon: &PlanningHorizon,
        selection: &WeeklySelection,
        pricing: &Pricing<'_>,
        catalog: &MealCatalog,
    ) -> f64 {
        let Some((start, end)) = horizon.dates() else {
            return 0.0;
        };
        if days_between(start, end) == INVALID_RANGE {
            return 0.0;
        }
        let counts = weekday_occurrences(start, end, horizon.weeks_off);
        AggregationService::weekly_total(selection, &counts, pricing, catalog)
    }

    /// Full breakdown, or `None` while the horizon is incomplete or inverted.
    pub fn project(
        horizon: &PlanningHorizon,
        selection: &WeeklySelection,
        pricing: &Pricing<'_>,
        catalog: &MealCatalog,
    ) -> Option<Projection> {
        let (start, end) = horizon.dates()?;
        if days_between(start, end) == INVALID_RANGE {
            return None;
        }
        let occurrences = weekday_occurrences(start, end, horizon.weeks_off);
        let daily_costs = AggregationService::weekday_totals(selection, pricing, catalog);
        let per_weekday = daily_costs.map(|day, cost| cost * f64::from(occurrences[day]));
        let total = per_weekday.total();
        let billable_days = occurrences.total();
        let average_daily = if billable_days == 0 {
            0.0
        } else {
            total / f64::from(billable_days)
        };

        debug!(
            "projected {:.2} over {} billable day(s) from {} to {}",
            total, billable_days, start, end
        );

        Some(Projection {
            start_date: start,
            end_date: end,
            occurrences,
            total,
            per_weekday,
            week_cost: daily_costs.total(),
            daily_costs,
            billable_days,
            average_daily,
            remaining_balance: horizon.starting_balance - total,
        })
    }
}
