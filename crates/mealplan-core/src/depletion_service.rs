//! Day-by-day balance simulation.
//!
//! Weeks off are consumed as one contiguous block starting at the horizon's
//! start date: the first `weeks_off * 7` calendar days accrue no cost.

use chrono::{Datelike, NaiveDate};
use mealplan_domain::{MealCatalog, PlanningHorizon, Weekday, WeekdayAmounts, WeeklySelection};
use tracing::debug;

use crate::{
    aggregation_service::AggregationService,
    calendar::{date_range, is_within_weeks_off},
    discount_service::Pricing,
};

/// Result of walking a planning horizon with a running balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepletionOutcome {
    /// A date has not been entered yet.
    Incomplete,
    /// The start date is after the end date.
    InvalidRange,
    /// The balance first reached zero or below on `date`.
    Exhausted { date: NaiveDate, balance: f64 },
    /// The horizon ended with `remaining` still available.
    NeverExhausted { end_date: NaiveDate, remaining: f64 },
}

impl DepletionOutcome {
    pub fn exhaustion_date(&self) -> Option<NaiveDate> {
        match self {
            DepletionOutcome::Exhausted { date, .. } => Some(*date),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, DepletionOutcome::Exhausted { .. })
    }
}

/// One day of the simulated balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub spent: f64,
    pub balance: f64,
    /// Whether the day fell inside the weeks-off block.
    pub off: bool,
}

pub struct DepletionService;

impl DepletionService {
    /// Walks the horizon and stops at the first date the balance is `<= 0`.
    pub fn simulate(
        selection: &WeeklySelection,
        pricing: &Pricing<'_>,
        catalog: &MealCatalog,
        horizon: &PlanningHorizon,
    ) -> DepletionOutcome {
        let Some((start, end)) = horizon.dates() else {
            return DepletionOutcome::Incomplete;
        };
        if start > end {
            return DepletionOutcome::InvalidRange;
        }

        let daily_costs = AggregationService::weekday_totals(selection, pricing, catalog);
        let mut remaining = horizon.starting_balance;
        for point in walk(&daily_costs, start, end, horizon.weeks_off, remaining) {
            remaining = point.balance;
            if point.balance <= 0.0 {
                debug!(
                    "balance exhausted on {} ({:.2} remaining)",
                    point.date, point.balance
                );
                return DepletionOutcome::Exhausted {
                    date: point.date,
                    balance: point.balance,
                };
            }
        }
        debug!("balance lasts through {} ({:.2} remaining)", end, remaining);
        DepletionOutcome::NeverExhausted {
            end_date: end,
            remaining,
        }
    }

    /// Date the balance runs out, or `end` when it lasts the whole horizon.
    ///
    /// `end` is also returned for an inverted range, where no day is walked.
    /// Use [`DepletionService::simulate`] to tell these cases apart.
    pub fn date_when_balance_runs_out(
        selection: &WeeklySelection,
        pricing: &Pricing<'_>,
        catalog: &MealCatalog,
        start: NaiveDate,
        end: NaiveDate,
        starting_balance: f64,
        weeks_off: u32,
    ) -> NaiveDate {
        let horizon = PlanningHorizon::new(start, end)
            .with_weeks_off(weeks_off)
            .with_starting_balance(starting_balance);
        Self::simulate(selection, pricing, catalog, &horizon)
            .exhaustion_date()
            .unwrap_or(end)
    }

    /// Balance after every date of the horizon, without stopping at zero.
    pub fn balance_timeline(
        selection: &WeeklySelection,
        pricing: &Pricing<'_>,
        catalog: &MealCatalog,
        horizon: &PlanningHorizon,
    ) -> Vec<BalancePoint> {
        let Some((start, end)) = horizon.dates() else {
            return Vec::new();
        };
        let daily_costs = AggregationService::weekday_totals(selection, pricing, catalog);
        walk(
            &daily_costs,
            start,
            end,
            horizon.weeks_off,
            horizon.starting_balance,
        )
        .collect()
    }
}

fn walk(
    daily_costs: &WeekdayAmounts,
    start: NaiveDate,
    end: NaiveDate,
    weeks_off: u32,
    starting_balance: f64,
) -> impl Iterator<Item = BalancePoint> + '_ {
    date_range(start, end).scan(starting_balance, move |balance, date| {
        let weekday = Weekday::from(date.weekday());
        let off = is_within_weeks_off(start, date, weeks_off);
        let spent = if off { 0.0 } else { daily_costs[weekday] };
        *balance -= spent;
        Some(BalancePoint {
            date,
            weekday,
            spent,
            balance: *balance,
            off,
        })
    })
}
