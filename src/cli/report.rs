//! Text renderings of engine results.
//!
//! Every function returns a `String` so commands decide where it goes.

use chrono::NaiveDate;
use mealplan_core::{BalancePoint, DepletionOutcome, Projection, SelectionIssue};
use mealplan_domain::{PlanKind, PlanningHorizon, Weekday, WeekdayAmounts, WeekdayCounts};
use serde::Serialize;

use crate::{
    cli::table::{Table, TableColumn},
    format::{format_currency, format_date, CurrencyFormat},
};

pub fn render_projection(
    name: &str,
    plan_kind: PlanKind,
    horizon: &PlanningHorizon,
    projection: &Projection,
    currency: &CurrencyFormat,
) -> String {
    let money = |amount: f64| format_currency(amount, currency);
    let mut lines = vec![
        format!("Plan: {name} ({plan_kind})"),
        format!(
            "Horizon: {} to {} ({} week(s) off)",
            format_date(projection.start_date),
            format_date(projection.end_date),
            horizon.weeks_off
        ),
        format!("Billable days: {}", projection.billable_days),
        format!("Grand total: {}", money(projection.total)),
        format!("Starting balance: {}", money(horizon.starting_balance)),
        format!("Remaining balance: {}", money(projection.remaining_balance)),
        format!("Average per day: {}", money(projection.average_daily)),
        format!("One week of meals: {}", money(projection.week_cost)),
        String::new(),
    ];

    let mut table = Table::new(vec![
        TableColumn::left("Day"),
        TableColumn::right("Per day"),
        TableColumn::right("Days"),
        TableColumn::right("Total"),
    ]);
    for day in Weekday::ALL {
        table.push_row(vec![
            day.short_label().to_string(),
            money(projection.daily_costs[day]),
            projection.occurrences[day].to_string(),
            money(projection.per_weekday[day]),
        ]);
    }
    lines.push(table.render());
    lines.join("\n")
}

pub fn render_outcome(outcome: &DepletionOutcome, currency: &CurrencyFormat) -> String {
    match outcome {
        DepletionOutcome::Exhausted { date, balance } => format!(
            "Balance runs out on {} ({} left after that day)",
            format_date(*date),
            format_currency(*balance, currency)
        ),
        DepletionOutcome::NeverExhausted {
            end_date,
            remaining,
        } => format!(
            "Balance lasts through {} with {} remaining",
            format_date(*end_date),
            format_currency(*remaining, currency)
        ),
        DepletionOutcome::Incomplete => "Plan has no start or end date".to_string(),
        DepletionOutcome::InvalidRange => "Plan starts after it ends".to_string(),
    }
}

/// Daily balances, truncated to the first `limit` dates when given.
pub fn render_timeline(
    points: &[BalancePoint],
    limit: Option<usize>,
    currency: &CurrencyFormat,
) -> String {
    let shown = limit.unwrap_or(points.len()).min(points.len());
    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::right("Spent"),
        TableColumn::right("Balance"),
        TableColumn::left("Note"),
    ]);
    for point in &points[..shown] {
        let note = if point.off {
            "week off"
        } else if point.balance <= 0.0 {
            "exhausted"
        } else {
            ""
        };
        table.push_row(vec![
            format_date(point.date),
            format_currency(point.spent, currency),
            format_currency(point.balance, currency),
            note.to_string(),
        ]);
    }

    let mut out = table.render();
    if shown < points.len() {
        out.push_str(&format!("\n... {} more day(s)", points.len() - shown));
    }
    out
}

pub fn render_issues(issues: &[SelectionIssue]) -> Vec<String> {
    issues.iter().map(ToString::to_string).collect()
}

/// Machine-readable projection emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct ProjectionSummary<'a> {
    pub plan: &'a str,
    pub plan_kind: PlanKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weeks_off: u32,
    pub starting_balance: f64,
    pub total: f64,
    pub remaining_balance: f64,
    pub average_daily: f64,
    pub week_cost: f64,
    pub billable_days: u32,
    pub occurrences: &'a WeekdayCounts,
    pub daily_costs: &'a WeekdayAmounts,
    pub per_weekday: &'a WeekdayAmounts,
}

impl<'a> ProjectionSummary<'a> {
    pub fn new(
        plan: &'a str,
        plan_kind: PlanKind,
        horizon: &PlanningHorizon,
        projection: &'a Projection,
    ) -> Self {
        Self {
            plan,
            plan_kind,
            start_date: projection.start_date,
            end_date: projection.end_date,
            weeks_off: horizon.weeks_off,
            starting_balance: horizon.starting_balance,
            total: projection.total,
            remaining_balance: projection.remaining_balance,
            average_daily: projection.average_daily,
            week_cost: projection.week_cost,
            billable_days: projection.billable_days,
            occurrences: &projection.occurrences,
            daily_costs: &projection.daily_costs,
            per_weekday: &projection.per_weekday,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeSummary {
    Exhausted { date: NaiveDate, balance: f64 },
    NeverExhausted { end_date: NaiveDate, remaining: f64 },
}

impl OutcomeSummary {
    /// `None` for outcomes that carry no dates.
    pub fn from_outcome(outcome: &DepletionOutcome) -> Option<Self> {
        match *outcome {
            DepletionOutcome::Exhausted { date, balance } => {
                Some(OutcomeSummary::Exhausted { date, balance })
            }
            DepletionOutcome::NeverExhausted {
                end_date,
                remaining,
            } => Some(OutcomeSummary::NeverExhausted {
                end_date,
                remaining,
            }),
            DepletionOutcome::Incomplete | DepletionOutcome::InvalidRange => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TimelineRow {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub spent: f64,
    pub balance: f64,
    pub off: bool,
}

impl From<&BalancePoint> for TimelineRow {
    fn from(point: &BalancePoint) -> Self {
        Self {
            date: point.date,
            weekday: point.weekday,
            spent: point.spent,
            balance: point.balance,
            off: point.off,
        }
    }
}

pub fn timeline_rows(points: &[BalancePoint], limit: Option<usize>) -> Vec<TimelineRow> {
    points
        .iter()
        .take(limit.unwrap_or(points.len()))
        .map(TimelineRow::from)
        .collect()
}
