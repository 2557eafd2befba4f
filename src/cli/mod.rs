//! Command-line front end over the calculation engine.

pub mod args;
pub mod output;
pub mod report;
pub mod table;

use std::path::Path;

use clap::Parser;
use mealplan_config::{Config, ConfigManager};
use mealplan_core::{
    storage::PlanStorage, DepletionService, Pricing, ProjectionService,
    SelectionService,
};
use mealplan_domain::{BudgetPlan, DiscountTable, MealCatalog, PlanKind};
use mealplan_storage_json::{load_catalog_from_path, load_plan_from_path, JsonPlanStorage};
use serde::Serialize;
use tracing::debug;

use crate::{errors::AppError, format::CurrencyFormat, utils::build_info};

pub use args::{Cli, Command, PlanArgs};
use output::OutputPreferences;

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> Result<(), AppError> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    if let Command::Version = cli.command {
        println!("{}", build_info::current().summary());
        return Ok(());
    }

    let manager = match &cli.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::default_location()?,
    };
    let config = manager.load()?;
    output::set_preferences(OutputPreferences {
        plain_mode: cli.plain || !config.ui_color_enabled,
    });
    debug!("using configuration at {}", manager.config_path().display());

    let session = Session {
        config,
        json: cli.json,
    };
    match cli.command {
        Command::Project(args) => project(&args, &session),
        Command::Runout(args) => runout(&args, &session),
        Command::Timeline { plan, limit } => timeline(&plan, limit, &session),
        Command::Check(args) => check(&args, &session),
        Command::List => list(&session.config),
        Command::Version => Ok(()),
    }
}

struct Session {
    config: Config,
    json: bool,
}

fn print_json(value: &impl Serialize) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Everything a report command needs, resolved from arguments and config.
struct PlanContext {
    plan: BudgetPlan,
    catalog: MealCatalog,
    table: DiscountTable,
    plan_kind: PlanKind,
    currency: CurrencyFormat,
}

impl PlanContext {
    fn load(args: &PlanArgs, config: &Config) -> Result<Self, AppError> {
        let plan = load_plan(&args.plan, config)?;
        let standard = match &args.catalog {
            Some(path) => load_catalog_from_path(path)?,
            None => Vec::new(),
        };
        let catalog = MealCatalog::new(standard, plan.custom_meals.clone());
        let plan_kind = args
            .plan_kind
            .map(PlanKind::from)
            .unwrap_or_else(|| plan.plan_kind_or(config.default_plan_kind));
        Ok(Self {
            catalog,
            table: config.discount_table()?,
            plan_kind,
            currency: CurrencyFormat::new(config.currency.clone()),
            plan,
        })
    }

    fn pricing(&self) -> Pricing<'_> {
        Pricing::new(&self.table, self.plan_kind)
    }

    fn require_valid_horizon(&self) -> Result<(), AppError> {
        match self.plan.horizon.dates() {
            None => Err(AppError::IncompleteHorizon(self.plan.name.clone())),
            Some((start, end)) if start > end => Err(AppError::InvalidRange {
                name: self.plan.name.clone(),
                start,
                end,
            }),
            Some(_) => Ok(()),
        }
    }
}

/// Treats `reference` as a path when it exists, otherwise as a saved plan name.
fn load_plan(reference: &str, config: &Config) -> Result<BudgetPlan, AppError> {
    let path = Path::new(reference);
    if path.is_file() {
        return Ok(load_plan_from_path(path)?);
    }
    let storage = JsonPlanStorage::new(config.resolve_default_plan_root())?;
    Ok(storage.load_plan(reference)?)
}

fn project(args: &PlanArgs, session: &Session) -> Result<(), AppError> {
    let ctx = PlanContext::load(args, &session.config)?;
    ctx.require_valid_horizon()?;
    let pricing = ctx.pricing();
    let projection = ProjectionService::project(
        &ctx.plan.horizon,
        &ctx.plan.selection,
        &pricing,
        &ctx.catalog,
    )
    .ok_or_else(|| AppError::IncompleteHorizon(ctx.plan.name.clone()))?;

    if session.json {
        return print_json(&report::ProjectionSummary::new(
            &ctx.plan.name,
            ctx.plan_kind,
            &ctx.plan.horizon,
            &projection,
        ));
    }

    output::section("Projection");
    println!(
        "{}",
        report::render_projection(
            &ctx.plan.name,
            ctx.plan_kind,
            &ctx.plan.horizon,
            &projection,
            &ctx.currency,
        )
    );
    if projection.remaining_balance < 0.0 {
        output::warning("Projected spending exceeds the starting balance.");
    }
    Ok(())
}

fn runout(args: &PlanArgs, session: &Session) -> Result<(), AppError> {
    let ctx = PlanContext::load(args, &session.config)?;
    let outcome = DepletionService::simulate(
        &ctx.plan.selection,
        &ctx.pricing(),
        &ctx.catalog,
        &ctx.plan.horizon,
    );
    let Some(summary) = report::OutcomeSummary::from_outcome(&outcome) else {
        return ctx.require_valid_horizon();
    };
    if session.json {
        return print_json(&summary);
    }
    let text = report::render_outcome(&outcome, &ctx.currency);
    if outcome.is_exhausted() {
        output::warning(text);
    } else {
        output::success(text);
    }
    Ok(())
}

fn timeline(args: &PlanArgs, limit: Option<usize>, session: &Session) -> Result<(), AppError> {
    let ctx = PlanContext::load(args, &session.config)?;
    ctx.require_valid_horizon()?;
    let points = DepletionService::balance_timeline(
        &ctx.plan.selection,
        &ctx.pricing(),
        &ctx.catalog,
        &ctx.plan.horizon,
    );
    if session.json {
        return print_json(&report::timeline_rows(&points, limit));
    }
    output::section("Balance timeline");
    println!("{}", report::render_timeline(&points, limit, &ctx.currency));
    Ok(())
}

fn check(args: &PlanArgs, session: &Session) -> Result<(), AppError> {
    let ctx = PlanContext::load(args, &session.config)?;
    let issues = SelectionService::issues(&ctx.plan.selection, &ctx.catalog);
    if session.json {
        return print_json(&report::render_issues(&issues));
    }
    if issues.is_empty() {
        output::success(format!(
            "All {} placement(s) resolve to available meals.",
            ctx.plan.selection.placement_count()
        ));
        return Ok(());
    }
    for line in report::render_issues(&issues) {
        output::warning(line);
    }
    output::info(format!("{} issue(s) found.", issues.len()));
    Ok(())
}

fn list(config: &Config) -> Result<(), AppError> {
    let storage = JsonPlanStorage::new(config.resolve_default_plan_root())?;
    let names = storage.list_plans()?;
    if names.is_empty() {
        output::info(format!(
            "No saved plans in {}",
            storage.plans_dir().display()
        ));
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
