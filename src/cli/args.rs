use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mealplan_domain::PlanKind;

#[derive(Debug, Parser)]
#[command(
    name = "mealplan_cli",
    version,
    about = "Projects dining-plan spending and when a balance runs out"
)]
pub struct Cli {
    /// Configuration file to use instead of the platform default.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colours and box-drawing characters.
    #[arg(long, global = true)]
    pub plain: bool,

    /// Emit report commands as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Grand total, remaining balance and per-weekday breakdown.
    Project(PlanArgs),
    /// Date the starting balance runs out.
    Runout(PlanArgs),
    /// Balance after every day of the horizon.
    Timeline {
        #[command(flatten)]
        plan: PlanArgs,
        /// Show only the first N days.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Report meals that are missing or not offered on their day.
    Check(PlanArgs),
    /// List plans saved under the configured plan directory.
    List,
    /// Print build information.
    Version,
}

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Plan file, or the name of a saved plan.
    #[arg(long, value_name = "PLAN")]
    pub plan: String,

    /// Catalog of standard meals (JSON array).
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override the plan's discount regime.
    #[arg(long, value_enum)]
    pub plan_kind: Option<PlanKindArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanKindArg {
    DiningDollars,
    ALaCarte,
}

impl From<PlanKindArg> for PlanKind {
    fn from(arg: PlanKindArg) -> Self {
        match arg {
            PlanKindArg::DiningDollars => PlanKind::DiningDollars,
            PlanKindArg::ALaCarte => PlanKind::ALaCarte,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mealplan_cli",
            "timeline",
            "--plan",
            "fall.json",
            "--limit",
            "5",
            "--plain",
            "--plan-kind",
            "a-la-carte",
        ])
        .expect("valid arguments");

        assert!(cli.plain);
        match cli.command {
            Command::Timeline { plan, limit } => {
                assert_eq!(plan.plan, "fall.json");
                assert_eq!(limit, Some(5));
                assert_eq!(plan.plan_kind.map(PlanKind::from), Some(PlanKind::ALaCarte));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn plan_is_required_for_reports() {
        assert!(Cli::try_parse_from(["mealplan_cli", "project"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
