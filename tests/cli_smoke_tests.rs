mod common;

use assert_cmd::Command;
use common::{dangling_reference, TestEnv};
use mealplan::{
    domain::{PlanKind, Weekday},
    storage::save_plan_to_path,
};
use predicates::{prelude::PredicateBooleanExt, str::contains};

const BIN_NAME: &str = "mealplan_cli";

fn cli(env: &TestEnv) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.arg("--plain").arg("--config").arg(&env.config_path);
    cmd
}

fn with_plan(env: &TestEnv, command: &str) -> Command {
    let mut cmd = cli(env);
    cmd.arg(command)
        .arg("--plan")
        .arg(&env.plan_path)
        .arg("--catalog")
        .arg(&env.catalog_path);
    cmd
}

#[test]
fn version_prints_build_metadata() {
    Command::cargo_bin(BIN_NAME)
        .expect("binary exists")
        .arg("version")
        .assert()
        .success()
        .stdout(contains("mealplan").and(contains(env!("CARGO_PKG_VERSION"))));
}

#[test]
fn runout_reports_exhaustion_date() {
    let env = TestEnv::new();
    with_plan(&env, "runout")
        .assert()
        .success()
        .stdout(contains("runs out on Wed 2024-05-08"));
}

#[test]
fn runout_reports_balance_that_lasts() {
    let env = TestEnv::new();
    let plan = env.write_plan("rich.json", |plan| plan.horizon.starting_balance = 10_000.0);
    cli(&env)
        .arg("runout")
        .arg("--plan")
        .arg(&plan)
        .arg("--catalog")
        .arg(&env.catalog_path)
        .assert()
        .success()
        .stdout(contains("lasts through Sat 2024-06-08"));
}

#[test]
fn project_prints_totals_and_weekday_table() {
    let env = TestEnv::new();
    with_plan(&env, "project")
        .assert()
        .success()
        .stdout(
            contains("=== Projection ===")
                .and(contains("Billable days: 35"))
                .and(contains("Grand total: $"))
                .and(contains("Remaining balance: -$")),
        );
}

#[test]
fn plan_kind_flag_is_shown_in_projection() {
    let env = TestEnv::new();
    with_plan(&env, "project")
        .arg("--plan-kind")
        .arg("dining-dollars")
        .assert()
        .success()
        .stdout(contains(format!("({})", PlanKind::DiningDollars)));
}

#[test]
fn timeline_honours_limit() {
    let env = TestEnv::new();
    with_plan(&env, "timeline")
        .arg("--limit")
        .arg("3")
        .assert()
        .success()
        .stdout(
            contains("Sun 2024-05-05")
                .and(contains("Tue 2024-05-07"))
                .and(contains("2024-05-08").not())
                .and(contains("32 more day(s)")),
        );
}

#[test]
fn check_reports_missing_meals() {
    let env = TestEnv::new();
    let plan = env.write_plan("dangling.json", |plan| {
        plan.selection
            .push_reference(Weekday::Friday, dangling_reference());
    });
    cli(&env)
        .arg("check")
        .arg("--plan")
        .arg(&plan)
        .arg("--catalog")
        .arg(&env.catalog_path)
        .assert()
        .success()
        .stdout(contains("Friday: meal").and(contains("1 issue(s) found.")));
}

#[test]
fn check_without_catalog_flags_every_standard_meal() {
    let env = TestEnv::new();
    cli(&env)
        .arg("check")
        .arg("--plan")
        .arg(&env.plan_path)
        .assert()
        .success()
        .stdout(contains("missing from the catalog"));
}

#[test]
fn saved_plans_are_listed_and_loaded_by_name() {
    let env = TestEnv::new();
    let plan = mealplan::storage::load_plan_from_path(&env.plan_path).expect("load plan");
    save_plan_to_path(&plan, &env.plans_dir().join("summer.json")).expect("save named plan");

    cli(&env).arg("list").assert().success().stdout(contains("summer"));

    cli(&env)
        .arg("runout")
        .arg("--plan")
        .arg("summer")
        .arg("--catalog")
        .arg(&env.catalog_path)
        .assert()
        .success()
        .stdout(contains("2024-05-08"));
}

#[test]
fn missing_dates_fail_with_message() {
    let env = TestEnv::new();
    let plan = env.write_plan("undated.json", |plan| plan.horizon.end_date = None);
    cli(&env)
        .arg("project")
        .arg("--plan")
        .arg(&plan)
        .assert()
        .failure()
        .stderr(contains("Error: Plan `Summer Session` has no start or end date"));
}

#[test]
fn inverted_range_fails_runout() {
    let env = TestEnv::new();
    let plan = env.write_plan("inverted.json", |plan| {
        plan.horizon.start_date = Some(common::date(2024, 7, 1));
    });
    cli(&env)
        .arg("runout")
        .arg("--plan")
        .arg(&plan)
        .assert()
        .failure()
        .stderr(contains("starts on 2024-07-01 after it ends on 2024-06-08"));
}

#[test]
fn unknown_plan_name_is_an_error() {
    let env = TestEnv::new();
    cli(&env)
        .arg("project")
        .arg("--plan")
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn plan_root_is_created_inside_the_test_directory() {
    let env = TestEnv::new();
    cli(&env).arg("list").assert().success();
    assert!(env.root().join("plans").is_dir());
}

#[test]
fn json_runout_is_machine_readable() {
    let env = TestEnv::new();
    let output = with_plan(&env, "runout")
        .arg("--json")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["status"], "exhausted");
    assert_eq!(value["date"], "2024-05-08");
}

#[test]
fn json_projection_breaks_down_weekdays() {
    let env = TestEnv::new();
    let output = with_plan(&env, "project")
        .arg("--json")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["billable_days"], 35);
    assert_eq!(value["occurrences"]["sunday"], 5);
    assert_eq!(value["plan_kind"], "a_la_carte");
}
