#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use mealplan::{
    config::{Config, ConfigManager},
    domain::{BudgetPlan, Meal, MealReference, PlanKind, PlanningHorizon, Weekday},
    storage::{save_catalog_to_path, save_plan_to_path},
};
use tempfile::TempDir;
use uuid::Uuid;

pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];
pub const WEEKEND: [Weekday; 2] = [Weekday::Saturday, Weekday::Sunday];

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_meals() -> Vec<Meal> {
    vec![
        Meal::catalog("Dining Commons", "Chicken Wrap", 6.55),
        Meal::catalog("Student Union Grill", "Rice Bowl", 8.0),
        Meal::catalog("Campus Market", "Bagel", 4.75),
        Meal::catalog("Library Cafe", "Coffee", 2.25),
    ]
}

/// Weekdays: wrap + bowl, weekends: bagel + coffee, 35.00 from 2024-05-05 to 2024-06-08.
pub fn sample_plan(meals: &[Meal]) -> BudgetPlan {
    let mut plan = BudgetPlan::new("Summer Session");
    plan.plan_kind = Some(PlanKind::ALaCarte);
    plan.horizon =
        PlanningHorizon::new(date(2024, 5, 5), date(2024, 6, 8)).with_starting_balance(35.0);
    plan.selection.add_to_days(WEEKDAYS, &meals[0]);
    plan.selection.add_to_days(WEEKDAYS, &meals[1]);
    plan.selection.add_to_days(WEEKEND, &meals[2]);
    plan.selection.add_to_days(WEEKEND, &meals[3]);
    plan
}

/// Isolated config, catalog and plan files inside a temporary directory.
pub struct TestEnv {
    dir: TempDir,
    pub config_path: PathBuf,
    pub catalog_path: PathBuf,
    pub plan_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let config_path = dir.path().join("config.json");
        let catalog_path = dir.path().join("catalog.json");
        let plan_path = dir.path().join("plan.json");

        let config = Config {
            default_plan_root: Some(dir.path().join("plans")),
            ui_color_enabled: false,
            ..Config::default()
        };
        ConfigManager::new(config_path.clone())
            .save(&config)
            .expect("save config");

        let meals = sample_meals();
        save_catalog_to_path(&meals, &catalog_path).expect("save catalog");
        save_plan_to_path(&sample_plan(&meals), &plan_path).expect("save plan");

        Self {
            dir,
            config_path,
            catalog_path,
            plan_path,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn plans_dir(&self) -> PathBuf {
        self.dir.path().join("plans")
    }

    /// Writes a variant of the sample plan under `file_name` and returns its path.
    pub fn write_plan(&self, file_name: &str, edit: impl FnOnce(&mut BudgetPlan)) -> PathBuf {
        let mut plan = sample_plan(&sample_meals());
        edit(&mut plan);
        let path = self.dir.path().join(file_name);
        save_plan_to_path(&plan, &path).expect("save plan variant");
        path
    }
}

pub fn dangling_reference() -> MealReference {
    MealReference::new(Uuid::new_v4())
}
