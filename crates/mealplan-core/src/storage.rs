use std::path::Path;

use mealplan_domain::BudgetPlan;

use crate::CoreError;

/// Persistence contract for saved budget plans.
pub trait PlanStorage {
    fn save_plan(&self, name: &str, plan: &BudgetPlan) -> Result<(), CoreError>;
    fn load_plan(&self, name: &str) -> Result<BudgetPlan, CoreError>;
    fn list_plans(&self) -> Result<Vec<String>, CoreError>;
    fn delete_plan(&self, name: &str) -> Result<(), CoreError>;
    fn save_plan_to_path(&self, plan: &BudgetPlan, path: &Path) -> Result<(), CoreError>;
    fn load_plan_from_path(&self, path: &Path) -> Result<BudgetPlan, CoreError>;
}
