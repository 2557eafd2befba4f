//! mealplan-storage-json
//!
//! JSON files for saved budget plans and meal catalogs.

use std::{
    collections::BTreeSet,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use mealplan_core::{storage::PlanStorage, CoreError};
use mealplan_domain::{BudgetPlan, Meal, Weekday};
use serde::{Deserialize, Serialize};
use tracing::info;

const PLAN_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for budget plans.
#[derive(Debug, Clone)]
pub struct JsonPlanStorage {
    plans_dir: PathBuf,
}

impl JsonPlanStorage {
    pub fn new(plans_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&plans_dir)?;
        Ok(Self { plans_dir })
    }

    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }

    pub fn plan_path(&self, name: &str) -> PathBuf {
        self.plans_dir
            .join(format!("{}.{}", canonical_name(name), PLAN_EXTENSION))
    }
}

impl PlanStorage for JsonPlanStorage {
    fn save_plan(&self, name: &str, plan: &BudgetPlan) -> Result<(), CoreError> {
        save_plan_to_path(plan, &self.plan_path(name))
    }

    fn load_plan(&self, name: &str) -> Result<BudgetPlan, CoreError> {
        let path = self.plan_path(name);
        if !path.exists() {
            return Err(CoreError::PlanNotFound(name.to_string()));
        }
        load_plan_from_path(&path)
    }

    fn list_plans(&self) -> Result<Vec<String>, CoreError> {
        if !self.plans_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.plans_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(PLAN_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_plan(&self, name: &str) -> Result<(), CoreError> {
        let path = self.plan_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_plan_to_path(&self, plan: &BudgetPlan, path: &Path) -> Result<(), CoreError> {
        save_plan_to_path(plan, path)
    }

    fn load_plan_from_path(&self, path: &Path) -> Result<BudgetPlan, CoreError> {
        load_plan_from_path(path)
    }
}

/// Saves a plan to an arbitrary path on disk, replacing it atomically.
pub fn save_plan_to_path(plan: &BudgetPlan, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(plan).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a plan from the provided filesystem path.
pub fn load_plan_from_path(path: &Path) -> Result<BudgetPlan, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

/// One row of a catalog file. Ids are derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub location: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub unavailable: BTreeSet<Weekday>,
}

impl From<CatalogEntry> for Meal {
    fn from(entry: CatalogEntry) -> Self {
        Meal::catalog(entry.location, entry.name, entry.price).with_unavailable(entry.unavailable)
    }
}

impl From<&Meal> for CatalogEntry {
    fn from(meal: &Meal) -> Self {
        Self {
            location: meal.location.clone(),
            name: meal.name.clone(),
            price: meal.price,
            unavailable: meal.unavailable.clone(),
        }
    }
}

/// Reads a JSON array of catalog entries into standard meals.
pub fn load_catalog_from_path(path: &Path) -> Result<Vec<Meal>, CoreError> {
    let data = fs::read_to_string(path)?;
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
    if let Some(entry) = entries.iter().find(|entry| entry.price < 0.0) {
        return Err(CoreError::Validation(format!(
            "meal `{}` at `{}` has a negative price",
            entry.name, entry.location
        )));
    }
    info!("loaded {} catalog meal(s) from {}", entries.len(), path.display());
    Ok(entries.into_iter().map(Meal::from).collect())
}

/// Writes catalog meals as a JSON array of entries.
pub fn save_catalog_to_path(meals: &[Meal], path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let entries: Vec<CatalogEntry> = meals.iter().map(CatalogEntry::from).collect();
    let json =
        serde_json::to_string_pretty(&entries).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "plan".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
