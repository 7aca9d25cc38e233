use std::fs;
use std::path::{Path, PathBuf};

use fasthealth_shared::{
    Day, PlanEntry, RecipeLookup, WeeklyPlan, lenient_number, sanitize_portions,
};
use serde_json::Value;

use crate::Result;

/// Weekly plan persisted as a JSON file.
#[derive(Clone, Debug)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved plan, never failing.
    ///
    /// A missing or unreadable file gives an empty week. Days whose value is
    /// not an object, has no recipe id, or names a recipe `catalog` does not
    /// know are left empty.
    pub fn load<L>(&self, catalog: &L) -> WeeklyPlan
    where
        L: RecipeLookup + ?Sized,
    {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved plan");
                return WeeklyPlan::default();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read plan");
                return WeeklyPlan::default();
            }
        };

        if raw.trim().is_empty() {
            return WeeklyPlan::default();
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => parse_plan(&value, catalog),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding corrupt plan");
                WeeklyPlan::default()
            }
        }
    }

    pub fn save(&self, plan: &WeeklyPlan) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(plan)?;
        fs::write(&self.path, json)?;

        tracing::debug!(path = %self.path.display(), "plan saved");

        Ok(())
    }
}

/// Builds a plan from loosely shaped JSON, dropping anything unusable.
pub fn parse_plan<L>(value: &Value, catalog: &L) -> WeeklyPlan
where
    L: RecipeLookup + ?Sized,
{
    let mut plan = WeeklyPlan::default();

    for day in Day::ALL {
        let name: &str = day.as_ref();
        let Some(Value::Object(slot)) = value.get(name) else {
            continue;
        };

        let recipe_id = match slot.get("recipeId") {
            Some(Value::String(id)) => id.trim().to_string(),
            Some(Value::Number(id)) => id.to_string(),
            _ => continue,
        };

        if recipe_id.is_empty() || catalog.recipe(&recipe_id).is_none() {
            tracing::debug!(%day, %recipe_id, "dropping unknown recipe from plan");
            continue;
        }

        let portions = match slot.get("portions") {
            None | Some(Value::Null) => 1,
            Some(value) => lenient_number(value).map_or(1, sanitize_portions),
        };

        plan.insert(day, PlanEntry::new(recipe_id, portions));
    }

    plan
}
