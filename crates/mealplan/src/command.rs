use fasthealth_shared::{Day, PlanEntry, RecipeLookup, WeeklyPlan};

use crate::{PlanError, Result};

/// Plan mutations checked against a recipe catalog.
pub struct Command<'a, L: RecipeLookup + ?Sized>(pub &'a L);

impl<'a, L: RecipeLookup + ?Sized> Command<'a, L> {
    /// Plans `recipe_id` on `day`, replacing whatever was there.
    ///
    /// Returns the entry that was overwritten, if any.
    pub fn set_day(
        &self,
        plan: &mut WeeklyPlan,
        day: Day,
        recipe_id: &str,
        portions: u32,
    ) -> Result<Option<PlanEntry>> {
        let recipe_id = recipe_id.trim();
        let Some(recipe) = self.0.recipe(recipe_id) else {
            return Err(PlanError::RecipeNotFound(recipe_id.to_string()));
        };

        let entry = PlanEntry::new(recipe.id.clone(), portions);
        tracing::info!(%day, recipe_id = %entry.recipe_id, portions = entry.portions, "day planned");

        Ok(plan.insert(day, entry))
    }

    pub fn clear_day(&self, plan: &mut WeeklyPlan, day: Day) -> Option<PlanEntry> {
        let removed = plan.remove(day);
        if removed.is_some() {
            tracing::info!(%day, "day cleared");
        }
        removed
    }

    pub fn clear_week(&self, plan: &mut WeeklyPlan) {
        plan.clear();
        tracing::info!("week cleared");
    }
}

/// Parses a weekday name typed by a user, ignoring case and surrounding space.
pub fn parse_day(value: &str) -> Result<Day> {
    value
        .trim()
        .parse()
        .map_err(|_| PlanError::UnknownDay(value.to_string()))
}
