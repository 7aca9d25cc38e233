//! Text views of a weekly plan: the summary block, the share message and the
//! weekly-plan export.

use fasthealth_shared::{Day, Recipe, RecipeLookup, WeeklyPlan};
use serde::Serialize;

pub const EMPTY_SUMMARY: &str = "Plan summary: (No recipes selected yet.)";
pub const UNKNOWN_RECIPE: &str = "Unknown recipe";
pub const EMPTY_CELL: &str = "—";

/// One line of the weekly-plan table.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlanRow {
    pub day: Day,
    pub recipe_id: Option<String>,
    pub title: String,
    pub portions: String,
}

pub fn plan_rows<L>(plan: &WeeklyPlan, catalog: &L) -> Vec<PlanRow>
where
    L: RecipeLookup + ?Sized,
{
    plan.days()
        .map(|(day, entry)| match entry {
            None => PlanRow {
                day,
                recipe_id: None,
                title: EMPTY_CELL.to_string(),
                portions: EMPTY_CELL.to_string(),
            },
            Some(entry) => PlanRow {
                day,
                recipe_id: Some(entry.recipe_id.clone()),
                title: recipe_title(catalog, &entry.recipe_id).to_string(),
                portions: entry.portions.to_string(),
            },
        })
        .collect()
}

pub fn plan_summary<L>(plan: &WeeklyPlan, catalog: &L) -> String
where
    L: RecipeLookup + ?Sized,
{
    if !plan.has_any() {
        return EMPTY_SUMMARY.to_string();
    }

    let mut lines = vec!["Plan summary:".to_string()];
    lines.extend(plan.days().map(|(day, entry)| match entry {
        None => format!("- {day}: {EMPTY_CELL}"),
        Some(entry) => format!(
            "- {day}: {} ({} portion{})",
            recipe_title(catalog, &entry.recipe_id),
            entry.portions,
            if entry.portions == 1 { "" } else { "s" }
        ),
    }));

    lines.join("\n")
}

/// Message body for sharing the week by email or chat.
pub fn share_message<L>(plan: &WeeklyPlan, catalog: &L, site_url: &str, site_name: &str) -> String
where
    L: RecipeLookup + ?Sized,
{
    [
        format!("{site_name} — my weekly breakfast plan 🍳"),
        String::new(),
        "I downloaded the PDFs from the site (weekly plan + recipes, plus shopping list)."
            .to_string(),
        "Please see them attached here.".to_string(),
        String::new(),
        plan_summary(plan, catalog),
        String::new(),
        format!("Site: {site_url}"),
    ]
    .join("\n")
}

/// Weekly-plan export: the day table, then every planned recipe once, in plan
/// order, with its ingredients and steps.
pub fn plan_export<L>(plan: &WeeklyPlan, catalog: &L, site_name: &str, generated_at: &str) -> String
where
    L: RecipeLookup + ?Sized,
{
    let rows = plan_rows(plan, catalog);
    let day_width = rows
        .iter()
        .map(|row| row.day.to_string().len())
        .max()
        .unwrap_or(0);
    let title_width = rows
        .iter()
        .map(|row| row.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Recipe".len());

    let mut lines = vec![
        format!("{site_name} — Weekly Plan"),
        format!("Generated: {generated_at}"),
        String::new(),
        format!("{:<day_width$}  {:<title_width$}  Portions", "Day", "Recipe"),
        "-".repeat(day_width + title_width + "    Portions".len()),
    ];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<day_width$}  {:<title_width$}  {}",
            row.day.to_string(),
            row.title,
            row.portions
        )
    }));

    let recipes = selected_recipes(plan, catalog);
    if !recipes.is_empty() {
        lines.push(String::new());
        lines.push("Selected Recipes".to_string());
    }
    for recipe in recipes {
        lines.push(String::new());
        lines.push(recipe.title.clone());
        lines.push(recipe.meta_line());
        lines.push(String::new());
        lines.push("Ingredients".to_string());
        lines.extend(recipe.ingredients.iter().map(|line| format!("• {line}")));
        lines.push(String::new());
        lines.push("Steps".to_string());
        lines.extend(
            recipe
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| format!("{}. {step}", index + 1)),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Distinct known recipes of the week, first occurrence first.
pub fn selected_recipes<'a, L>(plan: &WeeklyPlan, catalog: &'a L) -> Vec<&'a Recipe>
where
    L: RecipeLookup + ?Sized,
{
    let mut selected: Vec<&Recipe> = Vec::new();
    for (_, entry) in plan.entries() {
        let Some(recipe) = catalog.recipe(&entry.recipe_id) else {
            continue;
        };
        if !selected.iter().any(|known| known.id == recipe.id) {
            selected.push(recipe);
        }
    }
    selected
}

fn recipe_title<'a, L>(catalog: &'a L, recipe_id: &str) -> &'a str
where
    L: RecipeLookup + ?Sized,
{
    catalog
        .recipe(recipe_id)
        .map_or(UNKNOWN_RECIPE, |recipe| recipe.title.as_str())
}
