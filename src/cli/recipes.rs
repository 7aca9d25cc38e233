use fasthealth::{AppError, AppState};
use fasthealth_recipe::RecipeFilter;
use fasthealth_shared::{Diet, MeatType, Recipe};

pub fn list(
    state: &AppState,
    diet: Option<Diet>,
    meat_type: Option<MeatType>,
    search: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let filter = RecipeFilter {
        diet,
        meat_type,
        query: search,
    };
    let recipes: Vec<&Recipe> = state.catalog.filter(&filter).collect();

    tracing::debug!(?filter, matches = recipes.len(), "recipes filtered");

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes match the selected filters.");
        return Ok(());
    }

    for recipe in recipes {
        println!("{:<4} {}  ({})", recipe.id, recipe.title, recipe.meta_line());
    }

    Ok(())
}

pub fn show(state: &AppState, id: &str) -> anyhow::Result<()> {
    let recipe = state
        .catalog
        .get(id.trim())
        .ok_or_else(|| AppError::RecipeNotFound(id.to_string()))?;

    println!("{}", recipe.title);
    println!("{}", recipe.meta_line());
    println!();
    println!("Ingredients:");
    for line in &recipe.ingredients {
        println!("  • {line}");
    }
    println!();
    println!("Steps:");
    for (index, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {step}", index + 1);
    }

    Ok(())
}
