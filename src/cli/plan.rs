use fasthealth::AppState;
use fasthealth_mealplan::{Command, parse_day, plan_summary};

pub fn show(state: &AppState) -> anyhow::Result<()> {
    let plan = state.load_plan();
    println!("{}", plan_summary(&plan, &state.catalog));

    Ok(())
}

pub fn set(state: &AppState, day: &str, recipe_id: &str, portions: u32) -> anyhow::Result<()> {
    let day = parse_day(day)?;
    let mut plan = state.load_plan();

    let replaced = Command(&state.catalog).set_day(&mut plan, day, recipe_id, portions)?;
    state.save_plan(&plan)?;

    if let Some(previous) = replaced {
        tracing::info!(%day, previous = %previous.recipe_id, "replaced planned recipe");
    }

    println!("{}", plan_summary(&plan, &state.catalog));

    Ok(())
}

pub fn clear(state: &AppState, day: &str) -> anyhow::Result<()> {
    let day = parse_day(day)?;
    let mut plan = state.load_plan();

    if Command(&state.catalog).clear_day(&mut plan, day).is_none() {
        println!("{day} is already empty.");
        return Ok(());
    }
    state.save_plan(&plan)?;

    println!("{}", plan_summary(&plan, &state.catalog));

    Ok(())
}

pub fn clear_week(state: &AppState) -> anyhow::Result<()> {
    let mut plan = state.load_plan();

    Command(&state.catalog).clear_week(&mut plan);
    state.save_plan(&plan)?;

    println!("{}", plan_summary(&plan, &state.catalog));

    Ok(())
}

pub fn share(state: &AppState) -> anyhow::Result<()> {
    let plan = state.load_plan();
    println!(
        "{}",
        fasthealth_mealplan::share_message(
            &plan,
            &state.catalog,
            &state.config.site.url,
            &state.config.site.name,
        )
    );

    Ok(())
}
