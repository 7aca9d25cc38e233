use std::path::Path;

use fasthealth::AppState;
use fasthealth::export::{self, ExportKind};
use fasthealth_shopping::{ItemKey, ShoppingChecks, aggregate, render_list};
use time::OffsetDateTime;

pub fn show(state: &AppState, json: bool, checked: &[String]) -> anyhow::Result<()> {
    let plan = state.load_plan();
    let list = aggregate(&plan, &state.catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    let mut checks = ShoppingChecks::default();
    for raw in checked {
        let key: ItemKey = raw.parse()?;
        checks.set(key, true);
    }

    print!("{}", render_list(&list, &checks));
    if list.is_empty() {
        println!();
    }

    Ok(())
}

pub fn export(state: &AppState, kind: ExportKind, output: &Path) -> anyhow::Result<()> {
    let path = export::write(state, kind, output, OffsetDateTime::now_utc())?;
    println!("Saved {}", path.display());

    Ok(())
}
