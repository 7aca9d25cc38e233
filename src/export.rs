//! Dated text exports of the shopping list and the weekly plan.

use std::fs;
use std::path::{Path, PathBuf};

use fasthealth_mealplan::plan_export;
use fasthealth_shopping::{aggregate, render_export};
use strum::{AsRefStr, Display, EnumString};
use time::OffsetDateTime;
use time::format_description;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum ExportKind {
    ShoppingList,
    WeeklyPlan,
}

/// `fast-health_shopping-list_2026-10-18.txt`
pub fn export_file_name(kind: ExportKind, now: OffsetDateTime) -> AppResult<String> {
    let format = format_description::parse("[year]-[month]-[day]")?;
    Ok(format!("fast-health_{kind}_{}.txt", now.format(&format)?))
}

pub fn generated_at(now: OffsetDateTime) -> AppResult<String> {
    let format = format_description::parse("[year]-[month]-[day] [hour]:[minute] UTC")?;
    Ok(now.format(&format)?)
}

pub fn render(state: &AppState, kind: ExportKind, now: OffsetDateTime) -> AppResult<String> {
    let plan = state.load_plan();
    let generated_at = generated_at(now)?;
    let site_name = &state.config.site.name;

    Ok(match kind {
        ExportKind::ShoppingList => {
            render_export(&aggregate(&plan, &state.catalog), site_name, &generated_at)
        }
        ExportKind::WeeklyPlan => plan_export(&plan, &state.catalog, site_name, &generated_at),
    })
}

/// Writes the export into `dir`, creating it if needed, and returns the file path.
pub fn write(
    state: &AppState,
    kind: ExportKind,
    dir: &Path,
    now: OffsetDateTime,
) -> AppResult<PathBuf> {
    let text = render(state, kind, now)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(kind, now)?);
    fs::write(&path, text)?;

    tracing::info!(%kind, path = %path.display(), "export written");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> OffsetDateTime {
        // 2026-10-18T12:30:00Z
        OffsetDateTime::from_unix_timestamp(1_792_326_600).unwrap()
    }

    #[test]
    fn test_export_file_names() {
        assert_eq!(
            export_file_name(ExportKind::ShoppingList, noon()).unwrap(),
            "fast-health_shopping-list_2026-10-18.txt"
        );
        assert_eq!(
            export_file_name(ExportKind::WeeklyPlan, noon()).unwrap(),
            "fast-health_weekly-plan_2026-10-18.txt"
        );
    }

    #[test]
    fn test_generated_at() {
        assert_eq!(generated_at(noon()).unwrap(), "2026-10-18 12:30 UTC");
    }
}
