use fasthealth_mealplan::PlanStore;
use fasthealth_recipe::RecipeCatalog;
use fasthealth_shared::WeeklyPlan;

use crate::config::Config;
use crate::error::AppResult;

/// Everything a command needs: settings, the recipe catalog and the plan file.
pub struct AppState {
    pub config: Config,
    pub catalog: RecipeCatalog,
    pub store: PlanStore,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let catalog = match config.catalog.path.as_deref() {
            Some(path) => {
                tracing::info!(path, "loading external recipe catalog");
                RecipeCatalog::from_path(path)?
            }
            None => RecipeCatalog::embedded()?,
        };
        let store = PlanStore::new(&config.storage.plan_path);

        tracing::debug!(
            recipes = catalog.len(),
            plan = %store.path().display(),
            "state ready"
        );

        Ok(Self {
            config,
            catalog,
            store,
        })
    }

    pub fn load_plan(&self) -> WeeklyPlan {
        self.store.load(&self.catalog)
    }

    pub fn save_plan(&self, plan: &WeeklyPlan) -> AppResult<()> {
        self.store.save(plan)?;
        Ok(())
    }
}
