use std::collections::HashMap;
use std::path::Path;

use fasthealth_shared::{Recipe, RecipeLookup};
use rust_embed::RustEmbed;

use crate::error::{CatalogError, CatalogResult};
use crate::filter::RecipeFilter;

const EMBEDDED_CATALOG: &str = "recipes.json";

#[derive(RustEmbed)]
#[folder = "data/"]
struct CatalogAssets;

/// Fixed, read-only set of recipes, kept in authoring order.
#[derive(Clone, Debug, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl RecipeCatalog {
    /// The catalog bundled with the binary.
    pub fn embedded() -> CatalogResult<Self> {
        let file = CatalogAssets::get(EMBEDDED_CATALOG)
            .ok_or(CatalogError::MissingAsset(EMBEDDED_CATALOG))?;
        let recipes: Vec<Recipe> = serde_json::from_slice(&file.data)?;
        Self::new(recipes)
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading recipe catalog");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(recipes: Vec<Recipe>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if index.insert(recipe.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
        }

        let missing_shopping = recipes.iter().filter(|r| r.shopping.is_none()).count();
        if missing_shopping > 0 {
            tracing::warn!(
                count = missing_shopping,
                "recipes without a shopping list will not contribute to shopping lists"
            );
        }

        Ok(Self { recipes, index })
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.index.get(id).map(|&position| &self.recipes[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes matching `filter`, in catalog order.
    pub fn filter<'a>(&'a self, filter: &'a RecipeFilter) -> impl Iterator<Item = &'a Recipe> {
        self.recipes.iter().filter(move |recipe| filter.matches(recipe))
    }
}

impl RecipeLookup for RecipeCatalog {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}
