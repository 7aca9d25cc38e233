use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use fasthealth_shared::{RecipeLookup, StoreSection, WeeklyPlan};
use serde::Serialize;

use crate::normalize::{ItemKey, locale_cmp, normalize_name, normalize_qty, normalize_unit};
use crate::quantity::format_qty;

/// One merged shopping-list line, keeping the casing of its first contribution.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AggregatedItem {
    pub section: StoreSection,
    pub name: String,
    pub unit: String,
    pub qty: f64,
}

impl AggregatedItem {
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.section, &self.name, &self.unit)
    }

    pub fn formatted_qty(&self) -> String {
        format_qty(self.qty, &self.unit)
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct AggregatedShoppingList {
    /// Non-empty sections only, iterated in store order.
    pub by_section: BTreeMap<StoreSection, Vec<AggregatedItem>>,
    /// Number of distinct lines, not the sum of quantities.
    pub total_items: usize,
}

impl AggregatedShoppingList {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn items(&self) -> impl Iterator<Item = &AggregatedItem> {
        self.by_section.values().flatten()
    }
}

/// Build the shopping list for a week
///
/// Days are visited Monday..Sunday. Each planned recipe contributes its
/// per-portion quantities times that day's portions, and lines sharing a
/// case-insensitive (section, name, unit) are summed into one.
///
/// Empty days, ids missing from `catalog` and recipes without a shopping list
/// contribute nothing. Malformed ingredient fields fall back to defaults, so
/// this never fails.
pub fn aggregate<L>(plan: &WeeklyPlan, catalog: &L) -> AggregatedShoppingList
where
    L: RecipeLookup + ?Sized,
{
    let mut items: Vec<AggregatedItem> = Vec::new();
    let mut positions: HashMap<ItemKey, usize> = HashMap::new();

    for (day, entry) in plan.entries() {
        let Some(recipe) = catalog.recipe(&entry.recipe_id) else {
            tracing::debug!(%day, recipe_id = %entry.recipe_id, "skipping unknown recipe");
            continue;
        };
        let Some(shopping) = recipe.shopping.as_deref() else {
            tracing::debug!(%day, recipe_id = %recipe.id, "recipe has no shopping list");
            continue;
        };

        let portions = f64::from(entry.portions.max(1));

        for ingredient in shopping {
            let section = StoreSection::normalize(ingredient.section.as_deref());
            let name = normalize_name(ingredient.name.as_deref());
            let unit = normalize_unit(ingredient.unit.as_deref());
            let contribution = normalize_qty(ingredient.qty) * portions;

            match positions.entry(ItemKey::new(section, &name, &unit)) {
                Entry::Occupied(position) => items[*position.get()].qty += contribution,
                Entry::Vacant(slot) => {
                    slot.insert(items.len());
                    items.push(AggregatedItem {
                        section,
                        name,
                        unit,
                        qty: contribution,
                    });
                }
            }
        }
    }

    let total_items = items.len();

    let mut by_section: BTreeMap<StoreSection, Vec<AggregatedItem>> = BTreeMap::new();
    for item in items {
        by_section.entry(item.section).or_default().push(item);
    }
    for section_items in by_section.values_mut() {
        section_items.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    }

    tracing::debug!(
        total_items,
        sections = by_section.len(),
        "shopping list aggregated"
    );

    AggregatedShoppingList {
        by_section,
        total_items,
    }
}
