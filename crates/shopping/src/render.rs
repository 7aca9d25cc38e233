//! Plain-text views of an aggregated shopping list.
//!
//! `render_list` is the interactive list with check boxes; `export_rows` and
//! `render_export` produce the two-column table written to export files.

use fasthealth_shared::StoreSection;

use crate::aggregation::AggregatedShoppingList;
use crate::checklist::ShoppingChecks;

pub const EMPTY_LIST_MESSAGE: &str =
    "No recipes selected yet. Add recipes to your weekly plan to generate a shopping list.";
pub const EMPTY_EXPORT_MESSAGE: &str = "No items yet. Add recipes to the weekly plan first.";
pub const EXPORT_TIP: &str = "Tip: Quantities are scaled by portions from your weekly plan.";

#[derive(Clone, Debug, PartialEq)]
pub enum ExportRow {
    Section(StoreSection),
    Item { name: String, quantity: String },
    Spacer,
}

pub fn render_list(list: &AggregatedShoppingList, checks: &ShoppingChecks) -> String {
    if list.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    let mut out = format!(
        "{} item{} • Scaled by portions\n",
        list.total_items,
        if list.total_items == 1 { "" } else { "s" }
    );

    for (section, items) in &list.by_section {
        out.push_str(&format!("\n{section}\n"));
        for item in items {
            let mark = if checks.is_checked(&item.key()) {
                'x'
            } else {
                ' '
            };
            out.push_str(&format!(
                "  [{mark}] {} • {}\n",
                item.name,
                item.formatted_qty()
            ));
        }
    }

    out
}

/// Section heading, its items, then a spacer, for every non-empty section.
pub fn export_rows(list: &AggregatedShoppingList) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(list.total_items + list.by_section.len() * 2);

    for (section, items) in &list.by_section {
        rows.push(ExportRow::Section(*section));
        rows.extend(items.iter().map(|item| ExportRow::Item {
            name: item.name.clone(),
            quantity: item.formatted_qty(),
        }));
        rows.push(ExportRow::Spacer);
    }

    rows
}

/// Full text export: title, generation stamp, item table and footer tip.
pub fn render_export(list: &AggregatedShoppingList, site_name: &str, generated_at: &str) -> String {
    let mut out = format!("{site_name} — Shopping List\nGenerated: {generated_at}\n\n");

    if list.is_empty() {
        out.push_str(EMPTY_EXPORT_MESSAGE);
        out.push('\n');
        return out;
    }

    let rows = export_rows(list);
    let width = rows
        .iter()
        .filter_map(|row| match row {
            ExportRow::Item { name, .. } => Some(name.chars().count()),
            _ => None,
        })
        .max()
        .unwrap_or(0)
        .max("Item".len());

    out.push_str(&format!("{:<width$}  Quantity\n", "Item"));
    out.push_str(&"-".repeat(width + "  Quantity".len()));
    out.push('\n');

    for row in rows {
        match row {
            ExportRow::Section(section) => out.push_str(&format!("{section}\n")),
            ExportRow::Item { name, quantity } => {
                out.push_str(&format!("{name:<width$}  {quantity}\n"))
            }
            ExportRow::Spacer => out.push('\n'),
        }
    }

    out.push_str(EXPORT_TIP);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::AggregatedItem;
    use crate::normalize::ItemKey;

    fn list() -> AggregatedShoppingList {
        let mut list = AggregatedShoppingList::default();
        list.by_section.insert(
            StoreSection::Dairy,
            vec![AggregatedItem {
                section: StoreSection::Dairy,
                name: "Greek yogurt".to_string(),
                unit: "cup".to_string(),
                qty: 2.0,
            }],
        );
        list.by_section.insert(
            StoreSection::Vegetables,
            vec![AggregatedItem {
                section: StoreSection::Vegetables,
                name: "Cherry tomatoes".to_string(),
                unit: "handful".to_string(),
                qty: 1.0,
            }],
        );
        list.total_items = 2;
        list
    }

    #[test]
    fn test_render_list_marks_checked_items() {
        let mut checks = ShoppingChecks::default();
        checks.set(ItemKey::new(StoreSection::Dairy, "greek yogurt", "cup"), true);

        let text = render_list(&list(), &checks);

        assert_eq!(
            text,
            "2 items • Scaled by portions\n\
             \n\
             Vegetables\n\
             \x20 [ ] Cherry tomatoes • 1 handful\n\
             \n\
             Dairy\n\
             \x20 [x] Greek yogurt • 2 cups\n"
        );
    }

    #[test]
    fn test_render_list_empty() {
        let text = render_list(&AggregatedShoppingList::default(), &ShoppingChecks::default());
        assert_eq!(text, EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn test_export_rows_follow_store_order() {
        let rows = export_rows(&list());

        assert_eq!(
            rows,
            vec![
                ExportRow::Section(StoreSection::Vegetables),
                ExportRow::Item {
                    name: "Cherry tomatoes".to_string(),
                    quantity: "1 handful".to_string(),
                },
                ExportRow::Spacer,
                ExportRow::Section(StoreSection::Dairy),
                ExportRow::Item {
                    name: "Greek yogurt".to_string(),
                    quantity: "2 cups".to_string(),
                },
                ExportRow::Spacer,
            ]
        );
    }

    #[test]
    fn test_render_export() {
        let text = render_export(&list(), "Fast & Health", "2026-10-18");

        assert!(text.starts_with("Fast & Health — Shopping List\nGenerated: 2026-10-18\n\n"));
        assert!(text.contains("Cherry tomatoes  1 handful\n"));
        assert!(text.contains("Greek yogurt     2 cups\n"));
        assert!(text.ends_with(&format!("{EXPORT_TIP}\n")));
    }

    #[test]
    fn test_render_export_empty() {
        let text = render_export(&AggregatedShoppingList::default(), "Fast & Health", "today");
        assert!(text.ends_with(&format!("{EMPTY_EXPORT_MESSAGE}\n")));
    }
}
