use fasthealth_recipe::RecipeCatalog;
use fasthealth_shared::{Day, PlanEntry, StoreSection, WeeklyPlan};
use fasthealth_shopping::normalize::locale_cmp;
use fasthealth_shopping::{ShoppingChecks, aggregate, format_qty, render_list};

fn catalog() -> RecipeCatalog {
    RecipeCatalog::embedded().expect("embedded catalog")
}

/// Monday: overnight oats for one, Wednesday: banana oat bowl for two
fn oats_week() -> WeeklyPlan {
    let mut plan = WeeklyPlan::default();
    plan.insert(Day::Monday, PlanEntry::new("r2", 1));
    plan.insert(Day::Wednesday, PlanEntry::new("r4", 2));
    plan
}

#[test]
fn test_week_merges_shared_ingredients() {
    let list = aggregate(&oats_week(), &catalog());

    assert_eq!(list.total_items, 8);

    let sections: Vec<StoreSection> = list.by_section.keys().copied().collect();
    assert_eq!(
        sections,
        vec![
            StoreSection::Fruits,
            StoreSection::Dairy,
            StoreSection::Grains,
            StoreSection::Pantry,
            StoreSection::SpicesCondiments,
        ]
    );

    let oats = &list.by_section[&StoreSection::Grains][0];
    assert_eq!(oats.name, "Oats");
    assert!((oats.qty - 1.5).abs() < 1e-9);
    assert_eq!(oats.formatted_qty(), "1 1/2 cups");

    let dairy: Vec<(&str, String)> = list.by_section[&StoreSection::Dairy]
        .iter()
        .map(|item| (item.name.as_str(), item.formatted_qty()))
        .collect();
    assert_eq!(
        dairy,
        vec![
            ("Milk", "2 1/2 cups".to_string()),
            ("Yogurt", "1 tbsp".to_string())
        ]
    );

    // Same name, different unit: two lines
    let spices: Vec<(&str, &str)> = list.by_section[&StoreSection::SpicesCondiments]
        .iter()
        .map(|item| (item.name.as_str(), item.unit.as_str()))
        .collect();
    assert_eq!(spices, vec![("Cinnamon", "tsp"), ("Cinnamon", "pinch")]);
}

#[test]
fn test_totals_match_sum_of_section_lengths() {
    let mut plan = WeeklyPlan::default();
    for (day, id) in Day::ALL.into_iter().zip(["r1", "r3", "r5", "r7", "r9", "r11", "r13"]) {
        plan.insert(day, PlanEntry::new(id, 1));
    }

    let list = aggregate(&plan, &catalog());

    let counted: usize = list.by_section.values().map(Vec::len).sum();
    assert_eq!(list.total_items, counted);
    assert!(list.by_section.values().all(|items| !items.is_empty()));
}

#[test]
fn test_names_sorted_within_each_section() {
    let mut plan = WeeklyPlan::default();
    for (day, id) in Day::ALL.into_iter().zip(["r14", "r15", "r16", "r17", "r18", "r21", "r26"]) {
        plan.insert(day, PlanEntry::new(id, 3));
    }

    let list = aggregate(&plan, &catalog());

    for items in list.by_section.values() {
        for pair in items.windows(2) {
            assert!(
                locale_cmp(&pair[0].name, &pair[1].name).is_le(),
                "{} should not sort after {}",
                pair[0].name,
                pair[1].name
            );
        }
    }
}

#[test]
fn test_aggregate_is_idempotent() {
    let plan = oats_week();
    let catalog = catalog();
    let before = plan.clone();

    let first = aggregate(&plan, &catalog);
    let second = aggregate(&plan, &catalog);

    assert_eq!(first, second);
    assert_eq!(plan, before);
}

#[test]
fn test_additivity_across_days() {
    let catalog = catalog();

    let mut monday_only = WeeklyPlan::default();
    monday_only.insert(Day::Monday, PlanEntry::new("r2", 1));
    let mut wednesday_only = WeeklyPlan::default();
    wednesday_only.insert(Day::Wednesday, PlanEntry::new("r4", 2));

    let milk = |plan: &WeeklyPlan| {
        aggregate(plan, &catalog)
            .items()
            .find(|item| item.name == "Milk")
            .map(|item| item.qty)
            .unwrap_or_default()
    };

    let combined = milk(&oats_week());
    assert!((combined - (milk(&monday_only) + milk(&wednesday_only))).abs() < 1e-9);
}

#[test]
fn test_unknown_recipe_day_is_ignored() {
    let mut plan = oats_week();
    plan.insert(Day::Friday, PlanEntry::new("does-not-exist", 5));

    assert_eq!(aggregate(&plan, &catalog()), aggregate(&oats_week(), &catalog()));

    let mut only_unknown = WeeklyPlan::default();
    only_unknown.insert(Day::Monday, PlanEntry::new("does-not-exist", 1));
    assert_eq!(aggregate(&only_unknown, &catalog()).total_items, 0);
}

#[test]
fn test_list_serializes_with_section_labels() {
    let mut plan = WeeklyPlan::default();
    plan.insert(Day::Monday, PlanEntry::new("r1", 2));

    let value = serde_json::to_value(aggregate(&plan, &catalog())).unwrap();

    assert_eq!(value["total_items"], 4);
    assert_eq!(value["by_section"]["Dairy"][0]["name"], "Greek yogurt");
    assert_eq!(value["by_section"]["Dairy"][0]["qty"], 2.0);
}

#[test]
fn test_render_list_for_planned_week() {
    let mut plan = WeeklyPlan::default();
    plan.insert(Day::Monday, PlanEntry::new("r1", 2));

    let list = aggregate(&plan, &catalog());
    let text = render_list(&list, &ShoppingChecks::default());

    assert!(text.starts_with("4 items • Scaled by portions\n"));
    assert!(text.contains("[ ] Greek yogurt • 2 cups"));
    assert!(text.contains("[ ] Mixed berries • 2 handfuls"));
    assert!(text.contains(&format!("[ ] Honey • {}", format_qty(2.0, "tsp"))));
}
