use fasthealth_shared::{Diet, MeatType, Recipe};

/// Browse filter over the catalog. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeFilter {
    pub diet: Option<Diet>,
    pub meat_type: Option<MeatType>,
    pub query: Option<String>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let diet_ok = self.diet.is_none_or(|diet| recipe.diet == diet);
        let meat_ok = self
            .meat_type
            .is_none_or(|meat| recipe.meat_type == Some(meat));

        diet_ok && meat_ok && self.matches_query(recipe)
    }

    /// Case-insensitive substring match on the title or any ingredient line.
    fn matches_query(&self, recipe: &Recipe) -> bool {
        let query = match self.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => query.to_lowercase(),
            _ => return true,
        };

        recipe.title.to_lowercase().contains(&query)
            || recipe
                .ingredients
                .iter()
                .any(|line| line.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str, diet: Diet, meat_type: Option<MeatType>) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            diet,
            meat_type,
            calories_per_portion: 300,
            minutes: 10,
            image: String::new(),
            ingredients: vec!["2 eggs".to_string(), "1 slice rye bread".to_string()],
            steps: vec![],
            shopping: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = RecipeFilter::default();
        assert!(filter.matches(&recipe("a", "Toast", Diet::Vegetarian, None)));
        assert!(filter.matches(&recipe("b", "Wrap", Diet::NonVegetarian, Some(MeatType::Beef))));
    }

    #[test]
    fn test_diet_and_meat_filters() {
        let filter = RecipeFilter {
            diet: Some(Diet::NonVegetarian),
            meat_type: Some(MeatType::Fish),
            query: None,
        };

        assert!(filter.matches(&recipe("a", "Salmon", Diet::NonVegetarian, Some(MeatType::Fish))));
        assert!(!filter.matches(&recipe("b", "Wrap", Diet::NonVegetarian, Some(MeatType::Beef))));
        assert!(!filter.matches(&recipe("c", "Toast", Diet::Vegetarian, None)));
    }

    #[test]
    fn test_query_searches_title_and_ingredients() {
        let toast = recipe("a", "Caprese Toast", Diet::Vegetarian, None);

        let by_title = RecipeFilter {
            query: Some("  caprese ".to_string()),
            ..Default::default()
        };
        let by_ingredient = RecipeFilter {
            query: Some("RYE".to_string()),
            ..Default::default()
        };
        let miss = RecipeFilter {
            query: Some("salmon".to_string()),
            ..Default::default()
        };
        let blank = RecipeFilter {
            query: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(by_title.matches(&toast));
        assert!(by_ingredient.matches(&toast));
        assert!(!miss.matches(&toast));
        assert!(blank.matches(&toast));
    }
}
