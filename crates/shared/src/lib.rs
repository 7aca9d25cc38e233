pub mod mealplan;
pub mod recipe;
pub mod shopping;

pub use mealplan::{Day, PlanEntry, WeeklyPlan, sanitize_portions};
pub use recipe::{
    Diet, MeatType, Recipe, RecipeId, RecipeLookup, ShoppingIngredient, lenient_number,
    lenient_text,
};
pub use shopping::StoreSection;
