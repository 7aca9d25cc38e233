use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub type RecipeId = String;

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Vegetarian,
    NonVegetarian,
}

impl Diet {
    pub fn label(&self) -> &'static str {
        match self {
            Diet::Vegetarian => "Vegetarian",
            Diet::NonVegetarian => "Non-Vegetarian",
        }
    }
}

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MeatType {
    Chicken,
    Beef,
    Fish,
    Pork,
    Lamb,
}

impl MeatType {
    pub fn label(&self) -> &'static str {
        match self {
            MeatType::Chicken => "Chicken",
            MeatType::Beef => "Beef",
            MeatType::Fish => "Fish",
            MeatType::Pork => "Pork",
            MeatType::Lamb => "Lamb",
        }
    }
}

/// One line of a recipe's shopping breakdown, quantity given per portion.
///
/// Authored data is read leniently: every field may be missing, `qty` may be
/// a numeric string and text fields may be numbers. Defaults are applied when
/// the list is aggregated, not here.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ShoppingIngredient {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub qty: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub unit: Option<String>,
}

impl ShoppingIngredient {
    pub fn new(section: &str, name: &str, qty: f64, unit: &str) -> Self {
        Self {
            section: Some(section.to_owned()),
            name: Some(name.to_owned()),
            qty: Some(qty),
            unit: Some(unit.to_owned()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub diet: Diet,
    #[serde(default)]
    pub meat_type: Option<MeatType>,
    #[serde(default)]
    pub calories_per_portion: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    /// `None` when the recipe has no shopping breakdown, or it is not a list.
    #[serde(default, deserialize_with = "deserialize_shopping")]
    pub shopping: Option<Vec<ShoppingIngredient>>,
}

impl Recipe {
    /// `Calories: 320 kcal/portion • Time: 5 min • Non-Vegetarian (Fish)`
    pub fn meta_line(&self) -> String {
        let diet = match self.meat_type {
            Some(meat) => format!("{} ({})", self.diet.label(), meat.label()),
            None => self.diet.label().to_string(),
        };

        format!(
            "Calories: {} kcal/portion • Time: {} min • {diet}",
            self.calories_per_portion, self.minutes
        )
    }
}

/// Read-only access to recipes by id.
pub trait RecipeLookup {
    fn recipe(&self, id: &str) -> Option<&Recipe>;
}

impl RecipeLookup for [Recipe] {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.iter().find(|recipe| recipe.id == id)
    }
}

impl RecipeLookup for Vec<Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.as_slice().recipe(id)
    }
}

impl<T: RecipeLookup + ?Sized> RecipeLookup for &T {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        (**self).recipe(id)
    }
}

/// Coerces a loosely typed JSON value into a number.
///
/// Numbers pass through, numeric strings are parsed, everything else is `None`.
pub fn lenient_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Coerces a loosely typed JSON value into text.
///
/// Strings pass through, numbers are written out, everything else is `None`.
pub fn lenient_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_text(&value))
}

/// Anything but an array means no shopping list; entries that are not objects
/// are skipped.
fn deserialize_shopping<'de, D>(deserializer: D) -> Result<Option<Vec<ShoppingIngredient>>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Array(entries) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    let items: Vec<ShoppingIngredient> = entries
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    Ok(Some(items))
}

fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_number(&value))
}
