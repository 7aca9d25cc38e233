use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use fasthealth_shared::StoreSection;
use serde::{Deserialize, Serialize};
use strum::VariantArray;
use thiserror::Error;

pub const DEFAULT_NAME: &str = "Item";
pub const DEFAULT_UNIT: &str = "unit";

const KEY_SEPARATOR: &str = "__";

/// Trimmed display name, `"Item"` when blank.
pub fn normalize_name(raw: Option<&str>) -> String {
    non_blank(raw).unwrap_or(DEFAULT_NAME).to_string()
}

/// Trimmed unit, `"unit"` when blank.
pub fn normalize_unit(raw: Option<&str>) -> String {
    non_blank(raw).unwrap_or(DEFAULT_UNIT).to_string()
}

/// Per-portion quantity; anything but a finite positive number counts as one.
pub fn normalize_qty(raw: Option<f64>) -> f64 {
    match raw {
        Some(qty) if qty.is_finite() && qty > 0.0 => qty,
        _ => 1.0,
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Locale-style name ordering: case-insensitive first, lowercase before
/// uppercase when two names differ only by case.
///
/// Only matches a locale collator for ASCII names. Accented letters are not
/// folded to their base letter, so "Épinard" sorts after "Zucchini".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

/// Merge key of one shopping-list line: section plus case-folded name and unit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey {
    pub section: StoreSection,
    pub name: String,
    pub unit: String,
}

impl ItemKey {
    pub fn new(section: StoreSection, name: &str, unit: &str) -> Self {
        Self {
            section,
            name: name.trim().to_lowercase(),
            unit: unit.trim().to_lowercase(),
        }
    }
}

/// Rendered as `section__name__unit`, all lowercase.
impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{}",
            self.section.to_string().to_lowercase(),
            self.name,
            self.unit
        )
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ItemKeyError {
    #[error("Item key must look like section__name__unit: {0}")]
    Malformed(String),

    #[error("Unknown store section: {0}")]
    UnknownSection(String),
}

impl FromStr for ItemKey {
    type Err = ItemKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.splitn(3, KEY_SEPARATOR);
        let (Some(section), Some(name), Some(unit)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ItemKeyError::Malformed(value.to_string()));
        };

        let section = StoreSection::VARIANTS
            .iter()
            .copied()
            .find(|candidate| candidate.to_string().eq_ignore_ascii_case(section.trim()))
            .ok_or_else(|| ItemKeyError::UnknownSection(section.to_string()))?;

        Ok(Self::new(section, name, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_and_unit_defaults() {
        assert_eq!(normalize_name(Some("  Greek yogurt ")), "Greek yogurt");
        assert_eq!(normalize_name(Some("   ")), "Item");
        assert_eq!(normalize_name(None), "Item");
        assert_eq!(normalize_unit(Some(" cup")), "cup");
        assert_eq!(normalize_unit(Some("")), "unit");
        assert_eq!(normalize_unit(None), "unit");
    }

    #[test]
    fn test_normalize_qty_defaults_to_one() {
        assert_eq!(normalize_qty(Some(0.5)), 0.5);
        assert_eq!(normalize_qty(Some(0.0)), 1.0);
        assert_eq!(normalize_qty(Some(-2.0)), 1.0);
        assert_eq!(normalize_qty(Some(f64::NAN)), 1.0);
        assert_eq!(normalize_qty(Some(f64::INFINITY)), 1.0);
        assert_eq!(normalize_qty(None), 1.0);
    }

    #[test]
    fn test_item_key_is_case_insensitive() {
        let a = ItemKey::new(StoreSection::Dairy, "Greek Yogurt", "Cup");
        let b = ItemKey::new(StoreSection::Dairy, " greek yogurt ", "cup");
        let c = ItemKey::new(StoreSection::Dairy, "greek yogurt", "tbsp");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_item_key_text_form() {
        let key = ItemKey::new(StoreSection::MeatFish, "Smoked salmon", "slices");
        assert_eq!(key.to_string(), "meat/fish__smoked salmon__slices");

        let parsed: ItemKey = "Meat/Fish__Smoked Salmon__slices".parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_item_key_parse_errors() {
        assert_eq!(
            "dairy__milk".parse::<ItemKey>(),
            Err(ItemKeyError::Malformed("dairy__milk".to_string()))
        );
        assert_eq!(
            "produce__milk__cup".parse::<ItemKey>(),
            Err(ItemKeyError::UnknownSection("produce".to_string()))
        );
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Banana", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("egg", "Egg"), Ordering::Less);
        assert_eq!(locale_cmp("Eggs", "egg"), Ordering::Greater);
        assert_eq!(locale_cmp("Oats", "Oats"), Ordering::Equal);
        assert_eq!(locale_cmp("Salt & pepper", "Salt flakes"), Ordering::Less);
    }

    #[test]
    fn test_locale_cmp_keeps_accents() {
        assert_eq!(locale_cmp("Épinard", "Zucchini"), Ordering::Greater);
        assert_eq!(locale_cmp("épinard", "Épinard"), Ordering::Less);
    }
}
