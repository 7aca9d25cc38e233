use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Store section used to group the shopping list for in-store navigation.
///
/// Declaration order is the aisle order the list is printed in, so the derived
/// `Ord` doubles as the display order.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum StoreSection {
    Vegetables,
    Fruits,
    #[strum(serialize = "Meat/Fish")]
    #[serde(rename = "Meat/Fish")]
    MeatFish,
    Dairy,
    Grains,
    Pantry,
    #[strum(serialize = "Spices/Condiments")]
    #[serde(rename = "Spices/Condiments")]
    SpicesCondiments,
    Bakery,
    Frozen,
    #[default]
    Other,
}

impl StoreSection {
    /// Maps an authored section label onto the closed set.
    ///
    /// Only an exact (trimmed) match is accepted; anything else lands in `Other`.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .and_then(|section| section.parse().ok())
            .unwrap_or_default()
    }
}
