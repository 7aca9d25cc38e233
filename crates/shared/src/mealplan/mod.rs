use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::RecipeId;

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
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Clamps a loosely typed portion count to a whole number of at least one.
pub fn sanitize_portions(value: f64) -> u32 {
    if !value.is_finite() {
        return 1;
    }

    let floored = value.floor();
    if floored < 1.0 {
        1
    } else if floored >= u32::MAX as f64 {
        u32::MAX
    } else {
        floored as u32
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub recipe_id: RecipeId,
    pub portions: u32,
}

impl PlanEntry {
    pub fn new(recipe_id: impl Into<RecipeId>, portions: u32) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            portions: portions.max(1),
        }
    }
}

/// One optional recipe per weekday.
///
/// Serialized as an object keyed by day name with `null` for empty days.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(into = "PlanRecord")]
pub struct WeeklyPlan {
    slots: [Option<PlanEntry>; 7],
}

impl WeeklyPlan {
    pub fn get(&self, day: Day) -> Option<&PlanEntry> {
        self.slots[day.index()].as_ref()
    }

    /// Puts `entry` on `day`, returning whatever was planned there before.
    pub fn insert(&mut self, day: Day, entry: PlanEntry) -> Option<PlanEntry> {
        self.slots[day.index()].replace(entry)
    }

    pub fn remove(&mut self, day: Day) -> Option<PlanEntry> {
        self.slots[day.index()].take()
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    pub fn has_any(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Every day in Monday..Sunday order with its entry, if any.
    pub fn days(&self) -> impl Iterator<Item = (Day, Option<&PlanEntry>)> {
        Day::ALL.into_iter().map(|day| (day, self.get(day)))
    }

    /// Planned days only, in Monday..Sunday order.
    pub fn entries(&self) -> impl Iterator<Item = (Day, &PlanEntry)> {
        self.days()
            .filter_map(|(day, entry)| entry.map(|entry| (day, entry)))
    }
}

/// On-disk shape of a plan: every weekday present, `null` when empty.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct PlanRecord {
    monday: Option<PlanEntry>,
    tuesday: Option<PlanEntry>,
    wednesday: Option<PlanEntry>,
    thursday: Option<PlanEntry>,
    friday: Option<PlanEntry>,
    saturday: Option<PlanEntry>,
    sunday: Option<PlanEntry>,
}

impl From<WeeklyPlan> for PlanRecord {
    fn from(plan: WeeklyPlan) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = plan.slots;
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}
