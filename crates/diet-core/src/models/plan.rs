// ABOUTME: Daily and weekly meal plan models with calorie accounting
// ABOUTME: Also holds the name/calorie plan shape produced by the normalizer and fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recipe::MealChoice;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// One day of catalog-drawn meals
///
/// Fields are private: totals are computed once in [`DailyPlan::new`] so they
/// always equal the sum of the slots they describe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    breakfast: MealChoice,
    lunch: MealChoice,
    dinner: MealChoice,
    snacks: Vec<MealChoice>,
    total_calories: u32,
    calorie_target: u32,
    remaining_calories: i64,
}

impl DailyPlan {
    /// Assemble a plan and compute its totals
    #[must_use]
    pub fn new(
        breakfast: MealChoice,
        lunch: MealChoice,
        dinner: MealChoice,
        snacks: Vec<MealChoice>,
        calorie_target: u32,
    ) -> Self {
        let total_calories = [&breakfast, &lunch, &dinner]
            .into_iter()
            .chain(snacks.iter())
            .map(MealChoice::calories)
            .fold(0_u32, u32::saturating_add);
        let remaining_calories = i64::from(calorie_target) - i64::from(total_calories);

        Self {
            breakfast,
            lunch,
            dinner,
            snacks,
            total_calories,
            calorie_target,
            remaining_calories,
        }
    }

    /// Breakfast slot
    #[must_use]
    pub const fn breakfast(&self) -> &MealChoice {
        &self.breakfast
    }

    /// Lunch slot
    #[must_use]
    pub const fn lunch(&self) -> &MealChoice {
        &self.lunch
    }

    /// Dinner slot
    #[must_use]
    pub const fn dinner(&self) -> &MealChoice {
        &self.dinner
    }

    /// Snack entries, at least one
    #[must_use]
    pub fn snacks(&self) -> &[MealChoice] {
        &self.snacks
    }

    /// Sum of all slot calories
    #[must_use]
    pub const fn total_calories(&self) -> u32 {
        self.total_calories
    }

    /// Caller-supplied daily target
    #[must_use]
    pub const fn calorie_target(&self) -> u32 {
        self.calorie_target
    }

    /// Target minus total; negative when the plan overshoots
    #[must_use]
    pub const fn remaining_calories(&self) -> i64 {
        self.remaining_calories
    }

    /// Every slot in day order, snacks last
    pub fn meals(&self) -> impl Iterator<Item = &MealChoice> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .chain(self.snacks.iter())
    }
}

/// Calendar day of a weekly plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// Monday through Sunday
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// English day name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Seven independently generated daily plans keyed by weekday
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeeklyPlan(BTreeMap<Weekday, DailyPlan>);

impl WeeklyPlan {
    /// Build a week by calling `day_plan` once per weekday, Monday first
    pub fn from_fn(mut day_plan: impl FnMut(Weekday) -> DailyPlan) -> Self {
        Self(
            Weekday::ALL
                .into_iter()
                .map(|day| (day, day_plan(day)))
                .collect(),
        )
    }

    /// Plan for one day
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&DailyPlan> {
        self.0.get(&day)
    }

    /// Number of days (always seven for a constructed plan)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the plan holds no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Days in calendar order
    pub fn iter(&self) -> btree_map::Iter<'_, Weekday, DailyPlan> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a WeeklyPlan {
    type Item = (&'a Weekday, &'a DailyPlan);
    type IntoIter = btree_map::Iter<'a, Weekday, DailyPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A named dish with a calorie value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Dish name
    pub name: String,
    /// Energy in kcal
    pub calories: u32,
}

impl PlanItem {
    /// Convenience constructor
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }
}

/// Well-formed name/calorie plan repaired from untrusted data or synthesized locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlan {
    breakfast: PlanItem,
    lunch: PlanItem,
    dinner: PlanItem,
    snacks: Vec<PlanItem>,
    total_calories: u32,
}

impl NormalizedPlan {
    /// Assemble a plan; the total is recomputed from the items
    #[must_use]
    pub fn new(breakfast: PlanItem, lunch: PlanItem, dinner: PlanItem, snacks: Vec<PlanItem>) -> Self {
        let total_calories = [breakfast.calories, lunch.calories, dinner.calories]
            .into_iter()
            .chain(snacks.iter().map(|snack| snack.calories))
            .fold(0_u32, u32::saturating_add);
        Self {
            breakfast,
            lunch,
            dinner,
            snacks,
            total_calories,
        }
    }

    /// Breakfast item
    #[must_use]
    pub const fn breakfast(&self) -> &PlanItem {
        &self.breakfast
    }

    /// Lunch item
    #[must_use]
    pub const fn lunch(&self) -> &PlanItem {
        &self.lunch
    }

    /// Dinner item
    #[must_use]
    pub const fn dinner(&self) -> &PlanItem {
        &self.dinner
    }

    /// Snack items, at least one
    #[must_use]
    pub fn snacks(&self) -> &[PlanItem] {
        &self.snacks
    }

    /// Sum of all item calories
    #[must_use]
    pub const fn total_calories(&self) -> u32 {
        self.total_calories
    }
}
