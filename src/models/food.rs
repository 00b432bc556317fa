use serde::{Deserialize, Serialize};

use crate::models::Calories;

/// A named item with a calorie count, recorded under one meal.
///
/// Entries are created by the ledger's add operation and dropped by its
/// remove operation; they are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub calories: Calories,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>, calories: Calories) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }

    /// Whether a candidate name and calorie count may be recorded.
    ///
    /// The name must be non-blank after trimming and the calories strictly
    /// positive. Nothing else is checked.
    pub fn is_acceptable(name: &str, calories: Calories) -> bool {
        !name.trim().is_empty() && calories.is_positive()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!("{}: {} kcal", self.name, self.calories)
    }
}

/// Input buffers for a food entry that has not been submitted yet.
///
/// Unset calories stay `None` rather than being coerced to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingFood {
    pub name: String,
    pub calories: Option<Calories>,
}

impl PendingFood {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.calories.is_none()
    }

    /// Parse raw text from a calories field. Blank or non-numeric text is unset.
    pub fn parse_calories(raw: &str) -> Option<Calories> {
        raw.parse().ok()
    }
}
