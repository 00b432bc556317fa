use std::fmt;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::models::{Calories, FoodEntry};

/// Minimum similarity for a meal name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// One of the fixed meal categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealName {
    #[default]
    #[serde(alias = "breakfast")]
    Breakfast,
    #[serde(alias = "lunch")]
    Lunch,
    #[serde(alias = "dinner")]
    Dinner,
}

impl MealName {
    /// All meals in display order.
    pub const ALL: [MealName; 3] = [MealName::Breakfast, MealName::Lunch, MealName::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealName::Breakfast => "Breakfast",
            MealName::Lunch => "Lunch",
            MealName::Dinner => "Dinner",
        }
    }

    /// Position of this meal in the ledger.
    pub fn index(&self) -> usize {
        match self {
            MealName::Breakfast => 0,
            MealName::Lunch => 1,
            MealName::Dinner => 2,
        }
    }

    /// Case-insensitive lookup of a meal by name.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(input))
    }

    /// Closest known meal name for a misspelled input, if any is close enough.
    pub fn suggest(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .map(|m| (m, jaro_winkler(&m.as_str().to_lowercase(), &input)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(m, _)| m)
    }
}

impl fmt::Display for MealName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A meal and its food entries in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub name: MealName,
    pub foods: Vec<FoodEntry>,
}

impl Meal {
    pub fn new(name: MealName) -> Self {
        Self {
            name,
            foods: Vec::new(),
        }
    }

    /// Sum of calories over every entry, in list order.
    pub fn total_calories(&self) -> Calories {
        self.foods.iter().map(|f| f.calories).sum()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
