use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;
use crate::models::{Calories, MealName};

/// A single user action against the ledger.
///
/// Serialized with an `action` tag, e.g.
/// `{"action": "add_food", "meal": "Lunch", "name": "Soda", "calories": 150}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    AddFood {
        meal: MealName,
        name: String,
        calories: Calories,
    },
    RemoveFood {
        meal: MealName,
        index: usize,
    },
    SelectMeal {
        meal: MealName,
    },
    SetGoal {
        goal: Calories,
    },
    ClearGoal,
    SetPendingName {
        name: String,
    },
    SetPendingCalories {
        #[serde(default)]
        calories: Option<Calories>,
    },
    /// Add the pending entry to the selected meal.
    Submit,
}

impl Ledger {
    /// Apply one action and return the resulting snapshot.
    pub fn apply(&self, action: &Action) -> Ledger {
        match action {
            Action::AddFood {
                meal,
                name,
                calories,
            } => self.add_food(*meal, name, *calories),
            Action::RemoveFood { meal, index } => self.remove_food(*meal, *index),
            Action::SelectMeal { meal } => self.select_meal(*meal),
            Action::SetGoal { goal } => self.set_goal(Some(*goal)),
            Action::ClearGoal => self.set_goal(None),
            Action::SetPendingName { name } => self.set_pending_name(name.clone()),
            Action::SetPendingCalories { calories } => self.set_pending_calories(*calories),
            Action::Submit => self.submit_pending(),
        }
    }

    /// Apply a sequence of actions to this ledger in order.
    pub fn apply_all<'a, I>(&self, actions: I) -> Ledger
    where
        I: IntoIterator<Item = &'a Action>,
    {
        actions
            .into_iter()
            .fold(self.clone(), |ledger, action| ledger.apply(action))
    }
}
