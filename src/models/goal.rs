use std::fmt;

use crate::models::Calories;

/// Classification of total calories against the daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    NoGoal,
    WithinGoal,
    ExceededGoal,
}

impl GoalStatus {
    /// Classify a total against an optional goal. Equality counts as within.
    pub fn classify(total: Calories, goal: Option<Calories>) -> Self {
        match goal {
            None => GoalStatus::NoGoal,
            Some(goal) if total > goal => GoalStatus::ExceededGoal,
            Some(_) => GoalStatus::WithinGoal,
        }
    }

    /// Message shown under the totals, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GoalStatus::NoGoal => None,
            GoalStatus::WithinGoal => Some("You are within your daily calorie goal."),
            GoalStatus::ExceededGoal => Some("You have exceeded your daily calorie goal!"),
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GoalStatus::NoGoal => "no goal",
            GoalStatus::WithinGoal => "within goal",
            GoalStatus::ExceededGoal => "exceeded goal",
        };
        f.write_str(s)
    }
}
