pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod ledger;
pub mod logging;
pub mod models;

pub use error::{Result, TrackerError};
pub use ledger::{Action, Ledger};
pub use models::{Calories, FoodEntry, GoalStatus, Meal, MealName};
