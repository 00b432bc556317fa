mod calories;
mod food;
mod goal;
mod meal;

pub use calories::Calories;
pub use food::{FoodEntry, PendingFood};
pub use goal::GoalStatus;
pub use meal::{Meal, MealName};
