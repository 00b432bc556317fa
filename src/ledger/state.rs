use tracing::debug;

use crate::models::{Calories, FoodEntry, GoalStatus, Meal, MealName, PendingFood};

/// In-memory state of one tracking session.
///
/// Every transition borrows the current snapshot and returns a new one, so a
/// renderer holding the previous value never observes a partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    /// Exactly one meal per `MealName`, indexed by `MealName::index`.
    meals: [Meal; 3],
    selected_meal: MealName,
    pending: PendingFood,
    calorie_goal: Option<Calories>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create a fresh ledger with three empty meals and Breakfast selected.
    pub fn new() -> Self {
        Self {
            meals: MealName::ALL.map(Meal::new),
            selected_meal: MealName::default(),
            pending: PendingFood::default(),
            calorie_goal: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Append a food entry to the end of `meal`.
    ///
    /// A blank name or non-positive calories leaves the ledger unchanged,
    /// pending buffers included. On success the pending buffers are cleared.
    pub fn add_food(&self, meal: MealName, name: &str, calories: Calories) -> Self {
        if !FoodEntry::is_acceptable(name, calories) {
            debug!(meal = %meal, name, calories = %calories, "rejected food entry");
            return self.clone();
        }

        let mut next = self.clone();
        next.meals[meal.index()]
            .foods
            .push(FoodEntry::new(name, calories));
        next.pending = PendingFood::default();
        debug!(meal = %meal, name, calories = %calories, "added food entry");
        next
    }

    /// Remove the entry at `index` from `meal`. Out-of-range indices are ignored.
    pub fn remove_food(&self, meal: MealName, index: usize) -> Self {
        let mut next = self.clone();
        let foods = &mut next.meals[meal.index()].foods;
        if index < foods.len() {
            let removed = foods.remove(index);
            debug!(meal = %meal, index, entry = %removed.debug_string(), "removed food entry");
        } else {
            debug!(meal = %meal, index, len = foods.len(), "remove index out of range");
        }
        next
    }

    /// Change the meal targeted by `submit_pending`.
    pub fn select_meal(&self, meal: MealName) -> Self {
        let mut next = self.clone();
        next.selected_meal = meal;
        debug!(meal = %meal, "selected meal");
        next
    }

    /// Set or clear the daily goal. Any value is taken literally.
    pub fn set_goal(&self, goal: Option<Calories>) -> Self {
        let mut next = self.clone();
        next.calorie_goal = goal;
        debug!(?goal, "set calorie goal");
        next
    }

    pub fn set_pending_name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.pending.name = name.into();
        next
    }

    pub fn set_pending_calories(&self, calories: Option<Calories>) -> Self {
        let mut next = self.clone();
        next.pending.calories = calories;
        next
    }

    /// Add the pending entry to the selected meal.
    ///
    /// Unset calories are treated as a rejected entry.
    pub fn submit_pending(&self) -> Self {
        match self.pending.calories {
            Some(calories) => self.add_food(self.selected_meal, &self.pending.name, calories),
            None => {
                debug!(name = %self.pending.name, "rejected pending entry without calories");
                self.clone()
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    /// All meals in display order.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal(&self, meal: MealName) -> &Meal {
        &self.meals[meal.index()]
    }

    pub fn selected_meal(&self) -> MealName {
        self.selected_meal
    }

    pub fn pending(&self) -> &PendingFood {
        &self.pending
    }

    pub fn calorie_goal(&self) -> Option<Calories> {
        self.calorie_goal
    }

    /// Sum of calories in one meal; 0 when the meal has no entries.
    pub fn meal_total(&self, meal: MealName) -> Calories {
        self.meal(meal).total_calories()
    }

    /// Meal total looked up by name; unknown names total 0.
    pub fn meal_total_named(&self, name: &str) -> Calories {
        MealName::parse(name)
            .map(|m| self.meal_total(m))
            .unwrap_or(Calories::ZERO)
    }

    /// Sum of every meal total. Fixed-point sums are exact, so this always
    /// equals `entry_total`.
    pub fn grand_total(&self) -> Calories {
        MealName::ALL.iter().map(|m| self.meal_total(*m)).sum()
    }

    /// Sum of every entry's calories across the ledger.
    pub fn entry_total(&self) -> Calories {
        self.entries().map(|(_, _, f)| f.calories).sum()
    }

    /// Every entry with its meal and position, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (MealName, usize, &FoodEntry)> {
        self.meals
            .iter()
            .flat_map(|m| m.foods.iter().enumerate().map(move |(i, f)| (m.name, i, f)))
    }

    /// Number of entries across all meals.
    pub fn food_count(&self) -> usize {
        self.meals.iter().map(Meal::len).sum()
    }

    pub fn goal_status(&self) -> GoalStatus {
        GoalStatus::classify(self.grand_total(), self.calorie_goal)
    }

    /// Calories left before the goal is reached; negative once exceeded.
    pub fn remaining_calories(&self) -> Option<Calories> {
        self.calorie_goal.map(|goal| goal - self.grand_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kcal(v: f64) -> Calories {
        Calories::from_kcal(v).unwrap()
    }

    fn sample_ledger() -> Ledger {
        Ledger::new()
            .add_food(MealName::Breakfast, "Eggs", kcal(140.0))
            .add_food(MealName::Lunch, "Sandwich", kcal(350.0))
            .add_food(MealName::Lunch, "Soda", kcal(150.0))
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert_eq!(ledger.meals().len(), 3);
        assert_eq!(ledger.selected_meal(), MealName::Breakfast);
        assert_eq!(ledger.food_count(), 0);
        assert_eq!(ledger.grand_total(), Calories::ZERO);
        assert_eq!(ledger.calorie_goal(), None);
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn test_meals_in_display_order() {
        let names: Vec<MealName> = Ledger::new().meals().iter().map(|m| m.name).collect();
        assert_eq!(names, MealName::ALL.to_vec());
    }

    #[test]
    fn test_add_food_appends() {
        let ledger = sample_ledger();
        let lunch = ledger.meal(MealName::Lunch);
        assert_eq!(lunch.foods[0].name, "Sandwich");
        assert_eq!(lunch.foods[1].name, "Soda");
        assert_eq!(ledger.meal(MealName::Dinner).len(), 0);
    }

    #[test]
    fn test_add_food_leaves_previous_snapshot() {
        let before = Ledger::new();
        let after = before.add_food(MealName::Dinner, "Pasta", kcal(600.0));
        assert_eq!(before.food_count(), 0);
        assert_eq!(after.food_count(), 1);
    }

    #[test]
    fn test_rejected_add_keeps_pending() {
        let ledger = Ledger::new()
            .set_pending_name("   ")
            .set_pending_calories(Some(kcal(100.0)));
        let after = ledger.submit_pending();
        assert_eq!(after, ledger);
        assert_eq!(after.pending().calories, Some(kcal(100.0)));
    }

    #[test]
    fn test_submit_pending_clears_buffers() {
        let ledger = Ledger::new()
            .select_meal(MealName::Dinner)
            .set_pending_name("Salad")
            .set_pending_calories(Some(kcal(220.0)))
            .submit_pending();

        assert_eq!(ledger.meal_total(MealName::Dinner), kcal(220.0));
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn test_submit_pending_without_calories_is_noop() {
        let ledger = Ledger::new().set_pending_name("Apple");
        let after = ledger.submit_pending();
        assert_eq!(after.food_count(), 0);
        assert_eq!(after.pending().name, "Apple");
    }

    #[test]
    fn test_remove_food_shifts_entries() {
        let ledger = sample_ledger()
            .add_food(MealName::Lunch, "Cookie", kcal(80.0))
            .remove_food(MealName::Lunch, 1);

        let names: Vec<&str> = ledger
            .meal(MealName::Lunch)
            .foods
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sandwich", "Cookie"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let ledger = sample_ledger();
        assert_eq!(ledger.remove_food(MealName::Dinner, 0), ledger);
        assert_eq!(ledger.remove_food(MealName::Lunch, 2), ledger);
    }

    #[test]
    fn test_meal_total_named() {
        let ledger = sample_ledger();
        assert_eq!(ledger.meal_total_named("lunch"), kcal(500.0));
        assert_eq!(ledger.meal_total_named("Supper"), Calories::ZERO);
    }

    #[test]
    fn test_totals_agree() {
        let ledger = sample_ledger();
        assert_eq!(ledger.grand_total(), kcal(640.0));
        assert_eq!(ledger.entry_total(), ledger.grand_total());
        assert_eq!(ledger.food_count(), 3);
    }

    #[test]
    fn test_fractional_totals_agree() {
        let ledger = Ledger::new()
            .add_food(MealName::Breakfast, "Mint", kcal(0.1))
            .add_food(MealName::Lunch, "Gum", kcal(0.2))
            .add_food(MealName::Lunch, "Tea", kcal(0.3));

        assert_eq!(ledger.grand_total(), kcal(0.6));
        assert_eq!(ledger.entry_total(), ledger.grand_total());
    }

    #[test]
    fn test_remaining_calories() {
        let ledger = sample_ledger();
        assert_eq!(ledger.remaining_calories(), None);
        assert_eq!(
            ledger.set_goal(Some(kcal(600.0))).remaining_calories(),
            Some(kcal(-40.0))
        );
    }
}
