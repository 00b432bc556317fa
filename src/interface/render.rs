use std::fmt::Write as _;

use crate::config::DisplayConfig;
use crate::ledger::Ledger;
use crate::models::GoalStatus;

/// Format the full ledger view: goal, meals with entries, totals and status.
pub fn format_ledger(ledger: &Ledger, display: &DisplayConfig) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "=== Calorie Tracker ===");
    let _ = writeln!(out);

    for meal in ledger.meals() {
        let marker = if meal.name == ledger.selected_meal() {
            " *"
        } else {
            ""
        };
        let _ = writeln!(out, "{}{}", meal.name, marker);

        if meal.is_empty() {
            let _ = writeln!(out, "  (no foods)");
        }
        for (i, food) in meal.foods.iter().enumerate() {
            if display.show_indices {
                let _ = writeln!(out, "  [{}] {} - {} kcal", i, food.name, food.calories);
            } else {
                let _ = writeln!(out, "  {} - {} kcal", food.name, food.calories);
            }
        }
        let _ = writeln!(out, "  Total Calories: {} kcal", meal.total_calories());
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "--- Summary ---");
    let _ = writeln!(out, "Calories Consumed: {} kcal", ledger.grand_total());
    if let Some(goal) = ledger.calorie_goal() {
        let _ = writeln!(out, "Daily Calorie Goal: {} kcal", goal);
    }
    if let Some(remaining) = ledger.remaining_calories() {
        let _ = writeln!(out, "Remaining: {} kcal", remaining);
    }

    let status = ledger.goal_status();
    if let Some(message) = status.message() {
        let indicator = match status {
            GoalStatus::ExceededGoal => "[!]",
            _ => "[ok]",
        };
        let _ = writeln!(out, "{} {}", indicator, message);
    }

    out
}

/// Print the ledger view to stdout.
pub fn display_ledger(ledger: &Ledger, display: &DisplayConfig) {
    println!();
    print!("{}", format_ledger(ledger, display));
    println!();
}
