use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use calorie_tracker_rs::config::DisplayConfig;
use calorie_tracker_rs::interface::{format_ledger, write_csv};
use calorie_tracker_rs::error::TrackerError;
use calorie_tracker_rs::ledger::replay_script;
use calorie_tracker_rs::models::{Calories, GoalStatus, MealName};

const DAY_SCRIPT: &str = r#"[
    {"action": "set_goal", "goal": 1200},
    {"action": "add_food", "meal": "Breakfast", "name": "Eggs", "calories": 140},
    {"action": "select_meal", "meal": "lunch"},
    {"action": "set_pending_name", "name": "Sandwich"},
    {"action": "set_pending_calories", "calories": 350},
    {"action": "submit"},
    {"action": "set_pending_name", "name": "Chips"},
    {"action": "submit"},
    {"action": "add_food", "meal": "Dinner", "name": "Pasta", "calories": 800},
    {"action": "remove_food", "meal": "Dinner", "index": 3}
]"#;

fn kcal(v: f64) -> Calories {
    Calories::from_kcal(v).unwrap()
}

fn script_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_replay_day() {
    let file = script_file(DAY_SCRIPT);
    let ledger = replay_script(file.path()).unwrap();

    assert_eq!(ledger.meal_total(MealName::Breakfast), kcal(140.0));
    assert_eq!(ledger.meal_total(MealName::Lunch), kcal(350.0));
    assert_eq!(ledger.meal_total(MealName::Dinner), kcal(800.0));
    assert_eq!(ledger.grand_total(), kcal(1290.0));
    assert_eq!(ledger.goal_status(), GoalStatus::ExceededGoal);
    assert_eq!(ledger.remaining_calories(), Some(kcal(-90.0)));

    // "Chips" had no calories, so its name is still pending.
    assert_eq!(ledger.pending().name, "Chips");
    assert_eq!(ledger.pending().calories, None);
}

#[test]
fn test_replay_render_and_export() {
    let file = script_file(DAY_SCRIPT);
    let ledger = replay_script(file.path()).unwrap();

    let view = format_ledger(&ledger, &DisplayConfig::default());
    assert!(view.contains("Lunch *"));
    assert!(view.contains("Calories Consumed: 1290 kcal"));
    assert!(view.contains("You have exceeded your daily calorie goal!"));

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("day.csv");
    write_csv(&ledger, &csv_path).unwrap();

    let content = fs::read_to_string(&csv_path).unwrap();
    assert!(content.starts_with("meal,index,name,calories"));
    assert!(content.contains("Lunch,0,Sandwich,350"));
    assert!(content.trim_end().ends_with("Total,,,1290"));
}

#[test]
fn test_replay_unknown_meal_fails() {
    let file = script_file(r#"[{"action": "add_food", "meal": "Brunch", "name": "Waffles", "calories": 400}]"#);
    assert!(replay_script(file.path()).is_err());
}

#[test]
fn test_replay_fractional_day_is_exact() {
    let file = script_file(
        r#"[
            {"action": "set_goal", "goal": 0.3},
            {"action": "add_food", "meal": "Breakfast", "name": "Mint", "calories": 0.1},
            {"action": "add_food", "meal": "Lunch", "name": "Gum", "calories": 0.2}
        ]"#,
    );
    let ledger = replay_script(file.path()).unwrap();

    assert_eq!(ledger.grand_total(), kcal(0.3));
    assert_eq!(ledger.goal_status(), GoalStatus::WithinGoal);

    let view = format_ledger(&ledger, &DisplayConfig::default());
    assert!(view.contains("[0] Mint - 0.1 kcal"));
    assert!(view.contains("Calories Consumed: 0.3 kcal"));
}

#[test]
fn test_replay_non_finite_calories_fails() {
    let file = script_file(r#"[{"action": "set_goal", "goal": 1e400}]"#);
    assert!(replay_script(file.path()).is_err());
}

#[test]
fn test_replay_missing_script_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = replay_script(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, TrackerError::Io(_)));
}
