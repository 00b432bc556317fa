use dialoguer::{Confirm, Input, Select};
use tracing::{debug, info};

use crate::config::DisplayConfig;
use crate::error::Result;
use crate::interface::render::display_ledger;
use crate::ledger::{Action, Ledger};
use crate::models::{Calories, MealName, PendingFood};

/// Entries in the session menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddFood,
    RemoveFood,
    SelectMeal,
    SetGoal,
    ClearGoal,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddFood,
        MenuChoice::RemoveFood,
        MenuChoice::SelectMeal,
        MenuChoice::SetGoal,
        MenuChoice::ClearGoal,
        MenuChoice::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddFood => "Add food",
            MenuChoice::RemoveFood => "Remove food",
            MenuChoice::SelectMeal => "Select meal",
            MenuChoice::SetGoal => "Set daily calorie goal",
            MenuChoice::ClearGoal => "Clear daily calorie goal",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Prompt for the name of a food. May be blank.
pub fn prompt_food_name() -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("Food name")
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for a calorie amount. Blank or non-numeric input is unset.
pub fn prompt_calories(prompt: &str) -> Result<Option<Calories>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    Ok(PendingFood::parse_calories(&input))
}

/// Prompt for a meal, starting on `current`.
pub fn prompt_meal(current: MealName) -> Result<MealName> {
    let options: Vec<&str> = MealName::ALL.iter().map(|m| m.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Select meal")
        .items(&options)
        .default(current.index())
        .interact()?;

    Ok(MealName::ALL.get(selection).copied().unwrap_or(current))
}

/// Prompt for an entry to remove. Returns `None` when cancelled or empty.
pub fn prompt_entry_to_remove(ledger: &Ledger) -> Result<Option<(MealName, usize)>> {
    let entries: Vec<(MealName, usize, String)> = ledger
        .entries()
        .map(|(meal, i, f)| (meal, i, format!("{}: {} - {} kcal", meal, f.name, f.calories)))
        .collect();

    if entries.is_empty() {
        println!("Nothing to remove.");
        return Ok(None);
    }

    let mut options: Vec<&str> = entries.iter().map(|(_, _, label)| label.as_str()).collect();
    options.push("Cancel");

    let selection = Select::new()
        .with_prompt("Remove which food?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(entries.get(selection).map(|(meal, i, _)| (*meal, *i)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_menu(ledger: &Ledger) -> Result<MenuChoice> {
    let labels: Vec<String> = MenuChoice::ALL
        .iter()
        .map(|c| match c {
            MenuChoice::AddFood => format!("{} (to {})", c.label(), ledger.selected_meal()),
            _ => c.label().to_string(),
        })
        .collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuChoice::ALL
        .get(selection)
        .copied()
        .unwrap_or(MenuChoice::Quit))
}

/// Translate one menu choice into ledger actions by prompting for its inputs.
fn collect_actions(choice: MenuChoice, ledger: &Ledger) -> Result<Vec<Action>> {
    let actions = match choice {
        MenuChoice::AddFood => {
            let name = prompt_food_name()?;
            let calories = prompt_calories("Calories")?;
            vec![
                Action::SetPendingName { name },
                Action::SetPendingCalories { calories },
                Action::Submit,
            ]
        }
        MenuChoice::RemoveFood => match prompt_entry_to_remove(ledger)? {
            Some((meal, index)) => vec![Action::RemoveFood { meal, index }],
            None => Vec::new(),
        },
        MenuChoice::SelectMeal => vec![Action::SelectMeal {
            meal: prompt_meal(ledger.selected_meal())?,
        }],
        MenuChoice::SetGoal => match prompt_calories("Daily calorie goal")? {
            Some(goal) => vec![Action::SetGoal { goal }],
            None => {
                println!("Goal unchanged.");
                Vec::new()
            }
        },
        MenuChoice::ClearGoal => vec![Action::ClearGoal],
        MenuChoice::Quit => Vec::new(),
    };
    Ok(actions)
}

/// Run the interactive session until the user quits.
///
/// The ledger is re-rendered after every action. Returns the final snapshot.
pub fn run_session(initial: Ledger, display: &DisplayConfig) -> Result<Ledger> {
    let mut ledger = initial;
    display_ledger(&ledger, display);

    loop {
        let choice = prompt_menu(&ledger)?;
        debug!(?choice, "menu choice");

        if choice == MenuChoice::Quit {
            if ledger.food_count() == 0 || prompt_yes_no("Quit and discard this session?", true)? {
                break;
            }
            continue;
        }

        let actions = collect_actions(choice, &ledger)?;
        let next = ledger.apply_all(&actions);

        if choice == MenuChoice::AddFood && next.food_count() == ledger.food_count() {
            println!("Nothing added: enter a name and a calorie count above zero.");
        }

        ledger = next;
        debug!(status = %ledger.goal_status(), "applied menu choice");
        display_ledger(&ledger, display);
    }

    info!(
        entries = ledger.food_count(),
        total = %ledger.grand_total(),
        status = %ledger.goal_status(),
        "session ended"
    );
    Ok(ledger)
}
