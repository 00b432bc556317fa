use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::error::{Result, TrackerError};
use crate::models::{Calories, MealName};

/// Calorie Tracker — log foods per meal and compare the day against a goal.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive tracking session.
    Session {
        /// Daily calorie goal to start with.
        #[arg(long)]
        goal: Option<f64>,

        /// Meal selected at startup.
        #[arg(long)]
        meal: Option<String>,
    },

    /// Apply a JSON list of actions to a fresh ledger and print the result.
    Replay {
        /// Path to the JSON action script.
        script: PathBuf,

        /// Also export the resulting entries as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Session {
            goal: None,
            meal: None,
        }
    }
}

/// Resolve a meal name typed on the command line.
pub fn resolve_meal(input: &str) -> Result<MealName> {
    MealName::parse(input).ok_or_else(|| TrackerError::UnknownMeal {
        input: input.to_string(),
        suggestion: MealName::suggest(input).map(|m| m.as_str()),
    })
}

/// Convert a goal typed on the command line. Non-finite values are rejected.
pub fn resolve_goal(goal: Option<f64>) -> Result<Option<Calories>> {
    goal.map(|kcal| {
        Calories::from_kcal(kcal).ok_or_else(|| {
            TrackerError::InvalidInput(format!("goal must be a finite number, got {}", kcal))
        })
    })
    .transpose()
}
