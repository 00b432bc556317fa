use clap::Parser;

use calorie_tracker_rs::cli::{resolve_goal, resolve_meal, Cli, Command};
use calorie_tracker_rs::config::Config;
use calorie_tracker_rs::error::Result;
use calorie_tracker_rs::interface::{display_ledger, run_session, write_csv};
use calorie_tracker_rs::ledger::{replay_script, Ledger};
use calorie_tracker_rs::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Session { goal, meal } => cmd_session(&config, goal, meal.as_deref()),
        Command::Replay { script, csv } => cmd_replay(&config, &script, csv.as_deref()),
    }
}

/// Run an interactive session. Flags override config defaults.
fn cmd_session(config: &Config, goal: Option<f64>, meal: Option<&str>) -> Result<()> {
    let meal = match meal {
        Some(input) => resolve_meal(input)?,
        None => config.ledger.default_meal,
    };
    let goal = resolve_goal(goal.or(config.ledger.default_goal))?;

    let ledger = Ledger::new().select_meal(meal).set_goal(goal);

    let ledger = run_session(ledger, &config.display)?;
    println!(
        "Session ended with {} foods, {} kcal.",
        ledger.food_count(),
        ledger.grand_total()
    );
    Ok(())
}

/// Replay a script of actions and print the resulting ledger.
fn cmd_replay(
    config: &Config,
    script: &std::path::Path,
    csv: Option<&std::path::Path>,
) -> Result<()> {
    let ledger = replay_script(script)?;
    display_ledger(&ledger, &config.display);

    if let Some(path) = csv {
        write_csv(&ledger, path)?;
        println!("Entries exported to {}.", path.display());
    }

    Ok(())
}
