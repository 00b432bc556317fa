use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::ledger::{Action, Ledger};

/// Load a list of actions from a JSON file.
pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<Action>> {
    let content = fs::read_to_string(path.as_ref())?;
    let actions: Vec<Action> = serde_json::from_str(&content)?;
    info!(path = %path.as_ref().display(), count = actions.len(), "loaded action script");
    Ok(actions)
}

/// Replay a script against a fresh ledger.
pub fn replay_script<P: AsRef<Path>>(path: P) -> Result<Ledger> {
    let actions = load_script(path)?;
    Ok(Ledger::new().apply_all(&actions))
}
