mod action;
mod script;
mod state;

pub use action::Action;
pub use script::{load_script, replay_script};
pub use state::Ledger;
