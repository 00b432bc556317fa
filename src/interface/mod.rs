pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_csv;
pub use prompts::{
    prompt_calories, prompt_entry_to_remove, prompt_food_name, prompt_meal, prompt_yes_no,
    run_session, MenuChoice,
};
pub use render::{display_ledger, format_ledger};
