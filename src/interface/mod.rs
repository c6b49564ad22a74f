pub mod prompts;
pub mod render;

pub use prompts::{
    collect_roster, prompt_age, prompt_allergies, prompt_child_name, prompt_days,
    prompt_preferences, prompt_yes_no,
};
pub use render::{
    display_catalog, display_lunchbox_plan, format_grocery_list, format_lunchbox_plan,
};
