pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::recipe_file::RecipeFileSource;
pub use config::CliConfig;

pub use crate::core::{
    apply_rule, merge_timelines, resolve_override, resolve_step, schedule, DONE_LABEL,
};
pub use domain::model::{
    MergedEntry, Recipe, RecipeStep, ResolvedStep, Schedule, ScheduleEntry, StepOverride, StepRule,
};
pub use domain::ports::RecipeSource;
pub use utils::error::{Result, TimerError};
