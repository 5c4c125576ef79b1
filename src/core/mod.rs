pub mod merge;
pub mod overrides;
pub mod resolve;
pub mod rules;
pub mod schedule;

pub use crate::domain::model::{
    MergedEntry, Recipe, RecipeStep, ResolvedStep, Schedule, ScheduleEntry, StepOverride, StepRule,
};
pub use crate::utils::error::Result;

pub use self::merge::merge_timelines;
pub use self::overrides::resolve_override;
pub use self::resolve::resolve_step;
pub use self::rules::apply_rule;
pub use self::schedule::{schedule, DONE_LABEL};
