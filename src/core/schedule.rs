use crate::core::resolve::resolve_step;
use crate::domain::model::{Recipe, ResolvedStep, Schedule, ScheduleEntry};

/// Label of the synthetic terminal entry appended to every schedule.
pub const DONE_LABEL: &str = "Done";

/// Resolves a recipe into a timed schedule for the given film count.
///
/// Steps run back to back from t = 0; each entry carries its start offset
/// in minutes. A zero-duration terminal entry labelled [`DONE_LABEL`]
/// marks the end of the process, so an empty recipe still yields one
/// entry at offset 0.
pub fn schedule(recipe: &Recipe, quantity: u32) -> Schedule {
    let mut entries = Vec::with_capacity(recipe.steps.len() + 1);
    let mut accumulated = 0.0;

    for step in &recipe.steps {
        let resolved = resolve_step(step, quantity);
        tracing::debug!(
            "{}: '{}' starts at {} for {} min",
            recipe.name,
            resolved.label,
            accumulated,
            resolved.duration
        );
        let duration = resolved.duration;
        entries.push(ScheduleEntry {
            start_offset: accumulated,
            step: resolved,
        });
        accumulated += duration;
    }

    entries.push(ScheduleEntry {
        start_offset: accumulated,
        step: terminal_marker(),
    });

    Schedule {
        entries,
        total_duration: accumulated,
    }
}

fn terminal_marker() -> ResolvedStep {
    ResolvedStep {
        label: DONE_LABEL.to_string(),
        details: None,
        duration: 0.0,
        temperature_min: None,
        temperature_max: None,
    }
}
