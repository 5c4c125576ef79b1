use crate::core::overrides::resolve_override;
use crate::core::rules::apply_rule;
use crate::domain::model::{RecipeStep, ResolvedStep};

/// Resolves one step to concrete values for the given film count.
///
/// Overrides take precedence over the rule: once an override is selected
/// the rule is ignored entirely, even when the override leaves duration
/// unset. Fields the override does not set fall back to the step's base
/// values. Pure: identical inputs always produce identical outputs, which
/// is what lets a host re-invoke this on every batch-size change.
pub fn resolve_step(step: &RecipeStep, quantity: u32) -> ResolvedStep {
    match resolve_override(step, quantity) {
        Some(ov) => ResolvedStep {
            label: ov.label.clone().unwrap_or_else(|| step.label.clone()),
            details: ov.details.clone().or_else(|| step.details.clone()),
            duration: ov.duration.unwrap_or(step.base_duration),
            temperature_min: Some(ov.temperature_min.unwrap_or(step.temperature_min)),
            temperature_max: ov.temperature_max.or(step.temperature_max),
        },
        None => ResolvedStep {
            label: step.label.clone(),
            details: step.details.clone(),
            duration: apply_rule(step.base_duration, step.rule.as_ref(), quantity),
            temperature_min: Some(step.temperature_min),
            temperature_max: step.temperature_max,
        },
    }
}
