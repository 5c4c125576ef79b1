use crate::domain::model::{RecipeStep, StepOverride};

/// Picks the override in effect for `quantity`, if any.
///
/// An override whose inclusive range contains the quantity wins; the first
/// such override in input order is taken when ranges overlap. When no
/// range contains the quantity, the override whose range ended most
/// recently (largest `film_count_max` still at or below the quantity)
/// stays in effect, so sparse schedules like "films 10-12" keep applying
/// at film 15 instead of reverting to the base step. Below every range,
/// the base step values apply and `None` is returned.
pub fn resolve_override(step: &RecipeStep, quantity: u32) -> Option<&StepOverride> {
    if let Some(hit) = step
        .overrides
        .iter()
        .find(|o| quantity >= o.film_count_min && quantity <= o.film_count_max)
    {
        return Some(hit);
    }

    let mut last_ended: Option<&StepOverride> = None;
    for candidate in &step.overrides {
        if candidate.film_count_max <= quantity
            && last_ended.map_or(true, |best| candidate.film_count_max > best.film_count_max)
        {
            last_ended = Some(candidate);
        }
    }
    last_ended
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overriding(min: u32, max: u32, duration: f64) -> StepOverride {
        StepOverride {
            film_count_min: min,
            film_count_max: max,
            duration: Some(duration),
            label: None,
            details: None,
            temperature_min: None,
            temperature_max: None,
        }
    }

    fn step_with(overrides: Vec<StepOverride>) -> RecipeStep {
        RecipeStep {
            label: "Developer".to_string(),
            details: None,
            base_duration: 4.0,
            temperature_min: 20.0,
            temperature_max: None,
            rule: None,
            overrides,
        }
    }

    #[test]
    fn test_no_overrides_returns_none() {
        let step = step_with(Vec::new());
        assert!(resolve_override(&step, 1).is_none());
    }

    #[test]
    fn test_in_range_match_is_selected() {
        let step = step_with(vec![overriding(1, 3, 5.0), overriding(7, 9, 8.0)]);
        assert_eq!(resolve_override(&step, 2).unwrap().duration, Some(5.0));
        assert_eq!(resolve_override(&step, 8).unwrap().duration, Some(8.0));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let step = step_with(vec![overriding(3, 5, 6.0)]);
        assert!(resolve_override(&step, 3).is_some());
        assert!(resolve_override(&step, 5).is_some());
        assert!(resolve_override(&step, 2).is_none());
    }

    #[test]
    fn test_between_ranges_falls_back_to_last_ended() {
        let step = step_with(vec![overriding(1, 3, 5.0), overriding(7, 9, 8.0)]);
        // Film 5 is past the 1-3 range but before 7-9: the 1-3 override stays in effect.
        assert_eq!(resolve_override(&step, 5).unwrap().duration, Some(5.0));
    }

    #[test]
    fn test_above_all_ranges_falls_back_to_largest_ended_max() {
        let step = step_with(vec![overriding(1, 3, 5.0), overriding(7, 9, 8.0)]);
        assert_eq!(resolve_override(&step, 10).unwrap().duration, Some(8.0));
    }

    #[test]
    fn test_fallback_ignores_input_order() {
        let step = step_with(vec![overriding(7, 9, 8.0), overriding(1, 3, 5.0)]);
        assert_eq!(resolve_override(&step, 20).unwrap().duration, Some(8.0));
    }

    #[test]
    fn test_below_all_ranges_returns_none() {
        let step = step_with(vec![overriding(5, 8, 6.0)]);
        assert!(resolve_override(&step, 2).is_none());
    }

    #[test]
    fn test_first_match_wins_when_ranges_overlap() {
        let step = step_with(vec![overriding(1, 5, 5.0), overriding(3, 8, 7.0)]);
        assert_eq!(resolve_override(&step, 4).unwrap().duration, Some(5.0));
    }

    #[test]
    fn test_fallback_tie_keeps_first_in_input_order() {
        let step = step_with(vec![overriding(1, 4, 5.0), overriding(2, 4, 7.0)]);
        assert_eq!(resolve_override(&step, 9).unwrap().duration, Some(5.0));
    }
}
