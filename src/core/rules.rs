use crate::domain::model::StepRule;

/// Applies an interval rule to a base duration for the given film count.
///
/// Films `1..=film_interval` get the base duration unchanged; every
/// completed interval after the first adds `time_increment` minutes.
/// A `film_interval` of zero is a caller contract violation (rejected at
/// recipe load time); here it is clamped to "no rule" so resolution stays
/// total.
pub fn apply_rule(base_duration: f64, rule: Option<&StepRule>, quantity: u32) -> f64 {
    let Some(rule) = rule else {
        return base_duration;
    };

    if rule.film_interval == 0 {
        tracing::warn!("Ignoring rule with film_interval = 0");
        return base_duration;
    }

    // quantity >= 1 per the engine contract; saturate so a stray 0 yields
    // zero increments instead of underflowing.
    let increments = quantity.saturating_sub(1) / rule.film_interval;
    base_duration + f64::from(increments) * rule.time_increment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(film_interval: u32, time_increment: f64) -> StepRule {
        StepRule {
            film_interval,
            time_increment,
        }
    }

    #[test]
    fn test_no_rule_returns_base_duration() {
        assert_eq!(apply_rule(9.5, None, 1), 9.5);
        assert_eq!(apply_rule(9.5, None, 100), 9.5);
    }

    #[test]
    fn test_first_interval_is_exempt() {
        let r = rule(2, 1.0);
        assert_eq!(apply_rule(3.0, Some(&r), 1), 3.0);
        assert_eq!(apply_rule(3.0, Some(&r), 2), 3.0);
    }

    #[test]
    fn test_increment_per_completed_interval() {
        let r = rule(2, 1.0);
        assert_eq!(apply_rule(3.0, Some(&r), 3), 4.0);
        assert_eq!(apply_rule(3.0, Some(&r), 4), 4.0);
        assert_eq!(apply_rule(3.0, Some(&r), 5), 5.0);
    }

    #[test]
    fn test_fractional_increment() {
        let r = rule(3, 0.25);
        assert_eq!(apply_rule(6.0, Some(&r), 3), 6.0);
        assert_eq!(apply_rule(6.0, Some(&r), 4), 6.25);
        assert_eq!(apply_rule(6.0, Some(&r), 7), 6.5);
    }

    #[test]
    fn test_duration_is_non_decreasing_in_quantity() {
        let r = rule(2, 0.5);
        let mut previous = 0.0;
        for quantity in 1..=20 {
            let duration = apply_rule(4.0, Some(&r), quantity);
            assert!(duration >= previous);
            previous = duration;
        }
    }

    #[test]
    fn test_zero_interval_is_clamped_to_no_rule() {
        let r = rule(0, 1.0);
        assert_eq!(apply_rule(3.0, Some(&r), 5), 3.0);
    }

    #[test]
    fn test_zero_quantity_yields_no_increment() {
        let r = rule(2, 1.0);
        assert_eq!(apply_rule(3.0, Some(&r), 0), 3.0);
    }
}
