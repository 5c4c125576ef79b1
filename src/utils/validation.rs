use crate::domain::model::Recipe;
use crate::utils::error::{Result, TimerError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative number of minutes".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_value(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(TimerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

impl Validate for Recipe {
    /// Load-time checks for the engine's preconditions: the engine itself
    /// assumes these hold and performs no clamping during resolution.
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("recipe.name", &self.name)?;

        for (i, step) in self.steps.iter().enumerate() {
            let at = |field: &str| format!("steps[{}].{}", i, field);

            validate_non_empty_string(&at("label"), &step.label)?;
            validate_non_negative(&at("base_duration"), step.base_duration)?;

            if let Some(rule) = &step.rule {
                validate_min_value(&at("rule.film_interval"), rule.film_interval, 1)?;
                validate_non_negative(&at("rule.time_increment"), rule.time_increment)?;
            }

            for (j, ov) in step.overrides.iter().enumerate() {
                let at = |field: &str| format!("steps[{}].overrides[{}].{}", i, j, field);

                if ov.film_count_min > ov.film_count_max {
                    return Err(TimerError::InvalidConfigValueError {
                        field: at("film_count_min"),
                        value: ov.film_count_min.to_string(),
                        reason: format!(
                            "Range start must not exceed range end ({})",
                            ov.film_count_max
                        ),
                    });
                }
                validate_min_value(&at("film_count_min"), ov.film_count_min, 1)?;
                if let Some(duration) = ov.duration {
                    validate_non_negative(&at("duration"), duration)?;
                }
            }
        }

        Ok(())
    }
}
