use serde::{Deserialize, Serialize};

/// A named, ordered development plan. Step order is the authoritative
/// sequence for accumulating time; the engine never mutates a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub steps: Vec<RecipeStep>,
}

/// One timed action within a recipe. `base_duration` is in minutes and
/// may be fractional (quarter-minute values are common in practice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
    pub label: String,
    #[serde(default)]
    pub details: Option<String>,
    pub base_duration: f64,
    pub temperature_min: f64,
    #[serde(default)]
    pub temperature_max: Option<f64>,
    #[serde(default)]
    pub rule: Option<StepRule>,
    #[serde(default)]
    pub overrides: Vec<StepOverride>,
}

/// "Every `film_interval` films, add `time_increment` minutes" to account
/// for chemical exhaustion. The first full interval is exempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRule {
    pub film_interval: u32,
    pub time_increment: f64,
}

/// A film-count-scoped replacement of some or all of a step's values.
/// Any field left unset falls back to the step's base value when this
/// override is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOverride {
    pub film_count_min: u32,
    pub film_count_max: u32,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub temperature_min: Option<f64>,
    #[serde(default)]
    pub temperature_max: Option<f64>,
}

/// Concrete step values for one quantity, after override/rule resolution.
/// `temperature_min` is `None` only on the synthetic terminal marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStep {
    pub label: String,
    pub details: Option<String>,
    pub duration: f64,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub start_offset: f64,
    pub step: ResolvedStep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    pub total_duration: f64,
}

/// One entry of a merged cross-process timeline, tagged with the name of
/// the recipe it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub recipe_label: String,
    pub start_offset: f64,
    pub step: ResolvedStep,
}
