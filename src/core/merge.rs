use crate::core::schedule::schedule;
use crate::domain::model::{MergedEntry, Recipe};

/// Fuses several recipes into one chronological action list.
///
/// Each recipe is scheduled independently with its clock starting at 0
/// (the processes are modeled as running side by side from the same
/// instant) and the single shared `quantity` applies to all of them.
/// Every entry, terminal markers included, is tagged with its recipe's
/// name, then the combined list is stable-sorted by start offset: entries
/// starting at the same time keep recipe input order, then within-recipe
/// step order, so repeated calls are deterministic.
pub fn merge_timelines(recipes: &[Recipe], quantity: u32) -> Vec<MergedEntry> {
    let mut merged = Vec::new();

    for recipe in recipes {
        let timeline = schedule(recipe, quantity);
        tracing::debug!(
            "Merging '{}': {} entries, {} min total",
            recipe.name,
            timeline.entries.len(),
            timeline.total_duration
        );
        for entry in timeline.entries {
            merged.push(MergedEntry {
                recipe_label: recipe.name.clone(),
                start_offset: entry.start_offset,
                step: entry.step,
            });
        }
    }

    // Vec::sort_by is stable, which is what preserves the tie order above.
    merged.sort_by(|a, b| a.start_offset.total_cmp(&b.start_offset));
    merged
}
