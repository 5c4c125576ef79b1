use crate::domain::model::Recipe;
use crate::utils::error::Result;

/// How a host hands recipes to the engine. The engine itself performs no
/// I/O; anything that can produce validated recipes qualifies.
pub trait RecipeSource {
    fn load_recipes(&self) -> Result<Vec<Recipe>>;
}
