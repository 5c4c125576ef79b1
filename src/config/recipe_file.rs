use crate::domain::model::Recipe;
use crate::domain::ports::RecipeSource;
use crate::utils::error::{Result, TimerError};
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

/// Loads recipes from TOML files, one recipe per file. This is the only
/// [`RecipeSource`] the CLI ships; the engine itself never touches disk.
#[derive(Debug, Clone)]
pub struct RecipeFileSource {
    paths: Vec<PathBuf>,
}

impl RecipeFileSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl RecipeSource for RecipeFileSource {
    fn load_recipes(&self) -> Result<Vec<Recipe>> {
        self.paths.iter().map(load_recipe_file).collect()
    }
}

/// Reads and validates one recipe file.
pub fn load_recipe_file<P: AsRef<Path>>(path: P) -> Result<Recipe> {
    let path = path.as_ref();
    tracing::debug!("Loading recipe file: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_recipe_str(&content).map_err(|e| match e {
        TimerError::RecipeParseError { message } => TimerError::RecipeParseError {
            message: format!("{}: {}", path.display(), message),
        },
        other => other,
    })
}

/// Parses a recipe from TOML and runs load-time validation, so recipes
/// that reach the engine already satisfy its preconditions.
pub fn parse_recipe_str(content: &str) -> Result<Recipe> {
    let recipe: Recipe = toml::from_str(content).map_err(|e| TimerError::RecipeParseError {
        message: format!("TOML parsing error: {}", e),
    })?;
    recipe.validate()?;
    Ok(recipe)
}
