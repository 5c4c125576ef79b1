pub mod recipe_file;

use crate::utils::error::{Result, TimerError};
use crate::utils::validation::{validate_min_value, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "darkroom-timer")]
#[command(about = "Resolve film development recipes into timed schedules")]
pub struct CliConfig {
    /// Recipe files (TOML, one recipe per file). Two or more files produce
    /// a merged side-by-side timeline instead of a single schedule.
    pub recipe_files: Vec<String>,

    /// How many films are developed in this run
    #[arg(long, short, default_value = "1")]
    pub quantity: u32,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.recipe_files.is_empty() {
            return Err(TimerError::MissingConfigError {
                field: "recipe file".to_string(),
            });
        }
        validate_min_value("quantity", self.quantity, 1)?;
        Ok(())
    }
}
