use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Recipe file error: {message}")]
    RecipeParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Recipe,
    Serialization,
}

impl TimerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TimerError::IoError(_) => ErrorCategory::Io,
            TimerError::SerializationError(_) => ErrorCategory::Serialization,
            TimerError::RecipeParseError { .. } => ErrorCategory::Recipe,
            TimerError::InvalidConfigValueError { .. } | TimerError::MissingConfigError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TimerError::IoError(_) => ErrorSeverity::Critical,
            TimerError::SerializationError(_) => ErrorSeverity::High,
            TimerError::RecipeParseError { .. } => ErrorSeverity::High,
            TimerError::InvalidConfigValueError { .. } | TimerError::MissingConfigError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TimerError::IoError(e) => format!("Could not read a recipe file: {}", e),
            TimerError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            TimerError::RecipeParseError { message } => {
                format!("A recipe file is malformed: {}", message)
            }
            TimerError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid {}: {}", value, field, reason),
            TimerError::MissingConfigError { field } => format!("No {} given", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TimerError::IoError(_) => "Check that the recipe file paths exist and are readable",
            TimerError::SerializationError(_) => "Re-run without --json to see the table output",
            TimerError::RecipeParseError { .. } => {
                "Check the recipe file's TOML field names and types"
            }
            TimerError::InvalidConfigValueError { .. } => {
                "Fix the named field in the recipe file or command line"
            }
            TimerError::MissingConfigError { .. } => {
                "Pass at least one recipe file, e.g. `darkroom-timer d76.toml`"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TimerError>;
