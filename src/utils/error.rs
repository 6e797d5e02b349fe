use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("Unknown species type: {name}")]
    UnknownSpecies { name: String },

    #[error("Unknown strategy type: {name}")]
    UnknownStrategy { name: String },

    #[error("Evolution stalled at stage {stage}")]
    EvolutionStalled { stage: String },

    #[error("Message delivery failed: {0}")]
    DeliveryError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Evolution,
    Output,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EvolutionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvolutionError::UnknownSpecies { .. }
            | EvolutionError::UnknownStrategy { .. }
            | EvolutionError::EvolutionStalled { .. } => ErrorCategory::Evolution,
            EvolutionError::DeliveryError(_) => ErrorCategory::Output,
            EvolutionError::SerializationError(_) => ErrorCategory::Serialization,
            EvolutionError::InvalidConfigValueError { .. }
            | EvolutionError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EvolutionError::SerializationError(_) => ErrorSeverity::Low,
            EvolutionError::InvalidConfigValueError { .. }
            | EvolutionError::MissingConfigError { .. } => ErrorSeverity::Medium,
            EvolutionError::UnknownSpecies { .. }
            | EvolutionError::UnknownStrategy { .. }
            | EvolutionError::DeliveryError(_) => ErrorSeverity::High,
            EvolutionError::EvolutionStalled { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EvolutionError::UnknownSpecies { .. } => {
                "Use one of the registered species: fish, amphibian, reptile, dinosaur".to_string()
            }
            EvolutionError::UnknownStrategy { .. } => {
                "Use one of the built-in strategies: linear, accelerated".to_string()
            }
            EvolutionError::EvolutionStalled { stage } => format!(
                "The run ended before transcendence (last stage: {}); check how many steps the strategy takes",
                stage
            ),
            EvolutionError::DeliveryError(_) => {
                "Check that stdout is writable and try again".to_string()
            }
            EvolutionError::SerializationError(_) => {
                "Inspect the trace log entries for non-serializable content".to_string()
            }
            EvolutionError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and rerun", field)
            }
            EvolutionError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EvolutionError::UnknownSpecies { name } => {
                format!("The species '{}' is not part of this lineage", name)
            }
            EvolutionError::UnknownStrategy { name } => {
                format!("The strategy '{}' is not available", name)
            }
            EvolutionError::EvolutionStalled { .. } => {
                "Evolution finished without producing a message".to_string()
            }
            EvolutionError::DeliveryError(_) => "Could not write the message".to_string(),
            EvolutionError::SerializationError(_) => {
                "Could not serialize the evolution trace".to_string()
            }
            EvolutionError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            EvolutionError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EvolutionError>;
