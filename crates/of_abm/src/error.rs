use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Formation {0} not implemented")]
    UnknownFormation(String),

    #[error("Unknown role tag {tag} in formation {formation}")]
    UnknownRoleTag { formation: String, tag: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimError {
    /// Setup errors abort team construction; nothing else is fatal.
    pub fn is_setup_error(&self) -> bool {
        matches!(self, SimError::UnknownFormation(_) | SimError::UnknownRoleTag { .. })
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
