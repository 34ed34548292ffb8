#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A proposed allocation breaks a balance rule. The message is shown to
    /// the operator verbatim.
    #[error("{0}")]
    InvalidInput(String),

    /// No character matched the name, or its account carries no PvP character.
    #[error("Character not found")]
    CharacterNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
