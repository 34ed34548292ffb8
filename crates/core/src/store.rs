//! Storage collaborator used by the edit session.
//!
//! Implementations are request-scoped: one store wraps one connection and is
//! dropped when the request ends. Each write method is expected to be durable
//! once it returns; no method opens a transaction spanning several calls.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::attributes::{AttributeSet, Attributes};
use crate::error::CoreError;
use crate::skills::SkillId;
use crate::types::CharacterId;

#[async_trait]
pub trait CharacterStore: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Case-insensitive name match restricted to accounts owning a character
    /// whose last name is `pvp`.
    async fn find_character(
        &mut self,
        firstname: &str,
        lastname: &str,
    ) -> Result<Option<CharacterId>, Self::Error>;

    async fn load_attributes(&mut self, id: CharacterId) -> Result<Attributes, Self::Error>;

    /// Stored skill values for the character. Skills never written are
    /// either absent or reported as 0.
    async fn load_skill_values(
        &mut self,
        id: CharacterId,
    ) -> Result<HashMap<SkillId, i64>, Self::Error>;

    /// Overwrite all five attributes of an existing character row.
    async fn update_attributes(
        &mut self,
        id: CharacterId,
        attributes: &AttributeSet,
    ) -> Result<(), Self::Error>;

    /// Update an existing skill row, returning the number of rows matched.
    async fn update_skill(
        &mut self,
        id: CharacterId,
        skill: SkillId,
        value: i64,
    ) -> Result<u64, Self::Error>;

    async fn insert_skill(
        &mut self,
        id: CharacterId,
        skill: SkillId,
        value: i64,
    ) -> Result<(), Self::Error>;
}

/// Failure of a session operation: either the request was rejected by the
/// domain rules or the storage backend failed.
#[derive(Debug, thiserror::Error)]
pub enum EditError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Rejected(#[from] CoreError),

    #[error("Storage failure: {0}")]
    Storage(#[source] E),
}
