//! Request-scoped [`CharacterStore`] over a single Postgres connection.
//!
//! Statements run in autocommit mode: every update or insert is durable when
//! it returns, and no transaction spans several calls.

use std::collections::HashMap;

use async_trait::async_trait;
use skilledit_core::attributes::{AttributeSet, Attributes};
use skilledit_core::skills::{SkillCatalog, SkillDefinition, SkillId};
use skilledit_core::store::CharacterStore;
use skilledit_core::types::CharacterId;
use sqlx::{PgConnection, PgExecutor};

use crate::repositories::{CharacterRepo, SkillRepo};

/// Load the skill catalog for `group`, ordered by skill id.
pub async fn load_catalog<'e>(
    executor: impl PgExecutor<'e>,
    group: i32,
) -> Result<SkillCatalog, sqlx::Error> {
    let rows = SkillRepo::list_by_group(executor, group).await?;
    Ok(SkillCatalog::new(rows.into_iter().map(SkillDefinition::from)))
}

pub struct PgCharacterStore<'c> {
    conn: &'c mut PgConnection,
    skill_group: i32,
}

impl<'c> PgCharacterStore<'c> {
    pub fn new(conn: &'c mut PgConnection, skill_group: i32) -> Self {
        Self { conn, skill_group }
    }
}

#[async_trait]
impl<'c> CharacterStore for PgCharacterStore<'c> {
    type Error = sqlx::Error;

    async fn find_character(
        &mut self,
        firstname: &str,
        lastname: &str,
    ) -> Result<Option<CharacterId>, sqlx::Error> {
        CharacterRepo::find_pvp_character(&mut *self.conn, firstname, lastname).await
    }

    async fn load_attributes(&mut self, id: CharacterId) -> Result<Attributes, sqlx::Error> {
        CharacterRepo::get_attributes(&mut *self.conn, id)
            .await?
            .map(Attributes::from)
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn load_skill_values(
        &mut self,
        id: CharacterId,
    ) -> Result<HashMap<SkillId, i64>, sqlx::Error> {
        let rows = SkillRepo::list_values_for_character(&mut *self.conn, id, self.skill_group).await?;
        Ok(rows
            .into_iter()
            .map(|row| (SkillId(row.skill_type_id), row.skill_amount))
            .collect())
    }

    async fn update_attributes(
        &mut self,
        id: CharacterId,
        attributes: &AttributeSet,
    ) -> Result<(), sqlx::Error> {
        let found =
            CharacterRepo::update_attributes(&mut *self.conn, id, attributes.as_attributes()).await?;
        if !found {
            tracing::warn!(character_id = id, "Attribute update matched no character row");
        }
        Ok(())
    }

    async fn update_skill(
        &mut self,
        id: CharacterId,
        skill: SkillId,
        value: i64,
    ) -> Result<u64, sqlx::Error> {
        SkillRepo::update_value(&mut *self.conn, id, skill.0, value).await
    }

    async fn insert_skill(
        &mut self,
        id: CharacterId,
        skill: SkillId,
        value: i64,
    ) -> Result<(), sqlx::Error> {
        tracing::debug!(character_id = id, skill_id = skill.0, "Inserting first value for skill");
        SkillRepo::insert_value(&mut *self.conn, id, skill.0, value).await
    }
}
