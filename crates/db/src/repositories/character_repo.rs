//! Repository for the `characters` table.

use skilledit_core::attributes::Attributes;
use skilledit_core::types::CharacterId;
use sqlx::PgExecutor;

use crate::models::character::AttributeRow;
#[cfg(feature = "test-fixtures")]
use crate::models::character::{CharacterIdentity, CreateCharacter};

/// Character identity lookup and attribute reads/writes.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Find a character by first and last name, ignoring case, whose account
    /// also owns a character with the last name `pvp`.
    ///
    /// Returns the lowest id when several characters match.
    pub async fn find_pvp_character<'e>(
        executor: impl PgExecutor<'e>,
        firstname: &str,
        lastname: &str,
    ) -> Result<Option<CharacterId>, sqlx::Error> {
        sqlx::query_scalar::<_, CharacterId>(
            "SELECT c.id FROM characters AS c
             WHERE LOWER(c.name) = LOWER($1)
               AND LOWER(c.last_name) = LOWER($2)
               AND EXISTS (
                   SELECT 1 FROM characters AS c2
                   WHERE c2.account_id = c.account_id
                     AND LOWER(c2.last_name) = 'pvp'
               )
             ORDER BY c.id
             LIMIT 1",
        )
        .bind(firstname)
        .bind(lastname)
        .fetch_optional(executor)
        .await
    }

    /// Return the five attribute columns for a character.
    pub async fn get_attributes<'e>(
        executor: impl PgExecutor<'e>,
        id: CharacterId,
    ) -> Result<Option<AttributeRow>, sqlx::Error> {
        sqlx::query_as::<_, AttributeRow>(
            "SELECT agility, constitution, intellect, strength, willpower
             FROM characters WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Overwrite all five attribute columns. Returns `true` if the row exists.
    pub async fn update_attributes<'e>(
        executor: impl PgExecutor<'e>,
        id: CharacterId,
        attributes: &Attributes,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE characters SET
                agility = $2,
                constitution = $3,
                intellect = $4,
                strength = $5,
                willpower = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(attributes.agility)
        .bind(attributes.constitution)
        .bind(attributes.intellect)
        .bind(attributes.strength)
        .bind(attributes.willpower)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a character, returning its identity columns.
    #[cfg(feature = "test-fixtures")]
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateCharacter,
    ) -> Result<CharacterIdentity, sqlx::Error> {
        sqlx::query_as::<_, CharacterIdentity>(
            "INSERT INTO characters
                (account_id, name, last_name, agility, constitution, intellect, strength, willpower)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, account_id, name, last_name",
        )
        .bind(input.account_id)
        .bind(&input.name)
        .bind(&input.last_name)
        .bind(input.attributes.agility)
        .bind(input.attributes.constitution)
        .bind(input.attributes.intellect)
        .bind(input.attributes.strength)
        .bind(input.attributes.willpower)
        .fetch_one(executor)
        .await
    }
}
