//! Repository for the `skill_types` and `character_skills` tables.

use skilledit_core::types::CharacterId;
use sqlx::PgExecutor;

use crate::models::skill::{SkillTypeRow, SkillValueRow};

/// Skill group holding the combat skills.
pub const COMBAT_SKILL_GROUP: i32 = 2;

pub struct SkillRepo;

impl SkillRepo {
    /// List every skill type in `group`, ordered by id.
    pub async fn list_by_group<'e>(
        executor: impl PgExecutor<'e>,
        group: i32,
    ) -> Result<Vec<SkillTypeRow>, sqlx::Error> {
        sqlx::query_as::<_, SkillTypeRow>(
            "SELECT id, name, parent_id FROM skill_types
             WHERE group_id = $1
             ORDER BY id",
        )
        .bind(group)
        .fetch_all(executor)
        .await
    }

    /// Skill values of a character for every skill in `group`.
    ///
    /// Left-joins the skill types against the sparse value rows, so skills
    /// the character never had written come back as 0.
    pub async fn list_values_for_character<'e>(
        executor: impl PgExecutor<'e>,
        character_id: CharacterId,
        group: i32,
    ) -> Result<Vec<SkillValueRow>, sqlx::Error> {
        sqlx::query_as::<_, SkillValueRow>(
            "SELECT st.id AS skill_type_id, COALESCE(cs.skill_amount, 0) AS skill_amount
             FROM skill_types AS st
             LEFT OUTER JOIN character_skills AS cs
                ON cs.skill_type_id = st.id
               AND cs.character_id = $1
             WHERE st.group_id = $2
             ORDER BY st.id",
        )
        .bind(character_id)
        .bind(group)
        .fetch_all(executor)
        .await
    }

    /// Update an existing skill value. Returns the number of rows matched,
    /// which is 0 when the character has no row for the skill yet.
    pub async fn update_value<'e>(
        executor: impl PgExecutor<'e>,
        character_id: CharacterId,
        skill_type_id: i64,
        amount: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE character_skills SET skill_amount = $3
             WHERE character_id = $1 AND skill_type_id = $2",
        )
        .bind(character_id)
        .bind(skill_type_id)
        .bind(amount)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Insert a new skill value row.
    pub async fn insert_value<'e>(
        executor: impl PgExecutor<'e>,
        character_id: CharacterId,
        skill_type_id: i64,
        amount: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO character_skills (character_id, skill_type_id, skill_amount)
             VALUES ($1, $2, $3)",
        )
        .bind(character_id)
        .bind(skill_type_id)
        .bind(amount)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Insert a skill type.
    #[cfg(feature = "test-fixtures")]
    pub async fn create_type<'e>(
        executor: impl PgExecutor<'e>,
        id: i64,
        name: &str,
        parent_id: Option<i64>,
        group: i32,
    ) -> Result<SkillTypeRow, sqlx::Error> {
        sqlx::query_as::<_, SkillTypeRow>(
            "INSERT INTO skill_types (id, name, parent_id, group_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, parent_id",
        )
        .bind(id)
        .bind(name)
        .bind(parent_id)
        .bind(group)
        .fetch_one(executor)
        .await
    }
}
