//! Skill type and character skill rows.

use skilledit_core::skills::{SkillDefinition, SkillId};
use sqlx::FromRow;

/// A row from `skill_types`.
#[derive(Debug, Clone, FromRow)]
pub struct SkillTypeRow {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

impl From<SkillTypeRow> for SkillDefinition {
    fn from(row: SkillTypeRow) -> Self {
        Self {
            id: SkillId(row.id),
            name: row.name,
            parent_id: row.parent_id.map(SkillId),
        }
    }
}

/// A stored skill value, in skill units. Only written skills have a row.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SkillValueRow {
    pub skill_type_id: i64,
    pub skill_amount: i64,
}
