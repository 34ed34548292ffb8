//! Character rows.

use skilledit_core::attributes::Attributes;
use sqlx::FromRow;

/// The attribute columns of a `characters` row, in attribute units.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct AttributeRow {
    pub agility: i64,
    pub constitution: i64,
    pub intellect: i64,
    pub strength: i64,
    pub willpower: i64,
}

impl From<AttributeRow> for Attributes {
    fn from(row: AttributeRow) -> Self {
        Self {
            agility: row.agility,
            constitution: row.constitution,
            intellect: row.intellect,
            strength: row.strength,
            willpower: row.willpower,
        }
    }
}

/// DTO for inserting a character. The game server owns character creation.
#[cfg(feature = "test-fixtures")]
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    pub account_id: i64,
    pub name: String,
    pub last_name: String,
    pub attributes: Attributes,
}

/// Identity columns of a `characters` row.
#[cfg(feature = "test-fixtures")]
#[derive(Debug, Clone, FromRow)]
pub struct CharacterIdentity {
    pub id: skilledit_core::types::CharacterId,
    pub account_id: i64,
    pub name: String,
    pub last_name: String,
}
