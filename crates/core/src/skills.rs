//! Skill catalog and per-character skill allocations.
//!
//! The catalog is the static skill forest for the configured skill group.
//! It is loaded once at startup and shared read-only between requests.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Primary key of a row in `skill_types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub DbId);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SkillId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(SkillId)
    }
}

/// One node of the skill forest. Skills without a parent are roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    pub parent_id: Option<SkillId>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable, ordered skill catalog.
///
/// Iteration follows insertion order, which keeps validation error messages
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<SkillDefinition>,
    index: HashMap<SkillId, usize>,
}

impl SkillCatalog {
    /// Build a catalog from definitions. A repeated id keeps its first entry.
    pub fn new(definitions: impl IntoIterator<Item = SkillDefinition>) -> Self {
        let mut skills = Vec::new();
        let mut index = HashMap::new();
        for def in definitions {
            if index.contains_key(&def.id) {
                continue;
            }
            index.insert(def.id, skills.len());
            skills.push(def);
        }
        Self { skills, index }
    }

    pub fn get(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.index.get(&id).map(|&i| &self.skills[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Allocation
// ---------------------------------------------------------------------------

/// A character's skill values in skill units, keyed by skill.
///
/// Skills without an entry count as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillAllocation {
    values: HashMap<SkillId, i64>,
}

impl SkillAllocation {
    /// Parse the string-keyed map from an edit request.
    ///
    /// Every catalog skill must be present under its decimal id and hold a
    /// non-negative value. Keys that are not catalog skills are ignored.
    pub fn from_request(
        catalog: &SkillCatalog,
        raw: &HashMap<String, i64>,
    ) -> Result<Self, CoreError> {
        let mut values = HashMap::with_capacity(catalog.len());
        for skill in catalog.iter() {
            let value = raw
                .get(&skill.id.to_string())
                .copied()
                .ok_or_else(|| CoreError::invalid(format!("Missing value for {}", skill.name)))?;
            if value < 0 {
                return Err(CoreError::invalid(format!("Invalid input for {}", skill.name)));
            }
            values.insert(skill.id, value);
        }
        Ok(Self { values })
    }

    /// Value of `id`, or 0 when the skill was never set.
    pub fn get(&self, id: SkillId) -> i64 {
        self.values.get(&id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: SkillId, value: i64) {
        self.values.insert(id, value);
    }

    /// Sum of all values, widened so it cannot overflow.
    pub fn total(&self) -> i128 {
        self.values.values().map(|v| i128::from(*v)).sum()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(SkillId, i64)> for SkillAllocation {
    fn from_iter<T: IntoIterator<Item = (SkillId, i64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One catalog skill joined with a character's value, as returned on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSkill {
    pub id: SkillId,
    pub name: String,
    #[serde(rename = "parentid")]
    pub parent_id: Option<SkillId>,
    pub value: i64,
}
