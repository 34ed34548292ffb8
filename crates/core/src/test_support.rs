//! In-memory fixtures shared by the unit tests of this crate.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::attributes::{AttributeSet, Attributes};
use crate::skills::{SkillCatalog, SkillDefinition, SkillId};
use crate::store::CharacterStore;
use crate::types::CharacterId;
use crate::units::ATTRIBUTE_UNIT;

pub const LEATHER_WORKING: SkillId = SkillId(1);
pub const TANNING: SkillId = SkillId(2);
pub const COOKING: SkillId = SkillId(3);

/// `leather_working` (root) -> `tanning`, plus an unrelated root `cooking`.
pub fn leather_catalog() -> SkillCatalog {
    SkillCatalog::new([
        SkillDefinition {
            id: LEATHER_WORKING,
            name: "leather_working".into(),
            parent_id: None,
        },
        SkillDefinition {
            id: TANNING,
            name: "tanning".into(),
            parent_id: Some(LEATHER_WORKING),
        },
        SkillDefinition {
            id: COOKING,
            name: "cooking".into(),
            parent_id: None,
        },
    ])
}

pub fn even_attributes(points: i64) -> Attributes {
    let v = points * ATTRIBUTE_UNIT;
    Attributes {
        agility: v,
        constitution: v,
        intellect: v,
        strength: v,
        willpower: v,
    }
}

#[derive(Debug, thiserror::Error)]
#[error("memory store failure: {0}")]
pub struct MemoryError(pub String);

/// A [`CharacterStore`] backed by hash maps, with failure injection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub names: HashMap<(String, String), CharacterId>,
    pub attributes: HashMap<CharacterId, Attributes>,
    pub skills: HashMap<CharacterId, HashMap<SkillId, i64>>,
    pub insert_calls: usize,
    pub fail_on_skill: Option<SkillId>,
}

impl MemoryStore {
    /// A store holding one PvP-eligible character named "Alice Smith".
    pub fn with_character(id: CharacterId) -> Self {
        let mut store = Self::default();
        store
            .names
            .insert(("alice".to_string(), "smith".to_string()), id);
        store.attributes.insert(id, even_attributes(20));
        store.skills.insert(id, HashMap::new());
        store
    }

    pub fn seed_skill(&mut self, id: CharacterId, skill: SkillId, value: i64) {
        self.skills.entry(id).or_default().insert(skill, value);
    }

    pub fn skill_rows(&self, id: CharacterId) -> &HashMap<SkillId, i64> {
        &self.skills[&id]
    }
}

#[async_trait]
impl CharacterStore for MemoryStore {
    type Error = MemoryError;

    async fn find_character(
        &mut self,
        firstname: &str,
        lastname: &str,
    ) -> Result<Option<CharacterId>, MemoryError> {
        let key = (firstname.to_lowercase(), lastname.to_lowercase());
        Ok(self.names.get(&key).copied())
    }

    async fn load_attributes(&mut self, id: CharacterId) -> Result<Attributes, MemoryError> {
        self.attributes
            .get(&id)
            .copied()
            .ok_or_else(|| MemoryError(format!("no character {id}")))
    }

    async fn load_skill_values(
        &mut self,
        id: CharacterId,
    ) -> Result<HashMap<SkillId, i64>, MemoryError> {
        Ok(self.skills.get(&id).cloned().unwrap_or_default())
    }

    async fn update_attributes(
        &mut self,
        id: CharacterId,
        attributes: &AttributeSet,
    ) -> Result<(), MemoryError> {
        if let Some(row) = self.attributes.get_mut(&id) {
            *row = *attributes.as_attributes();
        }
        Ok(())
    }

    async fn update_skill(
        &mut self,
        id: CharacterId,
        skill: SkillId,
        value: i64,
    ) -> Result<u64, MemoryError> {
        if self.fail_on_skill == Some(skill) {
            return Err(MemoryError(format!("write of skill {skill} failed")));
        }
        match self.skills.get_mut(&id).and_then(|rows| rows.get_mut(&skill)) {
            Some(slot) => {
                *slot = value;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn insert_skill(
        &mut self,
        id: CharacterId,
        skill: SkillId,
        value: i64,
    ) -> Result<(), MemoryError> {
        self.insert_calls += 1;
        let rows = self.skills.entry(id).or_default();
        if rows.contains_key(&skill) {
            return Err(MemoryError(format!("duplicate row for skill {skill}")));
        }
        rows.insert(skill, value);
        Ok(())
    }
}
