//! One read or edit of one character.
//!
//! A session is opened per request around a request-scoped store. Edits are
//! complete snapshots: every attribute and every catalog skill is supplied,
//! validated, and only then written.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeSet, Attributes};
use crate::error::CoreError;
use crate::reconcile::{commit_attributes, commit_skills, ReconcileReport};
use crate::skill_tree::validate_skill_tree;
use crate::skills::{CharacterSkill, SkillAllocation, SkillCatalog};
use crate::store::{CharacterStore, EditError};
use crate::types::CharacterId;
use crate::units::BalanceRules;

/// Proposed full allocation for a character.
#[derive(Debug, Clone, Deserialize)]
pub struct EditRequest {
    /// Skill values keyed by the decimal skill id.
    pub skills: HashMap<String, i64>,
    pub attributes: Attributes,
}

/// Current attributes and skills of a character, one entry per catalog skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSheet {
    pub skills: Vec<CharacterSkill>,
    pub attributes: Attributes,
}

#[derive(Debug)]
pub struct CharacterEditSession<S> {
    store: S,
    catalog: Arc<SkillCatalog>,
    rules: BalanceRules,
    id: CharacterId,
    attributes: Option<Attributes>,
    skills: Option<SkillAllocation>,
}

impl<S: CharacterStore> CharacterEditSession<S> {
    /// Resolve the character by name.
    ///
    /// Fails with [`CoreError::CharacterNotFound`] both for an unknown name and
    /// for a character whose account has no PvP character; the two cases are
    /// not distinguished.
    pub async fn open(
        mut store: S,
        catalog: Arc<SkillCatalog>,
        rules: BalanceRules,
        firstname: &str,
        lastname: &str,
    ) -> Result<Self, EditError<S::Error>> {
        let id = store
            .find_character(firstname, lastname)
            .await
            .map_err(EditError::Storage)?
            .ok_or(CoreError::CharacterNotFound)?;

        Ok(Self {
            store,
            catalog,
            rules,
            id,
            attributes: None,
            skills: None,
        })
    }

    pub fn character_id(&self) -> CharacterId {
        self.id
    }

    /// Stored attributes, loaded on first use. Not validated.
    pub async fn attributes(&mut self) -> Result<Attributes, EditError<S::Error>> {
        if let Some(attributes) = self.attributes {
            return Ok(attributes);
        }
        let attributes = self
            .store
            .load_attributes(self.id)
            .await
            .map_err(EditError::Storage)?;
        self.attributes = Some(attributes);
        Ok(attributes)
    }

    /// Stored skill values, loaded on first use. Skills without a stored row read as 0.
    pub async fn skills(&mut self) -> Result<&SkillAllocation, EditError<S::Error>> {
        if self.skills.is_none() {
            let stored = self
                .store
                .load_skill_values(self.id)
                .await
                .map_err(EditError::Storage)?;
            let allocation = self
                .catalog
                .iter()
                .map(|skill| (skill.id, stored.get(&skill.id).copied().unwrap_or(0)))
                .collect();
            self.skills = Some(allocation);
        }
        Ok(self.skills.get_or_insert_with(SkillAllocation::default))
    }

    /// Read path: stored values joined against the catalog, in catalog order.
    pub async fn load(&mut self) -> Result<CharacterSheet, EditError<S::Error>> {
        let attributes = self.attributes().await?;
        let catalog = Arc::clone(&self.catalog);
        let allocation = self.skills().await?;

        let skills = catalog
            .iter()
            .map(|skill| CharacterSkill {
                id: skill.id,
                name: skill.name.clone(),
                parent_id: skill.parent_id,
                value: allocation.get(skill.id),
            })
            .collect();

        Ok(CharacterSheet { skills, attributes })
    }

    /// Write path: validate the whole request, then commit attributes and skills.
    ///
    /// Nothing is written when validation fails. The attribute write and the
    /// skill writes are separate durable steps; a storage failure after the
    /// first leaves it in place.
    pub async fn apply(
        &mut self,
        request: &EditRequest,
    ) -> Result<ReconcileReport, EditError<S::Error>> {
        let attributes = AttributeSet::validate(request.attributes, &self.rules)?;
        let allocation = SkillAllocation::from_request(&self.catalog, &request.skills)?;
        validate_skill_tree(&self.catalog, &allocation, attributes.intellect(), &self.rules)?;

        commit_attributes(&mut self.store, self.id, &attributes).await?;
        self.attributes = Some(*attributes.as_attributes());

        let report = commit_skills(&mut self.store, self.id, &self.catalog, &allocation).await?;
        self.skills = Some(allocation);

        Ok(report)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
