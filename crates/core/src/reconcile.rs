//! Writes validated attributes and skill values to storage.
//!
//! Skill rows are sparse: a row exists only once a skill has been written for
//! a character. Reconciliation updates first and inserts on a miss. It takes
//! no lock and does no compare-and-swap; concurrent edits of the same
//! character resolve as last-writer-wins.

use crate::attributes::AttributeSet;
use crate::skills::{SkillAllocation, SkillCatalog};
use crate::store::{CharacterStore, EditError};
use crate::types::CharacterId;

/// Row counts produced by [`commit_skills`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub updated: usize,
    pub inserted: usize,
}

/// Write all five attributes in one update. The character row always exists.
pub async fn commit_attributes<S: CharacterStore>(
    store: &mut S,
    id: CharacterId,
    attributes: &AttributeSet,
) -> Result<(), EditError<S::Error>> {
    store
        .update_attributes(id, attributes)
        .await
        .map_err(EditError::Storage)
}

/// Write every catalog skill of `allocation`, in catalog order.
///
/// Each skill is one update, followed by an insert only when the update
/// matched no row. A failure mid-loop leaves earlier skills written.
pub async fn commit_skills<S: CharacterStore>(
    store: &mut S,
    id: CharacterId,
    catalog: &SkillCatalog,
    allocation: &SkillAllocation,
) -> Result<ReconcileReport, EditError<S::Error>> {
    let mut report = ReconcileReport::default();

    for skill in catalog.iter() {
        let value = allocation.get(skill.id);
        let matched = store
            .update_skill(id, skill.id, value)
            .await
            .map_err(EditError::Storage)?;

        if matched == 0 {
            store
                .insert_skill(id, skill.id, value)
                .await
                .map_err(EditError::Storage)?;
            report.inserted += 1;
        } else {
            report.updated += 1;
        }
    }

    Ok(report)
}
