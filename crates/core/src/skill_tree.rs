//! Parent-dependency and skill-cap checks for a skill allocation.

use crate::error::CoreError;
use crate::skills::{SkillAllocation, SkillCatalog};
use crate::units::{
    BalanceRules, CHILD_ADVANCED_POINTS, PARENT_ADVANCED_POINTS, PARENT_UNLOCK_POINTS, SKILL_UNIT,
};

/// Validate `allocation` against the skill forest and the intellect-scaled cap.
///
/// Skills are visited in catalog order and the first offending skill is
/// named in the error. Root skills have no dependency check. For a child:
///
/// - at or above 30 points, its parent must be at least 60
/// - above 0, its parent must be at least 30
///
/// `intellect` must be the value from the validated request, not the stored one.
pub fn validate_skill_tree(
    catalog: &SkillCatalog,
    allocation: &SkillAllocation,
    intellect: i64,
    rules: &BalanceRules,
) -> Result<(), CoreError> {
    for skill in catalog.iter() {
        let Some(parent_id) = skill.parent_id else {
            continue;
        };
        let value = allocation.get(skill.id);
        let parent = allocation.get(parent_id);

        let advanced_without_parent =
            value >= CHILD_ADVANCED_POINTS * SKILL_UNIT && parent < PARENT_ADVANCED_POINTS * SKILL_UNIT;
        let unlocked_without_parent = value > 0 && parent < PARENT_UNLOCK_POINTS * SKILL_UNIT;

        if advanced_without_parent || unlocked_without_parent {
            return Err(CoreError::invalid(format!("Invalid input for {}", skill.name)));
        }
    }

    if allocation.total() > rules.skill_sum_limit(intellect) {
        return Err(CoreError::invalid("Skill cap exceeded"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::skills::{SkillDefinition, SkillId};
    use crate::test_support::{leather_catalog, COOKING, LEATHER_WORKING, TANNING};
    use crate::units::ATTRIBUTE_UNIT;

    const S: i64 = SKILL_UNIT;
    const MIN_INT: i64 = 10 * ATTRIBUTE_UNIT;

    fn alloc(leather: i64, tanning: i64, cooking: i64) -> SkillAllocation {
        [(LEATHER_WORKING, leather), (TANNING, tanning), (COOKING, cooking)]
            .into_iter()
            .collect()
    }

    fn check(allocation: &SkillAllocation, intellect: i64) -> Result<(), CoreError> {
        validate_skill_tree(&leather_catalog(), allocation, intellect, &BalanceRules::default())
    }

    #[test]
    fn advanced_child_needs_advanced_parent() {
        let result = check(&alloc(55 * S, 31 * S, 0), MIN_INT);
        assert_matches!(result, Err(CoreError::InvalidInput(msg)) if msg == "Invalid input for tanning");
    }

    #[test]
    fn advanced_child_with_parent_at_sixty_passes() {
        assert!(check(&alloc(60 * S, 30 * S, 0), MIN_INT).is_ok());
    }

    #[test]
    fn child_at_exactly_thirty_needs_parent_at_sixty() {
        let result = check(&alloc(60 * S - 1, 30 * S, 0), MIN_INT);
        assert_matches!(result, Err(CoreError::InvalidInput(msg)) if msg == "Invalid input for tanning");
    }

    #[test]
    fn any_child_value_needs_unlocked_parent() {
        let result = check(&alloc(30 * S - 1, 1, 0), MIN_INT);
        assert_matches!(result, Err(CoreError::InvalidInput(msg)) if msg == "Invalid input for tanning");
    }

    #[test]
    fn child_below_thirty_with_parent_at_thirty_passes() {
        assert!(check(&alloc(30 * S, 30 * S - 1, 0), MIN_INT).is_ok());
    }

    #[test]
    fn zero_child_never_depends_on_parent() {
        assert!(check(&alloc(0, 0, 100 * S), MIN_INT).is_ok());
    }

    #[test]
    fn root_skills_are_exempt() {
        assert!(check(&alloc(100 * S, 0, 100 * S), MIN_INT).is_ok());
    }

    #[test]
    fn missing_parent_counts_as_zero() {
        let allocation: SkillAllocation = [(TANNING, 1)].into_iter().collect();
        let result = check(&allocation, MIN_INT);
        assert_matches!(result, Err(CoreError::InvalidInput(msg)) if msg == "Invalid input for tanning");
    }

    #[test]
    fn cap_at_minimum_intellect_is_exact() {
        assert!(check(&alloc(300 * S, 0, 300 * S), MIN_INT).is_ok());
        let result = check(&alloc(300 * S, 0, 300 * S + 1), MIN_INT);
        assert_matches!(result, Err(CoreError::InvalidInput(msg)) if msg == "Skill cap exceeded");
    }

    #[test]
    fn cap_grows_with_intellect() {
        let intellect = 20 * ATTRIBUTE_UNIT;
        let bonus = 10 * ATTRIBUTE_UNIT * 10;
        assert!(check(&alloc(300 * S, 0, 300 * S + bonus), intellect).is_ok());
        let result = check(&alloc(300 * S, 0, 300 * S + bonus + 1), intellect);
        assert_matches!(result, Err(CoreError::InvalidInput(msg)) if msg == "Skill cap exceeded");
    }

    #[test]
    fn dependency_errors_win_over_cap() {
        let result = check(&alloc(0, 1, 1000 * S), MIN_INT);
        assert_matches!(result, Err(CoreError::InvalidInput(msg)) if msg == "Invalid input for tanning");
    }

    #[test]
    fn first_offender_in_catalog_order_is_reported() {
        let catalog = SkillCatalog::new([
            SkillDefinition {
                id: SkillId(1),
                name: "root".into(),
                parent_id: None,
            },
            SkillDefinition {
                id: SkillId(3),
                name: "second".into(),
                parent_id: Some(SkillId(1)),
            },
            SkillDefinition {
                id: SkillId(2),
                name: "first".into(),
                parent_id: Some(SkillId(1)),
            },
        ]);
        let allocation: SkillAllocation =
            [(SkillId(1), 0), (SkillId(2), 1), (SkillId(3), 1)].into_iter().collect();
        let result = validate_skill_tree(&catalog, &allocation, MIN_INT, &BalanceRules::default());
        assert_matches!(result, Err(CoreError::InvalidInput(msg)) if msg == "Invalid input for second");
    }
}
