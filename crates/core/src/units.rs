//! Fixed-point scales and the tunable balance limits.
//!
//! The game stores attributes and skills as scaled integers. All comparisons
//! in this crate happen on those raw integers; nothing is ever converted to
//! floating point.

// ---------------------------------------------------------------------------
// Scales
// ---------------------------------------------------------------------------

/// One attribute point, in stored attribute units.
pub const ATTRIBUTE_UNIT: i64 = 1_000_000;

/// One skill point, in stored skill units.
pub const SKILL_UNIT: i64 = 10_000_000;

// ---------------------------------------------------------------------------
// Fixed limits
// ---------------------------------------------------------------------------

/// Lowest value any single attribute may hold, in points.
pub const ATTRIBUTE_MIN_POINTS: i64 = 10;

/// Highest value any single attribute may hold, in points.
pub const ATTRIBUTE_MAX_POINTS: i64 = 100;

/// Parent level, in points, required before a child skill may reach
/// [`CHILD_ADVANCED_POINTS`].
pub const PARENT_ADVANCED_POINTS: i64 = 60;

/// Parent level, in points, required before a child skill may be raised at all.
/// Also the child level that requires an advanced parent.
pub const PARENT_UNLOCK_POINTS: i64 = 30;

/// Child level, in points, from which the parent must be advanced.
pub const CHILD_ADVANCED_POINTS: i64 = 30;

/// Multiplier applied to the intellect surplus when computing the skill cap.
/// The surplus is in attribute units while the cap is in skill units; the
/// factor is applied to the raw surplus as-is.
pub const INTELLECT_BONUS_FACTOR: i64 = 10;

// ---------------------------------------------------------------------------
// Configurable limits
// ---------------------------------------------------------------------------

/// Default skill point cap before the intellect bonus.
pub const DEFAULT_SKILL_CAP: i64 = 600;

/// Default cap on the sum of all five attributes, in points.
pub const DEFAULT_ATTRIBUTE_CAP: i64 = 150;

/// Server-tunable balance limits.
///
/// Both caps are expressed in whole points and scaled on use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceRules {
    /// Base number of skill points a character may allocate.
    pub skill_cap: i64,
    /// Maximum sum of the five attributes.
    pub attribute_cap: i64,
}

impl Default for BalanceRules {
    fn default() -> Self {
        Self {
            skill_cap: DEFAULT_SKILL_CAP,
            attribute_cap: DEFAULT_ATTRIBUTE_CAP,
        }
    }
}

impl BalanceRules {
    /// Maximum attribute sum in attribute units.
    pub fn attribute_sum_limit(&self) -> i128 {
        i128::from(self.attribute_cap) * i128::from(ATTRIBUTE_UNIT)
    }

    /// Maximum skill sum in skill units for a character with the given
    /// intellect (in attribute units).
    ///
    /// `skill_cap * SKILL_UNIT + (intellect - 10 * ATTRIBUTE_UNIT) * 10`
    pub fn skill_sum_limit(&self, intellect: i64) -> i128 {
        let base = i128::from(self.skill_cap) * i128::from(SKILL_UNIT);
        let surplus = i128::from(intellect) - i128::from(ATTRIBUTE_MIN_POINTS * ATTRIBUTE_UNIT);
        base + surplus * i128::from(INTELLECT_BONUS_FACTOR)
    }
}
