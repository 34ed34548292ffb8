//! The five core attributes and their validating constructor.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::units::{BalanceRules, ATTRIBUTE_MAX_POINTS, ATTRIBUTE_MIN_POINTS, ATTRIBUTE_UNIT};

/// Raw attribute values in attribute units, as received or as stored.
///
/// Carries no invariant. Use [`AttributeSet::validate`] before persisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub agility: i64,
    pub constitution: i64,
    pub intellect: i64,
    pub strength: i64,
    pub willpower: i64,
}

impl Attributes {
    pub fn values(&self) -> [i64; 5] {
        [
            self.agility,
            self.constitution,
            self.intellect,
            self.strength,
            self.willpower,
        ]
    }

    /// Sum of all five values, widened so it cannot overflow.
    pub fn sum(&self) -> i128 {
        self.values().iter().map(|v| i128::from(*v)).sum()
    }
}

/// A validated attribute allocation.
///
/// Only obtainable through [`AttributeSet::validate`], so holding one proves
/// the sum and per-attribute bounds were checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSet(Attributes);

impl AttributeSet {
    /// Check `values` against the balance rules.
    ///
    /// Rules are applied in order and the first failure wins:
    /// 1. sum must not exceed the attribute cap
    /// 2. every value must be at least 10 points
    /// 3. every value must be at most 100 points
    pub fn validate(values: Attributes, rules: &BalanceRules) -> Result<Self, CoreError> {
        if values.sum() > rules.attribute_sum_limit() {
            return Err(CoreError::invalid(format!(
                "Attribute sum must be <= {}",
                rules.attribute_cap
            )));
        }

        let min = ATTRIBUTE_MIN_POINTS * ATTRIBUTE_UNIT;
        if values.values().iter().any(|v| *v < min) {
            return Err(CoreError::invalid(format!(
                "Each attribute must be at least {ATTRIBUTE_MIN_POINTS}"
            )));
        }

        let max = ATTRIBUTE_MAX_POINTS * ATTRIBUTE_UNIT;
        if values.values().iter().any(|v| *v > max) {
            return Err(CoreError::invalid(format!(
                "Each attribute must be at most {ATTRIBUTE_MAX_POINTS}"
            )));
        }

        Ok(Self(values))
    }

    pub fn intellect(&self) -> i64 {
        self.0.intellect
    }

    pub fn as_attributes(&self) -> &Attributes {
        &self.0
    }
}
