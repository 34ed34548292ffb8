//! Domain core for the character attribute and skill editor.
//!
//! Holds the balance rules, the skill catalog, the validators and the
//! persistence reconciliation logic. Storage is reached only through the
//! [`store::CharacterStore`] trait, so this crate has no database dependency.

pub mod attributes;
pub mod error;
pub mod reconcile;
pub mod session;
pub mod skill_tree;
pub mod skills;
pub mod store;
pub mod types;
pub mod units;

#[cfg(test)]
pub(crate) mod test_support;
