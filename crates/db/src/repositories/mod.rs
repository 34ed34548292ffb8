//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods that
//! accept any Postgres executor as the first argument: the pool at startup,
//! or a request-scoped connection while serving a request.

pub mod character_repo;
pub mod skill_repo;

pub use character_repo::CharacterRepo;
pub use skill_repo::SkillRepo;
