/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Primary key of a row in `characters`.
pub type CharacterId = DbId;
