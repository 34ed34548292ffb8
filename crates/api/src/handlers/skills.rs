//! Handlers for the `/skills` resource.
//!
//! Both methods identify the character by first and last name. Each request
//! holds one pooled connection for its whole duration; it goes back to the
//! pool when the handler returns, whatever the outcome.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use skilledit_core::session::{CharacterEditSession, CharacterSheet, EditRequest};
use skilledit_db::PgCharacterStore;

use crate::error::AppResult;
use crate::state::AppState;

/// Body of a read request.
#[derive(Debug, Deserialize)]
pub struct CharacterName {
    pub firstname: String,
    pub lastname: String,
}

/// Body of an edit request: the character name next to the full attribute
/// and skill snapshot.
#[derive(Debug, Deserialize)]
pub struct EditCharacter {
    pub firstname: String,
    pub lastname: String,
    #[serde(flatten)]
    pub edit: EditRequest,
}

#[derive(Debug, Serialize)]
pub struct EditOutcome {
    pub success: bool,
}

/// POST /api/v1/skills
///
/// Returns the stored attributes and one entry per catalog skill.
pub async fn read_character(
    State(state): State<AppState>,
    Json(input): Json<CharacterName>,
) -> AppResult<Json<CharacterSheet>> {
    let mut conn = state.pool.acquire().await?;
    let store = PgCharacterStore::new(&mut conn, state.config.skill_group);

    let mut session = CharacterEditSession::open(
        store,
        Arc::clone(&state.catalog),
        state.config.rules,
        &input.firstname,
        &input.lastname,
    )
    .await?;
    let sheet = session.load().await?;

    tracing::debug!(character_id = session.character_id(), "Character sheet loaded");
    Ok(Json(sheet))
}

/// PUT /api/v1/skills
///
/// Validates the whole snapshot, then writes attributes and skills.
pub async fn edit_character(
    State(state): State<AppState>,
    Json(input): Json<EditCharacter>,
) -> AppResult<Json<EditOutcome>> {
    let mut conn = state.pool.acquire().await?;
    let store = PgCharacterStore::new(&mut conn, state.config.skill_group);

    let mut session = CharacterEditSession::open(
        store,
        Arc::clone(&state.catalog),
        state.config.rules,
        &input.firstname,
        &input.lastname,
    )
    .await?;
    let report = session.apply(&input.edit).await?;

    tracing::info!(
        character_id = session.character_id(),
        updated = report.updated,
        inserted = report.inserted,
        "Character edit committed"
    );
    Ok(Json(EditOutcome { success: true }))
}
