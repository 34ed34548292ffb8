pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /skills        read attributes and skills of a character
/// PUT  /skills        validate and store a full attribute and skill snapshot
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/skills",
        post(handlers::skills::read_character).put(handlers::skills::edit_character),
    )
}
