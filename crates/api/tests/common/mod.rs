#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use skilledit_api::config::ServerConfig;
use skilledit_api::router::build_app_router;
use skilledit_api::state::AppState;
use skilledit_core::attributes::Attributes;
use skilledit_core::units::{BalanceRules, ATTRIBUTE_UNIT};
use skilledit_db::models::character::CreateCharacter;
use skilledit_db::repositories::skill_repo::COMBAT_SKILL_GROUP;
use skilledit_db::repositories::{CharacterRepo, SkillRepo};
use sqlx::PgPool;
use tower::ServiceExt;

pub const LEATHER_WORKING: i64 = 100;
pub const TANNING: i64 = 101;
pub const COOKING: i64 = 102;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8099".to_string()],
        request_timeout_secs: 30,
        skill_group: COMBAT_SKILL_GROUP,
        rules: BalanceRules::default(),
        static_page: None,
        log_json: false,
    }
}

/// Build the full application router, loading the skill catalog from `pool`.
///
/// Seed skill types before calling this; the catalog is fixed afterwards.
pub async fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config()).await
}

pub async fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let catalog = skilledit_db::store::load_catalog(&pool, config.skill_group)
        .await
        .unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn even_attributes(points: i64) -> Attributes {
    let v = points * ATTRIBUTE_UNIT;
    Attributes {
        agility: v,
        constitution: v,
        intellect: v,
        strength: v,
        willpower: v,
    }
}

/// Seed `leather_working` -> `tanning` and a root `cooking` in the combat
/// group, plus a skill in another group that must never show up.
pub async fn seed_skill_tree(pool: &PgPool) {
    SkillRepo::create_type(pool, LEATHER_WORKING, "leather_working", None, COMBAT_SKILL_GROUP)
        .await
        .unwrap();
    SkillRepo::create_type(pool, TANNING, "tanning", Some(LEATHER_WORKING), COMBAT_SKILL_GROUP)
        .await
        .unwrap();
    SkillRepo::create_type(pool, COOKING, "cooking", None, COMBAT_SKILL_GROUP)
        .await
        .unwrap();
    SkillRepo::create_type(pool, 900, "fishing", None, 1)
        .await
        .unwrap();
}

/// Seed "Alice Smith" on an account that also owns a `pvp` character.
/// Returns Alice's id.
pub async fn seed_pvp_character(pool: &PgPool) -> i64 {
    let alice = CharacterRepo::create(
        pool,
        &CreateCharacter {
            account_id: 1,
            name: "Alice".into(),
            last_name: "Smith".into(),
            attributes: even_attributes(20),
        },
    )
    .await
    .unwrap();
    CharacterRepo::create(
        pool,
        &CreateCharacter {
            account_id: 1,
            name: "Alice".into(),
            last_name: "pvp".into(),
            attributes: even_attributes(20),
        },
    )
    .await
    .unwrap();
    alice.id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
