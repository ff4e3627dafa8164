#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use cardex_core::card::Card;
use cardex_core::query::Page;
use cardex_db::store::{CardStore, MemoryCardStore, StoreError};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cardex_api::config::{ServerConfig, StoreBackend};
use cardex_api::router::build_app_router;
use cardex_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory { seed_file: None },
    }
}

/// Build the full application router (same middleware stack as production)
/// over the given store.
pub fn build_test_app(store: impl CardStore) -> Router {
    build_app_router(AppState::new(store), &test_config()).unwrap()
}

/// Build the app over an in-memory store holding `cards`.
pub fn app_with_cards(cards: Vec<Card>) -> Router {
    build_test_app(MemoryCardStore::new(cards).unwrap())
}

pub fn card(uuid: &str, name: &str, set_code: &str) -> Card {
    Card {
        uuid: uuid.to_string(),
        name: name.to_string(),
        set_code: set_code.to_string(),
        text: None,
        mana_cost: None,
        mana_value: None,
        type_line: None,
        rarity: None,
        artist: None,
        number: None,
        power: None,
        toughness: None,
        flavor_text: None,
    }
}

/// The two-card catalog used throughout: `A1` Bolt/X1 and `A2` Bolt Jr/X2.
pub fn bolt_cards() -> Vec<Card> {
    let mut bolt = card("A1", "Bolt", "X1");
    bolt.text = Some("Deal 3 damage.\\nDraw a card.".to_string());
    vec![bolt, card("A2", "Bolt Jr", "X2")]
}

/// Send a GET request through the router without a TCP listener.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A store whose every call fails, for exercising the 500 paths.
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused (db.internal:5432)".to_string())
}

#[async_trait]
impl CardStore for FailingStore {
    async fn list(&self, _set_code: Option<&str>, _page: Page) -> Result<Vec<Card>, StoreError> {
        Err(unavailable())
    }

    async fn search_by_name(
        &self,
        _name: &str,
        _set_code: Option<&str>,
        _limit: i64,
    ) -> Result<Vec<Card>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_uuid(&self, _uuid: &str) -> Result<Option<Card>, StoreError> {
        Err(unavailable())
    }

    async fn distinct_set_codes(&self) -> Result<Vec<String>, StoreError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}
