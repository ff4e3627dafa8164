pub mod card;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /card/all                 list cards (paged, optional set filter)
/// /card/search/{name}       search cards by name
/// /card/setcodes            distinct set codes
/// /card/{uuid}              show one card
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/card", card::router())
}
