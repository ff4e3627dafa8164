//! Route definitions for the card catalog, mounted at `/card`.

use axum::routing::get;
use axum::Router;

use crate::handlers::card;
use crate::state::AppState;

/// Card routes.
///
/// ```text
/// GET /all              -> list_cards            (?setCode=&page=)
/// GET /search/{name}    -> search_cards_by_name  (?setCode=)
/// GET /setcodes         -> list_set_codes
/// GET /{uuid}           -> show_card
/// ```
///
/// The static segments win over `/{uuid}`, so a card whose uuid is literally
/// `all` or `setcodes` is not reachable here.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(card::list_cards))
        .route("/search/{name}", get(card::search_cards_by_name))
        .route("/setcodes", get(card::list_set_codes))
        .route("/{uuid}", get(card::show_card))
}
