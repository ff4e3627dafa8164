//! Handlers for the card catalog.
//!
//! Every endpoint is a single read against the [`CardStore`] in app state.
//! Each call logs an `API call` event on entry and an `API call completed`
//! event carrying `duration_ms` on success.
//!
//! [`CardStore`]: cardex_db::store::CardStore

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::Json;
use cardex_core::card::Card;
use cardex_core::error::CoreError;
use cardex_core::query::{optional_filter, parse_page, Page, CARD_SEARCH_LIMIT};

use crate::error::{AppError, AppResult};
use crate::query::{CardListParams, CardSearchParams, QueryPairs};
use crate::state::AppState;

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// GET /api/card/all
///
/// List cards 100 per page, optionally filtered by exact `setCode`. An empty
/// page is still a 200. Store faults are logged and reported with a fixed
/// message.
pub async fn list_cards(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<Card>>> {
    tracing::info!("API call: List all cards");
    let start = Instant::now();

    let params = CardListParams::from(pairs);
    let set_code = optional_filter(params.set_code.as_deref());
    let page = parse_page(params.page.as_deref());

    let cards = state
        .store
        .list(set_code, Page::card_listing(page))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, set_code = ?set_code, page, "Error listing all cards");
            AppError::Failed("An error occurred while listing all cards")
        })?;

    tracing::info!(
        count = cards.len(),
        duration_ms = elapsed_ms(start),
        "API call completed: List all cards",
    );

    Ok(Json(cards))
}

/// GET /api/card/search/{name}
///
/// Case-sensitive substring search on card name, optionally AND-ed with an
/// exact `setCode`. Returns at most 20 cards; no match is a 404.
pub async fn search_cards_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<Card>>> {
    tracing::info!(name = %name, "API call: Search cards by name");
    let start = Instant::now();

    let params = CardSearchParams::from(pairs);
    let set_code = optional_filter(params.set_code.as_deref());
    let cards = state
        .store
        .search_by_name(&name, set_code, CARD_SEARCH_LIMIT)
        .await?;

    if cards.is_empty() {
        tracing::error!(name = %name, set_code = ?set_code, "No cards found");
        return Err(AppError::Core(CoreError::NoMatches {
            entity: "cards",
            query: name,
        }));
    }

    tracing::info!(
        name = %name,
        count = cards.len(),
        duration_ms = elapsed_ms(start),
        "API call completed: Search cards by name",
    );

    Ok(Json(cards))
}

/// GET /api/card/setcodes
///
/// Every distinct set code in the catalog.
pub async fn list_set_codes(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    tracing::info!("API call: List all set codes");
    let start = Instant::now();

    let set_codes = state.store.distinct_set_codes().await?;

    tracing::info!(
        count = set_codes.len(),
        duration_ms = elapsed_ms(start),
        "API call completed: List all set codes",
    );

    Ok(Json(set_codes))
}

/// GET /api/card/{uuid}
///
/// A single card by its unique identifier, or 404.
pub async fn show_card(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<Card>> {
    tracing::info!(uuid = %uuid, "API call: Show card");
    let start = Instant::now();

    let Some(card) = state.store.find_by_uuid(&uuid).await? else {
        tracing::error!(uuid = %uuid, "Card not found");
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Card",
            key: uuid,
        }));
    };

    tracing::info!(
        uuid = %uuid,
        duration_ms = elapsed_ms(start),
        "API call completed: Show card",
    );

    Ok(Json(card))
}
