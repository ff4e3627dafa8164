//! The record store capability the card endpoints are written against.
//!
//! Handlers only ever see `Arc<dyn CardStore>`, so any backend that can do
//! exact-match paging, substring search, unique lookup and a distinct
//! projection satisfies the API.

mod memory;
mod postgres;

use async_trait::async_trait;
use cardex_core::card::Card;
use cardex_core::query::Page;

pub use memory::MemoryCardStore;
pub use postgres::PgCardStore;

/// Errors raised by a [`CardStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The Postgres backend failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Seed data for the in-memory backend could not be loaded.
    #[error("Failed to load seed data from {path}: {reason}")]
    Seed { path: String, reason: String },

    /// Seed data contained the same `uuid` more than once.
    #[error("Duplicate card uuid in seed data: {0}")]
    DuplicateUuid(String),

    /// The backend cannot serve requests right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the card catalog.
#[async_trait]
pub trait CardStore: Send + Sync + 'static {
    /// Cards in store-default order within `page`, restricted to an exact
    /// `set_code` when given.
    async fn list(&self, set_code: Option<&str>, page: Page) -> Result<Vec<Card>, StoreError>;

    /// At most `limit` cards whose name contains `name` (case-sensitive),
    /// restricted to an exact `set_code` when given.
    async fn search_by_name(
        &self,
        name: &str,
        set_code: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Card>, StoreError>;

    /// The card with this `uuid`, if any.
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Card>, StoreError>;

    /// Every distinct set code, without duplicates.
    async fn distinct_set_codes(&self) -> Result<Vec<String>, StoreError>;

    /// Cheap liveness probe used by `/health`.
    async fn health_check(&self) -> Result<(), StoreError>;
}
