use async_trait::async_trait;
use cardex_core::card::Card;
use cardex_core::query::Page;

use super::{CardStore, StoreError};
use crate::repositories::CardRepo;
use crate::DbPool;

/// [`CardStore`] backed by the `cards` table.
#[derive(Clone)]
pub struct PgCardStore {
    pool: DbPool,
}

impl PgCardStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardStore for PgCardStore {
    async fn list(&self, set_code: Option<&str>, page: Page) -> Result<Vec<Card>, StoreError> {
        let rows = CardRepo::list(&self.pool, set_code, page).await?;
        Ok(rows.into_iter().map(Card::from).collect())
    }

    async fn search_by_name(
        &self,
        name: &str,
        set_code: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Card>, StoreError> {
        let rows = CardRepo::search_by_name(&self.pool, name, set_code, limit).await?;
        Ok(rows.into_iter().map(Card::from).collect())
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Card>, StoreError> {
        let row = CardRepo::find_by_uuid(&self.pool, uuid).await?;
        Ok(row.map(Card::from))
    }

    async fn distinct_set_codes(&self) -> Result<Vec<String>, StoreError> {
        Ok(CardRepo::distinct_set_codes(&self.pool).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
