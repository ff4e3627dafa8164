use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use async_trait::async_trait;
use cardex_core::card::Card;
use cardex_core::query::Page;

use super::{CardStore, StoreError};

/// [`CardStore`] over an immutable in-process list of cards.
///
/// Store-default order is the order the cards were supplied in. Used for
/// local development without Postgres and by the API and client tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCardStore {
    cards: Vec<Card>,
}

impl MemoryCardStore {
    /// Build a store, rejecting input where two cards share a `uuid`.
    pub fn new(cards: Vec<Card>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.uuid.as_str()) {
                return Err(StoreError::DuplicateUuid(card.uuid.clone()));
            }
        }
        Ok(Self { cards })
    }

    /// Load a JSON array of cards (camelCase keys, as served by the API).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let seed_error = |reason: String| StoreError::Seed {
            path: path.display().to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| seed_error(e.to_string()))?;
        let cards: Vec<Card> = serde_json::from_str(&raw).map_err(|e| seed_error(e.to_string()))?;

        tracing::debug!(path = %path.display(), count = cards.len(), "Loaded card seed file");
        Self::new(cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn matching<'a>(&'a self, set_code: Option<&'a str>) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards
            .iter()
            .filter(move |card| set_code.map_or(true, |code| card.set_code == code))
    }
}

/// Convert a non-negative window bound to `usize`, saturating.
fn to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

#[async_trait]
impl CardStore for MemoryCardStore {
    async fn list(&self, set_code: Option<&str>, page: Page) -> Result<Vec<Card>, StoreError> {
        Ok(self
            .matching(set_code)
            .skip(to_usize(page.offset))
            .take(to_usize(page.limit))
            .cloned()
            .collect())
    }

    async fn search_by_name(
        &self,
        name: &str,
        set_code: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Card>, StoreError> {
        Ok(self
            .matching(set_code)
            .filter(|card| card.name.contains(name))
            .take(to_usize(limit))
            .cloned()
            .collect())
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Card>, StoreError> {
        Ok(self.cards.iter().find(|card| card.uuid == uuid).cloned())
    }

    async fn distinct_set_codes(&self) -> Result<Vec<String>, StoreError> {
        let codes: BTreeSet<&str> = self.cards.iter().map(|c| c.set_code.as_str()).collect();
        Ok(codes.into_iter().map(str::to_string).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
