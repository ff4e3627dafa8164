//! Repository for the `cards` table.
//!
//! Read-only: exact-match listing, substring search by name, lookup by
//! `uuid` and distinct set-code projection. Rows come back in insertion
//! order (`ORDER BY id`), which keeps pages stable across requests.

use cardex_core::query::Page;
use sqlx::PgPool;

use crate::models::card::CardRow;

/// Column list for `cards` queries.
const CARD_COLUMNS: &str = "\
    uuid, name, set_code, text, mana_cost, mana_value, type_line, \
    rarity, artist, number, power, toughness, flavor_text";

/// Provides read operations for cards.
pub struct CardRepo;

impl CardRepo {
    /// List cards, optionally restricted to one set code, within `page`.
    pub async fn list(
        pool: &PgPool,
        set_code: Option<&str>,
        page: Page,
    ) -> Result<Vec<CardRow>, sqlx::Error> {
        match set_code {
            Some(set_code) => {
                let query = format!(
                    "SELECT {CARD_COLUMNS} FROM cards \
                     WHERE set_code = $1 \
                     ORDER BY id \
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, CardRow>(&query)
                    .bind(set_code)
                    .bind(page.limit)
                    .bind(page.offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {CARD_COLUMNS} FROM cards \
                     ORDER BY id \
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, CardRow>(&query)
                    .bind(page.limit)
                    .bind(page.offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Case-sensitive substring match on `name`, optionally AND-ed with an
    /// exact `set_code` match. Returns at most `limit` rows.
    pub async fn search_by_name(
        pool: &PgPool,
        name: &str,
        set_code: Option<&str>,
        limit: i64,
    ) -> Result<Vec<CardRow>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(name));

        match set_code {
            Some(set_code) => {
                let query = format!(
                    "SELECT {CARD_COLUMNS} FROM cards \
                     WHERE name LIKE $1 ESCAPE '\\' AND set_code = $2 \
                     ORDER BY id \
                     LIMIT $3"
                );
                sqlx::query_as::<_, CardRow>(&query)
                    .bind(&pattern)
                    .bind(set_code)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {CARD_COLUMNS} FROM cards \
                     WHERE name LIKE $1 ESCAPE '\\' \
                     ORDER BY id \
                     LIMIT $2"
                );
                sqlx::query_as::<_, CardRow>(&query)
                    .bind(&pattern)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Find a card by its unique `uuid`.
    pub async fn find_by_uuid(pool: &PgPool, uuid: &str) -> Result<Option<CardRow>, sqlx::Error> {
        let query = format!("SELECT {CARD_COLUMNS} FROM cards WHERE uuid = $1");
        sqlx::query_as::<_, CardRow>(&query)
            .bind(uuid)
            .fetch_optional(pool)
            .await
    }

    /// Every distinct set code present in the table.
    pub async fn distinct_set_codes(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT set_code FROM cards ORDER BY set_code")
            .fetch_all(pool)
            .await
    }
}

/// Escape `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
