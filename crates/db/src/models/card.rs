//! Row mapping for the `cards` table.

use cardex_core::card::Card;
use sqlx::FromRow;

/// A row from the `cards` table, minus the surrogate key and audit columns.
#[derive(Debug, Clone, FromRow)]
pub struct CardRow {
    pub uuid: String,
    pub name: String,
    pub set_code: String,
    pub text: Option<String>,
    pub mana_cost: Option<String>,
    pub mana_value: Option<f64>,
    pub type_line: Option<String>,
    pub rarity: Option<String>,
    pub artist: Option<String>,
    pub number: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub flavor_text: Option<String>,
}

impl From<CardRow> for Card {
    fn from(row: CardRow) -> Self {
        Card {
            uuid: row.uuid,
            name: row.name,
            set_code: row.set_code,
            text: row.text,
            mana_cost: row.mana_cost,
            mana_value: row.mana_value,
            type_line: row.type_line,
            rarity: row.rarity,
            artist: row.artist,
            number: row.number,
            power: row.power,
            toughness: row.toughness,
            flavor_text: row.flavor_text,
        }
    }
}
