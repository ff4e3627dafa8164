//! The card record as served by the API and consumed by the client.

use serde::{Deserialize, Serialize};

/// Two-character sequence (backslash, `n`) that ingested rules text uses in
/// place of a real line break.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// One trading-card printing.
///
/// Serialized with camelCase keys (`setCode`, `manaCost`, ...). `text` is
/// stored and served raw; decoding the escaped newlines is the client's job
/// (see [`Card::with_decoded_text`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub uuid: String,
    pub name: String,
    pub set_code: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub mana_value: Option<f64>,
    #[serde(rename = "type", default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub flavor_text: Option<String>,
}

impl Card {
    /// Return the card with every escaped newline in `text` replaced by `\n`.
    pub fn with_decoded_text(mut self) -> Self {
        if let Some(text) = self.text.as_deref() {
            self.text = Some(decode_newlines(text));
        }
        self
    }
}

/// Replace each literal `\n` escape with a newline character. Every other
/// character, including lone backslashes, is left untouched.
pub fn decode_newlines(text: &str) -> String {
    text.replace(ESCAPED_NEWLINE, "\n")
}
