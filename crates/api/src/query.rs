//! Query parameter types for the card endpoints.
//!
//! The query string is extracted as raw `(key, value)` pairs and folded into
//! these structs, so a repeated key keeps its last value instead of failing
//! deserialization. Values stay raw strings and are interpreted leniently by
//! `cardex_core::query`, so a malformed `page` never turns into a 400.

/// Raw query string pairs, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// Query parameters for `GET /api/card/all` (`?setCode=&page=`).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CardListParams {
    pub set_code: Option<String>,
    pub page: Option<String>,
}

impl From<QueryPairs> for CardListParams {
    fn from(pairs: QueryPairs) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "setCode" => params.set_code = Some(value),
                "page" => params.page = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// Query parameters for `GET /api/card/search/{name}` (`?setCode=`).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CardSearchParams {
    pub set_code: Option<String>,
}

impl From<QueryPairs> for CardSearchParams {
    fn from(pairs: QueryPairs) -> Self {
        let set_code = pairs
            .into_iter()
            .filter(|(key, _)| key == "setCode")
            .map(|(_, value)| value)
            .last();
        Self { set_code }
    }
}
