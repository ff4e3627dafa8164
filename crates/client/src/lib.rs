//! HTTP client for the card catalog API.
//!
//! Wraps the four `/api/card` endpoints using [`reqwest`]. Not-found
//! responses from the lookup and search endpoints come back as `None` / an
//! empty `Vec`; any other non-2xx status is a [`CardClientError::ApiError`].

use cardex_core::card::Card;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

/// Errors from the card API client.
#[derive(Debug, thiserror::Error)]
pub enum CardClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A uuid or name that cannot travel as a URL path segment (`.` or
    /// `..`, which URL normalization would collapse).
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// The API returned a status that is neither success nor the endpoint's
    /// not-found signal.
    #[error("Card API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for one card API deployment.
#[derive(Debug, Clone)]
pub struct CardClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CardClient {
    /// Create a client for the API served at `base_url`, e.g.
    /// `http://localhost:8000`.
    pub fn new(base_url: Url) -> Result<Self, CardClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Result<Self, CardClientError> {
        if base_url.cannot_be_a_base() {
            return Err(CardClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// First page of all cards, unfiltered.
    pub async fn fetch_all_cards(&self) -> Result<Vec<Card>, CardClientError> {
        self.fetch_cards(None, None).await
    }

    /// One page of cards, optionally restricted to a set code.
    pub async fn fetch_cards(
        &self,
        set_code: Option<&str>,
        page: Option<i64>,
    ) -> Result<Vec<Card>, CardClientError> {
        let mut url = self.endpoint(&["all"])?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(set_code) = set_code {
                query.append_pair("setCode", set_code);
            }
            if let Some(page) = page {
                query.append_pair("page", &page.to_string());
            }
        }
        strip_empty_query(&mut url);

        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// A card by uuid with its rules text decoded, or `None` if the API has
    /// no such card.
    pub async fn fetch_card(&self, uuid: &str) -> Result<Option<Card>, CardClientError> {
        let response = self.client.get(self.endpoint(&[uuid])?).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(uuid, "Card not found");
            return Ok(None);
        }

        let card: Card = Self::parse_response(response).await?;
        Ok(Some(card.with_decoded_text()))
    }

    /// Cards whose name contains `name`, optionally within one set. No
    /// match is an empty `Vec`, not an error.
    pub async fn fetch_card_by_name(
        &self,
        name: &str,
        set_code: Option<&str>,
    ) -> Result<Vec<Card>, CardClientError> {
        let mut url = self.endpoint(&["search", name])?;
        if let Some(set_code) = set_code.filter(|s| !s.is_empty()) {
            url.query_pairs_mut().append_pair("setCode", set_code);
        }

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(name, "No cards matched");
            return Ok(Vec::new());
        }

        Self::parse_response(response).await
    }

    /// Every distinct set code in the catalog.
    pub async fn fetch_set_codes(&self) -> Result<Vec<String>, CardClientError> {
        let response = self.client.get(self.endpoint(&["setcodes"])?).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// `{base}/api/card/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CardClientError> {
        if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(CardClientError::InvalidPathSegment(dots.to_string()));
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["api", "card"]).extend(segments);
        }
        Ok(url)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`CardClientError::ApiError`] containing
    /// the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CardClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "Card API request failed");
            return Err(CardClientError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CardClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Drop a dangling `?` left by an empty `query_pairs_mut` scope.
fn strip_empty_query(url: &mut Url) {
    if url.query() == Some("") {
        url.set_query(None);
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn client(base: &str) -> CardClient {
        CardClient::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn endpoint_appends_under_base_path() {
        let c = client("http://cards.test/prefix/");
        assert_eq!(
            c.endpoint(&["setcodes"]).unwrap().as_str(),
            "http://cards.test/prefix/api/card/setcodes"
        );
    }

    #[test]
    fn endpoint_encodes_segments() {
        let c = client("http://cards.test");
        assert_eq!(
            c.endpoint(&["search", "Bolt Jr/2"]).unwrap().as_str(),
            "http://cards.test/api/card/search/Bolt%20Jr%2F2"
        );
    }

    #[test]
    fn dot_segments_are_rejected() {
        let c = client("http://cards.test");
        for dots in [".", ".."] {
            assert_matches!(
                c.endpoint(&["search", dots]),
                Err(CardClientError::InvalidPathSegment(s)) if s == dots
            );
        }
        assert_eq!(
            c.endpoint(&["search", "..."]).unwrap().as_str(),
            "http://cards.test/api/card/search/..."
        );
    }

    #[test]
    fn cannot_be_a_base_url_is_rejected() {
        let result = CardClient::new(Url::parse("mailto:cards@test").unwrap());
        assert_matches!(result, Err(CardClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn empty_query_is_stripped() {
        let mut url = Url::parse("http://cards.test/api/card/all").unwrap();
        drop(url.query_pairs_mut());
        strip_empty_query(&mut url);
        assert_eq!(url.as_str(), "http://cards.test/api/card/all");
    }
}
