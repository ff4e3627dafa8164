#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A unique-key lookup matched no record.
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    /// A search where an empty result is a valid outcome matched nothing.
    #[error("No {entity} records matched: {query}")]
    NoMatches { entity: &'static str, query: String },
}
