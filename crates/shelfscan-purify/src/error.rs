use thiserror::Error;

#[derive(Debug, Error)]
pub enum PurifyError {
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON array of scraped items, found {found}")]
    NotAnArray { found: &'static str },
}
