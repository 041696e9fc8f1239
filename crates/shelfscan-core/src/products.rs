use serde::{Deserialize, Serialize};

/// A star rating pulled from listing text.
///
/// Serializes untagged: a JSON number when the token parsed, otherwise the
/// original token as a JSON string. Consumers must handle both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Value(f64),
    Text(String),
}

/// Canonical record for one scraped product listing.
///
/// Every descriptive field is independently optional: a listing without a
/// delivery line is common and not an error. `badges` is never absent; an
/// empty list means no badge triggers fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: Option<String>,
    pub rating: Option<Rating>,
    /// Kept as text: counts may carry thousands separators or a trailing `+`.
    pub reviews: Option<String>,
    /// Kept as text to preserve the listing's exact currency formatting, e.g. `"$1,299.99"`.
    pub price: Option<String>,
    pub delivery: Option<String>,
    pub badges: Vec<String>,
    /// 1-based position of the listing in the scraper's input array.
    pub id: usize,
}
