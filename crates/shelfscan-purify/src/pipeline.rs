//! Batch orchestration: raw scraper items in, [`ProductRecord`]s out.
//!
//! Items that do not carry a usable `children_text` object are skipped, never
//! fatal. [`purify_with_report`] records why each one was skipped;
//! [`purify_items`] keeps only the records.

use serde::Serialize;
use serde_json::{Map, Value};
use shelfscan_core::ProductRecord;

use crate::error::PurifyError;
use crate::extract::{
    find_badges, find_delivery, find_price, find_rating, find_reviews, find_title, LineAnchors,
};
use crate::lines::normalize_lines;

/// Key under which the scraper stores each listing's block map.
pub const CHILDREN_TEXT_KEY: &str = "children_text";

/// Why an input item produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The array element is a string, number, array, or null.
    NotAnObject,
    /// The object carries no `children_text` key.
    MissingChildrenText,
    /// `children_text` is present but holds something other than an object.
    ChildrenTextNotAnObject,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "item is not a JSON object"),
            SkipReason::MissingChildrenText => write!(f, "item has no children_text key"),
            SkipReason::ChildrenTextNotAnObject => write!(f, "children_text is not a JSON object"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedItem {
    /// 1-based position in the input, matching [`ProductRecord::id`].
    pub id: usize,
    pub reason: SkipReason,
}

/// Records plus the bookkeeping needed to tell skipped items from absent fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurifyReport {
    pub records: Vec<ProductRecord>,
    pub skipped: Vec<SkippedItem>,
    pub raw_items: usize,
}

impl PurifyReport {
    #[must_use]
    pub fn structured_items(&self) -> usize {
        self.records.len()
    }
}

/// Decodes a raw scraper dump into its list of items.
///
/// # Errors
///
/// Returns [`PurifyError::Deserialize`] for malformed JSON and
/// [`PurifyError::NotAnArray`] when the top level is not an array.
pub fn parse_items(raw: &str) -> Result<Vec<Value>, PurifyError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| PurifyError::Deserialize {
        context: "scraped items".to_string(),
        source,
    })?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(PurifyError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Runs every extractor over one listing's block map.
#[must_use]
pub fn purify_block_map(blocks: &Map<String, Value>, id: usize) -> ProductRecord {
    let lines = normalize_lines(blocks);
    let anchors = LineAnchors::scan(&lines);

    ProductRecord {
        title: find_title(&lines, &anchors),
        rating: find_rating(&lines),
        reviews: find_reviews(&lines, &anchors),
        price: find_price(&lines),
        delivery: find_delivery(&lines),
        badges: find_badges(&lines),
        id,
    }
}

/// Purifies a single raw item, or explains why it cannot be.
///
/// # Errors
///
/// Returns the [`SkipReason`] when the item has no usable block map.
pub fn purify_item(item: &Value, id: usize) -> Result<ProductRecord, SkipReason> {
    let object = item.as_object().ok_or(SkipReason::NotAnObject)?;
    let children = object
        .get(CHILDREN_TEXT_KEY)
        .ok_or(SkipReason::MissingChildrenText)?;
    let blocks = children
        .as_object()
        .ok_or(SkipReason::ChildrenTextNotAnObject)?;
    Ok(purify_block_map(blocks, id))
}

/// Purifies a batch and reports every skipped item alongside the records.
#[must_use]
pub fn purify_with_report(items: &[Value]) -> PurifyReport {
    let mut report = PurifyReport {
        raw_items: items.len(),
        ..PurifyReport::default()
    };

    for (idx, item) in items.iter().enumerate() {
        let id = idx + 1;
        match purify_item(item, id) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                tracing::debug!(id, %reason, "skipping scraped item");
                report.skipped.push(SkippedItem { id, reason });
            }
        }
    }

    tracing::debug!(
        raw_items = report.raw_items,
        structured_items = report.structured_items(),
        "purified scraped items"
    );
    report
}

/// Purifies a batch. Records keep their input position as `id`, so gaps mark skipped items.
#[must_use]
pub fn purify_items(items: &[Value]) -> Vec<ProductRecord> {
    purify_with_report(items).records
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
