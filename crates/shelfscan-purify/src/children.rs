//! Raw listing text digest for downstream consumers.
//!
//! Unlike [`crate::pipeline`], this keeps one entry per input item, with an
//! empty `text` where the item carries nothing usable.

use serde::Serialize;
use serde_json::Value;

use crate::pipeline::CHILDREN_TEXT_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildText {
    /// 1-based position in the input.
    pub id: usize,
    pub text: String,
}

/// Takes the first block of each item's `children_text` map as its raw text.
#[must_use]
pub fn children_texts(items: &[Value]) -> Vec<ChildText> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| ChildText {
            id: idx + 1,
            text: first_block(item).unwrap_or_default().to_owned(),
        })
        .collect()
}

fn first_block(item: &Value) -> Option<&str> {
    item.get(CHILDREN_TEXT_KEY)?
        .as_object()?
        .values()
        .next()?
        .as_str()
}
