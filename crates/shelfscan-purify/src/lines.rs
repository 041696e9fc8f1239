//! Flattening of a `children_text` block map into a line sequence.

use serde_json::{Map, Value};

/// Flattens a block map into trimmed, non-empty lines in document order.
///
/// Only string values contribute; numbers, nested maps and the like are
/// skipped. String values are joined with `\n` before splitting so that a
/// value spanning several rendered lines yields several entries.
#[must_use]
pub fn normalize_lines(blocks: &Map<String, Value>) -> Vec<String> {
    let joined = blocks
        .values()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    joined
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
