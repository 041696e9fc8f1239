//! Turns scraped listing text into canonical [`ProductRecord`]s.
//!
//! The scraper hands over one `children_text` block map per listing: tag
//! name to the visible text of that tag's subtree. [`lines`] flattens it into
//! ordered lines, [`extract`] pulls each field out with positional and
//! lexical heuristics, and [`pipeline`] runs the batch.

pub mod children;
pub mod error;
pub mod extract;
pub mod lines;
pub mod patterns;
pub mod pipeline;

pub use children::{children_texts, ChildText};
pub use error::PurifyError;
pub use extract::LineAnchors;
pub use lines::normalize_lines;
pub use pipeline::{
    parse_items, purify_block_map, purify_item, purify_items, purify_with_report, PurifyReport,
    SkipReason, SkippedItem,
};
pub use shelfscan_core::{ProductRecord, Rating};
