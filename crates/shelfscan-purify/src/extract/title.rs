use super::LineAnchors;
use crate::patterns::{MULTI_SPACE_RE, PRICE_LINK_BOILERPLATE};

/// Derives the title from the lines above the first rating or price.
///
/// Boilerplate `"Price, product page"` lines are dropped and whitespace runs
/// collapsed. Without any anchor, or when nothing is left above it, the first
/// line stands in as the title.
#[must_use]
pub fn find_title(lines: &[String], anchors: &LineAnchors) -> Option<String> {
    let first_line = || lines.first().map(|line| line.trim().to_owned());

    let Some(cut) = anchors.cut() else {
        return first_line();
    };

    let joined = lines
        .iter()
        .take(cut)
        .filter(|line| !line.to_lowercase().starts_with(PRICE_LINK_BOILERPLATE))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    let title = MULTI_SPACE_RE.replace_all(joined.trim(), " ");

    if title.is_empty() {
        first_line()
    } else {
        Some(title.into_owned())
    }
}
