use super::{strip_spaces, LineAnchors};
use crate::patterns::REVIEWS_RE;

const NBSP: char = '\u{00A0}';

/// Extracts the review count, usually rendered on the line right after the rating.
///
/// The line after the rating anchor is tried first. When there is no rating,
/// or that line is not a bare count, the first bare count anywhere in the
/// sequence is used instead. Non-breaking and plain spaces are removed from
/// the result, so `"1 234"` comes back as `"1234"`.
#[must_use]
pub fn find_reviews(lines: &[String], anchors: &LineAnchors) -> Option<String> {
    let adjacent = anchors
        .rating
        .and_then(|idx| lines.get(idx + 1))
        .and_then(|line| review_count(line));

    adjacent.or_else(|| lines.iter().find_map(|line| review_count(line)))
}

fn review_count(line: &str) -> Option<String> {
    let candidate = line.trim().replace(NBSP, "");
    REVIEWS_RE
        .is_match(&candidate)
        .then(|| strip_spaces(&candidate))
}
