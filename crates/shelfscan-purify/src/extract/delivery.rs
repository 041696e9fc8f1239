use crate::patterns::DELIVERY_RE;

/// Extracts the first shipping estimate, from its lead-in phrase to the end of the line.
#[must_use]
pub fn find_delivery(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| DELIVERY_RE.find(line))
        .map(|m| m.as_str().trim().to_owned())
}
