use shelfscan_core::Rating;

use crate::patterns::RATING_RE;

/// Index of the first line carrying a rating phrase.
#[must_use]
pub fn rating_line(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| RATING_RE.is_match(line))
}

/// Extracts the star rating from the first line that carries one.
///
/// Recognizes `"4.5 out of 5 stars"` and `"4,5 de 5 estrellas"`
/// (case-insensitive). A decimal comma becomes a dot before parsing; a token
/// that still fails to parse comes back as [`Rating::Text`].
#[must_use]
pub fn find_rating(lines: &[String]) -> Option<Rating> {
    let caps = lines.iter().find_map(|line| RATING_RE.captures(line))?;
    let token = caps[1].replace(',', ".");
    Some(match token.parse::<f64>() {
        Ok(value) => Rating::Value(value),
        Err(_) => Rating::Text(token),
    })
}
