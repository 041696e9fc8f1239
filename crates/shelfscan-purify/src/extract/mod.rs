//! Field extractors over a normalized line sequence.
//!
//! Each extractor returns `None` (or an empty list for badges) when its
//! signal is missing; nothing here fails. Extractors that depend on where the
//! rating or price sits take a [`LineAnchors`] computed once per listing.

mod badges;
mod delivery;
mod price;
mod rating;
mod reviews;
mod title;

pub use badges::find_badges;
pub use delivery::find_delivery;
pub use price::find_price;
pub use rating::{find_rating, rating_line};
pub use reviews::find_reviews;
pub use title::find_title;

use crate::patterns::PRICE_RE;

/// Line positions of the first rating phrase and the first direct price.
///
/// `price` only considers a price written on a single line (spaces removed);
/// split and list-price fallbacks do not move the anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineAnchors {
    pub rating: Option<usize>,
    pub price: Option<usize>,
}

impl LineAnchors {
    /// Scans `lines` once for both anchors.
    #[must_use]
    pub fn scan(lines: &[String]) -> Self {
        Self {
            rating: rating_line(lines),
            price: direct_price_line(lines),
        }
    }

    /// Where the title stops: the earlier of the two anchors, if any.
    #[must_use]
    pub fn cut(&self) -> Option<usize> {
        match (self.rating, self.price) {
            (Some(r), Some(p)) => Some(r.min(p)),
            (r, p) => r.or(p),
        }
    }
}

fn direct_price_line(lines: &[String]) -> Option<usize> {
    lines
        .iter()
        .position(|line| PRICE_RE.is_match(&strip_spaces(line)))
}

/// Removes ASCII spaces only; other whitespace is left for the caller.
pub(crate) fn strip_spaces(s: &str) -> String {
    s.replace(' ', "")
}
