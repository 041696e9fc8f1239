//! Compiled patterns and lexical tables shared by the extractors.
//!
//! Locale coverage lives here as data: a new storefront language means new
//! entries in [`DELIVERY_PHRASES`] or [`BADGE_TRIGGERS`], not new extractor
//! code.

use std::sync::LazyLock;

use regex::Regex;

/// `"4.5 out of 5 stars"` / `"4,5 de 5 estrellas"`; group 1 is the rating token.
pub(crate) static RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(?:out of 5 stars|de 5 estrellas)")
        .expect("valid rating regex")
});

/// Dollar amount with optional comma-grouped thousands and two-digit cents.
pub(crate) static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\d{1,4}(?:,\d{3})*(?:\.\d{2})?").expect("valid price regex")
});

/// A whole line that is only a count: digits with `,` `.` or space
/// separators and an optional trailing `+`. At least one digit is required.
pub(crate) static REVIEWS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[\d ,.]*\d[\d ,.]*\+?\s*$").expect("valid reviews regex")
});

pub(crate) static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));

/// Lead-in phrases for shipping estimates, English then Spanish.
///
/// Matching is case-insensitive and unanchored; the extracted text runs from
/// the phrase to the end of the line.
pub const DELIVERY_PHRASES: &[&str] = &[
    "FREE delivery",
    "delivery ",
    "Envío GRATIS",
    "Entrega GRATIS",
    "Entrega ",
    "Llega ",
    "Recíbelo ",
];

pub(crate) static DELIVERY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = DELIVERY_PHRASES
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)(?:{alternation}).*")).expect("valid delivery regex")
});

/// What a badge trigger contributes to the record when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePolicy {
    /// Emit the trigger's canonical label.
    Label,
    /// Emit the whole trimmed line; used where the line carries extra context
    /// such as a strikethrough list price.
    WholeLine,
}

/// A case-insensitive phrase that marks a badge, and what it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeTrigger {
    pub label: &'static str,
    pub policy: BadgePolicy,
}

impl BadgeTrigger {
    const fn label(label: &'static str) -> Self {
        Self {
            label,
            policy: BadgePolicy::Label,
        }
    }

    const fn whole_line(label: &'static str) -> Self {
        Self {
            label,
            policy: BadgePolicy::WholeLine,
        }
    }
}

/// Badge triggers in scan order. Matching is a case-insensitive substring test.
pub const BADGE_TRIGGERS: &[BadgeTrigger] = &[
    BadgeTrigger::label("Add to cart"),
    BadgeTrigger::label("See options"),
    BadgeTrigger::label("More Buying Choices"),
    BadgeTrigger::label("Only"),
    BadgeTrigger::whole_line("List:"),
    BadgeTrigger::label("Exclusively for Prime Members"),
    BadgeTrigger::label("Agregar al carrito"),
    BadgeTrigger::label("Añadir a la cesta"),
    BadgeTrigger::label("Ver opciones"),
    BadgeTrigger::label("Más opciones de compra"),
    BadgeTrigger::label("Solo quedan"),
    BadgeTrigger::label("Exclusivo para miembros Prime"),
];

/// Boilerplate prefix (lowercased) that screen-reader price links leave in listing text.
pub(crate) const PRICE_LINK_BOILERPLATE: &str = "price, product page";
