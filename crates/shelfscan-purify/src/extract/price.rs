use super::strip_spaces;
use crate::patterns::PRICE_RE;

/// Extracts the listing price, trying three strategies in order.
///
/// 1. A complete amount on one line (inner spaces ignored), e.g. `"$1,299.99"`.
///    A line holding only a whole-dollar amount is first checked for cents
///    rendered on the next two lines.
/// 2. An amount split across three lines: `"$"`, `"."`, `"99"`.
/// 3. The amount on a strikethrough `"List:"` line.
#[must_use]
pub fn find_price(lines: &[String]) -> Option<String> {
    direct_price(lines)
        .or_else(|| split_price(lines))
        .or_else(|| list_price(lines))
}

fn direct_price(lines: &[String]) -> Option<String> {
    lines.iter().enumerate().find_map(|(idx, line)| {
        let compact = strip_spaces(line);
        let amount = PRICE_RE.find(&compact)?.as_str();
        let whole_dollars_only = amount.len() == compact.len() && !amount.contains('.');
        if whole_dollars_only {
            if let Some(joined) = reconstruct_split_price(lines, idx) {
                return Some(joined);
            }
        }
        Some(amount.to_owned())
    })
}

fn split_price(lines: &[String]) -> Option<String> {
    (0..lines.len())
        .filter(|&idx| lines[idx].trim().starts_with('$'))
        .find_map(|idx| reconstruct_split_price(lines, idx))
}

/// Joins integer part, decimal point and cents rendered as separate text nodes.
fn reconstruct_split_price(lines: &[String], idx: usize) -> Option<String> {
    let [whole, point, cents] = [idx, idx + 1, idx + 2].map(|i| lines.get(i).map(|l| l.trim()));
    let (whole, point, cents) = (whole?, point?, cents?);

    let is_cents = cents.len() == 2 && cents.bytes().all(|b| b.is_ascii_digit());
    if whole.starts_with('$') && point == "." && is_cents {
        Some(format!("{}.{cents}", strip_spaces(whole)))
    } else {
        None
    }
}

fn list_price(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .filter(|line| line.contains("List:"))
        .find_map(|line| PRICE_RE.find(line).map(|m| m.as_str().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    fn price(raw: &[&str]) -> Option<String> {
        find_price(&lines(raw))
    }

    #[test]
    fn direct_price_with_cents() {
        assert_eq!(price(&["Mouse", "$19.99"]).as_deref(), Some("$19.99"));
    }

    #[test]
    fn direct_price_with_thousands() {
        assert_eq!(
            price(&["Laptop", "$1,299.00"]).as_deref(),
            Some("$1,299.00")
        );
    }

    #[test]
    fn direct_price_ignores_inner_spaces() {
        assert_eq!(price(&["$ 49 .99"]).as_deref(), Some("$49.99"));
    }

    #[test]
    fn direct_price_inside_longer_line() {
        assert_eq!(
            price(&["Now only $7.50 each"]).as_deref(),
            Some("$7.50")
        );
    }

    #[test]
    fn split_price_reconstructed() {
        assert_eq!(price(&["$129", ".", "99"]).as_deref(), Some("$129.99"));
    }

    #[test]
    fn split_price_with_spaced_whole_part() {
        assert_eq!(
            price(&["Mouse", "$ 1 29", ".", "99"]).as_deref(),
            Some("$129.99")
        );
    }

    #[test]
    fn split_price_with_bare_dollar_sign() {
        assert_eq!(price(&["$", ".", "05"]).as_deref(), Some("$.05"));
    }

    #[test]
    fn split_price_requires_two_digit_cents() {
        assert!(price(&["$", ".", "9"]).is_none());
        assert!(price(&["$", ".", "999"]).is_none());
        assert_eq!(price(&["$129", ".", "9"]).as_deref(), Some("$129"));
    }

    #[test]
    fn amount_with_cents_is_not_extended() {
        assert_eq!(
            price(&["$12.50", ".", "99"]).as_deref(),
            Some("$12.50")
        );
    }

    #[test]
    fn amount_inside_text_is_not_extended() {
        assert_eq!(
            price(&["From $129", ".", "99"]).as_deref(),
            Some("$129")
        );
    }

    #[test]
    fn split_price_truncated_at_end_is_no_match() {
        assert!(price(&["Mouse", "$", "."]).is_none());
        assert!(price(&["$"]).is_none());
    }

    #[test]
    fn list_price_reads_amount_from_list_line() {
        assert_eq!(
            list_price(&lines(&["Mouse", "Typical: $27.00", "List: $25.00"])).as_deref(),
            Some("$25.00")
        );
    }

    #[test]
    fn list_price_is_case_sensitive() {
        assert!(list_price(&lines(&["list: $25.00"])).is_none());
    }

    #[test]
    fn first_line_with_amount_wins() {
        assert_eq!(
            price(&["List: $30.00", "$24.99"]).as_deref(),
            Some("$30.00")
        );
    }

    #[test]
    fn absent_without_currency() {
        assert!(price(&["Mouse", "4.3 out of 5 stars"]).is_none());
    }
}
