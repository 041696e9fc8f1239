use std::collections::HashSet;

use crate::patterns::{BadgePolicy, BADGE_TRIGGERS};

/// Collects promotional badges in first-seen order without duplicates.
///
/// Every line is tested against every trigger in [`BADGE_TRIGGERS`]. A
/// trigger contributes its canonical label, except `List:`, which contributes
/// the whole line so the list price travels with it.
#[must_use]
pub fn find_badges(lines: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut badges = Vec::new();

    for line in lines {
        let lower = line.to_lowercase();
        for trigger in BADGE_TRIGGERS {
            if !lower.contains(&trigger.label.to_lowercase()) {
                continue;
            }
            let badge = match trigger.policy {
                BadgePolicy::Label => trigger.label,
                BadgePolicy::WholeLine => line.trim(),
            };
            if seen.insert(badge) {
                badges.push(badge.to_owned());
            }
        }
    }

    badges
}
