use crate::card::Card;
use crate::phone::normalize_phone_for_match;
use serde::Serialize;
use std::collections::HashSet;

/// Counts of what cleaning removed across a batch of cards.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CleanStats {
    pub properties_dropped: usize,
    pub phones_deduped: usize,
}

impl CleanStats {
    pub fn merge(&mut self, other: CleanStats) {
        self.properties_dropped += other.properties_dropped;
        self.phones_deduped += other.phones_deduped;
    }
}

/// Clean every card in place: drop placeholder-prefixed properties, drop
/// empty and NULL values, deduplicate phone numbers.
pub fn clean_cards(cards: &mut [Card]) -> CleanStats {
    let mut stats = CleanStats::default();
    for card in cards.iter_mut() {
        stats.merge(clean_card(card));
    }
    stats
}

fn clean_card(card: &mut Card) -> CleanStats {
    let mut stats = CleanStats::default();

    let before = card.properties.len();
    card.properties
        .retain(|prop| !has_placeholder_prefix(&prop.name) && !is_placeholder_value(&prop.value));
    stats.properties_dropped = before - card.properties.len();

    stats.phones_deduped = dedup_card_phones(card);
    stats
}

/// Remove `TEL` entries whose normalized number was already seen on the
/// card. First occurrence wins; order is preserved. Runs on every card in
/// the slice and returns how many entries were removed.
pub fn dedup_phones(cards: &mut [Card]) -> usize {
    cards.iter_mut().map(dedup_card_phones).sum()
}

fn dedup_card_phones(card: &mut Card) -> usize {
    let before = card.properties.len();
    let mut seen: HashSet<String> = HashSet::new();
    card.properties.retain(|prop| {
        if !prop.is("TEL") {
            return true;
        }
        match normalize_phone_for_match(&prop.value) {
            Some(normalized) => seen.insert(normalized),
            // Not comparable as a phone; leave it alone.
            None => true,
        }
    });
    before - card.properties.len()
}

/// Synthetic group prefix some exporters emit: `item`, one or more digits,
/// then a dot, e.g. `item1.TEL`.
fn has_placeholder_prefix(name: &str) -> bool {
    let Some(head) = name.get(..4) else {
        return false;
    };
    if !head.eq_ignore_ascii_case("item") {
        return false;
    }

    let rest = &name[4..];
    let digits = rest.chars().take_while(|ch| ch.is_ascii_digit()).count();
    digits > 0 && rest[digits..].starts_with('.')
}

fn is_placeholder_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("NULL")
}
