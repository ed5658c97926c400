use crate::card::Card;
use crate::name::normalize_name_for_match;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Cards that shared a normalized full name, kept as they were before
/// merging so callers can write them out for inspection.
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    pub name: String,
    pub members: Vec<Card>,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub cards: Vec<Card>,
    pub groups: Vec<DuplicateGroup>,
}

/// Collapse cards that share a normalized full name into one card each.
///
/// The merged card holds the union of the members' properties with exact
/// duplicates removed; first occurrence wins and order is first-seen order.
/// It takes the position of the group's first member. Cards without a
/// usable `FN` are never merged.
pub fn merge_by_name(cards: Vec<Card>) -> MergeOutcome {
    let mut slots: Vec<Slot> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for card in cards {
        let key = card.full_name().and_then(normalize_name_for_match);
        let Some(key) = key else {
            slots.push(Slot::Single(card));
            continue;
        };

        match by_name.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(slots.len());
                slots.push(Slot::Named(vec![card]));
            }
            Entry::Occupied(entry) => {
                let Slot::Named(members) = &mut slots[*entry.get()] else {
                    unreachable!("by_name only points at named slots");
                };
                members.push(card);
            }
        }
    }

    let mut out = Vec::with_capacity(slots.len());
    let mut groups = Vec::new();
    for slot in slots {
        match slot {
            Slot::Single(card) => out.push(card),
            Slot::Named(mut members) => {
                if members.len() == 1 {
                    out.push(members.pop().unwrap_or_default());
                    continue;
                }
                let merged = merge_group(&members);
                let name = merged.full_name().unwrap_or_default().to_string();
                groups.push(DuplicateGroup { name, members });
                out.push(merged);
            }
        }
    }

    MergeOutcome { cards: out, groups }
}

enum Slot {
    Single(Card),
    Named(Vec<Card>),
}

fn merge_group(members: &[Card]) -> Card {
    let mut merged = Card::default();
    let mut seen: HashSet<String> = HashSet::new();
    for card in members {
        for prop in &card.properties {
            if seen.insert(prop.match_key()) {
                merged.push(prop.clone());
            }
        }
    }
    merged
}
