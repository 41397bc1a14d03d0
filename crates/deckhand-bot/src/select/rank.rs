//! Card-ranking helpers for forced choices (discards, trashes, gifts).

use deckhand_core::cards;
use deckhand_core::model::Hand;

/// Safe pick when a chooser is handed an empty set: the lowest-tier
/// treasure is always a legal, harmless answer.
const FALLBACK_CARD: &str = "copper";

/// Highest-priority candidate; ties break lexicographically so the
/// choice is stable across invocations.
pub fn best_of<S: AsRef<str>>(candidates: &[S]) -> Option<&str> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .min_by(|a, b| {
            cards::priority(b)
                .cmp(&cards::priority(a))
                .then_with(|| a.cmp(b))
        })
}

/// Discard/trash candidate: junk victory cards first, then copper, then
/// whatever we value least. Never fails on a non-empty hand; an empty
/// hand degrades to the fallback rather than erroring.
pub fn worst_in_hand(hand: &Hand) -> String {
    hand.iter()
        .map(|(card, _)| card)
        .min_by_key(|card| bucket_key(card))
        .unwrap_or(FALLBACK_CARD)
        .to_string()
}

fn bucket_key(card: &str) -> (u8, u32, &str) {
    let bucket = if cards::is_junk(card) {
        0
    } else if card == "copper" {
        1
    } else {
        2
    };
    (bucket, cards::priority(card), card)
}

/// When the server lets us trash a treasure for a better one, give up a
/// copper if we hold any, otherwise the least valuable option offered.
pub fn treasure_to_upgrade<S: AsRef<str>>(money: &[S]) -> String {
    let names = money.iter().map(AsRef::as_ref);
    if names.clone().any(|card| card == "copper") {
        return "copper".to_string();
    }
    names
        .min_by_key(|card| (cards::priority(card), *card))
        .unwrap_or(FALLBACK_CARD)
        .to_string()
}
