//! Read-only projections over a [`Game`] snapshot.
//!
//! Every function here is total: malformed or partial snapshots read as
//! empty rather than failing, per the protocol's degrade-to-END_TURN
//! policy.

use crate::AgentInfo;
use crate::cards;
use crate::model::Game;
use std::collections::BTreeMap;

/// True iff the supply pile for `card` still has copies.
pub fn in_stock(game: &Game, card: &str) -> bool {
    game.stock.remaining(card) > 0
}

/// Locate our own seat in the player list.
///
/// The server prefixes our name tag with the callback URL, so a
/// substring match comes first; failing that, the only seat with a
/// visible hand must be ours; failing that, seat 1 is the conventional
/// agent slot in two-player matches.
pub fn find_seat(game: &Game) -> Option<usize> {
    if game.players.is_empty() {
        return None;
    }

    if let Some(idx) = game
        .players
        .iter()
        .position(|p| p.name.contains(AgentInfo::name()))
    {
        return Some(idx);
    }

    let mut with_hand = game
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.hand.is_some());
    if let (Some((idx, _)), None) = (with_hand.next(), with_hand.next()) {
        return Some(idx);
    }

    Some(if game.players.len() > 1 { 1 } else { 0 })
}

/// Our score and the best score among the other seats (0 if alone).
pub fn score_status(game: &Game, me: usize) -> (i32, i32) {
    let my_score = game.players.get(me).map(|p| p.score).unwrap_or(0);
    let best_opponent = game
        .players
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != me)
        .map(|(_, p)| p.score)
        .max()
        .unwrap_or(0);
    (my_score, best_opponent)
}

/// Coins the treasures in our hand are worth, before action bonuses.
pub fn treasure_coins(game: &Game, me: usize) -> u32 {
    let Some(hand) = game.players.get(me).and_then(|p| p.hand.as_ref()) else {
        return 0;
    };
    hand.iter()
        .map(|(card, n)| cards::treasure_value(card) * n)
        .sum()
}

/// Estimate how many more terminal actions the deck can support without
/// stranding them: one native action per turn, plus the actions our
/// owned engine cards restore, minus the terminals already owned.
pub fn terminal_capacity(counts: &BTreeMap<String, u32>) -> i32 {
    let restored: i32 = counts
        .iter()
        .map(|(card, &n)| (cards::engine_weight(card) * n) as i32)
        .sum();
    let terminals: i32 = counts
        .iter()
        .filter(|(card, _)| cards::is_counted_terminal(card))
        .map(|(_, &n)| n as i32)
        .sum();
    1 + restored - terminals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hand, Player, Stock};

    fn player(name: &str, score: i32, hand: Option<Hand>) -> Player {
        Player {
            name: name.to_string(),
            score,
            hand,
        }
    }

    fn game_with(stock: &[(&str, u32)], players: Vec<Player>) -> Game {
        Game {
            players,
            stock: Stock {
                quantities: stock
                    .iter()
                    .map(|(card, n)| (card.to_string(), *n))
                    .collect(),
            },
            finished: false,
        }
    }

    #[test]
    fn in_stock_treats_missing_pile_as_empty() {
        let game = game_with(&[("province", 8), ("curse", 0)], vec![]);
        assert!(in_stock(&game, "province"));
        assert!(!in_stock(&game, "curse"));
        assert!(!in_stock(&game, "witch"));
    }

    #[test]
    fn find_seat_prefers_name_tag() {
        let game = game_with(
            &[],
            vec![
                player("somebody else", 0, Some(Hand::new())),
                player("[http://bot:8000/] Deckhand (v3)", 0, None),
            ],
        );
        assert_eq!(find_seat(&game), Some(1));
    }

    #[test]
    fn find_seat_falls_back_to_unique_hand() {
        let game = game_with(
            &[],
            vec![
                player("a", 0, Some(Hand::with_counts([("copper", 1)]))),
                player("b", 0, None),
            ],
        );
        assert_eq!(find_seat(&game), Some(0));
    }

    #[test]
    fn find_seat_defaults_to_second_seat() {
        let game = game_with(&[], vec![player("a", 0, None), player("b", 0, None)]);
        assert_eq!(find_seat(&game), Some(1));

        let solo = game_with(&[], vec![player("a", 0, None)]);
        assert_eq!(find_seat(&solo), Some(0));

        assert_eq!(find_seat(&game_with(&[], vec![])), None);
    }

    #[test]
    fn score_status_picks_best_opponent() {
        let game = game_with(
            &[],
            vec![player("a", 4, None), player("b", 9, None), player("c", 7, None)],
        );
        assert_eq!(score_status(&game, 0), (4, 9));
        assert_eq!(score_status(&game, 1), (9, 7));
    }

    #[test]
    fn score_status_without_opponents_is_zero() {
        let game = game_with(&[], vec![player("a", 4, None)]);
        assert_eq!(score_status(&game, 0), (4, 0));
    }

    #[test]
    fn treasure_coins_sums_tiers_and_ignores_rest() {
        let hand = Hand::with_counts([("copper", 2), ("silver", 1), ("gold", 1), ("smithy", 3)]);
        let game = game_with(&[], vec![player("a", 0, Some(hand))]);
        assert_eq!(treasure_coins(&game, 0), 2 + 2 + 3);
        // Opponent seat has no visible hand.
        assert_eq!(treasure_coins(&game, 1), 0);
    }

    #[test]
    fn terminal_capacity_formula() {
        let counts: BTreeMap<String, u32> = [("village".to_string(), 1), ("smithy".to_string(), 1)]
            .into_iter()
            .collect();
        assert_eq!(terminal_capacity(&counts), 2);

        let empty = BTreeMap::new();
        assert_eq!(terminal_capacity(&empty), 1);

        let heavy: BTreeMap<String, u32> =
            [("smithy".to_string(), 2), ("woodcutter".to_string(), 1)]
                .into_iter()
                .collect();
        assert_eq!(terminal_capacity(&heavy), -2);
    }
}
