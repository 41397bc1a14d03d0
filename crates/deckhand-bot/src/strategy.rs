//! Strategy registry: named buy pipelines selectable per match.
//!
//! The registry is static, read-only configuration. Keys are
//! case-normalized and unrecognized keys resolve to the baseline
//! pipeline rather than failing.

use crate::decision::Decision;
use crate::select;
use deckhand_core::consts::{
    BUY_4_COST_COINS, BUY_5_COST_COINS, BUY_GOLD_COINS, BUY_PROVINCE_COINS, BUY_SILVER_COINS,
    ENDGAME_PROVINCE_THRESHOLD, RUSH_TURN,
};
use deckhand_core::model::Game;
use deckhand_core::state::TurnState;
use deckhand_core::view::{in_stock, terminal_capacity};

/// A complete buy pipeline: snapshot, spendable coins, our seat, and
/// the match record in; a decision out (`EndTurn` when nothing fits).
pub type BuyFn = fn(&Game, u32, usize, &TurnState) -> Decision;

pub const DEFAULT_STRATEGY: &str = "baseline";

const REGISTRY: [(&str, BuyFn); 4] = [
    ("baseline", select::choose_buy),
    ("bm_smithy", bm_smithy),
    ("village_smithy", village_smithy),
    ("militia_counter", militia_counter),
];

/// Map a raw strategy key to its pipeline. Keys are trimmed and
/// lowercased; anything unrecognized gets the baseline.
pub fn resolve(key: &str) -> BuyFn {
    let key = key.trim().to_ascii_lowercase();
    REGISTRY
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, f)| *f)
        .unwrap_or(select::choose_buy)
}

/// Normalize a key to the form [`resolve`] recognizes, falling back to
/// [`DEFAULT_STRATEGY`] for unknown names so the stored key always
/// round-trips through the registry.
pub fn normalize(key: &str) -> &'static str {
    let key = key.trim().to_ascii_lowercase();
    REGISTRY
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(name, _)| *name)
        .unwrap_or(DEFAULT_STRATEGY)
}

/// Shared greening fallback: once the province pile runs low or the
/// match runs long, victory cards outrank everything else.
fn vp_pressure(game: &Game, coins: u32, turn: u32) -> Option<Decision> {
    let provinces_left = game.stock.remaining("province");
    if coins >= BUY_PROVINCE_COINS
        && in_stock(game, "province")
        && (provinces_left <= ENDGAME_PROVINCE_THRESHOLD || turn >= RUSH_TURN - 3)
    {
        return Some(Decision::buy("province"));
    }
    if coins >= BUY_5_COST_COINS
        && in_stock(game, "duchy")
        && (provinces_left <= ENDGAME_PROVINCE_THRESHOLD || turn >= RUSH_TURN - 1)
    {
        return Some(Decision::buy("duchy"));
    }
    if coins >= 2 && in_stock(game, "estate") && (provinces_left <= 2 || turn >= RUSH_TURN) {
        return Some(Decision::buy("estate"));
    }
    None
}

/// Big money with at most two smithies: money and VP, nothing fancy.
fn bm_smithy(game: &Game, coins: u32, _me: usize, state: &TurnState) -> Decision {
    if let Some(vp) = vp_pressure(game, coins, state.turn) {
        return vp;
    }
    if coins >= BUY_PROVINCE_COINS && in_stock(game, "province") {
        return Decision::buy("province");
    }
    if coins >= BUY_GOLD_COINS && in_stock(game, "gold") {
        return Decision::buy("gold");
    }
    if coins >= BUY_5_COST_COINS {
        if state.owned("smithy") < 2 && in_stock(game, "smithy") {
            return Decision::buy("smithy");
        }
        if in_stock(game, "laboratory") {
            return Decision::buy("laboratory");
        }
        if in_stock(game, "duchy") {
            return Decision::buy("duchy");
        }
    }
    if coins >= BUY_SILVER_COINS && in_stock(game, "silver") {
        return Decision::buy("silver");
    }
    Decision::EndTurn
}

/// Village/smithy engine: alternate the two up to soft caps, keep
/// gold flowing, and green under standard pressure.
fn village_smithy(game: &Game, coins: u32, _me: usize, state: &TurnState) -> Decision {
    let cap = terminal_capacity(&state.counts);

    if let Some(vp) = vp_pressure(game, coins, state.turn) {
        return vp;
    }
    if coins >= BUY_PROVINCE_COINS && in_stock(game, "province") {
        return Decision::buy("province");
    }
    if coins >= BUY_GOLD_COINS && in_stock(game, "gold") {
        return Decision::buy("gold");
    }
    if coins >= BUY_5_COST_COINS {
        for card in ["laboratory", "market", "festival"] {
            if in_stock(game, card) {
                return Decision::buy(card);
            }
        }
        if cap > 0 && state.owned("smithy") < 5 && in_stock(game, "smithy") {
            return Decision::buy("smithy");
        }
        if in_stock(game, "duchy") && state.turn >= RUSH_TURN - 4 {
            return Decision::buy("duchy");
        }
    }
    if coins >= BUY_4_COST_COINS {
        if in_stock(game, "village") && state.owned("village") < 6 {
            return Decision::buy("village");
        }
        for card in ["moneylender", "militia", "remodel", "remake", "port", "poacher"] {
            if in_stock(game, card) {
                return Decision::buy(card);
            }
        }
    }
    if coins >= BUY_SILVER_COINS && in_stock(game, "silver") {
        return Decision::buy("silver");
    }
    Decision::EndTurn
}

/// Counter plan against fast draw decks: one militia, one gold, up to
/// five markets and smithies, villages for support, one cellar.
fn militia_counter(game: &Game, coins: u32, _me: usize, state: &TurnState) -> Decision {
    let cap = terminal_capacity(&state.counts);

    if let Some(vp) = vp_pressure(game, coins, state.turn) {
        return vp;
    }
    if coins >= BUY_PROVINCE_COINS && in_stock(game, "province") {
        return Decision::buy("province");
    }
    if state.owned("militia") == 0 && coins >= BUY_4_COST_COINS && in_stock(game, "militia") {
        return Decision::buy("militia");
    }
    if coins >= BUY_5_COST_COINS && state.owned("market") < 5 && in_stock(game, "market") {
        return Decision::buy("market");
    }
    if state.owned("gold") == 0 && coins >= BUY_GOLD_COINS && in_stock(game, "gold") {
        return Decision::buy("gold");
    }
    if coins >= BUY_5_COST_COINS && state.owned("smithy") < 5 && cap > 0 && in_stock(game, "smithy")
    {
        return Decision::buy("smithy");
    }
    if coins >= BUY_4_COST_COINS && state.owned("village") < 6 && in_stock(game, "village") {
        return Decision::buy("village");
    }
    if coins >= 2 && state.owned("cellar") == 0 && in_stock(game, "cellar") {
        return Decision::buy("cellar");
    }
    if coins >= BUY_GOLD_COINS && in_stock(game, "gold") {
        return Decision::buy("gold");
    }
    if coins >= BUY_SILVER_COINS && in_stock(game, "silver") {
        return Decision::buy("silver");
    }
    Decision::EndTurn
}
