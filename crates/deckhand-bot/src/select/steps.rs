//! Individual buy heuristics. Each step either emits a concrete buy or
//! declines with `None`; the pipeline owns the ordering.

use crate::decision::Decision;
use deckhand_core::cards;
use deckhand_core::consts::*;
use deckhand_core::model::Game;
use deckhand_core::view::{in_stock, terminal_capacity};
use std::collections::BTreeMap;

type Counts = BTreeMap<String, u32>;

fn owned(counts: &Counts, card: &str) -> u32 {
    counts.get(card).copied().unwrap_or(0)
}

/// Deck strong enough to start greening: it reaches eight coins often
/// enough that provinces no longer stall the economy.
pub fn engine_ready(counts: &Counts) -> bool {
    if owned(counts, "gold") >= ENGINE_GOLD_THRESHOLD {
        return true;
    }
    if owned(counts, "laboratory") >= ENGINE_LAB_THRESHOLD {
        return true;
    }
    if owned(counts, "market") + owned(counts, "festival") >= ENGINE_MF_SUM_THRESHOLD {
        return true;
    }
    owned(counts, "village") >= 1
        && owned(counts, "smithy") + owned(counts, "councilroom") + owned(counts, "library") >= 1
}

/// The greening gate: may we buy a province before the forced endgame?
pub fn early_province_ok(counts: &Counts, provinces_left: u32, turn: u32, score_gap: i32) -> bool {
    if turn >= RUSH_TURN {
        return true;
    }
    if provinces_left <= EARLY_PROVINCE_STOCK {
        return true;
    }
    if engine_ready(counts) {
        return true;
    }
    if turn < MIN_GREEN_TURN && score_gap > -BEHIND_DUCHY_DEFICIT {
        return false;
    }

    // Pace early provinces so we do not stall our own deck.
    if turn < PROVINCE_SOFT_CAP_BEFORE_TURN && owned(counts, "province") >= PROVINCES_ALLOWED_BEFORE_CAP
    {
        return false;
    }
    if score_gap <= -BEHIND_DUCHY_DEFICIT {
        return true;
    }
    turn >= MIN_GREEN_TURN
}

/// Forced greening once the province pile is nearly gone or the turn
/// cap looms: points now, economy never again.
pub fn endgame_buy(
    game: &Game,
    coins: u32,
    provinces_left: u32,
    turn: u32,
) -> Option<Decision> {
    if turn < RUSH_TURN && provinces_left > ENDGAME_PROVINCE_THRESHOLD {
        return None;
    }
    if coins >= BUY_PROVINCE_COINS && in_stock(game, "province") {
        return Some(Decision::buy("province"));
    }
    if coins >= BUY_5_COST_COINS && in_stock(game, "duchy") {
        return Some(Decision::buy("duchy"));
    }
    if coins >= BUY_SILVER_COINS && in_stock(game, "estate") {
        return Some(Decision::buy("estate"));
    }
    None
}

/// Softer greening pressure once the pile shrinks, plus the catch-up
/// duchy when trailing badly.
pub fn midgame_buy(
    game: &Game,
    coins: u32,
    provinces_left: u32,
    my_score: i32,
    best_opp: i32,
    turn: u32,
) -> Option<Decision> {
    if turn >= RUSH_TURN && coins >= BUY_PROVINCE_COINS && in_stock(game, "province") {
        return Some(Decision::buy("province"));
    }
    if provinces_left <= MIDGAME_PROVINCE_THRESHOLD {
        if coins >= BUY_PROVINCE_COINS && in_stock(game, "province") {
            return Some(Decision::buy("province"));
        }
        if coins >= BUY_5_COST_COINS && in_stock(game, "duchy") && my_score <= best_opp {
            return Some(Decision::buy("duchy"));
        }
    }
    if best_opp - my_score >= BEHIND_DUCHY_DEFICIT
        && coins >= BUY_5_COST_COINS
        && in_stock(game, "duchy")
    {
        return Some(Decision::buy("duchy"));
    }
    None
}

/// Gold whenever affordable and provinces are not yet forced.
pub fn economy_buy(game: &Game, coins: u32) -> Option<Decision> {
    if coins >= BUY_GOLD_COINS && in_stock(game, "gold") {
        return Some(Decision::buy("gold"));
    }
    None
}

/// Situational six-cost pickups slotted after gold: an early hireling,
/// or distantshore once the engine can carry it.
pub fn six_cost_buy(game: &Game, coins: u32, counts: &Counts, turn: u32) -> Option<Decision> {
    if coins < BUY_GOLD_COINS {
        return None;
    }
    if in_stock(game, "hireling") && owned(counts, "hireling") == 0 && turn <= EARLY_HIRELING_TURN {
        return Some(Decision::buy("hireling"));
    }
    if in_stock(game, "distantshore")
        && engine_ready(counts)
        && turn < RUSH_TURN - EARLY_HIRELING_TURN
    {
        return Some(Decision::buy("distantshore"));
    }
    None
}

fn five_wishlist(game: &Game, counts: &Counts, coins: u32, gardens_plan: bool) -> Vec<&'static str> {
    let mut picks = Vec::new();
    if in_stock(game, "curse") && in_stock(game, "witch") {
        picks.push("witch");
    }

    if in_stock(game, "laboratory") && owned(counts, "laboratory") < MAX_LABS {
        picks.push("laboratory");
    }

    if terminal_capacity(counts) <= 0 {
        for card in ["market", "festival"] {
            if in_stock(game, card) {
                picks.push(card);
            }
        }
        if in_stock(game, "village") && coins >= BUY_4_COST_COINS {
            picks.push("village");
        }
    }

    if gardens_plan {
        // Extra buys feed the gardens deck; value them above raw power.
        for card in ["market", "festival", "laboratory"] {
            if in_stock(game, card) {
                picks.push(card);
            }
        }
    }

    for card in ["laboratory", "market", "festival"] {
        if in_stock(game, card) {
            picks.push(card);
        }
    }

    if in_stock(game, "silver") {
        picks.push("silver");
    }

    picks
}

pub fn five_cost_buy(
    game: &Game,
    coins: u32,
    counts: &Counts,
    gardens_plan: bool,
) -> Option<Decision> {
    if coins < BUY_5_COST_COINS {
        return None;
    }
    five_wishlist(game, counts, coins, gardens_plan)
        .first()
        .map(|card| Decision::buy(*card))
}

pub fn four_cost_buy(game: &Game, coins: u32, counts: &Counts) -> Option<Decision> {
    if coins < BUY_4_COST_COINS {
        return None;
    }
    for card in ["moneylender", "militia", "port", "poacher", "remodel", "remake"] {
        if in_stock(game, card) {
            return Some(Decision::buy(card));
        }
    }
    if terminal_capacity(counts) <= 0 && in_stock(game, "village") {
        return Some(Decision::buy("village"));
    }
    for card in ["smithy", "gardens", "silver"] {
        if in_stock(game, card) {
            return Some(Decision::buy(card));
        }
    }
    None
}

pub fn three_cost_buy(game: &Game, coins: u32) -> Option<Decision> {
    if coins < BUY_3_COST_COINS {
        return None;
    }
    for card in ["workshop", "village", "woodcutter", "silver"] {
        if in_stock(game, card) {
            return Some(Decision::buy(card));
        }
    }
    None
}

/// Final sweep over every engine card we know, cheapest acceptable
/// first by preference. Copper is never bought here.
pub fn last_resort_buy(game: &Game, coins: u32) -> Option<Decision> {
    const MENU: [&str; 10] = [
        "laboratory",
        "market",
        "festival",
        "smithy",
        "village",
        "workshop",
        "woodcutter",
        "silver",
        "cellar",
        "chapel",
    ];
    MENU.iter()
        .find(|card| coins >= cards::cost(card) && in_stock(game, card))
        .map(|card| Decision::buy(*card))
}

// ---- opening book (first few turns only) ----

fn opening_buy_5plus(game: &Game) -> Option<Decision> {
    if in_stock(game, "curse") && in_stock(game, "witch") {
        return Some(Decision::buy("witch"));
    }
    for card in ["laboratory", "market", "festival", "councilroom"] {
        if in_stock(game, card) {
            return Some(Decision::buy(card));
        }
    }
    None
}

fn opening_buy_4(game: &Game) -> Option<Decision> {
    for card in [
        "moneylender",
        "militia",
        "smithy",
        "remodel",
        "remake",
        "poacher",
        "port",
        "village",
        "silver",
    ] {
        if in_stock(game, card) {
            return Some(Decision::buy(card));
        }
    }
    None
}

fn opening_buy_3(game: &Game) -> Option<Decision> {
    for card in ["workshop", "village", "woodcutter", "silver"] {
        if in_stock(game, card) {
            return Some(Decision::buy(card));
        }
    }
    None
}

fn opening_buy_2(game: &Game, counts: &Counts) -> Option<Decision> {
    if owned(counts, "chapel") == 0 && in_stock(game, "chapel") {
        return Some(Decision::buy("chapel"));
    }
    for card in ["cellar", "estate"] {
        if in_stock(game, card) {
            return Some(Decision::buy(card));
        }
    }
    None
}

/// Fixed price-point book for the first turns, before any deck signal
/// exists to steer the later heuristics.
pub fn opening_buys(game: &Game, coins: u32, counts: &Counts, turn: u32) -> Option<Decision> {
    if turn > OPENING_TURN_LIMIT {
        return None;
    }
    if coins >= BUY_5_COST_COINS {
        if let Some(pick) = opening_buy_5plus(game) {
            return Some(pick);
        }
    }
    if coins == BUY_4_COST_COINS {
        if let Some(pick) = opening_buy_4(game) {
            return Some(pick);
        }
    }
    if coins == BUY_3_COST_COINS {
        if let Some(pick) = opening_buy_3(game) {
            return Some(pick);
        }
    }
    if coins == BUY_2_COST_COINS {
        return opening_buy_2(game, counts);
    }
    None
}
