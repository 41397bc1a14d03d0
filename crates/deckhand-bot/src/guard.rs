//! Last line of defense between the buy pipelines and the wire.
//!
//! Independent pipeline steps can, under supply combinations no single
//! step anticipated, propose a purchase the match will not accept. The
//! guard re-validates every `BUY` and degrades invalid ones through a
//! fixed fallback ladder, so the emitted decision is always legal.

use crate::decision::Decision;
use deckhand_core::cards;
use deckhand_core::model::Game;
use deckhand_core::state::TurnState;
use deckhand_core::view::in_stock;
use tracing::{Level, event};

/// Affordable engine pieces tried, in order, when the proposed buy and
/// the treasure ladder are all unavailable.
const ENGINE_MENU: [&str; 7] = [
    "laboratory",
    "market",
    "festival",
    "village",
    "smithy",
    "workshop",
    "woodcutter",
];

/// Re-validate a proposed decision against the live budget and supply.
///
/// Non-buy decisions pass through untouched. An invalid buy degrades to
/// province, then gold, then silver, then the first affordable entry of
/// [`ENGINE_MENU`], then copper filler (only while the gardens pivot is
/// active with a spare buy), then `END_TURN`.
pub fn enforce(game: &Game, decision: Decision, state: &TurnState) -> Decision {
    let Some(card) = decision.bought_card() else {
        return decision;
    };

    if buyable(game, card, state) {
        return decision;
    }

    let fallback = fallback_buy(game, state);
    if tracing::enabled!(Level::WARN) {
        event!(
            target: "deckhand_bot::buy",
            Level::WARN,
            proposed = card,
            coins_left = state.coins_left,
            buys_left = state.buys_left,
            fallback = %fallback,
            "illegal buy proposal rewritten"
        );
    }
    fallback
}

fn buyable(game: &Game, card: &str, state: &TurnState) -> bool {
    state.buys_left > 0 && state.coins_left >= cards::cost(card) && in_stock(game, card)
}

fn fallback_buy(game: &Game, state: &TurnState) -> Decision {
    if state.buys_left == 0 {
        return Decision::EndTurn;
    }

    for card in ["province", "gold", "silver"] {
        if buyable(game, card, state) {
            return Decision::buy(card);
        }
    }
    for card in ENGINE_MENU {
        if buyable(game, card, state) {
            return Decision::buy(card);
        }
    }
    // Copper is deck poison except under the gardens plan, where any
    // extra card is a point and spare buys would otherwise go unused.
    if state.gardens_plan == Some(true) && state.buys_left > 1 && buyable(game, "copper", state) {
        return Decision::buy("copper");
    }
    Decision::EndTurn
}
