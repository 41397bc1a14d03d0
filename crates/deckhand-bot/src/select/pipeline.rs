//! The baseline buy pipeline: an ordered chain of independent steps,
//! short-circuiting on the first emitted decision.

use crate::decision::Decision;
use crate::select::steps;
use deckhand_core::consts::{BUY_4_COST_COINS, BUY_PROVINCE_COINS};
use deckhand_core::model::Game;
use deckhand_core::state::TurnState;
use deckhand_core::view::{in_stock, score_status};

/// Per-invocation inputs shared by the pipeline steps.
#[derive(Debug, Clone, Copy)]
pub struct BuyCtx {
    pub provinces_left: u32,
    pub score_gap: i32,
    pub turn: u32,
}

impl BuyCtx {
    pub fn from_snapshot(game: &Game, me: usize, state: &TurnState) -> Self {
        let (my_score, best_opp) = score_status(game, me);
        Self {
            provinces_left: game.stock.remaining("province"),
            score_gap: my_score - best_opp,
            turn: state.turn,
        }
    }
}

/// Baseline strategy: opening book, paced greening, VP pressure, the
/// gardens pivot, then economy and descending price points. Every step
/// declining means the turn is over.
pub fn choose_buy(game: &Game, coins: u32, me: usize, state: &TurnState) -> Decision {
    let counts = &state.counts;
    let ctx = BuyCtx::from_snapshot(game, me, state);
    let (my_score, best_opp) = score_status(game, me);
    let gardens_plan = state.gardens_plan.unwrap_or(false);

    let steps: [&dyn Fn() -> Option<Decision>; 13] = [
        &|| steps::opening_buys(game, coins, counts, ctx.turn),
        &|| {
            (coins >= BUY_PROVINCE_COINS
                && in_stock(game, "province")
                && steps::early_province_ok(counts, ctx.provinces_left, ctx.turn, ctx.score_gap))
            .then(|| Decision::buy("province"))
        },
        &|| {
            (coins >= BUY_PROVINCE_COINS
                && in_stock(game, "gold")
                && !steps::early_province_ok(counts, ctx.provinces_left, ctx.turn, ctx.score_gap))
            .then(|| Decision::buy("gold"))
        },
        &|| steps::endgame_buy(game, coins, ctx.provinces_left, ctx.turn),
        &|| steps::midgame_buy(game, coins, ctx.provinces_left, my_score, best_opp, ctx.turn),
        &|| {
            (gardens_plan && coins >= BUY_4_COST_COINS && in_stock(game, "gardens"))
                .then(|| Decision::buy("gardens"))
        },
        &|| {
            gardens_plan
                .then(|| steps::five_cost_buy(game, coins, counts, true))
                .flatten()
        },
        &|| steps::economy_buy(game, coins),
        &|| steps::six_cost_buy(game, coins, counts, ctx.turn),
        &|| steps::five_cost_buy(game, coins, counts, false),
        &|| steps::four_cost_buy(game, coins, counts),
        &|| steps::three_cost_buy(game, coins),
        &|| steps::last_resort_buy(game, coins),
    ];

    steps
        .iter()
        .find_map(|step| step())
        .unwrap_or(Decision::EndTurn)
}
