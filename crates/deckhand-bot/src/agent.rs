//! The agent facade: per-match state plus the turn orchestrator.
//!
//! One [`Agent`] serves every concurrent match; records are keyed by
//! match id and only the map lookup itself is synchronized. Requests
//! for a single match arrive sequentially per the match protocol.

use crate::decision::Decision;
use crate::guard;
use crate::select;
use crate::strategy;
use deckhand_core::consts::{
    BUY_GOLD_COINS, BUY_PROVINCE_COINS, BUY_SILVER_COINS, GARDENS_PIVOT_DEFICIT,
    GARDENS_PIVOT_MIN_PROVINCES,
};
use deckhand_core::model::{Game, Hand};
use deckhand_core::state::{Phase, TurnState};
use deckhand_core::view::{find_seat, in_stock, score_status, treasure_coins};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{Level, event};

/// Per-match configuration delivered at match start.
#[derive(Debug, Clone, Default)]
pub struct MatchConfig {
    pub strategy: Option<String>,
}

/// Map of live match records. The map mutex covers only the lookup;
/// each record carries its own lock, so matches never serialize each
/// other's decision computation.
#[derive(Debug, Default)]
pub struct StateStore {
    records: Mutex<HashMap<String, Arc<Mutex<TurnState>>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the record for `match_id`, creating a fresh
    /// baseline record on first touch.
    pub fn with<R>(&self, match_id: &str, f: impl FnOnce(&mut TurnState) -> R) -> R {
        let record = {
            let mut records = self.records.lock();
            Arc::clone(records.entry(match_id.to_string()).or_insert_with(|| {
                Arc::new(Mutex::new(TurnState::new(strategy::DEFAULT_STRATEGY)))
            }))
        };
        let mut state = record.lock();
        f(&mut state)
    }

    pub fn insert(&self, match_id: &str, state: TurnState) {
        self.records
            .lock()
            .insert(match_id.to_string(), Arc::new(Mutex::new(state)));
    }

    pub fn remove(&self, match_id: &str) -> Option<TurnState> {
        self.records.lock().remove(match_id).map(|record| {
            Arc::try_unwrap(record)
                .map(Mutex::into_inner)
                .unwrap_or_else(|shared| shared.lock().clone())
        })
    }

    /// Clone of the current record, if any. Intended for harnesses and
    /// tests; the live path goes through [`StateStore::with`].
    pub fn snapshot(&self, match_id: &str) -> Option<TurnState> {
        let record = self.records.lock().get(match_id).cloned();
        record.map(|record| record.lock().clone())
    }
}

/// The decision engine's external surface. Each operation corresponds
/// to one inbound protocol signal.
#[derive(Debug, Default)]
pub struct Agent {
    store: StateStore,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Bind the configured strategy and open a fresh record. Unknown
    /// strategy keys silently fall back to the baseline.
    pub fn on_match_start(&self, match_id: &str, config: &MatchConfig) {
        let key = strategy::normalize(config.strategy.as_deref().unwrap_or_default());
        self.store.insert(match_id, TurnState::new(key));
        if tracing::enabled!(Level::INFO) {
            event!(
                target: "deckhand_bot::agent",
                Level::INFO,
                match_id,
                strategy = key,
                "match started"
            );
        }
    }

    pub fn on_turn_start(&self, match_id: &str) {
        self.store.with(match_id, |state| state.begin_turn());
    }

    /// Run the turn orchestrator once against a fresh snapshot.
    pub fn on_decision_request(&self, match_id: &str, game: &Game) -> Decision {
        if game.finished {
            return Decision::EndTurn;
        }
        let Some(me) = find_seat(game) else {
            return Decision::EndTurn;
        };

        self.store.with(match_id, |state| {
            if state.gardens_plan.is_none() {
                state.gardens_plan = Some(should_pivot_to_gardens(game, me));
            }

            if state.phase == Phase::Action {
                if let Some(card) = select::choose_action(game, me, state) {
                    let decision = Decision::action(card);
                    log_decision(match_id, me, state, &decision);
                    return decision;
                }
            }

            state.enter_buy_phase(treasure_coins(game, me));

            let coins = state.coins_left;
            let affordable_any = (coins >= BUY_PROVINCE_COINS && in_stock(game, "province"))
                || (coins >= BUY_GOLD_COINS && in_stock(game, "gold"))
                || coins >= BUY_SILVER_COINS;
            if state.buys_left == 0 || !affordable_any {
                let decision = Decision::EndTurn;
                log_decision(match_id, me, state, &decision);
                return decision;
            }

            let buy = strategy::resolve(&state.strategy);
            let decision = guard::enforce(game, buy(game, coins, me, state), state);
            if let Some(card) = decision.bought_card() {
                state.note_purchase(card);
            }
            log_decision(match_id, me, state, &decision);
            decision
        })
    }

    pub fn on_forced_discard(&self, _match_id: &str, hand: &Hand) -> String {
        select::worst_in_hand(hand)
    }

    pub fn on_forced_trash(&self, _match_id: &str, hand: &Hand) -> String {
        select::worst_in_hand(hand)
    }

    pub fn on_card_reception_choice(&self, _match_id: &str, candidates: &[String]) -> String {
        select::best_of(candidates)
            .map(str::to_string)
            .unwrap_or_else(|| "copper".to_string())
    }

    pub fn on_treasure_upgrade_choice(&self, _match_id: &str, money_cards: &[String]) -> String {
        select::treasure_to_upgrade(money_cards)
    }

    pub fn on_match_end(&self, match_id: &str) {
        self.store.remove(match_id);
        if tracing::enabled!(Level::INFO) {
            event!(target: "deckhand_bot::agent", Level::INFO, match_id, "match ended");
        }
    }
}

/// Commit to the alternate-VP plan only while the commitment can still
/// pay off: gardens and a deep province pile in stock, a serious score
/// deficit, and a +buy card available to fuel wide turns.
fn should_pivot_to_gardens(game: &Game, me: usize) -> bool {
    if !in_stock(game, "gardens") {
        return false;
    }
    if game.stock.remaining("province") < GARDENS_PIVOT_MIN_PROVINCES {
        return false;
    }
    let (my_score, best_opp) = score_status(game, me);
    let buys_exist = in_stock(game, "market") || in_stock(game, "festival");
    my_score - best_opp <= -GARDENS_PIVOT_DEFICIT && buys_exist
}

fn log_decision(match_id: &str, me: usize, state: &TurnState, decision: &Decision) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    event!(
        target: "deckhand_bot::agent",
        Level::INFO,
        match_id,
        seat = me,
        phase = ?state.phase,
        turn = state.turn,
        actions_left = state.actions_left,
        coins_left = state.coins_left,
        buys_left = state.buys_left,
        gardens_plan = ?state.gardens_plan,
        decision = %decision
    );
}
