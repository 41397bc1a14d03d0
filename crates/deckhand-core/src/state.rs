//! Mutable per-match turn state, one record per live match id.

use crate::cards;
use std::collections::BTreeMap;

/// Sub-stage of the current turn. There is no END_TURN state: the next
/// turn-start signal simply resets the record to Action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Action,
    Buy,
}

/// Everything the engine remembers about one match between requests.
///
/// Per-turn fields reset at every turn-start; `counts`, `turn`,
/// `strategy`, and `gardens_plan` live for the whole match.
#[derive(Debug, Clone)]
pub struct TurnState {
    pub phase: Phase,
    pub actions_left: u32,
    /// Coins banked by action cards this turn, spent at buy-phase entry.
    pub action_coins: u32,
    pub extra_buys: u32,
    pub coins_left: u32,
    pub buys_left: u32,
    pub bought: bool,
    /// Set once per turn when coins/buys are first computed at buy entry.
    pub resources_ready: bool,
    /// Cumulative copies bought over the match; never decremented.
    pub counts: BTreeMap<String, u32>,
    pub turn: u32,
    /// Registry key bound at match start; immutable afterwards.
    pub strategy: String,
    /// Alt-VP commitment, decided once on the first decision request.
    pub gardens_plan: Option<bool>,
}

impl TurnState {
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            phase: Phase::Action,
            actions_left: 1,
            action_coins: 0,
            extra_buys: 0,
            coins_left: 0,
            buys_left: 1,
            bought: false,
            resources_ready: false,
            counts: BTreeMap::new(),
            turn: 0,
            strategy: strategy.into(),
            gardens_plan: None,
        }
    }

    /// Reset per-turn counters at a turn-start signal.
    pub fn begin_turn(&mut self) {
        self.phase = Phase::Action;
        self.actions_left = 1;
        self.action_coins = 0;
        self.extra_buys = 0;
        self.coins_left = 0;
        self.buys_left = 1;
        self.bought = false;
        self.resources_ready = false;
        self.turn += 1;
    }

    /// Record that an action card was played, spending one action slot
    /// and banking the card's printed bonuses.
    pub fn note_action_played(&mut self, card: &str) {
        self.actions_left = self.actions_left.saturating_sub(1) + cards::plus_actions(card);
        self.action_coins += cards::coin_bonus(card);
        self.extra_buys += cards::buy_bonus(card);
    }

    /// Transition into the buy phase, computing the coin/buy budget on
    /// the first entry of the turn. Later calls keep the running totals.
    pub fn enter_buy_phase(&mut self, treasure_coins: u32) {
        self.phase = Phase::Buy;
        if !self.resources_ready {
            self.coins_left = treasure_coins + self.action_coins;
            self.buys_left = 1 + self.extra_buys;
            self.resources_ready = true;
        }
    }

    /// Account for a guard-approved purchase.
    pub fn note_purchase(&mut self, card: &str) {
        self.coins_left = self.coins_left.saturating_sub(cards::cost(card));
        self.buys_left = self.buys_left.saturating_sub(1);
        self.bought = true;
        *self.counts.entry(card.to_string()).or_insert(0) += 1;
    }

    pub fn owned(&self, card: &str) -> u32 {
        self.counts.get(card).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, TurnState};

    #[test]
    fn begin_turn_resets_counters_and_advances_turn() {
        let mut state = TurnState::new("baseline");
        state.note_purchase("silver");
        state.phase = Phase::Buy;
        state.action_coins = 2;

        state.begin_turn();
        assert_eq!(state.turn, 1);
        assert_eq!(state.phase, Phase::Action);
        assert_eq!(state.actions_left, 1);
        assert_eq!(state.action_coins, 0);
        assert_eq!(state.buys_left, 1);
        assert!(!state.bought);
        assert!(!state.resources_ready);
        // Ownership survives the turn boundary.
        assert_eq!(state.owned("silver"), 1);

        state.begin_turn();
        assert_eq!(state.turn, 2);
    }

    #[test]
    fn action_play_applies_bonus_tables() {
        let mut state = TurnState::new("baseline");
        state.begin_turn();

        state.note_action_played("market");
        assert_eq!(state.actions_left, 1);
        assert_eq!(state.action_coins, 1);
        assert_eq!(state.extra_buys, 1);

        state.note_action_played("smithy");
        assert_eq!(state.actions_left, 0);
    }

    #[test]
    fn buy_budget_initializes_once_per_turn() {
        let mut state = TurnState::new("baseline");
        state.begin_turn();
        state.action_coins = 2;
        state.extra_buys = 1;

        state.enter_buy_phase(4);
        assert_eq!(state.coins_left, 6);
        assert_eq!(state.buys_left, 2);

        state.note_purchase("duchy");
        assert_eq!(state.coins_left, 1);
        assert_eq!(state.buys_left, 1);
        assert!(state.bought);

        // Re-entering the phase within the same turn keeps the budget.
        state.enter_buy_phase(4);
        assert_eq!(state.coins_left, 1);
        assert_eq!(state.buys_left, 1);
    }

    #[test]
    fn counts_are_monotone() {
        let mut state = TurnState::new("baseline");
        state.begin_turn();
        state.enter_buy_phase(8);
        state.note_purchase("province");
        state.begin_turn();
        state.enter_buy_phase(8);
        state.note_purchase("province");
        assert_eq!(state.owned("province"), 2);
    }
}
