use crate::model::hand::Hand;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shared supply piles. A missing key means the pile is exhausted or
/// was never in the match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default)]
    pub quantities: BTreeMap<String, u32>,
}

impl Stock {
    pub fn remaining(&self, card: &str) -> u32 {
        self.quantities.get(card).copied().unwrap_or(0)
    }
}

/// One seat at the table. Only our own entry carries a hand; opponents'
/// hands are not visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub hand: Option<Hand>,
}

/// Immutable-per-request view of the match as the game server sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub stock: Stock,
    #[serde(default)]
    pub finished: bool,
}
