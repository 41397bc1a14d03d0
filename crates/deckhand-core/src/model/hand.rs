use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cards held by a player, collapsed to per-name counts. Order is
/// irrelevant on the wire; a BTreeMap keeps iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    #[serde(default)]
    quantities: BTreeMap<String, u32>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let quantities = counts
            .into_iter()
            .filter(|(_, n)| *n > 0)
            .map(|(card, n)| (card.into(), n))
            .collect();
        Self { quantities }
    }

    pub fn count(&self, card: &str) -> u32 {
        self.quantities.get(card).copied().unwrap_or(0)
    }

    pub fn contains(&self, card: &str) -> bool {
        self.count(card) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|&n| n == 0)
    }

    /// Iterate over `(card, count)` pairs with positive counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.quantities
            .iter()
            .filter(|&(_, &n)| n > 0)
            .map(|(card, &n)| (card.as_str(), n))
    }
}
