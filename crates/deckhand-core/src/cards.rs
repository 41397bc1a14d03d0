//! Static card metadata: costs, play bonuses, and the priority table.
//!
//! The game server is authoritative for card effects; these tables only
//! describe what the heuristics need. Every lookup is total: a card name
//! we have never heard of costs nothing, grants nothing, and ranks at
//! priority zero.

/// Purchase cost in coins. Unknown cards cost 0 (and are never proposed).
pub fn cost(card: &str) -> u32 {
    match card {
        "province" => 8,
        "duchy" => 5,
        "estate" => 2,
        "gold" => 6,
        "silver" => 3,
        "copper" => 0,
        // core engine & economy
        "laboratory" => 5,
        "market" => 5,
        "festival" => 5,
        "village" => 3,
        "smithy" => 4,
        "woodcutter" => 3,
        "port" => 4,
        "poacher" => 4,
        "cellar" => 2,
        "farmingvillage" => 4,
        // alt-vp
        "gardens" => 4,
        // trashers / gainers / attacks
        "chapel" => 2,
        "moneylender" => 4,
        "remodel" => 4,
        "remake" => 4,
        "workshop" => 3,
        "feast" => 4,
        "mine" => 5,
        "witch" => 5,
        "militia" => 4,
        "bandit" => 5,
        "bureaucrat" => 4,
        // drawers / others
        "councilroom" => 5,
        "library" => 5,
        "adventurer" => 6,
        "magpie" => 4,
        "hireling" => 6,
        "distantshore" => 6,
        "marquis" => 6,
        _ => 0,
    }
}

/// Face coin value of a treasure card held in hand; 0 for anything else.
pub fn treasure_value(card: &str) -> u32 {
    match card {
        "copper" => 1,
        "silver" => 2,
        "gold" => 3,
        _ => 0,
    }
}

/// Extra actions granted by playing the card.
pub fn plus_actions(card: &str) -> u32 {
    match card {
        "village" => 2,
        "festival" => 2,
        "port" => 2,
        "farmingvillage" => 2,
        "market" => 1,
        "laboratory" => 1,
        "cellar" => 1,
        "distantshore" => 1,
        "magpie" => 1,
        "poacher" => 1,
        _ => 0,
    }
}

/// Coins banked for the buy phase by playing the card.
pub fn coin_bonus(card: &str) -> u32 {
    match card {
        "moneylender" => 3,
        "festival" => 2,
        "woodcutter" => 2,
        "chancellor" => 2,
        "farmingvillage" => 2,
        "market" => 1,
        "poacher" => 1,
        _ => 0,
    }
}

/// Extra buys granted by playing the card.
pub fn buy_bonus(card: &str) -> u32 {
    match card {
        "market" => 1,
        "woodcutter" => 1,
        "festival" => 1,
        "councilroom" => 1,
        _ => 0,
    }
}

/// Desirability when the server offers a free card. Higher is better;
/// unknown cards sit at 0.
pub fn priority(card: &str) -> u32 {
    match card {
        "province" => 100,
        "gold" => 80,
        "laboratory" => 70,
        "market" => 62,
        "festival" => 58,
        "smithy" => 55,
        "village" => 40,
        "duchy" => 35,
        "gardens" => 32,
        "silver" => 30,
        "estate" => 10,
        "copper" => 5,
        _ => 0,
    }
}

pub fn is_treasure(card: &str) -> bool {
    treasure_value(card) > 0
}

/// Plain victory cards and treasures never occupy an action slot.
pub fn is_unplayable(card: &str) -> bool {
    matches!(
        card,
        "copper" | "silver" | "gold" | "estate" | "duchy" | "province" | "gardens" | "curse"
    )
}

/// Dead weight worth trashing or discarding first.
pub fn is_junk(card: &str) -> bool {
    matches!(card, "estate" | "curse")
}

/// Weight a card contributes to the action-economy estimate: how many
/// action slots it restores when played.
pub fn engine_weight(card: &str) -> u32 {
    match card {
        "village" | "festival" => 2,
        "market" | "laboratory" => 1,
        _ => 0,
    }
}

/// Terminal draw cards tracked by the action-economy estimate.
pub fn is_counted_terminal(card: &str) -> bool {
    matches!(card, "smithy" | "woodcutter")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_cards_are_neutral() {
        assert_eq!(cost("platinum"), 0);
        assert_eq!(priority("platinum"), 0);
        assert_eq!(plus_actions("platinum"), 0);
        assert_eq!(coin_bonus("platinum"), 0);
        assert_eq!(buy_bonus("platinum"), 0);
        assert!(!is_treasure("platinum"));
    }

    #[test]
    fn treasure_tiers() {
        assert_eq!(treasure_value("copper"), 1);
        assert_eq!(treasure_value("silver"), 2);
        assert_eq!(treasure_value("gold"), 3);
        assert_eq!(treasure_value("estate"), 0);
    }

    #[test]
    fn market_is_action_neutral_with_payload() {
        assert_eq!(plus_actions("market"), 1);
        assert_eq!(coin_bonus("market"), 1);
        assert_eq!(buy_bonus("market"), 1);
    }

    #[test]
    fn farmingvillage_banks_coins_and_actions() {
        assert_eq!(plus_actions("farmingvillage"), 2);
        assert_eq!(coin_bonus("farmingvillage"), 2);
        assert_eq!(buy_bonus("farmingvillage"), 0);
    }

    #[test]
    fn victory_and_treasure_cards_are_unplayable() {
        assert!(is_unplayable("copper"));
        assert!(is_unplayable("province"));
        assert!(!is_unplayable("village"));
        assert!(!is_unplayable("chapel"));
    }

    #[test]
    fn engine_weights_match_granted_actions() {
        assert_eq!(engine_weight("village"), 2);
        assert_eq!(engine_weight("festival"), 2);
        assert_eq!(engine_weight("market"), 1);
        assert_eq!(engine_weight("laboratory"), 1);
        assert_eq!(engine_weight("smithy"), 0);
    }
}
