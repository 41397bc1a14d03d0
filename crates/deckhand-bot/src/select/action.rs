//! Action-phase card selection.
//!
//! One card per invocation: the server asks again until we answer with
//! nothing left to play. Category pickers run in a fixed order; the
//! first hit wins and its printed bonuses are banked on the turn state.

use deckhand_core::cards;
use deckhand_core::consts::MIN_COPPER_TRASH;
use deckhand_core::model::{Game, Hand};
use deckhand_core::state::TurnState;

/// Pick at most one action card to play, spending an action slot and
/// applying the card's bonuses to `state`. `None` means the action
/// phase is over.
pub fn choose_action(game: &Game, me: usize, state: &mut TurnState) -> Option<String> {
    if state.actions_left == 0 {
        return None;
    }

    let hand = game.players.get(me)?.hand.as_ref()?;
    let playable = hand
        .iter()
        .any(|(card, _)| cards::cost(card) > 0 && !cards::is_unplayable(card));
    if !playable {
        return None;
    }

    const PICKERS: [fn(&Hand, &mut TurnState) -> Option<String>; 5] = [
        pick_trashing,
        pick_nonterminal,
        pick_attack,
        pick_terminal_draw,
        pick_economy,
    ];
    PICKERS.iter().find_map(|picker| picker(hand, state))
}

fn play(card: &str, state: &mut TurnState) -> Option<String> {
    state.note_action_played(card);
    Some(card.to_string())
}

/// Deck cleanup first: only worth an action slot when junk is present.
fn pick_trashing(hand: &Hand, state: &mut TurnState) -> Option<String> {
    let has_junk = hand.contains("curse")
        || hand.contains("estate")
        || hand.count("copper") >= MIN_COPPER_TRASH;
    if hand.contains("chapel") && has_junk {
        return play("chapel", state);
    }
    if hand.contains("moneylender") && hand.contains("copper") {
        return play("moneylender", state);
    }
    if hand.contains("remake") {
        return play("remake", state);
    }
    if hand.contains("remodel") {
        return play("remodel", state);
    }
    None
}

/// Cards that replace the action they consume, in descending value.
fn pick_nonterminal(hand: &Hand, state: &mut TurnState) -> Option<String> {
    const ORDER: [&str; 10] = [
        "village",
        "market",
        "laboratory",
        "festival",
        "distantshore",
        "port",
        "cellar",
        "farmingvillage",
        "magpie",
        "poacher",
    ];
    ORDER
        .iter()
        .find(|card| hand.contains(card))
        .and_then(|card| play(card, state))
}

fn pick_attack(hand: &Hand, state: &mut TurnState) -> Option<String> {
    const ORDER: [&str; 4] = ["witch", "militia", "bandit", "bureaucrat"];
    ORDER
        .iter()
        .find(|card| hand.contains(card))
        .and_then(|card| play(card, state))
}

fn pick_terminal_draw(hand: &Hand, state: &mut TurnState) -> Option<String> {
    const ORDER: [&str; 4] = ["councilroom", "smithy", "library", "adventurer"];
    ORDER
        .iter()
        .find(|card| hand.contains(card))
        .and_then(|card| play(card, state))
}

/// Gainers and upgraders go last; they improve the deck, not the turn.
fn pick_economy(hand: &Hand, state: &mut TurnState) -> Option<String> {
    const ORDER: [&str; 3] = ["mine", "feast", "workshop"];
    ORDER
        .iter()
        .find(|card| hand.contains(card))
        .and_then(|card| play(card, state))
}
