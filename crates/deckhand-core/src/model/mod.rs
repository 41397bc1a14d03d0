pub mod hand;
pub mod snapshot;

pub use hand::Hand;
pub use snapshot::{Game, Player, Stock};
