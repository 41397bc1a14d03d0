#![deny(warnings)]
pub mod cards;
pub mod consts;
pub mod model;
pub mod state;
pub mod view;

pub struct AgentInfo;

impl AgentInfo {
    /// Name tag the game server prefixes onto our player entry.
    pub const fn name() -> &'static str {
        "Deckhand"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
