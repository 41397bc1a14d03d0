#![deny(warnings)]
pub mod agent;
pub mod decision;
pub mod guard;
pub mod select;
pub mod strategy;

pub use agent::{Agent, MatchConfig, StateStore};
pub use decision::Decision;
pub use select::{choose_action, choose_buy};
pub use strategy::{BuyFn, DEFAULT_STRATEGY, resolve};
