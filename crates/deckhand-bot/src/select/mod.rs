mod action;
mod pipeline;
mod rank;
mod steps;

pub use action::choose_action;
pub use pipeline::{BuyCtx, choose_buy};
pub use rank::{best_of, treasure_to_upgrade, worst_in_hand};
pub use steps::{
    early_province_ok, economy_buy, endgame_buy, engine_ready, five_cost_buy, four_cost_buy,
    last_resort_buy, midgame_buy, opening_buys, six_cost_buy, three_cost_buy,
};
