//! Tuning thresholds for the buy heuristics.
//!
//! These are deliberately named rather than inlined: the qualitative
//! gates (permit greening early, force it late, pivot when behind) are
//! the contract, the exact numbers are tuning.

// Price points the pipeline gates on.
pub const BUY_PROVINCE_COINS: u32 = 8;
pub const BUY_GOLD_COINS: u32 = 6;
pub const BUY_5_COST_COINS: u32 = 5;
pub const BUY_4_COST_COINS: u32 = 4;
pub const BUY_SILVER_COINS: u32 = 3;
pub const BUY_3_COST_COINS: u32 = 3;
pub const BUY_2_COST_COINS: u32 = 2;

// Supply-level pressure thresholds.
pub const ENDGAME_PROVINCE_THRESHOLD: u32 = 2;
pub const MIDGAME_PROVINCE_THRESHOLD: u32 = 4;
pub const EARLY_PROVINCE_STOCK: u32 = 6;

// Turn windows.
pub const OPENING_TURN_LIMIT: u32 = 3;
pub const MIN_GREEN_TURN: u32 = 14;
pub const RUSH_TURN: u32 = 145;
pub const PROVINCE_SOFT_CAP_BEFORE_TURN: u32 = 20;
pub const PROVINCES_ALLOWED_BEFORE_CAP: u32 = 2;
pub const EARLY_HIRELING_TURN: u32 = 10;

// Score-gap triggers.
pub const BEHIND_DUCHY_DEFICIT: i32 = 6;
pub const GARDENS_PIVOT_DEFICIT: i32 = BEHIND_DUCHY_DEFICIT + 4;

// Deck-composition readiness thresholds and copy caps.
pub const ENGINE_GOLD_THRESHOLD: u32 = 2;
pub const ENGINE_LAB_THRESHOLD: u32 = 2;
pub const ENGINE_MF_SUM_THRESHOLD: u32 = 2;
pub const MIN_COPPER_TRASH: u32 = 2;
pub const MAX_LABS: u32 = 3;
pub const MAX_SMITHIES: u32 = 2;

// Alt-VP pivot preconditions.
pub const GARDENS_PIVOT_MIN_PROVINCES: u32 = 10;
