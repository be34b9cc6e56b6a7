use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<FeedConfig> = Item::new("config");
pub const ROUNDS: Map<u64, PriceRound> = Map::new("rounds");
pub const LATEST_ROUND_ID: Item<u64> = Item::new("latest_round_id");

#[cw_serde]
pub struct FeedConfig {
    pub admin: Addr,
    pub operators: Vec<Addr>,
    /// Number of decimals in `answer`
    pub decimals: u8,
    /// Human readable pair, e.g. "LOOT / USD"
    pub description: String,
}

#[cw_serde]
pub struct PriceRound {
    pub round_id: u64,
    pub answer: Uint128,
    pub updated_at: Timestamp,
    pub submitted_by: Addr,
}
