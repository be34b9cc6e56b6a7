use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<XpConfig> = Item::new("config");
pub const XP_BALANCES: Map<&Addr, Uint128> = Map::new("xp");
pub const TOTAL_XP: Item<Uint128> = Item::new("total_xp");

#[cw_serde]
pub struct XpConfig {
    pub admin: Addr,
    /// Contracts allowed to credit XP (the pack store)
    pub minters: Vec<Addr>,
}
