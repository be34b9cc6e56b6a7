use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<ItemConfig> = Item::new("config");
pub const ITEMS: Map<u64, ItemRecord> = Map::new("items");
/// (owner, item_id) index for per-owner listing
pub const OWNED_ITEMS: Map<(&Addr, u64), Empty> = Map::new("owned_items");
pub const NEXT_ITEM_ID: Item<u64> = Item::new("next_item_id");

#[cw_serde]
pub struct ItemConfig {
    pub admin: Addr,
    /// Contracts allowed to mint items (the pack store)
    pub minters: Vec<Addr>,
}

/// One non-fungible item. Ids are never reused.
#[cw_serde]
pub struct ItemRecord {
    pub id: u64,
    /// Catalog value the item was drawn with
    pub kind: Uint128,
    pub owner: Addr,
    pub minted_at: Timestamp,
}
