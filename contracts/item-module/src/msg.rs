use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::{ItemConfig, ItemRecord};

#[cw_serde]
pub struct InstantiateMsg {
    pub minters: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint one item of `kind` to `recipient`. Minters only.
    MintItem { recipient: String, kind: Uint128 },
    /// Hand an owned item to someone else. Current owner only.
    TransferItem { item_id: u64, recipient: String },
    /// Update minter list. Admin only.
    UpdateMinters {
        add: Vec<String>,
        remove: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ItemConfig)]
    Config {},

    #[returns(ItemRecord)]
    Item { item_id: u64 },

    #[returns(ItemsResponse)]
    ItemsByOwner {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(u64)]
    TotalItems {},
}

#[cw_serde]
pub struct ItemsResponse {
    pub items: Vec<ItemRecord>,
}

#[cw_serde]
pub struct MigrateMsg {}
