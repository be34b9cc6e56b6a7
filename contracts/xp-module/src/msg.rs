use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::XpConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub minters: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Credit XP to an account. Minters only.
    AddXp { recipient: String, amount: Uint128 },
    /// Update minter list. Admin only.
    UpdateMinters {
        add: Vec<String>,
        remove: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(XpConfig)]
    Config {},

    #[returns(XpResponse)]
    Xp { address: String },

    #[returns(Uint128)]
    TotalXp {},
}

#[cw_serde]
pub struct XpResponse {
    pub address: String,
    pub xp: Uint128,
}

#[cw_serde]
pub struct MigrateMsg {}
