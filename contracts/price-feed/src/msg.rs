use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use lootpack_common::RoundDataResponse;

use crate::state::FeedConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub operators: Vec<String>,
    pub decimals: u8,
    pub description: String,
    /// Optional first answer, recorded as round 1
    pub initial_answer: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Record a new price round. Operators only.
    SubmitPrice { answer: Uint128 },
    /// Update operator list (admin only).
    UpdateOperators {
        add: Vec<String>,
        remove: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(FeedConfig)]
    Config {},

    #[returns(RoundDataResponse)]
    LatestRoundData {},

    #[returns(RoundDataResponse)]
    RoundData { round_id: u64 },
}

#[cw_serde]
pub struct MigrateMsg {}
