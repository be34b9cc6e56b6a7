//! Message shapes exchanged between the pack store and its collaborators.
//!
//! Each enum mirrors the relevant subset of the counterpart contract's own
//! `ExecuteMsg` / `QueryMsg`, so it serializes to the same JSON.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Timestamp, Uint128};

/// Sent by a consumer to the randomness coordinator.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomness {
        /// Must match the coordinator's drand chain hash.
        key_hash: String,
        subscription_id: u64,
        num_words: u32,
        /// Consumer-side nonce; the request id is derived from (consumer, nonce).
        nonce: u64,
    },
}

/// Callback delivered by the coordinator to the requesting consumer.
#[cw_serde]
pub enum ConsumerExecuteMsg {
    ReceiveRandomness {
        request_id: String,
        random_words: Vec<Uint128>,
    },
}

#[cw_serde]
pub enum FeedQueryMsg {
    LatestRoundData {},
}

#[cw_serde]
pub struct RoundDataResponse {
    pub round_id: u64,
    /// Price of one whole unit of the asset in USD, scaled by `10^decimals`.
    pub answer: Uint128,
    pub decimals: u8,
    pub updated_at: Timestamp,
}

/// cw20-compatible subset used for pull payments and treasury sweeps.
#[cw_serde]
pub enum TokenExecuteMsg {
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    Transfer {
        recipient: String,
        amount: Uint128,
    },
}

#[cw_serde]
pub enum TokenQueryMsg {
    Balance { address: String },
}

#[cw_serde]
pub struct TokenBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub enum XpExecuteMsg {
    AddXp { recipient: String, amount: Uint128 },
}

#[cw_serde]
pub enum ItemExecuteMsg {
    MintItem { recipient: String, kind: Uint128 },
}
