use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<CoordinatorConfig> = Item::new("config");
pub const BEACONS: Map<u64, StoredBeacon> = Map::new("beacons");
pub const LATEST_ROUND: Item<u64> = Item::new("latest_round");
pub const SUBSCRIPTIONS: Map<u64, Subscription> = Map::new("subscriptions");
pub const NEXT_SUBSCRIPTION_ID: Item<u64> = Item::new("next_sub_id");
pub const REQUESTS: Map<&str, RandomnessRequest> = Map::new("requests");

#[cw_serde]
pub struct CoordinatorConfig {
    pub admin: Addr,
    pub operators: Vec<Addr>,
    /// Quicknet public key, 96 bytes (G2 point)
    pub quicknet_pubkey: Vec<u8>,
    /// Chain hash identifying the drand network. Consumers quote it as `key_hash`.
    pub chain_hash: String,
    /// Genesis time of the drand network (unix seconds)
    pub genesis_time: u64,
    /// Period between rounds in seconds (3 for quicknet)
    pub period_seconds: u64,
    /// Upper bound on words per request
    pub max_words: u32,
}

#[cw_serde]
pub struct StoredBeacon {
    pub round: u64,
    /// sha256(signature), 32 bytes
    pub randomness: Vec<u8>,
    /// BLS signature on G1, 48 bytes
    pub signature: Vec<u8>,
    pub verified: bool,
    pub submitted_at: Timestamp,
    pub submitted_by: Addr,
}

#[cw_serde]
pub struct Subscription {
    pub id: u64,
    pub owner: Addr,
    pub consumers: Vec<Addr>,
}

#[cw_serde]
pub enum RequestStatus {
    Pending,
    Fulfilled,
}

#[cw_serde]
pub struct RandomnessRequest {
    pub request_id: String,
    pub consumer: Addr,
    pub subscription_id: u64,
    pub num_words: u32,
    pub nonce: u64,
    /// First drand round published strictly after the request was made
    pub target_round: u64,
    pub status: RequestStatus,
    pub created_at: Timestamp,
    pub fulfilled_at: Option<Timestamp>,
}
