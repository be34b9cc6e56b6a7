use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{CoordinatorConfig, RandomnessRequest, StoredBeacon, Subscription};

#[cw_serde]
pub struct InstantiateMsg {
    pub operators: Vec<String>,
    /// Hex-encoded quicknet public key (96 bytes = 192 hex chars)
    pub quicknet_pubkey_hex: String,
    pub chain_hash: String,
    pub genesis_time: u64,
    pub period_seconds: u64,
    /// Defaults to 10 when omitted
    pub max_words: Option<u32>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Submit a drand beacon for verification and storage.
    SubmitBeacon {
        round: u64,
        /// Hex-encoded BLS signature (48 bytes = 96 hex chars)
        signature_hex: String,
    },
    /// Update operator list (admin only).
    UpdateOperators {
        add: Vec<String>,
        remove: Vec<String>,
    },
    /// Open a new subscription owned by the sender.
    CreateSubscription {},
    /// Allow a contract to request randomness under a subscription. Owner only.
    AddConsumer {
        subscription_id: u64,
        consumer: String,
    },
    /// Revoke a consumer. Owner only.
    RemoveConsumer {
        subscription_id: u64,
        consumer: String,
    },
    /// Request `num_words` random words. Registered consumers only.
    RequestRandomness {
        key_hash: String,
        subscription_id: u64,
        num_words: u32,
        nonce: u64,
    },
    /// Deliver the words for a request whose target beacon is available. Anyone can call.
    FulfillRandomness { request_id: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CoordinatorConfig)]
    Config {},

    #[returns(Option<StoredBeacon>)]
    Beacon { round: u64 },

    #[returns(u64)]
    LatestRound {},

    #[returns(Subscription)]
    Subscription { subscription_id: u64 },

    #[returns(Option<RandomnessRequest>)]
    Request { request_id: String },
}

#[cw_serde]
pub struct MigrateMsg {}
