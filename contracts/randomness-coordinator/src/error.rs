use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("beacon for round {round} already exists")]
    BeaconAlreadyExists { round: u64 },

    #[error("BLS verification failed: {reason}")]
    VerificationFailed { reason: String },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },

    #[error("beacon not found for round {round}")]
    BeaconNotFound { round: u64 },

    #[error("invalid pubkey length: expected 96 bytes, got {got}")]
    InvalidPubkeyLength { got: usize },

    #[error("invalid period: must be greater than zero")]
    InvalidPeriod,

    #[error("subscription {subscription_id} not found")]
    SubscriptionNotFound { subscription_id: u64 },

    #[error("{consumer} is not a consumer of subscription {subscription_id}")]
    InvalidConsumer {
        consumer: String,
        subscription_id: u64,
    },

    #[error("unknown key hash {key_hash}")]
    InvalidKeyHash { key_hash: String },

    #[error("num_words {num_words} out of range (1..={max})")]
    InvalidNumWords { num_words: u32, max: u32 },

    #[error("request {request_id} already exists")]
    RequestAlreadyExists { request_id: String },

    #[error("request {request_id} not found")]
    RequestNotFound { request_id: String },

    #[error("request {request_id} already fulfilled")]
    RequestAlreadyFulfilled { request_id: String },
}
