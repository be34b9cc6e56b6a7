use cosmwasm_std::{
    CheckedMultiplyRatioError, ConversionOverflowError, DivideByZeroError, OverflowError,
    StdError, Uint128,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    MultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("invalid pack amount {unit_count}: must be between 1 and {max}")]
    InvalidPackAmount { unit_count: u32, max: u32 },

    #[error("pack not found: {name}")]
    PackNotFound { name: String },

    #[error("pack name must not be empty")]
    InvalidPackName,

    #[error("malformed weights: {reason}")]
    MalformedWeights { reason: String },

    #[error("invalid price feed for {symbol}: {reason}")]
    InvalidPriceFeed { symbol: String, reason: String },

    #[error("insufficient funds: required {required}, sent {sent}")]
    InsufficientFunds { required: Uint128, sent: Uint128 },

    #[error("unexpected funds: {reason}")]
    UnexpectedFunds { reason: String },

    #[error("unknown currency: {symbol}")]
    UnknownCurrency { symbol: String },

    #[error("invalid currency: {reason}")]
    InvalidCurrency { reason: String },

    #[error("reward currency {symbol} cannot be replaced or removed")]
    RewardCurrencyLocked { symbol: String },

    #[error("unknown or closed randomness request: {request_id}")]
    UnknownRequest { request_id: String },

    #[error("request id already in use: {request_id}")]
    RequestIdInUse { request_id: String },

    #[error("randomness count mismatch: expected {expected}, got {got}")]
    RandomnessCountMismatch { expected: u32, got: u32 },

    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Uint128,
        available: Uint128,
    },

    #[error("nothing to withdraw for {symbol}")]
    NothingToWithdraw { symbol: String },

    #[error("unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}
