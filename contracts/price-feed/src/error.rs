use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("price answer must be greater than zero")]
    ZeroAnswer,

    #[error("invalid decimals {decimals} (max 36)")]
    InvalidDecimals { decimals: u8 },
}
