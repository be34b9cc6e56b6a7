use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("item kind must be greater than zero")]
    ZeroKind,

    #[error("item not found: {item_id}")]
    ItemNotFound { item_id: u64 },
}
