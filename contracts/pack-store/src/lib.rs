pub mod admin;
pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod pricing;
pub mod query;
pub mod registry;
pub mod selector;
pub mod state;

pub use crate::error::ContractError;
