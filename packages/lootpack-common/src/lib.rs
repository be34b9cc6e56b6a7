pub mod msgs;
pub mod randomness;

pub use msgs::{
    ConsumerExecuteMsg, CoordinatorExecuteMsg, FeedQueryMsg, ItemExecuteMsg, RoundDataResponse,
    TokenBalanceResponse, TokenExecuteMsg, TokenQueryMsg, XpExecuteMsg,
};
pub use randomness::{compute_request_id, derive_words, REQUEST_ID_DOMAIN};
