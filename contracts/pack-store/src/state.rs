use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Denominator of every pack's cumulative weight table.
pub const TOTAL_WEIGHT: u32 = 100;
/// Maximum units per purchase call.
pub const MAX_UNITS: u32 = 10;

pub const CONFIG: Item<Config> = Item::new("config");
pub const PACKS: Map<&str, PackDefinition> = Map::new("packs");
pub const CURRENCIES: Map<&str, Currency> = Map::new("currencies");
/// Purchase records keyed by randomness request id. Closed records are kept.
pub const PURCHASES: Map<&str, Purchase> = Map::new("purchases");
/// (buyer, purchase_id) -> request id
pub const BUYER_PURCHASES: Map<(&Addr, u64), String> = Map::new("buyer_purchases");
pub const STATS: Item<Stats> = Item::new("stats");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Token factory denom minted for `Loot` rewards
    pub reward_denom: String,
    pub xp_module: Addr,
    /// Records `Nft` rewards as items in its own storage
    pub item_module: Addr,
    /// Feed answers older than this are rejected
    pub max_price_age_seconds: u64,
    pub randomness: RandomnessConfig,
}

#[cw_serde]
pub struct RandomnessConfig {
    pub coordinator: Addr,
    pub key_hash: String,
    pub subscription_id: u64,
}

#[cw_serde]
#[derive(Copy)]
pub enum RewardType {
    Xp,
    Loot,
    Nft,
}

impl RewardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardType::Xp => "xp",
            RewardType::Loot => "loot",
            RewardType::Nft => "nft",
        }
    }
}

#[cw_serde]
pub struct RewardTier {
    pub reward_type: RewardType,
    pub value: Uint128,
    /// Exclusive upper bound of this tier in `0..TOTAL_WEIGHT`
    pub cumulative_weight: u32,
}

#[cw_serde]
pub struct PackDefinition {
    pub name: String,
    /// List price in USD micro-units (6 decimals)
    pub price_usd: Uint128,
    pub tiers: Vec<RewardTier>,
}

#[cw_serde]
pub enum PaymentRail {
    /// Push payment: coins attached to the purchase call
    Native { denom: String },
    /// Pull payment: cw20-style `TransferFrom` against a prior allowance
    Token { contract: Addr },
}

impl PaymentRail {
    pub fn label(&self) -> String {
        match self {
            PaymentRail::Native { denom } => format!("native:{}", denom),
            PaymentRail::Token { contract } => format!("token:{}", contract),
        }
    }
}

#[cw_serde]
pub enum Pricing {
    UsdPegged,
    Feed { address: Addr },
}

impl Pricing {
    pub fn label(&self) -> String {
        match self {
            Pricing::UsdPegged => "usd_pegged".to_string(),
            Pricing::Feed { address } => address.to_string(),
        }
    }
}

#[cw_serde]
pub struct Currency {
    pub symbol: String,
    pub rail: PaymentRail,
    pub decimals: u8,
    pub pricing: Pricing,
    /// Paying in the contract's own reward denom earns the currency discount
    pub reward_currency: bool,
}

#[cw_serde]
pub enum PurchaseStatus {
    Pending,
    Fulfilled,
    Failed,
}

#[cw_serde]
pub struct Purchase {
    pub id: u64,
    pub request_id: String,
    pub buyer: Addr,
    /// Coordinator the request was sent to; only it may deliver the words
    pub coordinator: Addr,
    /// Snapshot taken at purchase time; later catalog edits do not apply
    pub pack: PackDefinition,
    pub unit_count: u32,
    pub num_words: u32,
    pub currency: String,
    pub amount_paid: Uint128,
    pub usd_charged: Uint128,
    pub discount_bps: u32,
    pub status: PurchaseStatus,
    pub created_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub failure: Option<String>,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub next_purchase_id: u64,
    pub next_nonce: u64,
    pub purchases: u64,
    pub units_sold: u64,
    pub open_requests: u64,
    pub fulfilled: u64,
    pub failed: u64,
}
