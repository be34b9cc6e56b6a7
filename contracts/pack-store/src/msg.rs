use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::{Config, Currency, PackDefinition, Purchase, RewardType, Stats};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender
    pub admin: Option<String>,
    pub xp_module: String,
    pub item_module: String,
    /// Subdenom of the reward token created through the token factory
    pub reward_subdenom: String,
    pub reward_currency: RewardCurrencyMsg,
    pub max_price_age_seconds: u64,
    pub randomness: RandomnessMsg,
}

/// Settlement entry for the contract's own reward denom.
#[cw_serde]
pub struct RewardCurrencyMsg {
    pub symbol: String,
    pub decimals: u8,
    /// USD-pegged when absent
    pub feed: Option<String>,
}

#[cw_serde]
pub struct RandomnessMsg {
    pub coordinator: String,
    pub key_hash: String,
    pub subscription_id: u64,
}

#[cw_serde]
pub enum PaymentRailMsg {
    Native { denom: String },
    Token { contract: String },
}

#[cw_serde]
pub struct CurrencyMsg {
    pub symbol: String,
    pub rail: PaymentRailMsg,
    pub decimals: u8,
    /// USD-pegged when absent
    pub feed: Option<String>,
}

/// One resolved draw, carried only inside the `GrantRewards` self-call.
#[cw_serde]
pub struct RewardOutcome {
    pub reward_type: RewardType,
    pub value: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy `unit_count` packs. Native rails expect the payment attached.
    Purchase {
        pack_name: String,
        unit_count: u32,
        currency: String,
    },
    /// Randomness callback. Coordinator only.
    ReceiveRandomness {
        request_id: String,
        random_words: Vec<Uint128>,
    },
    /// Dispatch reward sinks for a fulfilled purchase. Contract itself only.
    GrantRewards {
        request_id: String,
        recipient: String,
        outcomes: Vec<RewardOutcome>,
    },
    /// Create or replace a pack. Admin only.
    UpsertPack {
        name: String,
        price_usd: Uint128,
        weights: Vec<u32>,
        reward_types: Vec<RewardType>,
        values: Vec<Uint128>,
    },
    /// Admin only.
    RemovePack { name: String },
    /// Add or replace a settlement currency. Admin only.
    SetCurrency { currency: CurrencyMsg },
    /// Admin only.
    RemoveCurrency { symbol: String },
    /// Point a currency at a new feed, or peg it to USD with `None`. Admin only.
    UpdatePriceFeed { symbol: String, feed: Option<String> },
    /// Rotate randomness provider parameters. Admin only. Open purchases
    /// keep the coordinator they were requested from.
    UpdateRandomness {
        coordinator: Option<String>,
        key_hash: Option<String>,
        subscription_id: Option<u64>,
    },
    /// Admin only.
    UpdateConfig {
        admin: Option<String>,
        xp_module: Option<String>,
        item_module: Option<String>,
        max_price_age_seconds: Option<u64>,
    },
    /// Sweep a currency's balance (all of it when `amount` is absent). Admin only.
    Withdraw {
        symbol: String,
        recipient: String,
        amount: Option<Uint128>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(PackDefinition)]
    Pack { name: String },

    #[returns(PacksResponse)]
    Packs {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(Currency)]
    Currency { symbol: String },

    #[returns(CurrenciesResponse)]
    Currencies {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(QuoteResponse)]
    Quote {
        pack_name: String,
        unit_count: u32,
        currency: String,
    },

    #[returns(Purchase)]
    Purchase { request_id: String },

    #[returns(PurchasesResponse)]
    PurchasesByBuyer {
        buyer: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(Stats)]
    Stats {},
}

#[cw_serde]
pub struct PacksResponse {
    pub packs: Vec<PackDefinition>,
}

#[cw_serde]
pub struct CurrenciesResponse {
    pub currencies: Vec<Currency>,
}

#[cw_serde]
pub struct QuoteResponse {
    pub pack_name: String,
    pub currency: String,
    pub unit_count: u32,
    pub unit_price: Uint128,
    pub total: Uint128,
    pub discount_bps: u32,
    pub final_amount: Uint128,
    pub usd_total: Uint128,
    pub usd_charged: Uint128,
    /// Absent for USD-pegged currencies
    pub rate: Option<Uint128>,
    pub rate_decimals: Option<u8>,
}

#[cw_serde]
pub struct PurchasesResponse {
    pub purchases: Vec<Purchase>,
}

#[cw_serde]
pub struct MigrateMsg {}
