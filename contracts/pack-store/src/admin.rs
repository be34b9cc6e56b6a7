use cosmwasm_std::{
    coins, to_json_binary, Addr, Api, BankMsg, DepsMut, Env, Event, MessageInfo, Uint128, WasmMsg,
};
use injective_cosmwasm::InjectiveMsgWrapper;
use lootpack_common::{TokenBalanceResponse, TokenExecuteMsg, TokenQueryMsg};

use crate::error::ContractError;
use crate::msg::{CurrencyMsg, PaymentRailMsg};
use crate::registry;
use crate::state::{Config, Currency, PaymentRail, Pricing, RewardType, CONFIG, CURRENCIES};

type ContractResponse = cosmwasm_std::Response<InjectiveMsgWrapper>;

/// Largest decimals accepted for a currency.
pub const MAX_DECIMALS: u8 = 36;

fn ensure_admin(deps: &DepsMut, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can perform this action".to_string(),
        });
    }
    Ok(config)
}

pub fn pricing_from(api: &dyn Api, feed: Option<String>) -> Result<Pricing, ContractError> {
    Ok(match feed {
        Some(address) => Pricing::Feed {
            address: api.addr_validate(&address)?,
        },
        None => Pricing::UsdPegged,
    })
}

pub fn validate_decimals(decimals: u8) -> Result<(), ContractError> {
    if decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidCurrency {
            reason: format!("decimals {} exceed {}", decimals, MAX_DECIMALS),
        });
    }
    Ok(())
}

fn load_currency(deps: &DepsMut, symbol: &str) -> Result<Currency, ContractError> {
    CURRENCIES
        .may_load(deps.storage, symbol)?
        .ok_or_else(|| ContractError::UnknownCurrency {
            symbol: symbol.to_string(),
        })
}

pub fn upsert_pack(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    price_usd: Uint128,
    weights: Vec<u32>,
    reward_types: Vec<RewardType>,
    values: Vec<Uint128>,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(&deps, &info)?;

    let pack = registry::build_pack(name, price_usd, weights, reward_types, values)?;
    let previous = registry::upsert(deps.storage, &pack)?;

    let (old_price, old_tiers) = match &previous {
        Some(old) => (old.price_usd.to_string(), old.tiers.len().to_string()),
        None => ("none".to_string(), "0".to_string()),
    };

    Ok(ContractResponse::new()
        .add_attribute("action", "upsert_pack")
        .add_attribute("name", pack.name.clone())
        .add_event(
            Event::new("lootpack_pack_upserted")
                .add_attribute("name", pack.name.clone())
                .add_attribute("old_price_usd", old_price)
                .add_attribute("new_price_usd", pack.price_usd.to_string())
                .add_attribute("old_tier_count", old_tiers)
                .add_attribute("new_tier_count", pack.tiers.len().to_string()),
        ))
}

/// Pending purchases keep their own snapshot, so removal is always allowed.
pub fn remove_pack(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(&deps, &info)?;

    let removed = registry::remove(deps.storage, &name)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "remove_pack")
        .add_attribute("name", name.clone())
        .add_event(
            Event::new("lootpack_pack_deleted")
                .add_attribute("name", name)
                .add_attribute("old_price_usd", removed.price_usd.to_string())
                .add_attribute("old_tier_count", removed.tiers.len().to_string()),
        ))
}

pub fn set_currency(
    deps: DepsMut,
    info: MessageInfo,
    currency: CurrencyMsg,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(&deps, &info)?;

    if currency.symbol.is_empty() {
        return Err(ContractError::InvalidCurrency {
            reason: "symbol must not be empty".to_string(),
        });
    }
    validate_decimals(currency.decimals)?;

    let previous = CURRENCIES.may_load(deps.storage, &currency.symbol)?;
    if previous.as_ref().is_some_and(|c| c.reward_currency) {
        return Err(ContractError::RewardCurrencyLocked {
            symbol: currency.symbol,
        });
    }

    let rail = match currency.rail {
        PaymentRailMsg::Native { denom } => {
            if denom.is_empty() {
                return Err(ContractError::InvalidCurrency {
                    reason: "denom must not be empty".to_string(),
                });
            }
            PaymentRail::Native { denom }
        }
        PaymentRailMsg::Token { contract } => PaymentRail::Token {
            contract: deps.api.addr_validate(&contract)?,
        },
    };
    let stored = Currency {
        symbol: currency.symbol.clone(),
        rail,
        decimals: currency.decimals,
        pricing: pricing_from(deps.api, currency.feed)?,
        reward_currency: false,
    };
    CURRENCIES.save(deps.storage, &stored.symbol, &stored)?;

    let (old_rail, old_feed) = match &previous {
        Some(old) => (old.rail.label(), old.pricing.label()),
        None => ("none".to_string(), "none".to_string()),
    };

    Ok(ContractResponse::new()
        .add_attribute("action", "set_currency")
        .add_attribute("symbol", stored.symbol.clone())
        .add_event(
            Event::new("lootpack_currency_updated")
                .add_attribute("symbol", stored.symbol.clone())
                .add_attribute("old_rail", old_rail)
                .add_attribute("new_rail", stored.rail.label())
                .add_attribute("old_feed", old_feed)
                .add_attribute("new_feed", stored.pricing.label())
                .add_attribute("decimals", stored.decimals.to_string()),
        ))
}

pub fn remove_currency(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(&deps, &info)?;

    let currency = load_currency(&deps, &symbol)?;
    if currency.reward_currency {
        return Err(ContractError::RewardCurrencyLocked { symbol });
    }
    CURRENCIES.remove(deps.storage, &symbol);

    Ok(ContractResponse::new()
        .add_attribute("action", "remove_currency")
        .add_attribute("symbol", symbol.clone())
        .add_event(
            Event::new("lootpack_currency_updated")
                .add_attribute("symbol", symbol)
                .add_attribute("old_rail", currency.rail.label())
                .add_attribute("new_rail", "none")
                .add_attribute("old_feed", currency.pricing.label())
                .add_attribute("new_feed", "none"),
        ))
}

pub fn update_price_feed(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
    feed: Option<String>,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(&deps, &info)?;

    let mut currency = load_currency(&deps, &symbol)?;
    let old_feed = currency.pricing.label();
    currency.pricing = pricing_from(deps.api, feed)?;
    CURRENCIES.save(deps.storage, &symbol, &currency)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "update_price_feed")
        .add_attribute("symbol", symbol.clone())
        .add_event(
            Event::new("lootpack_feed_updated")
                .add_attribute("symbol", symbol)
                .add_attribute("old_feed", old_feed)
                .add_attribute("new_feed", currency.pricing.label()),
        ))
}

/// Open purchases are still delivered by the coordinator recorded on them.
pub fn update_randomness(
    deps: DepsMut,
    info: MessageInfo,
    coordinator: Option<String>,
    key_hash: Option<String>,
    subscription_id: Option<u64>,
) -> Result<ContractResponse, ContractError> {
    let mut config = ensure_admin(&deps, &info)?;
    let old = config.randomness.clone();

    if let Some(coordinator) = coordinator {
        config.randomness.coordinator = deps.api.addr_validate(&coordinator)?;
    }
    if let Some(key_hash) = key_hash {
        if key_hash.is_empty() {
            return Err(ContractError::InvalidConfig {
                reason: "key_hash must not be empty".to_string(),
            });
        }
        config.randomness.key_hash = key_hash;
    }
    if let Some(subscription_id) = subscription_id {
        config.randomness.subscription_id = subscription_id;
    }

    CONFIG.save(deps.storage, &config)?;

    let new = &config.randomness;
    Ok(ContractResponse::new()
        .add_attribute("action", "update_randomness")
        .add_event(
            Event::new("lootpack_randomness_updated")
                .add_attribute("old_coordinator", old.coordinator.to_string())
                .add_attribute("new_coordinator", new.coordinator.to_string())
                .add_attribute("old_key_hash", old.key_hash)
                .add_attribute("new_key_hash", new.key_hash.clone())
                .add_attribute("old_subscription_id", old.subscription_id.to_string())
                .add_attribute("new_subscription_id", new.subscription_id.to_string()),
        ))
}

pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    admin: Option<String>,
    xp_module: Option<String>,
    item_module: Option<String>,
    max_price_age_seconds: Option<u64>,
) -> Result<ContractResponse, ContractError> {
    let mut config = ensure_admin(&deps, &info)?;
    let old_admin = config.admin.clone();
    let old_xp_module = config.xp_module.clone();
    let old_item_module = config.item_module.clone();
    let old_max_age = config.max_price_age_seconds;

    if let Some(admin) = admin {
        config.admin = deps.api.addr_validate(&admin)?;
    }
    if let Some(xp_module) = xp_module {
        config.xp_module = deps.api.addr_validate(&xp_module)?;
    }
    if let Some(item_module) = item_module {
        config.item_module = deps.api.addr_validate(&item_module)?;
    }
    if let Some(max_age) = max_price_age_seconds {
        if max_age == 0 {
            return Err(ContractError::InvalidConfig {
                reason: "max_price_age_seconds must be positive".to_string(),
            });
        }
        config.max_price_age_seconds = max_age;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "update_config")
        .add_event(
            Event::new("lootpack_config_updated")
                .add_attribute("old_admin", old_admin.to_string())
                .add_attribute("new_admin", config.admin.to_string())
                .add_attribute("old_xp_module", old_xp_module.to_string())
                .add_attribute("new_xp_module", config.xp_module.to_string())
                .add_attribute("old_item_module", old_item_module.to_string())
                .add_attribute("new_item_module", config.item_module.to_string())
                .add_attribute("old_max_price_age_seconds", old_max_age.to_string())
                .add_attribute(
                    "new_max_price_age_seconds",
                    config.max_price_age_seconds.to_string(),
                ),
        ))
}

/// Sweep accumulated funds of one currency to `recipient`.
pub fn withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    symbol: String,
    recipient: String,
    amount: Option<Uint128>,
) -> Result<ContractResponse, ContractError> {
    ensure_admin(&deps, &info)?;

    let currency = load_currency(&deps, &symbol)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let available = match &currency.rail {
        PaymentRail::Native { denom } => {
            deps.querier
                .query_balance(&env.contract.address, denom)?
                .amount
        }
        PaymentRail::Token { contract } => {
            token_balance(&deps, contract, &env.contract.address)?
        }
    };
    if available.is_zero() {
        return Err(ContractError::NothingToWithdraw { symbol });
    }

    let amount = amount.unwrap_or(available);
    if amount > available {
        return Err(ContractError::InsufficientBalance {
            requested: amount,
            available,
        });
    }
    if amount.is_zero() {
        return Err(ContractError::NothingToWithdraw { symbol });
    }

    let mut response = ContractResponse::new();
    response = match &currency.rail {
        PaymentRail::Native { denom } => response.add_message(BankMsg::Send {
            to_address: recipient_addr.to_string(),
            amount: coins(amount.u128(), denom),
        }),
        PaymentRail::Token { contract } => response.add_message(WasmMsg::Execute {
            contract_addr: contract.to_string(),
            msg: to_json_binary(&TokenExecuteMsg::Transfer {
                recipient: recipient_addr.to_string(),
                amount,
            })?,
            funds: vec![],
        }),
    };

    Ok(response
        .add_attribute("action", "withdraw")
        .add_attribute("symbol", symbol.clone())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("lootpack_funds_withdrawn")
                .add_attribute("symbol", symbol)
                .add_attribute("recipient", recipient_addr.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("remaining", (available - amount).to_string()),
        ))
}

fn token_balance(deps: &DepsMut, contract: &Addr, holder: &Addr) -> Result<Uint128, ContractError> {
    let res: TokenBalanceResponse = deps.querier.query_wasm_smart(
        contract.to_string(),
        &TokenQueryMsg::Balance {
            address: holder.to_string(),
        },
    )?;
    Ok(res.balance)
}
