use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, StdResult};
use cw2::{get_contract_version, set_contract_version};
use injective_cosmwasm::InjectiveMsgWrapper;

use crate::admin;
use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{
    Config, Currency, PaymentRail, RandomnessConfig, Stats, CONFIG, CURRENCIES, STATS,
};

const CONTRACT_NAME: &str = "crates.io:lootpack-pack-store";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

type ContractResponse = cosmwasm_std::Response<InjectiveMsgWrapper>;

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<ContractResponse, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.max_price_age_seconds == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "max_price_age_seconds must be positive".to_string(),
        });
    }
    if msg.randomness.key_hash.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "key_hash must not be empty".to_string(),
        });
    }
    if msg.reward_subdenom.is_empty() || msg.reward_currency.symbol.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "reward subdenom and symbol must not be empty".to_string(),
        });
    }
    admin::validate_decimals(msg.reward_currency.decimals)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender.clone(),
    };
    let xp_module = deps.api.addr_validate(&msg.xp_module)?;
    let item_module = deps.api.addr_validate(&msg.item_module)?;
    let coordinator = deps.api.addr_validate(&msg.randomness.coordinator)?;

    let (create_denom_msg, reward_denom) =
        execute::create_reward_denom(&env, &msg.reward_subdenom)?;

    let config = Config {
        admin: admin.clone(),
        reward_denom: reward_denom.clone(),
        xp_module,
        item_module,
        max_price_age_seconds: msg.max_price_age_seconds,
        randomness: RandomnessConfig {
            coordinator,
            key_hash: msg.randomness.key_hash,
            subscription_id: msg.randomness.subscription_id,
        },
    };
    CONFIG.save(deps.storage, &config)?;

    let reward_currency = Currency {
        symbol: msg.reward_currency.symbol,
        rail: PaymentRail::Native {
            denom: reward_denom.clone(),
        },
        decimals: msg.reward_currency.decimals,
        pricing: admin::pricing_from(deps.api, msg.reward_currency.feed)?,
        reward_currency: true,
    };
    CURRENCIES.save(deps.storage, &reward_currency.symbol, &reward_currency)?;

    STATS.save(deps.storage, &Stats::default())?;

    Ok(ContractResponse::new()
        .add_message(create_denom_msg)
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "pack-store")
        .add_attribute("admin", admin.to_string())
        .add_attribute("reward_denom", reward_denom)
        .add_attribute("reward_currency", reward_currency.symbol))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<ContractResponse, ContractError> {
    match msg {
        ExecuteMsg::Purchase {
            pack_name,
            unit_count,
            currency,
        } => execute::purchase(deps, env, info, pack_name, unit_count, currency),
        ExecuteMsg::ReceiveRandomness {
            request_id,
            random_words,
        } => execute::receive_randomness(deps, env, info, request_id, random_words),
        ExecuteMsg::GrantRewards {
            request_id,
            recipient,
            outcomes,
        } => execute::grant_rewards(deps, env, info, request_id, recipient, outcomes),
        ExecuteMsg::UpsertPack {
            name,
            price_usd,
            weights,
            reward_types,
            values,
        } => admin::upsert_pack(deps, info, name, price_usd, weights, reward_types, values),
        ExecuteMsg::RemovePack { name } => admin::remove_pack(deps, info, name),
        ExecuteMsg::SetCurrency { currency } => admin::set_currency(deps, info, currency),
        ExecuteMsg::RemoveCurrency { symbol } => admin::remove_currency(deps, info, symbol),
        ExecuteMsg::UpdatePriceFeed { symbol, feed } => {
            admin::update_price_feed(deps, info, symbol, feed)
        }
        ExecuteMsg::UpdateRandomness {
            coordinator,
            key_hash,
            subscription_id,
        } => admin::update_randomness(deps, info, coordinator, key_hash, subscription_id),
        ExecuteMsg::UpdateConfig {
            admin,
            xp_module,
            item_module,
            max_price_age_seconds,
        } => admin::update_config(
            deps,
            info,
            admin,
            xp_module,
            item_module,
            max_price_age_seconds,
        ),
        ExecuteMsg::Withdraw {
            symbol,
            recipient,
            amount,
        } => admin::withdraw(deps, env, info, symbol, recipient, amount),
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<ContractResponse, ContractError> {
    match msg.id {
        execute::GRANT_REPLY_ID => execute::handle_grant_failure(deps, env, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Pack { name } => query::query_pack(deps, name),
        QueryMsg::Packs { start_after, limit } => query::query_packs(deps, start_after, limit),
        QueryMsg::Currency { symbol } => query::query_currency(deps, symbol),
        QueryMsg::Currencies { start_after, limit } => {
            query::query_currencies(deps, start_after, limit)
        }
        QueryMsg::Quote {
            pack_name,
            unit_count,
            currency,
        } => query::query_quote(deps, env, pack_name, unit_count, currency),
        QueryMsg::Purchase { request_id } => query::query_purchase(deps, request_id),
        QueryMsg::PurchasesByBuyer {
            buyer,
            start_after,
            limit,
        } => query::query_purchases_by_buyer(deps, buyer, start_after, limit),
        QueryMsg::Stats {} => query::query_stats(deps),
    }
}

#[entry_point]
pub fn migrate(
    deps: DepsMut,
    _env: Env,
    _msg: MigrateMsg,
) -> Result<ContractResponse, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
