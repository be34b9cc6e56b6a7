use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{CoordinatorConfig, CONFIG, LATEST_ROUND, NEXT_SUBSCRIPTION_ID};

const CONTRACT_NAME: &str = "crates.io:lootpack-randomness-coordinator";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_MAX_WORDS: u32 = 10;

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let pubkey_bytes =
        hex::decode(&msg.quicknet_pubkey_hex).map_err(|_| ContractError::InvalidHex {
            field: "quicknet_pubkey_hex".to_string(),
        })?;
    if pubkey_bytes.len() != 96 {
        return Err(ContractError::InvalidPubkeyLength {
            got: pubkey_bytes.len(),
        });
    }
    if msg.period_seconds == 0 {
        return Err(ContractError::InvalidPeriod);
    }

    let mut operators = Vec::new();
    for op in &msg.operators {
        operators.push(deps.api.addr_validate(op)?);
    }

    let config = CoordinatorConfig {
        admin: info.sender.clone(),
        operators,
        quicknet_pubkey: pubkey_bytes,
        chain_hash: msg.chain_hash,
        genesis_time: msg.genesis_time,
        period_seconds: msg.period_seconds,
        max_words: msg.max_words.unwrap_or(DEFAULT_MAX_WORDS),
    };

    CONFIG.save(deps.storage, &config)?;
    LATEST_ROUND.save(deps.storage, &0u64)?;
    NEXT_SUBSCRIPTION_ID.save(deps.storage, &1u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "randomness-coordinator")
        .add_attribute("admin", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SubmitBeacon {
            round,
            signature_hex,
        } => execute::submit_beacon(deps, env, info, round, signature_hex),
        ExecuteMsg::UpdateOperators { add, remove } => {
            execute::update_operators(deps, info, add, remove)
        }
        ExecuteMsg::CreateSubscription {} => execute::create_subscription(deps, info),
        ExecuteMsg::AddConsumer {
            subscription_id,
            consumer,
        } => execute::add_consumer(deps, info, subscription_id, consumer),
        ExecuteMsg::RemoveConsumer {
            subscription_id,
            consumer,
        } => execute::remove_consumer(deps, info, subscription_id, consumer),
        ExecuteMsg::RequestRandomness {
            key_hash,
            subscription_id,
            num_words,
            nonce,
        } => execute::request_randomness(
            deps,
            env,
            info,
            key_hash,
            subscription_id,
            num_words,
            nonce,
        ),
        ExecuteMsg::FulfillRandomness { request_id } => {
            execute::fulfill_randomness(deps, env, request_id)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Beacon { round } => query::query_beacon(deps, round),
        QueryMsg::LatestRound {} => query::query_latest_round(deps),
        QueryMsg::Subscription { subscription_id } => {
            query::query_subscription(deps, subscription_id)
        }
        QueryMsg::Request { request_id } => query::query_request(deps, request_id),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
