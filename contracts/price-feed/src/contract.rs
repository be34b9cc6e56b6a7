use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{FeedConfig, CONFIG, LATEST_ROUND_ID};

const CONTRACT_NAME: &str = "crates.io:lootpack-price-feed";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const MAX_DECIMALS: u8 = 36;

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidDecimals {
            decimals: msg.decimals,
        });
    }

    let mut operators = Vec::new();
    for op in &msg.operators {
        operators.push(deps.api.addr_validate(op)?);
    }

    let config = FeedConfig {
        admin: info.sender.clone(),
        operators,
        decimals: msg.decimals,
        description: msg.description,
    };
    CONFIG.save(deps.storage, &config)?;
    LATEST_ROUND_ID.save(deps.storage, &0u64)?;

    if let Some(answer) = msg.initial_answer {
        execute::record_round(deps.storage, &env, &info.sender, answer)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "price-feed")
        .add_attribute("description", config.description)
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
        ExecuteMsg::SubmitPrice { answer } => execute::submit_price(deps, env, info, answer),
        ExecuteMsg::UpdateOperators { add, remove } => {
            execute::update_operators(deps, info, add, remove)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::LatestRoundData {} => query::query_latest_round_data(deps),
        QueryMsg::RoundData { round_id } => query::query_round_data(deps, round_id),
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
