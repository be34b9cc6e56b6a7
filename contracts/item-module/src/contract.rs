use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{ItemConfig, CONFIG, NEXT_ITEM_ID};

const CONTRACT_NAME: &str = "crates.io:lootpack-item-module";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut minters = Vec::new();
    for minter in &msg.minters {
        minters.push(deps.api.addr_validate(minter)?);
    }

    CONFIG.save(
        deps.storage,
        &ItemConfig {
            admin: info.sender.clone(),
            minters,
        },
    )?;
    NEXT_ITEM_ID.save(deps.storage, &1)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "item-module")
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
        ExecuteMsg::MintItem { recipient, kind } => {
            execute::mint_item(deps, env, info, recipient, kind)
        }
        ExecuteMsg::TransferItem { item_id, recipient } => {
            execute::transfer_item(deps, info, item_id, recipient)
        }
        ExecuteMsg::UpdateMinters { add, remove } => {
            execute::update_minters(deps, info, add, remove)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Item { item_id } => query::query_item(deps, item_id),
        QueryMsg::ItemsByOwner {
            owner,
            start_after,
            limit,
        } => query::query_items_by_owner(deps, owner, start_after, limit),
        QueryMsg::TotalItems {} => query::query_total_items(deps),
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
