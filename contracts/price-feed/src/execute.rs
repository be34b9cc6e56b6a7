use cosmwasm_std::{Addr, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{PriceRound, CONFIG, LATEST_ROUND_ID, ROUNDS};

/// Append a round and advance the latest pointer.
pub(crate) fn record_round(
    storage: &mut dyn Storage,
    env: &Env,
    submitter: &Addr,
    answer: Uint128,
) -> Result<u64, ContractError> {
    if answer.is_zero() {
        return Err(ContractError::ZeroAnswer);
    }

    let round_id = LATEST_ROUND_ID.may_load(storage)?.unwrap_or(0) + 1;
    let round = PriceRound {
        round_id,
        answer,
        updated_at: env.block.time,
        submitted_by: submitter.clone(),
    };
    ROUNDS.save(storage, round_id, &round)?;
    LATEST_ROUND_ID.save(storage, &round_id)?;
    Ok(round_id)
}

/// Submit a price. Operators only.
pub fn submit_price(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    answer: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.operators.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only operators can submit prices".to_string(),
        });
    }

    let round_id = record_round(deps.storage, &env, &info.sender, answer)?;

    Ok(Response::new()
        .add_attribute("action", "submit_price")
        .add_attribute("round_id", round_id.to_string())
        .add_attribute("answer", answer.to_string())
        .add_event(
            Event::new("lootpack_price_submitted")
                .add_attribute("feed", config.description)
                .add_attribute("round_id", round_id.to_string())
                .add_attribute("answer", answer.to_string())
                .add_attribute("decimals", config.decimals.to_string())
                .add_attribute("submitted_by", info.sender.to_string()),
        ))
}

/// Update the operator list. Admin only.
pub fn update_operators(
    deps: DepsMut,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update operators".to_string(),
        });
    }

    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.operators.retain(|a| *a != addr);
    }
    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.operators.contains(&addr) {
            config.operators.push(addr);
        }
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_operators")
        .add_attribute("added", add.join(","))
        .add_attribute("removed", remove.join(",")))
}
