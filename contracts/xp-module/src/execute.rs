use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, TOTAL_XP, XP_BALANCES};

/// Credit XP. Minters only.
pub fn add_xp(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.minters.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only minters can add xp".to_string(),
        });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let balance = XP_BALANCES
        .may_load(deps.storage, &recipient_addr)?
        .unwrap_or(Uint128::zero())
        .checked_add(amount)?;
    XP_BALANCES.save(deps.storage, &recipient_addr, &balance)?;

    let total = TOTAL_XP
        .may_load(deps.storage)?
        .unwrap_or_default()
        .checked_add(amount)?;
    TOTAL_XP.save(deps.storage, &total)?;

    Ok(Response::new()
        .add_attribute("action", "add_xp")
        .add_attribute("recipient", recipient.clone())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("lootpack_xp_added")
                .add_attribute("recipient", recipient)
                .add_attribute("amount", amount.to_string())
                .add_attribute("new_balance", balance.to_string())
                .add_attribute("minter", info.sender.to_string()),
        ))
}

/// Update the minter list. Admin only.
pub fn update_minters(
    deps: DepsMut,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update minters".to_string(),
        });
    }

    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.minters.retain(|m| *m != addr);
    }
    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.minters.contains(&addr) {
            config.minters.push(addr);
        }
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_minters")
        .add_attribute("added", add.join(","))
        .add_attribute("removed", remove.join(",")))
}
