use cosmwasm_std::{DepsMut, Empty, Env, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{ItemRecord, CONFIG, ITEMS, NEXT_ITEM_ID, OWNED_ITEMS};

/// Mint a single item. Minters only.
pub fn mint_item(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    kind: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.minters.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only minters can mint items".to_string(),
        });
    }
    if kind.is_zero() {
        return Err(ContractError::ZeroKind);
    }

    let owner = deps.api.addr_validate(&recipient)?;
    let item_id = NEXT_ITEM_ID.may_load(deps.storage)?.unwrap_or(1);
    NEXT_ITEM_ID.save(deps.storage, &(item_id + 1))?;

    let item = ItemRecord {
        id: item_id,
        kind,
        owner: owner.clone(),
        minted_at: env.block.time,
    };
    ITEMS.save(deps.storage, item_id, &item)?;
    OWNED_ITEMS.save(deps.storage, (&owner, item_id), &Empty {})?;

    Ok(Response::new()
        .add_attribute("action", "mint_item")
        .add_attribute("item_id", item_id.to_string())
        .add_attribute("recipient", owner.to_string())
        .add_event(
            Event::new("lootpack_item_minted")
                .add_attribute("item_id", item_id.to_string())
                .add_attribute("kind", kind.to_string())
                .add_attribute("recipient", owner.to_string())
                .add_attribute("minter", info.sender.to_string()),
        ))
}

pub fn transfer_item(
    deps: DepsMut,
    info: MessageInfo,
    item_id: u64,
    recipient: String,
) -> Result<Response, ContractError> {
    let mut item = ITEMS
        .may_load(deps.storage, item_id)?
        .ok_or(ContractError::ItemNotFound { item_id })?;
    if item.owner != info.sender {
        return Err(ContractError::Unauthorized {
            reason: "only the owner can transfer an item".to_string(),
        });
    }

    let to = deps.api.addr_validate(&recipient)?;
    OWNED_ITEMS.remove(deps.storage, (&item.owner, item_id));
    OWNED_ITEMS.save(deps.storage, (&to, item_id), &Empty {})?;
    let from = std::mem::replace(&mut item.owner, to.clone());
    ITEMS.save(deps.storage, item_id, &item)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_item")
        .add_attribute("item_id", item_id.to_string())
        .add_event(
            Event::new("lootpack_item_transferred")
                .add_attribute("item_id", item_id.to_string())
                .add_attribute("from", from.to_string())
                .add_attribute("to", to.to_string()),
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
