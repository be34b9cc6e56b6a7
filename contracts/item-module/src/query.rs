use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::ItemsResponse;
use crate::state::{CONFIG, ITEMS, NEXT_ITEM_ID, OWNED_ITEMS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_item(deps: Deps, item_id: u64) -> StdResult<Binary> {
    let item = ITEMS.load(deps.storage, item_id)?;
    to_json_binary(&item)
}

pub fn query_items_by_owner(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let items = OWNED_ITEMS
        .prefix(&owner)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|id| ITEMS.load(deps.storage, id?))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&ItemsResponse { items })
}

pub fn query_total_items(deps: Deps) -> StdResult<Binary> {
    let next = NEXT_ITEM_ID.may_load(deps.storage)?.unwrap_or(1);
    to_json_binary(&(next - 1))
}
