use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult, Uint128};

use crate::msg::XpResponse;
use crate::state::{CONFIG, TOTAL_XP, XP_BALANCES};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_xp(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let xp = XP_BALANCES
        .may_load(deps.storage, &addr)?
        .unwrap_or(Uint128::zero());
    to_json_binary(&XpResponse { address, xp })
}

pub fn query_total_xp(deps: Deps) -> StdResult<Binary> {
    let total = TOTAL_XP.may_load(deps.storage)?.unwrap_or_default();
    to_json_binary(&total)
}
