use cosmwasm_std::{to_json_binary, Binary, Deps, StdError, StdResult};
use lootpack_common::RoundDataResponse;

use crate::state::{CONFIG, LATEST_ROUND_ID, ROUNDS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_latest_round_data(deps: Deps) -> StdResult<Binary> {
    let latest = LATEST_ROUND_ID.may_load(deps.storage)?.unwrap_or(0);
    if latest == 0 {
        return Err(StdError::generic_err("no price rounds submitted"));
    }
    query_round_data(deps, latest)
}

pub fn query_round_data(deps: Deps, round_id: u64) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUNDS.load(deps.storage, round_id)?;
    to_json_binary(&RoundDataResponse {
        round_id: round.round_id,
        answer: round.answer,
        decimals: config.decimals,
        updated_at: round.updated_at,
    })
}
