use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{CurrenciesResponse, PacksResponse, PurchasesResponse, QuoteResponse};
use crate::pricing;
use crate::registry;
use crate::state::{BUYER_PURCHASES, CONFIG, CURRENCIES, PURCHASES, STATS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_pack(deps: Deps, name: String) -> StdResult<Binary> {
    let pack = registry::get(deps.storage, &name)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    to_json_binary(&pack)
}

pub fn query_packs(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let packs = registry::list(deps.storage, start_after.as_deref(), limit)?;
    to_json_binary(&PacksResponse { packs })
}

pub fn query_currency(deps: Deps, symbol: String) -> StdResult<Binary> {
    let currency = CURRENCIES.load(deps.storage, &symbol)?;
    to_json_binary(&currency)
}

pub fn query_currencies(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let currencies = CURRENCIES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, currency)| currency))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&CurrenciesResponse { currencies })
}

/// Price a purchase against the live feed without executing it.
pub fn query_quote(
    deps: Deps,
    env: Env,
    pack_name: String,
    unit_count: u32,
    currency: String,
) -> StdResult<Binary> {
    pricing::check_unit_count(unit_count).map_err(|e| StdError::generic_err(e.to_string()))?;

    let config = CONFIG.load(deps.storage)?;
    let pack = registry::get(deps.storage, &pack_name)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let currency = CURRENCIES
        .may_load(deps.storage, &currency)?
        .ok_or_else(|| StdError::generic_err(format!("unknown currency: {}", currency)))?;

    let rate = pricing::rate_for(
        &deps.querier,
        &currency,
        env.block.time,
        config.max_price_age_seconds,
    )
    .map_err(|e| StdError::generic_err(e.to_string()))?;
    let quote = pricing::quote(pack.price_usd, &currency, unit_count, rate.as_ref())
        .map_err(|e| StdError::generic_err(e.to_string()))?;

    to_json_binary(&QuoteResponse {
        pack_name,
        currency: currency.symbol,
        unit_count,
        unit_price: quote.unit_price,
        total: quote.total,
        discount_bps: quote.discount_bps,
        final_amount: quote.final_amount,
        usd_total: quote.usd_total,
        usd_charged: quote.usd_charged,
        rate: rate.as_ref().map(|r| r.rate),
        rate_decimals: rate.as_ref().map(|r| r.decimals),
    })
}

pub fn query_purchase(deps: Deps, request_id: String) -> StdResult<Binary> {
    let purchase = PURCHASES.load(deps.storage, &request_id)?;
    to_json_binary(&purchase)
}

pub fn query_purchases_by_buyer(
    deps: Deps,
    buyer: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let buyer = deps.api.addr_validate(&buyer)?;
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let purchases = BUYER_PURCHASES
        .prefix(&buyer)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, request_id) = item?;
            PURCHASES.load(deps.storage, &request_id)
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&PurchasesResponse { purchases })
}

pub fn query_stats(deps: Deps) -> StdResult<Binary> {
    let stats = STATS.load(deps.storage)?;
    to_json_binary(&stats)
}
