use cosmwasm_std::{Addr, QuerierWrapper, Timestamp, Uint128, Uint256};
use lootpack_common::{FeedQueryMsg, RoundDataResponse};

use crate::error::ContractError;
use crate::state::{Currency, Pricing, MAX_UNITS};

/// Pack prices are quoted in USD micro-units.
pub const USD_DECIMALS: u32 = 6;
pub const BPS_DENOMINATOR: u32 = 10_000;
/// 10% off at 5+ units
pub const LARGE_VOLUME_DISCOUNT_BPS: u32 = 1_000;
/// 5% off at 3+ units
pub const SMALL_VOLUME_DISCOUNT_BPS: u32 = 500;
/// 10% off when paying in the reward currency
pub const REWARD_CURRENCY_DISCOUNT_BPS: u32 = 1_000;

/// One feed reading, consumed within a single price computation.
#[derive(Clone, Debug, PartialEq)]
pub struct RateSnapshot {
    /// USD per whole unit, scaled by `10^decimals`
    pub rate: Uint128,
    pub decimals: u8,
    pub updated_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub unit_price: Uint128,
    pub total: Uint128,
    pub discount_bps: u32,
    pub final_amount: Uint128,
    pub usd_total: Uint128,
    pub usd_charged: Uint128,
}

/// Purchases and quotes accept 1 to `MAX_UNITS` units.
pub fn check_unit_count(unit_count: u32) -> Result<(), ContractError> {
    if unit_count == 0 || unit_count > MAX_UNITS {
        return Err(ContractError::InvalidPackAmount {
            unit_count,
            max: MAX_UNITS,
        });
    }
    Ok(())
}

pub fn volume_discount_bps(unit_count: u32) -> u32 {
    if unit_count >= 5 {
        LARGE_VOLUME_DISCOUNT_BPS
    } else if unit_count >= 3 {
        SMALL_VOLUME_DISCOUNT_BPS
    } else {
        0
    }
}

/// Volume and currency discounts add up; they are applied once.
pub fn discount_bps(unit_count: u32, reward_currency: bool) -> u32 {
    let currency = if reward_currency {
        REWARD_CURRENCY_DISCOUNT_BPS
    } else {
        0
    };
    volume_discount_bps(unit_count) + currency
}

fn pow10(exp: u32) -> Result<Uint256, ContractError> {
    Ok(Uint256::from(10u128).checked_pow(exp)?)
}

/// Convert a USD micro-unit price into base units of `currency_decimals`.
///
/// `price_usd * 10^currency_decimals * 10^rate.decimals / (rate * 10^6)`,
/// truncated toward zero. A `None` rate means the currency is pegged 1:1 to USD.
pub fn unit_price(
    symbol: &str,
    price_usd: Uint128,
    currency_decimals: u8,
    rate: Option<&RateSnapshot>,
) -> Result<Uint128, ContractError> {
    let mut numerator =
        Uint256::from(price_usd).checked_mul(pow10(currency_decimals as u32)?)?;
    let mut denominator = pow10(USD_DECIMALS)?;

    if let Some(snapshot) = rate {
        if snapshot.rate.is_zero() {
            return Err(ContractError::InvalidPriceFeed {
                symbol: symbol.to_string(),
                reason: "zero rate".to_string(),
            });
        }
        numerator = numerator.checked_mul(pow10(snapshot.decimals as u32)?)?;
        denominator = denominator.checked_mul(Uint256::from(snapshot.rate))?;
    }

    let price = numerator.checked_div(denominator)?;
    Ok(Uint128::try_from(price)?)
}

fn apply_discount(amount: Uint128, discount_bps: u32) -> Result<Uint128, ContractError> {
    let keep = BPS_DENOMINATOR.saturating_sub(discount_bps);
    Ok(amount.checked_multiply_ratio(keep, BPS_DENOMINATOR)?)
}

pub fn quote(
    price_usd: Uint128,
    currency: &Currency,
    unit_count: u32,
    rate: Option<&RateSnapshot>,
) -> Result<Quote, ContractError> {
    let unit_price = unit_price(&currency.symbol, price_usd, currency.decimals, rate)?;
    let total = unit_price.checked_mul(Uint128::from(unit_count))?;
    let discount_bps = discount_bps(unit_count, currency.reward_currency);
    let final_amount = apply_discount(total, discount_bps)?;

    let usd_total = price_usd.checked_mul(Uint128::from(unit_count))?;
    let usd_charged = apply_discount(usd_total, discount_bps)?;

    Ok(Quote {
        unit_price,
        total,
        discount_bps,
        final_amount,
        usd_total,
        usd_charged,
    })
}

/// Read the latest feed round, rejecting zero or stale answers.
pub fn read_rate(
    querier: &QuerierWrapper,
    symbol: &str,
    feed: &Addr,
    now: Timestamp,
    max_age_seconds: u64,
) -> Result<RateSnapshot, ContractError> {
    let round: RoundDataResponse = querier
        .query_wasm_smart(feed.to_string(), &FeedQueryMsg::LatestRoundData {})
        .map_err(|e| ContractError::InvalidPriceFeed {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        })?;

    if round.answer.is_zero() {
        return Err(ContractError::InvalidPriceFeed {
            symbol: symbol.to_string(),
            reason: "zero rate".to_string(),
        });
    }
    let age = now.seconds().saturating_sub(round.updated_at.seconds());
    if age > max_age_seconds {
        return Err(ContractError::InvalidPriceFeed {
            symbol: symbol.to_string(),
            reason: format!("stale rate: {}s old, max {}s", age, max_age_seconds),
        });
    }

    Ok(RateSnapshot {
        rate: round.answer,
        decimals: round.decimals,
        updated_at: round.updated_at,
    })
}

/// Rate snapshot for `currency`, or `None` for USD-pegged currencies.
pub fn rate_for(
    querier: &QuerierWrapper,
    currency: &Currency,
    now: Timestamp,
    max_age_seconds: u64,
) -> Result<Option<RateSnapshot>, ContractError> {
    match &currency.pricing {
        Pricing::UsdPegged => Ok(None),
        Pricing::Feed { address } => {
            read_rate(querier, &currency.symbol, address, now, max_age_seconds).map(Some)
        }
    }
}
