use cosmwasm_std::{Order, StdResult, Storage, Uint128};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{PackDefinition, RewardTier, RewardType, PACKS, TOTAL_WEIGHT};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

/// Assemble and validate a pack from parallel weight/type/value lists.
pub fn build_pack(
    name: String,
    price_usd: Uint128,
    weights: Vec<u32>,
    reward_types: Vec<RewardType>,
    values: Vec<Uint128>,
) -> Result<PackDefinition, ContractError> {
    if name.is_empty() {
        return Err(ContractError::InvalidPackName);
    }
    if weights.len() != reward_types.len() || weights.len() != values.len() {
        return Err(ContractError::MalformedWeights {
            reason: format!(
                "length mismatch: {} weights, {} types, {} values",
                weights.len(),
                reward_types.len(),
                values.len()
            ),
        });
    }

    let tiers: Vec<RewardTier> = weights
        .into_iter()
        .zip(reward_types)
        .zip(values)
        .map(|((cumulative_weight, reward_type), value)| RewardTier {
            reward_type,
            value,
            cumulative_weight,
        })
        .collect();
    validate_tiers(&tiers)?;

    Ok(PackDefinition {
        name,
        price_usd,
        tiers,
    })
}

/// Bounds must be strictly increasing and end at `TOTAL_WEIGHT`. Every tier
/// must grant something, since the sinks refuse zero amounts.
pub fn validate_tiers(tiers: &[RewardTier]) -> Result<(), ContractError> {
    let last = tiers.last().ok_or_else(|| ContractError::MalformedWeights {
        reason: "at least one tier is required".to_string(),
    })?;

    let mut previous = 0u32;
    for (i, tier) in tiers.iter().enumerate() {
        if tier.value.is_zero() {
            return Err(ContractError::MalformedWeights {
                reason: format!(
                    "{} reward at index {} has zero value",
                    tier.reward_type.as_str(),
                    i
                ),
            });
        }
        if tier.cumulative_weight <= previous {
            return Err(ContractError::MalformedWeights {
                reason: format!(
                    "weight {} at index {} must exceed {}",
                    tier.cumulative_weight, i, previous
                ),
            });
        }
        previous = tier.cumulative_weight;
    }

    if last.cumulative_weight != TOTAL_WEIGHT {
        return Err(ContractError::MalformedWeights {
            reason: format!(
                "last weight is {}, expected {}",
                last.cumulative_weight, TOTAL_WEIGHT
            ),
        });
    }
    Ok(())
}

/// Replace any existing definition with the same name. Returns the previous one.
pub fn upsert(
    storage: &mut dyn Storage,
    pack: &PackDefinition,
) -> Result<Option<PackDefinition>, ContractError> {
    let previous = PACKS.may_load(storage, &pack.name)?;
    PACKS.save(storage, &pack.name, pack)?;
    Ok(previous)
}

pub fn remove(storage: &mut dyn Storage, name: &str) -> Result<PackDefinition, ContractError> {
    let pack = get(storage, name)?;
    PACKS.remove(storage, name);
    Ok(pack)
}

pub fn get(storage: &dyn Storage, name: &str) -> Result<PackDefinition, ContractError> {
    PACKS
        .may_load(storage, name)?
        .ok_or_else(|| ContractError::PackNotFound {
            name: name.to_string(),
        })
}

/// Packs in ascending name order.
pub fn list(
    storage: &dyn Storage,
    start_after: Option<&str>,
    limit: Option<u32>,
) -> StdResult<Vec<PackDefinition>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    PACKS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, pack)| pack))
        .collect()
}
