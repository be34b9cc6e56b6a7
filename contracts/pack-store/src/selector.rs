use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::state::{RewardTier, TOTAL_WEIGHT};

/// Pick the tier whose half-open weight interval contains `random % TOTAL_WEIGHT`.
///
/// Tier `i` covers `[bound[i-1], bound[i])`, so over the full value space it is
/// selected exactly `bound[i] - bound[i-1]` times.
pub fn select(random: Uint128, tiers: &[RewardTier]) -> Result<&RewardTier, ContractError> {
    let reduced = (random.u128() % TOTAL_WEIGHT as u128) as u32;
    tiers
        .iter()
        .find(|tier| tier.cumulative_weight > reduced)
        .ok_or_else(|| ContractError::MalformedWeights {
            reason: format!("no tier covers value {}", reduced),
        })
}
