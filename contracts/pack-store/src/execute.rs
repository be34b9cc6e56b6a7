use cosmwasm_std::{
    coins, from_json, to_json_binary, BankMsg, Coin, CosmosMsg, DepsMut, Env, Event, MessageInfo,
    Reply, SubMsg, Uint128, WasmMsg,
};
use injective_cosmwasm::{create_mint_tokens_msg, create_new_denom_msg, InjectiveMsgWrapper};
use lootpack_common::{
    compute_request_id, CoordinatorExecuteMsg, ItemExecuteMsg, TokenExecuteMsg, XpExecuteMsg,
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, RewardOutcome};
use crate::pricing;
use crate::registry;
use crate::selector;
use crate::state::{
    PaymentRail, Purchase, PurchaseStatus, RewardType, BUYER_PURCHASES, CONFIG, CURRENCIES,
    PURCHASES, STATS,
};

type ContractResponse = cosmwasm_std::Response<InjectiveMsgWrapper>;

/// Reply id for the `GrantRewards` self-call.
pub const GRANT_REPLY_ID: u64 = 1;

/// Create the fungible reward denom. Only done once, at instantiation.
pub fn create_reward_denom(
    env: &Env,
    subdenom: &str,
) -> Result<(CosmosMsg<InjectiveMsgWrapper>, String), ContractError> {
    let contract_addr = env.contract.address.to_string();
    let msg = create_new_denom_msg(contract_addr.clone(), subdenom.to_string());
    let full_denom = format!("factory/{}/{}", contract_addr, subdenom);
    Ok((msg, full_denom))
}

/// Sum attached coins of `denom`; any other denom is rejected.
fn native_payment(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
    let mut paid = Uint128::zero();
    for coin in funds {
        if coin.denom != denom {
            return Err(ContractError::UnexpectedFunds {
                reason: format!("expected only {}, got {}", denom, coin.denom),
            });
        }
        paid = paid.checked_add(coin.amount)?;
    }
    Ok(paid)
}

/// Price, collect payment, open the purchase record and request randomness.
///
/// Everything below runs in one transaction: a failing payment or
/// coordinator message reverts the record and the counters with it.
pub fn purchase(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    pack_name: String,
    unit_count: u32,
    currency_symbol: String,
) -> Result<ContractResponse, ContractError> {
    pricing::check_unit_count(unit_count)?;

    let config = CONFIG.load(deps.storage)?;
    let pack = registry::get(deps.storage, &pack_name)?;
    let currency = CURRENCIES
        .may_load(deps.storage, &currency_symbol)?
        .ok_or_else(|| ContractError::UnknownCurrency {
            symbol: currency_symbol.clone(),
        })?;

    let rate = pricing::rate_for(
        &deps.querier,
        &currency,
        env.block.time,
        config.max_price_age_seconds,
    )?;
    let quote = pricing::quote(pack.price_usd, &currency, unit_count, rate.as_ref())?;

    // Collect payment
    let mut payment_msgs: Vec<CosmosMsg<InjectiveMsgWrapper>> = vec![];
    match &currency.rail {
        PaymentRail::Native { denom } => {
            let sent = native_payment(&info.funds, denom)?;
            if sent < quote.final_amount {
                return Err(ContractError::InsufficientFunds {
                    required: quote.final_amount,
                    sent,
                });
            }
            let excess = sent - quote.final_amount;
            if !excess.is_zero() {
                payment_msgs.push(CosmosMsg::Bank(BankMsg::Send {
                    to_address: info.sender.to_string(),
                    amount: coins(excess.u128(), denom),
                }));
            }
        }
        PaymentRail::Token { contract } => {
            if !info.funds.is_empty() {
                return Err(ContractError::UnexpectedFunds {
                    reason: format!("{} is paid by token transfer", currency.symbol),
                });
            }
            if !quote.final_amount.is_zero() {
                payment_msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: contract.to_string(),
                    msg: to_json_binary(&TokenExecuteMsg::TransferFrom {
                        owner: info.sender.to_string(),
                        recipient: env.contract.address.to_string(),
                        amount: quote.final_amount,
                    })?,
                    funds: vec![],
                }));
            }
        }
    }

    let mut stats = STATS.load(deps.storage)?;
    let nonce = stats.next_nonce;
    let request_id = compute_request_id(env.contract.address.as_str(), nonce);
    if PURCHASES.has(deps.storage, &request_id) {
        return Err(ContractError::RequestIdInUse { request_id });
    }

    let purchase_id = stats.next_purchase_id;
    let record = Purchase {
        id: purchase_id,
        request_id: request_id.clone(),
        buyer: info.sender.clone(),
        coordinator: config.randomness.coordinator.clone(),
        pack,
        unit_count,
        num_words: unit_count,
        currency: currency.symbol.clone(),
        amount_paid: quote.final_amount,
        usd_charged: quote.usd_charged,
        discount_bps: quote.discount_bps,
        status: PurchaseStatus::Pending,
        created_at: env.block.time,
        closed_at: None,
        failure: None,
    };
    PURCHASES.save(deps.storage, &request_id, &record)?;
    BUYER_PURCHASES.save(deps.storage, (&info.sender, purchase_id), &request_id)?;

    stats.next_nonce += 1;
    stats.next_purchase_id += 1;
    stats.purchases += 1;
    stats.units_sold += unit_count as u64;
    stats.open_requests += 1;
    STATS.save(deps.storage, &stats)?;

    let request_msg = WasmMsg::Execute {
        contract_addr: config.randomness.coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomness {
            key_hash: config.randomness.key_hash.clone(),
            subscription_id: config.randomness.subscription_id,
            num_words: unit_count,
            nonce,
        })?,
        funds: vec![],
    };

    Ok(ContractResponse::new()
        .add_messages(payment_msgs)
        .add_message(request_msg)
        .add_attribute("action", "purchase")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("pack", pack_name.clone())
        .add_attribute("unit_count", unit_count.to_string())
        .add_attribute("request_id", request_id.clone())
        .add_event(
            Event::new("lootpack_purchase_confirmed")
                .add_attribute("purchase_id", purchase_id.to_string())
                .add_attribute("buyer", info.sender.to_string())
                .add_attribute("pack", pack_name)
                .add_attribute("unit_count", unit_count.to_string())
                .add_attribute("currency", currency.symbol)
                .add_attribute("amount", quote.final_amount.to_string())
                .add_attribute("usd_charged", quote.usd_charged.to_string())
                .add_attribute("discount_bps", quote.discount_bps.to_string()),
        )
        .add_event(
            Event::new("lootpack_randomness_requested")
                .add_attribute("request_id", request_id)
                .add_attribute("num_words", unit_count.to_string())
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("purchase_id", purchase_id.to_string()),
        ))
}

/// Coordinator callback: resolve one reward per word and hand off to `GrantRewards`.
///
/// The record is closed before the grant is dispatched, so a duplicate
/// delivery fails with `UnknownRequest` whether or not granting succeeds.
pub fn receive_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: String,
    random_words: Vec<Uint128>,
) -> Result<ContractResponse, ContractError> {
    let unknown = || ContractError::UnknownRequest {
        request_id: request_id.clone(),
    };
    let mut record = PURCHASES
        .may_load(deps.storage, &request_id)?
        .ok_or_else(unknown)?;
    if info.sender != record.coordinator {
        return Err(ContractError::Unauthorized {
            reason: "only the coordinator the request was sent to can deliver it".to_string(),
        });
    }
    if record.status != PurchaseStatus::Pending {
        return Err(unknown());
    }

    if random_words.len() != record.num_words as usize {
        return Err(ContractError::RandomnessCountMismatch {
            expected: record.num_words,
            got: random_words.len() as u32,
        });
    }

    let outcomes = random_words
        .iter()
        .map(|word| {
            selector::select(*word, &record.pack.tiers).map(|tier| RewardOutcome {
                reward_type: tier.reward_type,
                value: tier.value,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    record.status = PurchaseStatus::Fulfilled;
    record.closed_at = Some(env.block.time);
    PURCHASES.save(deps.storage, &request_id, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.open_requests = stats.open_requests.saturating_sub(1);
    stats.fulfilled += 1;
    STATS.save(deps.storage, &stats)?;

    let grant = WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::GrantRewards {
            request_id: request_id.clone(),
            recipient: record.buyer.to_string(),
            outcomes: outcomes.clone(),
        })?,
        funds: vec![],
    };
    let grant_submsg = SubMsg::reply_on_error(grant, GRANT_REPLY_ID)
        .with_payload(to_json_binary(&request_id)?);

    let summary: Vec<&str> = outcomes.iter().map(|o| o.reward_type.as_str()).collect();

    Ok(ContractResponse::new()
        .add_submessage(grant_submsg)
        .add_attribute("action", "receive_randomness")
        .add_attribute("request_id", request_id.clone())
        .add_attribute("purchase_id", record.id.to_string())
        .add_event(
            Event::new("lootpack_randomness_fulfilled")
                .add_attribute("request_id", request_id)
                .add_attribute("purchase_id", record.id.to_string())
                .add_attribute("buyer", record.buyer.to_string())
                .add_attribute("num_words", random_words.len().to_string())
                .add_attribute("outcomes", summary.join(",")),
        ))
}

/// Issue one sink message per outcome. Any failing sink reverts the whole call.
pub fn grant_rewards(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: String,
    recipient: String,
    outcomes: Vec<RewardOutcome>,
) -> Result<ContractResponse, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::Unauthorized {
            reason: "rewards are granted by the contract itself".to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let mut response = ContractResponse::new()
        .add_attribute("action", "grant_rewards")
        .add_attribute("request_id", request_id.clone())
        .add_attribute("recipient", recipient_addr.to_string());

    for (unit, outcome) in outcomes.iter().enumerate() {
        let event = Event::new("lootpack_reward_granted")
            .add_attribute("request_id", request_id.clone())
            .add_attribute("recipient", recipient_addr.to_string())
            .add_attribute("unit", unit.to_string())
            .add_attribute("reward_type", outcome.reward_type.as_str())
            .add_attribute("value", outcome.value.to_string());

        match outcome.reward_type {
            RewardType::Xp => {
                response = response.add_message(WasmMsg::Execute {
                    contract_addr: config.xp_module.to_string(),
                    msg: to_json_binary(&XpExecuteMsg::AddXp {
                        recipient: recipient_addr.to_string(),
                        amount: outcome.value,
                    })?,
                    funds: vec![],
                });
            }
            RewardType::Loot => {
                response = response.add_message(create_mint_tokens_msg(
                    env.contract.address.clone(),
                    Coin {
                        denom: config.reward_denom.clone(),
                        amount: outcome.value,
                    },
                    recipient_addr.to_string(),
                ));
            }
            RewardType::Nft => {
                response = response.add_message(WasmMsg::Execute {
                    contract_addr: config.item_module.to_string(),
                    msg: to_json_binary(&ItemExecuteMsg::MintItem {
                        recipient: recipient_addr.to_string(),
                        kind: outcome.value,
                    })?,
                    funds: vec![],
                });
            }
        }
        response = response.add_event(event);
    }

    Ok(response)
}

/// `GrantRewards` reverted: close the purchase as failed. The delivered
/// randomness is consumed and nothing is retried.
pub fn handle_grant_failure(
    deps: DepsMut,
    env: Env,
    msg: Reply,
) -> Result<ContractResponse, ContractError> {
    let request_id: String = from_json(&msg.payload)?;
    let reason = match msg.result.into_result() {
        Ok(_) => return Ok(ContractResponse::new()),
        Err(err) => err,
    };

    let mut record = PURCHASES.load(deps.storage, &request_id)?;
    record.status = PurchaseStatus::Failed;
    record.closed_at = Some(env.block.time);
    record.failure = Some(reason.clone());
    PURCHASES.save(deps.storage, &request_id, &record)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.fulfilled = stats.fulfilled.saturating_sub(1);
    stats.failed += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(ContractResponse::new()
        .add_attribute("action", "grant_failed")
        .add_attribute("request_id", request_id.clone())
        .add_event(
            Event::new("lootpack_fulfillment_failed")
                .add_attribute("request_id", request_id)
                .add_attribute("purchase_id", record.id.to_string())
                .add_attribute("buyer", record.buyer.to_string())
                .add_attribute("reason", reason),
        ))
}
