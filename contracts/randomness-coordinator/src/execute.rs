use cosmwasm_std::{to_json_binary, DepsMut, Env, Event, MessageInfo, Response, WasmMsg};
use lootpack_common::{compute_request_id, derive_words, ConsumerExecuteMsg};

use crate::error::ContractError;
use crate::state::{
    RandomnessRequest, RequestStatus, StoredBeacon, Subscription, BEACONS, CONFIG, LATEST_ROUND,
    NEXT_SUBSCRIPTION_ID, REQUESTS, SUBSCRIPTIONS,
};
use crate::verify::{next_round, verify_beacon};

/// Submit a drand beacon. Only operators can call this.
pub fn submit_beacon(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    round: u64,
    signature_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config.operators.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only operators can submit beacons".to_string(),
        });
    }

    if BEACONS.has(deps.storage, round) {
        return Err(ContractError::BeaconAlreadyExists { round });
    }

    let signature = hex::decode(&signature_hex).map_err(|_| ContractError::InvalidHex {
        field: "signature_hex".to_string(),
    })?;

    let randomness = verify_beacon(&config.quicknet_pubkey, round, &signature).map_err(|e| {
        ContractError::VerificationFailed {
            reason: e.to_string(),
        }
    })?;

    let beacon = StoredBeacon {
        round,
        randomness: randomness.to_vec(),
        signature,
        verified: true,
        submitted_at: env.block.time,
        submitted_by: info.sender.clone(),
    };
    BEACONS.save(deps.storage, round, &beacon)?;

    let current_latest = LATEST_ROUND.may_load(deps.storage)?.unwrap_or(0);
    if round > current_latest {
        LATEST_ROUND.save(deps.storage, &round)?;
    }

    Ok(Response::new()
        .add_attribute("action", "submit_beacon")
        .add_attribute("round", round.to_string())
        .add_attribute("submitted_by", info.sender.to_string())
        .add_event(
            Event::new("lootpack_beacon_submitted")
                .add_attribute("round", round.to_string())
                .add_attribute("randomness", hex::encode(randomness))
                .add_attribute("submitted_by", info.sender.to_string()),
        ))
}

/// Update the operator list. Admin only.
pub fn update_operators(
    deps: DepsMut,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update operators".to_string(),
        });
    }

    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.operators.retain(|a| *a != addr);
    }
    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.operators.contains(&addr) {
            config.operators.push(addr);
        }
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_operators")
        .add_attribute("added", add.join(","))
        .add_attribute("removed", remove.join(",")))
}

pub fn create_subscription(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let id = NEXT_SUBSCRIPTION_ID.may_load(deps.storage)?.unwrap_or(1);
    NEXT_SUBSCRIPTION_ID.save(deps.storage, &(id + 1))?;

    let subscription = Subscription {
        id,
        owner: info.sender.clone(),
        consumers: vec![],
    };
    SUBSCRIPTIONS.save(deps.storage, id, &subscription)?;

    Ok(Response::new()
        .add_attribute("action", "create_subscription")
        .add_attribute("subscription_id", id.to_string())
        .add_event(
            Event::new("lootpack_subscription_created")
                .add_attribute("subscription_id", id.to_string())
                .add_attribute("owner", info.sender.to_string()),
        ))
}

fn load_owned_subscription(
    deps: &DepsMut,
    info: &MessageInfo,
    subscription_id: u64,
) -> Result<Subscription, ContractError> {
    let subscription = SUBSCRIPTIONS
        .may_load(deps.storage, subscription_id)?
        .ok_or(ContractError::SubscriptionNotFound { subscription_id })?;
    if subscription.owner != info.sender {
        return Err(ContractError::Unauthorized {
            reason: "only the subscription owner can manage consumers".to_string(),
        });
    }
    Ok(subscription)
}

pub fn add_consumer(
    deps: DepsMut,
    info: MessageInfo,
    subscription_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut subscription = load_owned_subscription(&deps, &info, subscription_id)?;
    let consumer_addr = deps.api.addr_validate(&consumer)?;

    if !subscription.consumers.contains(&consumer_addr) {
        subscription.consumers.push(consumer_addr);
        SUBSCRIPTIONS.save(deps.storage, subscription_id, &subscription)?;
    }

    Ok(Response::new()
        .add_attribute("action", "add_consumer")
        .add_attribute("subscription_id", subscription_id.to_string())
        .add_attribute("consumer", consumer))
}

pub fn remove_consumer(
    deps: DepsMut,
    info: MessageInfo,
    subscription_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut subscription = load_owned_subscription(&deps, &info, subscription_id)?;
    let consumer_addr = deps.api.addr_validate(&consumer)?;

    subscription.consumers.retain(|c| *c != consumer_addr);
    SUBSCRIPTIONS.save(deps.storage, subscription_id, &subscription)?;

    Ok(Response::new()
        .add_attribute("action", "remove_consumer")
        .add_attribute("subscription_id", subscription_id.to_string())
        .add_attribute("consumer", consumer))
}

/// Register a request. The target round is the first drand round that is
/// published strictly after this block, so neither party can know the words yet.
pub fn request_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    key_hash: String,
    subscription_id: u64,
    num_words: u32,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if key_hash != config.chain_hash {
        return Err(ContractError::InvalidKeyHash { key_hash });
    }
    if num_words == 0 || num_words > config.max_words {
        return Err(ContractError::InvalidNumWords {
            num_words,
            max: config.max_words,
        });
    }

    let subscription = SUBSCRIPTIONS
        .may_load(deps.storage, subscription_id)?
        .ok_or(ContractError::SubscriptionNotFound { subscription_id })?;
    if !subscription.consumers.contains(&info.sender) {
        return Err(ContractError::InvalidConsumer {
            consumer: info.sender.to_string(),
            subscription_id,
        });
    }

    let request_id = compute_request_id(info.sender.as_str(), nonce);
    if REQUESTS.has(deps.storage, &request_id) {
        return Err(ContractError::RequestAlreadyExists { request_id });
    }

    let target_round = next_round(
        env.block.time.seconds(),
        config.genesis_time,
        config.period_seconds,
    );

    let request = RandomnessRequest {
        request_id: request_id.clone(),
        consumer: info.sender.clone(),
        subscription_id,
        num_words,
        nonce,
        target_round,
        status: RequestStatus::Pending,
        created_at: env.block.time,
        fulfilled_at: None,
    };
    REQUESTS.save(deps.storage, &request_id, &request)?;

    Ok(Response::new()
        .add_attribute("action", "request_randomness")
        .add_attribute("request_id", request_id.clone())
        .add_event(
            Event::new("lootpack_randomness_request_registered")
                .add_attribute("request_id", request_id)
                .add_attribute("consumer", info.sender.to_string())
                .add_attribute("subscription_id", subscription_id.to_string())
                .add_attribute("num_words", num_words.to_string())
                .add_attribute("target_round", target_round.to_string()),
        ))
}

/// Deliver the words for a request. The request is marked fulfilled before the
/// callback is dispatched, so each request is delivered at most once.
pub fn fulfill_randomness(
    deps: DepsMut,
    env: Env,
    request_id: String,
) -> Result<Response, ContractError> {
    let mut request = REQUESTS
        .may_load(deps.storage, &request_id)?
        .ok_or_else(|| ContractError::RequestNotFound {
            request_id: request_id.clone(),
        })?;

    if request.status != RequestStatus::Pending {
        return Err(ContractError::RequestAlreadyFulfilled { request_id });
    }

    let beacon = BEACONS
        .may_load(deps.storage, request.target_round)?
        .ok_or(ContractError::BeaconNotFound {
            round: request.target_round,
        })?;

    let random_words = derive_words(&beacon.randomness, &request_id, request.num_words);

    request.status = RequestStatus::Fulfilled;
    request.fulfilled_at = Some(env.block.time);
    REQUESTS.save(deps.storage, &request_id, &request)?;

    let callback = WasmMsg::Execute {
        contract_addr: request.consumer.to_string(),
        msg: to_json_binary(&ConsumerExecuteMsg::ReceiveRandomness {
            request_id: request_id.clone(),
            random_words,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback)
        .add_attribute("action", "fulfill_randomness")
        .add_attribute("request_id", request_id.clone())
        .add_event(
            Event::new("lootpack_randomness_delivered")
                .add_attribute("request_id", request_id)
                .add_attribute("consumer", request.consumer.to_string())
                .add_attribute("round", request.target_round.to_string())
                .add_attribute("num_words", request.num_words.to_string()),
        ))
}
