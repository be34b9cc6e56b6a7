//! Integration tests for the LootPack contracts.
//!
//! Each contract runs in its own `cosmwasm_std::testing` instance. Messages
//! emitted by one contract are decoded and replayed against the target
//! contract's entry points with the emitter as sender, which also checks that
//! the shared message shapes in `lootpack-common` match what each contract
//! accepts. Feed reads made by the pack store are answered with the price-feed
//! contract's own query result via `MockQuerier::update_wasm`.
//!
//! Run:
//! ```bash
//! cargo test -p lootpack-integration-tests
//! ```

use cosmwasm_std::testing::{
    message_info, mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{
    coins, from_json, Addr, BankMsg, Binary, ContractResult, CosmosMsg, Env, OwnedDeps, Reply,
    Response, SubMsg, SubMsgResult, SystemError, SystemResult, Timestamp, Uint128, WasmMsg,
    WasmQuery,
};
use injective_cosmwasm::InjectiveMsgWrapper;
use lootpack_common::{compute_request_id, derive_words};

use lootpack_pack_store::msg as store_msg;
use lootpack_pack_store::state::{Purchase, PurchaseStatus, RewardType, Stats};
use lootpack_randomness_coordinator::msg as coordinator_msg;
use lootpack_randomness_coordinator::state::{RandomnessRequest, RequestStatus, StoredBeacon};

type TestDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;
type StoreResponse = Response<InjectiveMsgWrapper>;

// ─── Constants ───

const CHAIN_HASH: &str = "52db9ba70e0cc0f6eaf7803dd07447a1f5477735fd3f661792ba94600c84e971";
const GENESIS: u64 = 1692803367;

/// Real quicknet test vector: round 1000
const TEST_ROUND: u64 = 1000;
const TEST_SIG_HEX: &str = "b44679b9a59af2ec876b1a6b1ad52ea9b1615fc3982b19576350f93447cb1125e342b73a8dd2bacbe47e4b6b63ed5e39";

const LOOT: u128 = 1_000_000_000_000_000_000;

// ─── Helpers ───

fn addr(name: &str) -> Addr {
    MockApi::default().addr_make(name)
}

/// Env for `contract` at a block time where the next drand round is TEST_ROUND.
fn env_for(contract: &Addr) -> Env {
    let mut env = mock_env();
    env.block.time = Timestamp::from_seconds(GENESIS + (TEST_ROUND - 2) * 3);
    env.contract.address = contract.clone();
    env
}

/// `WasmMsg::Execute` payloads addressed to `target`.
fn calls_to<T>(messages: &[SubMsg<T>], target: &Addr) -> Vec<Binary> {
    messages
        .iter()
        .filter_map(|sub| match &sub.msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr, msg, ..
            }) if contract_addr == target.as_str() => Some(msg.clone()),
            _ => None,
        })
        .collect()
}

fn count_custom(res: &StoreResponse) -> usize {
    res.messages
        .iter()
        .filter(|sub| matches!(sub.msg, CosmosMsg::Custom(_)))
        .count()
}

fn event_count<T>(res: &Response<T>, ty: &str) -> usize {
    res.events.iter().filter(|e| e.ty == ty).count()
}

/// Five contracts wired together the way they are deployed.
struct Chain {
    store: TestDeps,
    coordinator: TestDeps,
    feed: TestDeps,
    xp: TestDeps,
    items: TestDeps,
    store_addr: Addr,
    coordinator_addr: Addr,
    feed_addr: Addr,
    xp_addr: Addr,
    items_addr: Addr,
}

impl Chain {
    fn new() -> Self {
        let mut chain = Chain {
            store: mock_dependencies(),
            coordinator: mock_dependencies(),
            feed: mock_dependencies(),
            xp: mock_dependencies(),
            items: mock_dependencies(),
            store_addr: addr("pack_store"),
            coordinator_addr: addr("coordinator"),
            feed_addr: addr("loot_feed"),
            xp_addr: addr("xp_module"),
            items_addr: addr("item_module"),
        };
        let admin = message_info(&addr("admin"), &[]);

        // 1 LOOT = 2.00 USD, 8 decimals
        lootpack_price_feed::contract::instantiate(
            chain.feed.as_mut(),
            env_for(&chain.feed_addr),
            admin.clone(),
            lootpack_price_feed::msg::InstantiateMsg {
                operators: vec![addr("feed_operator").to_string()],
                decimals: 8,
                description: "LOOT / USD".to_string(),
                initial_answer: Some(Uint128::new(200_000_000)),
            },
        )
        .unwrap();

        lootpack_xp_module::contract::instantiate(
            chain.xp.as_mut(),
            env_for(&chain.xp_addr),
            admin.clone(),
            lootpack_xp_module::msg::InstantiateMsg {
                minters: vec![chain.store_addr.to_string()],
            },
        )
        .unwrap();

        lootpack_item_module::contract::instantiate(
            chain.items.as_mut(),
            env_for(&chain.items_addr),
            admin.clone(),
            lootpack_item_module::msg::InstantiateMsg {
                minters: vec![chain.store_addr.to_string()],
            },
        )
        .unwrap();

        lootpack_randomness_coordinator::contract::instantiate(
            chain.coordinator.as_mut(),
            env_for(&chain.coordinator_addr),
            admin.clone(),
            coordinator_msg::InstantiateMsg {
                operators: vec![addr("drand_operator").to_string()],
                quicknet_pubkey_hex: lootpack_randomness_coordinator::verify::QUICKNET_PK_HEX
                    .to_string(),
                chain_hash: CHAIN_HASH.to_string(),
                genesis_time: GENESIS,
                period_seconds: 3,
                max_words: None,
            },
        )
        .unwrap();
        let owner = message_info(&addr("subscription_owner"), &[]);
        chain
            .execute_coordinator(owner.clone(), coordinator_msg::ExecuteMsg::CreateSubscription {})
            .unwrap();
        chain
            .execute_coordinator(
                owner,
                coordinator_msg::ExecuteMsg::AddConsumer {
                    subscription_id: 1,
                    consumer: chain.store_addr.to_string(),
                },
            )
            .unwrap();

        lootpack_pack_store::contract::instantiate(
            chain.store.as_mut(),
            env_for(&chain.store_addr),
            admin.clone(),
            store_msg::InstantiateMsg {
                admin: None,
                xp_module: chain.xp_addr.to_string(),
                item_module: chain.items_addr.to_string(),
                reward_subdenom: "loot".to_string(),
                reward_currency: store_msg::RewardCurrencyMsg {
                    symbol: "LOOT".to_string(),
                    decimals: 18,
                    feed: Some(chain.feed_addr.to_string()),
                },
                max_price_age_seconds: 3600,
                randomness: store_msg::RandomnessMsg {
                    coordinator: chain.coordinator_addr.to_string(),
                    key_hash: CHAIN_HASH.to_string(),
                    subscription_id: 1,
                },
            },
        )
        .unwrap();

        chain
            .execute_store(
                admin,
                store_msg::ExecuteMsg::UpsertPack {
                    name: "GOLD".to_string(),
                    price_usd: Uint128::new(10_000_000),
                    weights: vec![30, 70, 100],
                    reward_types: vec![RewardType::Xp, RewardType::Loot, RewardType::Nft],
                    values: vec![Uint128::new(100), Uint128::new(50 * LOOT), Uint128::one()],
                },
            )
            .unwrap();

        chain.relay_feed();
        chain
    }

    fn loot_denom(&self) -> String {
        format!("factory/{}/loot", self.store_addr)
    }

    fn execute_store(
        &mut self,
        info: cosmwasm_std::MessageInfo,
        msg: store_msg::ExecuteMsg,
    ) -> Result<StoreResponse, lootpack_pack_store::ContractError> {
        lootpack_pack_store::contract::execute(
            self.store.as_mut(),
            env_for(&self.store_addr),
            info,
            msg,
        )
    }

    fn execute_coordinator(
        &mut self,
        info: cosmwasm_std::MessageInfo,
        msg: coordinator_msg::ExecuteMsg,
    ) -> Result<Response, lootpack_randomness_coordinator::ContractError> {
        lootpack_randomness_coordinator::contract::execute(
            self.coordinator.as_mut(),
            env_for(&self.coordinator_addr),
            info,
            msg,
        )
    }

    /// Answer the store's feed queries with the feed contract's latest round.
    fn relay_feed(&mut self) {
        let answer = lootpack_price_feed::contract::query(
            self.feed.as_ref(),
            env_for(&self.feed_addr),
            lootpack_price_feed::msg::QueryMsg::LatestRoundData {},
        )
        .unwrap();
        let feed = self.feed_addr.to_string();
        self.store.querier.update_wasm(move |query| match query {
            WasmQuery::Smart { contract_addr, msg } if *contract_addr == feed => {
                // The store must ask in a shape the feed understands
                let parsed: Result<lootpack_price_feed::msg::QueryMsg, _> = from_json(msg);
                match parsed {
                    Ok(_) => SystemResult::Ok(ContractResult::Ok(answer.clone())),
                    Err(e) => SystemResult::Ok(ContractResult::Err(e.to_string())),
                }
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: "unknown contract".to_string(),
            }),
        });
    }

    fn buy(
        &mut self,
        pack: &str,
        unit_count: u32,
        paid: u128,
    ) -> Result<StoreResponse, lootpack_pack_store::ContractError> {
        let info = message_info(&addr("buyer"), &coins(paid, self.loot_denom()));
        self.execute_store(
            info,
            store_msg::ExecuteMsg::Purchase {
                pack_name: pack.to_string(),
                unit_count,
                currency: "LOOT".to_string(),
            },
        )
    }

    /// Replay the store's randomness request on the coordinator.
    fn forward_request(&mut self, res: &StoreResponse) -> String {
        let calls = calls_to(&res.messages, &self.coordinator_addr);
        assert_eq!(calls.len(), 1);
        let request: coordinator_msg::ExecuteMsg = from_json(&calls[0]).unwrap();
        let info = message_info(&self.store_addr, &[]);
        let res = self.execute_coordinator(info, request).unwrap();
        res.attributes
            .iter()
            .find(|a| a.key == "request_id")
            .map(|a| a.value.clone())
            .unwrap()
    }

    fn submit_beacon(&mut self) {
        let info = message_info(&addr("drand_operator"), &[]);
        self.execute_coordinator(
            info,
            coordinator_msg::ExecuteMsg::SubmitBeacon {
                round: TEST_ROUND,
                signature_hex: TEST_SIG_HEX.to_string(),
            },
        )
        .unwrap();
    }

    /// Fulfill on the coordinator and deliver its callback to the store.
    fn fulfill(
        &mut self,
        request_id: &str,
    ) -> Result<StoreResponse, lootpack_pack_store::ContractError> {
        let keeper = message_info(&addr("keeper"), &[]);
        let res = self
            .execute_coordinator(
                keeper,
                coordinator_msg::ExecuteMsg::FulfillRandomness {
                    request_id: request_id.to_string(),
                },
            )
            .unwrap();
        let callbacks = calls_to(&res.messages, &self.store_addr);
        assert_eq!(callbacks.len(), 1);
        self.deliver(&callbacks[0])
    }

    fn deliver(
        &mut self,
        callback: &Binary,
    ) -> Result<StoreResponse, lootpack_pack_store::ContractError> {
        let msg: store_msg::ExecuteMsg = from_json(callback).unwrap();
        let info = message_info(&self.coordinator_addr, &[]);
        self.execute_store(info, msg)
    }

    /// Run the `GrantRewards` self-call and its XP and item sink messages. A
    /// failure in any of them is reported back through the store's reply entry point.
    fn grant(&mut self, res: &StoreResponse) -> Option<StoreResponse> {
        let sub = res
            .messages
            .iter()
            .find(|sub| sub.id == lootpack_pack_store::execute::GRANT_REPLY_ID)
            .unwrap()
            .clone();
        let grant_msg = calls_to(&[sub.clone()], &self.store_addr).remove(0);
        let msg: store_msg::ExecuteMsg = from_json(&grant_msg).unwrap();
        let info = message_info(&self.store_addr, &[]);

        let outcome = self.execute_store(info, msg).map_err(|e| e.to_string());
        let outcome = outcome.and_then(|grant| {
            for call in calls_to(&grant.messages, &self.xp_addr) {
                let add: lootpack_xp_module::msg::ExecuteMsg = from_json(&call).unwrap();
                lootpack_xp_module::contract::execute(
                    self.xp.as_mut(),
                    env_for(&self.xp_addr),
                    message_info(&self.store_addr, &[]),
                    add,
                )
                .map_err(|e| e.to_string())?;
            }
            for call in calls_to(&grant.messages, &self.items_addr) {
                let mint: lootpack_item_module::msg::ExecuteMsg = from_json(&call).unwrap();
                lootpack_item_module::contract::execute(
                    self.items.as_mut(),
                    env_for(&self.items_addr),
                    message_info(&self.store_addr, &[]),
                    mint,
                )
                .map_err(|e| e.to_string())?;
            }
            Ok(grant)
        });

        match outcome {
            Ok(grant) => Some(grant),
            Err(reason) => {
                lootpack_pack_store::contract::reply(
                    self.store.as_mut(),
                    env_for(&self.store_addr),
                    Reply {
                        id: sub.id,
                        payload: sub.payload.clone(),
                        gas_used: 0,
                        result: SubMsgResult::Err(reason),
                    },
                )
                .unwrap();
                None
            }
        }
    }

    fn store_query<T: serde::de::DeserializeOwned>(&self, msg: store_msg::QueryMsg) -> T {
        let bin = lootpack_pack_store::contract::query(
            self.store.as_ref(),
            env_for(&self.store_addr),
            msg,
        )
        .unwrap();
        from_json(bin).unwrap()
    }

    fn purchase(&self, request_id: &str) -> Purchase {
        self.store_query(store_msg::QueryMsg::Purchase {
            request_id: request_id.to_string(),
        })
    }

    fn xp_of(&self, who: &Addr) -> Uint128 {
        let bin = lootpack_xp_module::contract::query(
            self.xp.as_ref(),
            env_for(&self.xp_addr),
            lootpack_xp_module::msg::QueryMsg::Xp {
                address: who.to_string(),
            },
        )
        .unwrap();
        let res: lootpack_xp_module::msg::XpResponse = from_json(bin).unwrap();
        res.xp
    }

    fn items_of(&self, who: &Addr) -> Vec<lootpack_item_module::state::ItemRecord> {
        let bin = lootpack_item_module::contract::query(
            self.items.as_ref(),
            env_for(&self.items_addr),
            lootpack_item_module::msg::QueryMsg::ItemsByOwner {
                owner: who.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
        let res: lootpack_item_module::msg::ItemsResponse = from_json(bin).unwrap();
        res.items
    }

    fn coordinator_request(&self, request_id: &str) -> RandomnessRequest {
        let bin = lootpack_randomness_coordinator::contract::query(
            self.coordinator.as_ref(),
            env_for(&self.coordinator_addr),
            coordinator_msg::QueryMsg::Request {
                request_id: request_id.to_string(),
            },
        )
        .unwrap();
        let res: Option<RandomnessRequest> = from_json(bin).unwrap();
        res.unwrap()
    }

    fn beacon_randomness(&self) -> Vec<u8> {
        let bin = lootpack_randomness_coordinator::contract::query(
            self.coordinator.as_ref(),
            env_for(&self.coordinator_addr),
            coordinator_msg::QueryMsg::Beacon { round: TEST_ROUND },
        )
        .unwrap();
        let beacon: Option<StoredBeacon> = from_json(bin).unwrap();
        beacon.unwrap().randomness
    }
}

// ─── Tests ───

#[test]
fn test_purchase_to_reward_flow() {
    let mut chain = Chain::new();

    // 3 units at 5 LOOT, 5% volume + 10% reward currency discount = 12.75 LOOT
    let res = chain.buy("GOLD", 3, 15 * LOOT).unwrap();
    assert_eq!(
        res.messages[0].msg,
        CosmosMsg::Bank(BankMsg::Send {
            to_address: addr("buyer").to_string(),
            amount: coins(2 * LOOT + LOOT / 4, chain.loot_denom()),
        })
    );

    let request_id = chain.forward_request(&res);
    assert_eq!(request_id, compute_request_id(chain.store_addr.as_str(), 0));
    assert_eq!(
        chain.coordinator_request(&request_id).target_round,
        TEST_ROUND
    );

    chain.submit_beacon();
    let res = chain.fulfill(&request_id).unwrap();
    assert_eq!(
        chain.purchase(&request_id).status,
        PurchaseStatus::Fulfilled
    );
    assert_eq!(
        chain.coordinator_request(&request_id).status,
        RequestStatus::Fulfilled
    );

    // Outcomes follow from the beacon alone
    let words = derive_words(&chain.beacon_randomness(), &request_id, 3);
    let pack = chain.purchase(&request_id).pack;
    let expected: Vec<RewardType> = words
        .iter()
        .map(|w| {
            lootpack_pack_store::selector::select(*w, &pack.tiers)
                .unwrap()
                .reward_type
        })
        .collect();

    let grant = chain.grant(&res).unwrap();
    assert_eq!(event_count(&grant, "lootpack_reward_granted"), 3);

    let xp_units = expected.iter().filter(|t| **t == RewardType::Xp).count() as u128;
    let loot_units = expected.iter().filter(|t| **t == RewardType::Loot).count();
    let nft_units = expected.iter().filter(|t| **t == RewardType::Nft).count();
    assert_eq!(chain.xp_of(&addr("buyer")), Uint128::new(100 * xp_units));
    assert_eq!(count_custom(&grant), loot_units);
    let items = chain.items_of(&addr("buyer"));
    assert_eq!(items.len(), nft_units);
    assert!(items.iter().all(|item| item.kind == Uint128::one()));

    let stats: Stats = chain.store_query(store_msg::QueryMsg::Stats {});
    assert_eq!(stats.purchases, 1);
    assert_eq!(stats.units_sold, 3);
    assert_eq!(stats.open_requests, 0);
    assert_eq!(stats.fulfilled, 1);
}

#[test]
fn test_duplicate_delivery_is_rejected() {
    let mut chain = Chain::new();
    let res = chain.buy("GOLD", 1, 5 * LOOT).unwrap();
    let request_id = chain.forward_request(&res);
    chain.submit_beacon();
    chain.fulfill(&request_id).unwrap();

    // Coordinator delivers at most once
    let err = chain
        .execute_coordinator(
            message_info(&addr("keeper"), &[]),
            coordinator_msg::ExecuteMsg::FulfillRandomness {
                request_id: request_id.clone(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        lootpack_randomness_coordinator::ContractError::RequestAlreadyFulfilled { .. }
    ));

    // A forged replay of the callback is refused by the store as well
    let replay = cosmwasm_std::to_json_binary(&store_msg::ExecuteMsg::ReceiveRandomness {
        request_id,
        random_words: vec![Uint128::new(1)],
    })
    .unwrap();
    let err = chain.deliver(&replay).unwrap_err();
    assert!(matches!(
        err,
        lootpack_pack_store::ContractError::UnknownRequest { .. }
    ));
}

#[test]
fn test_out_of_order_fulfillment() {
    let mut chain = Chain::new();

    let first = chain.buy("GOLD", 1, 5 * LOOT).unwrap();
    let first_id = chain.forward_request(&first);
    let second = chain.buy("GOLD", 2, 10 * LOOT).unwrap();
    let second_id = chain.forward_request(&second);
    assert_ne!(first_id, second_id);

    chain.submit_beacon();
    let res = chain.fulfill(&second_id).unwrap();
    chain.grant(&res).unwrap();
    assert_eq!(chain.purchase(&first_id).status, PurchaseStatus::Pending);

    let res = chain.fulfill(&first_id).unwrap();
    chain.grant(&res).unwrap();
    assert_eq!(chain.purchase(&first_id).status, PurchaseStatus::Fulfilled);
    assert_eq!(chain.purchase(&second_id).status, PurchaseStatus::Fulfilled);

    let stats: Stats = chain.store_query(store_msg::QueryMsg::Stats {});
    assert_eq!(stats.open_requests, 0);
    assert_eq!(stats.fulfilled, 2);
}

#[test]
fn test_failed_sink_marks_purchase_failed() {
    let mut chain = Chain::new();
    let admin = message_info(&addr("admin"), &[]);
    chain
        .execute_store(
            admin.clone(),
            store_msg::ExecuteMsg::UpsertPack {
                name: "XP".to_string(),
                price_usd: Uint128::new(1_000_000),
                weights: vec![100],
                reward_types: vec![RewardType::Xp],
                values: vec![Uint128::new(25)],
            },
        )
        .unwrap();

    // Store loses its minter rights, so AddXp reverts
    lootpack_xp_module::contract::execute(
        chain.xp.as_mut(),
        env_for(&chain.xp_addr),
        admin,
        lootpack_xp_module::msg::ExecuteMsg::UpdateMinters {
            add: vec![],
            remove: vec![chain.store_addr.to_string()],
        },
    )
    .unwrap();

    let res = chain.buy("XP", 1, LOOT).unwrap();
    let request_id = chain.forward_request(&res);
    chain.submit_beacon();
    let res = chain.fulfill(&request_id).unwrap();
    assert!(chain.grant(&res).is_none());

    let purchase = chain.purchase(&request_id);
    assert_eq!(purchase.status, PurchaseStatus::Failed);
    assert!(purchase.failure.unwrap().contains("only minters"));
    assert_eq!(chain.xp_of(&addr("buyer")), Uint128::zero());

    let stats: Stats = chain.store_query(store_msg::QueryMsg::Stats {});
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.fulfilled, 0);
}

#[test]
fn test_feed_update_reprices_quotes() {
    let mut chain = Chain::new();

    lootpack_price_feed::contract::execute(
        chain.feed.as_mut(),
        env_for(&chain.feed_addr),
        message_info(&addr("feed_operator"), &[]),
        lootpack_price_feed::msg::ExecuteMsg::SubmitPrice {
            answer: Uint128::new(400_000_000),
        },
    )
    .unwrap();
    chain.relay_feed();

    // 10 USD at 4 USD per LOOT, 10% reward currency discount
    let quote: store_msg::QuoteResponse = chain.store_query(store_msg::QueryMsg::Quote {
        pack_name: "GOLD".to_string(),
        unit_count: 1,
        currency: "LOOT".to_string(),
    });
    assert_eq!(quote.unit_price, Uint128::new(2 * LOOT + LOOT / 2));
    assert_eq!(quote.final_amount, Uint128::new(2 * LOOT + LOOT / 4));
    assert_eq!(quote.rate, Some(Uint128::new(400_000_000)));
}

#[test]
fn test_stale_feed_blocks_purchase() {
    let mut chain = Chain::new();

    let mut later = env_for(&chain.store_addr);
    later.block.time = later.block.time.plus_seconds(3601);
    let funds = coins(5 * LOOT, chain.loot_denom());
    let err = lootpack_pack_store::contract::execute(
        chain.store.as_mut(),
        later,
        message_info(&addr("buyer"), &funds),
        store_msg::ExecuteMsg::Purchase {
            pack_name: "GOLD".to_string(),
            unit_count: 1,
            currency: "LOOT".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        lootpack_pack_store::ContractError::InvalidPriceFeed { .. }
    ));
}

#[test]
fn test_unregistered_consumer_cannot_request() {
    let mut chain = Chain::new();
    let res = chain.buy("GOLD", 1, 5 * LOOT).unwrap();
    let calls = calls_to(&res.messages, &chain.coordinator_addr);
    let request: coordinator_msg::ExecuteMsg = from_json(&calls[0]).unwrap();

    let err = chain
        .execute_coordinator(message_info(&addr("impostor"), &[]), request)
        .unwrap_err();
    assert!(matches!(
        err,
        lootpack_randomness_coordinator::ContractError::InvalidConsumer { .. }
    ));
}

#[test]
fn test_nft_draw_mints_an_item() {
    let mut chain = Chain::new();
    chain
        .execute_store(
            message_info(&addr("admin"), &[]),
            store_msg::ExecuteMsg::UpsertPack {
                name: "RELIC".to_string(),
                price_usd: Uint128::new(2_000_000),
                weights: vec![100],
                reward_types: vec![RewardType::Nft],
                values: vec![Uint128::new(42)],
            },
        )
        .unwrap();

    // 2 x 1 LOOT, 10% reward currency discount
    let res = chain.buy("RELIC", 2, 2 * LOOT).unwrap();
    let request_id = chain.forward_request(&res);
    chain.submit_beacon();
    let res = chain.fulfill(&request_id).unwrap();
    let grant = chain.grant(&res).unwrap();

    // No token factory traffic and no funds attached for items
    assert_eq!(count_custom(&grant), 0);
    assert!(grant.messages.iter().all(|sub| match &sub.msg {
        CosmosMsg::Wasm(WasmMsg::Execute { funds, .. }) => funds.is_empty(),
        _ => false,
    }));

    let items = chain.items_of(&addr("buyer"));
    let ids: Vec<u64> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(items.iter().all(|item| item.kind == Uint128::new(42)));
    assert_eq!(
        chain.purchase(&request_id).status,
        PurchaseStatus::Fulfilled
    );
}

#[test]
fn test_zero_value_tier_never_sells() {
    let mut chain = Chain::new();
    let err = chain
        .execute_store(
            message_info(&addr("admin"), &[]),
            store_msg::ExecuteMsg::UpsertPack {
                name: "ZERO".to_string(),
                price_usd: Uint128::new(1_000_000),
                weights: vec![100],
                reward_types: vec![RewardType::Xp],
                values: vec![Uint128::zero()],
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        lootpack_pack_store::ContractError::MalformedWeights { .. }
    ));

    let err = chain.buy("ZERO", 1, LOOT).unwrap_err();
    assert!(matches!(
        err,
        lootpack_pack_store::ContractError::PackNotFound { .. }
    ));
}
