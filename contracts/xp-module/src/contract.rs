use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{XpConfig, CONFIG, TOTAL_XP};

const CONTRACT_NAME: &str = "crates.io:lootpack-xp-module";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut minters = Vec::new();
    for minter in &msg.minters {
        minters.push(deps.api.addr_validate(minter)?);
    }

    CONFIG.save(
        deps.storage,
        &XpConfig {
            admin: info.sender.clone(),
            minters,
        },
    )?;
    TOTAL_XP.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "xp-module")
        .add_attribute("admin", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddXp { recipient, amount } => execute::add_xp(deps, info, recipient, amount),
        ExecuteMsg::UpdateMinters { add, remove } => {
            execute::update_minters(deps, info, add, remove)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Xp { address } => query::query_xp(deps, address),
        QueryMsg::TotalXp {} => query::query_total_xp(deps),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::XpResponse;
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi};

    fn setup_contract(deps: DepsMut) {
        let mock_api = MockApi::default();
        let admin = mock_api.addr_make("admin");
        let store = mock_api.addr_make("pack_store");
        let msg = InstantiateMsg {
            minters: vec![store.to_string()],
        };
        instantiate(deps, mock_env(), message_info(&admin, &[]), msg).unwrap();
    }

    fn xp_of(deps: Deps, address: &str) -> Uint128 {
        let res = query(
            deps,
            mock_env(),
            QueryMsg::Xp {
                address: address.to_string(),
            },
        )
        .unwrap();
        let xp: XpResponse = from_json(res).unwrap();
        xp.xp
    }

    #[test]
    fn test_add_xp_accumulates() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let store = deps.api.addr_make("pack_store");
        let player = deps.api.addr_make("player");
        for amount in [100u128, 250] {
            execute(
                deps.as_mut(),
                mock_env(),
                message_info(&store, &[]),
                ExecuteMsg::AddXp {
                    recipient: player.to_string(),
                    amount: Uint128::new(amount),
                },
            )
            .unwrap();
        }

        assert_eq!(xp_of(deps.as_ref(), player.as_str()), Uint128::new(350));
        let total: Uint128 =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::TotalXp {}).unwrap()).unwrap();
        assert_eq!(total, Uint128::new(350));
    }

    #[test]
    fn test_add_xp_rejections() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let player = deps.api.addr_make("player");
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&player, &[]),
            ExecuteMsg::AddXp {
                recipient: player.to_string(),
                amount: Uint128::new(1),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));

        let store = deps.api.addr_make("pack_store");
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&store, &[]),
            ExecuteMsg::AddXp {
                recipient: player.to_string(),
                amount: Uint128::zero(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::ZeroAmount));
    }

    #[test]
    fn test_update_minters() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let admin = deps.api.addr_make("admin");
        let store = deps.api.addr_make("pack_store");
        let store2 = deps.api.addr_make("pack_store2");
        execute(
            deps.as_mut(),
            mock_env(),
            message_info(&admin, &[]),
            ExecuteMsg::UpdateMinters {
                add: vec![store2.to_string()],
                remove: vec![store.to_string()],
            },
        )
        .unwrap();

        let config = CONFIG.load(deps.as_ref().storage).unwrap();
        assert_eq!(config.minters, vec![store2]);
    }
}
