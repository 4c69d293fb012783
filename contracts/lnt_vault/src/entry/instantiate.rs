use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use crate::{
    config::{DEFAULT_LEADING_TIME, MAX_LEADING_TIME},
    error::ContractError,
    state::{CONFIG, CONTRACT_NAME, CONTRACT_VERSION, CURRENT_EPOCH_ID, DEPOSIT_COUNT, OWNER},
};
use lnt_msg::vault::{Config, InstantiateMsg};

pub fn try_instantiate(
    mut deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let leading_time = msg.leading_time.unwrap_or(DEFAULT_LEADING_TIME);
    ensure!(
        leading_time <= MAX_LEADING_TIME,
        ContractError::InvalidLeadingTime(leading_time)
    );
    ensure!(!msg.nft_class.is_empty(), ContractError::InvalidValue {});

    let market_router = msg
        .market_router
        .map(|router| deps.api.addr_validate(&router))
        .transpose()?;

    CONFIG.save(
        deps.storage,
        &Config {
            treasury: deps.api.addr_validate(&msg.treasury)?,
            nft_class: msg.nft_class,
            nft_kind: msg.nft_kind,
            leading_time,
            market_router,
        },
    )?;
    DEPOSIT_COUNT.save(deps.storage, &0)?;
    CURRENT_EPOCH_ID.save(deps.storage, &0)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    OWNER.set(deps.branch(), Some(owner))?;
    Ok(Response::new().add_attributes([("action", "instantiate lnt vault")]))
}
