use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use lnt_msg::market::InstantiateMsg;

use crate::{
    error::ContractError,
    state::{CONTRACT_NAME, DENOM, TOKEN},
};

const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn try_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    TOKEN.save(deps.storage, &deps.api.addr_validate(&msg.token)?)?;
    DENOM.save(deps.storage, &msg.denom)?;

    Ok(Response::new().add_attribute("action", "try_instantiate"))
}
