use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};

use lnt_msg::market::{ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::{
    actions::{execute as e, instantiate::try_instantiate, query as q},
    error::ContractError,
};

/// Creates a new contract with the specified parameters packed in the "msg" variable
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes all the execute functions available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SwapExactInput {
            token_out,
            min_amount_out,
            deadline,
            recipient,
        } => e::try_swap_exact_input(
            deps,
            env,
            info,
            token_out,
            min_amount_out,
            deadline,
            recipient,
        ),
    }
}

/// Exposes all the queries available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::SimulateSwap { amount_in } => {
            to_json_binary(&q::query_simulate_swap(deps, env, amount_in)?)
        }
    }
}
