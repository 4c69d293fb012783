use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_utils::must_pay;

use crate::{
    actions::query::{calc_output, query_token_reserve},
    error::ContractError,
    state::{DENOM, TOKEN},
};

pub fn try_swap_exact_input(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_out: String,
    min_amount_out: Uint128,
    deadline: u64,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let token = TOKEN.load(deps.storage)?;
    let denom = DENOM.load(deps.storage)?;
    ensure_eq!(
        token_out,
        token.as_str(),
        ContractError::UnknownToken(token_out)
    );
    ensure!(
        env.block.time.seconds() <= deadline,
        ContractError::DeadlineExpired {}
    );
    let amount_in = must_pay(&info, &denom)?;

    // the attached coin is already in the balance
    let reserve_in = deps
        .querier
        .query_balance(&env.contract.address, &denom)?
        .amount
        .checked_sub(amount_in)?;
    let reserve_out = query_token_reserve(&deps.querier, &token, &env.contract.address)?;
    let amount_out = calc_output(reserve_in, reserve_out, amount_in)?;
    ensure!(
        !amount_out.is_zero() && amount_out >= min_amount_out,
        ContractError::SlippageExceeded {
            got: amount_out,
            expected: min_amount_out,
        }
    );

    let recipient = match recipient {
        Some(x) => deps.api.addr_validate(&x)?,
        None => info.sender,
    };

    Ok(Response::new()
        .add_attribute("action", "try_swap_exact_input")
        .add_attribute("amount_in", amount_in)
        .add_attribute("amount_out", amount_out)
        .add_message(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: amount_out,
            })?,
            funds: vec![],
        }))
}
