use cosmwasm_std::{Addr, Deps, Env, QuerierWrapper, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};

use crate::state::{DENOM, FEE_PER_MILLE, TOKEN};

/// x * y = k output for `amount_in` against reserves that do not include it yet
pub fn calc_output(
    reserve_in: Uint128,
    reserve_out: Uint128,
    amount_in: Uint128,
) -> StdResult<Uint128> {
    let amount_in = amount_in.multiply_ratio(1_000 - FEE_PER_MILLE, 1_000u128);
    if amount_in.is_zero() || reserve_out.is_zero() {
        return Ok(Uint128::zero());
    }

    Ok(reserve_out.multiply_ratio(amount_in, reserve_in.checked_add(amount_in)?))
}

pub fn query_token_reserve(
    querier: &QuerierWrapper,
    token: &Addr,
    address: &Addr,
) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: address.to_string(),
        },
    )?;
    Ok(res.balance)
}

pub fn query_simulate_swap(deps: Deps, env: Env, amount_in: Uint128) -> StdResult<Uint128> {
    let token = TOKEN.load(deps.storage)?;
    let denom = DENOM.load(deps.storage)?;

    let reserve_in = deps
        .querier
        .query_balance(&env.contract.address, denom)?
        .amount;
    let reserve_out = query_token_reserve(&deps.querier, &token, &env.contract.address)?;

    calc_output(reserve_in, reserve_out, amount_in)
}
