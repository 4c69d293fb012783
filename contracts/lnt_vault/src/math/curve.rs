//! Decaying constant product curve selling the yield tokens of one epoch.
//!
//! `k0 = X0 * Y0` with `Y0 = X0 * P` is fixed for the whole epoch. A swap of net payment
//! `n` at `dt` seconds after epoch start moves the curve to
//! `X' = X * k0 / (k0 + X * n * (1 + dt / D)^2)` and mints `X - X'` yield tokens.
//!
//! Scales: `X` has `YT_DECIMALS`, `P` and the decay factor have `SETTINGS_DECIMALS`,
//! so `k0` carries yield token + payment + settings decimals.

use cosmwasm_std::{StdResult, Uint128, Uint256, Uint512};

use crate::config::{SETTINGS_BASE, YT_DECIMALS};

/// `(1 + elapsed / decay_period)^2` with `SETTINGS_DECIMALS`
pub fn decay_factor(decay_period: u64, elapsed: u64) -> StdResult<Uint256> {
    let d = Uint256::from(decay_period);
    let t = d.checked_add(Uint256::from(elapsed))?;

    Ok(t.checked_mul(t)?
        .checked_mul(Uint256::from(SETTINGS_BASE))?
        .checked_div(d.checked_mul(d)?)?)
}

pub fn initial_k0(x0: Uint128, price: Uint128, payment_decimals: u8) -> StdResult<Uint256> {
    let x0 = to_u512(x0);
    let k0 = x0
        .checked_mul(x0)?
        .checked_mul(to_u512(price))?
        .checked_mul(Uint512::from(10u128).checked_pow(payment_decimals as u32)?)?
        .checked_div(Uint512::from(10u128).checked_pow(YT_DECIMALS)?)?;

    Ok(Uint256::try_from(k0)?)
}

/// Returns (X', yield tokens out). Output grows with `elapsed` for the same payment.
pub fn swap_output(
    x: Uint128,
    k0: Uint256,
    net_payment: Uint128,
    decay_period: u64,
    elapsed: u64,
) -> StdResult<(Uint128, Uint128)> {
    if x.is_zero() || k0.is_zero() || net_payment.is_zero() {
        return Ok((x, Uint128::zero()));
    }

    let decay = Uint512::from(decay_factor(decay_period, elapsed)?);
    let k0 = Uint512::from(k0);
    let x512 = to_u512(x);

    let denominator = k0.checked_add(
        x512.checked_mul(to_u512(net_payment))?
            .checked_mul(decay)?,
    )?;
    let x_updated = x512.checked_mul(k0)?.checked_div(denominator)?;
    let x_updated = Uint128::try_from(Uint256::try_from(x_updated)?)?;

    Ok((x_updated, x.checked_sub(x_updated)?))
}

/// Payment units per whole yield token at curve position `x`
pub fn current_price(x: Uint128, k0: Uint256) -> StdResult<Uint128> {
    if x.is_zero() {
        return Ok(Uint128::zero());
    }

    let y = k0
        .checked_div(Uint256::from(x))?
        .checked_div(Uint256::from(SETTINGS_BASE))?;

    Ok(Uint128::try_from(y)?)
}

fn to_u512(value: Uint128) -> Uint512 {
    Uint512::from(Uint256::from(value))
}
