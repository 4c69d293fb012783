use cosmwasm_std::{StdResult, Uint128, Uint256};

use crate::config::SETTINGS_BASE;

/// Value still vesting for `units` at `reference_time`, split into (net, fee).
///
/// `gross = amount_per_unit * units * remaining / vesting_duration` where `remaining`
/// is the vesting time left, clamped to `[0, vesting_duration]`. The fee is floored,
/// the remainder of the division stays with the user.
pub fn vesting_transfer(
    amount_per_unit: Uint128,
    units: Uint128,
    vesting_start: u64,
    vesting_duration: u64,
    reference_time: u64,
    fee_rate: Uint128,
) -> StdResult<(Uint128, Uint128)> {
    let remaining = vesting_start
        .saturating_add(vesting_duration)
        .saturating_sub(reference_time)
        .min(vesting_duration);

    let gross = Uint256::from(amount_per_unit)
        .checked_mul(Uint256::from(units))?
        .checked_mul(Uint256::from(remaining))?
        .checked_div(Uint256::from(vesting_duration))?;
    let gross = Uint128::try_from(gross)?;

    let fee = gross.multiply_ratio(fee_rate, SETTINGS_BASE);
    let net = gross.checked_sub(fee)?;

    Ok((net, fee))
}
