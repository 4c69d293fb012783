use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdError, StdResult, Storage, Uint128,
    WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use lnt_msg::{
    utils::has_unique_elements,
    vault::{DepositInfo, NftKind, SwapSettings, VaultSettings, VestingSchedule},
};

use crate::{
    config::{MIN_EPOCH_DURATION, PARAM_BOUNDS, PARAM_D, PARAM_F1, PARAM_F2},
    error::ContractError,
    math::vesting::vesting_transfer,
    state::PARAMS,
};

/// Fee and curve parameters read once per operation
pub struct ParamSet {
    pub f1: Uint128,
    pub f2: Uint128,
    pub decay_period: u64,
}

/// (default, min, max)
pub fn param_bounds(key: &str) -> Result<(u128, u128, u128), ContractError> {
    PARAM_BOUNDS
        .iter()
        .find(|(k, ..)| *k == key)
        .map(|(_, default, min, max)| (*default, *min, *max))
        .ok_or_else(|| ContractError::UnknownParam(key.to_string()))
}

pub fn param_value(storage: &dyn Storage, key: &str) -> Result<Uint128, ContractError> {
    let (default, ..) = param_bounds(key)?;
    Ok(PARAMS
        .may_load(storage, key)?
        .unwrap_or(Uint128::new(default)))
}

pub fn load_params(storage: &dyn Storage) -> Result<ParamSet, ContractError> {
    Ok(ParamSet {
        f1: param_value(storage, PARAM_F1)?,
        f2: param_value(storage, PARAM_F2)?,
        decay_period: param_value(storage, PARAM_D)?.u128() as u64,
    })
}

pub fn validate_schedules(
    nft_kind: &NftKind,
    schedules: &[VestingSchedule],
) -> Result<(), ContractError> {
    let valid_kind = match nft_kind {
        NftKind::Single => schedules.len() == 1 && schedules[0].token_id.is_none(),
        NftKind::Multi => {
            !schedules.is_empty()
                && schedules.iter().all(|s| s.token_id.is_some())
                && has_unique_elements(schedules.iter().map(|s| &s.token_id))
        }
    };

    let valid_values = schedules.iter().all(|s| {
        s.vesting_duration > 0
            && s.weight > 0
            && !s.amount_per_unit.is_zero()
            && s.vesting_start_time.checked_add(s.vesting_duration).is_some()
    });

    if !valid_kind || !valid_values {
        return Err(ContractError::InvalidVestingSchedule {});
    }

    Ok(())
}

pub fn validate_swap_settings(swap: &SwapSettings) -> Result<(), ContractError> {
    if swap.epoch_duration < MIN_EPOCH_DURATION {
        return Err(ContractError::InvalidEpochDuration(swap.epoch_duration));
    }
    if swap.payment_denom.is_empty() || swap.price.is_zero() || swap.payment_decimals > 18 {
        return Err(ContractError::InvalidSwapSettings {});
    }

    Ok(())
}

pub fn find_schedule<'a>(
    settings: &'a VaultSettings,
    nft_kind: &NftKind,
    token_id: &str,
) -> Result<&'a VestingSchedule, ContractError> {
    let schedule = match nft_kind {
        NftKind::Single => settings.vesting_schedules.first(),
        NftKind::Multi => settings
            .vesting_schedules
            .iter()
            .find(|s| s.token_id.as_deref() == Some(token_id)),
    };

    schedule.ok_or_else(|| ContractError::NoVestingSchedule(token_id.to_string()))
}

/// Staking weight of a deposit
pub fn deposit_weight(schedule: &VestingSchedule, deposit: &DepositInfo) -> StdResult<Uint128> {
    Ok(deposit.value.checked_mul(Uint128::from(schedule.weight))?)
}

/// Claim tokens (net, fee) for the deposit at `now` with `fee_rate`
pub fn deposit_vt_amount(
    schedule: &VestingSchedule,
    deposit: &DepositInfo,
    now: u64,
    fee_rate: Uint128,
) -> StdResult<(Uint128, Uint128)> {
    vesting_transfer(
        schedule.amount_per_unit,
        deposit.value,
        schedule.vesting_start_time,
        schedule.vesting_duration,
        now,
        fee_rate,
    )
}

pub fn mint_vt_msg(vt_token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: vt_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Burns from `owner`, who has to approve the vault beforehand
pub fn burn_vt_from_msg(vt_token: &Addr, owner: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: vt_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: owner.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

pub fn burn_vt_msg(vt_token: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: vt_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    }))
}

pub fn query_vt_balance(
    querier: &QuerierWrapper,
    vt_token: &Addr,
    address: &Addr,
) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        vt_token,
        &Cw20QueryMsg::Balance {
            address: address.to_string(),
        },
    )?;
    Ok(res.balance)
}

pub fn validate_limit(limit: Option<u32>, default: u32, max: u32) -> StdResult<usize> {
    let limit = limit.unwrap_or(default);
    if limit == 0 {
        return Err(StdError::generic_err("Limit must be positive"));
    }
    Ok(limit.min(max) as usize)
}
