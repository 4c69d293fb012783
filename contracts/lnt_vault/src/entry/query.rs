use cosmwasm_std::{Addr, Deps, Env, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use lnt_msg::vault::{
    CalcSwapResponse, CollectableYtResponse, Config, DepositInfo, EpochInfo, RedeemInfo,
    RewardOption, TimeWeightedInfo, VaultSettings, VtAmountResponse,
};

use crate::{
    config::{DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT},
    epoch::{current_epoch_id, preview_current_epoch},
    error::ContractError,
    helpers::{deposit_vt_amount, find_schedule, load_params, param_value, validate_limit},
    math::curve::{current_price, swap_output},
    rewards::{EpochRewardPool, ProportionalPool, RewardPool, TimeWeightedPool},
    state::{
        CONFIG, DEPOSITS, EPOCHS, OWNER, REDEEMS, SETTINGS, USER_DEPOSITS, VESTING_TOKEN,
        YT_BALANCES,
    },
};

fn to_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        err => StdError::generic_err(err.to_string()),
    }
}

/// query owner
pub fn query_owner(deps: Deps, _env: Env) -> StdResult<Addr> {
    OWNER
        .get(deps)?
        .ok_or_else(|| StdError::generic_err("Owner not set"))
}

/// query config
pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_settings(deps: Deps, _env: Env) -> StdResult<Option<VaultSettings>> {
    SETTINGS.may_load(deps.storage)
}

pub fn query_vesting_token(deps: Deps, _env: Env) -> StdResult<Option<String>> {
    VESTING_TOKEN.may_load(deps.storage)
}

pub fn query_param_value(deps: Deps, _env: Env, key: String) -> StdResult<Uint128> {
    param_value(deps.storage, &key).map_err(to_std)
}

pub fn query_deposit_info(deps: Deps, _env: Env, deposit_id: u64) -> StdResult<DepositInfo> {
    DEPOSITS.load(deps.storage, deposit_id)
}

/// deposits of `user` in id order
pub fn query_user_deposits(
    deps: Deps,
    _env: Env,
    user: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<DepositInfo>> {
    let user = deps.api.addr_validate(&user)?;
    let limit = validate_limit(limit, DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT)?;

    USER_DEPOSITS
        .prefix(&user)
        .keys(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|deposit_id| DEPOSITS.load(deps.storage, deposit_id?))
        .collect()
}

pub fn query_redeem_info(deps: Deps, _env: Env, deposit_id: u64) -> StdResult<RedeemInfo> {
    REDEEMS.load(deps.storage, deposit_id)
}

pub fn query_calc_claim_vt(deps: Deps, env: Env, deposit_id: u64) -> StdResult<VtAmountResponse> {
    let config = CONFIG.load(deps.storage)?;
    let settings = SETTINGS.load(deps.storage)?;
    let deposit = DEPOSITS.load(deps.storage, deposit_id)?;
    let schedule =
        find_schedule(&settings, &config.nft_kind, &deposit.token_id).map_err(to_std)?;
    let params = load_params(deps.storage).map_err(to_std)?;

    let (net, fee) = deposit_vt_amount(schedule, &deposit, env.block.time.seconds(), params.f1)?;
    Ok(VtAmountResponse { net, fee })
}

pub fn query_calc_redeem_vt(deps: Deps, env: Env, deposit_id: u64) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let settings = SETTINGS.load(deps.storage)?;
    let deposit = DEPOSITS.load(deps.storage, deposit_id)?;
    if !deposit.claimed {
        return Ok(Uint128::zero());
    }
    let schedule =
        find_schedule(&settings, &config.nft_kind, &deposit.token_id).map_err(to_std)?;

    let (net, _) = deposit_vt_amount(
        schedule,
        &deposit,
        env.block.time.seconds(),
        deposit.f1_on_claim,
    )?;
    Ok(net)
}

pub fn query_current_epoch_id(deps: Deps, _env: Env) -> StdResult<u64> {
    current_epoch_id(deps.storage)
}

pub fn query_epoch_info(deps: Deps, _env: Env, epoch_id: u64) -> StdResult<EpochInfo> {
    EPOCHS.load(deps.storage, epoch_id)
}

pub fn query_yt_balance(deps: Deps, _env: Env, epoch_id: u64, user: String) -> StdResult<Uint128> {
    let user = deps.api.addr_validate(&user)?;
    Ok(YT_BALANCES
        .may_load(deps.storage, (epoch_id, &user))?
        .unwrap_or_default())
}

/// Swap preview against the epoch a swap sent now would hit
pub fn query_calc_swap(
    deps: Deps,
    env: Env,
    payment_amount: Uint128,
) -> StdResult<CalcSwapResponse> {
    let now = env.block.time.seconds();
    let Some(epoch) = preview_current_epoch(deps.storage, now)? else {
        return Ok(CalcSwapResponse {
            x_updated: Uint128::zero(),
            yt_amount: Uint128::zero(),
        });
    };
    let params = load_params(deps.storage).map_err(to_std)?;

    let (x_updated, yt_amount) = swap_output(
        epoch.x,
        epoch.k0,
        payment_amount,
        params.decay_period,
        now - epoch.start_time,
    )?;
    Ok(CalcSwapResponse {
        x_updated,
        yt_amount,
    })
}

pub fn query_y(deps: Deps, env: Env) -> StdResult<Uint128> {
    match preview_current_epoch(deps.storage, env.block.time.seconds())? {
        Some(epoch) => current_price(epoch.x, epoch.k0),
        None => Ok(Uint128::zero()),
    }
}

pub fn query_staking_balance(deps: Deps, _env: Env, user: String) -> StdResult<Uint128> {
    let user = deps.api.addr_validate(&user)?;
    ProportionalPool::nft_staking().balance_of(deps.storage, &user)
}

pub fn query_staking_total_supply(deps: Deps, _env: Env) -> StdResult<Uint128> {
    ProportionalPool::nft_staking().total_supply(deps.storage)
}

pub fn query_staking_earned(
    deps: Deps,
    _env: Env,
    user: String,
    denom: String,
) -> StdResult<Uint128> {
    let user = deps.api.addr_validate(&user)?;
    ProportionalPool::nft_staking().earned(deps.storage, &user, &denom)
}

pub fn query_yt_pool_balance(
    deps: Deps,
    _env: Env,
    epoch_id: u64,
    opt: RewardOption,
    user: String,
) -> StdResult<Uint128> {
    let user = deps.api.addr_validate(&user)?;
    EpochRewardPool::load(deps.storage, epoch_id, &opt)?.balance_of(deps.storage, &user)
}

pub fn query_yt_pool_total_supply(
    deps: Deps,
    _env: Env,
    epoch_id: u64,
    opt: RewardOption,
) -> StdResult<Uint128> {
    EpochRewardPool::load(deps.storage, epoch_id, &opt)?.total_supply(deps.storage)
}

pub fn query_yt_pool_earned(
    deps: Deps,
    _env: Env,
    epoch_id: u64,
    opt: RewardOption,
    user: String,
    denom: String,
) -> StdResult<Uint128> {
    let user = deps.api.addr_validate(&user)?;
    EpochRewardPool::load(deps.storage, epoch_id, &opt)?.earned(deps.storage, &user, &denom)
}

pub fn query_yt_pool_reward_tokens(
    deps: Deps,
    _env: Env,
    epoch_id: u64,
    opt: RewardOption,
) -> StdResult<Vec<String>> {
    EpochRewardPool::load(deps.storage, epoch_id, &opt)?.reward_tokens(deps.storage)
}

pub fn query_collectable_yt(
    deps: Deps,
    env: Env,
    epoch_id: u64,
    user: String,
) -> StdResult<CollectableYtResponse> {
    let user = deps.api.addr_validate(&user)?;
    let (effective_time, amount) = TimeWeightedPool::for_epoch(deps.storage, epoch_id)?
        .collectable_yt(deps.storage, env.block.time.seconds(), &user)?;
    Ok(CollectableYtResponse {
        effective_time,
        amount,
    })
}

pub fn query_time_weighted_info(
    deps: Deps,
    _env: Env,
    epoch_id: u64,
    user: String,
) -> StdResult<TimeWeightedInfo> {
    let user = deps.api.addr_validate(&user)?;
    let pool = TimeWeightedPool::for_epoch(deps.storage, epoch_id)?;
    Ok(TimeWeightedInfo {
        yt_sum: pool.yt_sum(deps.storage, &user)?,
        last_collect_time: pool.last_collect_time(deps.storage, &user)?,
        balance: pool.balance_of(deps.storage, &user)?,
        epoch_end_time: pool.epoch_end(),
    })
}
