use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use lnt_msg::vault::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

use crate::{
    entry::{
        execute::{
            _handle_callback, add_yt_rewards, buyback, claim_deposit, claim_redeem,
            claim_staking_rewards, claim_yt_rewards, collect_yt, deposit, deposit_t, initialize,
            initialize_t, re_initialize, redeem, redeem_t, start_epoch_1, swap, update_config,
            update_owner, update_param_value, withdraw_t,
        },
        instantiate::try_instantiate,
        migrate::migrate_contract,
        query::{
            query_calc_claim_vt, query_calc_redeem_vt, query_calc_swap, query_collectable_yt,
            query_config, query_current_epoch_id, query_deposit_info, query_epoch_info,
            query_owner, query_param_value, query_redeem_info, query_settings,
            query_staking_balance, query_staking_earned, query_staking_total_supply,
            query_time_weighted_info, query_user_deposits, query_vesting_token, query_y,
            query_yt_balance, query_yt_pool_balance, query_yt_pool_earned,
            query_yt_pool_reward_tokens, query_yt_pool_total_supply,
        },
    },
    epoch::check_rollover,
    error::ContractError,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes execute functions available in the contract.
///
/// A finished epoch is rolled over before any message is handled.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let epoch_events = check_rollover(deps.storage, env.block.time.seconds())?;

    let response = match msg {
        ExecuteMsg::UpdateOwner { owner } => update_owner(deps, env, info, owner),
        ExecuteMsg::UpdateConfig { config } => update_config(deps, env, info, config),
        ExecuteMsg::UpdateParamValue { key, value } => {
            update_param_value(deps, env, info, key, value)
        }
        ExecuteMsg::Initialize {
            vt_token,
            vesting_schedules,
            swap,
        } => initialize(deps, env, info, vt_token, vesting_schedules, swap),
        ExecuteMsg::ReInitialize { swap } => re_initialize(deps, env, info, swap),
        ExecuteMsg::StartEpoch1 {} => start_epoch_1(deps, env, info),
        ExecuteMsg::Deposit { token_id } => deposit(deps, env, info, token_id),
        ExecuteMsg::ClaimDeposit { deposit_id } => claim_deposit(deps, env, info, deposit_id),
        ExecuteMsg::Redeem { deposit_id } => redeem(deps, env, info, deposit_id),
        ExecuteMsg::ClaimRedeem { deposit_id } => claim_redeem(deps, env, info, deposit_id),
        ExecuteMsg::Swap { min_yt_out } => swap(deps, env, info, min_yt_out),
        ExecuteMsg::AddYtRewards { opt } => add_yt_rewards(deps, env, info, opt),
        ExecuteMsg::CollectYt { epoch_id } => collect_yt(deps, env, info, epoch_id),
        ExecuteMsg::ClaimYtRewards { epoch_id, opt } => {
            claim_yt_rewards(deps, env, info, epoch_id, opt)
        }
        ExecuteMsg::ClaimStakingRewards {} => claim_staking_rewards(deps, env, info),
        ExecuteMsg::InitializeT { denom } => initialize_t(deps, env, info, denom),
        ExecuteMsg::DepositT {} => deposit_t(deps, env, info),
        ExecuteMsg::WithdrawT { amount } => withdraw_t(deps, env, info, amount),
        ExecuteMsg::RedeemT { amount } => redeem_t(deps, env, info, amount),
        ExecuteMsg::Buyback {
            amount_in,
            min_amount_out,
        } => buyback(deps, env, info, amount_in, min_amount_out),
        ExecuteMsg::Callback(msg) => _handle_callback(deps, env, info, msg),
    }?;

    Ok(response.add_events(epoch_events))
}

/// Exposes queries available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&query_config(deps, env)?)?),
        QueryMsg::Owner {} => Ok(to_json_binary(&query_owner(deps, env)?)?),
        QueryMsg::Settings {} => Ok(to_json_binary(&query_settings(deps, env)?)?),
        QueryMsg::VestingToken {} => Ok(to_json_binary(&query_vesting_token(deps, env)?)?),
        QueryMsg::ParamValue { key } => Ok(to_json_binary(&query_param_value(deps, env, key)?)?),
        QueryMsg::DepositInfo { deposit_id } => {
            Ok(to_json_binary(&query_deposit_info(deps, env, deposit_id)?)?)
        }
        QueryMsg::UserDeposits {
            user,
            start_after,
            limit,
        } => Ok(to_json_binary(&query_user_deposits(
            deps,
            env,
            user,
            start_after,
            limit,
        )?)?),
        QueryMsg::RedeemInfo { deposit_id } => {
            Ok(to_json_binary(&query_redeem_info(deps, env, deposit_id)?)?)
        }
        QueryMsg::CalcClaimVt { deposit_id } => {
            Ok(to_json_binary(&query_calc_claim_vt(deps, env, deposit_id)?)?)
        }
        QueryMsg::CalcRedeemVt { deposit_id } => {
            Ok(to_json_binary(&query_calc_redeem_vt(deps, env, deposit_id)?)?)
        }
        QueryMsg::CurrentEpochId {} => Ok(to_json_binary(&query_current_epoch_id(deps, env)?)?),
        QueryMsg::EpochInfo { epoch_id } => {
            Ok(to_json_binary(&query_epoch_info(deps, env, epoch_id)?)?)
        }
        QueryMsg::YtBalance { epoch_id, user } => {
            Ok(to_json_binary(&query_yt_balance(deps, env, epoch_id, user)?)?)
        }
        QueryMsg::CalcSwap { payment_amount } => {
            Ok(to_json_binary(&query_calc_swap(deps, env, payment_amount)?)?)
        }
        QueryMsg::Y {} => Ok(to_json_binary(&query_y(deps, env)?)?),
        QueryMsg::StakingBalance { user } => {
            Ok(to_json_binary(&query_staking_balance(deps, env, user)?)?)
        }
        QueryMsg::StakingTotalSupply {} => {
            Ok(to_json_binary(&query_staking_total_supply(deps, env)?)?)
        }
        QueryMsg::StakingEarned { user, denom } => {
            Ok(to_json_binary(&query_staking_earned(deps, env, user, denom)?)?)
        }
        QueryMsg::YtPoolBalance {
            epoch_id,
            opt,
            user,
        } => Ok(to_json_binary(&query_yt_pool_balance(
            deps, env, epoch_id, opt, user,
        )?)?),
        QueryMsg::YtPoolTotalSupply { epoch_id, opt } => Ok(to_json_binary(
            &query_yt_pool_total_supply(deps, env, epoch_id, opt)?,
        )?),
        QueryMsg::YtPoolEarned {
            epoch_id,
            opt,
            user,
            denom,
        } => Ok(to_json_binary(&query_yt_pool_earned(
            deps, env, epoch_id, opt, user, denom,
        )?)?),
        QueryMsg::YtPoolRewardTokens { epoch_id, opt } => Ok(to_json_binary(
            &query_yt_pool_reward_tokens(deps, env, epoch_id, opt)?,
        )?),
        QueryMsg::CollectableYt { epoch_id, user } => {
            Ok(to_json_binary(&query_collectable_yt(deps, env, epoch_id, user)?)?)
        }
        QueryMsg::TimeWeightedInfo { epoch_id, user } => Ok(to_json_binary(
            &query_time_weighted_info(deps, env, epoch_id, user)?,
        )?),
    }
}

/// Manages contract migration.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}
