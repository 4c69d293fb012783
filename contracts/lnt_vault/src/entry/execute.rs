use cosmwasm_std::{
    coins, ensure, ensure_eq, to_json_binary, Addr, BankMsg, CosmosMsg, DepsMut, Env, Event,
    MessageInfo, Response, Storage, Uint128, WasmMsg,
};
use cw_utils::{must_pay, one_coin};

use lnt_msg::{
    market::ExecuteMsg as MarketExecuteMsg,
    utils::nft_denom,
    vault::{
        CallbackMsg, DepositInfo, NftKind, RedeemInfo, RewardOption, SwapSettings,
        UpdateConfigMsg, VaultSettings, VestingSchedule,
    },
};

use crate::{
    config::{BUYBACK_DEADLINE, MAX_LEADING_TIME, SETTINGS_BASE},
    epoch::{current_epoch_id, next_epoch, start_epoch},
    error::ContractError,
    helpers::{
        burn_vt_from_msg, burn_vt_msg, deposit_vt_amount, deposit_weight, find_schedule,
        load_params, mint_vt_msg, param_bounds, query_vt_balance, validate_schedules,
        validate_swap_settings,
    },
    math::curve::swap_output,
    rewards::{EpochRewardPool, ProportionalPool, RewardPool, TimeWeightedPool},
    state::{
        CONFIG, DEPOSITS, DEPOSIT_COUNT, EPOCHS, OWNER, PARAMS, REDEEMS, SETTINGS,
        USER_DEPOSITS, VESTING_TOKEN, YT_BALANCES,
    },
};

pub fn update_owner(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    OWNER.set(deps.branch(), Some(new_owner_addr))?;
    Ok(Response::new()
        .add_attribute("action", "update owner")
        .add_attribute("to", new_owner))
}

/// Update config
/// Only owner
pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_config: UpdateConfigMsg,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    let mut res: Response = Response::new().add_attribute("action", "update config");
    if let Some(treasury) = new_config.treasury {
        config.treasury = deps.api.addr_validate(&treasury)?;
        res = res.add_attribute("treasury", treasury);
    }
    if let Some(leading_time) = new_config.leading_time {
        ensure!(
            leading_time <= MAX_LEADING_TIME,
            ContractError::InvalidLeadingTime(leading_time)
        );
        config.leading_time = leading_time;
        res = res.add_attribute("leading_time", leading_time.to_string());
    }
    if let Some(market_router) = new_config.market_router {
        config.market_router = Some(deps.api.addr_validate(&market_router)?);
        res = res.add_attribute("market_router", market_router);
    }
    CONFIG.save(deps.storage, &config)?;
    Ok(res)
}

/// Only owner
pub fn update_param_value(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    key: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let (_, min, max) = param_bounds(&key)?;
    ensure!(
        value.u128() >= min && value.u128() <= max,
        ContractError::InvalidParamValue { key, value }
    );
    PARAMS.save(deps.storage, &key, &value)?;
    Ok(Response::new()
        .add_attribute("action", "update param value")
        .add_attribute("key", key)
        .add_attribute("value", value))
}

pub fn initialize(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    vt_token: String,
    vesting_schedules: Vec<VestingSchedule>,
    swap: SwapSettings,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    ensure!(
        SETTINGS.may_load(deps.storage)?.is_none(),
        ContractError::AlreadyInitialized {}
    );
    let config = CONFIG.load(deps.storage)?;
    validate_schedules(&config.nft_kind, &vesting_schedules)?;
    validate_swap_settings(&swap)?;

    let vt_token = deps.api.addr_validate(&vt_token)?;
    SETTINGS.save(
        deps.storage,
        &VaultSettings {
            vt_token: vt_token.clone(),
            vesting_schedules,
            swap: swap.clone(),
            reinitialized: false,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "initialize")
        .add_attribute("vt_token", vt_token)
        .add_attribute("epoch_duration", swap.epoch_duration.to_string())
        .add_attribute("payment_denom", swap.payment_denom)
        .add_attribute("price", swap.price))
}

pub fn re_initialize(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    swap: SwapSettings,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let mut settings = SETTINGS
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized {})?;
    ensure!(
        !settings.reinitialized,
        ContractError::AlreadyReInitialized {}
    );
    validate_swap_settings(&swap)?;

    settings.swap = swap.clone();
    settings.reinitialized = true;
    SETTINGS.save(deps.storage, &settings)?;

    Ok(Response::new()
        .add_attribute("action", "reinitialize")
        .add_attribute("epoch_duration", swap.epoch_duration.to_string())
        .add_attribute("payment_denom", swap.payment_denom)
        .add_attribute("price", swap.price))
}

pub fn start_epoch_1(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let settings = SETTINGS
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized {})?;
    ensure_eq!(
        current_epoch_id(deps.storage)?,
        0,
        ContractError::EpochAlreadyStarted {}
    );

    let epoch = next_epoch(deps.storage, 1, env.block.time.seconds(), &settings.swap)?;
    let event = start_epoch(deps.storage, &epoch)?;

    Ok(Response::new()
        .add_attribute("action", "start epoch 1")
        .add_event(event))
}

pub fn deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let received = one_coin(&info).map_err(|_| ContractError::NotOwner {})?;
    ensure_eq!(
        received.denom,
        nft_denom(&config.nft_class, &token_id),
        ContractError::NotOwner {}
    );
    if config.nft_kind == NftKind::Single {
        ensure_eq!(received.amount, Uint128::one(), ContractError::InvalidValue {});
    }

    let deposit_id = DEPOSIT_COUNT.load(deps.storage)? + 1;
    DEPOSIT_COUNT.save(deps.storage, &deposit_id)?;

    let deposit = DepositInfo {
        deposit_id,
        owner: info.sender.clone(),
        token_id: token_id.clone(),
        value: received.amount,
        deposit_time: env.block.time.seconds(),
        claim_time: None,
        claimed: false,
        f1_on_claim: Uint128::zero(),
        redeemed: false,
    };
    DEPOSITS.save(deps.storage, deposit_id, &deposit)?;
    USER_DEPOSITS.save(deps.storage, (&info.sender, deposit_id), &true)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("epoch_id", current_epoch_id(deps.storage)?.to_string())
        .add_attribute("user", info.sender)
        .add_attribute("deposit_id", deposit_id.to_string())
        .add_attribute("token_id", token_id)
        .add_attribute("value", received.amount))
}

pub fn claim_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    deposit_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let settings = SETTINGS
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized {})?;
    let mut deposit = DEPOSITS
        .may_load(deps.storage, deposit_id)?
        .ok_or(ContractError::NoDepositFound(deposit_id))?;
    let now = env.block.time.seconds();

    ensure_eq!(deposit.owner, info.sender, ContractError::NotOwner {});
    ensure!(!deposit.claimed, ContractError::AlreadyClaimed {});
    ensure!(
        now >= deposit.deposit_time + config.leading_time,
        ContractError::NotClaimableYet {}
    );

    let schedule = find_schedule(&settings, &config.nft_kind, &deposit.token_id)?;
    let params = load_params(deps.storage)?;
    let (net, fee) = deposit_vt_amount(schedule, &deposit, now, params.f1)?;

    deposit.claimed = true;
    deposit.claim_time = Some(now);
    deposit.f1_on_claim = params.f1;
    DEPOSITS.save(deps.storage, deposit_id, &deposit)?;

    let staking = ProportionalPool::nft_staking();
    let weight = deposit_weight(schedule, &deposit)?;
    let stake = staking
        .balance_of(deps.storage, &info.sender)?
        .checked_add(weight)?;
    let mut events = staking.notify_balance_changed(deps.storage, now, &info.sender, stake)?;
    events.push(
        Event::new("vt_minted")
            .add_attribute("user", &info.sender)
            .add_attribute("deposit_id", deposit_id.to_string())
            .add_attribute("amount", net)
            .add_attribute("fees", fee),
    );

    let mut msgs = vec![];
    if !net.is_zero() {
        msgs.push(mint_vt_msg(&settings.vt_token, &info.sender, net)?);
    }
    if !fee.is_zero() {
        msgs.push(mint_vt_msg(&settings.vt_token, &config.treasury, fee)?);
    }

    Ok(Response::new()
        .add_attribute("action", "claim deposit")
        .add_attribute("epoch_id", current_epoch_id(deps.storage)?.to_string())
        .add_attribute("user", info.sender)
        .add_attribute("deposit_id", deposit_id.to_string())
        .add_attribute("weight", weight)
        .add_events(events)
        .add_messages(msgs))
}

pub fn redeem(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    deposit_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let settings = SETTINGS
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized {})?;
    let deposit = DEPOSITS
        .may_load(deps.storage, deposit_id)?
        .ok_or(ContractError::NoDepositFound(deposit_id))?;
    let now = env.block.time.seconds();

    ensure_eq!(deposit.owner, info.sender, ContractError::NotUser {});
    ensure!(deposit.claimed, ContractError::NotClaimed {});
    ensure!(
        !deposit.redeemed && !REDEEMS.has(deps.storage, deposit_id),
        ContractError::AlreadyRedeemed {}
    );

    let schedule = find_schedule(&settings, &config.nft_kind, &deposit.token_id)?;
    // burn what the claim would mint now, with the fee rate of the claim
    let (burn_amount, _) = deposit_vt_amount(schedule, &deposit, now, deposit.f1_on_claim)?;

    let staking = ProportionalPool::nft_staking();
    let weight = deposit_weight(schedule, &deposit)?;
    let stake = staking
        .balance_of(deps.storage, &info.sender)?
        .checked_sub(weight)?;
    let mut events = staking.notify_balance_changed(deps.storage, now, &info.sender, stake)?;

    let epoch_id = current_epoch_id(deps.storage)?;
    REDEEMS.save(
        deps.storage,
        deposit_id,
        &RedeemInfo {
            deposit_id,
            owner: info.sender.clone(),
            epoch_at_redeem: epoch_id,
            redeem_time: now,
            claimed: false,
        },
    )?;

    let mut msgs = vec![];
    if !burn_amount.is_zero() {
        msgs.push(burn_vt_from_msg(
            &settings.vt_token,
            &info.sender,
            burn_amount,
        )?);
    }
    events.push(
        Event::new("vt_burned")
            .add_attribute("user", &info.sender)
            .add_attribute("deposit_id", deposit_id.to_string())
            .add_attribute("amount", burn_amount),
    );

    Ok(Response::new()
        .add_attribute("action", "redeem")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("user", info.sender)
        .add_attribute("deposit_id", deposit_id.to_string())
        .add_events(events)
        .add_messages(msgs))
}

pub fn claim_redeem(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    deposit_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut redeem = REDEEMS
        .may_load(deps.storage, deposit_id)?
        .ok_or(ContractError::NotRedeemed {})?;
    let mut deposit = DEPOSITS.load(deps.storage, deposit_id)?;
    let epoch_id = current_epoch_id(deps.storage)?;

    ensure_eq!(redeem.owner, info.sender, ContractError::NotUser {});
    ensure!(!redeem.claimed, ContractError::AlreadyRedeemed {});
    ensure!(
        epoch_id > redeem.epoch_at_redeem,
        ContractError::NotClaimableYet {}
    );

    redeem.claimed = true;
    deposit.redeemed = true;
    REDEEMS.save(deps.storage, deposit_id, &redeem)?;
    DEPOSITS.save(deps.storage, deposit_id, &deposit)?;

    let msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(
            deposit.value.u128(),
            nft_denom(&config.nft_class, &deposit.token_id),
        ),
    };

    Ok(Response::new()
        .add_attribute("action", "claim redeem")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("user", info.sender)
        .add_attribute("deposit_id", deposit_id.to_string())
        .add_message(msg))
}

pub fn swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    min_yt_out: Option<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();
    let epoch_id = current_epoch_id(deps.storage)?;
    ensure!(epoch_id > 0, ContractError::CannotSwapWithoutStake {});

    let mut epoch = EPOCHS.load(deps.storage, epoch_id)?;
    let payment = must_pay(&info, &epoch.payment_denom)?;
    let staking = ProportionalPool::nft_staking();
    ensure!(
        !epoch.yt_total_supply.is_zero() && !staking.total_supply(deps.storage)?.is_zero(),
        ContractError::CannotSwapWithoutStake {}
    );

    let params = load_params(deps.storage)?;
    let fee = payment.multiply_ratio(params.f2, SETTINGS_BASE);
    let net = payment.checked_sub(fee)?;

    let (x_updated, yt_amount) = swap_output(
        epoch.x,
        epoch.k0,
        net,
        params.decay_period,
        now - epoch.start_time,
    )?;
    ensure!(!yt_amount.is_zero(), ContractError::ZeroAmount {});
    if let Some(min_yt_out) = min_yt_out {
        ensure!(
            yt_amount >= min_yt_out,
            ContractError::SlippageExceeded {
                got: yt_amount,
                expected: min_yt_out,
            }
        );
    }

    epoch.x = x_updated;
    EPOCHS.save(deps.storage, epoch_id, &epoch)?;

    let yt_balance = YT_BALANCES
        .may_load(deps.storage, (epoch_id, &info.sender))?
        .unwrap_or_default()
        .checked_add(yt_amount)?;
    YT_BALANCES.save(deps.storage, (epoch_id, &info.sender), &yt_balance)?;

    // net payment goes to NFT stakers
    let mut events = staking.add_rewards(deps.storage, &epoch.payment_denom, net)?;
    for opt in [RewardOption::Opt1, RewardOption::Opt2] {
        let pool = EpochRewardPool::load(deps.storage, epoch_id, &opt)?;
        events.extend(pool.notify_balance_changed(deps.storage, now, &info.sender, yt_balance)?);
    }

    let mut msgs = vec![];
    if !fee.is_zero() {
        msgs.push(BankMsg::Send {
            to_address: config.treasury.to_string(),
            amount: coins(fee.u128(), &epoch.payment_denom),
        });
    }

    Ok(Response::new()
        .add_attribute("action", "swap")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("user", info.sender)
        .add_attribute("payment_amount", payment)
        .add_attribute("fees", fee)
        .add_attribute("yt_amount", yt_amount)
        .add_events(events)
        .add_messages(msgs))
}

pub fn add_yt_rewards(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    opt: RewardOption,
) -> Result<Response, ContractError> {
    let reward = one_coin(&info)?;
    let epoch_id = current_epoch_id(deps.storage)?;
    ensure!(epoch_id > 0, ContractError::EpochNotStarted {});

    let pool = EpochRewardPool::load(deps.storage, epoch_id, &opt)?;
    let events = pool.add_rewards(deps.storage, &reward.denom, reward.amount)?;

    Ok(Response::new()
        .add_attribute("action", "add yt rewards")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("pool", pool.id())
        .add_attribute("denom", reward.denom)
        .add_attribute("amount", reward.amount)
        .add_events(events))
}

pub fn collect_yt(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    epoch_id: u64,
) -> Result<Response, ContractError> {
    ensure_epoch_exists(deps.storage, epoch_id)?;
    let pool = TimeWeightedPool::for_epoch(deps.storage, epoch_id)?;
    let events = pool.collect(deps.storage, env.block.time.seconds(), &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "collect yt")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("user", info.sender)
        .add_events(events))
}

pub fn claim_yt_rewards(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    epoch_id: u64,
    opt: RewardOption,
) -> Result<Response, ContractError> {
    ensure_epoch_exists(deps.storage, epoch_id)?;
    let pool = EpochRewardPool::load(deps.storage, epoch_id, &opt)?;
    let (rewards, events) =
        pool.get_rewards(deps.storage, env.block.time.seconds(), &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "claim yt rewards")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("pool", pool.id())
        .add_attribute("user", &info.sender)
        .add_events(events)
        .add_messages(send_rewards_msg(&info.sender, rewards)))
}

pub fn claim_staking_rewards(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let (rewards, events) = ProportionalPool::nft_staking().get_rewards(
        deps.storage,
        env.block.time.seconds(),
        &info.sender,
    )?;

    Ok(Response::new()
        .add_attribute("action", "claim staking rewards")
        .add_attribute("user", &info.sender)
        .add_events(events)
        .add_messages(send_rewards_msg(&info.sender, rewards)))
}

/// Only owner
pub fn initialize_t(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    denom: String,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    ensure!(
        VESTING_TOKEN.may_load(deps.storage)?.is_none(),
        ContractError::AlreadyInitializedT {}
    );
    ensure!(!denom.is_empty(), ContractError::InvalidValue {});
    VESTING_TOKEN.save(deps.storage, &denom)?;

    Ok(Response::new()
        .add_attribute("action", "initialize t")
        .add_attribute("denom", denom))
}

pub fn deposit_t(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let denom = load_vesting_token(deps.storage)?;
    let amount = must_pay(&info, &denom)?;

    Ok(Response::new()
        .add_attribute("action", "deposit t")
        .add_attribute("user", info.sender)
        .add_attribute("amount", amount))
}

/// Only owner
pub fn withdraw_t(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let denom = load_vesting_token(deps.storage)?;
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let available = deps
        .querier
        .query_balance(&env.contract.address, &denom)?
        .amount;
    ensure!(
        available >= amount,
        ContractError::InsufficientTokenBalance {
            available,
            required: amount,
        }
    );

    Ok(Response::new()
        .add_attribute("action", "withdraw t")
        .add_attribute("amount", amount)
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(amount.u128(), denom),
        }))
}

/// Burns claim tokens 1:1 for the vesting token held by the vault
pub fn redeem_t(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let denom = load_vesting_token(deps.storage)?;
    let settings = SETTINGS
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized {})?;
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});
    let available = deps
        .querier
        .query_balance(&env.contract.address, &denom)?
        .amount;
    ensure!(
        available >= amount,
        ContractError::InsufficientTokenBalance {
            available,
            required: amount,
        }
    );

    Ok(Response::new()
        .add_attribute("action", "redeem t")
        .add_attribute("user", &info.sender)
        .add_attribute("amount", amount)
        .add_message(burn_vt_from_msg(&settings.vt_token, &info.sender, amount)?)
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(amount.u128(), denom),
        }))
}

/// Sells vesting token for claim tokens on the market and burns them
/// Only owner
pub fn buyback(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_in: Uint128,
    min_amount_out: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let denom = load_vesting_token(deps.storage)?;
    let settings = SETTINGS
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized {})?;
    let router = CONFIG
        .load(deps.storage)?
        .market_router
        .ok_or(ContractError::MarketRouterNotSet {})?;
    ensure!(!amount_in.is_zero(), ContractError::ZeroAmount {});

    let available = deps
        .querier
        .query_balance(&env.contract.address, &denom)?
        .amount;
    ensure!(
        available >= amount_in,
        ContractError::InsufficientTokenBalance {
            available,
            required: amount_in,
        }
    );

    let prev_vt_balance =
        query_vt_balance(&deps.querier, &settings.vt_token, &env.contract.address)?;

    let swap_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: router.to_string(),
        msg: to_json_binary(&MarketExecuteMsg::SwapExactInput {
            token_out: settings.vt_token.to_string(),
            min_amount_out,
            deadline: env.block.time.seconds() + BUYBACK_DEADLINE,
            recipient: None,
        })?,
        funds: coins(amount_in.u128(), denom),
    });

    Ok(Response::new()
        .add_attribute("action", "buyback")
        .add_attribute("amount_in", amount_in)
        .add_attribute("min_amount_out", min_amount_out)
        .add_message(swap_msg)
        .add_message(CallbackMsg::BurnBoughtBack { prev_vt_balance }.to_cosmos_msg(&env)?))
}

pub fn _handle_callback(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: CallbackMsg,
) -> Result<Response, ContractError> {
    // Only the contract itself can call callbacks
    ensure_eq!(
        info.sender,
        env.contract.address,
        ContractError::InvalidCallbackInvoke {}
    );
    match msg {
        CallbackMsg::BurnBoughtBack { prev_vt_balance } => {
            let settings = SETTINGS.load(deps.storage)?;
            let vt_balance =
                query_vt_balance(&deps.querier, &settings.vt_token, &env.contract.address)?;
            let bought = vt_balance.checked_sub(prev_vt_balance)?;

            let mut res = Response::new()
                .add_attribute("action", "burn bought back")
                .add_attribute("amount", bought);
            if !bought.is_zero() {
                res = res.add_message(burn_vt_msg(&settings.vt_token, bought)?);
            }
            Ok(res)
        }
    }
}

fn load_vesting_token(storage: &dyn Storage) -> Result<String, ContractError> {
    VESTING_TOKEN
        .may_load(storage)?
        .ok_or(ContractError::NotInitializedT {})
}

fn ensure_epoch_exists(storage: &dyn Storage, epoch_id: u64) -> Result<(), ContractError> {
    ensure!(
        EPOCHS.has(storage, epoch_id),
        ContractError::EpochNotFound(epoch_id)
    );
    Ok(())
}

fn send_rewards_msg(recipient: &Addr, rewards: Vec<cosmwasm_std::Coin>) -> Vec<BankMsg> {
    if rewards.is_empty() {
        return vec![];
    }
    vec![BankMsg::Send {
        to_address: recipient.to_string(),
        amount: rewards,
    }]
}
