use cosmwasm_std::{Event, StdResult, Storage, Uint128};

use lnt_msg::vault::{EpochInfo, SwapSettings};

use crate::{
    config::YT_UNIT,
    math::curve::initial_k0,
    rewards::{ProportionalPool, RewardPool, TimeWeightedPool},
    state::{CURRENT_EPOCH_ID, EPOCHS, SETTINGS},
};

pub fn current_epoch_id(storage: &dyn Storage) -> StdResult<u64> {
    Ok(CURRENT_EPOCH_ID.may_load(storage)?.unwrap_or_default())
}

/// Epoch `epoch_id` starting at `now`, its curve seeded with the staked NFT weight
pub fn next_epoch(
    storage: &dyn Storage,
    epoch_id: u64,
    now: u64,
    swap: &SwapSettings,
) -> StdResult<EpochInfo> {
    let staked = ProportionalPool::nft_staking().total_supply(storage)?;
    let yt_total_supply = staked.checked_mul(Uint128::new(YT_UNIT))?;

    Ok(EpochInfo {
        epoch_id,
        start_time: now,
        duration: swap.epoch_duration,
        yt_total_supply,
        payment_denom: swap.payment_denom.clone(),
        payment_decimals: swap.payment_decimals,
        yt_swap_price: swap.price,
        x: yt_total_supply,
        k0: initial_k0(yt_total_supply, swap.price, swap.payment_decimals)?,
    })
}

pub fn start_epoch(storage: &mut dyn Storage, epoch: &EpochInfo) -> StdResult<Event> {
    EPOCHS.save(storage, epoch.epoch_id, epoch)?;
    CURRENT_EPOCH_ID.save(storage, &epoch.epoch_id)?;
    TimeWeightedPool::create(storage, epoch.epoch_id, epoch.end_time())?;

    Ok(Event::new("epoch_started")
        .add_attribute("epoch_id", epoch.epoch_id.to_string())
        .add_attribute("start_time", epoch.start_time.to_string())
        .add_attribute("duration", epoch.duration.to_string())
        .add_attribute("yt_total_supply", epoch.yt_total_supply))
}

/// Epoch a state changing call at `now` acts on, without starting it
pub fn preview_current_epoch(storage: &dyn Storage, now: u64) -> StdResult<Option<EpochInfo>> {
    let epoch_id = current_epoch_id(storage)?;
    if epoch_id == 0 {
        return Ok(None);
    }

    let epoch = EPOCHS.load(storage, epoch_id)?;
    if now < epoch.end_time() {
        return Ok(Some(epoch));
    }

    let settings = SETTINGS.load(storage)?;
    Ok(Some(next_epoch(storage, epoch_id + 1, now, &settings.swap)?))
}

/// Starts the next epoch if the current one has ended.
///
/// The new epoch starts at `now`, so a second check in the same block finds it running.
pub fn check_rollover(storage: &mut dyn Storage, now: u64) -> StdResult<Vec<Event>> {
    let epoch_id = current_epoch_id(storage)?;
    if epoch_id == 0 {
        return Ok(vec![]);
    }

    let current = EPOCHS.load(storage, epoch_id)?;
    if now < current.end_time() {
        return Ok(vec![]);
    }

    let settings = SETTINGS.load(storage)?;
    let next = next_epoch(storage, epoch_id + 1, now, &settings.swap)?;
    Ok(vec![start_epoch(storage, &next)?])
}
