use cosmwasm_std::{Addr, Coin, Event, StdResult, Storage, Uint128};
use cw_storage_plus::Map;

use super::{ledger, RewardPool};

// yield token balance currently held, (pool, user)
pub const YT_SUM: Map<(&str, &Addr), Uint128> = Map::new("opt2_yt_sum");
pub const YT_LAST_COLLECT_TIME: Map<(&str, &Addr), u64> = Map::new("opt2_yt_last_collect_time");
pub const EPOCH_END_TIMESTAMP: Map<&str, u64> = Map::new("opt2_epoch_end_timestamp");

/// Rewards split by yield token balance multiplied by holding time.
///
/// The ledger balance of a user is the time weighted balance. It only grows through
/// `collect`, and holding time after the epoch end is not counted.
pub struct TimeWeightedPool {
    id: String,
    epoch_end: u64,
}

impl TimeWeightedPool {
    pub fn pool_id(epoch_id: u64) -> String {
        format!("yt_opt2_{}", epoch_id)
    }

    pub fn create(storage: &mut dyn Storage, epoch_id: u64, epoch_end: u64) -> StdResult<Self> {
        let id = Self::pool_id(epoch_id);
        EPOCH_END_TIMESTAMP.save(storage, &id, &epoch_end)?;
        Ok(Self { id, epoch_end })
    }

    pub fn for_epoch(storage: &dyn Storage, epoch_id: u64) -> StdResult<Self> {
        let id = Self::pool_id(epoch_id);
        let epoch_end = EPOCH_END_TIMESTAMP.load(storage, &id)?;
        Ok(Self { id, epoch_end })
    }

    pub fn epoch_end(&self) -> u64 {
        self.epoch_end
    }

    pub fn yt_sum(&self, storage: &dyn Storage, user: &Addr) -> StdResult<Uint128> {
        Ok(YT_SUM
            .may_load(storage, (&self.id, user))?
            .unwrap_or_default())
    }

    pub fn last_collect_time(&self, storage: &dyn Storage, user: &Addr) -> StdResult<u64> {
        Ok(YT_LAST_COLLECT_TIME
            .may_load(storage, (&self.id, user))?
            .unwrap_or_default())
    }

    /// (time the accrual is counted up to, time weighted amount not collected yet)
    pub fn collectable_yt(
        &self,
        storage: &dyn Storage,
        now: u64,
        user: &Addr,
    ) -> StdResult<(u64, Uint128)> {
        let effective_time = now.min(self.epoch_end);
        let last = self.last_collect_time(storage, user)?;
        let elapsed = effective_time.saturating_sub(last);

        let accrued = self
            .yt_sum(storage, user)?
            .checked_mul(Uint128::from(elapsed))?;

        Ok((effective_time, accrued))
    }

    pub fn collect(
        &self,
        storage: &mut dyn Storage,
        now: u64,
        user: &Addr,
    ) -> StdResult<Vec<Event>> {
        let (effective_time, accrued) = self.collectable_yt(storage, now, user)?;

        let mut events = vec![];
        if !accrued.is_zero() {
            let balance = ledger::balance_of(storage, &self.id, user)?;
            ledger::set_balance(storage, &self.id, user, balance.checked_add(accrued)?)?;
            events.push(
                Event::new("time_weighted_yt_added")
                    .add_attribute("pool", &self.id)
                    .add_attribute("user", user)
                    .add_attribute("amount", accrued),
            );
        }

        let last = self.last_collect_time(storage, user)?;
        YT_LAST_COLLECT_TIME.save(storage, (&self.id, user), &last.max(effective_time))?;

        Ok(events)
    }
}

impl RewardPool for TimeWeightedPool {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify_balance_changed(
        &self,
        storage: &mut dyn Storage,
        now: u64,
        user: &Addr,
        new_balance: Uint128,
    ) -> StdResult<Vec<Event>> {
        let mut events = self.collect(storage, now, user)?;

        let old_balance = self.yt_sum(storage, user)?;
        YT_SUM.save(storage, (&self.id, user), &new_balance)?;

        if new_balance > old_balance {
            events.push(
                Event::new("yt_swapped")
                    .add_attribute("pool", &self.id)
                    .add_attribute("user", user)
                    .add_attribute("amount", new_balance - old_balance),
            );
        }

        Ok(events)
    }

    fn get_rewards(
        &self,
        storage: &mut dyn Storage,
        now: u64,
        user: &Addr,
    ) -> StdResult<(Vec<Coin>, Vec<Event>)> {
        let mut events = self.collect(storage, now, user)?;
        let (coins, paid) = ledger::pay_rewards(storage, &self.id, user)?;
        events.extend(paid);
        Ok((coins, events))
    }
}
