pub mod ledger;
pub mod opt1;
pub mod opt2;

use cosmwasm_std::{Addr, Coin, Event, StdResult, Storage, Uint128};

use lnt_msg::vault::RewardOption;

use crate::error::ContractError;

pub use opt1::ProportionalPool;
pub use opt2::TimeWeightedPool;

/// Reward distribution over balances notified by the vault
pub trait RewardPool {
    fn id(&self) -> &str;

    fn notify_balance_changed(
        &self,
        storage: &mut dyn Storage,
        now: u64,
        user: &Addr,
        new_balance: Uint128,
    ) -> StdResult<Vec<Event>>;

    fn add_rewards(
        &self,
        storage: &mut dyn Storage,
        denom: &str,
        amount: Uint128,
    ) -> Result<Vec<Event>, ContractError> {
        ledger::add_rewards(storage, self.id(), denom, amount)
    }

    fn earned(&self, storage: &dyn Storage, user: &Addr, denom: &str) -> StdResult<Uint128> {
        ledger::earned(storage, self.id(), user, denom)
    }

    fn get_rewards(
        &self,
        storage: &mut dyn Storage,
        now: u64,
        user: &Addr,
    ) -> StdResult<(Vec<Coin>, Vec<Event>)>;

    fn balance_of(&self, storage: &dyn Storage, user: &Addr) -> StdResult<Uint128> {
        ledger::balance_of(storage, self.id(), user)
    }

    fn total_supply(&self, storage: &dyn Storage) -> StdResult<Uint128> {
        ledger::total_supply(storage, self.id())
    }

    fn reward_tokens(&self, storage: &dyn Storage) -> StdResult<Vec<String>> {
        ledger::reward_tokens(storage, self.id())
    }
}

/// One of the two yield token reward pools of an epoch
pub enum EpochRewardPool {
    Opt1(ProportionalPool),
    Opt2(TimeWeightedPool),
}

impl EpochRewardPool {
    pub fn load(storage: &dyn Storage, epoch_id: u64, opt: &RewardOption) -> StdResult<Self> {
        Ok(match opt {
            RewardOption::Opt1 => Self::Opt1(ProportionalPool::for_epoch(epoch_id)),
            RewardOption::Opt2 => Self::Opt2(TimeWeightedPool::for_epoch(storage, epoch_id)?),
        })
    }

    fn inner(&self) -> &dyn RewardPool {
        match self {
            Self::Opt1(pool) => pool,
            Self::Opt2(pool) => pool,
        }
    }
}

impl RewardPool for EpochRewardPool {
    fn id(&self) -> &str {
        self.inner().id()
    }

    fn notify_balance_changed(
        &self,
        storage: &mut dyn Storage,
        now: u64,
        user: &Addr,
        new_balance: Uint128,
    ) -> StdResult<Vec<Event>> {
        self.inner()
            .notify_balance_changed(storage, now, user, new_balance)
    }

    fn get_rewards(
        &self,
        storage: &mut dyn Storage,
        now: u64,
        user: &Addr,
    ) -> StdResult<(Vec<Coin>, Vec<Event>)> {
        self.inner().get_rewards(storage, now, user)
    }
}
