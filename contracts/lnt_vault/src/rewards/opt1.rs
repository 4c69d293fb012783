use cosmwasm_std::{Addr, Coin, Event, StdResult, Storage, Uint128};

use super::{ledger, RewardPool};

pub const NFT_STAKING_POOL: &str = "nft_staking";

/// Rewards split by instantaneous balance
pub struct ProportionalPool {
    id: String,
}

impl ProportionalPool {
    /// Staked NFT weight, receives the net payment of every swap
    pub fn nft_staking() -> Self {
        Self {
            id: NFT_STAKING_POOL.to_string(),
        }
    }

    pub fn for_epoch(epoch_id: u64) -> Self {
        Self {
            id: format!("yt_opt1_{}", epoch_id),
        }
    }
}

impl RewardPool for ProportionalPool {
    fn id(&self) -> &str {
        &self.id
    }

    fn notify_balance_changed(
        &self,
        storage: &mut dyn Storage,
        _now: u64,
        user: &Addr,
        new_balance: Uint128,
    ) -> StdResult<Vec<Event>> {
        ledger::set_balance(storage, &self.id, user, new_balance)?;
        Ok(vec![])
    }

    fn get_rewards(
        &self,
        storage: &mut dyn Storage,
        _now: u64,
        user: &Addr,
    ) -> StdResult<(Vec<Coin>, Vec<Event>)> {
        ledger::pay_rewards(storage, &self.id, user)
    }
}
