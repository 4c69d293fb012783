//! Reward per token ledger shared by every reward pool, keyed by pool id.

use cosmwasm_std::{coin, Addr, Coin, Event, StdResult, Storage, Uint128, Uint256};
use cw_storage_plus::Map;

use crate::{config::REWARD_SCALE, error::ContractError};

pub const TOTAL_SUPPLY: Map<&str, Uint128> = Map::new("pool_total_supply");
pub const BALANCES: Map<(&str, &Addr), Uint128> = Map::new("pool_balances");
pub const REWARD_TOKENS: Map<&str, Vec<String>> = Map::new("pool_reward_tokens");
// (pool, denom)
pub const REWARD_PER_TOKEN: Map<(&str, &str), Uint256> = Map::new("pool_reward_per_token");
// (pool, user, denom)
pub const USER_REWARD_PER_TOKEN_PAID: Map<(&str, &Addr, &str), Uint256> =
    Map::new("pool_user_reward_per_token_paid");
pub const REWARDS_OWED: Map<(&str, &Addr, &str), Uint128> = Map::new("pool_rewards_owed");

pub fn total_supply(storage: &dyn Storage, pool: &str) -> StdResult<Uint128> {
    Ok(TOTAL_SUPPLY.may_load(storage, pool)?.unwrap_or_default())
}

pub fn balance_of(storage: &dyn Storage, pool: &str, user: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, (pool, user))?.unwrap_or_default())
}

pub fn reward_tokens(storage: &dyn Storage, pool: &str) -> StdResult<Vec<String>> {
    Ok(REWARD_TOKENS.may_load(storage, pool)?.unwrap_or_default())
}

fn reward_per_token(storage: &dyn Storage, pool: &str, denom: &str) -> StdResult<Uint256> {
    Ok(REWARD_PER_TOKEN
        .may_load(storage, (pool, denom))?
        .unwrap_or_default())
}

pub fn earned(storage: &dyn Storage, pool: &str, user: &Addr, denom: &str) -> StdResult<Uint128> {
    let balance = balance_of(storage, pool, user)?;
    let paid = USER_REWARD_PER_TOKEN_PAID
        .may_load(storage, (pool, user, denom))?
        .unwrap_or_default();
    let owed = REWARDS_OWED
        .may_load(storage, (pool, user, denom))?
        .unwrap_or_default();

    let pending = Uint256::from(balance)
        .checked_mul(reward_per_token(storage, pool, denom)?.checked_sub(paid)?)?
        .checked_div(Uint256::from(REWARD_SCALE))?;

    Ok(Uint128::try_from(pending)?.checked_add(owed)?)
}

/// Moves everything the user has earned so far into `REWARDS_OWED`
pub fn settle(storage: &mut dyn Storage, pool: &str, user: &Addr) -> StdResult<()> {
    for denom in reward_tokens(storage, pool)? {
        let owed = earned(storage, pool, user, denom.as_str())?;
        let rpt = reward_per_token(storage, pool, denom.as_str())?;
        REWARDS_OWED.save(storage, (pool, user, denom.as_str()), &owed)?;
        USER_REWARD_PER_TOKEN_PAID.save(storage, (pool, user, denom.as_str()), &rpt)?;
    }

    Ok(())
}

/// Settles the user at the old balance, then applies `new_balance`
pub fn set_balance(
    storage: &mut dyn Storage,
    pool: &str,
    user: &Addr,
    new_balance: Uint128,
) -> StdResult<()> {
    settle(storage, pool, user)?;

    let old_balance = balance_of(storage, pool, user)?;
    let total = total_supply(storage, pool)?
        .checked_sub(old_balance)?
        .checked_add(new_balance)?;

    BALANCES.save(storage, (pool, user), &new_balance)?;
    TOTAL_SUPPLY.save(storage, pool, &total)?;

    Ok(())
}

pub fn add_rewards(
    storage: &mut dyn Storage,
    pool: &str,
    denom: &str,
    amount: Uint128,
) -> Result<Vec<Event>, ContractError> {
    let total = total_supply(storage, pool)?;
    if total.is_zero() {
        return Err(ContractError::CannotAddRewardsWithoutStake {});
    }

    let mut events = vec![];
    let mut tokens = reward_tokens(storage, pool)?;
    if !tokens.iter().any(|t| t == denom) {
        tokens.push(denom.to_string());
        REWARD_TOKENS.save(storage, pool, &tokens)?;
        events.push(
            Event::new("rewards_token_added")
                .add_attribute("pool", pool)
                .add_attribute("denom", denom),
        );
    }

    let increase = Uint256::from(amount)
        .checked_mul(Uint256::from(REWARD_SCALE))?
        .checked_div(Uint256::from(total))?;
    let updated = reward_per_token(storage, pool, denom)?.checked_add(increase)?;
    REWARD_PER_TOKEN.save(storage, (pool, denom), &updated)?;

    events.push(
        Event::new("rewards_added")
            .add_attribute("pool", pool)
            .add_attribute("denom", denom)
            .add_attribute("amount", amount),
    );

    Ok(events)
}

/// Settles the user and zeroes every owed amount, returning the coins to send
pub fn pay_rewards(
    storage: &mut dyn Storage,
    pool: &str,
    user: &Addr,
) -> StdResult<(Vec<Coin>, Vec<Event>)> {
    settle(storage, pool, user)?;

    let mut coins = vec![];
    let mut events = vec![];
    for denom in reward_tokens(storage, pool)? {
        let owed = REWARDS_OWED
            .may_load(storage, (pool, user, denom.as_str()))?
            .unwrap_or_default();
        if owed.is_zero() {
            continue;
        }
        REWARDS_OWED.save(storage, (pool, user, denom.as_str()), &Uint128::zero())?;
        events.push(
            Event::new("rewards_paid")
                .add_attribute("pool", pool)
                .add_attribute("user", user)
                .add_attribute("denom", &denom)
                .add_attribute("amount", owed),
        );
        coins.push(coin(owed.u128(), denom));
    }

    Ok((coins, events))
}
