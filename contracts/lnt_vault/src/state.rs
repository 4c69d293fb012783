use cosmwasm_std::{Addr, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

use lnt_msg::vault::{Config, DepositInfo, EpochInfo, RedeemInfo, VaultSettings};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "lnt vault contract";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const OWNER: Admin = Admin::new("owner");
pub const CONFIG: Item<Config> = Item::new("config");
// f1, f2 and D
pub const PARAMS: Map<&str, Uint128> = Map::new("params");
// set by Initialize
pub const SETTINGS: Item<VaultSettings> = Item::new("settings");
pub const VESTING_TOKEN: Item<String> = Item::new("vesting_token");

pub const DEPOSIT_COUNT: Item<u64> = Item::new("deposit_count");
pub const DEPOSITS: Map<u64, DepositInfo> = Map::new("deposits");
// (owner, deposit id)
pub const USER_DEPOSITS: Map<(&Addr, u64), bool> = Map::new("user_deposits");
pub const REDEEMS: Map<u64, RedeemInfo> = Map::new("redeems");

// 0 until epoch 1 is started
pub const CURRENT_EPOCH_ID: Item<u64> = Item::new("current_epoch_id");
pub const EPOCHS: Map<u64, EpochInfo> = Map::new("epochs");
// yield token balances (epoch id, user)
pub const YT_BALANCES: Map<(u64, &Addr), Uint128> = Map::new("yt_balances");
