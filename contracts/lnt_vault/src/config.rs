use lnt_msg::utils::SECONDS_PER_DAY;

pub const ONE_HOUR: u64 = 3_600;

/// fixed point base of fee rates and the yield token price
pub const SETTINGS_DECIMALS: u32 = 10;
pub const SETTINGS_BASE: u128 = 10_000_000_000;

/// one staked NFT weight backs one yield token with these decimals
pub const YT_DECIMALS: u32 = 18;
pub const YT_UNIT: u128 = 1_000_000_000_000_000_000;

/// reward per token precision used by every reward pool
pub const REWARD_SCALE: u128 = 1_000_000_000_000_000_000_000_000_000_000_000_000;

pub const DEFAULT_LEADING_TIME: u64 = 3 * SECONDS_PER_DAY;
pub const MAX_LEADING_TIME: u64 = 90 * SECONDS_PER_DAY;

pub const PARAM_F1: &str = "f1";
pub const PARAM_F2: &str = "f2";
pub const PARAM_D: &str = "D";

/// key, default, min, max
pub const PARAM_BOUNDS: &[(&str, u128, u128, u128)] = &[
    // deposit/redeem fee, up to 50%
    (PARAM_F1, 0, 0, SETTINGS_BASE / 2),
    // swap fee, up to 50%
    (PARAM_F2, 0, 0, SETTINGS_BASE / 2),
    // curve decay period in seconds
    (
        PARAM_D,
        (30 * SECONDS_PER_DAY) as u128,
        ONE_HOUR as u128,
        (3_650 * SECONDS_PER_DAY) as u128,
    ),
];

pub const MIN_EPOCH_DURATION: u64 = ONE_HOUR;

pub const BUYBACK_DEADLINE: u64 = 300;

pub const DEFAULT_QUERY_LIMIT: u32 = 10;
pub const MAX_QUERY_LIMIT: u32 = 30;
