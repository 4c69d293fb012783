use cosmwasm_std::{DivideByZeroError, OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

use cw_controllers::AdminError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("Already claimed")]
    AlreadyClaimed {},

    #[error("Already initialized")]
    AlreadyInitialized {},

    #[error("Already initialized T")]
    AlreadyInitializedT {},

    #[error("Already reinitialized")]
    AlreadyReInitialized {},

    #[error("Already redeemed")]
    AlreadyRedeemed {},

    #[error("Cannot add rewards without stake")]
    CannotAddRewardsWithoutStake {},

    #[error("Cannot swap without stake")]
    CannotSwapWithoutStake {},

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("Epoch 1 already started")]
    EpochAlreadyStarted {},

    #[error("Epoch not started")]
    EpochNotStarted {},

    #[error("Epoch {0} not found")]
    EpochNotFound(u64),

    #[error("Insufficient token balance: {available} < {required}")]
    InsufficientTokenBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Callbacks cannot be invoked externally")]
    InvalidCallbackInvoke {},

    #[error("Invalid epoch duration: {0}")]
    InvalidEpochDuration(u64),

    #[error("Invalid leading time: {0}")]
    InvalidLeadingTime(u64),

    #[error("Invalid value {value} for param {key}")]
    InvalidParamValue { key: String, value: Uint128 },

    #[error("Invalid swap settings")]
    InvalidSwapSettings {},

    #[error("Invalid value")]
    InvalidValue {},

    #[error("Invalid vesting schedules")]
    InvalidVestingSchedule {},

    #[error("Market router not set")]
    MarketRouterNotSet {},

    #[error("No deposit found: {0}")]
    NoDepositFound(u64),

    #[error("No vesting schedule for token {0}")]
    NoVestingSchedule(String),

    #[error("Not claimable yet")]
    NotClaimableYet {},

    #[error("Not claimed deposit yet")]
    NotClaimed {},

    #[error("Not initialized")]
    NotInitialized {},

    #[error("Not initialized T")]
    NotInitializedT {},

    #[error("Not owner of NFT")]
    NotOwner {},

    #[error("Not redeemed")]
    NotRedeemed {},

    #[error("Not user of deposit")]
    NotUser {},

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("Swap output {got} is less than expected {expected}")]
    SlippageExceeded { got: Uint128, expected: Uint128 },

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unknown param: {0}")]
    UnknownParam(String),

    #[error("Contract name must be same: {0}")]
    ContractNameErr(String),

    #[error("Failed to parse previous version")]
    ParsingPrevVersion,

    #[error("Failed to parse new version")]
    ParsingNewVersion,

    #[error("Msg version is not equal contract new version")]
    ImproperMsgVersion,

    #[error("Token amount must not be zero")]
    ZeroAmount {},
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
