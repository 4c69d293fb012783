use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Deadline expired")]
    DeadlineExpired {},

    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Output {got} is less than expected {expected}")]
    SlippageExceeded { got: Uint128, expected: Uint128 },
}
