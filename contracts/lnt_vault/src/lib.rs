/// Main contract logic
pub mod contract;
/// custom error handler
pub mod error;
/// state on the blockchain
pub mod state;

pub mod entry {
    pub mod execute;
    pub mod instantiate;
    pub mod migrate;
    pub mod query;
}

pub mod config;
pub mod epoch;
pub mod helpers;

pub mod math {
    pub mod curve;
    pub mod vesting;
}

pub mod rewards;
