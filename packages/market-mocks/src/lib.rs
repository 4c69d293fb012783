pub mod contract;
pub mod error;
pub mod state;

pub mod actions {
    pub mod execute;
    pub mod instantiate;
    pub mod query;
}
