pub mod market;
pub mod utils;
pub mod vault;
