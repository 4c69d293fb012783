use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "market-mocks";

/// fee taken from the input, in thousandths
pub const FEE_PER_MILLE: u128 = 3;

// cw20 reserve token
pub const TOKEN: Item<Addr> = Item::new("token");
// native reserve denom
pub const DENOM: Item<String> = Item::new("denom");
