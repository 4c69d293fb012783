//! Interface of the spot market used by the vault buyback.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct InstantiateMsg {
    /// cw20 token traded against the native reserve
    pub token: String,
    /// native denom of the other reserve
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Sell the attached native coin for at least `min_amount_out` of `token_out`
    SwapExactInput {
        token_out: String,
        min_amount_out: Uint128,
        deadline: u64,
        recipient: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Uint128)]
    SimulateSwap { amount_in: Uint128 },
}
