use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, Env, StdResult, Uint128, Uint256, WasmMsg};

#[cw_serde]
pub struct MigrateMsg {
    pub version: String,
}

/// How NFTs of the custodied class are counted
#[cw_serde]
pub enum NftKind {
    /// one unit per token id, a single vesting schedule for the whole class
    Single,
    /// any number of units per token id, one vesting schedule per token id
    Multi,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner for updating
    pub owner: String,
    /// receives deposit and swap fees
    pub treasury: String,
    /// NFTs are held as `{nft_class}/{token_id}` denoms
    pub nft_class: String,
    pub nft_kind: NftKind,
    /// delay between deposit and claim, defaults to 3 days
    pub leading_time: Option<u64>,
    /// spot market used by buyback
    pub market_router: Option<String>,
}

#[cw_serde]
pub struct Config {
    pub treasury: Addr,
    pub nft_class: String,
    pub nft_kind: NftKind,
    pub leading_time: u64,
    pub market_router: Option<Addr>,
}

#[cw_serde]
#[derive(Default)]
pub struct UpdateConfigMsg {
    pub treasury: Option<String>,
    pub leading_time: Option<u64>,
    pub market_router: Option<String>,
}

#[cw_serde]
pub struct VestingSchedule {
    /// must be empty for `NftKind::Single`
    pub token_id: Option<String>,
    /// staking weight of one unit
    pub weight: u64,
    /// amount of vesting token released by one unit over the whole schedule
    pub amount_per_unit: Uint128,
    pub vesting_start_time: u64,
    pub vesting_duration: u64,
}

impl VestingSchedule {
    pub fn end_time(&self) -> u64 {
        self.vesting_start_time + self.vesting_duration
    }
}

/// Yield token sale terms applied to every epoch started after they are set
#[cw_serde]
pub struct SwapSettings {
    pub epoch_duration: u64,
    pub payment_denom: String,
    pub payment_decimals: u8,
    /// payment units per yield token with 10 decimals, `10^9` is 0.1
    pub price: Uint128,
}

#[cw_serde]
pub struct VaultSettings {
    /// cw20 claim token minted by the vault
    pub vt_token: Addr,
    pub vesting_schedules: Vec<VestingSchedule>,
    pub swap: SwapSettings,
    pub reinitialized: bool,
}

#[cw_serde]
pub enum RewardOption {
    /// rewards split by current yield token balance
    Opt1,
    /// rewards split by yield token balance multiplied by holding time
    Opt2,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Change the owner
    UpdateOwner {
        owner: String,
    },
    /// Change config
    UpdateConfig {
        config: UpdateConfigMsg,
    },
    /// Set one of `f1`, `f2` or `D`
    UpdateParamValue {
        key: String,
        value: Uint128,
    },
    Initialize {
        vt_token: String,
        vesting_schedules: Vec<VestingSchedule>,
        swap: SwapSettings,
    },
    /// Replace yield token sale terms for upcoming epochs, allowed once
    ReInitialize {
        swap: SwapSettings,
    },
    StartEpoch1 {},
    /// Put the attached NFT into custody
    Deposit {
        token_id: String,
    },
    ClaimDeposit {
        deposit_id: u64,
    },
    /// Burn claim tokens and queue the NFT for release after the current epoch
    Redeem {
        deposit_id: u64,
    },
    ClaimRedeem {
        deposit_id: u64,
    },
    /// Buy yield tokens of the current epoch with the attached payment
    Swap {
        min_yt_out: Option<Uint128>,
    },
    AddYtRewards {
        opt: RewardOption,
    },
    CollectYt {
        epoch_id: u64,
    },
    ClaimYtRewards {
        epoch_id: u64,
        opt: RewardOption,
    },
    ClaimStakingRewards {},
    InitializeT {
        denom: String,
    },
    DepositT {},
    WithdrawT {
        amount: Uint128,
    },
    /// Swap claim tokens 1:1 for the vesting token once vesting is over
    RedeemT {
        amount: Uint128,
    },
    /// Spend vesting token on the market and burn the claim tokens bought
    Buyback {
        amount_in: Uint128,
        min_amount_out: Uint128,
    },
    Callback(CallbackMsg),
}

#[cw_serde]
pub enum CallbackMsg {
    BurnBoughtBack { prev_vt_balance: Uint128 },
}

impl CallbackMsg {
    pub fn to_cosmos_msg(self, env: &Env) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: env.contract.address.to_string(),
            msg: to_json_binary(&ExecuteMsg::Callback(self))?,
            funds: vec![],
        }))
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(Addr)]
    Owner {},
    #[returns(Option<VaultSettings>)]
    Settings {},
    /// denom of the vesting token once set
    #[returns(Option<String>)]
    VestingToken {},
    #[returns(Uint128)]
    ParamValue { key: String },
    #[returns(DepositInfo)]
    DepositInfo { deposit_id: u64 },
    #[returns(Vec<DepositInfo>)]
    UserDeposits {
        user: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(RedeemInfo)]
    RedeemInfo { deposit_id: u64 },
    /// claim tokens minted by claiming the deposit now
    #[returns(VtAmountResponse)]
    CalcClaimVt { deposit_id: u64 },
    /// claim tokens burned by redeeming the deposit now
    #[returns(Uint128)]
    CalcRedeemVt { deposit_id: u64 },
    #[returns(u64)]
    CurrentEpochId {},
    #[returns(EpochInfo)]
    EpochInfo { epoch_id: u64 },
    #[returns(Uint128)]
    YtBalance { epoch_id: u64, user: String },
    /// preview of a swap with net payment `payment_amount`
    #[returns(CalcSwapResponse)]
    CalcSwap { payment_amount: Uint128 },
    /// current yield token price in payment units
    #[returns(Uint128)]
    Y {},
    #[returns(Uint128)]
    StakingBalance { user: String },
    #[returns(Uint128)]
    StakingTotalSupply {},
    #[returns(Uint128)]
    StakingEarned { user: String, denom: String },
    #[returns(Uint128)]
    YtPoolBalance {
        epoch_id: u64,
        opt: RewardOption,
        user: String,
    },
    #[returns(Uint128)]
    YtPoolTotalSupply { epoch_id: u64, opt: RewardOption },
    #[returns(Uint128)]
    YtPoolEarned {
        epoch_id: u64,
        opt: RewardOption,
        user: String,
        denom: String,
    },
    #[returns(Vec<String>)]
    YtPoolRewardTokens { epoch_id: u64, opt: RewardOption },
    #[returns(CollectableYtResponse)]
    CollectableYt { epoch_id: u64, user: String },
    #[returns(TimeWeightedInfo)]
    TimeWeightedInfo { epoch_id: u64, user: String },
}

#[cw_serde]
pub struct DepositInfo {
    pub deposit_id: u64,
    pub owner: Addr,
    pub token_id: String,
    pub value: Uint128,
    pub deposit_time: u64,
    pub claim_time: Option<u64>,
    pub claimed: bool,
    /// `f1` used to mint, reused to compute the burn on redeem
    pub f1_on_claim: Uint128,
    pub redeemed: bool,
}

#[cw_serde]
pub struct RedeemInfo {
    pub deposit_id: u64,
    pub owner: Addr,
    pub epoch_at_redeem: u64,
    pub redeem_time: u64,
    pub claimed: bool,
}

#[cw_serde]
pub struct EpochInfo {
    pub epoch_id: u64,
    pub start_time: u64,
    pub duration: u64,
    pub yt_total_supply: Uint128,
    pub payment_denom: String,
    pub payment_decimals: u8,
    pub yt_swap_price: Uint128,
    /// yield tokens left on the curve
    pub x: Uint128,
    pub k0: Uint256,
}

impl EpochInfo {
    pub fn end_time(&self) -> u64 {
        self.start_time + self.duration
    }
}

#[cw_serde]
pub struct VtAmountResponse {
    pub net: Uint128,
    pub fee: Uint128,
}

#[cw_serde]
pub struct CalcSwapResponse {
    pub x_updated: Uint128,
    pub yt_amount: Uint128,
}

#[cw_serde]
pub struct CollectableYtResponse {
    pub effective_time: u64,
    pub amount: Uint128,
}

#[cw_serde]
pub struct TimeWeightedInfo {
    pub yt_sum: Uint128,
    pub last_collect_time: u64,
    pub balance: Uint128,
    pub epoch_end_time: u64,
}
