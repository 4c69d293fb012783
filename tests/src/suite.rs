use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, Addr, Coin, Empty, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse, TokenInfoResponse};
use cw20_base::msg::InstantiateMsg as Cw20InstantiateMsg;
use cw_multi_test::{App, AppResponse, BankSudo, Contract, ContractWrapper, Executor, SudoMsg};

use lnt_msg::{
    market::{InstantiateMsg as MarketInstantiateMsg, QueryMsg as MarketQueryMsg},
    utils::{nft_denom, SECONDS_PER_DAY},
    vault::{
        CalcSwapResponse, CallbackMsg, CollectableYtResponse, Config, DepositInfo, EpochInfo,
        ExecuteMsg, InstantiateMsg, NftKind, QueryMsg, RedeemInfo, RewardOption, SwapSettings,
        TimeWeightedInfo, UpdateConfigMsg, VestingSchedule, VtAmountResponse,
    },
};

pub const ADMIN: &str = "admin";
pub const TREASURY: &str = "treasury";
pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";
pub const CAROL: &str = "carol";
pub const ATTACKER: &str = "attacker";

pub const NFT_CLASS: &str = "lnt";
pub const PAYMENT_DENOM: &str = "uusdt";
pub const T_DENOM: &str = "uvest";
pub const REWARD_DENOM: &str = "ureward";

pub const ONE_DAY: u64 = SECONDS_PER_DAY;
pub const EPOCH_DURATION: u64 = 15 * ONE_DAY;
pub const VESTING_DURATION: u64 = 100 * ONE_DAY;
pub const AMOUNT_PER_UNIT: u128 = 10_000_000_000;
/// 0.1 payment token per yield token
pub const YT_PRICE: u128 = 1_000_000_000;

pub fn contract_vault() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(
        lnt_vault::contract::execute,
        lnt_vault::contract::instantiate,
        lnt_vault::contract::query,
    )
    .with_migrate(lnt_vault::contract::migrate);

    Box::new(contract)
}

pub fn contract_token() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );

    Box::new(contract)
}

pub fn contract_market() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new_with_empty(
        market_mocks::contract::execute,
        market_mocks::contract::instantiate,
        market_mocks::contract::query,
    );

    Box::new(contract)
}

pub fn swap_settings(price: u128) -> SwapSettings {
    SwapSettings {
        epoch_duration: EPOCH_DURATION,
        payment_denom: PAYMENT_DENOM.to_string(),
        payment_decimals: 6,
        price: Uint128::new(price),
    }
}

/// alice stakes one NFT and bob two, all claimed on day 3. carol holds payment tokens
pub fn staked_suite() -> Suite {
    let mut suite = SuiteBuilder::new().build();
    suite.initialize_default().unwrap();

    suite.mint_nft(ALICE, "1", 1).unwrap();
    suite.mint_nft(BOB, "2", 1).unwrap();
    suite.mint_nft(BOB, "3", 1).unwrap();
    suite.deposit(ALICE, "1", 1).unwrap();
    suite.deposit(BOB, "2", 1).unwrap();
    suite.deposit(BOB, "3", 1).unwrap();

    suite.update_time(3 * ONE_DAY);
    for (user, deposit_id) in [(ALICE, 1), (BOB, 2), (BOB, 3)] {
        suite.claim_deposit(user, deposit_id).unwrap();
    }
    suite.mint_native(CAROL, PAYMENT_DENOM, 1_000_000_000).unwrap();
    suite
}

#[derive(Debug)]
pub struct SuiteBuilder {
    pub nft_kind: NftKind,
    pub leading_time: Option<u64>,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self {
            nft_kind: NftKind::Single,
            leading_time: None,
        }
    }

    pub fn with_nft_kind(mut self, nft_kind: NftKind) -> Self {
        self.nft_kind = nft_kind;
        self
    }

    pub fn with_leading_time(mut self, leading_time: u64) -> Self {
        self.leading_time = Some(leading_time);
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let mut app: App = App::default();
        let admin = Addr::unchecked(ADMIN);

        let vault_id = app.store_code(contract_vault());
        let vault_contract = app
            .instantiate_contract(
                vault_id,
                admin.clone(),
                &InstantiateMsg {
                    owner: ADMIN.to_string(),
                    treasury: TREASURY.to_string(),
                    nft_class: NFT_CLASS.to_string(),
                    nft_kind: self.nft_kind.clone(),
                    leading_time: self.leading_time,
                    market_router: None,
                },
                &[],
                "lnt vault",
                Some(ADMIN.to_string()),
            )
            .unwrap();

        let token_id = app.store_code(contract_token());
        let vt_contract = app
            .instantiate_contract(
                token_id,
                admin.clone(),
                &Cw20InstantiateMsg {
                    name: "vesting claim".to_owned(),
                    symbol: "vLNT".to_owned(),
                    decimals: 6,
                    initial_balances: vec![],
                    mint: Some(MinterResponse {
                        minter: vault_contract.to_string(),
                        cap: None,
                    }),
                    marketing: None,
                },
                &[],
                "vt",
                None,
            )
            .unwrap();

        let market_id = app.store_code(contract_market());
        let market_contract = app
            .instantiate_contract(
                market_id,
                admin.clone(),
                &MarketInstantiateMsg {
                    token: vt_contract.to_string(),
                    denom: T_DENOM.to_string(),
                },
                &[],
                "market",
                None,
            )
            .unwrap();

        // the market needs the claim token, which needs the vault as minter
        app.execute_contract(
            admin.clone(),
            vault_contract.clone(),
            &ExecuteMsg::UpdateConfig {
                config: UpdateConfigMsg {
                    market_router: Some(market_contract.to_string()),
                    ..Default::default()
                },
            },
            &[],
        )
        .unwrap();

        let start_time = app.block_info().time.seconds();

        Suite {
            app,
            admin,
            vault_contract,
            vt_contract,
            market_contract,
            start_time,
        }
    }
}

impl Default for SuiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Suite {
    app: App,
    admin: Addr,
    vault_contract: Addr,
    vt_contract: Addr,
    market_contract: Addr,
    start_time: u64,
}

impl Suite {
    pub fn admin(&self) -> String {
        self.admin.to_string()
    }
    pub fn vault_contract(&self) -> String {
        self.vault_contract.to_string()
    }
    pub fn vt_contract(&self) -> String {
        self.vt_contract.to_string()
    }
    pub fn market_contract(&self) -> String {
        self.market_contract.to_string()
    }
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    // update block's time to simulate passage of time
    pub fn update_time(&mut self, time_update: u64) {
        let mut block = self.app.block_info();
        block.time = block.time.plus_seconds(time_update);
        self.app.set_block(block);
    }

    // get block's time
    pub fn get_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    /// Single schedule for the whole class, vesting from the suite start
    pub fn default_schedules(&self) -> Vec<VestingSchedule> {
        vec![VestingSchedule {
            token_id: None,
            weight: 1,
            amount_per_unit: Uint128::new(AMOUNT_PER_UNIT),
            vesting_start_time: self.start_time,
            vesting_duration: VESTING_DURATION,
        }]
    }

    pub fn mint_native(
        &mut self,
        recipient: &str,
        denom: &str,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.sudo(SudoMsg::Bank(BankSudo::Mint {
            to_address: recipient.to_string(),
            amount: vec![coin(amount, denom)],
        }))
    }

    pub fn mint_nft(&mut self, owner: &str, token_id: &str, units: u128) -> AnyResult<AppResponse> {
        self.mint_native(owner, &nft_denom(NFT_CLASS, token_id), units)
    }

    pub fn query_balance_native(&self, address: &str, denom: &str) -> StdResult<u128> {
        Ok(self.app.wrap().query_balance(address, denom)?.amount.u128())
    }

    pub fn query_nft_balance(&self, address: &str, token_id: &str) -> StdResult<u128> {
        self.query_balance_native(address, &nft_denom(NFT_CLASS, token_id))
    }

    fn execute(
        &mut self,
        sender: &str,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.vault_contract.clone(),
            msg,
            funds,
        )
    }

    fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> StdResult<T> {
        self.app
            .wrap()
            .query_wasm_smart(self.vault_contract.clone(), msg)
    }

    pub fn update_owner(&mut self, sender: &str, owner: &str) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::UpdateOwner {
                owner: owner.to_string(),
            },
            &[],
        )
    }

    pub fn update_config(
        &mut self,
        sender: &str,
        config: UpdateConfigMsg,
    ) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::UpdateConfig { config }, &[])
    }

    pub fn update_param_value(
        &mut self,
        sender: &str,
        key: &str,
        value: u128,
    ) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::UpdateParamValue {
                key: key.to_string(),
                value: Uint128::new(value),
            },
            &[],
        )
    }

    pub fn initialize(
        &mut self,
        sender: &str,
        vesting_schedules: Vec<VestingSchedule>,
        swap: SwapSettings,
    ) -> AnyResult<AppResponse> {
        let vt_token = self.vt_contract();
        self.execute(
            sender,
            &ExecuteMsg::Initialize {
                vt_token,
                vesting_schedules,
                swap,
            },
            &[],
        )
    }

    /// Initializes a single kind vault with the default schedule and price
    pub fn initialize_default(&mut self) -> AnyResult<AppResponse> {
        self.initialize(ADMIN, self.default_schedules(), swap_settings(YT_PRICE))
    }

    pub fn re_initialize(&mut self, sender: &str, swap: SwapSettings) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::ReInitialize { swap }, &[])
    }

    pub fn start_epoch_1(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::StartEpoch1 {}, &[])
    }

    /// Deposits `units` of `token_id` held by `sender`
    pub fn deposit(&mut self, sender: &str, token_id: &str, units: u128) -> AnyResult<AppResponse> {
        self.deposit_with_funds(
            sender,
            token_id,
            &[coin(units, nft_denom(NFT_CLASS, token_id))],
        )
    }

    pub fn deposit_with_funds(
        &mut self,
        sender: &str,
        token_id: &str,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::Deposit {
                token_id: token_id.to_string(),
            },
            funds,
        )
    }

    pub fn claim_deposit(&mut self, sender: &str, deposit_id: u64) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::ClaimDeposit { deposit_id }, &[])
    }

    pub fn redeem(&mut self, sender: &str, deposit_id: u64) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::Redeem { deposit_id }, &[])
    }

    pub fn claim_redeem(&mut self, sender: &str, deposit_id: u64) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::ClaimRedeem { deposit_id }, &[])
    }

    pub fn swap(
        &mut self,
        sender: &str,
        payment: u128,
        min_yt_out: Option<u128>,
    ) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::Swap {
                min_yt_out: min_yt_out.map(Uint128::new),
            },
            &[coin(payment, PAYMENT_DENOM)],
        )
    }

    pub fn add_yt_rewards(
        &mut self,
        sender: &str,
        opt: RewardOption,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::AddYtRewards { opt },
            &[coin(amount, REWARD_DENOM)],
        )
    }

    pub fn collect_yt(&mut self, sender: &str, epoch_id: u64) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::CollectYt { epoch_id }, &[])
    }

    pub fn claim_yt_rewards(
        &mut self,
        sender: &str,
        epoch_id: u64,
        opt: RewardOption,
    ) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::ClaimYtRewards { epoch_id, opt }, &[])
    }

    pub fn claim_staking_rewards(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::ClaimStakingRewards {}, &[])
    }

    pub fn initialize_t(&mut self, sender: &str) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::InitializeT {
                denom: T_DENOM.to_string(),
            },
            &[],
        )
    }

    pub fn deposit_t(&mut self, sender: &str, amount: u128) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::DepositT {}, &[coin(amount, T_DENOM)])
    }

    pub fn withdraw_t(&mut self, sender: &str, amount: u128) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::WithdrawT {
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn redeem_t(&mut self, sender: &str, amount: u128) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::RedeemT {
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn buyback(
        &mut self,
        sender: &str,
        amount_in: u128,
        min_amount_out: u128,
    ) -> AnyResult<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::Buyback {
                amount_in: Uint128::new(amount_in),
                min_amount_out: Uint128::new(min_amount_out),
            },
            &[],
        )
    }

    pub fn callback(&mut self, sender: &str, msg: CallbackMsg) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::Callback(msg), &[])
    }

    /// Lets the vault burn `amount` of the sender's claim tokens
    pub fn approve_vt(&mut self, sender: &str, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.vt_contract.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: self.vault_contract.to_string(),
                amount: Uint128::new(amount),
                expires: None,
            },
            &[],
        )
    }

    pub fn transfer_vt(
        &mut self,
        sender: &str,
        recipient: &str,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.vt_contract.clone(),
            &Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn query_vt_balance(&self, address: &str) -> StdResult<u128> {
        let res: BalanceResponse = self.app.wrap().query_wasm_smart(
            self.vt_contract.clone(),
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )?;
        Ok(res.balance.u128())
    }

    pub fn query_vt_total_supply(&self) -> StdResult<u128> {
        let res: TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.vt_contract.clone(), &Cw20QueryMsg::TokenInfo {})?;
        Ok(res.total_supply.u128())
    }

    pub fn query_simulate_buyback(&self, amount_in: u128) -> StdResult<u128> {
        let res: Uint128 = self.app.wrap().query_wasm_smart(
            self.market_contract.clone(),
            &MarketQueryMsg::SimulateSwap {
                amount_in: Uint128::new(amount_in),
            },
        )?;
        Ok(res.u128())
    }

    pub fn query_config(&self) -> StdResult<Config> {
        self.query(&QueryMsg::Config {})
    }

    pub fn query_owner(&self) -> StdResult<Addr> {
        self.query(&QueryMsg::Owner {})
    }

    pub fn query_param_value(&self, key: &str) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::ParamValue {
            key: key.to_string(),
        })?;
        Ok(res.u128())
    }

    pub fn query_deposit_info(&self, deposit_id: u64) -> StdResult<DepositInfo> {
        self.query(&QueryMsg::DepositInfo { deposit_id })
    }

    pub fn query_user_deposits(
        &self,
        user: &str,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<Vec<DepositInfo>> {
        self.query(&QueryMsg::UserDeposits {
            user: user.to_string(),
            start_after,
            limit,
        })
    }

    pub fn query_redeem_info(&self, deposit_id: u64) -> StdResult<RedeemInfo> {
        self.query(&QueryMsg::RedeemInfo { deposit_id })
    }

    pub fn query_calc_claim_vt(&self, deposit_id: u64) -> StdResult<VtAmountResponse> {
        self.query(&QueryMsg::CalcClaimVt { deposit_id })
    }

    pub fn query_calc_redeem_vt(&self, deposit_id: u64) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::CalcRedeemVt { deposit_id })?;
        Ok(res.u128())
    }

    pub fn query_current_epoch_id(&self) -> StdResult<u64> {
        self.query(&QueryMsg::CurrentEpochId {})
    }

    pub fn query_epoch_info(&self, epoch_id: u64) -> StdResult<EpochInfo> {
        self.query(&QueryMsg::EpochInfo { epoch_id })
    }

    pub fn query_yt_balance(&self, epoch_id: u64, user: &str) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::YtBalance {
            epoch_id,
            user: user.to_string(),
        })?;
        Ok(res.u128())
    }

    pub fn query_calc_swap(&self, payment_amount: u128) -> StdResult<CalcSwapResponse> {
        self.query(&QueryMsg::CalcSwap {
            payment_amount: Uint128::new(payment_amount),
        })
    }

    pub fn query_y(&self) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::Y {})?;
        Ok(res.u128())
    }

    pub fn query_staking_balance(&self, user: &str) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::StakingBalance {
            user: user.to_string(),
        })?;
        Ok(res.u128())
    }

    pub fn query_staking_total_supply(&self) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::StakingTotalSupply {})?;
        Ok(res.u128())
    }

    pub fn query_staking_earned(&self, user: &str, denom: &str) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::StakingEarned {
            user: user.to_string(),
            denom: denom.to_string(),
        })?;
        Ok(res.u128())
    }

    pub fn query_yt_pool_balance(
        &self,
        epoch_id: u64,
        opt: RewardOption,
        user: &str,
    ) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::YtPoolBalance {
            epoch_id,
            opt,
            user: user.to_string(),
        })?;
        Ok(res.u128())
    }

    pub fn query_yt_pool_total_supply(&self, epoch_id: u64, opt: RewardOption) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::YtPoolTotalSupply { epoch_id, opt })?;
        Ok(res.u128())
    }

    pub fn query_yt_pool_earned(
        &self,
        epoch_id: u64,
        opt: RewardOption,
        user: &str,
    ) -> StdResult<u128> {
        let res: Uint128 = self.query(&QueryMsg::YtPoolEarned {
            epoch_id,
            opt,
            user: user.to_string(),
            denom: REWARD_DENOM.to_string(),
        })?;
        Ok(res.u128())
    }

    pub fn query_yt_pool_reward_tokens(
        &self,
        epoch_id: u64,
        opt: RewardOption,
    ) -> StdResult<Vec<String>> {
        self.query(&QueryMsg::YtPoolRewardTokens { epoch_id, opt })
    }

    pub fn query_collectable_yt(
        &self,
        epoch_id: u64,
        user: &str,
    ) -> StdResult<CollectableYtResponse> {
        self.query(&QueryMsg::CollectableYt {
            epoch_id,
            user: user.to_string(),
        })
    }

    pub fn query_time_weighted_info(
        &self,
        epoch_id: u64,
        user: &str,
    ) -> StdResult<TimeWeightedInfo> {
        self.query(&QueryMsg::TimeWeightedInfo {
            epoch_id,
            user: user.to_string(),
        })
    }
}
