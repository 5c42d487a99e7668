use soroban_sdk::{token, Address, Env};

use crate::contract::{Staking, StakingClient};

pub const MIN_STAKE: i128 = 100;
pub const RATE_A: i128 = 1_000;
pub const RATE_B: i128 = 2_000;
pub const DUAL_BONUS_BPS: i128 = 2_000;
pub const EXIT_PENALTY_BPS: i128 = 500;

pub const ONE_DAY: u64 = 86_400;
pub const THIRTY_DAYS: u64 = 30 * ONE_DAY;

pub struct TokenContract<'a> {
    pub client: token::Client<'a>,
    pub asset: token::StellarAssetClient<'a>,
    pub address: Address,
}

pub fn deploy_token_contract<'a>(env: &Env, admin: &Address) -> TokenContract<'a> {
    let address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    TokenContract {
        client: token::Client::new(env, &address),
        asset: token::StellarAssetClient::new(env, &address),
        address,
    }
}

pub fn deploy_staking_contract<'a>(
    env: &Env,
    admin: &Address,
    token_a: &Address,
    token_b: &Address,
) -> StakingClient<'a> {
    let staking = StakingClient::new(env, &env.register(Staking, ()));

    staking.initialize(
        admin,
        token_a,
        token_b,
        &MIN_STAKE,
        &RATE_A,
        &RATE_B,
        &DUAL_BONUS_BPS,
        &EXIT_PENALTY_BPS,
    );
    staking
}
