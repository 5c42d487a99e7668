extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};
use yieldbtc::constants::{BPS_DENOMINATOR, SECONDS_PER_YEAR};

use super::setup::{deploy_staking_contract, deploy_token_contract, THIRTY_DAYS};

#[test]
fn emergency_exit_applies_penalty_to_both_legs() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);
    staking.set_lock_multiplier(&admin, &THIRTY_DAYS, &15_000);

    token_a.asset.mint(&user, &10_000);
    token_b.asset.mint(&user, &5_000);
    staking.stake_leg_a(&user, &10_000, &THIRTY_DAYS);
    staking.stake_leg_b(&user, &5_000, &0);

    // The lock blocks a normal unstake but not the emergency path.
    assert!(staking.try_unstake_leg_a(&user, &10_000).is_err());

    staking.emergency_exit(&user);

    // 5% penalty stays in contract custody.
    assert_eq!(token_a.client.balance(&user), 9_500);
    assert_eq!(token_a.client.balance(&staking.address), 500);
    assert_eq!(token_b.client.balance(&user), 4_750);
    assert_eq!(token_b.client.balance(&staking.address), 250);

    let position = staking.query_position(&user);
    assert_eq!(position.principal_a, 0);
    assert_eq!(position.principal_b, 0);
    assert_eq!(position.lock_expiry, 0);
    assert_eq!(position.lock_multiplier_bps, BPS_DENOMINATOR);

    let totals = staking.query_total_staked();
    assert_eq!(totals.total_a, 0);
    assert_eq!(totals.total_b, 0);
}

#[test]
fn emergency_exit_keeps_accrued_rewards() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);

    token_a.asset.mint(&user, &10_000);
    staking.stake_leg_a(&user, &10_000, &0);

    env.ledger().with_mut(|li| {
        li.timestamp = SECONDS_PER_YEAR;
    });
    staking.emergency_exit(&user);

    // Principal is penalized, accrued rewards are not.
    let position = staking.query_position(&user);
    assert_eq!(position.reward_a, 10_000_000);

    token_b.asset.mint(&staking.address, &10_000_000);
    staking.claim_rewards(&user);
    assert_eq!(token_b.client.balance(&user), 10_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #17)")]
fn emergency_exit_with_nothing_staked_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);

    staking.emergency_exit(&user);
}
