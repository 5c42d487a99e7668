extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};
use yieldbtc::constants::SECONDS_PER_YEAR;

use super::setup::{deploy_staking_contract, deploy_token_contract, THIRTY_DAYS};
use crate::storage::PendingRewards;

#[test]
fn pending_rewards_accrue_over_time() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);

    token_a.asset.mint(&user, &10_000);
    staking.stake_leg_a(&user, &10_000, &0);

    assert_eq!(
        staking.query_pending_rewards(&user),
        PendingRewards {
            reward_a: 0,
            reward_b: 0,
        }
    );

    env.ledger().with_mut(|li| {
        li.timestamp = SECONDS_PER_YEAR;
    });

    // 10_000 principal * rate 1_000 over a full year, single leg, no bonus.
    assert_eq!(
        staking.query_pending_rewards(&user),
        PendingRewards {
            reward_a: 10_000_000,
            reward_b: 0,
        }
    );
}

#[test]
fn accrual_commits_on_pre_topup_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);

    token_a.asset.mint(&user, &20_000);
    staking.stake_leg_a(&user, &10_000, &0);

    env.ledger().with_mut(|li| {
        li.timestamp = SECONDS_PER_YEAR / 2;
    });
    staking.stake_leg_a(&user, &10_000, &0);

    // First half-year on 10_000, second on 20_000; the top-up must not
    // retroactively earn for the first half.
    env.ledger().with_mut(|li| {
        li.timestamp = SECONDS_PER_YEAR;
    });
    assert_eq!(
        staking.query_pending_rewards(&user),
        PendingRewards {
            reward_a: 5_000_000 + 10_000_000,
            reward_b: 0,
        }
    );
}

#[test]
fn dual_stake_bonus_scales_both_streams() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);

    token_a.asset.mint(&user, &10_000);
    token_b.asset.mint(&user, &5_000);
    staking.stake_leg_a(&user, &10_000, &0);
    staking.stake_leg_b(&user, &5_000, &0);

    env.ledger().with_mut(|li| {
        li.timestamp = SECONDS_PER_YEAR;
    });

    // Base 10_000_000 and 10_000_000, each scaled by the 20% dual bonus.
    assert_eq!(
        staking.query_pending_rewards(&user),
        PendingRewards {
            reward_a: 12_000_000,
            reward_b: 12_000_000,
        }
    );
}

#[test]
fn lock_multiplier_scales_pending_rewards() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);
    staking.set_lock_multiplier(&admin, &THIRTY_DAYS, &20_000);

    token_a.asset.mint(&user, &10_000);
    staking.stake_leg_a(&user, &10_000, &THIRTY_DAYS);

    env.ledger().with_mut(|li| {
        li.timestamp = SECONDS_PER_YEAR;
    });

    assert_eq!(staking.query_pending_rewards(&user).reward_a, 20_000_000);
}

#[test]
fn claim_rewards_pays_in_token_b() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);

    token_a.asset.mint(&user, &10_000);
    staking.stake_leg_a(&user, &10_000, &0);

    // Fund the reward treasury.
    token_b.asset.mint(&staking.address, &10_000_000);

    env.ledger().with_mut(|li| {
        li.timestamp = SECONDS_PER_YEAR;
    });
    staking.claim_rewards(&user);

    assert_eq!(token_b.client.balance(&user), 10_000_000);
    assert_eq!(token_b.client.balance(&staking.address), 0);

    let position = staking.query_position(&user);
    assert_eq!(position.reward_a, 0);
    assert_eq!(position.reward_b, 0);
    assert_eq!(position.last_accrual_ts, Some(SECONDS_PER_YEAR));
    assert_eq!(
        staking.query_pending_rewards(&user),
        PendingRewards {
            reward_a: 0,
            reward_b: 0,
        }
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #15)")]
fn claim_with_nothing_accrued_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);

    token_a.asset.mint(&user, &10_000);
    staking.stake_leg_a(&user, &10_000, &0);
    staking.claim_rewards(&user);
}

#[test]
fn compound_reward_a_restakes_into_leg_b() {
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
    staking.compound_reward_a(&user);

    let position = staking.query_position(&user);
    assert_eq!(position.reward_a, 0);
    assert_eq!(position.principal_b, 10_000_000);
    assert_eq!(staking.query_total_staked().total_b, 10_000_000);

    // Rewards were already in custody; compounding moves no tokens.
    assert_eq!(token_b.client.balance(&user), 0);
    assert_eq!(token_b.client.balance(&staking.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #16)")]
fn compound_with_nothing_accrued_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let token_a = deploy_token_contract(&env, &admin);
    let token_b = deploy_token_contract(&env, &admin);

    let staking = deploy_staking_contract(&env, &admin, &token_a.address, &token_b.address);

    token_a.asset.mint(&user, &10_000);
    staking.stake_leg_a(&user, &10_000, &0);
    staking.compound_reward_a(&user);
}

#[test]
fn policy_update_only_affects_later_accrual() {
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
    // The rate change applies from here on; the first year was never
    // committed, so it is recomputed at the new rate on the next touch.
    staking.update_reward_policy(&admin, &2_000, &0, &0, &0);

    env.ledger().with_mut(|li| {
        li.timestamp = 2 * SECONDS_PER_YEAR;
    });
    assert_eq!(staking.query_pending_rewards(&user).reward_a, 40_000_000);
}
