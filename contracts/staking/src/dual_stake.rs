use soroban_sdk::{Address, Env};

use crate::storage::{Config, PendingRewards, RewardPolicy, StakePosition, TotalStaked};

pub trait DualStakeTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        min_stake: i128,
        rate_a_per_second: i128,
        rate_b_per_second: i128,
        dual_bonus_bps: i128,
        exit_penalty_bps: i128,
    );

    fn update_reward_policy(
        env: Env,
        sender: Address,
        rate_a_per_second: i128,
        rate_b_per_second: i128,
        dual_bonus_bps: i128,
        exit_penalty_bps: i128,
    );

    fn set_lock_multiplier(env: Env, sender: Address, lock_period: u64, multiplier_bps: i128);

    // ################################################################
    //                             USER
    // ################################################################

    fn stake_leg_a(env: Env, sender: Address, amount: i128, lock_period: u64);

    fn stake_leg_b(env: Env, sender: Address, amount: i128, lock_period: u64);

    fn unstake_leg_a(env: Env, sender: Address, amount: i128);

    fn unstake_leg_b(env: Env, sender: Address, amount: i128);

    fn claim_rewards(env: Env, sender: Address);

    fn compound_reward_a(env: Env, sender: Address);

    fn emergency_exit(env: Env, sender: Address);

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_pending_rewards(env: Env, address: Address) -> PendingRewards;

    fn query_position(env: Env, address: Address) -> StakePosition;

    fn query_total_staked(env: Env) -> TotalStaked;

    fn query_config(env: Env) -> Config;

    fn query_reward_policy(env: Env) -> RewardPolicy;

    fn query_admin(env: Env) -> Address;
}
