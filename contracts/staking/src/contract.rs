use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, symbol_short, token, Address, Env,
    Map,
};
use yieldbtc::{
    constants::{
        BPS_DENOMINATOR, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, NO_LOCK_PERIOD,
    },
    error::ErrorCode,
    math::safe_math::SafeMath,
    validate,
};

use crate::{
    controller,
    dual_stake::DualStakeTrait,
    events::StakingEvents,
    storage::{
        get_config, get_position, get_reward_policy, get_total_staked, save_config, save_position,
        save_reward_policy, save_total_staked,
        utils::{get_admin, is_initialized, save_admin, set_initialized},
        Config, PendingRewards, RewardPolicy, StakePosition, TotalStaked,
    },
};

contractmeta!(
    key = "Description",
    val = "Dual-leg staking ledger paying time-weighted rewards on BTC receipt tokens"
);

#[contract]
pub struct Staking;

#[contractimpl]
impl DualStakeTrait for Staking {
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
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Staking: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }
        set_initialized(&env);

        validate!(&env, min_stake > 0, ErrorCode::InvalidPolicy);
        validate_policy_values(
            &env,
            rate_a_per_second,
            rate_b_per_second,
            dual_bonus_bps,
            exit_penalty_bps,
        );

        save_admin(&env, &admin);
        save_config(
            &env,
            &Config {
                token_a: token_a.clone(),
                token_b: token_b.clone(),
                min_stake,
            },
        );

        // Uncommitted positions default to the no-lock multiplier, so the
        // allow-list always carries it.
        let mut lock_multipliers = Map::new(&env);
        lock_multipliers.set(NO_LOCK_PERIOD, BPS_DENOMINATOR);
        save_reward_policy(
            &env,
            &RewardPolicy {
                rate_a_per_second,
                rate_b_per_second,
                dual_bonus_bps,
                exit_penalty_bps,
                lock_multipliers,
            },
        );
        save_total_staked(
            &env,
            &TotalStaked {
                total_a: 0,
                total_b: 0,
            },
        );

        StakingEvents::initialization(&env, admin, token_a, token_b, min_stake);
    }

    fn update_reward_policy(
        env: Env,
        sender: Address,
        rate_a_per_second: i128,
        rate_b_per_second: i128,
        dual_bonus_bps: i128,
        exit_penalty_bps: i128,
    ) {
        sender.require_auth();
        require_admin(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        validate_policy_values(
            &env,
            rate_a_per_second,
            rate_b_per_second,
            dual_bonus_bps,
            exit_penalty_bps,
        );

        let mut policy = get_reward_policy(&env);
        policy.rate_a_per_second = rate_a_per_second;
        policy.rate_b_per_second = rate_b_per_second;
        policy.dual_bonus_bps = dual_bonus_bps;
        policy.exit_penalty_bps = exit_penalty_bps;
        save_reward_policy(&env, &policy);

        StakingEvents::reward_policy_update(
            &env,
            sender,
            rate_a_per_second,
            rate_b_per_second,
            dual_bonus_bps,
            exit_penalty_bps,
        );
    }

    fn set_lock_multiplier(env: Env, sender: Address, lock_period: u64, multiplier_bps: i128) {
        sender.require_auth();
        require_admin(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        // A lock never reduces rewards.
        validate!(&env, multiplier_bps >= BPS_DENOMINATOR, ErrorCode::InvalidPolicy);

        let mut policy = get_reward_policy(&env);
        policy.lock_multipliers.set(lock_period, multiplier_bps);
        save_reward_policy(&env, &policy);

        StakingEvents::lock_multiplier_update(&env, sender, lock_period, multiplier_bps);
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn stake_leg_a(env: Env, sender: Address, amount: i128, lock_period: u64) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let policy = get_reward_policy(&env);
        let now = env.ledger().timestamp();

        validate!(
            &env,
            amount >= config.min_stake,
            ErrorCode::AmountBelowMinimum,
            "Staking: Stake leg A: amount {} below minimum",
            amount
        );
        let multiplier_bps = lock_multiplier(&env, &policy, lock_period);

        let mut position = get_position(&env, &sender);
        controller::rewards::commit_rewards(&mut position, &policy, now);

        position.principal_a = position.principal_a.safe_add(amount, &env);
        apply_lock(&mut position, &env, now, lock_period, multiplier_bps);
        save_position(&env, &sender, &position);

        let mut totals = get_total_staked(&env);
        totals.total_a = totals.total_a.safe_add(amount, &env);
        save_total_staked(&env, &totals);

        token::Client::new(&env, &config.token_a).transfer(
            &sender,
            &env.current_contract_address(),
            &amount,
        );

        StakingEvents::stake(
            &env,
            symbol_short!("leg_a"),
            sender,
            amount,
            lock_period,
            position.lock_expiry,
        );
    }

    fn stake_leg_b(env: Env, sender: Address, amount: i128, lock_period: u64) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let policy = get_reward_policy(&env);
        let now = env.ledger().timestamp();

        validate!(
            &env,
            amount >= config.min_stake,
            ErrorCode::AmountBelowMinimum,
            "Staking: Stake leg B: amount {} below minimum",
            amount
        );
        let multiplier_bps = lock_multiplier(&env, &policy, lock_period);

        let mut position = get_position(&env, &sender);
        // The governance leg cannot exist on its own.
        validate!(
            &env,
            position.principal_a > 0,
            ErrorCode::LegARequired,
            "Staking: Stake leg B: no leg A principal staked"
        );

        controller::rewards::commit_rewards(&mut position, &policy, now);

        position.principal_b = position.principal_b.safe_add(amount, &env);
        apply_lock(&mut position, &env, now, lock_period, multiplier_bps);
        save_position(&env, &sender, &position);

        let mut totals = get_total_staked(&env);
        totals.total_b = totals.total_b.safe_add(amount, &env);
        save_total_staked(&env, &totals);

        token::Client::new(&env, &config.token_b).transfer(
            &sender,
            &env.current_contract_address(),
            &amount,
        );

        StakingEvents::stake(
            &env,
            symbol_short!("leg_b"),
            sender,
            amount,
            lock_period,
            position.lock_expiry,
        );
    }

    fn unstake_leg_a(env: Env, sender: Address, amount: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let policy = get_reward_policy(&env);
        let now = env.ledger().timestamp();

        let mut position = get_position(&env, &sender);
        validate!(
            &env,
            amount > 0 && amount <= position.principal_a,
            ErrorCode::InsufficientPrincipal,
            "Staking: Unstake leg A: amount {} exceeds principal",
            amount
        );
        validate!(
            &env,
            now >= position.lock_expiry,
            ErrorCode::StillLocked,
            "Staking: Unstake leg A: lock not yet expired"
        );

        let remaining = position.principal_a - amount;
        // Leg B may never outlive leg A.
        validate!(
            &env,
            remaining > 0 || position.principal_b == 0,
            ErrorCode::LegARequired,
            "Staking: Unstake leg A: leg B still staked"
        );
        validate!(
            &env,
            remaining == 0 || remaining >= config.min_stake,
            ErrorCode::AmountBelowMinimum,
            "Staking: Unstake leg A: remainder below minimum"
        );

        controller::rewards::commit_rewards(&mut position, &policy, now);

        position.principal_a = remaining;
        save_position(&env, &sender, &position);

        let mut totals = get_total_staked(&env);
        totals.total_a = totals.total_a.safe_sub(amount, &env);
        save_total_staked(&env, &totals);

        token::Client::new(&env, &config.token_a).transfer(
            &env.current_contract_address(),
            &sender,
            &amount,
        );

        StakingEvents::unstake(&env, symbol_short!("leg_a"), sender, amount);
    }

    fn unstake_leg_b(env: Env, sender: Address, amount: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let policy = get_reward_policy(&env);
        let now = env.ledger().timestamp();

        let mut position = get_position(&env, &sender);
        validate!(
            &env,
            amount > 0 && amount <= position.principal_b,
            ErrorCode::InsufficientPrincipal,
            "Staking: Unstake leg B: amount {} exceeds principal",
            amount
        );
        validate!(
            &env,
            now >= position.lock_expiry,
            ErrorCode::StillLocked,
            "Staking: Unstake leg B: lock not yet expired"
        );

        controller::rewards::commit_rewards(&mut position, &policy, now);

        position.principal_b -= amount;
        save_position(&env, &sender, &position);

        let mut totals = get_total_staked(&env);
        totals.total_b = totals.total_b.safe_sub(amount, &env);
        save_total_staked(&env, &totals);

        token::Client::new(&env, &config.token_b).transfer(
            &env.current_contract_address(),
            &sender,
            &amount,
        );

        StakingEvents::unstake(&env, symbol_short!("leg_b"), sender, amount);
    }

    fn claim_rewards(env: Env, sender: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let policy = get_reward_policy(&env);
        let now = env.ledger().timestamp();

        let mut position = get_position(&env, &sender);
        controller::rewards::commit_rewards(&mut position, &policy, now);

        validate!(
            &env,
            position.reward_a > 0 || position.reward_b > 0,
            ErrorCode::NothingToClaim,
            "Staking: Claim rewards: nothing to claim"
        );

        let reward_a = position.reward_a;
        let reward_b = position.reward_b;
        let payout = reward_a.safe_add(reward_b, &env);

        position.reward_a = 0;
        position.reward_b = 0;
        save_position(&env, &sender, &position);

        token::Client::new(&env, &config.token_b).transfer(
            &env.current_contract_address(),
            &sender,
            &payout,
        );

        StakingEvents::claim_rewards(&env, sender, reward_a, reward_b);
    }

    fn compound_reward_a(env: Env, sender: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let policy = get_reward_policy(&env);
        let now = env.ledger().timestamp();

        let mut position = get_position(&env, &sender);
        controller::rewards::commit_rewards(&mut position, &policy, now);

        validate!(
            &env,
            position.reward_a > 0,
            ErrorCode::NothingToCompound,
            "Staking: Compound reward A: nothing accrued"
        );
        // Compounding restakes into leg B, which still requires leg A.
        validate!(
            &env,
            position.principal_a > 0,
            ErrorCode::LegARequired,
            "Staking: Compound reward A: no leg A principal staked"
        );

        let amount = position.reward_a;
        position.reward_a = 0;
        position.principal_b = position.principal_b.safe_add(amount, &env);
        save_position(&env, &sender, &position);

        let mut totals = get_total_staked(&env);
        totals.total_b = totals.total_b.safe_add(amount, &env);
        save_total_staked(&env, &totals);

        // The rewards were already in contract custody; no transfer happens.
        StakingEvents::compound_reward_a(&env, sender, amount);
    }

    fn emergency_exit(env: Env, sender: Address) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let policy = get_reward_policy(&env);
        let now = env.ledger().timestamp();

        let mut position = get_position(&env, &sender);
        validate!(
            &env,
            position.principal_a > 0 || position.principal_b > 0,
            ErrorCode::NothingStaked,
            "Staking: Emergency exit: nothing staked"
        );

        // Accrued rewards are kept; only principal is penalized.
        controller::rewards::commit_rewards(&mut position, &policy, now);

        let principal_a = position.principal_a;
        let principal_b = position.principal_b;
        let penalty_a = principal_a * policy.exit_penalty_bps / BPS_DENOMINATOR;
        let penalty_b = principal_b * policy.exit_penalty_bps / BPS_DENOMINATOR;
        let refund_a = principal_a - penalty_a;
        let refund_b = principal_b - penalty_b;

        position.principal_a = 0;
        position.principal_b = 0;
        position.lock_expiry = 0;
        position.lock_multiplier_bps = BPS_DENOMINATOR;
        save_position(&env, &sender, &position);

        let mut totals = get_total_staked(&env);
        totals.total_a = totals.total_a.safe_sub(principal_a, &env);
        totals.total_b = totals.total_b.safe_sub(principal_b, &env);
        save_total_staked(&env, &totals);

        // Penalty amounts stay in contract custody.
        if refund_a > 0 {
            token::Client::new(&env, &config.token_a).transfer(
                &env.current_contract_address(),
                &sender,
                &refund_a,
            );
        }
        if refund_b > 0 {
            token::Client::new(&env, &config.token_b).transfer(
                &env.current_contract_address(),
                &sender,
                &refund_b,
            );
        }

        StakingEvents::emergency_exit(&env, sender, refund_a, refund_b, penalty_a, penalty_b);
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_pending_rewards(env: Env, address: Address) -> PendingRewards {
        let policy = get_reward_policy(&env);
        let position = get_position(&env, &address);
        let (reward_a, reward_b) =
            controller::rewards::project_pending(&position, &policy, env.ledger().timestamp());
        PendingRewards { reward_a, reward_b }
    }

    fn query_position(env: Env, address: Address) -> StakePosition {
        get_position(&env, &address)
    }

    fn query_total_staked(env: Env) -> TotalStaked {
        get_total_staked(&env)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_reward_policy(env: Env) -> RewardPolicy {
        get_reward_policy(&env)
    }

    fn query_admin(env: Env) -> Address {
        get_admin(&env)
    }
}

fn require_admin(env: &Env, sender: &Address) {
    let admin = get_admin(env);
    if admin != *sender {
        log!(env, "Staking: You are not authorized!");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

fn validate_policy_values(
    env: &Env,
    rate_a_per_second: i128,
    rate_b_per_second: i128,
    dual_bonus_bps: i128,
    exit_penalty_bps: i128,
) {
    validate!(
        env,
        rate_a_per_second >= 0 && rate_b_per_second >= 0,
        ErrorCode::InvalidPolicy
    );
    validate!(env, dual_bonus_bps >= 0, ErrorCode::InvalidPolicy);
    validate!(
        env,
        (0..=BPS_DENOMINATOR).contains(&exit_penalty_bps),
        ErrorCode::InvalidPolicy
    );
}

fn lock_multiplier(env: &Env, policy: &RewardPolicy, lock_period: u64) -> i128 {
    match policy.lock_multipliers.get(lock_period) {
        Some(multiplier_bps) => multiplier_bps,
        None => {
            log!(env, "Staking: Stake: lock period {} not allowed", lock_period);
            panic_with_error!(env, ErrorCode::InvalidLockPeriod);
        }
    }
}

/// Extend the lock forward-only and ratchet the multiplier with it.
fn apply_lock(
    position: &mut StakePosition,
    env: &Env,
    now: u64,
    lock_period: u64,
    multiplier_bps: i128,
) {
    let requested_expiry = now.safe_add(lock_period, env);
    if requested_expiry > position.lock_expiry {
        position.lock_expiry = requested_expiry;
    }
    if multiplier_bps > position.lock_multiplier_bps {
        position.lock_multiplier_bps = multiplier_bps;
    }
}
