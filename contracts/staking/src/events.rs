use soroban_sdk::{Address, Env, Symbol};

pub struct StakingEvents {}

impl StakingEvents {
    /// Emitted once when the contract is initialized
    ///
    /// - topics - `["initialization", admin: Address]`
    /// - data - `[token_a: Address, token_b: Address, min_stake: i128]`
    pub fn initialization(
        env: &Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        min_stake: i128,
    ) {
        let topics = (Symbol::new(env, "initialization"), admin);
        env.events().publish(topics, (token_a, token_b, min_stake));
    }

    /// Emitted when an account stakes into either leg
    ///
    /// - topics - `["stake", leg: Symbol, sender: Address]`
    /// - data - `[amount: i128, lock_period: u64, lock_expiry: u64]`
    pub fn stake(
        env: &Env,
        leg: Symbol,
        sender: Address,
        amount: i128,
        lock_period: u64,
        lock_expiry: u64,
    ) {
        let topics = (Symbol::new(env, "stake"), leg, sender);
        env.events().publish(topics, (amount, lock_period, lock_expiry));
    }

    /// Emitted when an account withdraws principal from either leg
    ///
    /// - topics - `["unstake", leg: Symbol, sender: Address]`
    /// - data - `[amount: i128]`
    pub fn unstake(env: &Env, leg: Symbol, sender: Address, amount: i128) {
        let topics = (Symbol::new(env, "unstake"), leg, sender);
        env.events().publish(topics, amount);
    }

    /// - topics - `["claim_rewards", sender: Address]`
    /// - data - `[reward_a: i128, reward_b: i128]`
    pub fn claim_rewards(env: &Env, sender: Address, reward_a: i128, reward_b: i128) {
        let topics = (Symbol::new(env, "claim_rewards"), sender);
        env.events().publish(topics, (reward_a, reward_b));
    }

    /// - topics - `["compound_reward_a", sender: Address]`
    /// - data - `[amount: i128]`
    pub fn compound_reward_a(env: &Env, sender: Address, amount: i128) {
        let topics = (Symbol::new(env, "compound_reward_a"), sender);
        env.events().publish(topics, amount);
    }

    /// - topics - `["emergency_exit", sender: Address]`
    /// - data - `[refund_a: i128, refund_b: i128, penalty_a: i128, penalty_b: i128]`
    pub fn emergency_exit(
        env: &Env,
        sender: Address,
        refund_a: i128,
        refund_b: i128,
        penalty_a: i128,
        penalty_b: i128,
    ) {
        let topics = (Symbol::new(env, "emergency_exit"), sender);
        env.events()
            .publish(topics, (refund_a, refund_b, penalty_a, penalty_b));
    }

    /// - topics - `["reward_policy_update", sender: Address]`
    /// - data - `[rate_a: i128, rate_b: i128, dual_bonus_bps: i128, exit_penalty_bps: i128]`
    pub fn reward_policy_update(
        env: &Env,
        sender: Address,
        rate_a_per_second: i128,
        rate_b_per_second: i128,
        dual_bonus_bps: i128,
        exit_penalty_bps: i128,
    ) {
        let topics = (Symbol::new(env, "reward_policy_update"), sender);
        env.events().publish(
            topics,
            (rate_a_per_second, rate_b_per_second, dual_bonus_bps, exit_penalty_bps),
        );
    }

    /// - topics - `["lock_multiplier_update", sender: Address]`
    /// - data - `[lock_period: u64, multiplier_bps: i128]`
    pub fn lock_multiplier_update(
        env: &Env,
        sender: Address,
        lock_period: u64,
        multiplier_bps: i128,
    ) {
        let topics = (Symbol::new(env, "lock_multiplier_update"), sender);
        env.events().publish(topics, (lock_period, multiplier_bps));
    }
}
