use soroban_sdk::{contracttype, Address, Env, Map};
use yieldbtc::constants::{
    BPS_DENOMINATOR, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Initialized = 1,
    Admin = 2,
    Config = 3,
    RewardPolicy = 4,
    TotalStaked = 5,
}

/// Per-account position records live under their own key family so the
/// unit-variant keys above can keep stable discriminants.
#[contracttype]
#[derive(Clone, Debug)]
pub enum PositionKey {
    Position(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The yield-bearing receipt token staked as leg A.
    pub token_a: Address,
    /// The governance token staked as leg B. Rewards for both streams are
    /// emitted in this token, which is what lets `compound_reward_a` fold
    /// accrued rewards into leg B without a transfer.
    pub token_b: Address,
    /// Smallest amount accepted by either stake leg.
    pub min_stake: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPolicy {
    /// Reward units accrued per staked unit of leg A per second.
    pub rate_a_per_second: i128,
    /// Reward units accrued per staked unit of leg B per second.
    pub rate_b_per_second: i128,
    /// Extra bps applied to newly accrued rewards while both legs are staked.
    pub dual_bonus_bps: i128,
    /// Bps of principal forfeited by `emergency_exit`.
    pub exit_penalty_bps: i128,
    /// Allow-listed lock durations and their reward multipliers. A duration
    /// absent from this map is rejected at stake time.
    pub lock_multipliers: Map<u64, i128>,
}

/// A single account's stake ledger entry. Created lazily on first stake and
/// zeroed, never deleted, by `emergency_exit`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    pub principal_a: i128,
    pub principal_b: i128,
    pub reward_a: i128,
    pub reward_b: i128,
    /// `None` until the position is touched for the first time. The first
    /// commit only timestamps the position and accrues nothing.
    pub last_accrual_ts: Option<u64>,
    /// Principal cannot be withdrawn before this time. Extended forward-only.
    pub lock_expiry: u64,
    /// Reward multiplier from the chosen lock period. Forward-only, like the
    /// expiry itself.
    pub lock_multiplier_bps: i128,
}

impl StakePosition {
    pub fn new() -> Self {
        StakePosition {
            principal_a: 0,
            principal_b: 0,
            reward_a: 0,
            reward_b: 0,
            last_accrual_ts: None,
            lock_expiry: 0,
            lock_multiplier_bps: BPS_DENOMINATOR,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TotalStaked {
    pub total_a: i128,
    pub total_b: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingRewards {
    pub reward_a: i128,
    pub reward_b: i128,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Staking: Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn save_reward_policy(env: &Env, policy: &RewardPolicy) {
    env.storage().persistent().set(&DataKey::RewardPolicy, policy);
    env.storage().persistent().extend_ttl(
        &DataKey::RewardPolicy,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_reward_policy(env: &Env) -> RewardPolicy {
    let policy = env
        .storage()
        .persistent()
        .get(&DataKey::RewardPolicy)
        .expect("Staking: Reward policy not set");

    env.storage().persistent().extend_ttl(
        &DataKey::RewardPolicy,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    policy
}

pub fn save_total_staked(env: &Env, totals: &TotalStaked) {
    env.storage().persistent().set(&DataKey::TotalStaked, totals);
    env.storage().persistent().extend_ttl(
        &DataKey::TotalStaked,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_total_staked(env: &Env) -> TotalStaked {
    env.storage()
        .persistent()
        .get(&DataKey::TotalStaked)
        .unwrap_or(TotalStaked {
            total_a: 0,
            total_b: 0,
        })
}

pub fn get_position(env: &Env, key: &Address) -> StakePosition {
    let storage_key = PositionKey::Position(key.clone());
    match env.storage().persistent().get(&storage_key) {
        Some(position) => {
            env.storage().persistent().extend_ttl(
                &storage_key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            position
        }
        None => StakePosition::new(),
    }
}

pub fn save_position(env: &Env, key: &Address, position: &StakePosition) {
    let storage_key = PositionKey::Position(key.clone());
    env.storage().persistent().set(&storage_key, position);
    env.storage().persistent().extend_ttl(
        &storage_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub mod utils {
    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    pub fn save_admin(env: &Env, address: &Address) {
        env.storage().persistent().set(&DataKey::Admin, address);
        env.storage().persistent().extend_ttl(
            &DataKey::Admin,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    pub fn get_admin(env: &Env) -> Address {
        let admin = env
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .expect("Staking: Admin not set");
        env.storage().persistent().extend_ttl(
            &DataKey::Admin,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );

        admin
    }
}
