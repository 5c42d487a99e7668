use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};
use yieldbtc::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD, SECONDS_PER_DAY,
};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Initialized = 1,
    Admin = 2,
    Config = 3,
    EmergencyStop = 4,
    RequestCounter = 5,
    QueueIndex = 6,
    DailyVolume = 7,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum RecordKey {
    Request(BytesN<32>),
    /// Reverse index: id -> current slot in the FIFO index.
    Position(BytesN<32>),
    /// Ids of still-pending requests admitted for an account.
    AccountRequests(Address),
    Processor(Address),
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestKind {
    VaultShare,
    StakingReward,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestState {
    Pending,
    Fulfilled,
    Cancelled,
    Expired,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedemptionRequest {
    pub id: BytesN<32>,
    pub requester: Address,
    pub kind: RequestKind,
    pub amount: i128,
    pub asset_preference: Address,
    pub estimated_output: i128,
    /// Set when the request is fulfilled; zero until then.
    pub actual_output: i128,
    pub admitted_at: u64,
    pub eligible_at: u64,
    pub expires_at: u64,
    pub state: RequestState,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueConfig {
    /// Seconds a request must wait before it can be fulfilled.
    pub window_duration: u64,
    /// Seconds past eligibility after which a request lapses.
    pub expiration_duration: u64,
    pub max_queue_size: u32,
    /// Rolling per-day fulfillment cap. Zero means unlimited.
    pub max_daily_volume: i128,
    /// Default scan width for expiration sweeps.
    pub batch_size: u32,
    pub enabled: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyVolume {
    pub day_index: u64,
    pub volume: i128,
}

pub fn day_index(now: u64) -> u64 {
    now / SECONDS_PER_DAY
}

pub fn save_config(env: &Env, config: &QueueConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> QueueConfig {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Redemption queue: Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn save_request(env: &Env, request: &RedemptionRequest) {
    let key = RecordKey::Request(request.id.clone());
    env.storage().persistent().set(&key, request);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_request(env: &Env, id: &BytesN<32>) -> Option<RedemptionRequest> {
    env.storage()
        .persistent()
        .get(&RecordKey::Request(id.clone()))
}

pub fn save_queue_index(env: &Env, index: &Vec<BytesN<32>>) {
    env.storage().persistent().set(&DataKey::QueueIndex, index);
    env.storage().persistent().extend_ttl(
        &DataKey::QueueIndex,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_queue_index(env: &Env) -> Vec<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::QueueIndex)
        .unwrap_or(Vec::new(env))
}

pub fn set_position(env: &Env, id: &BytesN<32>, position: u32) {
    env.storage()
        .persistent()
        .set(&RecordKey::Position(id.clone()), &position);
}

pub fn get_position(env: &Env, id: &BytesN<32>) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&RecordKey::Position(id.clone()))
}

pub fn remove_position(env: &Env, id: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&RecordKey::Position(id.clone()));
}

pub fn get_account_requests(env: &Env, account: &Address) -> Vec<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&RecordKey::AccountRequests(account.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn save_account_requests(env: &Env, account: &Address, ids: &Vec<BytesN<32>>) {
    let key = RecordKey::AccountRequests(account.clone());
    env.storage().persistent().set(&key, ids);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_daily_volume(env: &Env) -> DailyVolume {
    env.storage()
        .persistent()
        .get(&DataKey::DailyVolume)
        .unwrap_or(DailyVolume {
            day_index: 0,
            volume: 0,
        })
}

pub fn save_daily_volume(env: &Env, counter: &DailyVolume) {
    env.storage().persistent().set(&DataKey::DailyVolume, counter);
    env.storage().persistent().extend_ttl(
        &DataKey::DailyVolume,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn next_request_seq(env: &Env) -> u64 {
    let seq: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::RequestCounter)
        .unwrap_or(0u64);
    env.storage()
        .persistent()
        .set(&DataKey::RequestCounter, &(seq + 1));
    seq
}

pub fn get_emergency_stop(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::EmergencyStop)
        .unwrap_or(false)
}

pub fn set_emergency_stop(env: &Env, active: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::EmergencyStop, &active);
}

pub fn is_processor(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&RecordKey::Processor(address.clone()))
        .unwrap_or(false)
}

pub fn set_processor(env: &Env, address: &Address, authorized: bool) {
    let key = RecordKey::Processor(address.clone());
    if authorized {
        env.storage().persistent().set(&key, &true);
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    } else {
        env.storage().persistent().remove(&key);
    }
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
            .expect("Redemption queue: Admin not set");
        env.storage().persistent().extend_ttl(
            &DataKey::Admin,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );

        admin
    }
}
