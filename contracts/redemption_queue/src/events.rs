use soroban_sdk::{Address, BytesN, Env, Symbol};

pub struct QueueEvents {}

impl QueueEvents {
    /// - topics - `["initialization", admin: Address]`
    /// - data - `[window_duration: u64, expiration_duration: u64, max_queue_size: u32]`
    pub fn initialization(
        env: &Env,
        admin: Address,
        window_duration: u64,
        expiration_duration: u64,
        max_queue_size: u32,
    ) {
        let topics = (Symbol::new(env, "initialization"), admin);
        env.events()
            .publish(topics, (window_duration, expiration_duration, max_queue_size));
    }

    /// - topics - `["admit", requester: Address]`
    /// - data - `[id: BytesN<32>, amount: i128, estimated_output: i128, eligible_at: u64, expires_at: u64]`
    pub fn admit(
        env: &Env,
        requester: Address,
        id: BytesN<32>,
        amount: i128,
        estimated_output: i128,
        eligible_at: u64,
        expires_at: u64,
    ) {
        let topics = (Symbol::new(env, "admit"), requester);
        env.events().publish(
            topics,
            (id, amount, estimated_output, eligible_at, expires_at),
        );
    }

    /// - topics - `["fulfill", requester: Address]`
    /// - data - `[id: BytesN<32>, actual_output: i128]`
    pub fn fulfill(env: &Env, requester: Address, id: BytesN<32>, actual_output: i128) {
        let topics = (Symbol::new(env, "fulfill"), requester);
        env.events().publish(topics, (id, actual_output));
    }

    /// - topics - `["emergency_fulfill", requester: Address]`
    /// - data - `[id: BytesN<32>, actual_output: i128]`
    pub fn emergency_fulfill(env: &Env, requester: Address, id: BytesN<32>, actual_output: i128) {
        let topics = (Symbol::new(env, "emergency_fulfill"), requester);
        env.events().publish(topics, (id, actual_output));
    }

    /// - topics - `["cancel", requester: Address]`
    /// - data - `[id: BytesN<32>]`
    pub fn cancel(env: &Env, requester: Address, id: BytesN<32>) {
        let topics = (Symbol::new(env, "cancel"), requester);
        env.events().publish(topics, id);
    }

    /// - topics - `["expire", requester: Address]`
    /// - data - `[id: BytesN<32>]`
    pub fn expire(env: &Env, requester: Address, id: BytesN<32>) {
        let topics = (Symbol::new(env, "expire"), requester);
        env.events().publish(topics, id);
    }

    /// - topics - `["config_update", sender: Address]`
    /// - data - `[window_duration: u64, expiration_duration: u64, max_queue_size: u32, enabled: bool]`
    pub fn config_update(
        env: &Env,
        sender: Address,
        window_duration: u64,
        expiration_duration: u64,
        max_queue_size: u32,
        enabled: bool,
    ) {
        let topics = (Symbol::new(env, "config_update"), sender);
        env.events().publish(
            topics,
            (window_duration, expiration_duration, max_queue_size, enabled),
        );
    }

    /// - topics - `["emergency_stop", sender: Address]`
    /// - data - `[active: bool]`
    pub fn emergency_stop(env: &Env, sender: Address, active: bool) {
        let topics = (Symbol::new(env, "emergency_stop"), sender);
        env.events().publish(topics, active);
    }

    /// - topics - `["processor_update", sender: Address]`
    /// - data - `[processor: Address, authorized: bool]`
    pub fn processor_update(env: &Env, sender: Address, processor: Address, authorized: bool) {
        let topics = (Symbol::new(env, "processor_update"), sender);
        env.events().publish(topics, (processor, authorized));
    }
}
