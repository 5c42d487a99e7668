use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::storage::{DailyVolume, QueueConfig, RedemptionRequest, RequestKind};

pub trait RedemptionQueueTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(
        env: Env,
        admin: Address,
        window_duration: u64,
        expiration_duration: u64,
        max_queue_size: u32,
        max_daily_volume: i128,
        batch_size: u32,
    );

    #[allow(clippy::too_many_arguments)]
    fn update_config(
        env: Env,
        sender: Address,
        window_duration: u64,
        expiration_duration: u64,
        max_queue_size: u32,
        max_daily_volume: i128,
        batch_size: u32,
        enabled: bool,
    );

    fn set_emergency_stop(env: Env, sender: Address, active: bool);

    fn add_processor(env: Env, sender: Address, processor: Address);

    fn remove_processor(env: Env, sender: Address, processor: Address);

    fn emergency_fulfill(env: Env, sender: Address, id: BytesN<32>, actual_output: i128);

    // ################################################################
    //                             PROCESSOR
    // ################################################################

    /// Admit an exit request into the queue and return its id.
    ///
    /// The daily-volume check here is a soft gate against
    /// `estimated_output`; the authoritative counter is only accumulated
    /// from `actual_output` at fulfillment time, so reserved and consumed
    /// capacity can drift.
    fn admit(
        env: Env,
        sender: Address,
        requester: Address,
        kind: RequestKind,
        amount: i128,
        asset_preference: Address,
        estimated_output: i128,
    ) -> BytesN<32>;

    fn fulfill(env: Env, sender: Address, id: BytesN<32>, actual_output: i128);

    // ################################################################
    //                             USER / MAINTENANCE
    // ################################################################

    fn cancel(env: Env, sender: Address, id: BytesN<32>);

    /// Expire lapsed requests from the front of the queue. Deliberately
    /// permissionless so any actor can keep the queue clean. Returns the
    /// number of requests expired.
    fn sweep_expired(env: Env, max_to_scan: u32) -> u32;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_queue_depth(env: Env) -> u32;

    fn query_daily_volume(env: Env) -> DailyVolume;

    fn query_request(env: Env, id: BytesN<32>) -> RedemptionRequest;

    fn query_active_requests(env: Env, account: Address) -> Vec<BytesN<32>>;

    fn query_config(env: Env) -> QueueConfig;

    fn query_is_processor(env: Env, address: Address) -> bool;

    fn query_admin(env: Env) -> Address;
}
