use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, xdr::ToXdr, Address, Bytes,
    BytesN, Env, Vec,
};
use yieldbtc::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    math::safe_math::SafeMath,
    validate,
};

use crate::{
    controller,
    events::QueueEvents,
    redemption_queue::RedemptionQueueTrait,
    storage::{
        day_index, get_account_requests, get_config, get_daily_volume, get_emergency_stop,
        get_request, is_processor, next_request_seq, save_account_requests, save_config,
        save_daily_volume, save_request, set_emergency_stop, set_processor,
        utils::{get_admin, is_initialized, save_admin, set_initialized},
        DailyVolume, QueueConfig, RedemptionRequest, RequestKind, RequestState,
    },
};

contractmeta!(
    key = "Description",
    val = "FIFO redemption queue deferring large or liquidity-constrained exits"
);

#[contract]
pub struct RedemptionQueue;

#[contractimpl]
impl RedemptionQueueTrait for RedemptionQueue {
    fn initialize(
        env: Env,
        admin: Address,
        window_duration: u64,
        expiration_duration: u64,
        max_queue_size: u32,
        max_daily_volume: i128,
        batch_size: u32,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Redemption queue: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }
        set_initialized(&env);

        let config = QueueConfig {
            window_duration,
            expiration_duration,
            max_queue_size,
            max_daily_volume,
            batch_size,
            enabled: true,
        };
        validate_config(&env, &config);

        save_admin(&env, &admin);
        save_config(&env, &config);

        QueueEvents::initialization(
            &env,
            admin,
            window_duration,
            expiration_duration,
            max_queue_size,
        );
    }

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
    ) {
        sender.require_auth();
        require_admin(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = QueueConfig {
            window_duration,
            expiration_duration,
            max_queue_size,
            max_daily_volume,
            batch_size,
            enabled,
        };
        validate_config(&env, &config);
        save_config(&env, &config);

        QueueEvents::config_update(
            &env,
            sender,
            window_duration,
            expiration_duration,
            max_queue_size,
            enabled,
        );
    }

    fn set_emergency_stop(env: Env, sender: Address, active: bool) {
        sender.require_auth();
        require_admin(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        set_emergency_stop(&env, active);

        QueueEvents::emergency_stop(&env, sender, active);
    }

    fn add_processor(env: Env, sender: Address, processor: Address) {
        sender.require_auth();
        require_admin(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        set_processor(&env, &processor, true);

        QueueEvents::processor_update(&env, sender, processor, true);
    }

    fn remove_processor(env: Env, sender: Address, processor: Address) {
        sender.require_auth();
        require_admin(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        set_processor(&env, &processor, false);

        QueueEvents::processor_update(&env, sender, processor, false);
    }

    fn emergency_fulfill(env: Env, sender: Address, id: BytesN<32>, actual_output: i128) {
        sender.require_auth();
        require_admin(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut request = must_get_request(&env, &id);
        validate!(
            &env,
            request.state == RequestState::Pending,
            ErrorCode::RequestNotPending,
            "Redemption queue: Emergency fulfill: request is terminal"
        );

        // Crisis path: neither the eligibility window nor the expiration is
        // checked.
        request.state = RequestState::Fulfilled;
        request.actual_output = actual_output;
        save_request(&env, &request);

        retire(&env, &request);
        record_fulfillment_volume(&env, actual_output);

        QueueEvents::emergency_fulfill(&env, request.requester.clone(), id, actual_output);
    }

    // ################################################################
    //                             PROCESSOR
    // ################################################################

    fn admit(
        env: Env,
        sender: Address,
        requester: Address,
        kind: RequestKind,
        amount: i128,
        asset_preference: Address,
        estimated_output: i128,
    ) -> BytesN<32> {
        sender.require_auth();
        require_processor(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let now = env.ledger().timestamp();

        validate!(
            &env,
            config.enabled,
            ErrorCode::QueueDisabled,
            "Redemption queue: Admit: queue is disabled"
        );
        validate!(
            &env,
            !get_emergency_stop(&env),
            ErrorCode::EmergencyStopActive,
            "Redemption queue: Admit: emergency stop is active"
        );
        validate!(&env, amount > 0, ErrorCode::ZeroAmount);
        validate!(
            &env,
            controller::queue::depth(&env) < config.max_queue_size,
            ErrorCode::QueueFull,
            "Redemption queue: Admit: queue is at capacity"
        );

        // Soft gate on the estimate; fulfillment accumulates the actual.
        if config.max_daily_volume > 0 {
            let consumed = volume_for_day(&env, day_index(now));
            validate!(
                &env,
                consumed.safe_add(estimated_output, &env) <= config.max_daily_volume,
                ErrorCode::DailyVolumeExceeded,
                "Redemption queue: Admit: daily volume limit reached"
            );
        }

        let seq = next_request_seq(&env);
        let id = derive_request_id(&env, &requester, &kind, amount, now, seq);

        let eligible_at = now.safe_add(config.window_duration, &env);
        let expires_at = eligible_at.safe_add(config.expiration_duration, &env);
        let request = RedemptionRequest {
            id: id.clone(),
            requester: requester.clone(),
            kind,
            amount,
            asset_preference,
            estimated_output,
            actual_output: 0,
            admitted_at: now,
            eligible_at,
            expires_at,
            state: RequestState::Pending,
        };
        save_request(&env, &request);
        controller::queue::append(&env, &id);

        let mut account_requests = get_account_requests(&env, &requester);
        account_requests.push_back(id.clone());
        save_account_requests(&env, &requester, &account_requests);

        QueueEvents::admit(
            &env,
            requester,
            id.clone(),
            amount,
            estimated_output,
            eligible_at,
            expires_at,
        );

        id
    }

    fn fulfill(env: Env, sender: Address, id: BytesN<32>, actual_output: i128) {
        sender.require_auth();
        require_processor(&env, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let now = env.ledger().timestamp();
        let mut request = must_get_request(&env, &id);

        validate!(
            &env,
            request.state == RequestState::Pending,
            ErrorCode::RequestNotPending,
            "Redemption queue: Fulfill: request is terminal"
        );
        validate!(
            &env,
            now >= request.eligible_at,
            ErrorCode::RequestNotYetEligible,
            "Redemption queue: Fulfill: eligibility window not reached"
        );
        validate!(
            &env,
            now <= request.expires_at,
            ErrorCode::RequestExpired,
            "Redemption queue: Fulfill: request has expired"
        );

        request.state = RequestState::Fulfilled;
        request.actual_output = actual_output;
        save_request(&env, &request);

        retire(&env, &request);
        record_fulfillment_volume(&env, actual_output);

        QueueEvents::fulfill(&env, request.requester.clone(), id, actual_output);
    }

    // ################################################################
    //                        USER / MAINTENANCE
    // ################################################################

    fn cancel(env: Env, sender: Address, id: BytesN<32>) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut request = must_get_request(&env, &id);
        if sender != request.requester && sender != get_admin(&env) {
            log!(&env, "Redemption queue: Cancel: You are not authorized!");
            panic_with_error!(&env, ErrorCode::NotAuthorized);
        }
        validate!(
            &env,
            request.state == RequestState::Pending,
            ErrorCode::RequestNotPending,
            "Redemption queue: Cancel: request is terminal"
        );

        // The queue never held funds for this request, so there are no token
        // or volume effects.
        request.state = RequestState::Cancelled;
        save_request(&env, &request);

        retire(&env, &request);

        QueueEvents::cancel(&env, request.requester.clone(), id);
    }

    fn sweep_expired(env: Env, max_to_scan: u32) -> u32 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let now = env.ledger().timestamp();

        let cap = if max_to_scan == 0 {
            config.batch_size
        } else {
            max_to_scan
        };

        // Snapshot the front of the index first: swap-remove backfills freed
        // slots with the newest entry, and that entry must not slip into the
        // scan out of admission order.
        let index = controller::queue::snapshot_front(&env, cap);

        let mut expired = 0u32;
        for id in index.iter() {
            let mut request = match get_request(&env, &id) {
                Some(request) => request,
                None => continue,
            };
            if request.state != RequestState::Pending || now <= request.expires_at {
                // Not ours to touch; partial progress is expected here.
                continue;
            }

            request.state = RequestState::Expired;
            save_request(&env, &request);
            retire(&env, &request);
            expired += 1;

            QueueEvents::expire(&env, request.requester.clone(), id);
        }

        expired
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_queue_depth(env: Env) -> u32 {
        controller::queue::depth(&env)
    }

    fn query_daily_volume(env: Env) -> DailyVolume {
        let today = day_index(env.ledger().timestamp());
        DailyVolume {
            day_index: today,
            volume: volume_for_day(&env, today),
        }
    }

    fn query_request(env: Env, id: BytesN<32>) -> RedemptionRequest {
        must_get_request(&env, &id)
    }

    fn query_active_requests(env: Env, account: Address) -> Vec<BytesN<32>> {
        get_account_requests(&env, &account)
    }

    fn query_config(env: Env) -> QueueConfig {
        get_config(&env)
    }

    fn query_is_processor(env: Env, address: Address) -> bool {
        is_processor(&env, &address)
    }

    fn query_admin(env: Env) -> Address {
        get_admin(&env)
    }
}

fn require_admin(env: &Env, sender: &Address) {
    let admin = get_admin(env);
    if admin != *sender {
        log!(env, "Redemption queue: You are not authorized!");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

fn require_processor(env: &Env, sender: &Address) {
    if !is_processor(env, sender) {
        log!(env, "Redemption queue: Caller is not an authorized processor");
        panic_with_error!(env, ErrorCode::NotAuthorized);
    }
}

fn validate_config(env: &Env, config: &QueueConfig) {
    validate!(
        env,
        config.window_duration > 0
            && config.expiration_duration > 0
            && config.max_queue_size > 0
            && config.batch_size > 0,
        ErrorCode::InvalidQueueConfig,
        "Redemption queue: Config: duration and size fields must be non-zero"
    );
    // Zero means unlimited; negative caps are meaningless.
    validate!(
        env,
        config.max_daily_volume >= 0,
        ErrorCode::InvalidQueueConfig
    );
}

fn must_get_request(env: &Env, id: &BytesN<32>) -> RedemptionRequest {
    match get_request(env, id) {
        Some(request) => request,
        None => {
            log!(env, "Redemption queue: request not found");
            panic_with_error!(env, ErrorCode::RequestNotFound);
        }
    }
}

/// Ids are a hash of the request's identifying fields plus a monotonic
/// counter; the counter alone already rules out collisions for the life of
/// the contract.
fn derive_request_id(
    env: &Env,
    requester: &Address,
    kind: &RequestKind,
    amount: i128,
    admitted_at: u64,
    seq: u64,
) -> BytesN<32> {
    let mut payload = Bytes::new(env);
    payload.append(&requester.clone().to_xdr(env));
    payload.append(&(*kind).to_xdr(env));
    payload.append(&amount.to_xdr(env));
    payload.append(&admitted_at.to_xdr(env));
    payload.append(&seq.to_xdr(env));
    env.crypto().sha256(&payload).into()
}

/// Drop a now-terminal request from the FIFO index and its requester's
/// active list.
fn retire(env: &Env, request: &RedemptionRequest) {
    controller::queue::remove(env, &request.id);

    let mut account_requests = get_account_requests(env, &request.requester);
    if let Some(position) = account_requests.first_index_of(&request.id) {
        account_requests.remove(position);
        save_account_requests(env, &request.requester, &account_requests);
    }
}

fn volume_for_day(env: &Env, day: u64) -> i128 {
    let counter = get_daily_volume(env);
    if counter.day_index == day {
        counter.volume
    } else {
        0
    }
}

/// New day resets the counter instead of accumulating.
fn record_fulfillment_volume(env: &Env, actual_output: i128) {
    let today = day_index(env.ledger().timestamp());
    let counter = get_daily_volume(env);
    let updated = if counter.day_index == today {
        DailyVolume {
            day_index: today,
            volume: counter.volume.safe_add(actual_output, env),
        }
    } else {
        DailyVolume {
            day_index: today,
            volume: actual_output,
        }
    };
    save_daily_volume(env, &updated);
}
