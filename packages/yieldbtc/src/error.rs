use soroban_sdk::contracterror;

/// Error codes shared by every YieldBTC contract.
///
/// Each rejection is surfaced synchronously with `panic_with_error!`; no
/// operation leaves partial state behind.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    MathError = 3,

    // Staking
    AmountBelowMinimum = 10,
    InvalidLockPeriod = 11,
    LegARequired = 12,
    InsufficientPrincipal = 13,
    StillLocked = 14,
    NothingToClaim = 15,
    NothingToCompound = 16,
    NothingStaked = 17,
    InvalidPolicy = 18,

    // Redemption queue
    ZeroAmount = 30,
    InvalidQueueConfig = 31,
    QueueDisabled = 32,
    QueueFull = 33,
    EmergencyStopActive = 34,
    DailyVolumeExceeded = 35,
    RequestNotFound = 36,
    RequestNotPending = 37,
    RequestNotYetEligible = 38,
    RequestExpired = 39,
}
