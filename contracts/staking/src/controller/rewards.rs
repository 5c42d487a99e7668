use yieldbtc::constants::{BPS_DENOMINATOR, SECONDS_PER_YEAR};

use crate::storage::{RewardPolicy, StakePosition};

/// Project a position's pending rewards as of `now` without writing anything.
///
/// The multipliers (lock multiplier, then dual-stake bonus) scale only the
/// newly accrued slice, never the already-committed balances; committing
/// twice at the same timestamp therefore yields the same totals as
/// committing once.
pub fn project_pending(position: &StakePosition, policy: &RewardPolicy, now: u64) -> (i128, i128) {
    let elapsed = match position.last_accrual_ts {
        // First touch: only timestamps, accrues nothing.
        None => 0,
        Some(ts) => now.saturating_sub(ts),
    } as i128;

    let mut delta_a =
        position.principal_a * policy.rate_a_per_second * elapsed / (SECONDS_PER_YEAR as i128);
    let mut delta_b = if position.principal_a > 0 {
        position.principal_b * policy.rate_b_per_second * elapsed / (SECONDS_PER_YEAR as i128)
    } else {
        0
    };

    delta_a = delta_a * position.lock_multiplier_bps / BPS_DENOMINATOR;
    delta_b = delta_b * position.lock_multiplier_bps / BPS_DENOMINATOR;

    if position.principal_a > 0 && position.principal_b > 0 {
        delta_a = delta_a * (BPS_DENOMINATOR + policy.dual_bonus_bps) / BPS_DENOMINATOR;
        delta_b = delta_b * (BPS_DENOMINATOR + policy.dual_bonus_bps) / BPS_DENOMINATOR;
    }

    (position.reward_a + delta_a, position.reward_b + delta_b)
}

/// Commit pending rewards into the position and stamp the accrual time.
///
/// Every mutating operation calls this before touching principal, so rewards
/// are always computed on pre-mutation balances.
pub fn commit_rewards(position: &mut StakePosition, policy: &RewardPolicy, now: u64) {
    let (reward_a, reward_b) = project_pending(position, policy, now);
    position.reward_a = reward_a;
    position.reward_b = reward_b;
    position.last_accrual_ts = Some(now);
}
