use alloy_primitives::U256;
use chrono::{DateTime, Duration, Utc};
use vesting_model::{claim::ClaimInfo, progress::VestingProgress, Amount, Timestamp};


fn ts_to_date(ts: Timestamp) -> DateTime<Utc> {
    DateTime::from_timestamp(ts.min(i64::MAX as u64) as i64, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Evaluate a claim's vesting state at `now`.
///
/// Pure function of (claim, now); cheap enough to re-run on every poll
/// tick. The amount math is integer-only and mirrors the contract's
/// fixed-point arithmetic operation for operation: whole-interval
/// truncation, then multiply before floor division. Anything else would
/// let the displayed claimable amount drift from what a withdrawal
/// transaction actually transfers.
///
/// Revocation freezing is enforced on chain; this function just carries
/// the `is_active` flag and whatever timestamps the contract returns.
pub fn calculate_vesting_properties(claim: &ClaimInfo, now: DateTime<Utc>) -> VestingProgress {
    let ref_ts = now.timestamp().max(0) as u64;

    let start_date = ts_to_date(claim.start_timestamp);
    let end_date = ts_to_date(claim.end_timestamp);
    let cliff_release_date = ts_to_date(claim.cliff_release_timestamp);

    let time_until_maturity_secs = claim.end_timestamp.saturating_sub(ref_ts);
    let time_from_linear_vesting_begin_secs = ref_ts
        .min(claim.end_timestamp)
        .saturating_sub(claim.start_timestamp);

    // Vesting credit accrues in whole intervals only.
    let truncated_time_secs = time_from_linear_vesting_begin_secs / claim.release_interval_secs
        * claim.release_interval_secs;
    let fraction_current_release_period = (time_from_linear_vesting_begin_secs
        % claim.release_interval_secs) as f64
        / claim.release_interval_secs as f64;

    let total_vesting_duration_secs = claim.total_vesting_duration_secs();
    let duration = U256::from(total_vesting_duration_secs);

    // The cliff unlocks strictly after the start instant.
    let cliff_amount = if ref_ts > claim.start_timestamp {
        claim.cliff_amount.0
    } else {
        U256::ZERO
    };

    let linear_vested = U256::from(truncated_time_secs) * claim.linear_vest_amount.0 / duration;
    let raw_linear_vested =
        U256::from(time_from_linear_vesting_begin_secs) * claim.linear_vest_amount.0 / duration;

    let streamed_amount = cliff_amount + linear_vested;
    let raw_streamed_amount = cliff_amount + raw_linear_vested;

    let total_allocation = claim.total_allocation();
    let can_withdraw_amount = streamed_amount
        .checked_sub(claim.amount_withdrawn.0)
        .unwrap_or_default();

    let vested_in_one_interval =
        claim.linear_vest_amount.0 * U256::from(claim.release_interval_secs) / duration;

    let next_unlock_date = if now < cliff_release_date {
        Some(cliff_release_date)
    } else if now < start_date {
        Some(start_date)
    } else if now > end_date {
        None
    } else {
        let next_boundary = truncated_time_secs + claim.release_interval_secs;
        Some(start_date + Duration::seconds(next_boundary.min(i64::MAX as u64) as i64))
    };

    VestingProgress {
        streamed_amount: Amount(streamed_amount),
        raw_streamed_amount: Amount(raw_streamed_amount),
        withdrawn_amount: claim.amount_withdrawn,
        can_withdraw_amount: Amount(can_withdraw_amount),
        total_allocation: Amount(total_allocation),
        unvested_amount: Amount(total_allocation - streamed_amount),
        untouched_amount: Amount(total_allocation - raw_streamed_amount),
        current_interval_streamed: Amount(raw_streamed_amount - streamed_amount),
        current_interval_not_streamed: Amount(vested_in_one_interval),
        time_until_maturity_secs,
        time_from_linear_vesting_begin_secs,
        total_vesting_duration_secs,
        fraction_current_release_period,
        start_date,
        end_date,
        cliff_release_date,
        next_unlock_date,
    }
}
