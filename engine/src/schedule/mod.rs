use alloy_primitives::utils::UnitsError;
use vesting_model::{
    amount::parse_token_amount, claim::ClaimInfo, schedule::ScheduleParameters,
    time::date_to_absolute_timestamp_secs, Amount, DEFAULT_TOKEN_PRECISION,
};


/// Build the contract-ready claim descriptor from schedule parameters.
///
/// Pure and idempotent. Inputs are expected to be pre-validated (see
/// [`crate::validate`]); the only failure here is amount parsing, which
/// propagates so the caller can surface it as a form error.
pub fn calculate_pending_claim_info(params: &ScheduleParameters) -> Result<ClaimInfo, UnitsError> {
    let token_precision = params.token_precision.unwrap_or(DEFAULT_TOKEN_PRECISION);

    let linear_vest_amount = parse_token_amount(
        params.linear_vested_amount_tokens,
        token_precision,
        params.unit_decimals,
    )?;
    let cliff_amount =
        parse_token_amount(params.cliff_amount_tokens, token_precision, params.unit_decimals)?;

    Ok(ClaimInfo {
        start_timestamp: date_to_absolute_timestamp_secs(params.linear_vest_start_time),
        end_timestamp: date_to_absolute_timestamp_secs(params.linear_vest_end_time),
        cliff_release_timestamp: params
            .cliff_release_time
            .map_or(0, date_to_absolute_timestamp_secs),
        release_interval_secs: params.release_interval.seconds_from_epoch(),
        linear_vest_amount: Amount(linear_vest_amount),
        cliff_amount: Amount(cliff_amount),
        amount_withdrawn: Amount::ZERO,
        is_active: true,
    })
}
