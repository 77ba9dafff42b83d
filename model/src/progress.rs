use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Amount, DurationSecs};

/// Vesting state of one claim at a single observation instant. Never
/// persisted; recomputed from the claim and the wall clock on every read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VestingProgress {
    /// Cliff (once unlocked) plus the whole-interval linear portion.
    pub streamed_amount: Amount,
    /// Same without interval truncation; render-only.
    pub raw_streamed_amount: Amount,
    pub withdrawn_amount: Amount,
    /// `streamed_amount - withdrawn_amount`, clamped at zero for display.
    pub can_withdraw_amount: Amount,
    pub total_allocation: Amount,
    pub unvested_amount: Amount,
    /// Not yet begun to vest at all: total minus the raw streamed amount.
    pub untouched_amount: Amount,
    /// Accrued inside the in-progress interval but not yet unlocked.
    pub current_interval_streamed: Amount,
    /// What one whole interval unlocks.
    pub current_interval_not_streamed: Amount,

    pub time_until_maturity_secs: DurationSecs,
    pub time_from_linear_vesting_begin_secs: DurationSecs,
    pub total_vesting_duration_secs: DurationSecs,
    /// Fraction of the in-progress interval already elapsed; drives the
    /// "progress toward next unlock" bar.
    pub fraction_current_release_period: f64,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub cliff_release_date: DateTime<Utc>,
    /// Next instant the streamed amount increases; `None` once fully vested.
    pub next_unlock_date: Option<DateTime<Utc>>,
}
