use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::CalendarDuration;

/// Pre-validated schedule parameters, as they leave the schedule form.
/// Amounts are in human token units, not base units.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleParameters {
    pub linear_vest_start_time: DateTime<Utc>,
    pub linear_vest_end_time: DateTime<Utc>,
    /// `None` means no cliff. When set, it equals `linear_vest_start_time`:
    /// the cliff bucket and the linear bucket open at the same instant and
    /// differ only in unlock shape.
    pub cliff_release_time: Option<DateTime<Utc>>,
    pub release_interval: CalendarDuration,
    pub linear_vested_amount_tokens: f64,
    pub cliff_amount_tokens: f64,
    pub unit_decimals: u8,
    /// `None` falls back to [`crate::DEFAULT_TOKEN_PRECISION`].
    pub token_precision: Option<u32>,
}
