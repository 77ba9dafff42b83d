use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{Amount, DurationSecs, Timestamp};

/// One beneficiary's vesting terms, in the exact shape the contract stores
/// them. Created once by schedule construction; after that only
/// `amount_withdrawn` moves (on each successful claim) and `is_active`
/// flips (on revocation). Claims are never deleted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimInfo {
    pub start_timestamp: Timestamp,
    pub end_timestamp: Timestamp,
    /// 0 means no cliff. When set, it coincides with `start_timestamp`.
    pub cliff_release_timestamp: Timestamp,
    /// Every how many seconds the vested amount increases.
    pub release_interval_secs: DurationSecs,
    /// Total linear entitlement.
    pub linear_vest_amount: Amount,
    /// Released in full at the cliff moment.
    pub cliff_amount: Amount,
    pub amount_withdrawn: Amount,
    pub is_active: bool,
}

impl ClaimInfo {
    pub fn total_allocation(&self) -> U256 {
        self.cliff_amount.0 + self.linear_vest_amount.0
    }

    pub fn total_vesting_duration_secs(&self) -> DurationSecs {
        self.end_timestamp - self.start_timestamp
    }

    pub fn has_cliff(&self) -> bool {
        self.cliff_release_timestamp > 0
    }
}
