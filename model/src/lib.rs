pub mod amount;
pub mod claim;
pub mod duration;
mod numbers;
pub mod progress;
pub mod schedule;
pub mod time;

pub use numbers::Amount;

/// UNIX timestamp in seconds, as stored in the vesting contract.
pub type Timestamp = u64;

/// Duration in seconds.
pub type DurationSecs = u64;

pub const SECS_IN_MINUTE: u64 = 60;
pub const SECS_IN_HOUR: u64 = SECS_IN_MINUTE * 60;
pub const SECS_IN_DAY: u64 = SECS_IN_HOUR * 24;
pub const SECS_IN_WEEK: u64 = SECS_IN_DAY * 7;

/// Decimal digits retained when converting human token amounts to base units.
pub const DEFAULT_TOKEN_PRECISION: u32 = 5;
