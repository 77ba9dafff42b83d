pub mod dto;
pub mod progress;
pub mod schedule;
pub mod validate;

pub use progress::calculate_vesting_properties;
pub use schedule::calculate_pending_claim_info;
pub use validate::validate_schedule;
