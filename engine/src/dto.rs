use alloy_primitives::{Address, U256};
use vesting_model::{claim::ClaimInfo, DurationSecs, Timestamp};

/// `createClaim` call arguments, in the contract's parameter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClaimArgs {
    pub recipient: Address,
    pub start_timestamp: Timestamp,
    pub end_timestamp: Timestamp,
    pub cliff_release_timestamp: Timestamp,
    pub release_interval_secs: DurationSecs,
    pub linear_vest_amount: U256,
    pub cliff_amount: U256,
}

/// `createClaimsBatch` call arguments: one entry per recipient in each
/// vector, every recipient getting the same schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchClaimArgs {
    pub recipients: Vec<Address>,
    pub start_timestamps: Vec<Timestamp>,
    pub end_timestamps: Vec<Timestamp>,
    pub cliff_release_timestamps: Vec<Timestamp>,
    pub release_interval_secs: Vec<DurationSecs>,
    pub linear_vest_amounts: Vec<U256>,
    pub cliff_amounts: Vec<U256>,
}

pub fn claim_to_contract_args(recipient: Address, claim: &ClaimInfo) -> AddClaimArgs {
    AddClaimArgs {
        recipient,
        start_timestamp: claim.start_timestamp,
        end_timestamp: claim.end_timestamp,
        cliff_release_timestamp: claim.cliff_release_timestamp,
        release_interval_secs: claim.release_interval_secs,
        linear_vest_amount: claim.linear_vest_amount.0,
        cliff_amount: claim.cliff_amount.0,
    }
}

pub fn batch_schedule_to_contract_args(recipients: &[Address], claim: &ClaimInfo) -> BatchClaimArgs {
    let count = recipients.len();
    BatchClaimArgs {
        recipients: recipients.to_vec(),
        start_timestamps: vec![claim.start_timestamp; count],
        end_timestamps: vec![claim.end_timestamp; count],
        cliff_release_timestamps: vec![claim.cliff_release_timestamp; count],
        release_interval_secs: vec![claim.release_interval_secs; count],
        linear_vest_amounts: vec![claim.linear_vest_amount.0; count],
        cliff_amounts: vec![claim.cliff_amount.0; count],
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};
    use vesting_model::{claim::ClaimInfo, Amount};

    use crate::dto::{batch_schedule_to_contract_args, claim_to_contract_args};

    fn claim() -> ClaimInfo {
        ClaimInfo {
            start_timestamp: 1_000,
            end_timestamp: 1_100,
            cliff_release_timestamp: 1_000,
            release_interval_secs: 10,
            linear_vest_amount: Amount::from(800_u64),
            cliff_amount: Amount::from(200_u64),
            amount_withdrawn: Amount::ZERO,
            is_active: true,
        }
    }

    #[test]
    fn single_claim_args() {
        let recipient = Address::repeat_byte(0x11);
        let args = claim_to_contract_args(recipient, &claim());

        assert_eq!(args.recipient, recipient);
        assert_eq!(args.start_timestamp, 1_000);
        assert_eq!(args.cliff_release_timestamp, 1_000);
        assert_eq!(args.linear_vest_amount, U256::from(800));
        assert_eq!(args.cliff_amount, U256::from(200));
    }

    #[test]
    fn batch_replicates_the_schedule_per_recipient() {
        let recipients = vec![
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            Address::repeat_byte(0x33),
        ];
        let args = batch_schedule_to_contract_args(&recipients, &claim());

        assert_eq!(args.recipients, recipients);
        assert_eq!(args.start_timestamps, vec![1_000; 3]);
        assert_eq!(args.end_timestamps, vec![1_100; 3]);
        assert_eq!(args.release_interval_secs, vec![10; 3]);
        assert_eq!(args.linear_vest_amounts, vec![U256::from(800); 3]);
        assert_eq!(args.cliff_amounts, vec![U256::from(200); 3]);
    }
}
