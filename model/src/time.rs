use chrono::{DateTime, Utc};

use crate::Timestamp;

/// Convert a date to a UNIX timestamp in seconds, as suitable for the
/// vesting contract. Rounds up, so an on-chain unlock never lands earlier
/// than the moment the user selected. Pre-epoch dates clamp to 0.
pub fn date_to_absolute_timestamp_secs(date: DateTime<Utc>) -> Timestamp {
    (date.timestamp_millis().max(0) as Timestamp).div_ceil(1000)
}

/// Convert a stored timestamp back to a date.
///
/// Contract records hold seconds, datastore records written by older
/// clients hold milliseconds. Anything smaller than a fiftieth of the
/// current millisecond timestamp is taken to be seconds.
pub fn timestamp_to_date(ts: u64, now: DateTime<Utc>) -> DateTime<Utc> {
    let ts = ts.min(i64::MAX as u64) as i64;
    let parsed = if ts < now.timestamp_millis() / 50 {
        DateTime::from_timestamp(ts, 0)
    } else {
        DateTime::from_timestamp_millis(ts)
    };
    parsed.unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::time::{date_to_absolute_timestamp_secs, timestamp_to_date};

    #[test]
    fn timestamps_round_up_to_the_next_second() {
        let exact = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        assert_eq!(date_to_absolute_timestamp_secs(exact), 1_700_000_000);

        let just_after = DateTime::from_timestamp_millis(1_700_000_000_001).unwrap();
        assert_eq!(date_to_absolute_timestamp_secs(just_after), 1_700_000_001);

        let just_before = DateTime::from_timestamp_millis(1_699_999_999_999).unwrap();
        assert_eq!(date_to_absolute_timestamp_secs(just_before), 1_700_000_000);
    }

    #[test]
    fn pre_epoch_dates_clamp_to_zero() {
        let date = Utc.with_ymd_and_hms(1969, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(date_to_absolute_timestamp_secs(date), 0);
    }

    #[test]
    fn detects_seconds_and_milliseconds() {
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let moment = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();

        let from_secs = timestamp_to_date(moment.timestamp() as u64, now);
        assert_eq!(from_secs, moment);

        let from_millis = timestamp_to_date(moment.timestamp_millis() as u64, now);
        assert_eq!(from_millis, moment);
    }
}
