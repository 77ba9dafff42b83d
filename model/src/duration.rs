use std::fmt;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    time::date_to_absolute_timestamp_secs, DurationSecs, SECS_IN_DAY, SECS_IN_HOUR, SECS_IN_MINUTE,
    SECS_IN_WEEK,
};

/// A mixed calendar duration, e.g. "1 month" or "2 years 3 days".
///
/// Months and years are not fixed-length, so converting to seconds requires
/// an anchor date. All other units are fixed-length.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CalendarDuration {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CalendarDuration {
    pub const fn seconds(seconds: u32) -> Self {
        Self {
            seconds,
            ..Self::zero()
        }
    }

    pub const fn minutes(minutes: u32) -> Self {
        Self {
            minutes,
            ..Self::zero()
        }
    }

    pub const fn hours(hours: u32) -> Self {
        Self {
            hours,
            ..Self::zero()
        }
    }

    pub const fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::zero()
        }
    }

    pub const fn weeks(weeks: u32) -> Self {
        Self {
            weeks,
            ..Self::zero()
        }
    }

    pub const fn months(months: u32) -> Self {
        Self {
            months,
            ..Self::zero()
        }
    }

    pub const fn years(years: u32) -> Self {
        Self {
            years,
            ..Self::zero()
        }
    }

    const fn zero() -> Self {
        Self {
            years: 0,
            months: 0,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Calendar-aware addition. Months and years are added first (day of
    /// month clamped by `chrono`), then the fixed-length remainder.
    /// Saturates at the end of the representable range.
    pub fn add_to(&self, date: DateTime<Utc>) -> DateTime<Utc> {
        let months = self.years * 12 + self.months;
        let date = if months > 0 {
            date.checked_add_months(Months::new(months))
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
        } else {
            date
        };

        let fixed_secs = u64::from(self.weeks) * SECS_IN_WEEK
            + u64::from(self.days) * SECS_IN_DAY
            + u64::from(self.hours) * SECS_IN_HOUR
            + u64::from(self.minutes) * SECS_IN_MINUTE
            + u64::from(self.seconds);

        date.checked_add_signed(Duration::seconds(fixed_secs as i64))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Interval length in seconds as the contract-ready descriptor defines
    /// it: the duration added to the UNIX epoch, taken as a timestamp.
    ///
    /// Exact for fixed-length units. For months and years the result is
    /// anchored to January 1970 rather than the schedule's start date;
    /// descriptors already on chain were produced this way, so this
    /// conversion must not change.
    pub fn seconds_from_epoch(&self) -> DurationSecs {
        date_to_absolute_timestamp_secs(self.add_to(DateTime::UNIX_EPOCH))
    }

    /// Interval length in seconds measured from `anchor`.
    pub fn seconds_from(&self, anchor: DateTime<Utc>) -> DurationSecs {
        (self.add_to(anchor) - anchor).num_seconds().max(0) as DurationSecs
    }
}

impl fmt::Display for CalendarDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (self.years, "year"),
            (self.months, "month"),
            (self.weeks, "week"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ];

        let mut first = true;
        for (value, unit) in parts {
            if value == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{value} {unit}{}", if value == 1 { "" } else { "s" })?;
            first = false;
        }

        if first {
            write!(f, "0 seconds")?;
        }
        Ok(())
    }
}
