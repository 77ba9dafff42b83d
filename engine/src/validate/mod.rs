use chrono::{DateTime, Duration, Utc};
use vesting_model::{claim::ClaimInfo, duration::CalendarDuration, schedule::ScheduleParameters};

use crate::schedule::calculate_pending_claim_info;


const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cliff/linear amount split happens in this fixed-point scale, so the
/// percentages stay exact for the precision the form allows.
const AMOUNT_SCALE: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleField {
    StartDate,
    EndDate,
    TotalAmount,
    CliffPercent,
    ReleaseFrequency,
    General,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleIssue {
    pub field: ScheduleField,
    pub message: String,
}

/// Raw schedule form state: dates picked in the UI, amounts and percents
/// still as the user typed them.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleFormInput {
    pub schedule_start_date: Option<DateTime<Utc>>,
    pub schedule_end_date: Option<DateTime<Utc>>,
    pub total_amount_tokens: String,
    /// `None` means no cliff; the linear portion then starts at the
    /// schedule start.
    pub cliff_duration_after_schedule_start: Option<CalendarDuration>,
    pub cliff_percent: String,
    pub linear_release_frequency: Option<CalendarDuration>,
    pub unit_decimals: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleValidation {
    pub issues: Vec<ScheduleIssue>,
    /// Present when the form is fully valid.
    pub pending_claim: Option<ClaimInfo>,
    /// When the release interval doesn't fit, end dates near the chosen one
    /// that would, for the caller to offer as alternatives.
    pub tentative_end_dates: Vec<DateTime<Utc>>,
}

impl ScheduleValidation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty() && self.pending_claim.is_some()
    }
}

fn round_to_5_decimals(value: f64) -> f64 {
    format!("{value:.5}").parse().unwrap_or(0.0)
}

/// Validate the schedule form and, when everything checks out, produce the
/// pending claim descriptor. Re-run on every form edit.
///
/// An end date that misses an interval boundary by a hair (under a ten
/// thousandth of an interval, or under 100 seconds) is snapped to that
/// boundary instead of being reported.
pub fn validate_schedule(input: &ScheduleFormInput) -> ScheduleValidation {
    let mut issues: Vec<ScheduleIssue> = vec![];
    let mut tentative_end_dates: Vec<DateTime<Utc>> = vec![];
    let mut pending_claim = None;

    let issue = |field, message: &str| ScheduleIssue {
        field,
        message: message.to_owned(),
    };

    let total_tokens: f64 = input.total_amount_tokens.parse().unwrap_or(f64::NAN);
    let total_scaled = AMOUNT_SCALE * total_tokens;

    let cliff_percent: f64 = input.cliff_percent.parse().unwrap_or(f64::NAN);
    let cliff_scaled = if input.cliff_duration_after_schedule_start.is_some() {
        (total_scaled * cliff_percent * 0.01).floor()
    } else {
        0.0
    };
    let linear_scaled = total_scaled - cliff_scaled;

    let cliff_amount_tokens = round_to_5_decimals(cliff_scaled / AMOUNT_SCALE);
    let linear_vested_amount_tokens = round_to_5_decimals(linear_scaled / AMOUNT_SCALE);

    if input.schedule_start_date.is_none() {
        issues.push(issue(ScheduleField::StartDate, "Start date must be set."));
    }

    if input.linear_release_frequency.is_none() {
        issues.push(issue(
            ScheduleField::ReleaseFrequency,
            "Release frequency must be set.",
        ));
    } else if input.schedule_end_date.is_none() {
        issues.push(issue(ScheduleField::EndDate, "End date must be set."));
    }

    if !(total_scaled > 0.0) {
        issues.push(issue(
            ScheduleField::TotalAmount,
            "Tokens must be assigned to the schedule.",
        ));
    } else if (total_tokens * 1_000.0).fract().abs() > 1e-6 {
        issues.push(issue(
            ScheduleField::TotalAmount,
            "Amount can't have more than three decimal places.",
        ));
    }

    if input.cliff_duration_after_schedule_start.is_some() {
        if !(cliff_scaled > 0.0) {
            issues.push(issue(
                ScheduleField::CliffPercent,
                "If using a cliff, the cliff percent must be set.",
            ));
        } else if (cliff_percent * 100.0).fract().abs() > 1e-6 {
            issues.push(issue(
                ScheduleField::CliffPercent,
                "Cliff percent can't have more than two decimal places.",
            ));
        } else if cliff_percent >= 100.0 {
            issues.push(issue(
                ScheduleField::CliffPercent,
                "Cliff percent can't be 100% or more.",
            ));
        }
    }

    if let (Some(schedule_start), Some(frequency)) =
        (input.schedule_start_date, input.linear_release_frequency)
    {
        let linear_vest_start = input
            .cliff_duration_after_schedule_start
            .map_or(schedule_start, |cliff| cliff.add_to(schedule_start));

        if let Some(schedule_end) = input.schedule_end_date {
            let mut linear_vest_end = schedule_end;

            if schedule_end < linear_vest_start {
                let message = if input.cliff_duration_after_schedule_start.is_some() {
                    format!(
                        "End date must be after the start date. Linear vesting starts at {} because of the cliff.",
                        linear_vest_start.format(DATETIME_FORMAT)
                    )
                } else {
                    "End date must be after the start date.".to_owned()
                };
                issues.push(ScheduleIssue {
                    field: ScheduleField::EndDate,
                    message,
                });
            }

            // The release interval must fit a whole number of times into the
            // linear vesting window; a partial interval at the tail would
            // never unlock.
            let interval_secs = frequency.seconds_from(linear_vest_start);
            if interval_secs == 0 {
                issues.push(issue(
                    ScheduleField::ReleaseFrequency,
                    "Release frequency must be a positive duration.",
                ));
            } else {
                let window_secs = (schedule_end - linear_vest_start).num_seconds();
                let multiples = (window_secs as f64 / interval_secs as f64).abs();
                let fraction = multiples.fract();
                let closest_multiple = multiples.round().max(1.0) as u64;
                let closest_end = linear_vest_start
                    + Duration::seconds((closest_multiple * interval_secs) as i64);

                let close_enough = fraction < 1e-4 || interval_secs as f64 * fraction < 100.0;
                if schedule_end > linear_vest_start && close_enough {
                    if closest_end != schedule_end {
                        log::debug!(
                            "snapping end date {} to interval boundary {}",
                            schedule_end.format(DATETIME_FORMAT),
                            closest_end.format(DATETIME_FORMAT),
                        );
                    }
                    linear_vest_end = closest_end;
                } else {
                    issues.push(ScheduleIssue {
                        field: ScheduleField::ReleaseFrequency,
                        message: format!(
                            "Invalid release interval. Closest valid end date: {}.",
                            closest_end.format(DATETIME_FORMAT)
                        ),
                    });

                    let first_multiple = closest_multiple.saturating_sub(2);
                    for multiple in first_multiple..first_multiple + 4 {
                        let candidate = linear_vest_start
                            + Duration::seconds((multiple * interval_secs) as i64);
                        if candidate > linear_vest_start {
                            tentative_end_dates.push(candidate);
                        }
                    }
                }
            }

            if issues.is_empty() {
                let params = ScheduleParameters {
                    linear_vest_start_time: linear_vest_start,
                    linear_vest_end_time: linear_vest_end,
                    // Cliff and linear start are the same moment; the cliff
                    // differs only in unlock shape.
                    cliff_release_time: (cliff_amount_tokens > 0.0).then_some(linear_vest_start),
                    release_interval: frequency,
                    linear_vested_amount_tokens,
                    cliff_amount_tokens,
                    unit_decimals: input.unit_decimals,
                    token_precision: None,
                };

                match calculate_pending_claim_info(&params) {
                    Ok(claim) => pending_claim = Some(claim),
                    Err(err) => issues.push(ScheduleIssue {
                        field: ScheduleField::General,
                        message: err.to_string(),
                    }),
                }
            }
        }
    }

    ScheduleValidation {
        issues,
        pending_claim,
        tentative_end_dates,
    }
}
