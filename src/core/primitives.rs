use chrono::{Datelike, NaiveDate};

use crate::core::types::AxisMode;

const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Converts a calendar date to the day-granularity sequence coordinate
/// (days since 1970-01-01).
#[must_use]
pub fn date_to_sequence_days(date: NaiveDate) -> f64 {
    (i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE) as f64
}

/// Recovers the calendar date for a whole-day sequence coordinate.
///
/// Returns `None` for non-finite values, values off the whole-day grid, or
/// values outside the supported calendar range.
#[must_use]
pub fn sequence_to_date(sequence: f64) -> Option<NaiveDate> {
    if !sequence.is_finite() {
        return None;
    }
    let rounded = sequence.round();
    if (sequence - rounded).abs() > 1e-6 {
        return None;
    }
    let days_from_ce = (rounded as i64)
        .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(|days| i32::try_from(days).ok())?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce)
}

/// Formats one axis tick caption: `dd.mm` in date mode, the bare number
/// otherwise. Date-mode values off the day grid fall back to the numeric
/// form.
#[must_use]
pub fn format_tick_label(sequence: f64, mode: AxisMode) -> String {
    if mode == AxisMode::Date {
        if let Some(date) = sequence_to_date(sequence) {
            return format!("{:02}.{:02}", date.day(), date.month());
        }
    }
    if sequence.fract() == 0.0 && sequence.abs() < 1e15 {
        format!("{}", sequence as i64)
    } else {
        format!("{sequence}")
    }
}
