//! The one rule for turning a stored timestamp into a calendar day.
//!
//! Timestamps are UTC; every date-only comparison (patients today,
//! appointments today, day filters) uses the local calendar date.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// The local calendar date a UTC timestamp falls on.
pub fn local_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}
