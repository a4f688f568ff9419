use jiff::{Timestamp, ToSpan};
use rand::Rng;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Generate a unique ticket ID: `ticket_` plus a random hex token.
pub fn generate_ticket_id() -> String {
    let token: u64 = rand::rng().random();
    format!("ticket_{token:016x}")
}

/// Current instant as an ISO 8601 string (UTC, without fractional seconds).
pub fn iso_date() -> String {
    Timestamp::now().strftime(ISO_FORMAT).to_string()
}

/// ISO 8601 string for an instant the given number of hours in the past.
pub(crate) fn iso_date_hours_ago(hours: i64) -> String {
    Timestamp::now()
        .saturating_sub(hours.hours())
        .expect("hour spans are always valid timestamp arithmetic")
        .strftime(ISO_FORMAT)
        .to_string()
}

/// ISO 8601 string for an instant the given number of minutes in the past.
pub(crate) fn iso_date_minutes_ago(minutes: i64) -> String {
    Timestamp::now()
        .saturating_sub(minutes.minutes())
        .expect("minute spans are always valid timestamp arithmetic")
        .strftime(ISO_FORMAT)
        .to_string()
}
