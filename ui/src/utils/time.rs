use jiff::{Timestamp, tz};

/// Format a server timestamp in the viewer's timezone for human reading.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    let zoned = timestamp.to_zoned(tz::TimeZone::system());
    zoned.strftime("%a, %d %b %Y %H:%M").to_string()
}
