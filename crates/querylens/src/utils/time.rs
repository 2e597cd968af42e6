use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

const UNIX_EPOCH_RFC3339: &str = "1970-01-01T00:00:00Z";

#[must_use]
pub fn now_utc_rfc3339() -> String {
    format_rfc3339(OffsetDateTime::now_utc())
}

/// Formats `value` in UTC; years outside RFC 3339's range fall back to the epoch.
#[must_use]
pub fn format_rfc3339(value: OffsetDateTime) -> String {
    value
        .to_offset(UtcOffset::UTC)
        .format(&Rfc3339)
        .unwrap_or_else(|_| UNIX_EPOCH_RFC3339.to_string())
}
