use chrono::{DateTime, SubsecRound, Utc};

/// Display format shared by transaction timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Clock abstracts access to the current timestamp so the ledger stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Drops sub-second precision so ordering matches the rendered timestamp.
pub fn truncate_to_seconds(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn truncation_removes_fractional_seconds() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 15)
            .unwrap()
            .with_nanosecond(987_000_000)
            .unwrap();
        let truncated = truncate_to_seconds(at);
        assert_eq!(truncated.nanosecond(), 0);
        assert_eq!(
            truncated.format(TIMESTAMP_FORMAT).to_string(),
            "2024-03-01 09:30:15"
        );
    }
}
