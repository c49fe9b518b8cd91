//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting timestamps in a
//! consistent, human-readable format using system timezone.

use std::fmt;

use jiff::{tz::TimeZone, SignedDuration, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Caption telling how long ago a snapshot was fetched.
///
/// Minutes are only shown once at least one full minute has passed; a
/// negative age (clock skew) reads as zero.
///
/// # Examples
///
/// ```rust
/// use jiff::SignedDuration;
/// use planwatch_core::display::RefreshedAgo;
///
/// assert_eq!(
///     RefreshedAgo(SignedDuration::from_secs(42)).to_string(),
///     "Last refreshed 42 sec ago"
/// );
/// assert_eq!(
///     RefreshedAgo(SignedDuration::from_secs(125)).to_string(),
///     "Last refreshed 2 min 5 sec ago"
/// );
/// ```
pub struct RefreshedAgo(pub SignedDuration);

impl fmt::Display for RefreshedAgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.as_secs().max(0);
        let minutes = total / 60;
        let seconds = total % 60;
        if minutes > 0 {
            write!(f, "Last refreshed {minutes} min {seconds} sec ago")
        } else {
            write!(f, "Last refreshed {seconds} sec ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refreshed_ago_seconds_only() {
        assert_eq!(
            RefreshedAgo(SignedDuration::ZERO).to_string(),
            "Last refreshed 0 sec ago"
        );
        assert_eq!(
            RefreshedAgo(SignedDuration::from_millis(59_900)).to_string(),
            "Last refreshed 59 sec ago"
        );
    }

    #[test]
    fn test_refreshed_ago_minutes() {
        assert_eq!(
            RefreshedAgo(SignedDuration::from_secs(60)).to_string(),
            "Last refreshed 1 min 0 sec ago"
        );
        assert_eq!(
            RefreshedAgo(SignedDuration::from_secs(3_725)).to_string(),
            "Last refreshed 62 min 5 sec ago"
        );
    }

    #[test]
    fn test_refreshed_ago_negative_is_zero() {
        assert_eq!(
            RefreshedAgo(SignedDuration::from_secs(-5)).to_string(),
            "Last refreshed 0 sec ago"
        );
    }

    #[test]
    fn test_local_datetime_format() {
        let ts = Timestamp::from_second(1_704_189_600).unwrap();
        let output = LocalDateTime(&ts).to_string();
        assert!(output.starts_with("2024-01-0"));
        assert_eq!(output.split(' ').count(), 3);
    }
}
