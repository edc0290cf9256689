//! Millisecond-clock helpers for cache expiry
//!
//! Entries carry absolute expiry timestamps computed at insertion time;
//! reads compare against the current clock. Arithmetic saturates so that
//! extreme TTLs degrade to "never expires" instead of wrapping.

use std::time::Duration;

/// Get current timestamp in milliseconds since Unix epoch
#[inline]
#[must_use]
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

/// Compute an absolute expiry timestamp from an insertion time and TTL
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use featured_rank::cache::ttl::expires_at;
///
/// assert_eq!(expires_at(1_000, Duration::from_secs(3)), 4_000);
/// assert_eq!(expires_at(u64::MAX, Duration::from_secs(1)), u64::MAX);
/// ```
#[inline]
#[must_use]
pub fn expires_at(inserted_at_millis: u64, ttl: Duration) -> u64 {
    let ttl_millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
    inserted_at_millis.saturating_add(ttl_millis)
}

/// Check whether an absolute expiry timestamp has passed
///
/// The boundary is inclusive: an entry expires exactly at its expiry
/// timestamp.
#[inline]
#[must_use]
pub const fn is_expired(expires_at_millis: u64, now_millis: u64) -> bool {
    now_millis >= expires_at_millis
}
