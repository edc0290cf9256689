//! Read-through caching for computed featured lists
//!
//! This module provides caching for ranking results:
//! - A TTL-bounded cache keyed by logical name (avoids recomputing the
//!   featured selector on every read)
//! - Millisecond-clock expiry helpers (expiry is checked lazily on read,
//!   never by a background timer)

mod featured;
pub mod ttl;

pub use featured::{CacheStats, FeaturedCache};
