//! Host wall clock backed by the `time` crate.

use splatter_common::clock::{Clock, WallTime};
use time::OffsetDateTime;

/// System clock in the local time zone.
///
/// Falls back to UTC when the local offset cannot be determined (e.g. on
/// some multi-threaded Unix processes).
pub struct HostClock {
    is_24h: bool,
}

impl HostClock {
    pub const fn new(is_24h: bool) -> Self { Self { is_24h } }
}

impl Clock for HostClock {
    fn now(&self) -> WallTime {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        WallTime {
            unix_seconds: now.unix_timestamp(),
            hour: now.hour(),
            minute: now.minute(),
        }
    }

    fn is_24h_style(&self) -> bool { self.is_24h }
}
