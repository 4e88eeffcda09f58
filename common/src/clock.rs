//! Wall time, tick detection and time text formatting.
//!
//! The host supplies wall time through the [`Clock`] trait. [`TickTimer`]
//! turns polled wall time into tick events, at most one per [`TickUnit`].

use core::fmt::Write;

use heapless::String;

/// Local wall-clock reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WallTime {
    /// Seconds since the Unix epoch.
    pub unix_seconds: i64,
    /// Local hour, 0-23.
    pub hour: u8,
    /// Local minute, 0-59.
    pub minute: u8,
}

/// Host clock collaborator.
pub trait Clock {
    /// Current local wall time.
    fn now(&self) -> WallTime;

    /// Whether the user prefers 24-hour time.
    fn is_24h_style(&self) -> bool;
}

// =============================================================================
// Tick Detection
// =============================================================================

/// Refresh granularity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickUnit {
    /// Once per minute (normal operation).
    Minute,
    /// Once per second (debug builds).
    Second,
}

impl TickUnit {
    /// Length of one unit in seconds.
    #[inline]
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Minute => 60,
            Self::Second => 1,
        }
    }

    /// Index of the unit containing `time`.
    #[inline]
    pub const fn period_of(
        self,
        time: &WallTime,
    ) -> i64 {
        time.unix_seconds.div_euclid(self.seconds())
    }
}

/// Converts a polled clock into tick events.
#[derive(Debug)]
pub struct TickTimer {
    unit: TickUnit,
    last_period: Option<i64>,
}

impl TickTimer {
    pub const fn new(unit: TickUnit) -> Self {
        Self {
            unit,
            last_period: None,
        }
    }

    /// Returns `true` when `now` falls in a unit that has not ticked yet.
    ///
    /// The first poll always ticks so the face shows the time right away.
    pub fn poll(
        &mut self,
        now: &WallTime,
    ) -> bool {
        let period = self.unit.period_of(now);
        if self.last_period == Some(period) {
            return false;
        }
        self.last_period = Some(period);
        true
    }
}

// =============================================================================
// Time Text
// =============================================================================

/// Time readout: `HH:MM` or `hh:mm`, always five characters.
pub type TimeText = String<5>;

/// Format hour and minute for display.
///
/// In 12-hour style the hour runs 01-12 (midnight and noon show as 12).
pub fn format_time(
    hour: u8,
    minute: u8,
    is_24h: bool,
) -> TimeText {
    let hour = if is_24h {
        hour
    } else {
        match hour % 12 {
            0 => 12,
            h => h,
        }
    };
    let mut text = TimeText::new();
    // Two-digit fields cannot overflow five characters.
    let _ = write!(text, "{:02}:{:02}", hour % 100, minute % 100);
    text
}

/// Placeholder text shown before the first tick.
pub fn placeholder_time() -> TimeText {
    let mut text = TimeText::new();
    let _ = text.push_str(crate::config::PLACEHOLDER_TIME);
    text
}
