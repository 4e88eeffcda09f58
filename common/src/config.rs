//! Watchface configuration constants.
//!
//! Everything tunable lives here as a compile-time constant. Relationships
//! between constants are checked with `const` assertions so a bad edit fails
//! the build instead of producing odd geometry at runtime.

use crate::clock::TickUnit;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (Pebble-class 144x168 panel).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Height of the time band at the bottom of the screen.
pub const TIME_HEIGHT: u32 = 50;

/// Width of the time band.
pub const TIME_WIDTH: u32 = 144;

const _: () = assert!(TIME_HEIGHT < SCREEN_HEIGHT);
const _: () = assert!(TIME_WIDTH <= SCREEN_WIDTH);

// =============================================================================
// Background Generator
// =============================================================================

/// Number of shapes emitted per frame.
pub const SHAPE_COUNT: usize = 512;

/// Largest circle radius; also sets the line length range.
pub const RADIUS: u32 = 10;

/// Maximum random nudge added to circle positions, exclusive.
pub const JITTER: u32 = 10;

/// Line endpoint reach numerator. The stroke reaches `LINE_REACH / length`
/// pixels along each axis, so longer lines draw shorter strokes.
pub const LINE_REACH: u32 = 30;

/// Shortest line length drawn.
pub const LINE_MIN_LENGTH: u32 = 3;

/// Circles are placed on a virtual canvas this much larger than the visible
/// one (numerator / denominator), so they can fly in from past the edges.
pub const OVERSIZE_NUM: u32 = 3;
pub const OVERSIZE_DEN: u32 = 2;

/// Random colors are drawn from `0..COLOR_CHANNEL_RANGE`, which leaves out
/// the last palette entry (pure white).
pub const COLOR_CHANNEL_RANGE: u32 = 63;

const _: () = assert!(RADIUS >= 1);
const _: () = assert!(LINE_MIN_LENGTH >= 1);
// Longest line must still reach at least one pixel.
const _: () = assert!(LINE_REACH / (RADIUS + LINE_MIN_LENGTH - 1) >= 1);
const _: () = assert!(OVERSIZE_NUM >= OVERSIZE_DEN);
const _: () = assert!(COLOR_CHANNEL_RANGE <= 64);

// =============================================================================
// Timing Configuration
// =============================================================================

/// Length of the entrance animation after every tick.
pub const ANIMATION_DURATION_MS: u32 = 1000;

/// Refresh granularity. Seconds with the `debug-ticks` feature, minutes otherwise.
#[cfg(feature = "debug-ticks")]
pub const TICK_UNIT: TickUnit = TickUnit::Second;

/// Refresh granularity. Seconds with the `debug-ticks` feature, minutes otherwise.
#[cfg(not(feature = "debug-ticks"))]
pub const TICK_UNIT: TickUnit = TickUnit::Minute;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Height of the background canvas above the time band.
pub const CANVAS_HEIGHT: u32 = SCREEN_HEIGHT - TIME_HEIGHT;

/// Text shown before the first tick arrives.
pub const PLACEHOLDER_TIME: &str = "--:--";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_height() {
        assert_eq!(CANVAS_HEIGHT, 118, "144x168 screen minus a 50px band");
    }

    #[test]
    fn test_line_reach_range() {
        let longest = RADIUS + LINE_MIN_LENGTH - 1;
        assert_eq!(LINE_REACH / LINE_MIN_LENGTH, 10);
        assert_eq!(LINE_REACH / longest, 2);
    }

    #[cfg(feature = "debug-ticks")]
    #[test]
    fn test_debug_ticks_every_second() {
        assert_eq!(TICK_UNIT, TickUnit::Second);
    }

    #[cfg(not(feature = "debug-ticks"))]
    #[test]
    fn test_ticks_every_minute() {
        assert_eq!(TICK_UNIT, TickUnit::Minute);
    }

    #[test]
    fn test_placeholder_fits_time_text() {
        assert_eq!(PLACEHOLDER_TIME.len(), 5);
    }
}
