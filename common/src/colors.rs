//! Color constants for the watchface.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The watchface itself thinks in a 64-color palette (2 bits per channel, see
//! [`crate::palette::Color64`]); those colors are widened to Rgb565 only when
//! they reach the drawing surface.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Window and canvas background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Monochrome foreground.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Channel Expansion Tables
// =============================================================================

/// 2-bit channel value to 5-bit red/blue level.
///
/// Entries are symmetric around the middle (`x + RB_LEVELS[3 - i] == 31`), so
/// inverting the 2-bit channel inverts all 5 bits of the widened channel.
pub const RB_LEVELS: [u8; 4] = [0, 10, 21, 31];

/// 2-bit channel value to 6-bit green level. Same symmetry as [`RB_LEVELS`].
pub const G_LEVELS: [u8; 4] = [0, 21, 42, 63];

const _: () = assert!(RB_LEVELS[0] + RB_LEVELS[3] == 31);
const _: () = assert!(RB_LEVELS[1] + RB_LEVELS[2] == 31);
const _: () = assert!(G_LEVELS[0] + G_LEVELS[3] == 63);
const _: () = assert!(G_LEVELS[1] + G_LEVELS[2] == 63);
