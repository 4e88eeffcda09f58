//! Pre-computed text styles.
//!
//! Alignment styles are `const`. The time text changes color on every tick,
//! so its character style is built per draw from [`TIME_FONT`].

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

/// Centered horizontally and vertically around the anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Large font for the time readout (`ProFont` 24pt).
pub const TIME_FONT: &MonoFont = &PROFONT_24_POINT;

/// Time text style in `color`.
#[inline]
pub const fn time_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> { MonoTextStyle::new(TIME_FONT, color) }
