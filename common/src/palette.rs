//! 64-color palette and ink strategies.
//!
//! # Color64
//!
//! The watchface draws from a 64-color palette packed as `0b00rrggbb`, the
//! same layout Pebble-class color panels use. A color's high-contrast partner
//! is its bitwise complement within those six bits.
//!
//! # Ink
//!
//! [`Ink`] is chosen once at startup from the panel's capabilities:
//!
//! | Ink | Shapes | Time text |
//! |-----|--------|-----------|
//! | `Color` | filled/stroked in their random color | random background, inverted foreground |
//! | `Monochrome` | white with a black outline | black background, white foreground |
//!
//! Both inks consume the random stream identically, so geometry does not
//! depend on which ink is active.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, G_LEVELS, RB_LEVELS, WHITE};
use crate::config::COLOR_CHANNEL_RANGE;
use crate::seed::{RandomStream, RenderSeed};

// =============================================================================
// Color64
// =============================================================================

/// One entry of the 64-color palette (`0b00rrggbb`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Color64(u8);

impl Color64 {
    /// Mask covering the six color bits.
    pub const MASK: u8 = 0b0011_1111;

    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(Self::MASK);

    /// Build from a raw value; bits above the sixth are dropped.
    #[inline]
    pub const fn new(raw: u8) -> Self { Self(raw & Self::MASK) }

    /// Build from 2-bit channel values (each masked to `0..=3`).
    #[inline]
    #[allow(dead_code)]
    pub const fn from_channels(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self(((r & 0b11) << 4) | ((g & 0b11) << 2) | (b & 0b11))
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn raw(self) -> u8 { self.0 }

    /// Draw the next random color from the stream (never pure white).
    #[inline]
    pub fn random(stream: &mut RandomStream) -> Self { Self::new(stream.below(COLOR_CHANNEL_RANGE) as u8) }

    /// Bitwise complement within the palette encoding.
    #[inline]
    pub const fn invert(self) -> Self { Self(self.0 ^ Self::MASK) }

    /// Widen to the panel's Rgb565 format.
    ///
    /// Inverting before or after widening gives the same pixel value.
    pub const fn to_rgb565(self) -> Rgb565 {
        let r = (self.0 >> 4) & 0b11;
        let g = (self.0 >> 2) & 0b11;
        let b = self.0 & 0b11;
        Rgb565::new(RB_LEVELS[r as usize], G_LEVELS[g as usize], RB_LEVELS[b as usize])
    }
}

// =============================================================================
// Text Colors
// =============================================================================

/// Background/foreground pair for the time band.
///
/// The foreground is always the bitwise complement of the background in the
/// active encoding, so the digits stay readable on any random background.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TextColors {
    pub background: Rgb565,
    pub foreground: Rgb565,
}

// =============================================================================
// Ink Strategy
// =============================================================================

/// How a shape is painted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShapePaint {
    /// Fill color for circles, stroke color for lines.
    pub color: Rgb565,
    /// Contrasting edge drawn around/under the shape, if any.
    pub outline: Option<Rgb565>,
}

/// Rendering strategy for the panel's color capability.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Ink {
    /// 64-color panel.
    #[default]
    Color,
    /// Black/white panel.
    Monochrome,
}

impl Ink {
    /// Paint for a shape whose random color is `color`.
    pub const fn shape_paint(
        self,
        color: Color64,
    ) -> ShapePaint {
        match self {
            Self::Color => ShapePaint {
                color: color.to_rgb565(),
                outline: None,
            },
            Self::Monochrome => ShapePaint {
                color: WHITE,
                outline: Some(BLACK),
            },
        }
    }

    /// Text colors for a tick.
    ///
    /// Reseeds from `seed` and takes the first color of the stream, which is
    /// the same draw that colors the first background shape.
    pub fn text_colors(
        self,
        seed: RenderSeed,
    ) -> TextColors {
        let background = Color64::random(&mut seed.stream());
        match self {
            Self::Color => TextColors {
                background: background.to_rgb565(),
                foreground: background.invert().to_rgb565(),
            },
            Self::Monochrome => TextColors {
                background: BLACK,
                foreground: WHITE,
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::IntoStorage;

    use super::*;

    // -------------------------------------------------------------------------
    // Color64 Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_color64_masks_high_bits() {
        assert_eq!(Color64::new(0b1100_0001).raw(), 0b0000_0001);
    }

    #[test]
    fn test_color64_channels() {
        assert_eq!(Color64::from_channels(3, 0, 0).raw(), 0b11_0000);
        assert_eq!(Color64::from_channels(0, 3, 0).raw(), 0b00_1100);
        assert_eq!(Color64::from_channels(0, 0, 3).raw(), 0b00_0011);
    }

    #[test]
    fn test_color64_extremes_to_rgb565() {
        assert_eq!(Color64::BLACK.to_rgb565(), BLACK);
        assert_eq!(Color64::WHITE.to_rgb565(), WHITE);
    }

    #[test]
    fn test_invert_is_involution() {
        for raw in 0..64u8 {
            let c = Color64::new(raw);
            assert_eq!(c.invert().invert(), c);
        }
    }

    #[test]
    fn test_invert_commutes_with_widening() {
        // Inverting in palette space must match inverting the panel pixel.
        for raw in 0..64u8 {
            let c = Color64::new(raw);
            assert_eq!(
                c.invert().to_rgb565().into_storage(),
                !c.to_rgb565().into_storage(),
                "Color {raw:#08b} inverted should be the Rgb565 complement"
            );
        }
    }

    #[test]
    fn test_random_never_white() {
        let mut stream = RenderSeed(3).stream();
        for _ in 0..5000 {
            assert_ne!(Color64::random(&mut stream), Color64::WHITE);
        }
    }

    // -------------------------------------------------------------------------
    // Contrast Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_text_colors_complement_for_every_seed() {
        for ink in [Ink::Color, Ink::Monochrome] {
            for seed in (0..2000u64).chain([u64::MAX, 1_700_000_000]) {
                let colors = ink.text_colors(RenderSeed(seed));
                assert_eq!(
                    colors.foreground.into_storage(),
                    !colors.background.into_storage(),
                    "{ink:?} seed {seed}: foreground must complement background"
                );
            }
        }
    }

    #[test]
    fn test_text_colors_deterministic() {
        let a = Ink::Color.text_colors(RenderSeed(42));
        let b = Ink::Color.text_colors(RenderSeed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_text_background_is_first_stream_color() {
        let seed = RenderSeed(99);
        let first = Color64::random(&mut seed.stream());
        assert_eq!(Ink::Color.text_colors(seed).background, first.to_rgb565());
    }

    #[test]
    fn test_monochrome_text_colors_fixed() {
        let colors = Ink::Monochrome.text_colors(RenderSeed(5));
        assert_eq!(colors.background, BLACK);
        assert_eq!(colors.foreground, WHITE);
    }

    // -------------------------------------------------------------------------
    // Shape Paint Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_color_ink_uses_shape_color() {
        let c = Color64::from_channels(2, 1, 3);
        let paint = Ink::Color.shape_paint(c);
        assert_eq!(paint.color, c.to_rgb565());
        assert_eq!(paint.outline, None);
    }

    #[test]
    fn test_monochrome_ink_outlines() {
        let paint = Ink::Monochrome.shape_paint(Color64::from_channels(2, 1, 3));
        assert_eq!(paint.color, WHITE);
        assert_eq!(paint.outline, Some(BLACK), "Monochrome shapes need a contrasting edge");
    }
}
