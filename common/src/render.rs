//! Painting the watchface onto a drawing surface.
//!
//! The screen is split into two regions:
//!
//! ```text
//! +------------------+
//! |                  |
//! |   canvas         |  splatter background, full repaint every frame
//! |                  |
//! +------------------+
//! |   12:34          |  time band (TIME_WIDTH x TIME_HEIGHT)
//! +------------------+
//! ```
//!
//! All functions are generic over `DrawTarget<Color = Rgb565>`. Draw errors
//! belong to the surface and are discarded.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle,
    Line,
    PrimitiveStyle,
    PrimitiveStyleBuilder,
    Rectangle,
    StrokeAlignment,
};
use embedded_graphics::text::Text;

use crate::animations::Progress;
use crate::colors::BLACK;
use crate::config::{TIME_HEIGHT, TIME_WIDTH};
use crate::palette::{Ink, TextColors};
use crate::seed::RenderSeed;
use crate::shapes::{Geometry, Shape, generate};
use crate::styles::{CENTERED, time_style};

/// Stroke width of the contrasting edge under monochrome lines.
const LINE_OUTLINE_WIDTH: u32 = 3;

// =============================================================================
// Layout
// =============================================================================

/// Screen regions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    /// Background canvas at the top.
    pub canvas: Rectangle,
    /// Time band at the bottom.
    pub time_band: Rectangle,
}

impl Layout {
    /// Split a screen of `size` into canvas and time band.
    ///
    /// Screens shorter than the band get an empty canvas.
    pub const fn for_screen(size: Size) -> Self {
        let band_height = if size.height < TIME_HEIGHT { size.height } else { TIME_HEIGHT };
        let band_width = if size.width < TIME_WIDTH { size.width } else { TIME_WIDTH };
        let canvas_height = size.height - band_height;
        Self {
            canvas: Rectangle::new(Point::zero(), Size::new(size.width, canvas_height)),
            time_band: Rectangle::new(
                Point::new(0, canvas_height as i32),
                Size::new(band_width, band_height),
            ),
        }
    }
}

// =============================================================================
// Background
// =============================================================================

/// Clear `canvas` to black and paint one frame of shapes into it.
///
/// Shape coordinates are relative to the canvas origin; anything outside
/// the canvas is clipped.
pub fn draw_background<D>(
    display: &mut D,
    canvas: Rectangle,
    seed: RenderSeed,
    progress: Progress,
    ink: Ink,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut clipped = display.clipped(&canvas);
    let mut target = clipped.translated(canvas.top_left);

    target
        .fill_solid(&Rectangle::new(Point::zero(), canvas.size), BLACK)
        .ok();

    for shape in generate(seed, progress, canvas.size) {
        draw_shape(&mut target, &shape, ink);
    }
}

/// Paint one shape with the ink's colors.
pub fn draw_shape<D>(
    display: &mut D,
    shape: &Shape,
    ink: Ink,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let paint = ink.shape_paint(shape.color);
    match shape.geometry {
        Geometry::Circle { center, radius } => {
            let style = match paint.outline {
                Some(outline) => PrimitiveStyleBuilder::new()
                    .fill_color(paint.color)
                    .stroke_color(outline)
                    .stroke_width(1)
                    .stroke_alignment(StrokeAlignment::Outside)
                    .build(),
                None => PrimitiveStyle::with_fill(paint.color),
            };
            Circle::with_center(center, radius * 2 + 1)
                .into_styled(style)
                .draw(display)
                .ok();
        }
        Geometry::Line { start, end } => {
            let line = Line::new(start, end);
            if let Some(outline) = paint.outline {
                line.into_styled(PrimitiveStyle::with_stroke(outline, LINE_OUTLINE_WIDTH))
                    .draw(display)
                    .ok();
            }
            line.into_styled(PrimitiveStyle::with_stroke(paint.color, 1))
                .draw(display)
                .ok();
        }
    }
}

// =============================================================================
// Time Band
// =============================================================================

/// Fill the band with the background color and center the time text on it.
pub fn draw_time<D>(
    display: &mut D,
    band: Rectangle,
    text: &str,
    colors: TextColors,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.fill_solid(&band, colors.background).ok();
    Text::with_text_style(text, band.center(), time_style(colors.foreground), CENTERED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
