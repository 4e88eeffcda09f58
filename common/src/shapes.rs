//! Seeded splatter generator.
//!
//! [`generate`] streams exactly [`SHAPE_COUNT`] shapes for a seed, a canvas
//! size and an animation progress. The random stream is reopened from the
//! seed on every call, so the draws (kind, color, resting geometry) only
//! depend on the seed and canvas; progress only moves the result.
//!
//! # Per-shape draws
//!
//! ```text
//! color, kind bit, then
//!   circle: x, y (over a 1.5x canvas), radius, x jitter, y jitter
//!   line:   x, y (over the canvas), length
//! ```
//!
//! # Circles
//!
//! Bigger circles are pulled toward the origin corner: the drawn position is
//! scaled by `(RADIUS - r + 1) / RADIUS` and nudged by up to `JITTER - 1`
//! pixels. During the animation the center is scaled by progress, so all
//! circles grow out of the origin.
//!
//! # Lines
//!
//! A line is a short diagonal stroke toward the origin corner, reaching
//! `LINE_REACH / length` pixels per axis. During the animation the stroke is
//! pushed back along the diagonal by `(max(x, y) + length) * (1 - progress)`,
//! which at MIN puts every line fully above/left of the canvas.

use embedded_graphics::prelude::{Point, Size};

use crate::animations::Progress;
use crate::config::{
    JITTER,
    LINE_MIN_LENGTH,
    LINE_REACH,
    OVERSIZE_DEN,
    OVERSIZE_NUM,
    RADIUS,
    SHAPE_COUNT,
};
use crate::palette::Color64;
use crate::seed::{RandomStream, RenderSeed};

// =============================================================================
// Shape Types
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Circle,
    Line,
}

/// Resting form of a shape, as decided by the random stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Form {
    Circle { center: Point, radius: u32 },
    Line { anchor: Point, length: u32 },
}

impl Form {
    #[inline]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Line { .. } => ShapeKind::Line,
        }
    }

    /// Geometry of this form at `progress`. At MAX this is the resting
    /// geometry.
    pub const fn place(
        &self,
        progress: Progress,
    ) -> Geometry {
        match *self {
            Self::Circle { center, radius } => Geometry::Circle {
                center: Point::new(progress.scale(center.x), progress.scale(center.y)),
                radius,
            },
            Self::Line { anchor, length } => {
                let reach = (LINE_REACH / if length == 0 { 1 } else { length }) as i32;
                let shift = max_i32(anchor.x, anchor.y) + length as i32;
                let offset = progress.remaining(shift);
                let start = Point::new(anchor.x - offset, anchor.y - offset);
                Geometry::Line {
                    start,
                    end: Point::new(start.x - reach, start.y - reach),
                }
            }
        }
    }
}

/// Drawable geometry in canvas pixel coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Geometry {
    Circle { center: Point, radius: u32 },
    Line { start: Point, end: Point },
}

impl Geometry {
    #[inline]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Line { .. } => ShapeKind::Line,
        }
    }
}

/// One generated shape. Transient: produced per frame, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shape {
    pub color: Color64,
    /// Resting form (progress independent).
    pub form: Form,
    /// Geometry at the requested progress.
    pub geometry: Geometry,
}

impl Shape {
    #[inline]
    pub const fn kind(&self) -> ShapeKind { self.form.kind() }

    /// Geometry once the animation has finished.
    #[inline]
    pub const fn resting(&self) -> Geometry { self.form.place(Progress::MAX) }
}

// =============================================================================
// Generator
// =============================================================================

/// Stream the shapes for `seed` on a canvas of `bounds` at `progress`.
#[inline]
pub fn generate(
    seed: RenderSeed,
    progress: Progress,
    bounds: Size,
) -> Shapes {
    Shapes::new(seed, progress, bounds)
}

/// Iterator over one frame's shapes. Always yields [`SHAPE_COUNT`] items.
pub struct Shapes {
    stream: RandomStream,
    progress: Progress,
    bounds: Size,
    remaining: usize,
}

impl Shapes {
    pub fn new(
        seed: RenderSeed,
        progress: Progress,
        bounds: Size,
    ) -> Self {
        Self {
            stream: seed.stream(),
            progress,
            bounds,
            remaining: SHAPE_COUNT,
        }
    }

    fn next_form(&mut self) -> Form {
        if self.stream.coin() {
            self.next_circle()
        } else {
            self.next_line()
        }
    }

    fn next_circle(&mut self) -> Form {
        let w = self.bounds.width * OVERSIZE_NUM / OVERSIZE_DEN;
        let h = self.bounds.height * OVERSIZE_NUM / OVERSIZE_DEN;
        let x = self.stream.below(w);
        let y = self.stream.below(h);
        let radius = self.stream.below(RADIUS) + 1;

        // Bigger circles sit closer to the origin corner.
        let pull = RADIUS - radius + 1;
        let x = self.stream.below(JITTER) + pull * x / RADIUS;
        let y = self.stream.below(JITTER) + pull * y / RADIUS;

        Form::Circle {
            center: Point::new(x as i32, y as i32),
            radius,
        }
    }

    fn next_line(&mut self) -> Form {
        let x = self.stream.below(self.bounds.width);
        let y = self.stream.below(self.bounds.height);
        let length = self.stream.below(RADIUS) + LINE_MIN_LENGTH;
        Form::Line {
            anchor: Point::new(x as i32, y as i32),
            length,
        }
    }
}

impl Iterator for Shapes {
    type Item = Shape;

    fn next(&mut self) -> Option<Shape> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let color = Color64::random(&mut self.stream);
        let form = self.next_form();
        Some(Shape {
            color,
            form,
            geometry: form.place(self.progress),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl ExactSizeIterator for Shapes {}

#[inline]
const fn max_i32(
    a: i32,
    b: i32,
) -> i32 {
    if a > b { a } else { b }
}

// =============================================================================
// Unit Tests
// =============================================================================
