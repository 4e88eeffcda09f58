//! Core logic for the Splatter watchface.
//!
//! This crate contains everything that is not host-platform plumbing:
//!
//! - [`config`]: Display layout and tuning constants
//! - [`colors`]: RGB565 color constants
//! - [`palette`]: 64-color palette, ink strategies and the text color pair
//! - [`seed`]: Render seed and the deterministic random stream
//! - [`shapes`]: Seeded circle/line generator
//! - [`animations`]: Animation progress, ease-out curve and the animator
//! - [`clock`]: Wall time, tick timer and time text formatting
//! - [`styles`]: Time font and text alignment
//! - [`render`]: Painting the background canvas and the time band
//! - [`watchface`]: Tick controller owning all per-face state
//! - [`debug_log`]: Levelled ring buffer for diagnostic messages
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` (tests run on the host with std). It never allocates;
//! shapes are streamed from an iterator and text lives in `heapless` buffers.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p splatter-common
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod clock;
pub mod colors;
pub mod config;
pub mod debug_log;
pub mod palette;
pub mod render;
pub mod seed;
pub mod shapes;
pub mod styles;
pub mod watchface;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use animations::{AnimationState, Animator, Progress};
pub use clock::{Clock, TickTimer, TickUnit, WallTime};
pub use palette::{Color64, Ink, TextColors};
pub use seed::RenderSeed;
pub use watchface::Watchface;
