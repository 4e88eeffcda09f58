//! Tick controller.
//!
//! [`Watchface`] owns all per-face state: the current render seed, the
//! animation progress, the animator, the time text and its colors. The host
//! calls into it from a single control thread:
//!
//! 1. [`Watchface::load`] once when the face is shown.
//! 2. [`Watchface::tick`] on every minute (or second) boundary.
//! 3. [`Watchface::frame`] on every animation frame; redraw when it returns `true`.
//! 4. [`Watchface::draw`] to paint.
//! 5. [`Watchface::unload`] when the face goes away (idempotent).
//!
//! A tick resets progress to MIN before restarting the animator, so the
//! first frame after a tick never shows a stale, half-finished layout.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, Size};
use heapless::String;

use crate::animations::{AnimationState, Animator, Progress};
use crate::clock::{Clock, TimeText, WallTime, format_time, placeholder_time};
use crate::config::ANIMATION_DURATION_MS;
use crate::debug_log::{DebugLog, LOG_LINE_LENGTH, LogLevel};
use crate::palette::{Ink, TextColors};
use crate::render::{Layout, draw_background, draw_time};
use crate::seed::RenderSeed;

pub struct Watchface {
    ink: Ink,
    layout: Layout,
    seed: RenderSeed,
    progress: Progress,
    animator: Animator,
    text: TimeText,
    text_colors: TextColors,
    log: DebugLog,
    loaded: bool,
    dirty: bool,
}

impl Watchface {
    /// Create the face for a screen of `size`, painting with `ink`.
    ///
    /// Until the first tick the time band shows `--:--` in the colors of the
    /// default seed.
    pub fn load(
        ink: Ink,
        size: Size,
    ) -> Self {
        let seed = RenderSeed::default();
        let mut log = DebugLog::new();
        log.push(LogLevel::Info, "Face loaded");
        Self {
            ink,
            layout: Layout::for_screen(size),
            seed,
            progress: Progress::MAX,
            animator: Animator::new(),
            text: placeholder_time(),
            text_colors: ink.text_colors(seed),
            log,
            loaded: true,
            dirty: true,
        }
    }

    /// Handle a tick using the host clock.
    pub fn tick<C: Clock>(
        &mut self,
        clock: &C,
        now_ms: u64,
    ) {
        self.on_tick(clock.now(), clock.is_24h_style(), now_ms);
    }

    /// Handle a tick at wall time `time`; `now_ms` is the host's monotonic
    /// clock used for animation timing.
    pub fn on_tick(
        &mut self,
        time: WallTime,
        is_24h: bool,
        now_ms: u64,
    ) {
        if !self.loaded {
            return;
        }

        self.seed = RenderSeed::from_unix_time(time.unix_seconds);
        self.progress = Progress::MIN;
        self.text_colors = self.ink.text_colors(self.seed);
        self.text = format_time(time.hour, time.minute, is_24h);
        self.dirty = true;

        let (id, superseded) = self.animator.start(now_ms, ANIMATION_DURATION_MS);

        let mut msg: String<LOG_LINE_LENGTH> = String::new();
        let _ = write!(msg, "Tick {} seed={}", self.text, self.seed.0);
        self.log.push(LogLevel::Info, &msg);

        if let Some(old) = superseded {
            msg.clear();
            let _ = write!(msg, "Anim {} superseded by {}", old.0, id.0);
            self.log.push(LogLevel::Debug, &msg);
        }
    }

    /// Advance the entrance animation to `now_ms`.
    ///
    /// Returns `true` when the face needs repainting.
    pub fn frame(
        &mut self,
        now_ms: u64,
    ) -> bool {
        let was_running = self.animator.is_running();
        let id = self.animator.current();

        let state = self.animator.frame(now_ms, |p| {
            self.progress = p;
            self.dirty = true;
        });

        if was_running
            && state == AnimationState::Completed
            && let Some(id) = id
        {
            let mut msg: String<LOG_LINE_LENGTH> = String::new();
            let _ = write!(msg, "Anim {} done", id.0);
            self.log.push(LogLevel::Debug, &msg);
        }

        self.dirty
    }

    /// Paint the whole face.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_background(display, self.layout.canvas, self.seed, self.progress, self.ink);
        draw_time(display, self.layout.time_band, &self.text, self.text_colors);
        self.dirty = false;
    }

    /// Tear down: stop the animation and ignore further ticks.
    ///
    /// Calling it again does nothing.
    pub fn unload(&mut self) {
        if !self.loaded {
            return;
        }
        self.animator.cancel();
        self.loaded = false;
        self.log.push(LogLevel::Info, "Face unloaded");
    }

    #[inline]
    pub const fn ink(&self) -> Ink { self.ink }

    #[inline]
    pub const fn layout(&self) -> Layout { self.layout }

    #[inline]
    pub const fn seed(&self) -> RenderSeed { self.seed }

    #[inline]
    pub const fn progress(&self) -> Progress { self.progress }

    #[inline]
    pub fn text(&self) -> &str { &self.text }

    #[inline]
    pub const fn text_colors(&self) -> TextColors { self.text_colors }

    #[inline]
    pub const fn animation_state(&self) -> AnimationState { self.animator.state() }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    #[inline]
    pub const fn is_loaded(&self) -> bool { self.loaded }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::{IntoStorage, Point};

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::testing::Framebuffer;

    const SCREEN: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    struct FixedClock {
        time: WallTime,
        is_24h: bool,
    }

    impl Clock for FixedClock {
        fn now(&self) -> WallTime { self.time }

        fn is_24h_style(&self) -> bool { self.is_24h }
    }

    fn one_pm(is_24h: bool) -> FixedClock {
        FixedClock {
            time: WallTime {
                unix_seconds: 1_700_053_500,
                hour: 13,
                minute: 5,
            },
            is_24h,
        }
    }

    fn run_to_completion(
        face: &mut Watchface,
        from_ms: u64,
    ) -> Vec<Progress> {
        let mut seen = Vec::new();
        for now in (from_ms..=from_ms + u64::from(ANIMATION_DURATION_MS) + 100).step_by(16) {
            if face.frame(now) {
                seen.push(face.progress());
            }
            if face.animation_state() == AnimationState::Completed {
                break;
            }
            let mut fb = Framebuffer::new(SCREEN);
            face.draw(&mut fb);
        }
        seen
    }

    // -------------------------------------------------------------------------
    // Load / Unload Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_load_shows_placeholder() {
        let face = Watchface::load(Ink::Color, SCREEN);
        assert!(face.is_loaded());
        assert_eq!(face.text(), "--:--");
        assert_eq!(face.seed(), RenderSeed(0));
        assert_eq!(face.text_colors(), Ink::Color.text_colors(RenderSeed(0)));
        assert_eq!(face.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn test_unload_idempotent() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(true), 0);
        face.unload();
        let entries = face.log().len();
        face.unload();
        assert!(!face.is_loaded());
        assert_eq!(face.log().len(), entries, "Second unload must be a no-op");
        assert_eq!(face.animation_state(), AnimationState::Idle);
    }

    #[test]
    fn test_tick_after_unload_ignored() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.unload();
        face.tick(&one_pm(true), 0);
        assert_eq!(face.text(), "--:--");
        assert_eq!(face.animation_state(), AnimationState::Idle);
    }

    // -------------------------------------------------------------------------
    // Tick Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_formats_24h() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(true), 0);
        assert_eq!(face.text(), "13:05");
    }

    #[test]
    fn test_tick_formats_12h() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(false), 0);
        assert_eq!(face.text(), "01:05");
    }

    #[test]
    fn test_tick_reseeds_and_recolors() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(true), 0);

        let seed = RenderSeed::from_unix_time(1_700_053_500);
        assert_eq!(face.seed(), seed);
        assert_eq!(face.text_colors(), Ink::Color.text_colors(seed));
        let colors = face.text_colors();
        assert_eq!(colors.foreground.into_storage(), !colors.background.into_storage());
    }

    #[test]
    fn test_tick_resets_progress_before_frames() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(true), 0);
        face.frame(500);
        assert!(face.progress() > Progress::MIN);

        face.tick(&one_pm(true), 600);
        assert_eq!(face.progress(), Progress::MIN, "Tick must reset progress immediately");
        assert_eq!(face.animation_state(), AnimationState::Running);
    }

    #[test]
    fn test_tick_logs_seed_and_supersede() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(true), 0);
        face.tick(&one_pm(true), 100);

        let messages: Vec<&str> = face.log().iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&"Tick 13:05 seed=1700053500"), "{messages:?}");
        assert!(messages.contains(&"Anim 0 superseded by 1"), "{messages:?}");
    }

    // -------------------------------------------------------------------------
    // Frame Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_frames_run_to_max() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(true), 1_000);

        let seen = run_to_completion(&mut face, 1_000);
        assert_eq!(seen.first(), Some(&Progress::MIN));
        assert_eq!(seen.last(), Some(&Progress::MAX));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(face.animation_state(), AnimationState::Completed);
        assert!(face.log().iter().any(|e| e.message.as_str() == "Anim 0 done"));
    }

    #[test]
    fn test_no_redraw_when_idle() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(true), 0);
        run_to_completion(&mut face, 0);
        let mut fb = Framebuffer::new(SCREEN);
        face.draw(&mut fb);

        assert!(!face.frame(5_000), "Completed animation requests no redraws");
    }

    #[test]
    fn test_load_requests_first_paint() {
        let mut face = Watchface::load(Ink::Monochrome, SCREEN);
        assert!(face.frame(0));
    }

    // -------------------------------------------------------------------------
    // Draw Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_paints_time_band() {
        let mut face = Watchface::load(Ink::Color, SCREEN);
        face.tick(&one_pm(true), 0);
        run_to_completion(&mut face, 0);

        let mut fb = Framebuffer::new(SCREEN);
        face.draw(&mut fb);

        let band = face.layout().time_band;
        assert_eq!(fb.get(band.top_left), Some(face.text_colors().background));
        assert_eq!(fb.get(Point::new(0, SCREEN_HEIGHT as i32 - 1)), Some(face.text_colors().background));
    }
}
