//! Entrance animation driving.
//!
//! After each tick the background "flies in": an [`Animator`] advances a
//! [`Progress`] value from [`Progress::MIN`] to [`Progress::MAX`] over a fixed
//! wall-clock duration, following an ease-out curve, and hands each value to
//! a callback which stores it and requests a redraw.
//!
//! # Lifecycle
//!
//! ```text
//!   Idle --start--> Running --progress reaches MAX--> Completed
//!                    |  ^                                |
//!                    +--+ start (supersedes)             +--start--> Running
//! ```
//!
//! The running animation is an owned [`Timeline`]. Completion drops it, a new
//! `start` replaces it, `cancel` drops it; there is never a second timeline
//! that could keep firing callbacks.
//!
//! # Timing
//!
//! Time is passed in as milliseconds from any monotonic host clock, so the
//! animation speed is independent of the host's frame rate.

// =============================================================================
// Progress
// =============================================================================

/// Normalized animation progress in 16-bit fixed point.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Progress(u16);

impl Progress {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(u16::MAX);

    #[inline]
    pub const fn new(raw: u16) -> Self { Self(raw) }

    #[inline]
    pub const fn raw(self) -> u16 { self.0 }

    /// Linear progress of `elapsed` through `duration`, clamped to MAX.
    pub const fn linear(
        elapsed_ms: u64,
        duration_ms: u32,
    ) -> Self {
        if duration_ms == 0 || elapsed_ms >= duration_ms as u64 {
            return Self::MAX;
        }
        Self((elapsed_ms * u16::MAX as u64 / duration_ms as u64) as u16)
    }

    /// Scale `value` by this progress: 0 at MIN, `value` itself at MAX.
    #[inline]
    pub const fn scale(
        self,
        value: i32,
    ) -> i32 {
        (value as i64 * self.0 as i64 / u16::MAX as i64) as i32
    }

    /// Scale `value` by the remaining fraction: `value` at MIN, 0 at MAX.
    #[inline]
    pub const fn remaining(
        self,
        value: i32,
    ) -> i32 {
        (value as i64 * (u16::MAX - self.0) as i64 / u16::MAX as i64) as i32
    }
}

// =============================================================================
// Easing
// =============================================================================

/// Cubic ease-out: `1 - (1 - t)^3`.
///
/// Fast start, gentle landing. Exact at both ends and monotonic, computed
/// in integer math. The cube rounds up, so MAX is only reached once `t`
/// itself is MAX.
pub const fn ease_out(t: Progress) -> Progress {
    let max = u16::MAX as u64;
    let inv = max - t.0 as u64;
    let cubed = (inv * inv * inv).div_ceil(max * max);
    Progress((max - cubed) as u16)
}

// =============================================================================
// Timeline
// =============================================================================

/// Identifies one `start` of the animator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct AnimationId(pub u32);

/// One running animation: start time and duration.
#[derive(Debug)]
pub struct Timeline {
    id: AnimationId,
    started_ms: u64,
    duration_ms: u32,
}

impl Timeline {
    pub const fn new(
        id: AnimationId,
        started_ms: u64,
        duration_ms: u32,
    ) -> Self {
        Self {
            id,
            started_ms,
            duration_ms,
        }
    }

    #[inline]
    pub const fn id(&self) -> AnimationId { self.id }

    /// Eased progress at `now_ms`. A clock reading earlier than the start
    /// counts as no time elapsed.
    pub const fn progress_at(
        &self,
        now_ms: u64,
    ) -> Progress {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        ease_out(Progress::linear(elapsed, self.duration_ms))
    }
}

// =============================================================================
// Animator
// =============================================================================

/// Animator state as seen after the latest call.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AnimationState {
    /// Never started, or cancelled.
    #[default]
    Idle,
    /// A timeline is active and will deliver more progress values.
    Running,
    /// The last timeline reached MAX and released itself.
    Completed,
}

/// Drives at most one [`Timeline`] at a time.
#[derive(Debug, Default)]
pub struct Animator {
    timeline: Option<Timeline>,
    state: AnimationState,
    next_id: u32,
}

impl Animator {
    pub const fn new() -> Self {
        Self {
            timeline: None,
            state: AnimationState::Idle,
            next_id: 0,
        }
    }

    /// Start a fresh animation, replacing any running one.
    ///
    /// A replaced timeline is dropped without completing: it delivers no
    /// further progress and never reports `Completed`.
    ///
    /// Returns the new animation's id and the id it superseded, if any.
    pub fn start(
        &mut self,
        now_ms: u64,
        duration_ms: u32,
    ) -> (AnimationId, Option<AnimationId>) {
        let id = AnimationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let superseded = self.timeline.replace(Timeline::new(id, now_ms, duration_ms)).map(|t| t.id());
        self.state = AnimationState::Running;
        (id, superseded)
    }

    /// Advance the running animation to `now_ms`.
    ///
    /// Calls `on_progress` once with the current eased progress when an
    /// animation is running. The frame that delivers MAX completes the
    /// animation and releases its timeline.
    pub fn frame<F>(
        &mut self,
        now_ms: u64,
        mut on_progress: F,
    ) -> AnimationState
    where
        F: FnMut(Progress),
    {
        let Some(timeline) = &self.timeline else {
            return self.state;
        };

        let progress = timeline.progress_at(now_ms);
        on_progress(progress);

        if progress == Progress::MAX {
            self.timeline = None;
            self.state = AnimationState::Completed;
        }
        self.state
    }

    /// Stop the running animation without completing it.
    ///
    /// Safe to call at any time; returns `true` only if something was running.
    pub fn cancel(&mut self) -> bool {
        let had = self.timeline.take().is_some();
        if had {
            self.state = AnimationState::Idle;
        }
        had
    }

    #[inline]
    pub const fn state(&self) -> AnimationState { self.state }

    #[inline]
    pub const fn is_running(&self) -> bool { self.timeline.is_some() }

    /// Id of the running animation.
    #[inline]
    pub fn current(&self) -> Option<AnimationId> { self.timeline.as_ref().map(Timeline::id) }
}

// =============================================================================
// Unit Tests
// =============================================================================
