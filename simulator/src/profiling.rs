//! Frame timing and redraw statistics.
//!
//! Lives in the simulator because it needs `std::time`. A summary line is
//! printed after every finished entrance animation.

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

/// Frame timing and render statistics.
pub struct ProfilingMetrics {
    // Frame timing statistics (microseconds)
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,
    render_time_max_us: u32,

    // Counters
    pub total_frames: u64,
    pub redraws: u32,
    pub animations: u32,

    // Redraws during the current animation run
    run_redraws: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            render_time_max_us: 0,
            total_frames: 0,
            redraws: 0,
            animations: 0,
            run_redraws: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one loop iteration.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Option<Duration>,
    ) {
        let total_us = total_time.as_micros() as u32;
        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        if let Some(render_time) = render_time {
            let render_us = render_time.as_micros() as u32;
            self.render_time_max_us = self.render_time_max_us.max(render_us);
            self.redraws += 1;
            self.run_redraws += 1;
        }

        self.total_frames += 1;
    }

    /// Close the current animation run and describe it.
    pub fn finish_animation(&mut self) -> String<64> {
        self.animations += 1;
        let mut s = String::new();
        let _ = write!(
            s,
            "Run {}: {} redraws, render max {}us, up {}",
            self.animations,
            self.run_redraws,
            self.render_time_max_us,
            self.uptime_string()
        );
        self.run_redraws = 0;
        self.render_time_max_us = 0;
        s
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as HH:MM:SS.
    pub fn uptime_string(&self) -> String<12> {
        let secs = self.uptime().as_secs();
        let mut s = String::new();
        let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
        s
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}
