//! Splatter watchface simulator for desktop.
//!
//! Plays the part of the watch's host platform: an SDL2 window as the
//! drawing surface, the system clock, the tick service and the animation
//! frame scheduler. All watchface logic lives in `splatter-common`.
//!
//! Features:
//! - `monochrome`: paint with the black/white ink
//! - `twelve-hour`: 12-hour time
//! - `debug-ticks`: refresh every second instead of every minute

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

mod clock;
mod profiling;
mod timing;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use splatter_common::colors::BLACK;
use splatter_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_UNIT};
use splatter_common::debug_log::DebugLog;
use splatter_common::{AnimationState, Clock, Ink, TickTimer, Watchface};

use crate::clock::HostClock;
use crate::profiling::ProfilingMetrics;
use crate::timing::FRAME_TIME;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Splatter", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let ink = if cfg!(feature = "monochrome") { Ink::Monochrome } else { Ink::Color };
    let clock = HostClock::new(!cfg!(feature = "twelve-hour"));
    let mut ticks = TickTimer::new(TICK_UNIT);
    let mut face = Watchface::load(ink, display.size());

    let boot = Instant::now();
    let mut metrics = ProfilingMetrics::new();
    let mut log_cursor = 0u32;
    let mut prev_state = face.animation_state();

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                break 'running;
            }
        }

        let now_ms = boot.elapsed().as_millis() as u64;
        let wall = clock.now();
        if ticks.poll(&wall) {
            face.on_tick(wall, clock.is_24h_style(), now_ms);
        }

        let render_time = if face.frame(now_ms) {
            let render_start = Instant::now();
            face.draw(&mut display);
            Some(render_start.elapsed())
        } else {
            None
        };

        let state = face.animation_state();
        if prev_state == AnimationState::Running && state == AnimationState::Completed {
            println!("[P] {}", metrics.finish_animation());
        }
        prev_state = state;

        log_cursor = drain_log(face.log(), log_cursor);

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(rest) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(rest);
        }
        metrics.record_frame(frame_start.elapsed(), render_time);
    }

    face.unload();
    drain_log(face.log(), log_cursor);
    println!(
        "[P] {} frames, avg {}us (min {}us, max {}us), {} redraws, {} animations",
        metrics.total_frames,
        metrics.frame_time_avg_us(),
        metrics.frame_time_min_us,
        metrics.frame_time_max_us,
        metrics.redraws,
        metrics.animations
    );
}

/// Print log entries from `cursor` on; returns the new cursor.
fn drain_log(
    log: &DebugLog,
    cursor: u32,
) -> u32 {
    for entry in log.since(cursor) {
        println!("[{}] {}", entry.level.prefix(), entry.message);
    }
    log.next_seq()
}
