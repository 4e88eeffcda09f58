//! Levelled debug log ring buffer.
//!
//! The core has no logger to talk to, so diagnostic messages go into a small
//! fixed-capacity buffer. The host drains it (e.g. the simulator prints new
//! entries to stdout) using the entry sequence numbers.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push(LogLevel::Info, "Face loaded");
//!
//! for entry in log.since(last_seen) {
//!     println!("{} {}", entry.level.prefix(), entry.message);
//! }
//! ```

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of entries kept in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Log Entries
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    #[allow(dead_code)]
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    #[allow(dead_code)]
    Warn = 3,
    #[allow(dead_code)]
    Error = 4,
}

impl LogLevel {
    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// One log line.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Position in the overall stream of pushed entries, starting at 0.
    pub seq: u32,
    pub level: LogLevel,
    /// Message, truncated to `LOG_LINE_LENGTH - 1` characters.
    pub message: String<LOG_LINE_LENGTH>,
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer holding the last `LOG_BUFFER_SIZE` entries.
pub struct DebugLog {
    buffer: Deque<LogEntry, LOG_BUFFER_SIZE>,
    next_seq: u32,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            next_seq: 0,
        }
    }

    /// Push a message. If the buffer is full, the oldest entry is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut message: String<LOG_LINE_LENGTH> = String::new();
        for (i, c) in msg.chars().enumerate() {
            if i >= LOG_LINE_LENGTH - 1 {
                break;
            }
            message.push(c).ok();
        }

        let entry = LogEntry {
            seq: self.next_seq,
            level,
            message,
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        self.buffer.push_back(entry).ok();
    }

    /// Iterate over buffered entries (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.buffer.iter() }

    /// Buffered entries with `seq >= first`. Entries already pushed out of
    /// the ring are gone.
    pub fn since(
        &self,
        first: u32,
    ) -> impl Iterator<Item = &LogEntry> {
        self.buffer.iter().filter(move |e| e.seq >= first)
    }

    /// Sequence number the next pushed entry will get.
    #[inline]
    pub const fn next_seq(&self) -> u32 { self.next_seq }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
