//! Lightweight logging for the emulator core.
//!
//! Levels are stored per category in atomics, so a disabled category costs
//! one relaxed load and the message closure is never invoked. Messages go
//! to stderr; the core performs no file I/O of its own.
//!
//! # Usage
//!
//! ```rust
//! use dmg_core::logging::{log, LogCategory, LogLevel};
//!
//! // Lazy evaluation: the closure only runs when the level is enabled
//! log(LogCategory::Cpu, LogLevel::Trace, || {
//!     format!("{:04X}: NOP", 0x0100)
//! });
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

/// Log level for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Parse log level from string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Some(LogLevel::Off),
            "error" | "err" | "1" => Some(LogLevel::Error),
            "warn" | "warning" | "2" => Some(LogLevel::Warn),
            "info" | "3" => Some(LogLevel::Info),
            "debug" | "4" => Some(LogLevel::Debug),
            "trace" | "5" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    fn from_u8(val: u8) -> Self {
        match val {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Off,
        }
    }
}

/// Log category for different emulator components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum LogCategory {
    /// CPU execution (instruction tracing, illegal opcodes)
    Cpu = 0,
    /// Bus/memory access
    Bus = 1,
    /// Interrupt requests and dispatch
    Interrupts = 2,
}

impl LogCategory {
    fn label(self) -> &'static str {
        match self {
            LogCategory::Cpu => "CPU",
            LogCategory::Bus => "BUS",
            LogCategory::Interrupts => "INT",
        }
    }
}

const CATEGORY_COUNT: usize = 3;

static LEVELS: [AtomicU8; CATEGORY_COUNT] =
    [AtomicU8::new(0), AtomicU8::new(0), AtomicU8::new(0)];

/// Set the enabled level for one category.
pub fn set_level(category: LogCategory, level: LogLevel) {
    LEVELS[category as usize].store(level as u8, Ordering::Relaxed);
}

/// Set the enabled level for every category at once.
pub fn set_global_level(level: LogLevel) {
    for slot in &LEVELS {
        slot.store(level as u8, Ordering::Relaxed);
    }
}

/// Current enabled level for a category.
pub fn level(category: LogCategory) -> LogLevel {
    LogLevel::from_u8(LEVELS[category as usize].load(Ordering::Relaxed))
}

/// Whether a message at `level` would be emitted for `category`.
#[inline]
pub fn enabled(category: LogCategory, level: LogLevel) -> bool {
    level != LogLevel::Off
        && level as u8 <= LEVELS[category as usize].load(Ordering::Relaxed)
}

/// Log a message. The closure is only invoked when the category's level
/// admits it, so callers can format freely without a hot-path cost.
#[inline]
pub fn log<F: FnOnce() -> String>(category: LogCategory, level: LogLevel, msg: F) {
    if enabled(category, level) {
        eprintln!("[{}] {}", category.label(), msg());
    }
}
