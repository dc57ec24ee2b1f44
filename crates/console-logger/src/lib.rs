//! Console Logger
//!
//! `log` backend for the browser: each record goes to the devtools console
//! at the matching level and into a circular buffer of recent lines that the
//! app can read back. Off wasm32 the lines go to stderr instead.

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-capacity line buffer, oldest lines dropped first
#[derive(Debug, Clone)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the logger; fails if any logger is already set
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Lines currently held in the buffer, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|buffer| buffer.lines()))
        .unwrap_or_default()
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    LevelFilter::from_str(name.trim()).unwrap_or(LevelFilter::Info)
}

pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{timestamp}] {level:<5} {target}: {message}")
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}
