use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use derive_more::Display;
use strum::EnumString;

/// Severity, parsed case-insensitively from config (`warn`, `DEBUG`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer and unit a log line comes from
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self { timestamp: get_time_provider().current_timestamp(), level, component, message: message.into() }
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for log entries. Level filtering is up to the implementation.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);
}

/// Entries kept while no logger is installed. Oldest are dropped first.
pub const STARTUP_BUFFER_LIMIT: usize = 64;

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();
static STARTUP_BUFFER: Mutex<Vec<LogEntry>> = Mutex::new(Vec::new());

/// Install the process logger and replay everything emitted before it.
/// Returns `false` if a logger was already installed.
pub fn init_logger(logger: Box<dyn Logger>) -> bool {
    if GLOBAL_LOGGER.set(logger).is_err() {
        return false;
    }
    let early = std::mem::take(&mut *startup_buffer());
    if let Some(logger) = GLOBAL_LOGGER.get() {
        early.into_iter().for_each(|entry| logger.log(entry));
    }
    true
}

/// Only the first call wins.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER.get().map(|provider| provider.as_ref()).unwrap_or(&CounterTimeProvider)
}

/// Route one entry to the installed logger, or hold it until there is one.
pub fn emit(level: LogLevel, component: LogComponent, message: String) {
    let entry = LogEntry::new(level, component, message);
    match GLOBAL_LOGGER.get() {
        Some(logger) => logger.log(entry),
        None => push_bounded(&mut startup_buffer(), entry),
    }
}

fn startup_buffer() -> MutexGuard<'static, Vec<LogEntry>> {
    STARTUP_BUFFER.lock().unwrap_or_else(PoisonError::into_inner)
}

fn push_bounded(buffer: &mut Vec<LogEntry>, entry: LogEntry) {
    if buffer.len() >= STARTUP_BUFFER_LIMIT {
        buffer.remove(0);
    }
    buffer.push(entry);
}

/// Monotonic counter used until a real clock is installed (and in native tests)
struct CounterTimeProvider;

impl TimeProvider for CounterTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{timestamp:06}")
    }
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Error, $component, format!($($arg)*))
    };
}
