//! Internal logging system for the Lumen pipeline.
//!
//! Provides:
//! - Customizable logger via the `Logger` trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Thread-safe global logger behind an RwLock
//! - File and line information for ERROR logs

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use colored::Colorize;

/// Logger trait for custom logging implementations
///
/// Implement this trait to create custom loggers (file logging, test capture, etc.)
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "lumen::Target", "lumen::BlurStage")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (typically disabled in release)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message);
        }
    }
}

// ===== GLOBAL LOGGER =====

static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Replace the global logger with a custom implementation
pub fn set_logger<L: Logger + 'static>(new_logger: L) {
    if let Ok(mut lock) = logger().write() {
        *lock = Box::new(new_logger);
    }
}

/// Reset the global logger to [`DefaultLogger`]
pub fn reset_logger() {
    if let Ok(mut lock) = logger().write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Dispatch a simple log entry (no file:line). Used by the logging macros.
pub fn log(severity: LogSeverity, source: &str, message: String) {
    if let Ok(lock) = logger().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Dispatch a log entry with file:line information. Used by `render_error!`.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if let Ok(lock) = logger().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
#[macro_export]
macro_rules! render_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Trace, $source, format!($($arg)*))
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! render_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Debug, $source, format!($($arg)*))
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! render_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Info, $source, format!($($arg)*))
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! render_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Warn, $source, format!($($arg)*))
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! render_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!(),
        )
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
