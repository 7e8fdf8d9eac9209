//! Logging infrastructure for the k8stk library.
//!
//! Diagnostics go to stderr so that a serialized document written to stdout
//! stays clean and can be redirected straight into a file.

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use k8stk::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing is logged.
    Quiet,
    /// Warnings, including collision notices.
    Normal,
    /// Warnings and informational messages.
    Verbose,
}

/// A stderr logger filtered by [`LogLevel`].
///
/// # Examples
///
/// ```
/// use k8stk::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("Found a duplicate cluster name");
/// logger.info("not printed at Normal");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true if messages at `level` would be printed.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level >= level
    }

    /// Logs a warning message, shown at Normal and Verbose.
    pub fn warn(&self, message: &str) {
        if self.enabled(LogLevel::Normal) {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message, shown at Verbose only.
    pub fn info(&self, message: &str) {
        if self.enabled(LogLevel::Verbose) {
            eprintln!("INFO: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger from the CLI verbosity flags.
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use k8stk::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        Logger::new(LogLevel::Verbose)
    } else if quiet {
        Logger::new(LogLevel::Quiet)
    } else {
        Logger::new(LogLevel::Normal)
    }
}
