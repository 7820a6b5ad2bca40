//! Stderr logging for the canopath library and CLI.
//!
//! The library never prints. Operations that swallow an OS error report it
//! through the `log` facade at debug level, and [`Logger::install`] routes
//! those records to stderr according to a [`LogLevel`].

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "CANOPATH_LOG_MODE";

/// How much the [`Logger`] prints, from least to most.
///
/// ```
/// use canopath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Print nothing.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including library diagnostics.
    Verbose,
}

impl LogLevel {
    const NAMES: [(&'static str, Self); 3] = [
        ("quiet", Self::Quiet),
        ("normal", Self::Normal),
        ("verbose", Self::Verbose),
    ];

    /// Lowercase name, as accepted by [`LogLevel::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }

    /// Parse a level name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the input if it is not a level name.
    ///
    /// ```
    /// use canopath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("Verbose"), Ok(LogLevel::Verbose));
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, level)| level)
            .ok_or_else(|| format!("unknown log mode '{s}' (expected quiet, normal or verbose)"))
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes tagged lines to stderr, filtered by a [`LogLevel`].
///
/// # Examples
///
/// ```
/// use canopath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.info("This will not be printed (requires Verbose)");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// ```
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, threshold: LogLevel, tag: &str, message: &str) {
        if self.level >= threshold {
            eprintln!("{tag}: {message}");
        }
    }

    /// Logs an error message unless the level is Quiet.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Logs a warning message unless the level is Quiet.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message at Verbose level.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message at Verbose level.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopath::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// logger.debug("Listing /tmp/assets");
    /// ```
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Logger {
    /// The most verbose `log` level this logger lets through.
    #[must_use]
    pub const fn max_level(&self) -> log::LevelFilter {
        match self.level {
            LogLevel::Quiet => log::LevelFilter::Off,
            LogLevel::Normal => log::LevelFilter::Warn,
            LogLevel::Verbose => log::LevelFilter::Debug,
        }
    }

    /// Register this logger as the backend of the `log` facade.
    ///
    /// Library diagnostics (for example why `mkdir_recursive` returned
    /// `false`) are emitted at debug level, so they only show up when the
    /// logger is `Verbose`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let max_level = self.max_level();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            log::Level::Error => self.error(&message),
            log::Level::Warn => self.warn(&message),
            log::Level::Info => self.info(&message),
            log::Level::Debug | log::Level::Trace => self.debug(&message),
        }
    }

    fn flush(&self) {}
}

/// Pick the logger level for a CLI invocation.
///
/// `verbose` beats `quiet`, and either flag beats the `CANOPATH_LOG_MODE`
/// variable. An unset or unparseable variable means [`LogLevel::Normal`].
///
/// ```
/// use canopath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = match (verbose, quiet) {
        (true, _) => LogLevel::Verbose,
        (false, true) => LogLevel::Quiet,
        (false, false) => env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or(LogLevel::Normal),
    };
    Logger::new(level)
}
