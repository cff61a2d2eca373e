//! Logging utilities for CLI output

/// Log level for CLI output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress everything except the requested result and errors
    Quiet,
    /// Progress lines plus the result
    Normal,
    /// Adds input and configuration details
    Verbose,
}

impl LogLevel {
    /// Pick a level from the global `--quiet`/`--verbose` flags; quiet wins
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    fn permits(self, required: LogLevel) -> bool {
        self != LogLevel::Quiet && (self == required || required == LogLevel::Normal)
    }
}

/// Log a message to stderr if the current level permits it
///
/// Results go to stdout, so piping `--format json` output stays clean.
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        eprintln!("{msg}");
    }
}
