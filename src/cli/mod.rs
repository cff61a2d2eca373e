//! CLI module for evaluar
//!
//! Command handlers, predictions-file loading, and output levels.

mod commands;
mod input;
mod logging;

pub use commands::run_command;
pub use input::PredictionSet;
pub use logging::LogLevel;

// Re-export Cli from config for convenience
pub use crate::config::Cli;
