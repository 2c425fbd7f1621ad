/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

//! Dual-tier line logger.
//!
//! Each log statement builds a [`LogEntry`] which is flushed to a
//! [`LogRouter`] when it goes out of scope. The router writes entries at or
//! above [`Priority::Warning`] to the high priority channel and the others to
//! the low priority channel, as long as they pass the router threshold. An
//! optional trace channel gets every entry, fully decorated.

#[macro_use]
mod macros;

mod backend;
pub use backend::{
    BoxLogBackend, ConsoleBackend, ConsoleTarget, FileBackend, FuncBackend, LogBackend,
    LogBackendBuilder, NullBackend,
};

mod bridge;
pub use bridge::{LogBridge, sync_max_level};

mod channel;

mod config;
pub use config::LogConfig;

mod entry;
pub use entry::{LogEntry, SourceLocation};

mod error;
pub use error::{ChannelKind, LogError};

pub mod format;

mod guard;
pub use guard::ThresholdGuard;

mod router;
pub use router::LogRouter;

pub mod settings;
pub use settings::LogSettings;

pub mod stats;

mod types;
pub use types::{LoggingLevel, Priority};

#[cfg(feature = "slog")]
mod drain;
#[cfg(feature = "slog")]
pub use drain::RouterDrain;

#[cfg(feature = "yaml")]
mod yaml;

/// Send all low and high priority output to the given functions.
///
/// See [`LogRouter::install_custom_functions`] for logging from inside them.
pub fn install_custom_logging_functions<L, H>(low: L, high: H) -> Result<(), LogError>
where
    L: FnMut(&[u8]) + Send + 'static,
    H: FnMut(&[u8]) + Send + 'static,
{
    let settings = settings::require()?;
    settings.router().install_custom_functions(low, high);
    Ok(())
}

/// Go back to stdout and stderr for the low and high priority output.
pub fn restore_default_logging() -> Result<(), LogError> {
    let settings = settings::require()?;
    settings.router().restore_default_backends();
    Ok(())
}

/// Open the named backend as trace channel, an empty name disables tracing.
pub fn install_trace_backend(name: &str) -> Result<(), LogError> {
    let settings = settings::require()?;
    settings.router().install_trace_backend(name)
}

pub fn set_logging_level(level: LoggingLevel) -> Result<(), LogError> {
    let settings = settings::require()?;
    settings.router().set_logging_level(level);
    Ok(())
}

pub fn set_extended_info(enable: bool) -> Result<(), LogError> {
    let settings = settings::require()?;
    settings.router().set_extended_info(enable);
    Ok(())
}
