/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt::Write;
use std::sync::Arc;

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::{LogRouter, Priority, SourceLocation};

const UNKNOWN_FILE: &str = "<unknown>";

pub fn priority_of_level(level: Level) -> Priority {
    match level {
        Level::Error => Priority::Error,
        Level::Warn => Priority::Warning,
        Level::Info => Priority::Info,
        Level::Debug => Priority::Debug,
        Level::Trace => Priority::Resources,
    }
}

fn level_filter_of(router: &LogRouter) -> LevelFilter {
    if router.has_trace() {
        return LevelFilter::Trace;
    }
    match router.threshold() {
        Priority::Emergency | Priority::Alert | Priority::Critical | Priority::Error => {
            LevelFilter::Error
        }
        Priority::Warning | Priority::Notice => LevelFilter::Warn,
        Priority::Info => LevelFilter::Info,
        Priority::Debug => LevelFilter::Debug,
        Priority::Resources => LevelFilter::Trace,
    }
}

/// Forwards records of the `log` facade into a [`LogRouter`].
///
/// The record target is used as entry tag.
pub struct LogBridge {
    router: Arc<LogRouter>,
}

impl LogBridge {
    pub fn new(router: Arc<LogRouter>) -> Self {
        LogBridge { router }
    }

    /// Install as the global `log` logger.
    ///
    /// The `log` max level is derived from the router state at this point,
    /// call [`sync_max_level`] after changing the router threshold or trace.
    ///
    /// Records emitted by a custom backend function while it is writing are
    /// dropped if they route back to the same channel.
    pub fn install(router: Arc<LogRouter>) -> Result<(), SetLoggerError> {
        let max_level = level_filter_of(&router);
        log::set_boxed_logger(Box::new(LogBridge::new(router)))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

pub fn sync_max_level(router: &LogRouter) {
    log::set_max_level(level_filter_of(router));
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.router
            .would_output(priority_of_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        let priority = priority_of_level(record.level());
        if !self.router.would_output(priority) {
            return;
        }
        let location = SourceLocation::new(
            record.file_static().unwrap_or(UNKNOWN_FILE),
            record.line().unwrap_or_default(),
        );
        let mut entry = self.router.entry_at(location, record.target(), priority);
        let _ = entry.write_fmt(*record.args());
        let _ = entry.write_char('\n');
    }

    fn flush(&self) {}
}
