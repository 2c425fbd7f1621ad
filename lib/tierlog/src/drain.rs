/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt::Write;
use std::sync::Arc;

use slog::{Drain, Level, OwnedKVList, Record};

use crate::{LogError, LogRouter, Priority, SourceLocation};

pub fn priority_of_level(level: Level) -> Priority {
    match level {
        Level::Critical => Priority::Critical,
        Level::Error => Priority::Error,
        Level::Warning => Priority::Warning,
        Level::Info => Priority::Info,
        Level::Debug => Priority::Debug,
        Level::Trace => Priority::Resources,
    }
}

/// A slog drain writing the record message into a [`LogRouter`].
///
/// Key value pairs are not rendered.
pub struct RouterDrain {
    router: Arc<LogRouter>,
}

impl RouterDrain {
    pub fn new(router: Arc<LogRouter>) -> Self {
        RouterDrain { router }
    }
}

impl Drain for RouterDrain {
    type Ok = ();
    type Err = LogError;

    fn log(&self, record: &Record, _logger_values: &OwnedKVList) -> Result<(), LogError> {
        let priority = priority_of_level(record.level());
        if !self.router.would_output(priority) {
            return Ok(());
        }

        let tag = if record.tag().is_empty() {
            record.module()
        } else {
            record.tag()
        };
        let location = SourceLocation::new(record.file(), record.line());
        let mut entry = self.router.entry_at(location, tag, priority);
        let _ = entry.write_fmt(*record.msg());
        let _ = entry.write_char('\n');
        entry.finalize()
    }

    fn is_enabled(&self, level: Level) -> bool {
        self.router.would_output(priority_of_level(level))
    }
}
