/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use log::debug;

use crate::backend::LogBackendBuilder;
use crate::{LogError, LogRouter, LoggingLevel, Priority};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub(crate) level: Option<LoggingLevel>,
    pub(crate) priority: Option<Priority>,
    pub(crate) extended_info: bool,
    pub(crate) low_priority: LogBackendBuilder,
    pub(crate) high_priority: LogBackendBuilder,
    pub(crate) trace: Option<LogBackendBuilder>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: None,
            priority: None,
            extended_info: false,
            low_priority: LogBackendBuilder::Stdout,
            high_priority: LogBackendBuilder::Stderr,
            trace: None,
        }
    }
}

impl LogConfig {
    pub fn with_level(level: LoggingLevel) -> Self {
        LogConfig {
            level: Some(level),
            ..Default::default()
        }
    }

    pub fn set_level(&mut self, level: LoggingLevel) {
        self.level = Some(level);
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
    }

    pub fn set_extended_info(&mut self, enable: bool) {
        self.extended_info = enable;
    }

    pub fn set_low_priority_backend(&mut self, builder: LogBackendBuilder) {
        self.low_priority = builder;
    }

    pub fn set_high_priority_backend(&mut self, builder: LogBackendBuilder) {
        self.high_priority = builder;
    }

    pub fn set_trace_backend(&mut self, builder: Option<LogBackendBuilder>) {
        self.trace = builder;
    }

    /// The explicit priority wins over the logging level.
    pub fn threshold(&self) -> Option<Priority> {
        self.priority.or_else(|| self.level.map(|l| l.threshold()))
    }

    /// Open all configured backends, then install them into the router.
    ///
    /// The router is left untouched if any backend fails to open.
    pub fn apply(&self, router: &LogRouter) -> Result<(), LogError> {
        let low = self.low_priority.build()?;
        let high = self.high_priority.build()?;
        let trace = match &self.trace {
            Some(builder) => Some(builder.build()?),
            None => None,
        };

        router.reset_backends(low, high);
        router.reset_trace_backend(trace);
        if let Some(threshold) = self.threshold() {
            router.set_threshold(threshold);
        }
        router.set_extended_info(self.extended_info);
        debug!(
            "log config applied: low={} high={} trace={}",
            self.low_priority.name(),
            self.high_priority.name(),
            self.trace.as_ref().map(|b| b.name()).unwrap_or_default()
        );
        Ok(())
    }
}
