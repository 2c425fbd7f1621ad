/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use arc_swap::{ArcSwap, ArcSwapOption};
use log::debug;

use crate::backend::{
    BoxLogBackend, ConsoleBackend, ConsoleTarget, FuncBackend, LogBackendBuilder,
};
use crate::channel::Channel;
use crate::stats::LogStats;
use crate::{
    ChannelKind, LogEntry, LogError, LoggingLevel, Priority, SourceLocation, ThresholdGuard,
};

const DEFAULT_THRESHOLD: Priority = Priority::Notice;

/// The low and high priority channels, always swapped as one unit.
struct PriorityChannels {
    low: Channel,
    high: Channel,
}

impl PriorityChannels {
    fn new(low: BoxLogBackend, high: BoxLogBackend) -> Self {
        PriorityChannels {
            low: Channel::new(ChannelKind::LowPriority, low),
            high: Channel::new(ChannelKind::HighPriority, high),
        }
    }

    fn default_console() -> Self {
        PriorityChannels::new(
            Box::new(ConsoleBackend::new(ConsoleTarget::Stdout)),
            Box::new(ConsoleBackend::new(ConsoleTarget::Stderr)),
        )
    }
}

/// Routes finished log entries to the low priority, high priority and trace
/// channels.
///
/// Every channel backend sits behind an atomic pointer. A write loads the
/// pointer once and completes on that backend even if it is replaced
/// concurrently, the replaced backend is dropped after its last writer is done.
pub struct LogRouter {
    priority: ArcSwap<PriorityChannels>,
    trace: ArcSwapOption<Channel>,
    threshold: AtomicU8,
    extended_info: AtomicBool,
    stats: LogStats,
}

impl Default for LogRouter {
    fn default() -> Self {
        LogRouter::new()
    }
}

impl LogRouter {
    /// Create a router writing to stdout and stderr, without trace channel.
    pub fn new() -> Self {
        LogRouter::with_channels(PriorityChannels::default_console())
    }

    pub fn with_backends(low: BoxLogBackend, high: BoxLogBackend) -> Self {
        LogRouter::with_channels(PriorityChannels::new(low, high))
    }

    fn with_channels(channels: PriorityChannels) -> Self {
        LogRouter {
            priority: ArcSwap::from_pointee(channels),
            trace: ArcSwapOption::empty(),
            threshold: AtomicU8::new(DEFAULT_THRESHOLD.as_u8()),
            extended_info: AtomicBool::new(false),
            stats: LogStats::default(),
        }
    }

    pub fn threshold(&self) -> Priority {
        Priority::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or(DEFAULT_THRESHOLD)
    }

    pub fn set_threshold(&self, priority: Priority) {
        self.threshold.store(priority.as_u8(), Ordering::Relaxed);
    }

    pub fn set_logging_level(&self, level: LoggingLevel) {
        self.set_threshold(level.threshold());
    }

    /// Set the threshold until the returned guard is dropped.
    pub fn scoped_threshold(&self, priority: Priority) -> ThresholdGuard<'_> {
        let previous = self.threshold();
        self.set_threshold(priority);
        ThresholdGuard::new(self, previous)
    }

    pub fn extended_info(&self) -> bool {
        self.extended_info.load(Ordering::Relaxed)
    }

    pub fn set_extended_info(&self, enable: bool) {
        self.extended_info.store(enable, Ordering::Relaxed);
    }

    pub fn has_trace(&self) -> bool {
        self.trace.load().is_some()
    }

    /// Whether an entry with this priority would reach any channel.
    pub fn would_output(&self, priority: Priority) -> bool {
        self.threshold().admits(priority) || self.has_trace()
    }

    pub fn stats(&self) -> &LogStats {
        &self.stats
    }

    #[track_caller]
    pub fn entry(&self, tag: &str, priority: Priority) -> LogEntry<'_> {
        LogEntry::new(self, SourceLocation::caller(), tag, priority)
    }

    pub fn entry_at(&self, location: SourceLocation, tag: &str, priority: Priority) -> LogEntry<'_> {
        LogEntry::new(self, location, tag, priority)
    }

    /// Deliver a finished entry.
    ///
    /// The priority channels get the message, with the decoration only if
    /// extended info is enabled right now. The trace channel, if installed,
    /// always gets the whole buffer, whatever the threshold.
    pub fn output(&self, entry: &LogEntry<'_>) -> Result<(), LogError> {
        let data = entry.data();
        if data.is_empty() {
            return Ok(());
        }

        let priority = entry.priority();
        if self.threshold().admits(priority) {
            let regular_offset = if self.extended_info() {
                0
            } else {
                entry.regular_offset()
            };
            let message = &data[regular_offset..];
            let channels = self.priority.load_full();
            if priority.is_high() {
                channels.high.write(message, &self.stats)?;
            } else {
                channels.low.write(message, &self.stats)?;
            }
        } else {
            self.stats.add_filtered();
        }

        if let Some(trace) = self.trace.load_full() {
            trace.write(data, &self.stats)?;
        }
        Ok(())
    }

    /// Replace both priority backends at once.
    pub fn reset_backends(&self, low: BoxLogBackend, high: BoxLogBackend) {
        self.priority
            .store(Arc::new(PriorityChannels::new(low, high)));
        debug!("priority log backends replaced");
    }

    /// Install a trace backend, or remove the current one with `None`.
    pub fn reset_trace_backend(&self, backend: Option<BoxLogBackend>) {
        match backend {
            Some(backend) => {
                self.trace
                    .store(Some(Arc::new(Channel::new(ChannelKind::Trace, backend))));
                debug!("trace log backend installed");
            }
            None => {
                if self.trace.swap(None).is_some() {
                    debug!("trace log backend removed");
                }
            }
        }
    }

    /// Send the low and high priority output to caller functions.
    ///
    /// A function may log through this router again, but only entries routed
    /// to a different channel get through. Nested writes to the channel that
    /// is calling the function fail with [`LogError::Reentrant`].
    pub fn install_custom_functions<L, H>(&self, low: L, high: H)
    where
        L: FnMut(&[u8]) + Send + 'static,
        H: FnMut(&[u8]) + Send + 'static,
    {
        self.reset_backends(
            Box::new(FuncBackend::new(low)),
            Box::new(FuncBackend::new(high)),
        );
    }

    pub fn restore_default_backends(&self) {
        self.priority
            .store(Arc::new(PriorityChannels::default_console()));
        debug!("default console log backends restored");
    }

    /// Open the backend with this designator as trace channel, an empty name
    /// disables tracing.
    pub fn install_trace_backend(&self, name: &str) -> Result<(), LogError> {
        let backend = match LogBackendBuilder::from_name(name) {
            Some(builder) => Some(builder.build()?),
            None => None,
        };
        self.reset_trace_backend(backend);
        Ok(())
    }

    /// Reopen all installed backends, the first failure is returned.
    pub fn reopen(&self) -> Result<(), LogError> {
        let channels = self.priority.load_full();
        let mut r = channels.low.reopen();
        if let Err(e) = channels.high.reopen() {
            r = r.and(Err(e));
        }
        if let Some(trace) = self.trace.load_full() {
            if let Err(e) = trace.reopen() {
                r = r.and(Err(e));
            }
        }
        r
    }
}
