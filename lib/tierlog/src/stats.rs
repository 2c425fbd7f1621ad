/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ChannelKind;

#[derive(Default, Debug, Eq, PartialEq)]
pub struct LogSnapshot {
    pub low: ChannelSnapshot,
    pub high: ChannelSnapshot,
    pub trace: ChannelSnapshot,
    pub filtered: u64,
}

#[derive(Default, Debug, Eq, PartialEq)]
pub struct ChannelSnapshot {
    pub passed: u64,
    pub size: u64,
    pub failed: u64,
}

#[derive(Default)]
pub struct LogStats {
    low: ChannelStats,
    high: ChannelStats,
    trace: ChannelStats,
    filtered: AtomicU64,
}

impl LogStats {
    pub fn snapshot(&self) -> LogSnapshot {
        LogSnapshot {
            low: self.low.snapshot(),
            high: self.high.snapshot(),
            trace: self.trace.snapshot(),
            filtered: self.filtered.load(Ordering::Relaxed),
        }
    }

    pub fn channel(&self, kind: ChannelKind) -> &ChannelStats {
        match kind {
            ChannelKind::LowPriority => &self.low,
            ChannelKind::HighPriority => &self.high,
            ChannelKind::Trace => &self.trace,
        }
    }

    pub(crate) fn add_filtered(&self) {
        self.filtered.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Default)]
pub struct ChannelStats {
    passed: AtomicU64,
    size: AtomicU64,
    failed: AtomicU64,
}

impl ChannelStats {
    pub fn snapshot(&self) -> ChannelSnapshot {
        ChannelSnapshot {
            passed: self.passed.load(Ordering::Relaxed),
            size: self.size.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn add_passed(&self, size: usize) {
        self.passed.fetch_add(1, Ordering::Relaxed);
        self.size.fetch_add(size as u64, Ordering::Relaxed);
    }

    pub(crate) fn add_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_channel_stats() {
        let stats = ChannelStats::default();
        stats.add_passed(1024);
        stats.add_passed(16);
        stats.add_failed();
        assert_eq!(
            stats.snapshot(),
            ChannelSnapshot {
                passed: 2,
                size: 1040,
                failed: 1
            }
        )
    }

    #[test]
    fn t_log_stats() {
        let stats = LogStats::default();
        stats.channel(ChannelKind::HighPriority).add_passed(8);
        stats.channel(ChannelKind::Trace).add_failed();
        stats.add_filtered();
        assert_eq!(
            stats.snapshot(),
            LogSnapshot {
                low: ChannelSnapshot::default(),
                high: ChannelSnapshot {
                    passed: 1,
                    size: 8,
                    failed: 0
                },
                trace: ChannelSnapshot {
                    passed: 0,
                    size: 0,
                    failed: 1
                },
                filtered: 1,
            }
        )
    }
}
