/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    LowPriority,
    HighPriority,
    Trace,
}

impl ChannelKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ChannelKind::LowPriority => "low priority",
            ChannelKind::HighPriority => "high priority",
            ChannelKind::Trace => "trace",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("log settings are not initialized")]
    NotInitialized,
    #[error("failed to open log backend {name}: {source}")]
    BackendOpen { name: String, source: io::Error },
    #[error("write to {channel} channel failed: {source}")]
    Write {
        channel: ChannelKind,
        source: io::Error,
    },
    #[error("reopen of {channel} channel failed: {source}")]
    Reopen {
        channel: ChannelKind,
        source: io::Error,
    },
    #[error("recursive use of {channel} channel from its own backend")]
    Reentrant { channel: ChannelKind },
    #[error("invalid priority {0}")]
    InvalidPriority(String),
    #[error("invalid logging level {0}")]
    InvalidLoggingLevel(String),
}
