/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::cell::RefCell;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::backend::BoxLogBackend;
use crate::stats::LogStats;
use crate::{ChannelKind, LogError};

thread_local! {
    static ACTIVE_CHANNELS: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks a channel as in use by the current thread.
///
/// A backend that logs back into its own channel gets
/// [`LogError::Reentrant`] instead of a deadlock on the channel mutex.
struct ChannelScope {
    addr: usize,
}

impl ChannelScope {
    fn enter(channel: &Channel) -> Option<Self> {
        let addr = channel as *const Channel as usize;
        let entered = ACTIVE_CHANNELS
            .try_with(|active| {
                let mut active = active.borrow_mut();
                if active.contains(&addr) {
                    false
                } else {
                    active.push(addr);
                    true
                }
            })
            // thread local already destroyed, nothing can be nested any more
            .unwrap_or(true);
        entered.then_some(ChannelScope { addr })
    }
}

impl Drop for ChannelScope {
    fn drop(&mut self) {
        let _ = ACTIVE_CHANNELS.try_with(|active| {
            active.borrow_mut().retain(|addr| *addr != self.addr);
        });
    }
}

/// One output path of the router, bound to exactly one backend.
///
/// Writes are serialized by the mutex, so the bytes of two entries never
/// interleave inside the backend. The mutex is not reentrant, nested writes
/// from the backend itself are rejected.
pub(crate) struct Channel {
    kind: ChannelKind,
    backend: Mutex<BoxLogBackend>,
}

impl Channel {
    pub(crate) fn new(kind: ChannelKind, backend: BoxLogBackend) -> Self {
        Channel {
            kind,
            backend: Mutex::new(backend),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoxLogBackend> {
        // a panic inside a backend leaves nothing half updated on our side
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self, data: &[u8], stats: &LogStats) -> Result<(), LogError> {
        let stats = stats.channel(self.kind);
        let Some(_scope) = ChannelScope::enter(self) else {
            stats.add_failed();
            return Err(LogError::Reentrant { channel: self.kind });
        };
        match self.lock().write_data(data) {
            Ok(_) => {
                stats.add_passed(data.len());
                Ok(())
            }
            Err(e) => {
                stats.add_failed();
                Err(LogError::Write {
                    channel: self.kind,
                    source: e,
                })
            }
        }
    }

    pub(crate) fn reopen(&self) -> Result<(), LogError> {
        let Some(_scope) = ChannelScope::enter(self) else {
            return Err(LogError::Reentrant { channel: self.kind });
        };
        self.lock().reopen().map_err(|e| LogError::Reopen {
            channel: self.kind,
            source: e,
        })
    }
}
