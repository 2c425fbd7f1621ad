/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

//! Process wide log settings.
//!
//! Nothing is set up implicitly: call [`init`] (or [`install`]) at startup and
//! [`teardown`] when done. Until then [`current`] returns `None`, the
//! statement macros do nothing and the process wide helpers fail with
//! [`LogError::NotInitialized`].

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use log::debug;

use crate::{LogConfig, LogError, LogRouter};

static GLOBAL_SETTINGS: ArcSwapOption<LogSettings> = ArcSwapOption::const_empty();

pub struct LogSettings {
    router: Arc<LogRouter>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings::with_router(Arc::new(LogRouter::new()))
    }
}

impl LogSettings {
    pub fn with_router(router: Arc<LogRouter>) -> Self {
        LogSettings { router }
    }

    pub fn with_config(config: &LogConfig) -> Result<Self, LogError> {
        let router = LogRouter::new();
        config.apply(&router)?;
        Ok(LogSettings::with_router(Arc::new(router)))
    }

    #[inline]
    pub fn router(&self) -> &Arc<LogRouter> {
        &self.router
    }
}

/// Install fresh default settings, replacing any previous ones.
pub fn init() -> Arc<LogSettings> {
    let settings = Arc::new(LogSettings::default());
    install(Arc::clone(&settings));
    settings
}

/// Install the given settings, the previous ones are returned.
pub fn install(settings: Arc<LogSettings>) -> Option<Arc<LogSettings>> {
    let old = GLOBAL_SETTINGS.swap(Some(settings));
    debug!("global log settings installed");
    old
}

#[inline]
pub fn current() -> Option<Arc<LogSettings>> {
    GLOBAL_SETTINGS.load_full()
}

pub(crate) fn require() -> Result<Arc<LogSettings>, LogError> {
    current().ok_or(LogError::NotInitialized)
}

/// Remove the global settings, the removed ones are returned.
pub fn teardown() -> Option<Arc<LogSettings>> {
    GLOBAL_SETTINGS.swap(None)
}
