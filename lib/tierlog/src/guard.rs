/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use crate::{LogRouter, Priority};

/// Restores the previous threshold of a [`LogRouter`] when dropped.
///
/// Created by [`LogRouter::scoped_threshold`].
#[must_use = "dropping the guard immediately restores the previous threshold"]
pub struct ThresholdGuard<'a> {
    router: Option<&'a LogRouter>,
    previous: Priority,
}

impl<'a> ThresholdGuard<'a> {
    pub(crate) const fn new(router: &'a LogRouter, previous: Priority) -> Self {
        ThresholdGuard {
            router: Some(router),
            previous,
        }
    }

    pub const fn previous_threshold(&self) -> Priority {
        self.previous
    }

    /// Keep the scoped threshold as the new baseline.
    pub fn persist(mut self) {
        self.router = None;
    }
}

impl Drop for ThresholdGuard<'_> {
    fn drop(&mut self) {
        if let Some(router) = self.router.take() {
            router.set_threshold(self.previous);
        }
    }
}
